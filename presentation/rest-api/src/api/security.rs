use std::sync::Arc;

use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;

use business::domain::user::model::CurrentUser;
use business::domain::user::services::SessionProvider;

/// Bearer session token issued by `POST /auth/login`.
///
/// The checker resolves the token through the `SessionProvider` registered as
/// route data; missing, expired or forged tokens are answered with 401.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "session_checker")]
pub struct SessionBearer(pub CurrentUser);

async fn session_checker(req: &Request, bearer: Bearer) -> Option<CurrentUser> {
    let Some(sessions) = req.data::<Arc<dyn SessionProvider>>() else {
        tracing::error!("No session provider registered on the route");
        return None;
    };

    let user = sessions.current_user(&bearer.token);
    if user.is_none() {
        tracing::warn!("Rejected bearer token");
    }
    user
}
