use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::auth::dto::{LoginRequest, RegisterRequest, SessionResponse, UserResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
        }
    }
}

/// Account API
///
/// Registration, login and identity of the current session.
#[OpenApi]
impl AuthApi {
    /// Register a new account
    ///
    /// Self-service accounts always get the `user` role.
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterRequest>) -> RegisterResponse {
        let params = RegisterUserParams {
            username: body.0.username,
            name: body.0.name,
            password: body.0.password,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    409 => RegisterResponse::Conflict(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in
    ///
    /// Exchanges username and password for a bearer session token.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            username: body.0.username,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(session) => LoginResponse::Ok(Json(session.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Current user
    ///
    /// Returns the identity carried by the bearer token.
    #[oai(path = "/auth/me", method = "get", tag = "ApiTags::Auth")]
    async fn me(&self, auth: SessionBearer) -> Json<UserResponse> {
        Json(auth.0.into())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
