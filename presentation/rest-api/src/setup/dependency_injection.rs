use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::password::Argon2PasswordHasher;
use security::session::JwtSessionProvider;

use business::application::category::get_all::GetCategoriesUseCaseImpl;
use business::application::product::calculate_expiry::CalculateExpiryUseCaseImpl;
use business::application::product::calculate_withdrawal::CalculateWithdrawalUseCaseImpl;
use business::application::product::cleanup::CleanupProductsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_stats::GetProductStatsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::user::ensure_admin::EnsureAdminUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::user::services::{PasswordHasher, SessionProvider};
use business::domain::user::use_cases::ensure_admin::EnsureAdminUseCase;

use crate::api::product::routes::ProductUseCases;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub category_api: crate::api::category::routes::CategoryApi,
    pub calculator_api: crate::api::calculator::routes::CalculatorApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub sessions: Arc<dyn SessionProvider>,
    pub ensure_admin_use_case: Arc<dyn EnsureAdminUseCase>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        let registry = Arc::new(config.schedule.registry.clone());
        let policy = Arc::new(config.schedule.policy.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
        let sessions: Arc<dyn SessionProvider> = Arc::new(JwtSessionProvider::new(
            &config.auth.jwt_secret,
            config.auth.token_ttl,
        ));

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            hasher: hasher.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            hasher: hasher.clone(),
            sessions: sessions.clone(),
            logger: logger.clone(),
        });
        let ensure_admin_use_case = Arc::new(EnsureAdminUseCaseImpl {
            repository: user_repository,
            hasher,
            logger: logger.clone(),
        });

        // Calculator and category use cases
        let categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            registry: registry.clone(),
        });
        let expiry_use_case = Arc::new(CalculateExpiryUseCaseImpl {
            logger: logger.clone(),
        });
        let withdrawal_use_case = Arc::new(CalculateWithdrawalUseCaseImpl {
            registry: registry.clone(),
            policy: policy.clone(),
            logger: logger.clone(),
        });

        // Product use cases
        let product_use_cases = ProductUseCases {
            create: Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                registry: registry.clone(),
                logger: logger.clone(),
            }),
            get_all: Arc::new(GetProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            get_by_id: Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            get_stats: Arc::new(GetProductStatsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            update: Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                registry: registry.clone(),
                logger: logger.clone(),
            }),
            delete: Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            cleanup: Arc::new(CleanupProductsUseCaseImpl {
                repository: product_repository,
                logger,
            }),
        };

        let auth_api = crate::api::auth::routes::AuthApi::new(register_use_case, login_use_case);
        let category_api = crate::api::category::routes::CategoryApi::new(categories_use_case);
        let calculator_api =
            crate::api::calculator::routes::CalculatorApi::new(expiry_use_case, withdrawal_use_case);
        let product_api =
            crate::api::product::routes::ProductApi::new(product_use_cases, registry, policy);

        Ok(Self {
            health_api,
            auth_api,
            category_api,
            calculator_api,
            product_api,
            sessions,
            ensure_admin_use_case,
        })
    }
}
