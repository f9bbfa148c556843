use std::sync::Arc;

use chrono::Local;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::category::model::CategoryId;
use business::domain::product::use_cases::calculate_expiry::{
    CalculateExpiryParams, CalculateExpiryUseCase,
};
use business::domain::product::use_cases::calculate_withdrawal::{
    CalculateWithdrawalParams, CalculateWithdrawalUseCase,
};
use business::domain::shared::dates::to_local_day;

use crate::api::calculator::dto::{
    ExpiryRequest, ExpiryResponse, WithdrawalRequest, WithdrawalResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CalculatorApi {
    expiry_use_case: Arc<dyn CalculateExpiryUseCase>,
    withdrawal_use_case: Arc<dyn CalculateWithdrawalUseCase>,
}

impl CalculatorApi {
    pub fn new(
        expiry_use_case: Arc<dyn CalculateExpiryUseCase>,
        withdrawal_use_case: Arc<dyn CalculateWithdrawalUseCase>,
    ) -> Self {
        Self {
            expiry_use_case,
            withdrawal_use_case,
        }
    }
}

/// Calculator API
///
/// Stateless date computations; nothing is stored.
#[OpenApi]
impl CalculatorApi {
    /// Expiry date from production date
    ///
    /// Adds the shelf life in months, clamping to the end of shorter months.
    #[oai(path = "/calculator/expiry", method = "post", tag = "ApiTags::Calculator")]
    async fn expiry(&self, body: Json<ExpiryRequest>) -> CalculateExpiryResponse {
        let params = CalculateExpiryParams {
            production_date: body.0.production_date,
            shelf_life_months: body.0.shelf_life_months,
        };

        match self.expiry_use_case.execute(params) {
            Ok(expiry_date) => CalculateExpiryResponse::Ok(Json(ExpiryResponse { expiry_date })),
            Err(err) => {
                let (_, json) = err.into_error_response();
                CalculateExpiryResponse::BadRequest(json)
            }
        }
    }

    /// Withdrawal deadline from expiry date
    ///
    /// Subtracts the category lead time and classifies the deadline against today.
    #[oai(
        path = "/calculator/withdrawal",
        method = "post",
        tag = "ApiTags::Calculator"
    )]
    async fn withdrawal(&self, body: Json<WithdrawalRequest>) -> CalculateWithdrawalResponse {
        let params = CalculateWithdrawalParams {
            expiry_date: body.0.expiry_date,
            category: CategoryId::new(body.0.category),
            today: to_local_day(&Local::now()),
        };

        match self.withdrawal_use_case.execute(params) {
            Ok(schedule) => CalculateWithdrawalResponse::Ok(Json(schedule.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                CalculateWithdrawalResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CalculateExpiryResponse {
    #[oai(status = 200)]
    Ok(Json<ExpiryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CalculateWithdrawalResponse {
    #[oai(status = 200)]
    Ok(Json<WithdrawalResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
