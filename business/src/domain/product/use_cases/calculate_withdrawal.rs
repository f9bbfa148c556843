use chrono::NaiveDate;

use crate::domain::category::model::CategoryId;
use crate::domain::product::calculator::WithdrawalSchedule;
use crate::domain::product::errors::CalculationError;

pub struct CalculateWithdrawalParams {
    pub expiry_date: Option<NaiveDate>,
    pub category: CategoryId,
    pub today: NaiveDate,
}

pub trait CalculateWithdrawalUseCase: Send + Sync {
    fn execute(
        &self,
        params: CalculateWithdrawalParams,
    ) -> Result<WithdrawalSchedule, CalculationError>;
}
