use chrono::NaiveDate;

use crate::domain::product::errors::CalculationError;

pub struct CalculateExpiryParams {
    pub production_date: Option<NaiveDate>,
    pub shelf_life_months: i64,
}

pub trait CalculateExpiryUseCase: Send + Sync {
    fn execute(&self, params: CalculateExpiryParams) -> Result<NaiveDate, CalculationError>;
}
