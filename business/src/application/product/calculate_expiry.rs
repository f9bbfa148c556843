use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::logger::Logger;
use crate::domain::product::calculator::expiry_from_production;
use crate::domain::product::errors::CalculationError;
use crate::domain::product::use_cases::calculate_expiry::{
    CalculateExpiryParams, CalculateExpiryUseCase,
};

pub struct CalculateExpiryUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

impl CalculateExpiryUseCase for CalculateExpiryUseCaseImpl {
    fn execute(&self, params: CalculateExpiryParams) -> Result<NaiveDate, CalculationError> {
        let expiry = expiry_from_production(params.production_date, params.shelf_life_months)
            .inspect_err(|e| {
                self.logger
                    .debug(&format!("Expiry calculation rejected: {:?}", e))
            })?;

        self.logger.debug(&format!(
            "Expiry for {} months of shelf life: {}",
            params.shelf_life_months, expiry
        ));
        Ok(expiry)
    }
}
