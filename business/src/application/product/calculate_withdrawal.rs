use std::sync::Arc;

use crate::domain::category::registry::CategoryRegistry;
use crate::domain::logger::Logger;
use crate::domain::product::calculator::{WithdrawalSchedule, withdrawal_schedule};
use crate::domain::product::errors::CalculationError;
use crate::domain::product::urgency::UrgencyPolicy;
use crate::domain::product::use_cases::calculate_withdrawal::{
    CalculateWithdrawalParams, CalculateWithdrawalUseCase,
};

pub struct CalculateWithdrawalUseCaseImpl {
    pub registry: Arc<CategoryRegistry>,
    pub policy: Arc<UrgencyPolicy>,
    pub logger: Arc<dyn Logger>,
}

impl CalculateWithdrawalUseCase for CalculateWithdrawalUseCaseImpl {
    fn execute(
        &self,
        params: CalculateWithdrawalParams,
    ) -> Result<WithdrawalSchedule, CalculationError> {
        let schedule = withdrawal_schedule(
            params.expiry_date,
            &params.category,
            params.today,
            &self.registry,
            &self.policy,
        )?;

        self.logger.debug(&format!(
            "Withdrawal deadline for {} ({}): {} [{}]",
            schedule.expiry_date, schedule.category, schedule.deadline, schedule.urgency
        ));
        Ok(schedule)
    }
}
