use std::sync::Arc;

use super::domain::{
    BranchServiceIntake, BranchServiceRequest, ContactUpdateIntake, ContactUpdateRequest,
    EligibilityIntake,
};
use super::eligibility::{EligibilityConfig, EligibilityEngine, EligibilityOutcome};
use super::ledger::{LedgerError, LedgerRecord, RecordLedger};
use super::validation::{IntakeGuard, IntakeViolation};

/// Durable log fed by eligibility checks.
pub const ELIGIBILITY_LOG: &str = "loan_eligibility_data";
/// Durable log fed by branch service requests.
pub const BRANCH_CONNECT_LOG: &str = "branch_connect_data";
/// Durable log fed by contact updates.
pub const CONTACT_UPDATE_LOG: &str = "contact_update_data";

/// Service composing the intake guard, eligibility engine, and ledger.
///
/// Each accepted submission is durable before the caller sees success;
/// a rejected submission never reaches the ledger.
pub struct IntakeService<L> {
    guard: IntakeGuard,
    engine: EligibilityEngine,
    ledger: Arc<L>,
}

impl<L> IntakeService<L>
where
    L: RecordLedger + 'static,
{
    pub fn new(ledger: Arc<L>, config: EligibilityConfig) -> Self {
        let guard = IntakeGuard::from_config(&config);
        Self {
            guard,
            engine: EligibilityEngine::new(config),
            ledger,
        }
    }

    pub fn guard(&self) -> &IntakeGuard {
        &self.guard
    }

    /// Validate a submission, compute eligibility, and persist the check
    /// alongside its inputs.
    pub fn check_eligibility(
        &self,
        intake: EligibilityIntake,
    ) -> Result<EligibilityOutcome, IntakeError> {
        let case = self.guard.eligibility_case(intake)?;
        let outcome = self.engine.assess(&case.request);

        let record = LedgerRecord::new()
            .field("Name", case.name)
            .field("Mobile", case.mobile.as_str())
            .field("Address", case.address)
            .field("Monthly Income", case.request.monthly_income.to_string())
            .field(
                "Monthly Obligation",
                case.request.monthly_obligation.to_string(),
            )
            .field("Age", case.request.age.to_string())
            .field("Product Type", case.request.product.label())
            .field("Eligible Loan", outcome.eligible_amount.to_string())
            .field("Tenure", outcome.tenure_years.to_string());
        self.ledger.append(ELIGIBILITY_LOG, record)?;

        Ok(outcome)
    }

    /// Validate and persist a branch service request.
    pub fn register_branch_service(
        &self,
        intake: BranchServiceIntake,
    ) -> Result<BranchServiceRequest, IntakeError> {
        let request = self.guard.branch_request(intake)?;

        let record = LedgerRecord::new()
            .field("Name", request.name.clone())
            .field("Loan Account Number", request.account_number.clone())
            .field("Branch Name", request.branch_name.clone())
            .field("Mobile", request.mobile.as_str())
            .field("Requested Service", request.requested_service.label());
        self.ledger.append(BRANCH_CONNECT_LOG, record)?;

        Ok(request)
    }

    /// Validate and persist a contact update.
    pub fn register_contact_update(
        &self,
        intake: ContactUpdateIntake,
    ) -> Result<ContactUpdateRequest, IntakeError> {
        let update = self.guard.contact_update(intake)?;

        let record = LedgerRecord::new()
            .field("Name", update.name.clone())
            .field("Loan Account Number", update.account_number.clone())
            .field("Mobile", update.mobile.as_str())
            .field(
                "New Address",
                update.new_address.clone().unwrap_or_default(),
            )
            .field("New Email", update.new_email.clone().unwrap_or_default());
        self.ledger.append(CONTACT_UPDATE_LOG, record)?;

        Ok(update)
    }
}

/// Error raised by the intake service.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] IntakeViolation),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
