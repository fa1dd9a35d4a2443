//! Customer intake workflows: indicative loan eligibility checks and
//! service-request registration, both recorded into append-only CSV
//! ledgers (one log per record category).
//!
//! The flow is a straight pipeline: the guard validates a raw submission,
//! the engine computes eligibility where the action calls for it, and the
//! ledger makes the record durable before the caller sees success.

pub mod domain;
pub mod eligibility;
pub mod ledger;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    BranchService, BranchServiceIntake, BranchServiceRequest, ContactUpdateIntake,
    ContactUpdateRequest, EligibilityCase, EligibilityIntake, EligibilityRequest, LoanProduct,
    MobileNumber,
};
pub use eligibility::{
    EligibilityBreakdown, EligibilityConfig, EligibilityEngine, EligibilityOutcome,
};
pub use ledger::{
    CsvLedger, LedgerError, LedgerRecord, LedgerSnapshot, RecordLedger, TIMESTAMP_COLUMN,
    TIMESTAMP_FORMAT,
};
pub use router::{intake_router, EligibilityView};
pub use service::{
    IntakeError, IntakeService, BRANCH_CONNECT_LOG, CONTACT_UPDATE_LOG, ELIGIBILITY_LOG,
};
pub use validation::{IntakeGuard, IntakePolicy, IntakeViolation};
