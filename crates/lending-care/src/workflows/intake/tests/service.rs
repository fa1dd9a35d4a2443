use std::sync::Arc;

use super::common::*;
use crate::workflows::intake::eligibility::EligibilityConfig;
use crate::workflows::intake::ledger::TIMESTAMP_COLUMN;
use crate::workflows::intake::service::{
    IntakeError, IntakeService, BRANCH_CONNECT_LOG, CONTACT_UPDATE_LOG, ELIGIBILITY_LOG,
};
use crate::workflows::intake::validation::IntakeViolation;

#[test]
fn eligibility_check_persists_inputs_and_outputs() {
    let (service, ledger) = build_service();

    let outcome = service
        .check_eligibility(eligibility_intake())
        .expect("eligible submission");
    assert_eq!(outcome.eligible_amount, 5_790_468);
    assert_eq!(outcome.tenure_years, 25);

    let appended = ledger.appended();
    assert_eq!(appended.len(), 1);
    let (log, record) = &appended[0];
    assert_eq!(log, ELIGIBILITY_LOG);
    assert_eq!(record.value("Name"), Some("Meera Krishnan"));
    assert_eq!(record.value("Mobile"), Some("9876543210"));
    assert_eq!(record.value("Monthly Income"), Some("100000"));
    assert_eq!(record.value("Monthly Obligation"), Some("20000"));
    assert_eq!(record.value("Age"), Some("30"));
    assert_eq!(record.value("Product Type"), Some("Home Loan"));
    assert_eq!(record.value("Eligible Loan"), Some("5790468"));
    assert_eq!(record.value("Tenure"), Some("25"));
    assert!(record.value(TIMESTAMP_COLUMN).is_some());
}

#[test]
fn rejected_submission_writes_nothing() {
    let (service, ledger) = build_service();

    let mut intake = eligibility_intake();
    intake.mobile = "12345".to_string();

    match service.check_eligibility(intake) {
        Err(IntakeError::Validation(IntakeViolation::InvalidMobile)) => {}
        other => panic!("expected validation rejection, got {other:?}"),
    }
    assert!(ledger.appended().is_empty());
}

#[test]
fn branch_request_lands_in_its_own_log() {
    let (service, ledger) = build_service();

    service
        .register_branch_service(branch_intake())
        .expect("valid request");

    let appended = ledger.appended();
    assert_eq!(appended.len(), 1);
    let (log, record) = &appended[0];
    assert_eq!(log, BRANCH_CONNECT_LOG);
    assert_eq!(record.value("Loan Account Number"), Some("HL00412233"));
    assert_eq!(record.value("Branch Name"), Some("Adyar"));
    assert_eq!(
        record.value("Requested Service"),
        Some("Statement of Accounts")
    );
}

#[test]
fn contact_update_lands_in_its_own_log() {
    let (service, ledger) = build_service();

    service
        .register_contact_update(contact_intake())
        .expect("valid update");

    let appended = ledger.appended();
    assert_eq!(appended.len(), 1);
    let (log, record) = &appended[0];
    assert_eq!(log, CONTACT_UPDATE_LOG);
    assert_eq!(record.value("New Address"), Some("2F Marina Enclave, Chennai"));
    assert_eq!(record.value("New Email"), Some(""));
}

#[test]
fn ledger_failure_is_not_masked_as_success() {
    let service = IntakeService::new(Arc::new(FailingLedger), EligibilityConfig::default());

    match service.check_eligibility(eligibility_intake()) {
        Err(IntakeError::Ledger(_)) => {}
        other => panic!("expected ledger failure, got {other:?}"),
    }
}
