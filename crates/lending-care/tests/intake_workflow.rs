use std::sync::Arc;

use chrono::NaiveDateTime;
use tempfile::tempdir;

use lending_care::workflows::intake::{
    BranchService, BranchServiceIntake, ContactUpdateIntake, CsvLedger, EligibilityConfig,
    EligibilityIntake, IntakeError, IntakeService, IntakeViolation, BRANCH_CONNECT_LOG,
    CONTACT_UPDATE_LOG, ELIGIBILITY_LOG, TIMESTAMP_FORMAT,
};

fn eligibility_intake(name: &str, monthly_income: u64) -> EligibilityIntake {
    EligibilityIntake {
        name: name.to_string(),
        mobile: "9876543210".to_string(),
        address: "14 Lake View Road, Chennai".to_string(),
        monthly_income,
        monthly_obligation: 20_000,
        age: 30,
        product: "Home Loan".to_string(),
    }
}

#[test]
fn intake_submissions_round_trip_through_csv_logs() {
    let dir = tempdir().expect("temp dir");
    let ledger = Arc::new(CsvLedger::new(dir.path()));
    let service = IntakeService::new(ledger.clone(), EligibilityConfig::default());

    for (index, income) in [60_000u64, 80_000, 100_000].iter().enumerate() {
        service
            .check_eligibility(eligibility_intake(&format!("applicant-{index}"), *income))
            .expect("eligible submission");
    }

    service
        .register_branch_service(BranchServiceIntake {
            name: "Arjun Pillai".to_string(),
            account_number: "HL00412233".to_string(),
            branch_name: "Adyar".to_string(),
            mobile: "9000011122".to_string(),
            requested_service: BranchService::AmortSchedule,
        })
        .expect("valid branch request");

    service
        .register_contact_update(ContactUpdateIntake {
            name: "Arjun Pillai".to_string(),
            account_number: "HL00412233".to_string(),
            mobile: "9000011122".to_string(),
            new_address: None,
            new_email: Some("arjun@example.in".to_string()),
        })
        .expect("valid contact update");

    let eligibility = ledger
        .snapshot(ELIGIBILITY_LOG)
        .expect("snapshot")
        .expect("eligibility log exists");
    assert_eq!(
        eligibility.columns,
        vec![
            "Name",
            "Mobile",
            "Address",
            "Monthly Income",
            "Monthly Obligation",
            "Age",
            "Product Type",
            "Eligible Loan",
            "Tenure",
            "Timestamp",
        ]
    );
    assert_eq!(eligibility.rows.len(), 3);
    for (index, row) in eligibility.rows.iter().enumerate() {
        assert_eq!(row[0], format!("applicant-{index}"));
        NaiveDateTime::parse_from_str(&row[9], TIMESTAMP_FORMAT).expect("timestamp parses");
    }
    // golden check for the third applicant, straight off the durable log
    assert_eq!(eligibility.rows[2][7], "5790468");
    assert_eq!(eligibility.rows[2][8], "25");

    let branch = ledger
        .snapshot(BRANCH_CONNECT_LOG)
        .expect("snapshot")
        .expect("branch log exists");
    assert_eq!(branch.rows.len(), 1);
    assert_eq!(branch.rows[0][4], "AMORT Schedule");

    let contact = ledger
        .snapshot(CONTACT_UPDATE_LOG)
        .expect("snapshot")
        .expect("contact log exists");
    assert_eq!(contact.rows.len(), 1);
    assert_eq!(contact.rows[0][4], "arjun@example.in");
}

#[test]
fn rejected_submission_leaves_no_log_behind() {
    let dir = tempdir().expect("temp dir");
    let ledger = Arc::new(CsvLedger::new(dir.path()));
    let service = IntakeService::new(ledger.clone(), EligibilityConfig::default());

    let mut intake = eligibility_intake("retiree", 80_000);
    intake.age = 65;

    match service.check_eligibility(intake) {
        Err(IntakeError::Validation(IntakeViolation::AgeOutOfRange { age: 65, .. })) => {}
        other => panic!("expected age rejection, got {other:?}"),
    }
    assert!(ledger
        .snapshot(ELIGIBILITY_LOG)
        .expect("snapshot")
        .is_none());
}

#[test]
fn appends_survive_service_restarts() {
    let dir = tempdir().expect("temp dir");

    {
        let ledger = Arc::new(CsvLedger::new(dir.path()));
        let service = IntakeService::new(ledger, EligibilityConfig::default());
        service
            .check_eligibility(eligibility_intake("first-session", 75_000))
            .expect("eligible submission");
    }

    let ledger = Arc::new(CsvLedger::new(dir.path()));
    let service = IntakeService::new(ledger.clone(), EligibilityConfig::default());
    service
        .check_eligibility(eligibility_intake("second-session", 85_000))
        .expect("eligible submission");

    let snapshot = ledger
        .snapshot(ELIGIBILITY_LOG)
        .expect("snapshot")
        .expect("log exists");
    assert_eq!(snapshot.rows.len(), 2);
    assert_eq!(snapshot.rows[0][0], "first-session");
    assert_eq!(snapshot.rows[1][0], "second-session");
}
