use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::Local;
use serde_json::Value;

use crate::workflows::intake::domain::{
    BranchService, BranchServiceIntake, ContactUpdateIntake, EligibilityIntake,
};
use crate::workflows::intake::eligibility::{EligibilityConfig, EligibilityEngine};
use crate::workflows::intake::ledger::{
    LedgerError, LedgerRecord, RecordLedger, TIMESTAMP_COLUMN, TIMESTAMP_FORMAT,
};
use crate::workflows::intake::router::intake_router;
use crate::workflows::intake::service::IntakeService;
use crate::workflows::intake::validation::IntakeGuard;

pub(super) fn eligibility_intake() -> EligibilityIntake {
    EligibilityIntake {
        name: "Meera Krishnan".to_string(),
        mobile: "9876543210".to_string(),
        address: "14 Lake View Road, Chennai".to_string(),
        monthly_income: 100_000,
        monthly_obligation: 20_000,
        age: 30,
        product: "Home Loan".to_string(),
    }
}

pub(super) fn branch_intake() -> BranchServiceIntake {
    BranchServiceIntake {
        name: "Arjun Pillai".to_string(),
        account_number: "HL00412233".to_string(),
        branch_name: "Adyar".to_string(),
        mobile: "9000011122".to_string(),
        requested_service: BranchService::StatementOfAccounts,
    }
}

pub(super) fn contact_intake() -> ContactUpdateIntake {
    ContactUpdateIntake {
        name: "Arjun Pillai".to_string(),
        account_number: "HL00412233".to_string(),
        mobile: "9000011122".to_string(),
        new_address: Some("2F Marina Enclave, Chennai".to_string()),
        new_email: None,
    }
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(EligibilityConfig::default())
}

pub(super) fn guard() -> IntakeGuard {
    IntakeGuard::from_config(&EligibilityConfig::default())
}

pub(super) fn build_service() -> (IntakeService<MemoryLedger>, Arc<MemoryLedger>) {
    let ledger = Arc::new(MemoryLedger::default());
    let service = IntakeService::new(ledger.clone(), EligibilityConfig::default());
    (service, ledger)
}

pub(super) fn router_with_memory_ledger() -> (axum::Router, Arc<MemoryLedger>) {
    let (service, ledger) = build_service();
    (intake_router(Arc::new(service)), ledger)
}

#[derive(Default)]
pub(super) struct MemoryLedger {
    appended: Mutex<Vec<(String, LedgerRecord)>>,
}

impl MemoryLedger {
    pub(super) fn appended(&self) -> Vec<(String, LedgerRecord)> {
        self.appended.lock().expect("ledger mutex poisoned").clone()
    }
}

impl RecordLedger for MemoryLedger {
    fn append(&self, log: &str, record: LedgerRecord) -> Result<(), LedgerError> {
        let mut record = record;
        record.set(
            TIMESTAMP_COLUMN.to_string(),
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
        );
        self.appended
            .lock()
            .expect("ledger mutex poisoned")
            .push((log.to_string(), record));
        Ok(())
    }
}

pub(super) struct FailingLedger;

impl RecordLedger for FailingLedger {
    fn append(&self, _log: &str, _record: LedgerRecord) -> Result<(), LedgerError> {
        Err(LedgerError::Open {
            path: "unavailable.csv".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk offline"),
        })
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
