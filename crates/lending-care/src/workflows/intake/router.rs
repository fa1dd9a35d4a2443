use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{BranchServiceIntake, ContactUpdateIntake, EligibilityIntake};
use super::eligibility::{EligibilityBreakdown, EligibilityOutcome};
use super::ledger::RecordLedger;
use super::service::{IntakeError, IntakeService};

/// Router builder exposing HTTP endpoints for the intake workflows.
pub fn intake_router<L>(service: Arc<IntakeService<L>>) -> Router
where
    L: RecordLedger + 'static,
{
    Router::new()
        .route("/api/v1/intake/eligibility", post(eligibility_handler::<L>))
        .route(
            "/api/v1/intake/branch-services",
            post(branch_service_handler::<L>),
        )
        .route(
            "/api/v1/intake/contact-updates",
            post(contact_update_handler::<L>),
        )
        .with_state(service)
}

/// Response view mirroring what the intake form displays to the customer.
#[derive(Debug, Serialize)]
pub struct EligibilityView {
    pub eligible_loan_amount: i64,
    pub tenure_years: u8,
    pub currency: &'static str,
    pub valuation_note: &'static str,
    pub breakdown: EligibilityBreakdown,
}

impl From<EligibilityOutcome> for EligibilityView {
    fn from(outcome: EligibilityOutcome) -> Self {
        Self {
            eligible_loan_amount: outcome.eligible_amount,
            tenure_years: outcome.tenure_years,
            currency: "INR",
            valuation_note: "Final loan amount subject to legal and technical valuation",
            breakdown: outcome.breakdown,
        }
    }
}

pub(crate) async fn eligibility_handler<L>(
    State(service): State<Arc<IntakeService<L>>>,
    Json(intake): Json<EligibilityIntake>,
) -> Response
where
    L: RecordLedger + 'static,
{
    match service.check_eligibility(intake) {
        Ok(outcome) => (StatusCode::OK, Json(EligibilityView::from(outcome))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn branch_service_handler<L>(
    State(service): State<Arc<IntakeService<L>>>,
    Json(intake): Json<BranchServiceIntake>,
) -> Response
where
    L: RecordLedger + 'static,
{
    match service.register_branch_service(intake) {
        Ok(request) => {
            let payload = json!({
                "status": "registered",
                "requested_service": request.requested_service.label(),
                "message": "A branch support officer will contact you shortly.",
            });
            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn contact_update_handler<L>(
    State(service): State<Arc<IntakeService<L>>>,
    Json(intake): Json<ContactUpdateIntake>,
) -> Response
where
    L: RecordLedger + 'static,
{
    match service.register_contact_update(intake) {
        Ok(update) => {
            let payload = json!({
                "status": "registered",
                "account_number": update.account_number,
            });
            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: IntakeError) -> Response {
    match error {
        IntakeError::Validation(violation) => {
            let payload = json!({ "error": violation.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        IntakeError::Ledger(failure) => {
            let payload = json!({ "error": failure.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
