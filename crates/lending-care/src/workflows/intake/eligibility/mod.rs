mod config;
pub(crate) mod rules;

pub use config::EligibilityConfig;

use serde::{Deserialize, Serialize};

use super::domain::{EligibilityRequest, LoanProduct};

/// Stateless engine applying the product policy to an eligibility request.
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Compute the indicative eligible amount and tenure.
    ///
    /// Pure arithmetic over the request: a negative net income flows
    /// through to a negative eligible amount, and a request at retirement
    /// age collapses to a zero tenure and a zero amount. The final amount
    /// is rounded half-to-even.
    pub fn assess(&self, request: &EligibilityRequest) -> EligibilityOutcome {
        let net_monthly_income =
            request.monthly_income as i64 - request.monthly_obligation as i64;
        let annual_income = request.monthly_income * 12;

        let tenure_years = rules::tenure_years(&self.config, request.product, request.age);
        let tenure_months = u32::from(tenure_years) * 12;
        let monthly_rate =
            rules::annual_rate_percent(&self.config, request.product) / 100.0 / 12.0;
        let foir = rules::foir(&self.config, annual_income);
        let eligible_emi = net_monthly_income as f64 * foir;

        let eligible_amount = rules::annuity_present_value(eligible_emi, monthly_rate, tenure_months)
            .round_ties_even() as i64;

        EligibilityOutcome {
            product: request.product,
            eligible_amount,
            tenure_years,
            breakdown: EligibilityBreakdown {
                net_monthly_income,
                annual_income,
                foir,
                monthly_rate,
                eligible_emi,
                tenure_months,
            },
        }
    }
}

/// Outcome of an eligibility assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityOutcome {
    pub product: LoanProduct,
    pub eligible_amount: i64,
    pub tenure_years: u8,
    pub breakdown: EligibilityBreakdown,
}

/// Intermediate figures retained so a computation can be audited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityBreakdown {
    pub net_monthly_income: i64,
    pub annual_income: u64,
    pub foir: f64,
    pub monthly_rate: f64,
    pub eligible_emi: f64,
    pub tenure_months: u32,
}
