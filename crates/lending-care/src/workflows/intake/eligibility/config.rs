use serde::{Deserialize, Serialize};

/// Product policy backing the eligibility computation.
///
/// The defaults carry the published board rates and tenure caps; they are
/// dials so a repricing can be exercised in tests without touching the
/// rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Age by which every tenure must have fully amortized.
    pub retirement_age: u8,
    /// Tenure cap in years for the secured housing products.
    pub standard_tenure_cap_years: u8,
    /// Tenure cap in years for loans against property.
    pub lap_tenure_cap_years: u8,
    /// Annual interest rates in percent, per product.
    pub home_loan_annual_rate: f64,
    pub plot_loan_annual_rate: f64,
    pub plot_plus_construction_annual_rate: f64,
    pub lap_annual_rate: f64,
    /// Annual-income ceilings (INR) with the FOIR applied at or below
    /// each; boundaries belong to the lower slab.
    pub foir_slabs: [(u64, f64); 3],
    /// FOIR applied above the highest slab ceiling.
    pub top_foir: f64,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            retirement_age: 65,
            standard_tenure_cap_years: 25,
            lap_tenure_cap_years: 15,
            home_loan_annual_rate: 8.85,
            plot_loan_annual_rate: 9.25,
            plot_plus_construction_annual_rate: 8.85,
            lap_annual_rate: 11.25,
            foir_slabs: [(300_000, 0.50), (600_000, 0.55), (1_200_000, 0.60)],
            top_foir: 0.65,
        }
    }
}
