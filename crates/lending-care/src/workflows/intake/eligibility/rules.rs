use super::config::EligibilityConfig;
use super::super::domain::LoanProduct;

pub(crate) fn tenure_years(config: &EligibilityConfig, product: LoanProduct, age: u8) -> u8 {
    let cap = match product {
        LoanProduct::LoanAgainstProperty => config.lap_tenure_cap_years,
        _ => config.standard_tenure_cap_years,
    };

    cap.min(config.retirement_age.saturating_sub(age))
}

pub(crate) fn annual_rate_percent(config: &EligibilityConfig, product: LoanProduct) -> f64 {
    match product {
        LoanProduct::HomeLoan => config.home_loan_annual_rate,
        LoanProduct::PlotLoan => config.plot_loan_annual_rate,
        LoanProduct::PlotLoanPlusConstruction => config.plot_plus_construction_annual_rate,
        LoanProduct::LoanAgainstProperty => config.lap_annual_rate,
    }
}

pub(crate) fn foir(config: &EligibilityConfig, annual_income: u64) -> f64 {
    for (ceiling, ratio) in config.foir_slabs {
        if annual_income <= ceiling {
            return ratio;
        }
    }

    config.top_foir
}

/// Present value of an annuity paying `emi` monthly for `months` at
/// `monthly_rate`. A zero `months` collapses the factor, and the value,
/// to zero.
pub(crate) fn annuity_present_value(emi: f64, monthly_rate: f64, months: u32) -> f64 {
    emi * ((1.0 - (1.0 + monthly_rate).powf(-f64::from(months))) / monthly_rate)
}
