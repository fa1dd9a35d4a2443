use std::fmt;

use serde::{Deserialize, Serialize};

/// Loan products offered on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanProduct {
    #[serde(rename = "Home Loan")]
    HomeLoan,
    #[serde(rename = "Plot Loan")]
    PlotLoan,
    #[serde(rename = "Plot Loan + Construction")]
    PlotLoanPlusConstruction,
    #[serde(rename = "LAP")]
    LoanAgainstProperty,
}

impl LoanProduct {
    pub const ALL: [LoanProduct; 4] = [
        LoanProduct::HomeLoan,
        LoanProduct::PlotLoan,
        LoanProduct::PlotLoanPlusConstruction,
        LoanProduct::LoanAgainstProperty,
    ];

    /// Form label, also the value persisted in the `Product Type` column.
    pub const fn label(self) -> &'static str {
        match self {
            LoanProduct::HomeLoan => "Home Loan",
            LoanProduct::PlotLoan => "Plot Loan",
            LoanProduct::PlotLoanPlusConstruction => "Plot Loan + Construction",
            LoanProduct::LoanAgainstProperty => "LAP",
        }
    }

    /// Parse a form label; `None` for products outside the catalogue.
    pub fn parse_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|product| product.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for LoanProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ten-digit mobile number accepted at the intake boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileNumber(String);

impl MobileNumber {
    pub const DIGITS: usize = 10;

    /// `None` unless the input is exactly ten ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        (raw.len() == Self::DIGITS && raw.bytes().all(|byte| byte.is_ascii_digit()))
            .then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw eligibility submission as collected by the intake form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityIntake {
    pub name: String,
    pub mobile: String,
    #[serde(default)]
    pub address: String,
    pub monthly_income: u64,
    pub monthly_obligation: u64,
    pub age: u8,
    pub product: String,
}

/// Engine inputs after guard validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EligibilityRequest {
    pub monthly_income: u64,
    pub monthly_obligation: u64,
    pub age: u8,
    pub product: LoanProduct,
}

/// Sanitized eligibility case: applicant identity plus the engine inputs.
#[derive(Debug, Clone, Serialize)]
pub struct EligibilityCase {
    pub name: String,
    pub mobile: MobileNumber,
    pub address: String,
    pub request: EligibilityRequest,
}

/// Services a branch support officer can action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BranchService {
    #[serde(rename = "Statement of Accounts")]
    StatementOfAccounts,
    #[serde(rename = "IT Certificate for Tax")]
    ItCertificate,
    #[serde(rename = "Principal Outstanding")]
    PrincipalOutstanding,
    #[serde(rename = "Rate of Interest")]
    RateOfInterest,
    #[serde(rename = "Repricing")]
    Repricing,
    #[serde(rename = "AMORT Schedule")]
    AmortSchedule,
}

impl BranchService {
    pub const fn label(self) -> &'static str {
        match self {
            BranchService::StatementOfAccounts => "Statement of Accounts",
            BranchService::ItCertificate => "IT Certificate for Tax",
            BranchService::PrincipalOutstanding => "Principal Outstanding",
            BranchService::RateOfInterest => "Rate of Interest",
            BranchService::Repricing => "Repricing",
            BranchService::AmortSchedule => "AMORT Schedule",
        }
    }
}

impl fmt::Display for BranchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw branch-services submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchServiceIntake {
    pub name: String,
    pub account_number: String,
    pub branch_name: String,
    pub mobile: String,
    pub requested_service: BranchService,
}

/// Validated branch service request.
#[derive(Debug, Clone, Serialize)]
pub struct BranchServiceRequest {
    pub name: String,
    pub account_number: String,
    pub branch_name: String,
    pub mobile: MobileNumber,
    pub requested_service: BranchService,
}

/// Raw contact-update submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactUpdateIntake {
    pub name: String,
    pub account_number: String,
    pub mobile: String,
    #[serde(default)]
    pub new_address: Option<String>,
    #[serde(default)]
    pub new_email: Option<String>,
}

/// Validated contact update carrying at least one changed field.
#[derive(Debug, Clone, Serialize)]
pub struct ContactUpdateRequest {
    pub name: String,
    pub account_number: String,
    pub mobile: MobileNumber,
    pub new_address: Option<String>,
    pub new_email: Option<String>,
}
