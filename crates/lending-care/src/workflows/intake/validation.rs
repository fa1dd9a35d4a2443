use super::domain::{
    BranchServiceIntake, BranchServiceRequest, ContactUpdateIntake, ContactUpdateRequest,
    EligibilityCase, EligibilityIntake, EligibilityRequest, LoanProduct, MobileNumber,
};
use super::eligibility::EligibilityConfig;

/// Validation errors raised before any computation or persistence.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("mobile number must be exactly 10 digits")]
    InvalidMobile,
    #[error("unknown loan product '{0}'")]
    UnknownProduct(String),
    #[error("applicant age {age} is outside the serviceable range {min}-{max}")]
    AgeOutOfRange { age: u8, min: u8, max: u8 },
    #[error("monthly income must be greater than zero")]
    NonPositiveIncome,
    #[error("contact update must supply a new address or a new e-mail")]
    EmptyContactUpdate,
}

const DEFAULT_MINIMUM_AGE: u8 = 18;
const DEFAULT_MAXIMUM_AGE: u8 = 64;

/// Age window backing intake validation. Tenures must amortize before the
/// retirement age, so the maximum serviceable age sits one year below it.
#[derive(Debug, Clone)]
pub struct IntakePolicy {
    minimum_age: u8,
    maximum_age: u8,
}

impl IntakePolicy {
    pub fn new(minimum_age: u8, maximum_age: u8) -> Self {
        if minimum_age == 0 || maximum_age < minimum_age {
            return Self::default();
        }

        Self {
            minimum_age,
            maximum_age,
        }
    }

    pub fn minimum_age(&self) -> u8 {
        self.minimum_age
    }

    pub fn maximum_age(&self) -> u8 {
        self.maximum_age
    }
}

impl Default for IntakePolicy {
    fn default() -> Self {
        Self {
            minimum_age: DEFAULT_MINIMUM_AGE,
            maximum_age: DEFAULT_MAXIMUM_AGE,
        }
    }
}

impl From<&EligibilityConfig> for IntakePolicy {
    fn from(config: &EligibilityConfig) -> Self {
        Self::new(
            DEFAULT_MINIMUM_AGE,
            config.retirement_age.saturating_sub(1),
        )
    }
}

/// Guard responsible for producing validated intake requests.
///
/// Every submission passes through here before the engine or the ledger
/// sees it; a rejected submission leaves no record behind.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard {
    policy: IntakePolicy,
}

impl IntakeGuard {
    pub fn with_policy(policy: IntakePolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &EligibilityConfig) -> Self {
        Self::with_policy(IntakePolicy::from(config))
    }

    pub fn policy(&self) -> &IntakePolicy {
        &self.policy
    }

    /// Convert a raw submission into a sanitized eligibility case.
    pub fn eligibility_case(
        &self,
        intake: EligibilityIntake,
    ) -> Result<EligibilityCase, IntakeViolation> {
        let mobile = parse_mobile(&intake.mobile)?;
        let product = LoanProduct::parse_label(&intake.product)
            .ok_or_else(|| IntakeViolation::UnknownProduct(intake.product.clone()))?;

        if intake.age < self.policy.minimum_age || intake.age > self.policy.maximum_age {
            return Err(IntakeViolation::AgeOutOfRange {
                age: intake.age,
                min: self.policy.minimum_age,
                max: self.policy.maximum_age,
            });
        }

        if intake.monthly_income == 0 {
            return Err(IntakeViolation::NonPositiveIncome);
        }

        Ok(EligibilityCase {
            name: intake.name,
            mobile,
            address: intake.address,
            request: EligibilityRequest {
                monthly_income: intake.monthly_income,
                monthly_obligation: intake.monthly_obligation,
                age: intake.age,
                product,
            },
        })
    }

    /// Validate a branch service submission.
    pub fn branch_request(
        &self,
        intake: BranchServiceIntake,
    ) -> Result<BranchServiceRequest, IntakeViolation> {
        let mobile = parse_mobile(&intake.mobile)?;

        Ok(BranchServiceRequest {
            name: intake.name,
            account_number: intake.account_number,
            branch_name: intake.branch_name,
            mobile,
            requested_service: intake.requested_service,
        })
    }

    /// Validate a contact update; an update changing nothing is rejected.
    pub fn contact_update(
        &self,
        intake: ContactUpdateIntake,
    ) -> Result<ContactUpdateRequest, IntakeViolation> {
        let mobile = parse_mobile(&intake.mobile)?;
        let new_address = normalize(intake.new_address);
        let new_email = normalize(intake.new_email);

        if new_address.is_none() && new_email.is_none() {
            return Err(IntakeViolation::EmptyContactUpdate);
        }

        Ok(ContactUpdateRequest {
            name: intake.name,
            account_number: intake.account_number,
            mobile,
            new_address,
            new_email,
        })
    }
}

fn parse_mobile(raw: &str) -> Result<MobileNumber, IntakeViolation> {
    MobileNumber::parse(raw).ok_or(IntakeViolation::InvalidMobile)
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
