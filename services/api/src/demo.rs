use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use lending_care::config::AppConfig;
use lending_care::error::AppError;
use lending_care::workflows::intake::{
    BranchService, BranchServiceIntake, ContactUpdateIntake, CsvLedger, EligibilityConfig,
    EligibilityIntake, EligibilityOutcome, IntakeError, IntakeService,
};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Applicant full name
    #[arg(long)]
    pub(crate) name: String,
    /// 10-digit mobile number
    #[arg(long)]
    pub(crate) mobile: String,
    /// Postal address
    #[arg(long, default_value = "")]
    pub(crate) address: String,
    /// Gross monthly salary (INR)
    #[arg(long)]
    pub(crate) monthly_income: u64,
    /// Total monthly obligations (INR)
    #[arg(long, default_value_t = 0)]
    pub(crate) monthly_obligation: u64,
    /// Applicant age in completed years
    #[arg(long)]
    pub(crate) age: u8,
    /// Loan product: "Home Loan", "Plot Loan", "Plot Loan + Construction", or "LAP"
    #[arg(long)]
    pub(crate) product: String,
    /// Directory holding the intake logs (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Directory holding the intake logs (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Skip the service-request portion of the demo
    #[arg(long)]
    pub(crate) skip_requests: bool,
}

fn build_service(
    data_dir: Option<PathBuf>,
) -> Result<(IntakeService<CsvLedger>, PathBuf), AppError> {
    let data_dir = match data_dir {
        Some(dir) => dir,
        None => AppConfig::load()?.storage.data_dir,
    };

    let ledger = Arc::new(CsvLedger::new(&data_dir));
    let service = IntakeService::new(ledger, EligibilityConfig::default());
    Ok((service, data_dir))
}

pub(crate) fn run_eligibility_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        name,
        mobile,
        address,
        monthly_income,
        monthly_obligation,
        age,
        product,
        data_dir,
    } = args;

    let (service, data_dir) = build_service(data_dir)?;

    let intake = EligibilityIntake {
        name,
        mobile,
        address,
        monthly_income,
        monthly_obligation,
        age,
        product,
    };

    match service.check_eligibility(intake) {
        Ok(outcome) => {
            render_outcome(&outcome);
            println!(
                "Recorded in {}",
                data_dir.join("loan_eligibility_data.csv").display()
            );
            Ok(())
        }
        Err(IntakeError::Validation(violation)) => {
            println!("Submission rejected: {violation}");
            Ok(())
        }
        Err(other) => Err(AppError::from(other)),
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Customer intake demo");

    let (service, data_dir) = build_service(args.data_dir)?;
    println!("Intake logs: {}", data_dir.display());

    let applicants = [
        ("Meera Krishnan", "9876543210", 100_000u64, 20_000u64, 30u8, "Home Loan"),
        ("Arjun Pillai", "9000011122", 50_000, 10_000, 40, "LAP"),
        ("Divya Nair", "9123456780", 30_000, 5_000, 62, "Home Loan"),
    ];

    println!("\nEligibility checks");
    for (name, mobile, income, obligation, age, product) in applicants {
        let intake = EligibilityIntake {
            name: name.to_string(),
            mobile: mobile.to_string(),
            address: String::new(),
            monthly_income: income,
            monthly_obligation: obligation,
            age,
            product: product.to_string(),
        };

        match service.check_eligibility(intake) {
            Ok(outcome) => println!(
                "- {name} ({product}): INR {} over {} years",
                outcome.eligible_amount, outcome.tenure_years
            ),
            Err(IntakeError::Validation(violation)) => {
                println!("- {name} ({product}): rejected, {violation}")
            }
            Err(other) => return Err(AppError::from(other)),
        }
    }

    // a deliberately bad mobile number shows the guard at work
    let rejected = EligibilityIntake {
        name: "Walk-in enquiry".to_string(),
        mobile: "12345".to_string(),
        address: String::new(),
        monthly_income: 45_000,
        monthly_obligation: 0,
        age: 35,
        product: "Plot Loan".to_string(),
    };
    match service.check_eligibility(rejected) {
        Err(IntakeError::Validation(violation)) => {
            println!("- Walk-in enquiry: rejected, {violation}")
        }
        Ok(_) => println!("- Walk-in enquiry: unexpectedly accepted"),
        Err(other) => return Err(AppError::from(other)),
    }

    if !args.skip_requests {
        println!("\nService requests");

        let branch = service.register_branch_service(BranchServiceIntake {
            name: "Arjun Pillai".to_string(),
            account_number: "HL00412233".to_string(),
            branch_name: "Adyar".to_string(),
            mobile: "9000011122".to_string(),
            requested_service: BranchService::StatementOfAccounts,
        });
        match branch {
            Ok(request) => println!(
                "- Branch request registered: {} for account {}",
                request.requested_service, request.account_number
            ),
            Err(IntakeError::Validation(violation)) => {
                println!("- Branch request rejected: {violation}")
            }
            Err(other) => return Err(AppError::from(other)),
        }

        let contact = service.register_contact_update(ContactUpdateIntake {
            name: "Divya Nair".to_string(),
            account_number: "HL00987001".to_string(),
            mobile: "9123456780".to_string(),
            new_address: None,
            new_email: Some("divya@example.in".to_string()),
        });
        match contact {
            Ok(update) => println!(
                "- Contact update registered for account {}",
                update.account_number
            ),
            Err(IntakeError::Validation(violation)) => {
                println!("- Contact update rejected: {violation}")
            }
            Err(other) => return Err(AppError::from(other)),
        }
    }

    Ok(())
}

fn render_outcome(outcome: &EligibilityOutcome) {
    println!("Eligible loan amount: INR {}", outcome.eligible_amount);
    println!("Tenure: {} years", outcome.tenure_years);

    let breakdown = &outcome.breakdown;
    println!(
        "Net monthly income: INR {} | FOIR {:.2} | eligible EMI INR {:.0}",
        breakdown.net_monthly_income, breakdown.foir, breakdown.eligible_emi
    );
    println!("NOTE: final loan amount subject to legal and technical valuation");
}
