use clap::Parser;
use log::info;
use persogen::models::{ValidationIssueType, VerificationResult};
use persogen::{MrzError, MrzVerifier};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "mrz_check", about = "Verify the check digits of an ID card MRZ")]
struct Cli {
    /// File holding the three MRZ lines (stdin when omitted)
    input: Option<PathBuf>,

    /// Print the verification result as JSON
    #[arg(long)]
    json: bool,
}

fn print_report(result: &VerificationResult) {
    println!("MRZ VERIFICATION REPORT");
    println!("-----------------------");

    let status = |valid: bool| if valid { "PASSED" } else { "FAILED" };
    println!("  1. Structure: {}", status(result.structure_valid));
    println!("  2. Document number check digit: {}", status(result.document_id_check_valid));
    println!("  3. Birth date check digit: {}", status(result.birth_date_check_valid));
    println!("  4. Expiry date check digit: {}", status(result.expiry_date_check_valid));
    println!("  5. Composite check digit: {}", status(result.composite_check_valid));

    if !result.issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &result.issues {
            println!(
                "  - [{}] {}",
                match issue.issue_type {
                    ValidationIssueType::Structure => "STRUCTURE",
                    ValidationIssueType::Field => "FIELD",
                    ValidationIssueType::Date => "DATE",
                    ValidationIssueType::CheckDigit => "CHECK DIGIT",
                },
                issue.message
            );
        }
    }

    println!(
        "\nMRZ is {}",
        if result.is_valid { "VALID" } else { "INVALID" }
    );
}

fn run(cli: &Cli) -> Result<bool, MrzError> {
    let text = match &cli.input {
        Some(path) => {
            info!("Reading MRZ from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = MrzVerifier::new().verify(&text)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }
    Ok(result.is_valid)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error verifying MRZ: {}", err);
            process::exit(2);
        }
    }
}
