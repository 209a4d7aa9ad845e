// ID card MRZ generator
// Missing fields are filled with random placeholders, like the web form does.

use chrono::{Local, NaiveDate};
use clap::Parser;
use log::{debug, info};
use persogen::{processing::Placeholders, MachineReadableZone, MrzError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "persogen", version, about = "Generate the MRZ of a German ID card")]
struct Cli {
    /// Authority code (4 characters, e.g. L01X)
    #[arg(short, long)]
    authority: Option<String>,

    /// Document number (5 characters)
    #[arg(short, long)]
    number: Option<String>,

    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    birth_date: Option<NaiveDate>,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    expiry_date: Option<NaiveDate>,

    /// Issuing date (YYYY-MM-DD)
    #[arg(long)]
    issuing_date: Option<NaiveDate>,

    /// Seed for the placeholder generator
    #[arg(long)]
    seed: Option<u64>,

    /// Print lines and check digits as JSON
    #[arg(long)]
    json: bool,
}

// Trimmed flag value, or the placeholder when the flag is absent or blank
fn field_or(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => {
            debug!("Using placeholder {}", placeholder);
            placeholder.to_string()
        }
    }
}

fn run(cli: &Cli) -> Result<String, MrzError> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = Local::now().date_naive();
    let placeholders = Placeholders::generate(&mut rng, today)?;

    let authority_code = field_or(cli.authority.as_deref(), placeholders.authority_code.as_str());
    let document_number = field_or(cli.number.as_deref(), placeholders.document_number.as_str());
    let birth_date = cli.birth_date.unwrap_or(placeholders.birth_date);
    let expiry_date = cli.expiry_date.unwrap_or(placeholders.expiry_date);
    let issuing_date = cli.issuing_date.unwrap_or(placeholders.issuing_date);

    info!(
        "Composing MRZ for {}{} (born {}, expires {}, issued {})",
        authority_code, document_number, birth_date, expiry_date, issuing_date
    );

    let mrz = MachineReadableZone::new(
        &authority_code,
        &document_number,
        birth_date,
        expiry_date,
        issuing_date,
    )?;

    if cli.json {
        Ok(serde_json::to_string_pretty(&mrz.to_output())?)
    } else {
        Ok(mrz.to_string())
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
