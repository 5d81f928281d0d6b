//! Decode command - inspect a license value offline

use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use crate::domain::license::EXPIRATION_DATE_FORMAT;
use crate::domain::License;

#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// Base64 license value as stored in the property store
    pub value: String,

    /// Reference date for the expiration check (yyyy-MM-dd), defaults to today
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
struct DecodedOutput {
    #[serde(flatten)]
    license: License,
    expired: bool,
}

pub fn run(args: &DecodeArgs) -> anyhow::Result<()> {
    println!("{}", render(args)?);
    Ok(())
}

fn render(args: &DecodeArgs) -> anyhow::Result<String> {
    let today = match &args.today {
        Some(date) => NaiveDate::parse_from_str(date, EXPIRATION_DATE_FORMAT)
            .map_err(|e| anyhow::anyhow!("Invalid --today '{}': {}", date, e))?,
        None => Local::now().date_naive(),
    };

    let license = License::read_base64(&args.value);
    let output = DecodedOutput {
        expired: license.is_expired(today),
        license,
    };

    Ok(serde_json::to_string_pretty(&output)?)
}
