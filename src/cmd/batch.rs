//! Batch command - take-home pay for every salary in a CSV file

use super::{read_input, write_csv, PayrollRecord};
use crate::money::parse_amount;
use crate::tax::{payroll_from_annual_salary, TaxYear};
use clap::Args;
use paye_derive::CsvSchema;
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::PathBuf;

/// Column description generated by `#[derive(CsvSchema)]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// One row of batch input
#[derive(Debug, Deserialize, JsonSchema, CsvSchema)]
pub struct SalaryInput {
    /// Tax year, e.g. 2024/25 (defaults to --year or the latest year)
    #[serde(default)]
    pub year: Option<String>,
    /// Gross annual salary in GBP; currency symbols and separators are ignored
    pub gross_annual: String,
}

#[derive(Args, Debug)]
pub struct BatchCommand {
    /// CSV file of salaries (use "-" for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Tax year for rows that do not give one
    #[arg(short, long)]
    year: Option<TaxYear>,

    /// Output as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

impl BatchCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let data = read_input(&self.input)?;
        let default_year = self.year.unwrap_or_else(TaxYear::latest);

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut records = Vec::new();
        let mut failed = 0usize;
        for (index, row) in rdr.deserialize::<SalaryInput>().enumerate() {
            // Header is line 1
            let line = index + 2;
            match row
                .map_err(anyhow::Error::from)
                .and_then(|input| to_record(&input, default_year))
            {
                Ok(record) => records.push(record),
                Err(err) => {
                    log::warn!("Skipping line {}: {}", line, err);
                    failed += 1;
                }
            }
        }
        log::info!("Calculated {} salaries ({} skipped)", records.len(), failed);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else {
            write_csv(&records)?;
        }

        if failed > 0 {
            anyhow::bail!("{} row(s) could not be processed", failed);
        }
        Ok(())
    }
}

fn to_record(input: &SalaryInput, default_year: TaxYear) -> anyhow::Result<PayrollRecord> {
    let year = match input.year.as_deref() {
        Some(year) if !year.trim().is_empty() => year.parse::<TaxYear>()?,
        _ => default_year,
    };
    let gross = parse_amount(&input.gross_annual)?;
    Ok(PayrollRecord::from(&payroll_from_annual_salary(year, gross)))
}
