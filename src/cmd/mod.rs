pub mod batch;
pub mod calc;
pub mod compare;
pub mod schema;
pub mod years;

use crate::money::format_amount;
use crate::tax::{PayrollResult, TaxYear};
use schemars::JsonSchema;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tabled::Tabled;

/// One payroll result as written to tables, CSV and JSON
#[derive(Debug, Clone, Serialize, JsonSchema, Tabled)]
pub struct PayrollRecord {
    /// Tax year, e.g. 2024/25
    #[tabled(rename = "Tax Year")]
    pub year: String,
    /// Gross annual salary (negative input is reported as 0)
    #[tabled(rename = "Gross")]
    pub gross_annual: String,
    #[tabled(rename = "Allowance")]
    pub personal_allowance: String,
    #[tabled(rename = "Taxable")]
    pub taxable_annual: String,
    #[tabled(rename = "Income Tax")]
    pub income_tax_annual: String,
    #[tabled(rename = "NI")]
    pub ni_annual: String,
    #[tabled(rename = "Net")]
    pub net_annual: String,
    #[tabled(rename = "Net Monthly")]
    pub net_monthly: String,
    /// Net pay as a percentage of gross
    #[tabled(rename = "Take Home %")]
    pub take_home_pct: String,
    /// Advisory notes for the tax year, separated by "; "
    #[tabled(skip)]
    pub notes: String,
}

impl From<&PayrollResult> for PayrollRecord {
    fn from(r: &PayrollResult) -> Self {
        PayrollRecord {
            year: r.year.display(),
            gross_annual: format_amount(r.gross_annual),
            personal_allowance: format_amount(r.personal_allowance),
            taxable_annual: format_amount(r.taxable_annual),
            income_tax_annual: format_amount(r.income_tax_annual),
            ni_annual: format_amount(r.ni_annual),
            net_annual: format_amount(r.net_annual),
            net_monthly: format_amount(r.net_monthly),
            take_home_pct: format_amount(r.take_home_pct),
            notes: r.notes.join("; "),
        }
    }
}

/// Write records as CSV to stdout
pub fn write_csv<'a, I>(records: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = &'a PayrollRecord>,
{
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Print each distinct advisory note once, tagged with its years when it
/// does not apply to every result
pub fn print_notes(results: &[PayrollResult]) {
    let mut notes: Vec<(&str, Vec<TaxYear>)> = Vec::new();
    for r in results {
        for &note in r.notes {
            match notes.iter_mut().find(|(n, _)| *n == note) {
                Some((_, years)) => years.push(r.year),
                None => notes.push((note, vec![r.year])),
            }
        }
    }
    if notes.is_empty() {
        return;
    }

    println!("Notes:");
    for (note, years) in notes {
        if years.len() == results.len() {
            println!("  - {}", note);
        } else {
            let years: Vec<String> = years.iter().map(TaxYear::display).collect();
            println!("  - [{}] {}", years.join(", "), note);
        }
    }
}

/// Read a whole input file (or stdin with "-")
pub fn read_input(path: &Path) -> anyhow::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    if path.as_os_str() == "-" {
        let stdin = io::stdin();
        BufReader::new(stdin.lock()).read_to_end(&mut buffer)?;
        if buffer.is_empty() {
            anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
        }
    } else {
        let file = File::open(path)
            .map_err(|e| anyhow::anyhow!("cannot open {}: {}", path.display(), e))?;
        BufReader::new(file).read_to_end(&mut buffer)?;
    }
    log::info!("Read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}
