//! Compare command - one salary across every supported tax year

use super::{print_notes, write_csv, PayrollRecord};
use crate::money::parse_amount;
use crate::tax::{payroll_from_annual_salary, PayrollResult, TaxYear};
use clap::Args;
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table,
};

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// Gross annual salary in GBP (e.g. 50000 or "£50,000")
    #[arg(short, long, value_parser = parse_amount, allow_hyphen_values = true)]
    salary: Decimal,

    /// Output as JSON instead of formatted table
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let results: Vec<PayrollResult> = TaxYear::ALL
            .into_iter()
            .map(|year| payroll_from_annual_salary(year, self.salary))
            .collect();
        let records: Vec<PayrollRecord> = results.iter().map(PayrollRecord::from).collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&records)?);
        } else if self.csv {
            write_csv(&records)?;
        } else {
            println!("{}", records_table(&records));
            println!();
            print_notes(&results);
        }
        Ok(())
    }
}

/// Table with the tax year left-aligned and the amount columns right-aligned
fn records_table(records: &[PayrollRecord]) -> String {
    Table::new(records)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}
