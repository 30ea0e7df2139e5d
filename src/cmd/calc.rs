//! Calc command - take-home pay for one salary in one tax year

use super::{print_notes, PayrollRecord};
use crate::money::{format_amount, format_gbp, format_pct, parse_amount};
use crate::tax::{payroll_from_annual_salary, PayrollResult, TaxYear};
use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CalcCommand {
    /// Gross annual salary in GBP (e.g. 50000 or "£50,000")
    #[arg(short, long, value_parser = parse_amount, allow_hyphen_values = true)]
    salary: Decimal,

    /// Tax year (e.g. 2024/25); defaults to the latest supported year
    #[arg(short, long, conflicts_with = "date")]
    year: Option<TaxYear>,

    /// Use the tax year containing this date (YYYY-MM-DD)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// JSON output of the calc command
#[derive(Debug, Serialize, JsonSchema)]
pub struct CalcOutput {
    #[serde(flatten)]
    pub payroll: PayrollRecord,
    /// Income tax charged at the basic rate
    pub income_tax_basic: String,
    /// Income tax charged at the higher rate
    pub income_tax_higher: String,
    /// Income tax charged at the additional rate
    pub income_tax_additional: String,
    /// NI between the primary threshold and the upper earnings limit
    pub ni_main: String,
    /// NI above the upper earnings limit
    pub ni_additional: String,
    /// Income tax plus NI as a percentage of gross
    pub deduction_pct: String,
}

impl From<&PayrollResult> for CalcOutput {
    fn from(r: &PayrollResult) -> Self {
        CalcOutput {
            payroll: r.into(),
            income_tax_basic: format_amount(r.income_tax.basic),
            income_tax_higher: format_amount(r.income_tax.higher),
            income_tax_additional: format_amount(r.income_tax.additional),
            ni_main: format_amount(r.national_insurance.main),
            ni_additional: format_amount(r.national_insurance.additional),
            deduction_pct: format_amount(r.deduction_pct()),
        }
    }
}

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "")]
    item: String,
    #[tabled(rename = "Annual")]
    annual: String,
    #[tabled(rename = "Monthly")]
    monthly: String,
}

impl LineRow {
    fn new(item: &str, annual: Decimal) -> Self {
        LineRow {
            item: item.to_string(),
            annual: format_gbp(annual),
            monthly: String::new(),
        }
    }

    fn with_monthly(item: &str, annual: Decimal) -> Self {
        LineRow {
            monthly: format_gbp(annual / dec!(12)),
            ..LineRow::new(item, annual)
        }
    }
}

impl CalcCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let year = self.tax_year()?;
        log::info!("Calculating take-home pay for {} in {}", self.salary, year);

        let result = payroll_from_annual_salary(year, self.salary);

        if self.json {
            let output = CalcOutput::from(&result);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_result(&result);
        }
        Ok(())
    }

    fn tax_year(&self) -> anyhow::Result<TaxYear> {
        match (self.year, self.date) {
            (Some(year), _) => Ok(year),
            (None, Some(date)) => TaxYear::from_date(date).ok_or_else(|| {
                anyhow::anyhow!(
                    "{} is outside the supported tax years ({} to {})",
                    date,
                    TaxYear::ALL[0],
                    TaxYear::latest()
                )
            }),
            (None, None) => Ok(TaxYear::latest()),
        }
    }
}

fn print_result(r: &PayrollResult) {
    let rows = vec![
        LineRow::with_monthly("Gross salary", r.gross_annual),
        LineRow::new("Personal allowance", r.personal_allowance),
        LineRow::new("Taxable income", r.taxable_annual),
        LineRow::with_monthly("Income tax", r.income_tax_annual),
        LineRow::new("  basic rate", r.income_tax.basic),
        LineRow::new("  higher rate", r.income_tax.higher),
        LineRow::new("  additional rate", r.income_tax.additional),
        LineRow::with_monthly("National Insurance", r.ni_annual),
        LineRow::new("  main rate", r.national_insurance.main),
        LineRow::new("  additional rate", r.national_insurance.additional),
        LineRow::with_monthly("Take-home pay", r.net_annual),
    ];

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    println!();
    println!("TAKE-HOME PAY ({})", r.year);
    println!("{}", table);
    println!(
        "  Take home: {} | Deductions: {}",
        format_pct(r.take_home_pct),
        format_pct(r.deduction_pct())
    );
    println!();
    print_notes(std::slice::from_ref(r));
}
