//! Years command - the tax year parameter table

use crate::money::{format_amount, format_gbp, format_rate};
use crate::tax::TaxYear;
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct YearsCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled)]
struct YearRow {
    #[tabled(rename = "Tax Year")]
    year: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Allowance")]
    allowance: String,
    #[tabled(rename = "Taper")]
    taper: String,
    #[tabled(rename = "Basic Band")]
    basic_band: String,
    #[tabled(rename = "Additional From")]
    additional_from: String,
    #[tabled(rename = "NI PT")]
    ni_primary_threshold: String,
    #[tabled(rename = "NI UEL")]
    ni_upper_earnings_limit: String,
    #[tabled(rename = "NI Rates")]
    ni_rates: String,
}

/// JSON output for one tax year
#[derive(Debug, Serialize)]
struct YearData {
    tax_year: String,
    start_date: String,
    end_date: String,
    personal_allowance: String,
    taper_start: String,
    taper_end: String,
    basic_band_taxable: String,
    higher_threshold_taxable: String,
    ni_primary_threshold: String,
    ni_upper_earnings_limit: String,
    ni_main_rate: String,
    ni_additional_rate: String,
    notes: &'static [&'static str],
}

impl YearsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        if self.json {
            let data: Vec<YearData> = TaxYear::ALL.into_iter().map(year_data).collect();
            println!("{}", serde_json::to_string_pretty(&data)?);
            return Ok(());
        }

        let rows: Vec<YearRow> = TaxYear::ALL.into_iter().map(year_row).collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{}", table);

        for year in TaxYear::ALL {
            for note in year.params().notes {
                println!("  {}: {}", year, note);
            }
        }
        Ok(())
    }
}

fn year_row(year: TaxYear) -> YearRow {
    let p = year.params();
    YearRow {
        year: year.display(),
        dates: format!("{} to {}", year.start_date(), year.end_date()),
        allowance: format_gbp(p.personal_allowance_full),
        taper: format!("{} - {}", format_gbp(p.taper_start), format_gbp(p.taper_end)),
        basic_band: format_gbp(p.basic_band_taxable),
        additional_from: format_gbp(p.higher_threshold_taxable),
        ni_primary_threshold: format_gbp(p.ni_primary_threshold),
        ni_upper_earnings_limit: format_gbp(p.ni_upper_earnings_limit),
        ni_rates: format!(
            "{} / {}",
            format_rate(p.ni_main_rate),
            format_rate(p.ni_additional_rate)
        ),
    }
}

fn year_data(year: TaxYear) -> YearData {
    let p = year.params();
    YearData {
        tax_year: year.display(),
        start_date: year.start_date().to_string(),
        end_date: year.end_date().to_string(),
        personal_allowance: format_amount(p.personal_allowance_full),
        taper_start: format_amount(p.taper_start),
        taper_end: format_amount(p.taper_end),
        basic_band_taxable: format_amount(p.basic_band_taxable),
        higher_threshold_taxable: format_amount(p.higher_threshold_taxable),
        ni_primary_threshold: format_amount(p.ni_primary_threshold),
        ni_upper_earnings_limit: format_amount(p.ni_upper_earnings_limit),
        ni_main_rate: p.ni_main_rate.normalize().to_string(),
        ni_additional_rate: p.ni_additional_rate.normalize().to_string(),
        notes: p.notes,
    }
}
