use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;
use std::str::FromStr;

/// Tax band for income tax calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxBand {
    Basic,
    Higher,
    Additional,
}

impl TaxBand {
    /// Marginal income tax rate for the band.
    ///
    /// The rUK rates did not move between 2019/20 and 2024/25, so only band
    /// widths live in [`TaxYearParams`].
    pub fn income_rate(&self) -> Decimal {
        match self {
            TaxBand::Basic => dec!(0.20),      // 20%
            TaxBand::Higher => dec!(0.40),     // 40%
            TaxBand::Additional => dec!(0.45), // 45%
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxYearError {
    #[error("unsupported tax year '{0}': expected one of 2019/20 to 2024/25")]
    Unsupported(String),
    #[error("invalid tax year '{0}': expected a year like 2024/25")]
    Invalid(String),
}

/// UK Tax Year (runs 6 April to 5 April)
///
/// Variants are named after the end year (e.g. `Y2025` = 2024/25). Only
/// years with a parameter table exist, so every `TaxYear` can be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaxYear {
    Y2020,
    Y2021,
    Y2022,
    Y2023,
    Y2024,
    Y2025,
}

impl TaxYear {
    /// Every supported year, oldest first.
    pub const ALL: [TaxYear; 6] = [
        TaxYear::Y2020,
        TaxYear::Y2021,
        TaxYear::Y2022,
        TaxYear::Y2023,
        TaxYear::Y2024,
        TaxYear::Y2025,
    ];

    pub fn latest() -> Self {
        TaxYear::Y2025
    }

    /// Calendar year in which the tax year ends.
    pub fn end_year(&self) -> i32 {
        match self {
            TaxYear::Y2020 => 2020,
            TaxYear::Y2021 => 2021,
            TaxYear::Y2022 => 2022,
            TaxYear::Y2023 => 2023,
            TaxYear::Y2024 => 2024,
            TaxYear::Y2025 => 2025,
        }
    }

    pub fn from_end_year(year: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.end_year() == year)
    }

    /// Tax year containing `date`, if it is one of the supported years.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        // 6 April or later belongs to the tax year ending next April
        let end_year = if (date.month(), date.day()) >= (4, 6) {
            date.year() + 1
        } else {
            date.year()
        };
        Self::from_end_year(end_year)
    }

    /// Start date of the tax year (6 April of previous year)
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.end_year() - 1, 4, 6).expect("6 April is a valid date")
    }

    /// End date of the tax year (5 April)
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.end_year(), 4, 5).expect("5 April is a valid date")
    }

    /// Display as "2024/25" format
    pub fn display(&self) -> String {
        let end = self.end_year();
        format!("{}/{:02}", end - 1, end % 100)
    }

    pub fn params(&self) -> &'static TaxYearParams {
        match self {
            TaxYear::Y2020 => &PARAMS_2019_20,
            TaxYear::Y2021 => &PARAMS_2020_21,
            TaxYear::Y2022 => &PARAMS_2021_22,
            TaxYear::Y2023 => &PARAMS_2022_23,
            TaxYear::Y2024 => &PARAMS_2023_24,
            TaxYear::Y2025 => &PARAMS_2024_25,
        }
    }
}

impl fmt::Display for TaxYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl FromStr for TaxYear {
    type Err = TaxYearError;

    /// Accepts "2024/25", "2024-25" or the end year alone ("2025").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || TaxYearError::Invalid(s.to_string());

        let end_year = match s.split_once(['/', '-']) {
            Some((start, end)) => {
                let start: i32 = start.parse().map_err(|_| invalid())?;
                let end: i32 = end.parse().map_err(|_| invalid())?;
                let next = start.checked_add(1).ok_or_else(invalid)?;
                let matches_start = match end {
                    0..=99 => end == next % 100,
                    _ => end == next,
                };
                if !matches_start {
                    return Err(invalid());
                }
                next
            }
            None => s.parse().map_err(|_| invalid())?,
        };

        Self::from_end_year(end_year).ok_or_else(|| TaxYearError::Unsupported(s.to_string()))
    }
}

/// Income tax and employee NI parameters for one tax year.
///
/// Thresholds over income are in GBP per year. Band widths and thresholds
/// marked "taxable" apply to income after the personal allowance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxYearParams {
    /// Unreduced annual personal allowance
    pub personal_allowance_full: Decimal,
    /// Gross income above which the allowance is tapered
    pub taper_start: Decimal,
    /// Gross income at which the allowance reaches zero
    pub taper_end: Decimal,
    /// Width of the basic-rate band
    pub basic_band_taxable: Decimal,
    /// Taxable income at which the additional rate starts
    pub higher_threshold_taxable: Decimal,
    /// Class 1 primary threshold
    pub ni_primary_threshold: Decimal,
    /// Class 1 upper earnings limit
    pub ni_upper_earnings_limit: Decimal,
    /// Employee rate between the primary threshold and the UEL
    pub ni_main_rate: Decimal,
    /// Employee rate above the UEL
    pub ni_additional_rate: Decimal,
    /// Advisory notes shown with every result for the year
    pub notes: &'static [&'static str],
}

const RUK_BANDS_NOTE: &str =
    "Scottish income tax bands are not applied; England, Wales and Northern Ireland bands assumed.";

static PARAMS_2019_20: TaxYearParams = TaxYearParams {
    personal_allowance_full: dec!(12500),
    taper_start: dec!(100000),
    taper_end: dec!(125000),
    basic_band_taxable: dec!(37500),
    higher_threshold_taxable: dec!(150000),
    ni_primary_threshold: dec!(8632),
    ni_upper_earnings_limit: dec!(50000),
    ni_main_rate: dec!(0.12),
    ni_additional_rate: dec!(0.02),
    notes: &[RUK_BANDS_NOTE],
};

static PARAMS_2020_21: TaxYearParams = TaxYearParams {
    personal_allowance_full: dec!(12500),
    taper_start: dec!(100000),
    taper_end: dec!(125000),
    basic_band_taxable: dec!(37500),
    higher_threshold_taxable: dec!(150000),
    ni_primary_threshold: dec!(9500),
    ni_upper_earnings_limit: dec!(50000),
    ni_main_rate: dec!(0.12),
    ni_additional_rate: dec!(0.02),
    notes: &[RUK_BANDS_NOTE],
};

static PARAMS_2021_22: TaxYearParams = TaxYearParams {
    personal_allowance_full: dec!(12570),
    taper_start: dec!(100000),
    taper_end: dec!(125140),
    basic_band_taxable: dec!(37700),
    higher_threshold_taxable: dec!(150000),
    ni_primary_threshold: dec!(9568),
    ni_upper_earnings_limit: dec!(50270),
    ni_main_rate: dec!(0.12),
    ni_additional_rate: dec!(0.02),
    notes: &[RUK_BANDS_NOTE],
};

// Annualised figures: PT was £9,880 until 5 July 2022 and £12,570 after,
// rates were 13.25%/3.25% until 5 November 2022 and 12%/2% after.
static PARAMS_2022_23: TaxYearParams = TaxYearParams {
    personal_allowance_full: dec!(12570),
    taper_start: dec!(100000),
    taper_end: dec!(125140),
    basic_band_taxable: dec!(37700),
    higher_threshold_taxable: dec!(150000),
    ni_primary_threshold: dec!(11908),
    ni_upper_earnings_limit: dec!(50270),
    ni_main_rate: dec!(0.1273),
    ni_additional_rate: dec!(0.0273),
    notes: &[
        RUK_BANDS_NOTE,
        "NI rates and primary threshold changed during 2022/23; a blended annual rate (12.73%/2.73%) and threshold (£11,908) are used, so per-period payslips will differ.",
    ],
};

// Main rate was 12% until 5 January 2024 and 10% after.
static PARAMS_2023_24: TaxYearParams = TaxYearParams {
    personal_allowance_full: dec!(12570),
    taper_start: dec!(100000),
    taper_end: dec!(125140),
    basic_band_taxable: dec!(37700),
    higher_threshold_taxable: dec!(125140),
    ni_primary_threshold: dec!(12570),
    ni_upper_earnings_limit: dec!(50270),
    ni_main_rate: dec!(0.115),
    ni_additional_rate: dec!(0.02),
    notes: &[
        RUK_BANDS_NOTE,
        "The NI main rate fell from 12% to 10% on 6 January 2024; a blended annual rate of 11.5% is used, so per-period payslips will differ.",
    ],
};

static PARAMS_2024_25: TaxYearParams = TaxYearParams {
    personal_allowance_full: dec!(12570),
    taper_start: dec!(100000),
    taper_end: dec!(125140),
    basic_band_taxable: dec!(37700),
    higher_threshold_taxable: dec!(125140),
    ni_primary_threshold: dec!(12570),
    ni_upper_earnings_limit: dec!(50270),
    ni_main_rate: dec!(0.08),
    ni_additional_rate: dec!(0.02),
    notes: &[RUK_BANDS_NOTE],
};
