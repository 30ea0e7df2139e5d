use crate::tax::uk::TaxYearParams;
use rust_decimal::Decimal;

/// Employee Class 1 National Insurance split by rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NiBreakdown {
    /// Between the primary threshold and the upper earnings limit
    pub main: Decimal,
    /// Above the upper earnings limit
    pub additional: Decimal,
}

impl NiBreakdown {
    pub fn total(&self) -> Decimal {
        self.main + self.additional
    }
}

/// Calculate employee NI on gross annual income.
///
/// NI ignores the personal allowance. Years with a mid-year rate change
/// carry a single blended rate in their parameters.
pub fn national_insurance(params: &TaxYearParams, gross: Decimal) -> NiBreakdown {
    let gross = gross.max(Decimal::ZERO);
    let uel = params.ni_upper_earnings_limit;

    let main_base = (gross.min(uel) - params.ni_primary_threshold).max(Decimal::ZERO);
    let additional_base = (gross - uel).max(Decimal::ZERO);

    NiBreakdown {
        main: main_base * params.ni_main_rate,
        additional: additional_base * params.ni_additional_rate,
    }
}
