use crate::tax::uk::{TaxBand, TaxYearParams};
use rust_decimal::Decimal;

/// Income tax split by marginal band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IncomeTaxBreakdown {
    pub basic: Decimal,
    pub higher: Decimal,
    pub additional: Decimal,
}

impl IncomeTaxBreakdown {
    pub fn total(&self) -> Decimal {
        self.basic + self.higher + self.additional
    }
}

/// Calculate income tax on taxable income (gross minus personal allowance).
///
/// Each band taxes its own slice of income:
/// - basic: the first `basic_band_taxable`
/// - higher: from there up to `higher_threshold_taxable`
/// - additional: everything above `higher_threshold_taxable`
pub fn income_tax(params: &TaxYearParams, taxable: Decimal) -> IncomeTaxBreakdown {
    let taxable = taxable.max(Decimal::ZERO);
    let basic_band = params.basic_band_taxable;
    let higher_width = (params.higher_threshold_taxable - basic_band).max(Decimal::ZERO);

    let basic_slice = taxable.min(basic_band);
    let higher_slice = (taxable - basic_band).max(Decimal::ZERO).min(higher_width);
    let additional_slice = (taxable - params.higher_threshold_taxable).max(Decimal::ZERO);

    IncomeTaxBreakdown {
        basic: basic_slice * TaxBand::Basic.income_rate(),
        higher: higher_slice * TaxBand::Higher.income_rate(),
        additional: additional_slice * TaxBand::Additional.income_rate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::TaxYear;
    use rust_decimal_macros::dec;

    #[test]
    fn nothing_owed_on_zero_or_negative() {
        let p = TaxYear::Y2025.params();
        assert_eq!(income_tax(p, dec!(0)), IncomeTaxBreakdown::default());
        assert_eq!(income_tax(p, dec!(-100)), IncomeTaxBreakdown::default());
    }

    #[test]
    fn basic_rate_only() {
        let tax = income_tax(TaxYear::Y2025.params(), dec!(37430));
        assert_eq!(tax.basic, dec!(7486.00));
        assert_eq!(tax.higher, dec!(0));
        assert_eq!(tax.total(), dec!(7486.00));
    }

    #[test]
    fn basic_band_filled_exactly() {
        let tax = income_tax(TaxYear::Y2025.params(), dec!(37700));
        assert_eq!(tax.basic, dec!(7540));
        assert_eq!(tax.higher, dec!(0));
    }

    #[test]
    fn higher_rate_slice() {
        let tax = income_tax(TaxYear::Y2025.params(), dec!(102430));
        assert_eq!(tax.basic, dec!(7540));
        assert_eq!(tax.higher, dec!(25892));
        assert_eq!(tax.additional, dec!(0));
        assert_eq!(tax.total(), dec!(33432));
    }

    #[test]
    fn additional_rate_2024_25() {
        let tax = income_tax(TaxYear::Y2025.params(), dec!(200000));
        assert_eq!(tax.basic, dec!(7540));
        assert_eq!(tax.higher, dec!(34976));
        assert_eq!(tax.additional, dec!(33687));
        assert_eq!(tax.total(), dec!(76203));
    }

    #[test]
    fn additional_rate_threshold_150k_before_2023_24() {
        let tax = income_tax(TaxYear::Y2020.params(), dec!(200000));
        assert_eq!(tax.basic, dec!(7500));
        assert_eq!(tax.higher, dec!(45000));
        assert_eq!(tax.additional, dec!(22500));
    }

    #[test]
    fn inverted_thresholds_give_empty_higher_band() {
        let params = TaxYearParams {
            higher_threshold_taxable: dec!(30000),
            ..TaxYear::Y2025.params().clone()
        };
        let tax = income_tax(&params, dec!(40000));
        assert_eq!(tax.higher, dec!(0));
        assert_eq!(tax.basic, dec!(7540));
        assert_eq!(tax.additional, dec!(4500));
    }
}
