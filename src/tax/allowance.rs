use crate::tax::uk::TaxYearParams;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Personal allowance after the high-income taper.
///
/// The allowance drops by £1 for every £2 of gross income above
/// `taper_start` and is gone entirely from `taper_end`. Negative income is
/// treated as zero.
pub fn personal_allowance(params: &TaxYearParams, gross: Decimal) -> Decimal {
    let gross = gross.max(Decimal::ZERO);
    let full = params.personal_allowance_full;

    if gross <= params.taper_start {
        return full;
    }
    if gross >= params.taper_end {
        return Decimal::ZERO;
    }

    let reduction = (gross - params.taper_start) / dec!(2);
    (full - reduction).min(full).max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::TaxYear;

    fn allowance(gross: Decimal) -> Decimal {
        personal_allowance(TaxYear::Y2025.params(), gross)
    }

    #[test]
    fn full_allowance_below_taper() {
        assert_eq!(allowance(dec!(0)), dec!(12570));
        assert_eq!(allowance(dec!(50000)), dec!(12570));
        assert_eq!(allowance(dec!(100000)), dec!(12570));
    }

    #[test]
    fn tapered_inside_band() {
        assert_eq!(allowance(dec!(100001)), dec!(12569.5));
        assert_eq!(allowance(dec!(110000)), dec!(7570));
        assert_eq!(allowance(dec!(125139)), dec!(0.5));
    }

    #[test]
    fn zero_from_taper_end() {
        assert_eq!(allowance(dec!(125140)), dec!(0));
        assert_eq!(allowance(dec!(1000000)), dec!(0));
    }

    #[test]
    fn negative_income_gets_full_allowance() {
        assert_eq!(allowance(dec!(-500)), dec!(12570));
    }

    #[test]
    fn earlier_years_use_their_own_allowance() {
        let p = TaxYear::Y2020.params();
        assert_eq!(personal_allowance(p, dec!(20000)), dec!(12500));
        assert_eq!(personal_allowance(p, dec!(112500)), dec!(6250));
        assert_eq!(personal_allowance(p, dec!(125000)), dec!(0));
    }

    #[test]
    fn clamped_when_taper_outlasts_allowance() {
        let params = TaxYearParams {
            taper_end: dec!(200000),
            ..TaxYear::Y2025.params().clone()
        };
        assert_eq!(personal_allowance(&params, dec!(150000)), dec!(0));
    }
}
