use crate::tax::allowance::personal_allowance;
use crate::tax::income::{income_tax, IncomeTaxBreakdown};
use crate::tax::ni::{national_insurance, NiBreakdown};
use crate::tax::uk::TaxYear;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Annual take-home pay for one salary in one tax year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollResult {
    pub year: TaxYear,
    /// Gross salary after clamping negatives to zero
    pub gross_annual: Decimal,
    pub personal_allowance: Decimal,
    pub taxable_annual: Decimal,
    pub income_tax_annual: Decimal,
    pub ni_annual: Decimal,
    pub net_annual: Decimal,
    pub net_monthly: Decimal,
    /// Net pay as a percentage of gross (0 when gross is 0)
    pub take_home_pct: Decimal,
    pub income_tax: IncomeTaxBreakdown,
    pub national_insurance: NiBreakdown,
    pub notes: &'static [&'static str],
}

impl PayrollResult {
    /// Income tax plus NI as a percentage of gross (0 when gross is 0)
    pub fn deduction_pct(&self) -> Decimal {
        if self.gross_annual > Decimal::ZERO {
            (self.income_tax_annual + self.ni_annual) / self.gross_annual * dec!(100)
        } else {
            Decimal::ZERO
        }
    }
}

/// Calculate take-home pay from a gross annual salary.
///
/// Income tax is charged on gross minus the (tapered) personal allowance,
/// NI on gross directly. Negative salaries are treated as zero.
pub fn payroll_from_annual_salary(year: TaxYear, gross: Decimal) -> PayrollResult {
    let params = year.params();
    let gross = gross.max(Decimal::ZERO);

    let allowance = personal_allowance(params, gross);
    let taxable = (gross - allowance).max(Decimal::ZERO);
    let income_tax = income_tax(params, taxable);
    let national_insurance = national_insurance(params, gross);

    let income_tax_annual = income_tax.total();
    let ni_annual = national_insurance.total();
    let net = (gross - income_tax_annual - ni_annual).max(Decimal::ZERO);
    let take_home_pct = if gross > Decimal::ZERO {
        net / gross * dec!(100)
    } else {
        Decimal::ZERO
    };

    log::debug!(
        "{}: gross {} allowance {} taxable {} income tax {} NI {} net {}",
        year,
        gross,
        allowance,
        taxable,
        income_tax_annual,
        ni_annual,
        net
    );

    PayrollResult {
        year,
        gross_annual: gross,
        personal_allowance: allowance,
        taxable_annual: taxable,
        income_tax_annual,
        ni_annual,
        net_annual: net,
        net_monthly: net / dec!(12),
        take_home_pct,
        income_tax,
        national_insurance,
        notes: params.notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn payroll(gross: Decimal) -> PayrollResult {
        payroll_from_annual_salary(TaxYear::Y2025, gross)
    }

    #[test]
    fn zero_salary() {
        let r = payroll(dec!(0));
        assert_eq!(r.personal_allowance, dec!(12570));
        assert_eq!(r.taxable_annual, dec!(0));
        assert_eq!(r.income_tax_annual, dec!(0));
        assert_eq!(r.ni_annual, dec!(0));
        assert_eq!(r.net_annual, dec!(0));
        assert_eq!(r.net_monthly, dec!(0));
        assert_eq!(r.take_home_pct, dec!(0));
        assert_eq!(r.deduction_pct(), dec!(0));
    }

    #[test]
    fn basic_rate_taxpayer() {
        let r = payroll(dec!(50000));
        assert_eq!(r.personal_allowance, dec!(12570));
        assert_eq!(r.taxable_annual, dec!(37430));
        assert_eq!(r.income_tax_annual, dec!(7486.00));
        assert_eq!(r.ni_annual, dec!(2994.40));
        assert_eq!(r.net_annual, dec!(39519.60));
        assert_eq!(r.net_monthly, dec!(3293.30));
        assert_eq!(r.take_home_pct.round_dp(2), dec!(79.04));
    }

    #[test]
    fn inside_allowance_taper() {
        let r = payroll(dec!(110000));
        assert_eq!(r.personal_allowance, dec!(7570));
        assert_eq!(r.taxable_annual, dec!(102430));
        assert_eq!(r.income_tax.basic, dec!(7540));
        assert_eq!(r.income_tax.higher, dec!(25892));
        assert_eq!(r.income_tax_annual, dec!(33432.00));
        assert_eq!(r.national_insurance.main, dec!(3016));
        assert_eq!(r.national_insurance.additional, dec!(1194.60));
        assert_eq!(r.ni_annual, dec!(4210.60));
        assert_eq!(r.net_annual, dec!(72357.40));
        assert_eq!(r.net_monthly.round_dp(2), dec!(6029.78));
        assert_eq!(r.take_home_pct.round_dp(2), dec!(65.78));
    }

    #[test]
    fn allowance_gone_at_taper_end() {
        let r = payroll(dec!(125140));
        assert_eq!(r.personal_allowance, dec!(0));
        assert_eq!(r.taxable_annual, dec!(125140));
    }

    #[test]
    fn negative_salary_matches_zero() {
        assert_eq!(payroll(dec!(-500)), payroll(dec!(0)));
    }

    #[test]
    fn notes_copied_from_year() {
        for year in TaxYear::ALL {
            let r = payroll_from_annual_salary(year, dec!(30000));
            assert_eq!(r.notes, year.params().notes);
            assert_eq!(r.year, year);
        }
    }

    #[test]
    fn same_input_same_result_across_threads() {
        let expected = payroll(dec!(64321.99));
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| payroll(dec!(64321.99))))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    fn any_year() -> impl Strategy<Value = TaxYear> {
        prop::sample::select(TaxYear::ALL.to_vec())
    }

    /// Salaries from £0 to £500,000 in whole pence
    fn any_salary() -> impl Strategy<Value = Decimal> {
        (0i64..50_000_000).prop_map(|pence| Decimal::new(pence, 2))
    }

    proptest! {
        #[test]
        fn prop_allowance_within_full_allowance(year in any_year(), gross in any_salary()) {
            let r = payroll_from_annual_salary(year, gross);
            prop_assert!(r.personal_allowance >= Decimal::ZERO);
            prop_assert!(r.personal_allowance <= year.params().personal_allowance_full);
            prop_assert_eq!(r.taxable_annual, (gross - r.personal_allowance).max(Decimal::ZERO));
        }

        #[test]
        fn prop_tax_and_ni_non_decreasing(year in any_year(), a in any_salary(), b in any_salary()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let lo = payroll_from_annual_salary(year, lo);
            let hi = payroll_from_annual_salary(year, hi);
            prop_assert!(lo.income_tax_annual <= hi.income_tax_annual);
            prop_assert!(lo.ni_annual <= hi.ni_annual);
        }

        #[test]
        fn prop_net_identities(year in any_year(), gross in any_salary()) {
            let r = payroll_from_annual_salary(year, gross);
            prop_assert_eq!(
                r.net_annual,
                (gross - r.income_tax_annual - r.ni_annual).max(Decimal::ZERO)
            );
            prop_assert_eq!(r.net_monthly, r.net_annual / dec!(12));
            prop_assert_eq!(r.income_tax_annual, r.income_tax.total());
            prop_assert_eq!(r.ni_annual, r.national_insurance.total());
            if gross > Decimal::ZERO {
                prop_assert_eq!(r.take_home_pct, r.net_annual / gross * dec!(100));
            } else {
                prop_assert_eq!(r.take_home_pct, Decimal::ZERO);
            }
        }

        #[test]
        fn prop_negative_salary_matches_zero(year in any_year(), pence in 1i64..10_000_000) {
            let negative = payroll_from_annual_salary(year, Decimal::new(-pence, 2));
            prop_assert_eq!(negative, payroll_from_annual_salary(year, Decimal::ZERO));
        }
    }
}
