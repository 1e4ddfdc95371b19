//! Largest remainder rounding of signed totals to whole units.

use crate::base;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apportionment {
    /// Per total, whether it rounds away from zero (otherwise it truncates).
    pub away_from_zero: Vec<bool>,
    /// Whole units that could not be placed because too few totals had a
    /// fractional part of the required sign. Zero whenever the rounded
    /// target is less than one unit away from the sum of the totals.
    pub shortfall: u64,
}

/// Decides how each of `totals` rounds so that the rounded totals sum to
/// `target` rounded to the nearest whole unit.
///
/// Every total is first truncated toward zero. The units missing between the
/// truncated sum and the target go to the totals with the largest fractional
/// parts among those whose sign moves the sum towards the target. Equal
/// fractional parts are resolved in slice order.
pub fn apportion(totals: &[base::Cents], target: base::Cents) -> Apportionment {
    let truncated = totals.iter().map(|t| t.trunc()).sum::<base::Cents>();
    let deficit = (target.round() - truncated).0 / base::Cents::UNIT;

    let mut ranked = (0..totals.len())
        .filter(|&i| deficit != 0 && totals[i].fract().signum() == deficit.signum())
        .collect::<Vec<_>>();
    ranked.sort_by(|&a, &b| totals[b].fract().abs().cmp(&totals[a].fract().abs()));

    let wanted = deficit.unsigned_abs();
    let mut away_from_zero = vec![false; totals.len()];
    for &i in ranked.iter().take(wanted as usize) {
        away_from_zero[i] = true;
    }
    Apportionment {
        away_from_zero,
        shortfall: wanted.saturating_sub(ranked.len() as u64),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn cents(v: &[i64]) -> Vec<base::Cents> {
        v.iter().copied().map(base::Cents).collect()
    }

    fn rounded(totals: &[i64], target: i64) -> Vec<i64> {
        let totals = cents(totals);
        let a = apportion(&totals, base::Cents(target));
        totals
            .iter()
            .zip(a.away_from_zero)
            .map(|(&t, away)| {
                let mut f = base::Flow {
                    total: t,
                    ..base::Flow::new("s", "t")
                };
                f.round(away);
                f.total.0 / base::Cents::UNIT
            })
            .collect()
    }

    #[test]
    fn test_largest_remainder_first() {
        assert_eq!(rounded(&[1040, 1030, 1030], 3100), vec![11, 10, 10]);
    }

    #[rstest]
    #[case(&[1050, 1050, 1050], 3200, &[11, 11, 10])]
    #[case(&[1050, 1050, 1050], 3100, &[11, 10, 10])]
    #[case(&[1020, 1070, 1070], 3200, &[10, 11, 11])]
    fn test_ties_resolved_in_order(
        #[case] totals: &[i64],
        #[case] target: i64,
        #[case] want: &[i64],
    ) {
        assert_eq!(rounded(totals, target), want);
        assert_eq!(rounded(totals, target), want);
    }

    #[rstest]
    #[case(&[1040, 1030, 1030])]
    #[case(&[1020, 1020, 1020])]
    #[case(&[1099, 1099, 1099, 1])]
    #[case(&[-1040, -1030, -1030])]
    #[case(&[-1099, -5, -250, -49999])]
    #[case(&[12345, -2050, 75, -75, 0])]
    #[case(&[50, 50, 50, 50, 50])]
    #[case(&[])]
    fn test_sum_matches_rounded_total(#[case] totals: &[i64]) {
        let total = totals.iter().sum::<i64>();
        let got = rounded(totals, total).into_iter().sum::<i64>();
        assert_eq!(got, base::Cents(total).whole());
        assert_eq!(apportion(&cents(totals), base::Cents(total)).shortfall, 0);
    }

    #[rstest]
    // Forced targets one unit either side of the rounded sum.
    #[case(&[1040, 1030, 1030], 3000, &[10, 10, 10])]
    #[case(&[1010, 1010], 2100, &[11, 10])]
    #[case(&[-1090, -1090], -2100, &[-11, -10])]
    #[case(&[-1020, 60], -900, &[-10, 1])]
    #[case(&[-1070, 30], -1100, &[-11, 0])]
    fn test_forced_target(#[case] totals: &[i64], #[case] target: i64, #[case] want: &[i64]) {
        assert_eq!(rounded(totals, target), want);
    }

    #[test]
    fn test_unreachable_target() {
        let a = apportion(&cents(&[1040, 1000]), base::Cents(5000));
        assert_eq!(a.away_from_zero, vec![true, false]);
        assert_eq!(a.shortfall, 29);
    }
}
