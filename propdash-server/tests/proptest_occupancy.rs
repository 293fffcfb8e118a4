use propdash_server::models::occupancy_rate;
use proptest::prelude::*;

proptest! {
    /// Property: no properties means a rate of exactly zero
    #[test]
    fn prop_empty_portfolio_is_zero(occupied in 0i64..10_000) {
        prop_assert_eq!(occupancy_rate(occupied, 0), 0);
    }

    /// Property: rate is a whole percent within 0..=100
    #[test]
    fn prop_rate_is_bounded(total in 1i64..10_000, frac in 0.0f64..=1.0) {
        let occupied = (total as f64 * frac).floor() as i64;
        let rate = occupancy_rate(occupied, total);
        prop_assert!((0..=100).contains(&rate));
    }

    /// Property: rate never decreases as more properties become occupied
    #[test]
    fn prop_rate_is_monotonic(total in 1i64..1_000, a in 0i64..1_000, b in 0i64..1_000) {
        let (lo, hi) = (a.min(b).min(total), a.max(b).min(total));
        prop_assert!(occupancy_rate(lo, total) <= occupancy_rate(hi, total));
    }

    /// Property: rate is within half a point of the exact percentage
    #[test]
    fn prop_rate_rounds_to_nearest(total in 1i64..10_000, occupied in 0i64..10_000) {
        prop_assume!(occupied <= total);
        let exact = occupied as f64 * 100.0 / total as f64;
        let rate = occupancy_rate(occupied, total) as f64;
        prop_assert!((rate - exact).abs() <= 0.5);
    }
}

#[test]
fn thirds_round_as_displayed() {
    assert_eq!(occupancy_rate(1, 3), 33);
    assert_eq!(occupancy_rate(2, 3), 67);
}
