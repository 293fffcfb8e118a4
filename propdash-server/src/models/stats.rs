//! Dashboard aggregate figures

use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard landing view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: i64,
    /// Whole percent, 0..=100
    pub occupancy_rate: i64,
    /// Sum of all payment amounts; 0 with no payments
    pub total_revenue: f64,
    pub open_maintenance: i64,
}

/// Percentage of occupied properties, rounded half away from zero.
///
/// Returns 0 when there are no properties.
pub fn occupancy_rate(occupied: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    (occupied as f64 * 100.0 / total as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_rounds_to_nearest_percent() {
        assert_eq!(occupancy_rate(1, 3), 33);
        assert_eq!(occupancy_rate(2, 3), 67);
        assert_eq!(occupancy_rate(1, 2), 50);
        assert_eq!(occupancy_rate(3, 3), 100);
    }

    #[test]
    fn empty_portfolio_is_zero() {
        assert_eq!(occupancy_rate(0, 0), 0);
    }

    #[test]
    fn serializes_camel_case() {
        let stats = DashboardStats {
            total_properties: 3,
            occupancy_rate: 67,
            total_revenue: 3700.0,
            open_maintenance: 0,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalProperties"], 3);
        assert_eq!(json["occupancyRate"], 67);
        assert_eq!(json["totalRevenue"].as_f64(), Some(3700.0));
        assert_eq!(json["openMaintenance"], 0);
    }
}
