//! Dashboard statistics.
//!
//! There is no reporting backend yet; [`FixedStats`] serves placeholder
//! figures in the shape the dashboard expects.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessStats {
    pub total_members: u32,
    pub todays_menu: Vec<String>,
    pub meals_served_today: u32,
    pub monthly_expenses: u64,
}

pub trait StatsProvider: Send + Sync {
    fn snapshot(&self) -> MessStats;
}

#[derive(Debug, Clone, Default)]
pub struct FixedStats;

impl StatsProvider for FixedStats {
    fn snapshot(&self) -> MessStats {
        MessStats {
            total_members: 120,
            todays_menu: ["Rice", "Dal", "Mixed Veg", "Salad"]
                .into_iter()
                .map(String::from)
                .collect(),
            meals_served_today: 350,
            monthly_expenses: 55_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_stats_serialize_to_dashboard_shape() {
        let json = serde_json::to_value(FixedStats.snapshot()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "total_members": 120,
                "todays_menu": ["Rice", "Dal", "Mixed Veg", "Salad"],
                "meals_served_today": 350,
                "monthly_expenses": 55000,
            })
        );
    }
}
