//! Chart-ready data derived from character capacities.

use crate::catalog::{Attribute, Capacities, Character};
use serde::Serialize;

/// Upper bound of the radar scale; scores in the dataset run 0..=7.
pub const RADAR_MAX: f64 = 7.0;

/// Axes drawn on the comparison radar, clockwise from the top.
pub const RADAR_AXES: [Attribute; 5] = [
    Attribute::Force,
    Attribute::Intelligence,
    Attribute::Durability,
    Attribute::Energy,
    Attribute::Speed,
];

/// Series colours for the two compared characters.
pub const SERIES_COLORS: [&str; 2] = ["#8884d8", "#82ca9d"];

/// One pie slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
    pub name: &'static str,
    pub value: f64,
}

/// Slices in fixed attribute order, unset attributes dropped.
pub fn prepare_data(capacities: Option<&Capacities>) -> Vec<Stat> {
    capacities
        .map(|caps| {
            caps.iter()
                .map(|(attr, value)| Stat {
                    name: attr.display_name(),
                    value,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// One character's polygon on the radar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub name: String,
    pub color: &'static str,
    /// One value per entry of [`RADAR_AXES`]; unset scores are 0.
    pub values: Vec<f64>,
}

impl RadarSeries {
    fn new(name: String, color: &'static str, caps: &Capacities) -> Self {
        Self {
            name,
            color,
            values: RADAR_AXES.iter().map(|a| caps.get(*a).unwrap_or(0.0)).collect(),
        }
    }
}

/// Both series, or `None` unless both characters carry capacities.
pub fn radar_series(left: &Character, right: &Character) -> Option<[RadarSeries; 2]> {
    let (l, r) = (left.capacities()?, right.capacities()?);
    Some([
        RadarSeries::new(left.label(), SERIES_COLORS[0], &l),
        RadarSeries::new(right.label(), SERIES_COLORS[1], &r),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prepare_data_keeps_order_and_drops_unset() {
        let caps = Capacities::from_value(&json!({
            "speed": 3, "force": 7, "fighting": 1
        }));
        let data = prepare_data(caps.as_ref());
        assert_eq!(
            data,
            vec![
                Stat { name: "Force", value: 7.0 },
                Stat { name: "Speed", value: 3.0 },
                Stat { name: "Fighting", value: 1.0 },
            ]
        );
    }

    #[test]
    fn prepare_data_without_capacities_is_empty() {
        assert!(prepare_data(None).is_empty());
        assert!(prepare_data(Some(&Capacities::default())).is_empty());
    }

    #[test]
    fn radar_needs_both_capacities() {
        let thor = Character::from_value(json!({
            "name": "Thor", "capacities": { "force": 7, "speed": 7 }
        }));
        let hulk = Character::from_value(json!({
            "name": "Hulk", "capacities": { "force": 7, "durability": 7, "energy": 5 }
        }));
        let bare = Character::from_value(json!({ "name": "Avengers" }));

        assert!(radar_series(&thor, &bare).is_none());
        assert!(radar_series(&bare, &thor).is_none());

        let [a, b] = radar_series(&thor, &hulk).unwrap();
        assert_eq!(a.name, "Thor");
        assert_eq!(a.values, vec![7.0, 0.0, 0.0, 0.0, 7.0]);
        assert_eq!(b.values, vec![7.0, 0.0, 7.0, 5.0, 0.0]);
        assert_eq!(b.color, SERIES_COLORS[1]);
    }
}
