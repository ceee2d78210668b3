//! marvel-core: the character catalog behind the Marvel App.
//!
//! Holds the bundled record store, the sorted listing and id lookup over it, and the
//! chart data the gateway renders.

mod catalog;
mod chart;
mod shared;

pub use shared::{CoreConfig, DEFAULT_APP_NAME};

pub use catalog::{
    sort_characters, Attribute, Capacities, CatalogError, Character, CharacterId, CharacterSource,
    CharacterStore, SortField, SortOptions, SortOrder, StoreError, NO_DESCRIPTION,
};

pub use chart::{prepare_data, radar_series, RadarSeries, Stat, RADAR_AXES, RADAR_MAX, SERIES_COLORS};
