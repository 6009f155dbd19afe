//! Water surface queries.
//!
//! The drop controller never owns water data. Each tick it asks a
//! [`WaterSurface`] provider for the local surface elevation and decides what
//! to do with the answer. Hosts with real water (waves, bounded volumes,
//! rivers) implement the trait themselves; [`FlatWaterSurface`] covers the
//! uniform-ocean case and is the default provider of the plugin.

pub mod surface;

pub use surface::{FlatWaterSurface, WaterSurface};
