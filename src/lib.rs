//! Splashdown keeps airdropped supply containers behaving believably when
//! they come down over water: they stop sinking, settle to a resting depth,
//! bob gently, and shed their parachute the moment they touch the surface.
//!
//! The host app tags each container entity with [`SupplyDrop`] at spawn and
//! adds [`SplashdownPlugin`]; everything else happens on the fixed simulation
//! tick. Water data stays on the host side behind the [`WaterSurface`] trait.
//!
//! ```no_run
//! use bevy::prelude::*;
//! use splashdown::{FlatWaterSurface, SplashdownPlugin};
//!
//! App::new()
//!     .insert_resource(FlatWaterSurface::new(0.0))
//!     .add_plugins(SplashdownPlugin::<FlatWaterSurface>::default())
//!     .run();
//! ```

pub mod drops;
pub mod sets;
pub mod water;

pub use drops::*;
pub use sets::SplashdownSet;
pub use water::{FlatWaterSurface, WaterSurface};
