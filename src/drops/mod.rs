//! Buoyancy control for airdropped supply containers.
//!
//! A spawned drop falls under host gravity until it crosses a water surface.
//! At that moment it sheds its parachute, joins the active set, and from then
//! on a damped restoring force keeps it bobbing around its resting height.
//!
//! The per-drop state machine lives in [`controller`], the active set in
//! [`registry`], and the Bevy wiring in [`plugin`].

pub mod config;
pub mod controller;
pub mod parachute;
pub mod plugin;
pub mod registry;
pub mod spawn;

pub use config::*;
pub use controller::*;
pub use parachute::*;
pub use plugin::*;
pub use registry::*;
pub use spawn::*;
