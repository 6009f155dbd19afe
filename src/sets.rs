use bevy::prelude::*;

/// Ordering of the drop-control systems within `FixedUpdate`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SplashdownSet {
    /// Attach controllers to newly spawned drops.
    Watch,
    /// Per-tick water checks and force application.
    Advance,
    /// Release registry entries for despawned drops.
    Cleanup,
}
