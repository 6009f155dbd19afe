//! Surface height providers.

use bevy::math::Vec3;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Source of local water-surface elevations.
///
/// Returning `None` means the position does not intersect any water volume.
/// That is not an error: objects over dry land simply stay under host gravity.
pub trait WaterSurface: Send + Sync + 'static {
    /// Surface height (Y coordinate) at `position`, or `None` when there is
    /// no water there.
    fn surface_height(&self, position: Vec3) -> Option<f32>;

    /// Whether `position` sits at or below the local water surface.
    fn is_submerged(&self, position: Vec3) -> bool {
        self.surface_height(position)
            .is_some_and(|surface| position.y <= surface)
    }
}

impl<F> WaterSurface for F
where
    F: Fn(Vec3) -> Option<f32> + Send + Sync + 'static,
{
    fn surface_height(&self, position: Vec3) -> Option<f32> {
        self(position)
    }
}

/// Uniform water level covering the whole world.
///
/// The degenerate provider: every query succeeds and reports the same
/// elevation. Good enough for open-ocean maps and for tests.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Reflect, Serialize, Deserialize)]
#[reflect(Resource)]
pub struct FlatWaterSurface {
    /// Surface elevation (Y coordinate).
    pub level: f32,
}

impl FlatWaterSurface {
    pub fn new(level: f32) -> Self {
        Self { level }
    }
}

impl WaterSurface for FlatWaterSurface {
    fn surface_height(&self, _position: Vec3) -> Option<f32> {
        Some(self.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_surface_reports_level_everywhere() {
        let water = FlatWaterSurface::new(4.0);
        assert_eq!(water.surface_height(Vec3::ZERO), Some(4.0));
        assert_eq!(water.surface_height(Vec3::new(100.0, -20.0, 7.5)), Some(4.0));
    }

    #[test]
    fn test_submersion_boundary() {
        let water = FlatWaterSurface::new(0.0);
        assert!(water.is_submerged(Vec3::new(0.0, -0.1, 0.0)));
        assert!(water.is_submerged(Vec3::ZERO)); // exactly on the line counts
        assert!(!water.is_submerged(Vec3::new(0.0, 0.1, 0.0)));
    }

    #[test]
    fn test_closure_provider() {
        // Water only exists below x = 0, surface at y = 2.
        let water = |position: Vec3| (position.x < 0.0).then_some(2.0);
        assert_eq!(water.surface_height(Vec3::new(-1.0, 0.0, 0.0)), Some(2.0));
        assert_eq!(water.surface_height(Vec3::new(1.0, 0.0, 0.0)), None);
    }
}
