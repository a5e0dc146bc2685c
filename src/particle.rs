//! Particle records binned and linked by the rest of the crate.

use glam::Vec3;

/// A single simulation particle.
///
/// Positions are usually in code units, where one unit is the side of one
/// grid cell (and therefore one linking length). Velocities ride along
/// untouched so group catalogs can be assembled without a second lookup
/// pass over the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    /// Unique 64-bit identifier.
    pub id: u64,
    /// Position.
    pub x: Vec3,
    /// Velocity. Carried, never read by the clustering core.
    pub v: Vec3,
}

impl Particle {
    /// Particle with the given id and position and zero velocity.
    #[inline]
    pub fn new(id: u64, x: Vec3) -> Self {
        Self {
            id,
            x,
            v: Vec3::ZERO,
        }
    }
}
