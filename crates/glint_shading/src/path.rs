//! Per-path state carried between bounces.

use glint_core::Color;
use glint_math::Ray;

/// The mutable state of one traced path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    /// Ray to trace next
    pub ray: Ray,
    /// Product of the sampling weights collected so far
    pub throughput: Color,
    /// Radiance gathered so far for this path's sample
    pub radiance: Color,
    /// Bounces left before the trace loop retires the path
    pub remaining_bounces: u32,
    /// Image sample this path writes back to
    pub pixel_index: u32,
}

impl PathSegment {
    /// Start a new path with unit throughput and no radiance.
    pub fn new(ray: Ray, pixel_index: u32, max_bounces: u32) -> Self {
        Self {
            ray,
            throughput: Color::ONE,
            radiance: Color::ZERO,
            remaining_bounces: max_bounces,
            pixel_index,
        }
    }

    /// True once the path has no bounces left.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.remaining_bounces == 0
    }

    /// Retire the path, keeping the radiance it has gathered.
    #[inline]
    pub fn terminate(&mut self) {
        self.remaining_bounces = 0;
    }
}
