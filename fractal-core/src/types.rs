use glam::DVec2;

/// A 2-D coordinate on the drawing surface.
///
/// Coordinates are in screen space: `x` grows to the right and `y` grows
/// downward.
pub type Point = DVec2;
