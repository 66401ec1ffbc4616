use crate::geometry::{FractalParameters, Line};
use crate::types::Point;
use std::f64::consts::FRAC_PI_2;

/// Everything needed to build and draw one fractal tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Number of branching levels below the trunk.
    pub depth: u32,
    pub params: FractalParameters,
    /// The root segment every other segment grows from.
    pub trunk: Line,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            depth: 10,
            params: FractalParameters {
                left_angle: 0.1,
                right_angle: 0.1,
                shrink_factor: 0.8,
            },
            trunk: Line {
                start: Point::new(300.0, 600.0),
                angle: FRAC_PI_2,
                length: 100.0,
                width: 4.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_trunk_points_straight_up() {
        let cfg = Config::default();
        assert_eq!(cfg.trunk.start, Point::new(300.0, 600.0));
        assert_eq!(cfg.trunk.angle, FRAC_PI_2);
        assert_eq!(cfg.depth, 10);
    }
}
