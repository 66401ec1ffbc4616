//! Segment geometry for the fractal tree.
//!
//! A [`Line`] never stores its far end; [`endpoint`] derives it from the
//! start point, direction and length. [`create_branches`] turns one segment
//! into the two shorter segments that grow out of its tip.

use crate::types::Point;
use std::f64::consts::PI;

/// A directed segment with a stroke width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start: Point,
    /// Direction in radians, measured counter-clockwise from the +x axis.
    pub angle: f64,
    pub length: f64,
    pub width: f64,
}

/// How child branches deviate from and shrink relative to their parent.
///
/// `left_angle` and `right_angle` are expressed as multiples of π.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParameters {
    pub left_angle: f64,
    pub right_angle: f64,
    pub shrink_factor: f64,
}

/// Returns the point reached by walking `line.length` units along
/// `line.angle` from `line.start`.
///
/// The angle follows the usual mathematical convention while the surface
/// has its y-axis pointing down, so the vertical component is subtracted.
///
/// Non-finite inputs yield non-finite coordinates.
#[inline]
pub fn endpoint(line: &Line) -> Point {
    let (sin, cos) = line.angle.sin_cos();
    Point::new(
        line.start.x + line.length * cos,
        line.start.y - line.length * sin,
    )
}

/// Computes the left and right children of `line`.
///
/// Both children start at the tip of `line` and are scaled by
/// `params.shrink_factor` in length and width. The left child turns by
/// `+left_angle·π`, the right child by `-right_angle·π`.
///
/// ### Returns
/// `(left, right)`.
pub fn create_branches(params: &FractalParameters, line: &Line) -> (Line, Line) {
    let tip = endpoint(line);
    let length = line.length * params.shrink_factor;
    let width = line.width * params.shrink_factor;
    let turns = line.angle / PI;

    let left = Line {
        start: tip,
        angle: PI * (turns + params.left_angle),
        length,
        width,
    };
    let right = Line {
        start: tip,
        angle: PI * (turns - params.right_angle),
        length,
        width,
    };
    (left, right)
}
