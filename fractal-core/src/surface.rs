//! The drawing-surface seam.
//!
//! The renderer only talks to a [`Surface`]. Two implementations live here:
//!
//! - [`CommandLog`] records every call verbatim and never fails.
//! - [`StrokeRecorder`] validates calls with canvas-like path rules and
//!   collects each stroked path as a [`Stroke`] for a painter to display.

use crate::types::Point;
use thiserror::Error;
use tracing::trace;

/// Failures raised by a drawing surface.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("{op}: non-finite value {value}")]
    NonFinite { op: &'static str, value: f64 },

    #[error("set_line_width: negative width {0}")]
    NegativeWidth(f64),

    #[error("{op}: no current point, call move_to first")]
    NoCurrentPoint { op: &'static str },

    #[error("stroke_path: path has no segments")]
    EmptyPath,

    #[error("drawing surface unavailable: {0}")]
    Unavailable(String),
}

/// A 2-D context that can build and stroke paths.
///
/// Every operation may fail; callers stop issuing further operations once
/// one does.
pub trait Surface {
    fn move_to(&mut self, p: Point) -> Result<(), SurfaceError>;
    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError>;
    fn line_to(&mut self, p: Point) -> Result<(), SurfaceError>;
    fn close_path(&mut self) -> Result<(), SurfaceError>;
    fn stroke_path(&mut self) -> Result<(), SurfaceError>;
}

/// One call made against a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    MoveTo(Point),
    SetLineWidth(f64),
    LineTo(Point),
    ClosePath,
    StrokePath,
}

/// Surface that appends every call to a list.
#[derive(Debug, Default)]
pub struct CommandLog {
    pub commands: Vec<DrawCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `StrokePath` calls seen so far.
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath))
            .count()
    }
}

impl Surface for CommandLog {
    fn move_to(&mut self, p: Point) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::MoveTo(p));
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::SetLineWidth(width));
        Ok(())
    }

    fn line_to(&mut self, p: Point) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::LineTo(p));
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::ClosePath);
        Ok(())
    }

    fn stroke_path(&mut self) -> Result<(), SurfaceError> {
        self.commands.push(DrawCommand::StrokePath);
        Ok(())
    }
}

/// A finished, stroked path.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub points: Vec<Point>,
    pub width: f64,
    /// Whether the path was closed back to its first point.
    pub closed: bool,
}

/// Validating surface that keeps every stroked path.
///
/// Path rules:
/// - `move_to` starts a new path at the given point.
/// - `line_to` and `close_path` need a current point.
/// - `stroke_path` needs at least one segment; it emits a [`Stroke`] with
///   the current line width and clears the path.
/// - The line width persists across strokes, starting at `1.0`.
#[derive(Debug)]
pub struct StrokeRecorder {
    strokes: Vec<Stroke>,
    path: Vec<Point>,
    closed: bool,
    width: f64,
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self {
            strokes: Vec::new(),
            path: Vec::with_capacity(2),
            closed: false,
            width: 1.0,
        }
    }
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn into_strokes(self) -> Vec<Stroke> {
        self.strokes
    }

    fn check_point(op: &'static str, p: Point) -> Result<(), SurfaceError> {
        for value in [p.x, p.y] {
            if !value.is_finite() {
                return Err(SurfaceError::NonFinite { op, value });
            }
        }
        Ok(())
    }
}

impl Surface for StrokeRecorder {
    fn move_to(&mut self, p: Point) -> Result<(), SurfaceError> {
        Self::check_point("move_to", p)?;
        self.path.clear();
        self.path.push(p);
        self.closed = false;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        if !width.is_finite() {
            return Err(SurfaceError::NonFinite {
                op: "set_line_width",
                value: width,
            });
        }
        if width < 0.0 {
            return Err(SurfaceError::NegativeWidth(width));
        }
        self.width = width;
        Ok(())
    }

    fn line_to(&mut self, p: Point) -> Result<(), SurfaceError> {
        Self::check_point("line_to", p)?;
        if self.path.is_empty() {
            return Err(SurfaceError::NoCurrentPoint { op: "line_to" });
        }
        self.path.push(p);
        Ok(())
    }

    fn close_path(&mut self) -> Result<(), SurfaceError> {
        if self.path.is_empty() {
            return Err(SurfaceError::NoCurrentPoint { op: "close_path" });
        }
        self.closed = true;
        Ok(())
    }

    fn stroke_path(&mut self) -> Result<(), SurfaceError> {
        if self.path.len() < 2 {
            return Err(SurfaceError::EmptyPath);
        }
        let stroke = Stroke {
            points: std::mem::take(&mut self.path),
            width: self.width,
            closed: self.closed,
        };
        trace!(points = stroke.points.len(), width = stroke.width, "stroke");
        self.strokes.push(stroke);
        self.closed = false;
        Ok(())
    }
}
