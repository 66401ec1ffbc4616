//! Drawing a segment tree onto a [`Surface`].
//!
//! Every segment becomes its own stroked path. Segments are issued in
//! pre-order (parent, left subtree, right subtree), so later branches are
//! painted on top of earlier ones.

use crate::{
    config::Config,
    geometry::{Line, endpoint},
    surface::{Surface, SurfaceError},
    tree::{Tree, create_tree},
};
use tracing::debug;

/// Strokes a single segment.
///
/// Issues `move_to`, `set_line_width`, `line_to`, `close_path` and
/// `stroke_path` in that order, stopping at the first failure.
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, line: &Line) -> Result<(), SurfaceError> {
    let tip = endpoint(line);
    surface.move_to(line.start)?;
    surface.set_line_width(line.width)?;
    surface.line_to(tip)?;
    surface.close_path()?;
    surface.stroke_path()
}

/// Strokes every segment of `tree` in pre-order.
///
/// A failure aborts everything not yet drawn, siblings and descendants
/// included.
pub fn draw_tree<S: Surface + ?Sized>(
    surface: &mut S,
    tree: &Tree<Line>,
) -> Result<(), SurfaceError> {
    match tree {
        Tree::Leaf(line) => draw_line(surface, line),
        Tree::Node { value, left, right } => {
            draw_line(surface, value)?;
            draw_tree(surface, left)?;
            draw_tree(surface, right)
        }
    }
}

/// Builds the tree described by `cfg` and draws it.
///
/// ### Returns
/// The number of segments drawn.
pub fn render<S: Surface + ?Sized>(surface: &mut S, cfg: &Config) -> Result<usize, SurfaceError> {
    let tree = create_tree(cfg.depth, &cfg.params, cfg.trunk);
    let nodes = tree.node_count();
    debug!(depth = cfg.depth, nodes, "built fractal tree");

    draw_tree(surface, &tree)?;
    debug!(nodes, "rendered fractal tree");
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        geometry::FractalParameters,
        surface::{CommandLog, DrawCommand, StrokeRecorder},
        types::Point,
    };

    fn params() -> FractalParameters {
        FractalParameters {
            left_angle: 0.1,
            right_angle: 0.1,
            shrink_factor: 0.8,
        }
    }

    fn trunk() -> Line {
        Line {
            start: Point::new(300.0, 600.0),
            angle: std::f64::consts::FRAC_PI_2,
            length: 100.0,
            width: 4.0,
        }
    }

    /// Fails once a given number of calls have succeeded.
    struct FailAfter {
        log: CommandLog,
        budget: usize,
    }

    impl FailAfter {
        fn tick(&mut self) -> Result<(), SurfaceError> {
            if self.budget == 0 {
                return Err(SurfaceError::Unavailable("budget exhausted".into()));
            }
            self.budget -= 1;
            Ok(())
        }
    }

    impl Surface for FailAfter {
        fn move_to(&mut self, p: Point) -> Result<(), SurfaceError> {
            self.tick()?;
            self.log.move_to(p)
        }
        fn set_line_width(&mut self, width: f64) -> Result<(), SurfaceError> {
            self.tick()?;
            self.log.set_line_width(width)
        }
        fn line_to(&mut self, p: Point) -> Result<(), SurfaceError> {
            self.tick()?;
            self.log.line_to(p)
        }
        fn close_path(&mut self) -> Result<(), SurfaceError> {
            self.tick()?;
            self.log.close_path()
        }
        fn stroke_path(&mut self) -> Result<(), SurfaceError> {
            self.tick()?;
            self.log.stroke_path()
        }
    }

    #[test]
    fn draw_line_issues_commands_in_order() {
        let mut log = CommandLog::new();
        let line = trunk();
        draw_line(&mut log, &line).unwrap();

        assert_eq!(
            log.commands,
            vec![
                DrawCommand::MoveTo(line.start),
                DrawCommand::SetLineWidth(4.0),
                DrawCommand::LineTo(endpoint(&line)),
                DrawCommand::ClosePath,
                DrawCommand::StrokePath,
            ]
        );
    }

    #[test]
    fn draw_tree_strokes_each_node_in_pre_order() {
        let tree = create_tree(4, &params(), trunk());
        let mut log = CommandLog::new();
        draw_tree(&mut log, &tree).unwrap();

        assert_eq!(log.stroke_count(), tree.node_count());

        let starts: Vec<Point> = log
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::MoveTo(p) => Some(*p),
                _ => None,
            })
            .collect();
        let expected: Vec<Point> = tree.pre_order().map(|l| l.start).collect();
        assert_eq!(starts, expected);
    }

    #[test]
    fn failure_aborts_remaining_draws() {
        let tree = create_tree(2, &params(), trunk());
        // Root line (5 calls) plus the move_to of the left child.
        let mut surface = FailAfter {
            log: CommandLog::new(),
            budget: 6,
        };

        let err = draw_tree(&mut surface, &tree).unwrap_err();
        assert!(matches!(err, SurfaceError::Unavailable(_)));
        assert_eq!(surface.log.commands.len(), 6);
        assert_eq!(surface.log.stroke_count(), 1);
    }

    #[test]
    fn non_finite_geometry_stops_at_the_recorder() {
        let mut line = trunk();
        line.angle = f64::NAN;
        let tree = create_tree(1, &params(), line);
        let mut rec = StrokeRecorder::new();

        let err = draw_tree(&mut rec, &tree).unwrap_err();
        assert!(matches!(err, SurfaceError::NonFinite { op: "line_to", .. }));
        assert!(rec.strokes().is_empty());
    }

    #[test]
    fn render_reports_drawn_segments() {
        let cfg = Config {
            depth: 3,
            ..Config::default()
        };
        let mut rec = StrokeRecorder::new();
        assert_eq!(render(&mut rec, &cfg).unwrap(), 15);
        assert_eq!(rec.strokes().len(), 15);
    }
}
