//! Application entry point for the fractal tree viewer.
//!
//! The tree is built and drawn once, into a [`StrokeRecorder`], before any
//! window exists. The recorded strokes are then handed to [`Viewer`], which
//! paints them every frame.

mod viewer;

use fractal_core::{
    config::Config,
    render::render,
    surface::{StrokeRecorder, SurfaceError},
};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use viewer::{CANVAS_ID, CANVAS_SIZE, Viewer};

/// Fatal errors; any of them ends the run without output.
#[derive(Error, Debug)]
enum ViewError {
    #[error("drawing failed: {0}")]
    Draw(#[from] SurfaceError),

    #[error("could not open the canvas window: {0}")]
    Window(#[from] eframe::Error),
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Renders the default tree and opens the native window that shows it.
///
/// ### Returns
/// - `Ok(())` once the window is closed.
/// - `Err` if a draw operation fails or eframe cannot create the window.
fn main() -> Result<(), ViewError> {
    setup_logging();

    let cfg = Config::default();
    let mut recorder = StrokeRecorder::new();
    let nodes = render(&mut recorder, &cfg)?;
    info!(nodes, "fractal tree recorded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id(CANVAS_ID)
            .with_inner_size([CANVAS_SIZE.x, CANVAS_SIZE.y]),
        ..Default::default()
    };

    let strokes = recorder.into_strokes();
    eframe::run_native(
        "Fractal Tree",
        options,
        Box::new(|_cc| Ok(Box::new(Viewer::new(strokes)))),
    )?;
    Ok(())
}
