//! Core fractal tree construction and rendering library.
//!
//! Main components:
//! - [`geometry`] — segments, fractal parameters, endpoints and branching.
//! - [`tree`] — the binary tree type and the recursive tree builder.
//! - [`surface`] — the drawing-surface trait and its recording implementations.
//! - [`render`] — pre-order drawing of a segment tree onto a surface.
//! - [`config`] — the fixed parameters of the rendered tree.
//! - [`types`] — shared type aliases.

pub mod config;
pub mod geometry;
pub mod render;
pub mod surface;
pub mod tree;
pub mod types;
