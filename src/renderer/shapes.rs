//! Shape generation for 2D primitives
//!
//! Pixel space: origin at the window's top-left, y down, one grid cell is
//! `CELL_SIZE` pixels square.

use glam::{IVec2, Vec2};

use super::vertex::Vertex;
use super::{Anchor, DrawList, TextItem};
use crate::consts::CELL_SIZE;
use crate::sim::Grid;

/// Rough glyph advance as a fraction of font size
const GLYPH_ADVANCE: f32 = 0.5;

/// Text positioned in pixels; glyph rendering is left to the backend
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    /// Top-left corner in pixels
    pub pos: Vec2,
    pub size: u16,
    pub color: [f32; 4],
}

/// Triangles and text for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PixelFrame {
    pub size: Vec2,
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub texts: Vec<PlacedText>,
}

/// Window size in pixels for a grid
pub fn screen_size(grid: &Grid) -> Vec2 {
    Vec2::new(
        (grid.width * CELL_SIZE) as f32,
        (grid.height * CELL_SIZE) as f32,
    )
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices covering one grid cell
pub fn cell_quad(cell: IVec2, color: [f32; 4]) -> [Vertex; 6] {
    let min = (cell * CELL_SIZE).as_vec2();
    rect(min, Vec2::splat(CELL_SIZE as f32), color)
}

/// Generate vertices for one-pixel grid lines at every cell boundary
pub fn grid_lines(grid: &Grid, color: [f32; 4]) -> Vec<Vertex> {
    let size = screen_size(grid);
    let count = (grid.width + grid.height) as usize;
    let mut vertices = Vec::with_capacity(count * 6);

    for x in 0..grid.width {
        let px = (x * CELL_SIZE) as f32;
        vertices.extend(rect(Vec2::new(px, 0.0), Vec2::new(1.0, size.y), color));
    }
    for y in 0..grid.height {
        let py = (y * CELL_SIZE) as f32;
        vertices.extend(rect(Vec2::new(0.0, py), Vec2::new(size.x, 1.0), color));
    }

    vertices
}

/// Approximate rendered width of a string
pub fn measure_text(text: &str, size: u16) -> f32 {
    text.chars().count() as f32 * size as f32 * GLYPH_ADVANCE
}

/// Resolve a text anchor to a pixel position
pub fn place_text(item: &TextItem, screen: Vec2) -> PlacedText {
    let pos = match item.anchor {
        Anchor::TopLeft { x, y } => Vec2::new(x as f32, y as f32),
        Anchor::Centered { dy } => Vec2::new(
            screen.x / 2.0 - measure_text(&item.text, item.size) / 2.0,
            screen.y / 2.0 + dy as f32,
        ),
    };
    PlacedText {
        text: item.text.clone(),
        pos,
        size: item.size,
        color: item.color,
    }
}

/// Tessellate a draw list into pixel-space triangles
pub fn tessellate(list: &DrawList) -> PixelFrame {
    let size = screen_size(&list.grid);
    let mut vertices = Vec::with_capacity(list.cells.len() * 6);

    if let Some(color) = list.grid_lines {
        vertices.extend(grid_lines(&list.grid, color));
    }
    for sprite in &list.cells {
        vertices.extend(cell_quad(sprite.cell, sprite.color));
    }

    PixelFrame {
        size,
        clear_color: list.background,
        vertices,
        texts: list.texts.iter().map(|t| place_text(t, size)).collect(),
    }
}
