//! Presentation geometry
//!
//! Turns a [`Snapshot`] into a backend-neutral [`DrawList`]. The terminal host
//! draws the list directly; [`shapes::tessellate`] turns it into pixel-space
//! triangles for a GPU backend.

pub mod shapes;
pub mod vertex;

pub use shapes::{PixelFrame, PlacedText, tessellate};
pub use vertex::{Vertex, colors};

use crate::settings::Settings;
use crate::sim::{Cell, Grid};
use crate::snapshot::Snapshot;

/// What occupies a drawn cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    SnakeHead,
    SnakeBody,
    Food,
}

/// One filled grid cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSprite {
    pub cell: Cell,
    pub kind: SpriteKind,
    pub color: [f32; 4],
}

/// Where a text item is placed, in pixels of the reference window
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Top-left corner at (x, y)
    TopLeft { x: i32, y: i32 },
    /// Horizontally centred, `dy` pixels below the vertical centre
    Centered { dy: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub anchor: Anchor,
    /// Font size in pixels
    pub size: u16,
    pub color: [f32; 4],
}

/// Everything to draw for one frame, back to front
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub grid: Grid,
    pub background: [f32; 4],
    /// Grid line color, if lines are drawn
    pub grid_lines: Option<[f32; 4]>,
    pub cells: Vec<CellSprite>,
    pub texts: Vec<TextItem>,
}

impl DrawList {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            background: colors::BACKGROUND,
            grid_lines: None,
            cells: Vec::new(),
            texts: Vec::new(),
        }
    }

    fn text(&mut self, text: impl Into<String>, anchor: Anchor, size: u16, color: [f32; 4]) {
        self.texts.push(TextItem {
            text: text.into(),
            anchor,
            size,
            color,
        });
    }
}

/// Build the draw list for a snapshot
pub fn build_draw_list(snapshot: &Snapshot, settings: &Settings) -> DrawList {
    let mut list = DrawList::new(snapshot.grid);

    if snapshot.is_game_over() {
        list.text("GAME OVER", Anchor::Centered { dy: -40 }, 40, colors::GAME_OVER_TEXT);
        list.text(
            format!("Your Score: {}", snapshot.score),
            Anchor::Centered { dy: 10 },
            20,
            colors::FINAL_SCORE_TEXT,
        );
        list.text(
            "Press [ENTER] to play again",
            Anchor::Centered { dy: 40 },
            20,
            colors::PROMPT_TEXT,
        );
        return list;
    }

    if settings.show_grid {
        list.grid_lines = Some(colors::GRID_LINE);
    }

    for (i, &cell) in snapshot.segments.iter().enumerate() {
        let (kind, color) = if i == 0 {
            (SpriteKind::SnakeHead, colors::SNAKE_HEAD)
        } else {
            (SpriteKind::SnakeBody, colors::SNAKE_BODY)
        };
        list.cells.push(CellSprite { cell, kind, color });
    }

    if snapshot.food.active {
        list.cells.push(CellSprite {
            cell: snapshot.food.cell,
            kind: SpriteKind::Food,
            color: colors::FOOD,
        });
    }

    list.text(
        format!("Score: {}", snapshot.score),
        Anchor::TopLeft { x: 10, y: 10 },
        20,
        colors::TEXT,
    );

    if snapshot.paused {
        list.text("PAUSED", Anchor::Centered { dy: -20 }, 40, colors::PAUSED_TEXT);
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState};
    use glam::IVec2;

    fn playing_snapshot() -> Snapshot {
        let mut snap = GameState::new(5).snapshot();
        snap.food.cell = IVec2::new(3, 4);
        snap.score = 30;
        snap
    }

    #[test]
    fn test_playing_draw_list() {
        let list = build_draw_list(&playing_snapshot(), &Settings::default());

        assert_eq!(list.grid_lines, Some(colors::GRID_LINE));
        assert_eq!(list.cells.len(), 4);
        assert_eq!(list.cells[0].kind, SpriteKind::SnakeHead);
        assert_eq!(list.cells[0].cell, IVec2::new(20, 15));
        assert_ne!(list.cells[0].color, list.cells[1].color);
        assert_eq!(list.cells[1].kind, SpriteKind::SnakeBody);
        assert_eq!(list.cells[3].kind, SpriteKind::Food);
        assert_eq!(list.cells[3].cell, IVec2::new(3, 4));
        assert_eq!(list.texts.len(), 1);
        assert_eq!(list.texts[0].text, "Score: 30");
    }

    #[test]
    fn test_grid_lines_follow_settings() {
        let settings = Settings {
            show_grid: false,
            ..Default::default()
        };
        let list = build_draw_list(&playing_snapshot(), &settings);
        assert_eq!(list.grid_lines, None);
    }

    #[test]
    fn test_inactive_food_not_drawn() {
        let mut snap = playing_snapshot();
        snap.food.active = false;
        let list = build_draw_list(&snap, &Settings::default());
        assert!(list.cells.iter().all(|c| c.kind != SpriteKind::Food));
    }

    #[test]
    fn test_paused_overlay() {
        let mut snap = playing_snapshot();
        snap.paused = true;
        let list = build_draw_list(&snap, &Settings::default());
        assert!(list.texts.iter().any(|t| t.text == "PAUSED"));
        // Board stays visible under the overlay
        assert_eq!(list.cells.len(), 4);
    }

    #[test]
    fn test_game_over_screen() {
        let mut snap = playing_snapshot();
        snap.phase = GamePhase::GameOver;
        let list = build_draw_list(&snap, &Settings::default());

        assert!(list.cells.is_empty());
        assert_eq!(list.grid_lines, None);
        let texts: Vec<_> = list.texts.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["GAME OVER", "Your Score: 30", "Press [ENTER] to play again"]
        );
    }
}
