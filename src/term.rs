//! Terminal presentation and input
//!
//! Each grid cell is drawn two columns wide so the board looks square.
//! Layout, top to bottom: HUD line, border, grid rows, border.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};

use snack::consts::CELL_SIZE;
use snack::renderer::{Anchor, DrawList, SpriteKind};
use snack::sim::Input;

const HUD_ROW: usize = 0;
const BORDER_ROW: usize = 1;
const GRID_TOP: usize = 2;

/// Host-level command decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Game(Input),
    ToggleMute,
}

/// Map a key press to a command. Releases are ignored.
pub fn map_key(ev: &KeyEvent) -> Option<Command> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }

    let input = match ev.code {
        KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => Input::RequestQuit,
        KeyCode::Right => Input::MoveRight,
        KeyCode::Left => Input::MoveLeft,
        KeyCode::Up => Input::MoveUp,
        KeyCode::Down => Input::MoveDown,
        KeyCode::Enter => Input::Restart,
        KeyCode::Esc => Input::RequestQuit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'd' => Input::MoveRight,
            'a' => Input::MoveLeft,
            'w' => Input::MoveUp,
            's' => Input::MoveDown,
            'p' => Input::TogglePause,
            'q' => Input::RequestQuit,
            'm' => return Some(Command::ToggleMute),
            _ => return None,
        },
        _ => return None,
    };
    Some(Command::Game(input))
}

/// Convert a palette color; near-black maps to the terminal's default
/// foreground so text stays readable on dark themes
pub fn term_color(rgba: [f32; 4]) -> Color {
    let [r, g, b, _] = rgba;
    let luminance = 0.2126 * r + 0.7152 * g + 0.0722 * b;
    if luminance < 0.15 {
        return Color::Reset;
    }
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color::Rgb {
        r: to_u8(r),
        g: to_u8(g),
        b: to_u8(b),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Glyph {
    ch: char,
    color: Color,
}

/// Character buffer for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    glyphs: Vec<Glyph>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let blank = Glyph {
            ch: ' ',
            color: Color::Reset,
        };
        Self {
            width,
            height,
            glyphs: vec![blank; width * height],
        }
    }

    /// Out-of-range writes are clipped
    fn put(&mut self, col: usize, row: usize, ch: char, color: Color) {
        if col < self.width && row < self.height {
            self.glyphs[row * self.width + col] = Glyph { ch, color };
        }
    }

    fn put_str(&mut self, col: usize, row: usize, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i, row, ch, color);
        }
    }

    #[cfg(test)]
    fn row_text(&self, row: usize) -> String {
        self.glyphs[row * self.width..(row + 1) * self.width]
            .iter()
            .map(|g| g.ch)
            .collect()
    }

    /// Runs of equally colored text in a row
    fn row_runs(&self, row: usize) -> Vec<(Color, String)> {
        let mut runs: Vec<(Color, String)> = Vec::new();
        for glyph in &self.glyphs[row * self.width..(row + 1) * self.width] {
            if let Some((color, text)) = runs.last_mut() {
                if *color == glyph.color {
                    text.push(glyph.ch);
                    continue;
                }
            }
            runs.push((glyph.color, glyph.ch.to_string()));
        }
        runs
    }
}

/// Lay a draw list out as terminal characters
pub fn compose(list: &DrawList) -> Canvas {
    let grid_w = list.grid.width as usize;
    let grid_h = list.grid.height as usize;
    let width = grid_w * 2 + 2;
    let height = grid_h + GRID_TOP + 1;
    let mut canvas = Canvas::new(width, height);

    // Border
    let border = Color::Reset;
    let bottom = GRID_TOP + grid_h;
    for col in 0..width {
        let ch = if col == 0 || col == width - 1 { '+' } else { '-' };
        canvas.put(col, BORDER_ROW, ch, border);
        canvas.put(col, bottom, ch, border);
    }
    for row in GRID_TOP..bottom {
        canvas.put(0, row, '|', border);
        canvas.put(width - 1, row, '|', border);
    }

    if let Some(color) = list.grid_lines {
        let color = term_color(color);
        for row in 0..grid_h {
            for col in 0..grid_w {
                canvas.put(1 + col * 2, GRID_TOP + row, '·', color);
            }
        }
    }

    for sprite in &list.cells {
        let cell = sprite.cell;
        if !list.grid.contains(cell) {
            continue;
        }
        let glyphs = match sprite.kind {
            SpriteKind::SnakeHead => "██",
            SpriteKind::SnakeBody => "▓▓",
            SpriteKind::Food => "()",
        };
        let col = 1 + cell.x as usize * 2;
        canvas.put_str(col, GRID_TOP + cell.y as usize, glyphs, term_color(sprite.color));
    }

    let middle = (GRID_TOP + grid_h / 2) as i32;
    for item in &list.texts {
        let len = item.text.chars().count();
        let color = term_color(item.color);
        match item.anchor {
            Anchor::TopLeft { .. } => canvas.put_str(1, HUD_ROW, &item.text, color),
            Anchor::Centered { dy } => {
                let row = (middle + dy / CELL_SIZE).max(0) as usize;
                let col = width.saturating_sub(len) / 2;
                canvas.put_str(col, row, &item.text, color);
            }
        }
    }

    canvas
}

/// Owns the terminal while the game runs; restores it on drop
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn setup() -> io::Result<Self> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { stdout })
    }

    fn restore(&mut self) -> io::Result<()> {
        execute!(self.stdout, ResetColor, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Drain pending key events without blocking
    pub fn read_commands(&self) -> io::Result<Vec<Command>> {
        let mut commands = Vec::new();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(ev) = event::read()? {
                commands.extend(map_key(&ev));
            }
        }
        Ok(commands)
    }

    pub fn draw(&mut self, list: &DrawList) -> io::Result<()> {
        let canvas = compose(list);
        for row in 0..canvas.height {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            for (color, text) in canvas.row_runs(row) {
                queue!(self.stdout, SetForegroundColor(color), Print(text))?;
            }
        }
        queue!(self.stdout, ResetColor)?;
        self.stdout.flush()
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("Failed to restore terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;
    use snack::Settings;
    use snack::renderer::build_draw_list;
    use snack::sim::{GamePhase, GameState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            map_key(&press(KeyCode::Up)),
            Some(Command::Game(Input::MoveUp))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('A'))),
            Some(Command::Game(Input::MoveLeft))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('p'))),
            Some(Command::Game(Input::TogglePause))
        );
        assert_eq!(
            map_key(&press(KeyCode::Enter)),
            Some(Command::Game(Input::Restart))
        );
        assert_eq!(
            map_key(&press(KeyCode::Esc)),
            Some(Command::Game(Input::RequestQuit))
        );
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Game(Input::RequestQuit))
        );
        assert_eq!(map_key(&press(KeyCode::Char('m'))), Some(Command::ToggleMute));
        assert_eq!(map_key(&press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut ev = press(KeyCode::Up);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_key(&ev), None);
    }

    #[test]
    fn test_dark_colors_use_default_foreground() {
        assert_eq!(term_color([0.0, 0.0, 0.0, 1.0]), Color::Reset);
        assert_eq!(
            term_color([1.0, 0.0, 0.5, 1.0]),
            Color::Rgb {
                r: 255,
                g: 0,
                b: 128
            }
        );
    }

    #[test]
    fn test_compose_playing_board() {
        let mut state = GameState::new(4);
        state.food.cell = IVec2::new(0, 0);
        let list = build_draw_list(&state.snapshot(), &Settings::default());

        let canvas = compose(&list);

        assert_eq!(canvas.width, 82);
        assert_eq!(canvas.height, 33);
        assert!(canvas.row_text(HUD_ROW).starts_with(" Score: 0"));
        assert!(canvas.row_text(BORDER_ROW).starts_with("+---"));
        assert!(canvas.row_text(GRID_TOP).starts_with("|()"));

        let snake_row = canvas.row_text(GRID_TOP + 15);
        let chars: Vec<char> = snake_row.chars().collect();
        // Head at x=20 -> columns 41..43, body trails to the left
        assert_eq!(chars[41], '█');
        assert_eq!(chars[39], '▓');
        assert_eq!(chars[37], '▓');
    }

    #[test]
    fn test_compose_game_over_text() {
        let mut snap = GameState::new(4).snapshot();
        snap.phase = GamePhase::GameOver;
        snap.score = 50;
        let list = build_draw_list(&snap, &Settings::default());

        let canvas = compose(&list);

        // Middle row is GRID_TOP + 15 = 17; "GAME OVER" sits two rows above
        assert!(canvas.row_text(15).contains("GAME OVER"));
        assert!(canvas.row_text(17).contains("Your Score: 50"));
        assert!(canvas.row_text(19).contains("Press [ENTER] to play again"));
    }
}
