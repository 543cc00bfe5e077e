//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Game space is measured in pixels; the view fits the whole viewport into
//! the terminal while keeping its aspect ratio, assuming terminal cells are
//! about twice as tall as they are wide.

use crate::core::{GameSnapshot, GeometrySnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Obstacle, Phase};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the play field sits in the terminal and how big a cell is in game
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    /// Top-left of the field interior (inside the border).
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
    pub px_per_col: f32,
    pub px_per_row: f32,
}

impl FieldLayout {
    /// Game-space x to a terminal column (may be outside the field).
    pub fn col(&self, gx: f32) -> i32 {
        self.x as i32 + (gx / self.px_per_col).floor() as i32
    }

    /// Game-space y to a terminal row (may be outside the field).
    pub fn row(&self, gy: f32) -> i32 {
        self.y as i32 + (gy / self.px_per_row).floor() as i32
    }

    /// Cell range `[x0, x1) x [y0, y1)` covering a game-space rectangle.
    pub fn cell_rect(&self, gx: f32, gy: f32, gw: f32, gh: f32) -> (i32, i32, i32, i32) {
        let x0 = self.col(gx);
        let y0 = self.row(gy);
        let x1 = self.x as i32 + ((gx + gw) / self.px_per_col).ceil() as i32;
        let y1 = self.y as i32 + ((gy + gh) / self.px_per_row).ceil() as i32;
        (x0, y0, x1.max(x0 + 1), y1.max(y0 + 1))
    }

    fn clip(&self) -> (u16, u16, u16, u16) {
        (self.x, self.y, self.cols, self.rows)
    }
}

// Palette of the original paper-plane art.
const SKY: Rgb = Rgb::new(135, 206, 235);
const OBSTACLE_FILL: Rgb = Rgb::new(46, 139, 87);
const OBSTACLE_EDGE: Rgb = Rgb::new(28, 104, 64);
const PLANE: Rgb = Rgb::new(255, 255, 255);
const PLANE_FOLD: Rgb = Rgb::new(221, 221, 221);
const INK: Rgb = Rgb::new(51, 51, 51);
const ALERT: Rgb = Rgb::new(220, 30, 30);
const BUTTON: Rgb = Rgb::new(76, 175, 80);

/// Smallest field that still shows a recognizable game.
const MIN_FIELD_ROWS: u16 = 8;

pub const TITLE: &str = "Paper Plane Fly";
pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const INSTRUCTIONS: &str = "Hold SPACE to climb. Release to glide down.";
pub const START_PROMPT: &str = "[Enter] Start Game";
pub const RESTART_PROMPT: &str = "[Enter] Play Again";
pub const TOO_SMALL_TEXT: &str = "Terminal too small";

/// A lightweight terminal renderer for the paper plane game.
pub struct GameView {
    /// Terminal cell height divided by width.
    cell_aspect: f32,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 matches typical terminal glyphs.
        Self { cell_aspect: 2.0 }
    }
}

impl GameView {
    /// Fit the game viewport into the terminal, leaving room for a border.
    ///
    /// Returns `None` when the terminal is too small to draw anything useful.
    pub fn layout(&self, geometry: &GeometrySnapshot, viewport: Viewport) -> Option<FieldLayout> {
        let avail_w = viewport.width.saturating_sub(2);
        let avail_h = viewport.height.saturating_sub(2);

        // Columns per row that preserve the game's aspect ratio.
        let cols_per_row = geometry.viewport_width / geometry.viewport_height * self.cell_aspect;
        if !(cols_per_row > 0.0) {
            return None;
        }

        let rows = (avail_h as f32).min((avail_w as f32 / cols_per_row).floor()) as u16;
        let cols = ((rows as f32 * cols_per_row).round() as u16).min(avail_w);
        if rows < MIN_FIELD_ROWS || cols == 0 {
            return None;
        }

        let frame_w = cols + 2;
        let frame_h = rows + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        Some(FieldLayout {
            x: start_x + 1,
            y: start_y + 1,
            cols,
            rows,
            px_per_col: geometry.viewport_width / cols as f32,
            px_per_row: geometry.viewport_height / rows as f32,
        })
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(layout) = self.layout(&snap.geometry, viewport) else {
            fb.put_str_centered(0, viewport.width, viewport.height / 2, TOO_SMALL_TEXT, CellStyle::default());
            return;
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, layout.x - 1, layout.y - 1, layout.cols + 2, layout.rows + 2, border);
        fb.fill_rect(layout.x, layout.y, layout.cols, layout.rows, ' ', CellStyle::new(INK, SKY));

        if snap.phase.shows_menu() {
            self.draw_menu(fb, snap, &layout);
            return;
        }

        if let Some(pair) = snap.obstacles {
            self.draw_obstacle(fb, &layout, &snap.geometry, snap.obstacle_x, &pair.upper);
            self.draw_obstacle(fb, &layout, &snap.geometry, snap.obstacle_x, &pair.lower);
        }
        self.draw_plane(fb, &layout, snap);
        self.draw_score(fb, &layout, snap.score);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// A bar: sea-green body with a darker outline on the sides and on the
    /// edge facing the gap.
    fn draw_obstacle(
        &self,
        fb: &mut FrameBuffer,
        layout: &FieldLayout,
        geometry: &GeometrySnapshot,
        obstacle_x: f32,
        bar: &Obstacle,
    ) {
        let (x0, y0, x1, y1) =
            layout.cell_rect(obstacle_x, bar.top_offset, geometry.obstacle_width, bar.height);
        let fill = CellStyle::new(OBSTACLE_FILL, SKY);
        let edge = CellStyle::new(OBSTACLE_EDGE, SKY);

        fb.fill_rect_clipped((x0, y0, x1, y1), layout.clip(), '█', fill);
        fb.fill_rect_clipped((x0, y0, x0 + 1, y1), layout.clip(), '▐', edge);
        fb.fill_rect_clipped((x1 - 1, y0, x1, y1), layout.clip(), '▌', edge);

        let (edge_row, glyph) = if bar.top_offset <= 0.0 {
            (y1 - 1, '▀')
        } else {
            (y0, '▄')
        };
        fb.fill_rect_clipped((x0, edge_row, x1, edge_row + 1), layout.clip(), glyph, edge);
    }

    /// The plane: a body line with a nose, and a tail fold that points the
    /// plane up while ascending and down while gliding.
    fn draw_plane(&self, fb: &mut FrameBuffer, layout: &FieldLayout, snap: &GameSnapshot) {
        let g = &snap.geometry;
        let (x0, y0, x1, y1) = layout.cell_rect(g.plane_x, snap.plane.y, g.plane_width, g.plane_height);
        let mid = (y0 + y1 - 1) / 2;
        let body = CellStyle::new(PLANE, SKY).bold();
        let fold = CellStyle::new(PLANE_FOLD, SKY);

        fb.fill_rect_clipped((x0, mid, x1 - 1, mid + 1), layout.clip(), '━', body);
        fb.fill_rect_clipped((x1 - 1, mid, x1, mid + 1), layout.clip(), '▶', body);

        let (tail_row, tail) = if snap.plane.ascending {
            (mid + 1, '╱')
        } else {
            (mid - 1, '╲')
        };
        fb.fill_rect_clipped((x0, tail_row, x0 + 1, tail_row + 1), layout.clip(), tail, fold);
    }

    fn draw_score(&self, fb: &mut FrameBuffer, layout: &FieldLayout, score: u32) {
        let style = CellStyle::new(INK, SKY).bold();
        let digits = decimal_len(score);
        let label = "Score: ";
        let w = label.len() as u16 + digits;
        let x = (layout.x + layout.cols).saturating_sub(w + 1).max(layout.x);
        fb.put_str(x, layout.y, label, style);
        fb.put_u32(x + label.len() as u16, layout.y, score, style);
    }

    /// Start / game-over screen.
    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &FieldLayout) {
        let text = CellStyle::new(INK, SKY);
        let (x, w) = (layout.x, layout.cols);
        let mut y = layout.y + layout.rows.saturating_sub(9) / 2;

        fb.put_str_centered(x, w, y, TITLE, text.bold());
        y += 2;

        if snap.phase == Phase::GameOver {
            fb.put_str_centered(x, w, y, GAME_OVER_TEXT, CellStyle::new(ALERT, SKY).bold());
            y += 1;
        }

        let label = "Score: ";
        let line_w = label.len() as u16 + decimal_len(snap.score);
        let sx = x + w.saturating_sub(line_w) / 2;
        fb.put_str(sx, y, label, text);
        fb.put_u32(sx + label.len() as u16, y, snap.score, text);
        y += 2;

        fb.put_str_centered(x, w, y, INSTRUCTIONS, text);
        y += 2;

        let prompt = if snap.phase == Phase::GameOver {
            RESTART_PROMPT
        } else {
            START_PROMPT
        };
        fb.put_str_centered(x, w, y, prompt, CellStyle::new(PLANE, BUTTON).bold());
    }
}

fn decimal_len(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GeometrySnapshot {
        GeometrySnapshot {
            viewport_width: 480.0,
            viewport_height: 800.0,
            plane_x: 50.0,
            plane_width: 60.0,
            plane_height: 40.0,
            obstacle_width: 60.0,
        }
    }

    #[test]
    fn layout_keeps_aspect_ratio() {
        let view = GameView::default();
        // 480x800 with 2:1 cells => 1.2 columns per row.
        let layout = view.layout(&geometry(), Viewport::new(200, 42)).unwrap();
        assert_eq!(layout.rows, 40);
        assert_eq!(layout.cols, 48);
        assert_eq!(layout.px_per_row, 20.0);
        assert_eq!(layout.px_per_col, 10.0);
    }

    #[test]
    fn layout_limited_by_width() {
        let view = GameView::default();
        // 26 columns available => floor(26 / 1.2) = 21 rows.
        let layout = view.layout(&geometry(), Viewport::new(28, 100)).unwrap();
        assert_eq!(layout.rows, 21);
        assert!(layout.cols <= 26);
    }

    #[test]
    fn layout_rejects_tiny_terminals() {
        let view = GameView::default();
        assert!(view.layout(&geometry(), Viewport::new(10, 5)).is_none());
    }

    #[test]
    fn cell_rect_covers_partial_cells() {
        let view = GameView::default();
        let layout = view.layout(&geometry(), Viewport::new(52, 42)).unwrap();
        // 10px columns, 20px rows; plane box 60x40 at (50, 405).
        let (x0, y0, x1, y1) = layout.cell_rect(50.0, 405.0, 60.0, 40.0);
        assert_eq!((x0 - layout.x as i32, x1 - layout.x as i32), (5, 11));
        assert_eq!((y0 - layout.y as i32, y1 - layout.y as i32), (20, 23));
    }

    #[test]
    fn decimal_len_counts_digits() {
        assert_eq!(decimal_len(0), 1);
        assert_eq!(decimal_len(9), 1);
        assert_eq!(decimal_len(10), 2);
        assert_eq!(decimal_len(4_000_000_000), 10);
    }
}
