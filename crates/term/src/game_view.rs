//! GameView: maps a `WorldSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{TileView, WorldSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    CollectibleKind, EnemyKind, MAP_HEIGHT, MAP_WIDTH, MAX_BATTERY, MAX_HEALTH, MAX_OXYGEN,
};

const WATER_BG: Rgb = Rgb::new(8, 16, 32);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Width of the resource gauges in the side panel
const GAUGE_W: u16 = 10;

const HELP: [&str; 4] = ["WASD  move", "IJKL  lamp", "R     reset", "Q     quit"];

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

/// Terminal renderer for the dive map and status panel.
pub struct GameView {
    /// Map cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Outer size of the bordered map in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (MAP_WIDTH as u16 * self.cell_w + 2, MAP_HEIGHT as u16 + 2)
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the terminal size changes.
    pub fn render_into(&self, snap: &WorldSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w + panel_width()) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(120, 160, 200), PANEL_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (y, row) in snap.tiles.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, start_y, x as u16, y as u16, *tile);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if snap.game_over {
            self.draw_game_over(fb, snap, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &WorldSnapshot, viewport: Viewport) -> FrameBuffer {
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

    fn draw_tile(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, tile: TileView) {
        let (ch, style, fill) = tile_glyph(tile);
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y;
        if fill {
            fb.fill_rect(px, py, self.cell_w, 1, ch, style);
        } else {
            fb.fill_rect(px, py, self.cell_w, 1, ' ', CellStyle::new(style.fg, style.bg));
            fb.put_char(px, py, ch, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &WorldSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(panel_width()) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        for (name, current, max, color) in [
            ("HEALTH", snap.health, MAX_HEALTH, Rgb::new(220, 80, 80)),
            ("OXYGEN", snap.oxygen, MAX_OXYGEN, Rgb::new(80, 200, 230)),
            ("BATTERY", snap.battery, MAX_BATTERY, Rgb::new(240, 220, 80)),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x + 8, y, current, value);
            y = y.saturating_add(1);
            draw_gauge(fb, panel_x, y, current, max, color);
            y = y.saturating_add(2);
        }

        for (name, v) in [
            ("SCORE", snap.score),
            ("LIVES", snap.lives),
            ("TURN", snap.turn),
            ("ITEMS", snap.collectibles_left),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x + 8, y, v, value);
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        let dim = value.dim();
        for line in HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        snap: &WorldSnapshot,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);

        let cause = snap.death_cause.map(|c| c.message()).unwrap_or("");
        let lines = ["GAME OVER", cause, "R restart  Q quit"];
        for (i, text) in lines.iter().enumerate() {
            if text.is_empty() {
                continue;
            }
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let row = (mid_y + i as u16).saturating_sub(1);
            fb.put_str(x, row, text, style);
        }
    }
}

/// Width reserved to the right of the map for the status panel
fn panel_width() -> u16 {
    2 + 8 + GAUGE_W.max(5)
}

fn draw_gauge(fb: &mut FrameBuffer, x: u16, y: u16, current: u32, max: u32, color: Rgb) {
    let filled = if max == 0 {
        0
    } else {
        ((current.min(max) * GAUGE_W as u32 + max - 1) / max) as u16
    };
    let on = CellStyle::new(color, PANEL_BG);
    let off = CellStyle::new(Rgb::new(60, 60, 70), PANEL_BG);
    for i in 0..GAUGE_W {
        if i < filled {
            fb.put_char(x + i, y, '█', on);
        } else {
            fb.put_char(x + i, y, '░', off);
        }
    }
}

/// Glyph, style and whether the glyph fills the whole cell width
fn tile_glyph(tile: TileView) -> (char, CellStyle, bool) {
    let water = |fg: Rgb| CellStyle::new(fg, WATER_BG);
    match tile {
        TileView::Dark => ('░', CellStyle::new(Rgb::new(30, 30, 40), PANEL_BG).dim(), true),
        TileView::Wall => ('█', water(Rgb::new(110, 100, 90)), true),
        TileView::Open => ('·', water(Rgb::new(50, 80, 110)).dim(), false),
        TileView::Player => ('P', water(Rgb::new(255, 230, 120)).bold(), false),
        TileView::Enemy(EnemyKind::Stationary) => ('M', water(Rgb::new(230, 70, 70)).bold(), false),
        TileView::Enemy(EnemyKind::Moving) => ('M', water(Rgb::new(220, 90, 220)).bold(), false),
        TileView::Collectible(kind) => {
            let fg = match kind {
                CollectibleKind::Coin => Rgb::new(250, 210, 60),
                CollectibleKind::BatteryPack => Rgb::new(120, 230, 120),
                CollectibleKind::OxygenTank => Rgb::new(120, 210, 250),
            };
            (kind.symbol(), water(fg).bold(), false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_rounds_up_partial_segments() {
        let mut fb = FrameBuffer::new(10, 1);
        draw_gauge(&mut fb, 0, 0, 1, 100, Rgb::new(1, 2, 3));
        assert_eq!(fb.row_text(0), "█░░░░░░░░░");

        draw_gauge(&mut fb, 0, 0, 0, 100, Rgb::new(1, 2, 3));
        assert_eq!(fb.row_text(0), "░░░░░░░░░░");

        draw_gauge(&mut fb, 0, 0, 100, 100, Rgb::new(1, 2, 3));
        assert_eq!(fb.row_text(0), "██████████");
    }

    #[test]
    fn test_letter_tiles_leave_second_column_blank() {
        let view = GameView::default();
        let mut fb = FrameBuffer::new(4, 3);
        view.draw_tile(&mut fb, 0, 0, 0, 0, TileView::Player);
        assert_eq!(fb.get(1, 1).unwrap().ch, 'P');
        assert_eq!(fb.get(2, 1).unwrap().ch, ' ');

        view.draw_tile(&mut fb, 0, 0, 0, 0, TileView::Wall);
        assert_eq!(fb.get(1, 1).unwrap().ch, '█');
        assert_eq!(fb.get(2, 1).unwrap().ch, '█');
    }
}
