//! LifeView: maps a `core::Grid` plus playback status into a terminal framebuffer.
//!
//! This module is pure (no I/O). Layout is shared between drawing and mouse
//! hit-testing so a click always lands on the cell that was drawn there.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Coord, SpeedPreset};

const PANEL_W: u16 = 16;
const PANEL_GAP: u16 = 2;

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

/// Status shown next to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HudStatus {
    pub generation: u64,
    pub population: usize,
    pub running: bool,
    pub interval_ms: u32,
    /// Highlighted edit cursor, if any.
    pub cursor: Option<Coord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the grid frame and side panel land for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Top-left corner of the border.
    pub start_x: u16,
    pub start_y: u16,
    /// Terminal columns per grid cell.
    pub cell_w: u16,
    /// Grid rows/columns that fit; the rest is clipped.
    pub visible_rows: u16,
    pub visible_cols: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub panel_x: Option<u16>,
}

impl GridLayout {
    /// Grid cell under terminal position `(x, y)`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Coord> {
        let origin_x = self.start_x.saturating_add(1);
        let origin_y = self.start_y.saturating_add(1);
        if x < origin_x || y < origin_y {
            return None;
        }
        let col = (x - origin_x) / self.cell_w;
        let row = y - origin_y;
        if col >= self.visible_cols || row >= self.visible_rows {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }

    fn cell_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (
            self.start_x + 1 + col * self.cell_w,
            self.start_y + 1 + row,
        )
    }
}

/// A lightweight terminal renderer for the Life grid.
#[derive(Debug, Clone)]
pub struct LifeView {
    /// Preferred cell width in terminal columns; drops to 1 when the grid
    /// would not fit otherwise.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for LifeView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl LifeView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn layout(&self, rows: usize, columns: usize, viewport: Viewport) -> GridLayout {
        let rows = rows.min(u16::MAX as usize) as u16;
        let cols = columns.min(u16::MAX as usize) as u16;
        let inner_w = viewport.width.saturating_sub(2);
        let inner_h = viewport.height.saturating_sub(2);

        let cell_w = if cols.saturating_mul(self.cell_w) <= inner_w {
            self.cell_w
        } else {
            1
        };
        let visible_cols = cols.min(inner_w / cell_w);
        let visible_rows = rows.min(inner_h);
        let frame_w = visible_cols * cell_w + 2;
        let frame_h = visible_rows + 2;

        let group_w = frame_w.saturating_add(PANEL_GAP + PANEL_W);
        let (start_x, panel_x) = if group_w <= viewport.width {
            let x = (viewport.width - group_w) / 2;
            (x, Some(x + frame_w + PANEL_GAP))
        } else {
            (viewport.width.saturating_sub(frame_w) / 2, None)
        };
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        GridLayout {
            start_x,
            start_y,
            cell_w,
            visible_rows,
            visible_cols,
            frame_w,
            frame_h,
            panel_x,
        }
    }

    /// Grid cell under a terminal position, using the same layout as drawing.
    pub fn cell_at(
        &self,
        dimensions: (usize, usize),
        viewport: Viewport,
        x: u16,
        y: u16,
    ) -> Option<Coord> {
        self.layout(dimensions.0, dimensions.1, viewport).cell_at(x, y)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, grid: &Grid, hud: &HudStatus, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(grid.rows(), grid.columns(), viewport);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, layout.start_x, layout.start_y, layout.frame_w, layout.frame_h, border);

        let live = CellStyle::new(Rgb::new(100, 220, 120), Rgb::new(30, 30, 40)).bold();
        let dead = CellStyle::new(Rgb::new(90, 90, 100), Rgb::new(30, 30, 40)).dim();
        let cursor_bg = Rgb::new(90, 90, 150);

        for row in 0..layout.visible_rows {
            let Some(cells) = grid.row(row as usize) else {
                break;
            };
            for (col, &alive) in cells.iter().take(layout.visible_cols as usize).enumerate() {
                let (ch, mut style) = if alive { ('█', live) } else { ('·', dead) };
                if hud.cursor == Some(Coord::new(row as usize, col)) {
                    style.bg = cursor_bg;
                    if alive {
                        style.fg = Rgb::new(160, 255, 170);
                    }
                }
                let (px, py) = layout.cell_origin(row, col as u16);
                fb.fill_rect(px, py, layout.cell_w, 1, ch, style);
            }
        }

        match layout.panel_x {
            Some(panel_x) => draw_side_panel(fb, grid, hud, viewport, panel_x, layout.start_y),
            None => draw_status_line(fb, hud, &layout),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, hud: &HudStatus, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, hud, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn speed_label(interval_ms: u32) -> &'static str {
    match interval_ms {
        ms if ms == SpeedPreset::Fast.interval_ms() => "fast",
        ms if ms == SpeedPreset::Slow.interval_ms() => "slow",
        _ => "custom",
    }
}

fn draw_side_panel(
    fb: &mut FrameBuffer,
    grid: &Grid,
    hud: &HudStatus,
    viewport: Viewport,
    panel_x: u16,
    start_y: u16,
) {
    let label = CellStyle::default().bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    let help = value.dim();

    let mut y = start_y;
    fb.put_str(panel_x, y, "GEN", label);
    y = y.saturating_add(1);
    fb.put_u64(panel_x, y, hud.generation, value);
    y = y.saturating_add(2);

    fb.put_str(panel_x, y, "POP", label);
    y = y.saturating_add(1);
    fb.put_u64(panel_x, y, hud.population as u64, value);
    y = y.saturating_add(2);

    fb.put_str(panel_x, y, "SIZE", label);
    y = y.saturating_add(1);
    let x = fb.put_u64(panel_x, y, grid.rows() as u64, value);
    let x = fb.put_str(x, y, "x", value);
    fb.put_u64(x, y, grid.columns() as u64, value);
    y = y.saturating_add(2);

    fb.put_str(panel_x, y, "SPEED", label);
    y = y.saturating_add(1);
    let x = fb.put_u64(panel_x, y, hud.interval_ms as u64, value);
    let x = fb.put_str(x, y, "ms ", value);
    fb.put_str(x, y, speed_label(hud.interval_ms), help);
    y = y.saturating_add(2);

    let state = if hud.running { "RUNNING" } else { "STOPPED" };
    fb.put_str(panel_x, y, state, label);
    y = y.saturating_add(2);

    const KEYS: [&str; 7] = [
        "g go   s stop",
        "p play n step",
        "r rand c clear",
        "f fast w slow",
        "1 2 3  size",
        "spc/click edit",
        "q quit",
    ];
    for line in KEYS {
        if y >= viewport.height {
            break;
        }
        fb.put_str(panel_x, y, line, help);
        y = y.saturating_add(1);
    }
}

fn draw_status_line(fb: &mut FrameBuffer, hud: &HudStatus, layout: &GridLayout) {
    let y = layout.start_y.saturating_add(layout.frame_h);
    if y >= fb.height() {
        return;
    }
    let style = CellStyle::default();
    let x = fb.put_str(layout.start_x, y, "GEN ", style);
    let x = fb.put_u64(x, y, hud.generation, style);
    let x = fb.put_str(x, y, "  POP ", style);
    let x = fb.put_u64(x, y, hud.population as u64, style);
    let state = if hud.running { "  RUNNING" } else { "  STOPPED" };
    fb.put_str(x, y, state, style.bold());
}
