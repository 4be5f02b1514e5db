//! Character-cell display
//!
//! One character stands for an 8x8 tile, so the 240x160 screen becomes a
//! 30x20 grid. Video writes land in shadow copies of the maps, sprite table
//! and scroll registers; `flush` composes and draws them in one go.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{self, Color, Print},
    terminal,
};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::ports::{MapLayer, ScrollLayer, SpriteAttr, TileRef, VideoSink};
use crate::renderer::CRAFT_SLOT;
use crate::renderer::hud::DIGIT_TILE_BASE;
use crate::renderer::starfield::{MAP_COLUMNS, MAP_ROWS, STAR_PATTERNS};

/// Pixels per character cell
pub const CELL: i32 = 8;
pub const VIEW_COLUMNS: usize = (SCREEN_WIDTH / CELL) as usize;
pub const VIEW_ROWS: usize = (SCREEN_HEIGHT / CELL) as usize;

const MAP_CELLS: usize = MAP_COLUMNS as usize * MAP_ROWS as usize;

const C_HUD: Color = Color::Yellow;
const C_NEAR: Color = Color::White;
const C_FAR: Color = Color::DarkGrey;
const C_CRAFT: Color = Color::Cyan;
const C_METEOR: Color = Color::Red;
const C_STATUS: Color = Color::DarkGrey;

type Grid = [[(char, Color); VIEW_COLUMNS]; VIEW_ROWS];

/// Terminal-backed video sink
pub struct Terminal<W: Write> {
    out: W,
    hud: BTreeMap<u16, TileRef>,
    near: Vec<TileRef>,
    far: Vec<TileRef>,
    sprites: BTreeMap<u8, SpriteAttr>,
    near_scroll: u16,
    far_scroll: u16,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            hud: BTreeMap::new(),
            near: vec![TileRef::default(); MAP_CELLS],
            far: vec![TileRef::default(); MAP_CELLS],
            sprites: BTreeMap::new(),
            near_scroll: 0,
            far_scroll: 0,
        }
    }

    /// Build the character grid from the shadow state
    pub fn compose(&self) -> Grid {
        let mut grid: Grid = [[(' ', C_FAR); VIEW_COLUMNS]; VIEW_ROWS];

        for (row, line) in grid.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                if let Some(ch) = star_glyph(self.map_at(&self.far, self.far_scroll, row, col)) {
                    *cell = (ch, C_FAR);
                }
                if let Some(ch) = star_glyph(self.map_at(&self.near, self.near_scroll, row, col)) {
                    *cell = (ch, C_NEAR);
                }
            }
        }

        for (&slot, attr) in &self.sprites {
            let (glyph, color) = if slot == CRAFT_SLOT {
                ('>', C_CRAFT)
            } else {
                ('@', C_METEOR)
            };
            stamp(&mut grid, attr, glyph, color);
        }

        // The HUD row sits above everything
        for (&cell, tile) in &self.hud {
            let col = usize::from(cell);
            if col < VIEW_COLUMNS {
                grid[0][col] = (digit_glyph(*tile), C_HUD);
            }
        }
        grid
    }

    /// Draw the composed screen plus a status line under it
    pub fn flush(&mut self, status: &str) -> io::Result<()> {
        let grid = self.compose();
        for (row, line) in grid.iter().enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;
            let mut current = None;
            for &(ch, color) in line {
                if current != Some(color) {
                    self.out.queue(style::SetForegroundColor(color))?;
                    current = Some(color);
                }
                self.out.queue(Print(ch))?;
            }
        }

        self.out.queue(cursor::MoveTo(0, VIEW_ROWS as u16))?;
        self.out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        self.out.queue(style::SetForegroundColor(C_STATUS))?;
        self.out.queue(Print(status))?;
        self.out.queue(style::ResetColor)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Tile under view cell (row, col) with the layer scrolled by `scroll` pixels
    fn map_at(&self, map: &[TileRef], scroll: u16, row: usize, col: usize) -> TileRef {
        let columns = MAP_COLUMNS as usize;
        let shifted = (col + usize::from(scroll) / CELL as usize) % columns;
        map.get(row * columns + shifted).copied().unwrap_or_default()
    }
}

impl<W: Write> VideoSink for Terminal<W> {
    fn write_map_cell(&mut self, layer: MapLayer, cell: u16, tile: TileRef) {
        let map = match layer {
            MapLayer::Hud => {
                self.hud.insert(cell, tile);
                return;
            }
            MapLayer::NearStars => &mut self.near,
            MapLayer::FarStars => &mut self.far,
        };
        if let Some(slot) = map.get_mut(usize::from(cell)) {
            *slot = tile;
        }
    }

    fn write_sprite(&mut self, slot: u8, attr: SpriteAttr) {
        self.sprites.insert(slot, attr);
    }

    fn write_scroll(&mut self, layer: ScrollLayer, offset: u16) {
        match layer {
            ScrollLayer::Near => self.near_scroll = offset,
            ScrollLayer::Far => self.far_scroll = offset,
        }
    }
}

/// Only the brightest star pattern shows at character resolution
fn star_glyph(tile: TileRef) -> Option<char> {
    (tile.tile == STAR_PATTERNS).then_some('.')
}

fn digit_glyph(tile: TileRef) -> char {
    tile.tile
        .checked_sub(DIGIT_TILE_BASE)
        .and_then(|d| char::from_digit(u32::from(d), 10))
        .unwrap_or('?')
}

/// Fill the cells a sprite covers; anything past the screen edge is clipped
fn stamp(grid: &mut Grid, attr: &SpriteAttr, glyph: char, color: Color) {
    let (w, h) = attr.dimensions();
    let cols = (attr.x / CELL)..((attr.x + w) / CELL);
    let rows = (attr.y / CELL)..((attr.y + h) / CELL);
    for row in rows {
        for col in cols.clone() {
            if (0..VIEW_ROWS as i32).contains(&row) && (0..VIEW_COLUMNS as i32).contains(&col) {
                grid[row as usize][col as usize] = (glyph, color);
            }
        }
    }
}

/// Raw mode + alternate screen for the lifetime of the value
pub struct TerminalSession {
    keyboard_enhanced: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;
        out.execute(terminal::Clear(terminal::ClearType::All))?;

        // Release events where the terminal supports them; others fall back to the hold window
        let keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        Ok(Self { keyboard_enhanced })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
