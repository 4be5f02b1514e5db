//! External interfaces the game talks to
//!
//! The simulation never touches hardware. It reads one keypad snapshot per
//! tick and issues semantic writes to a video sink and an audio sink; a frame
//! clock provides the only wait in the loop.

pub mod recording;

pub use recording::{NoWait, RecordedAudio, RecordedVideo, ScriptedInput};

/// Tile map the background writes target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapLayer {
    /// Static score row
    Hud,
    /// Fast star layer
    NearStars,
    /// Slow star layer
    FarStars,
}

/// Scrolling star layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollLayer {
    Near,
    Far,
}

/// Tile index plus 16-colour palette bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileRef {
    pub tile: u16,
    pub palette: u8,
}

/// Sprite outline class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpriteShape {
    #[default]
    Square,
    Wide,
    Tall,
}

/// One sprite attribute entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteAttr {
    pub x: i32,
    pub y: i32,
    pub shape: SpriteShape,
    /// Size step within the shape (0 = smallest)
    pub size: u8,
    pub tile: TileRef,
}

impl SpriteAttr {
    /// Pixel extent for the shape/size pair
    pub fn dimensions(&self) -> (i32, i32) {
        const SQUARE: [(i32, i32); 4] = [(8, 8), (16, 16), (32, 32), (64, 64)];
        const WIDE: [(i32, i32); 4] = [(16, 8), (32, 8), (32, 16), (64, 32)];
        let size = usize::from(self.size.min(3));
        match self.shape {
            SpriteShape::Square => SQUARE[size],
            SpriteShape::Wide => WIDE[size],
            SpriteShape::Tall => (WIDE[size].1, WIDE[size].0),
        }
    }
}

/// Keypad, polled once per tick
pub trait InputSource {
    /// Raw active-low button mask (0 bit = pressed)
    fn poll(&mut self) -> u16;
}

/// Write-only display
pub trait VideoSink {
    fn write_map_cell(&mut self, layer: MapLayer, cell: u16, tile: TileRef);
    fn write_sprite(&mut self, slot: u8, attr: SpriteAttr);
    fn write_scroll(&mut self, layer: ScrollLayer, offset: u16);
}

/// Write-only sound channel
pub trait AudioSink {
    /// Retrigger the square channel at an 11-bit rate value
    fn trigger(&mut self, rate: u16);
}

/// The loop's single suspension point
pub trait FrameClock {
    /// Block until the next refresh boundary
    fn wait_for_refresh(&mut self);
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> u16 {
        (**self).poll()
    }
}

impl<T: VideoSink + ?Sized> VideoSink for &mut T {
    fn write_map_cell(&mut self, layer: MapLayer, cell: u16, tile: TileRef) {
        (**self).write_map_cell(layer, cell, tile)
    }

    fn write_sprite(&mut self, slot: u8, attr: SpriteAttr) {
        (**self).write_sprite(slot, attr)
    }

    fn write_scroll(&mut self, layer: ScrollLayer, offset: u16) {
        (**self).write_scroll(layer, offset)
    }
}

impl<T: AudioSink + ?Sized> AudioSink for &mut T {
    fn trigger(&mut self, rate: u16) {
        (**self).trigger(rate)
    }
}
