//! In-memory port implementations for headless runs and tests

use std::collections::{HashMap, VecDeque};

use super::{AudioSink, FrameClock, InputSource, MapLayer, ScrollLayer, SpriteAttr, TileRef, VideoSink};

/// Replays a fixed list of raw masks, then repeats a fallback forever
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    queue: VecDeque<u16>,
    fallback: u16,
}

impl Default for ScriptedInput {
    /// Nothing pressed, ever
    fn default() -> Self {
        Self::new(Vec::new(), 0xFFFF)
    }
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = u16>, fallback: u16) -> Self {
        Self {
            queue: script.into_iter().collect(),
            fallback,
        }
    }

    /// Queue `raw` for `ticks` more polls
    pub fn hold(&mut self, raw: u16, ticks: usize) {
        self.queue.extend(std::iter::repeat_n(raw, ticks));
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> u16 {
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}

/// Shadow copy of everything written to the display
#[derive(Debug, Clone, Default)]
pub struct RecordedVideo {
    pub cells: HashMap<(MapLayer, u16), TileRef>,
    pub sprites: HashMap<u8, SpriteAttr>,
    pub scroll: HashMap<ScrollLayer, u16>,
    /// Total writes of any kind
    pub writes: usize,
}

impl RecordedVideo {
    pub fn cell(&self, layer: MapLayer, cell: u16) -> Option<TileRef> {
        self.cells.get(&(layer, cell)).copied()
    }

    pub fn sprite(&self, slot: u8) -> Option<SpriteAttr> {
        self.sprites.get(&slot).copied()
    }

    pub fn scroll(&self, layer: ScrollLayer) -> u16 {
        self.scroll.get(&layer).copied().unwrap_or(0)
    }
}

impl VideoSink for RecordedVideo {
    fn write_map_cell(&mut self, layer: MapLayer, cell: u16, tile: TileRef) {
        self.cells.insert((layer, cell), tile);
        self.writes += 1;
    }

    fn write_sprite(&mut self, slot: u8, attr: SpriteAttr) {
        self.sprites.insert(slot, attr);
        self.writes += 1;
    }

    fn write_scroll(&mut self, layer: ScrollLayer, offset: u16) {
        self.scroll.insert(layer, offset);
        self.writes += 1;
    }
}

/// Every rate value triggered, in order
#[derive(Debug, Clone, Default)]
pub struct RecordedAudio {
    pub triggers: Vec<u16>,
}

impl AudioSink for RecordedAudio {
    fn trigger(&mut self, rate: u16) {
        self.triggers.push(rate);
    }
}

/// Clock that never blocks; counts refreshes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWait {
    pub refreshes: u64,
}

impl FrameClock for NoWait {
    fn wait_for_refresh(&mut self) {
        self.refreshes += 1;
    }
}
