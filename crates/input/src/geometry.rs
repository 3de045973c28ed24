//! Hit-test geometry for pointer and touch input.

use arrayvec::ArrayVec;
use phonics_play_types::MAX_ROUND_TOKENS;

/// Pointer position in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. Right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Slot rectangles for the current round, in slot order. Hosts rebuild the
/// layout whenever the round or the viewport changes.
#[derive(Debug, Clone, Default)]
pub struct SlotLayout {
    slots: ArrayVec<Rect, MAX_ROUND_TOKENS>,
}

impl SlotLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Append one slot rectangle. A layout mirrors the active round, which
    /// never holds more than [`MAX_ROUND_TOKENS`] slots; pushing beyond
    /// that capacity panics.
    pub fn push(&mut self, rect: Rect) {
        self.slots.push(rect);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn rect(&self, slot: usize) -> Option<Rect> {
        self.slots.get(slot).copied()
    }

    /// Slot under the pointer, if any. Earlier slots win on overlap.
    pub fn slot_at(&self, point: Point) -> Option<u8> {
        self.slots
            .iter()
            .position(|rect| rect.contains(point))
            .map(|i| i as u8)
    }
}
