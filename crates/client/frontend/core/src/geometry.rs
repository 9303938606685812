//! Pointer hit-testing in terminal cell coordinates.
//!
//! Presentation layers publish where they drew the board; input handling
//! maps pointer positions back to grid slots, queue entries, and the trash
//! zone through these types.

use calendar_core::{GameConfig, SlotRef};

/// Axis-aligned rectangle in terminal cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Layout of the calendar grid: a time-label column on the left and a
/// day-header row on top, followed by `DAYS × SLOTS` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub label_width: u16,
    pub header_height: u16,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl GridGeometry {
    /// Slot under the pointer, or `None` over labels or outside the grid.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<SlotRef> {
        let left = self.origin_x.checked_add(self.label_width)?;
        let top = self.origin_y.checked_add(self.header_height)?;
        if x < left || y < top || self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }
        let day = usize::from((x - left) / self.cell_width);
        let slot = usize::from((y - top) / self.cell_height);
        let at = SlotRef::new(day, slot);
        at.in_bounds().then_some(at)
    }

    /// Screen rectangle covered by one cell.
    pub fn cell_rect(&self, at: SlotRef) -> Rect {
        Rect::new(
            self.origin_x + self.label_width + at.day as u16 * self.cell_width,
            self.origin_y + self.header_height + at.slot as u16 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }

    /// Whole grid including labels.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.label_width + self.cell_width * GameConfig::DAYS as u16,
            self.header_height + self.cell_height * GameConfig::SLOTS as u16,
        )
    }
}

/// Everything a pointer can land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    pub grid: GridGeometry,
    /// Queue panel including its border.
    pub queue: Rect,
    /// Rows per queue entry.
    pub queue_row_height: u16,
    pub trash: Rect,
}

impl BoardLayout {
    /// Index into the visible queue under the pointer.
    pub fn queue_entry_at(&self, x: u16, y: u16) -> Option<usize> {
        if !self.queue.contains(x, y) || self.queue_row_height == 0 {
            return None;
        }
        let inner_top = self.queue.y + 1;
        let inner_bottom = self.queue.y + self.queue.height.saturating_sub(1);
        if y < inner_top || y >= inner_bottom || x == self.queue.x {
            return None;
        }
        Some(usize::from((y - inner_top) / self.queue_row_height))
    }
}
