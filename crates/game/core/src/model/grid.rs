use std::collections::BTreeMap;

use crate::config::GameConfig;

use super::MeetingId;

/// Start position of a meeting: day index and half-hour slot index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRef {
    pub day: usize,
    pub slot: usize,
}

impl SlotRef {
    pub const fn new(day: usize, slot: usize) -> Self {
        Self { day, slot }
    }

    /// Position on the week laid out as one line: `day * SLOTS + slot`.
    pub const fn linear(&self) -> usize {
        self.day * GameConfig::SLOTS + self.slot
    }

    /// Linear index one past the last slot of a meeting starting here.
    pub const fn linear_end(&self, duration: usize) -> usize {
        self.linear() + duration
    }

    pub const fn in_bounds(&self) -> bool {
        self.day < GameConfig::DAYS && self.slot < GameConfig::SLOTS
    }
}

/// Meeting id → start position, kept in lockstep with the [`Grid`].
pub type Placements = BTreeMap<MeetingId, SlotRef>;

/// Contents of a single grid cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Immovable block; the index points into the scenario's prefilled list.
    Blocked(usize),
    Meeting(MeetingId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn meeting(&self) -> Option<&MeetingId> {
        match self {
            Cell::Meeting(id) => Some(id),
            _ => None,
        }
    }
}

/// Fixed `DAYS × SLOTS` occupancy matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    days: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            days: vec![vec![Cell::Empty; GameConfig::SLOTS]; GameConfig::DAYS],
        }
    }

    pub fn cell(&self, at: SlotRef) -> Option<&Cell> {
        self.days.get(at.day)?.get(at.slot)
    }

    pub fn day(&self, day: usize) -> Option<&[Cell]> {
        self.days.get(day).map(Vec::as_slice)
    }

    /// Cells covered by a meeting of `duration` slots starting at `at`,
    /// truncated at the end of the day.
    pub fn region(at: SlotRef, duration: usize) -> impl Iterator<Item = SlotRef> {
        let end = (at.slot + duration).min(GameConfig::SLOTS);
        let day = at.day;
        (at.slot..end)
            .filter(move |_| day < GameConfig::DAYS)
            .map(move |slot| SlotRef::new(day, slot))
    }

    pub fn is_region_free(&self, at: SlotRef, duration: usize) -> bool {
        Self::region(at, duration).all(|cell| self.cell(cell).is_some_and(Cell::is_empty))
    }

    /// Writes `cell` into every in-bounds cell of the region.
    pub fn fill(&mut self, at: SlotRef, duration: usize, cell: &Cell) {
        for target in Self::region(at, duration) {
            self.days[target.day][target.slot] = cell.clone();
        }
    }

    /// Clears every cell holding `id` inside the region.
    pub fn clear_meeting(&mut self, at: SlotRef, duration: usize, id: &MeetingId) {
        for target in Self::region(at, duration) {
            let cell = &mut self.days[target.day][target.slot];
            if cell.meeting() == Some(id) {
                *cell = Cell::Empty;
            }
        }
    }

    /// Iterates over every cell with its position.
    pub fn cells(&self) -> impl Iterator<Item = (SlotRef, &Cell)> {
        self.days.iter().enumerate().flat_map(|(day, slots)| {
            slots
                .iter()
                .enumerate()
                .map(move |(slot, cell)| (SlotRef::new(day, slot), cell))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_truncated_at_end_of_day() {
        let cells: Vec<_> = Grid::region(SlotRef::new(1, 16), 4).collect();
        assert_eq!(cells, vec![SlotRef::new(1, 16), SlotRef::new(1, 17)]);
    }

    #[test]
    fn fill_and_clear_round_trip() {
        let mut grid = Grid::new();
        let id = MeetingId::new("sync");
        let at = SlotRef::new(2, 4);

        grid.fill(at, 3, &Cell::Meeting(id.clone()));
        assert!(!grid.is_region_free(SlotRef::new(2, 6), 1));
        assert!(grid.is_region_free(SlotRef::new(2, 7), 2));

        grid.clear_meeting(at, 3, &id);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn linear_index_orders_the_week() {
        assert_eq!(SlotRef::new(0, 17).linear_end(1), SlotRef::new(1, 0).linear());
        assert!(SlotRef::new(0, 17).linear() < SlotRef::new(1, 0).linear());
    }
}
