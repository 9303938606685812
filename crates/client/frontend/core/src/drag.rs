//! Pointer drag tracking and drop resolution.

use calendar_core::{Meeting, MeetingId};

use crate::geometry::BoardLayout;

/// Where the held meeting was picked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOrigin {
    Queue,
    /// Lifted off the calendar; it is back in the queue while held.
    Grid,
}

/// What releasing the pointer means.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropIntent {
    Trash,
    /// Over the trash zone, but the meeting cannot be trashed.
    TrashRefused,
    Place { day: usize, slot: usize },
    /// Released outside every target; the meeting stays in the queue.
    Cancel,
}

impl DropIntent {
    /// Classifies a release point for `meeting`.
    pub fn resolve(meeting: &Meeting, x: u16, y: u16, layout: &BoardLayout) -> Self {
        if layout.trash.contains(x, y) {
            return if meeting.is_trashable() {
                Self::Trash
            } else {
                Self::TrashRefused
            };
        }
        match layout.grid.hit_test(x, y) {
            Some(at) => Self::Place {
                day: at.day,
                slot: at.slot,
            },
            None => Self::Cancel,
        }
    }
}

/// Meeting currently under the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeldMeeting {
    pub meeting: MeetingId,
    pub title: String,
    pub color: String,
    pub duration: u8,
    pub origin: DragOrigin,
    /// Ghost position.
    pub pointer: (u16, u16),
}

#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    held: Option<HeldMeeting>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, meeting: &Meeting, origin: DragOrigin, x: u16, y: u16) {
        self.held = Some(HeldMeeting {
            meeting: meeting.id.clone(),
            title: meeting.title.clone(),
            color: meeting.color.clone(),
            duration: meeting.duration,
            origin,
            pointer: (x, y),
        });
    }

    /// Moves the ghost. Returns `false` when nothing is held.
    pub fn move_to(&mut self, x: u16, y: u16) -> bool {
        match &mut self.held {
            Some(held) => {
                held.pointer = (x, y);
                true
            }
            None => false,
        }
    }

    /// Ends the drag and reports the drop, if a meeting was held.
    pub fn release(
        &mut self,
        meeting: &Meeting,
        x: u16,
        y: u16,
        layout: &BoardLayout,
    ) -> Option<(HeldMeeting, DropIntent)> {
        let held = self.held.take()?;
        if held.meeting != meeting.id {
            return Some((held, DropIntent::Cancel));
        }
        let intent = DropIntent::resolve(meeting, x, y, layout);
        Some((held, intent))
    }

    pub fn cancel(&mut self) -> Option<HeldMeeting> {
        self.held.take()
    }

    pub fn held(&self) -> Option<&HeldMeeting> {
        self.held.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.held.is_some()
    }
}
