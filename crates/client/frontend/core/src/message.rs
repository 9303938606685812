//! Feed of human-readable lines narrating a play.
use std::collections::VecDeque;

use calendar_core::{CalendarEvent, CalendarState, GameConfig, MeetingId, SlotRef};

/// Severity level for feed lines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single feed entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    /// Countdown seconds left when the line was written.
    pub timestamp: Option<u32>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, timestamp: Option<u32>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            timestamp,
            level,
        }
    }
}

/// Circular buffer of feed lines displayed to the player.
#[derive(Clone, Debug)]
pub struct FeedLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl FeedLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Narrates a reducer event. Drag bookkeeping is not narrated.
    pub fn record(&mut self, event: &CalendarEvent, state: &CalendarState) {
        if let Some((text, level)) = describe(event, state) {
            self.push(MessageEntry::new(text, Some(state.time_left_secs()), level));
        }
    }
}

fn title(state: &CalendarState, id: &MeetingId) -> String {
    state
        .meeting(id)
        .map_or_else(|| id.to_string(), |m| m.title.clone())
}

fn when(at: SlotRef) -> String {
    format!(
        "{} {}",
        GameConfig::day_label(at.day),
        GameConfig::slot_label(at.slot)
    )
}

fn describe(event: &CalendarEvent, state: &CalendarState) -> Option<(String, MessageLevel)> {
    use MessageLevel::*;

    let line = match event {
        CalendarEvent::DragStarted { .. } | CalendarEvent::DragEnded => return None,
        CalendarEvent::Placed { meeting, at } => {
            (format!("Booked {} on {}", title(state, meeting), when(*at)), Info)
        }
        CalendarEvent::PlacementRejected {
            meeting, reason, ..
        } => (
            format!("Can't book {}: {}", title(state, meeting), reason),
            Warning,
        ),
        CalendarEvent::RecurringExpanded {
            parent,
            placed,
            returned,
        } => {
            let mut text = format!(
                "{} repeats on {}/{} days",
                title(state, parent),
                placed.len(),
                GameConfig::RECURRING_COPIES
            );
            if !returned.is_empty() {
                text.push_str(&format!(", {} back in the queue", returned.len()));
            }
            (text, Info)
        }
        CalendarEvent::ConflictOpened {
            meeting,
            conflicts_with,
        } => (
            format!(
                "{} clashes with {}!",
                title(state, meeting),
                title(state, conflicts_with)
            ),
            Warning,
        ),
        CalendarEvent::ConflictResolved {
            meeting,
            resolution,
            placed,
        } => {
            let outcome = if *placed { "booked" } else { "not booked" };
            (
                format!("{}: {} {}", resolution.label(), title(state, meeting), outcome),
                Info,
            )
        }
        CalendarEvent::Unplaced { meeting } => (
            format!("{} is back in the queue", title(state, meeting)),
            Info,
        ),
        CalendarEvent::Trashed {
            meeting,
            penalty_secs,
        } => (
            format!("Trashed {} (-{}s)", title(state, meeting), penalty_secs),
            Warning,
        ),
        CalendarEvent::Declined { meeting } => {
            (format!("Declined {}", title(state, meeting)), Warning)
        }
        CalendarEvent::Revealed { meetings } => {
            let titles: Vec<String> = meetings.iter().map(|id| title(state, id)).collect();
            (format!("New request: {}", titles.join(", ")), Info)
        }
        CalendarEvent::ChaosStarted { flooded } => (
            format!("CHAOS! {flooded} more requests land at once"),
            Error,
        ),
        CalendarEvent::InterruptionTriggered { .. } => {
            let interruption = state.pending_interruption()?;
            (format!("Interruption: {}", interruption.title), Warning)
        }
        CalendarEvent::InterruptionApplied { .. } => return None,
        CalendarEvent::Displaced { meeting } => (
            format!("{} got bumped off the calendar", title(state, meeting)),
            Warning,
        ),
        CalendarEvent::Removed { meeting } => {
            (format!("{} was cancelled", title(state, meeting)), Info)
        }
        CalendarEvent::ConstraintChanged { meeting, unplaced } => {
            let mut text = format!("{} has new time constraints", title(state, meeting));
            if *unplaced {
                text.push_str(" and went back to the queue");
            }
            (text, Warning)
        }
    };
    Some(line)
}
