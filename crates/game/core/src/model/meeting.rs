use core::fmt;

use bitflags::bitflags;

use crate::config::GameConfig;

/// Stable identifier of a meeting template.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MeetingId(pub String);

impl MeetingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derived id of the day-copy of a recurring meeting.
    pub fn recurring_copy(&self, day: usize) -> Self {
        Self(format!("{}-{}", self.0, day))
    }
}

impl fmt::Display for MeetingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MeetingId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

bitflags! {
    /// Behavioural switches on a meeting template.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct MeetingFlags: u8 {
        /// Cannot be discarded, not even through the Decline resolution.
        const UNTRASHABLE = 1 << 0;
        /// Expands into one copy per weekday at the chosen slot.
        const RECURRING = 1 << 1;
        /// Placed by an interruption; cannot be picked back up.
        const LOCKED = 1 << 2;
        /// Sorted to the front when chaos mode floods the queue.
        const URGENT = 1 << 3;
    }
}

/// Flavour category used by the achievement flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeetingKind {
    #[default]
    Regular,
    /// Protected deep-work block.
    Focus,
    /// A meeting that should have been an email.
    CouldBeEmail,
}

/// Where a meeting is allowed to start.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Constraint {
    /// Allowed day indices; `None` allows every day.
    pub days: Option<Vec<u8>>,
    /// Earliest allowed starting slot (inclusive).
    pub min_slot: Option<u8>,
    /// Latest allowed starting slot (inclusive).
    pub max_slot: Option<u8>,
}

impl Constraint {
    pub fn allows_day(&self, day: usize) -> bool {
        self.days
            .as_ref()
            .is_none_or(|days| days.iter().any(|&d| d as usize == day))
    }

    pub fn only_day(&self, day: usize) -> Self {
        Self {
            days: Some(vec![day as u8]),
            ..self.clone()
        }
    }
}

/// Immutable meeting template.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Meeting {
    pub id: MeetingId,
    pub title: String,
    /// Length in half-hour slots.
    pub duration: u8,
    /// Display colour as `#rrggbb` or a colour name.
    pub color: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraint: Option<Constraint>,
    /// Must be placed and finished before this meeting starts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub depends_on: Option<MeetingId>,
    /// Placing both opens the conflict-resolution flow.
    #[cfg_attr(feature = "serde", serde(default))]
    pub conflicts_with: Option<MeetingId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: MeetingFlags,
    /// Attendee removed wholesale by person-removal interruptions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub person: Option<String>,
    /// Seconds deducted from the clock when trashed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub trash_penalty: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: MeetingKind,
}

impl Meeting {
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration: u8) -> Self {
        Self {
            id: MeetingId::new(id),
            title: title.into(),
            duration,
            color: "#5b8def".to_string(),
            constraint: None,
            depends_on: None,
            conflicts_with: None,
            flags: MeetingFlags::empty(),
            person: None,
            trash_penalty: None,
            kind: MeetingKind::Regular,
        }
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }

    pub fn with_depends_on(mut self, id: impl Into<String>) -> Self {
        self.depends_on = Some(MeetingId::new(id));
        self
    }

    pub fn with_conflicts_with(mut self, id: impl Into<String>) -> Self {
        self.conflicts_with = Some(MeetingId::new(id));
        self
    }

    pub fn with_flags(mut self, flags: MeetingFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.person = Some(person.into());
        self
    }

    pub fn with_trash_penalty(mut self, secs: u32) -> Self {
        self.trash_penalty = Some(secs);
        self
    }

    pub fn with_kind(mut self, kind: MeetingKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_recurring(&self) -> bool {
        self.flags.contains(MeetingFlags::RECURRING)
    }

    pub fn is_locked(&self) -> bool {
        self.flags.contains(MeetingFlags::LOCKED)
    }

    pub fn is_urgent(&self) -> bool {
        self.flags.contains(MeetingFlags::URGENT)
    }

    pub fn is_trashable(&self) -> bool {
        !self.flags.contains(MeetingFlags::UNTRASHABLE)
    }

    pub fn trash_penalty_secs(&self, config: &GameConfig) -> u32 {
        self.trash_penalty
            .unwrap_or(config.default_trash_penalty_secs)
    }

    /// Builds the independent day-copy used by recurring expansion.
    ///
    /// The copy keeps the parent's slot constraint but is pinned to `day`
    /// and is no longer recurring itself.
    pub fn recurring_copy(&self, day: usize) -> Self {
        let constraint = self.constraint.clone().unwrap_or_default().only_day(day);
        Self {
            id: self.id.recurring_copy(day),
            title: format!("{} ({})", self.title, GameConfig::day_label(day)),
            constraint: Some(constraint),
            flags: self.flags - MeetingFlags::RECURRING,
            ..self.clone()
        }
    }
}
