//! Scoring and achievement flags for a finished play.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::model::MeetingKind;
use crate::state::CalendarState;

/// Flags reported with the outcome. The kebab-case strings are stable.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OutcomeFlag {
    /// Never attempted an illegal drop. Wins only.
    NoInvalid,
    /// At least one focus block is on the calendar.
    FocusPlaced,
    /// Trashed a meeting that could have been an email.
    TrashedEmail,
    /// Won after every interruption went off.
    ScheduleSurvivor,
    /// Groveled three or more times.
    MasterGroveler,
    /// Used up every delegation.
    DelegationKing,
    /// Won after chaos mode started.
    ChaosCalendar,
    /// Won without trashing anything.
    ZeroTrash,
    /// Placed all five copies of a recurring meeting in one drop.
    RecurringChampion,
}

impl OutcomeFlag {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Minimum grovels for [`OutcomeFlag::MasterGroveler`].
pub const MASTER_GROVELER_COUNT: u32 = 3;

/// Summary handed to outcome observers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeMeta {
    pub score: u32,
    pub flags: Vec<OutcomeFlag>,
    pub reputation: i32,
    pub time_left_secs: u32,
    pub trash_count: u32,
    pub grovel_count: u32,
}

impl OutcomeMeta {
    pub fn has(&self, flag: OutcomeFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Flag strings in declaration order.
    pub fn flag_names(&self) -> Vec<&'static str> {
        self.flags.iter().map(OutcomeFlag::as_str).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won(OutcomeMeta),
    Failed(OutcomeMeta),
}

impl Outcome {
    pub fn meta(&self) -> &OutcomeMeta {
        match self {
            Self::Won(meta) | Self::Failed(meta) => meta,
        }
    }

    pub fn is_won(&self) -> bool {
        matches!(self, Self::Won(_))
    }
}

impl CalendarState {
    /// Reputation plus bonuses, clamped to `0..=100`.
    pub fn score(&self) -> u32 {
        let mut score = i64::from(self.reputation);
        if self.no_invalid_placements {
            score += 10;
        }
        if self.is_won() {
            score += 10;
        }
        score += i64::from(self.time_left_secs() / 10);
        score.clamp(0, 100) as u32
    }

    /// Flags earned so far. Win-only flags appear only once the play is won.
    pub fn outcome_flags(&self) -> Vec<OutcomeFlag> {
        let won = self.is_won();
        let all_fired = !self.interruptions.is_empty()
            && self
                .interruptions
                .iter()
                .all(|i| self.fired_interruptions.contains(&i.id));
        let focus_placed = self
            .placements
            .keys()
            .filter_map(|id| self.meeting(id))
            .any(|m| m.kind == MeetingKind::Focus);

        let checks = [
            (OutcomeFlag::NoInvalid, won && self.no_invalid_placements),
            (OutcomeFlag::FocusPlaced, focus_placed),
            (OutcomeFlag::TrashedEmail, self.trashed_email),
            (OutcomeFlag::ScheduleSurvivor, won && all_fired),
            (
                OutcomeFlag::MasterGroveler,
                self.grovel_count >= MASTER_GROVELER_COUNT,
            ),
            (
                OutcomeFlag::DelegationKing,
                self.config.delegate_uses > 0 && self.delegate_uses_left == 0,
            ),
            (OutcomeFlag::ChaosCalendar, won && self.chaos_mode),
            (OutcomeFlag::ZeroTrash, won && self.trash_count == 0),
            (OutcomeFlag::RecurringChampion, self.recurring_all_five),
        ];
        checks
            .into_iter()
            .filter_map(|(flag, earned)| earned.then_some(flag))
            .collect()
    }

    pub fn outcome_meta(&self) -> OutcomeMeta {
        OutcomeMeta {
            score: self.score(),
            flags: self.outcome_flags(),
            reputation: self.reputation,
            time_left_secs: self.time_left_secs(),
            trash_count: self.trash_count,
            grovel_count: self.grovel_count,
        }
    }

    /// Terminal outcome, or `None` while the play is still running.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_won() {
            Some(Outcome::Won(self.outcome_meta()))
        } else if self.is_failed() {
            Some(Outcome::Failed(self.outcome_meta()))
        } else {
            None
        }
    }
}
