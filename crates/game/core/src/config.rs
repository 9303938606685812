/// Puzzle tuning constants and adjustable parameters.
///
/// Grid dimensions are compile-time constants; everything else can be
/// overridden from a TOML file through the content loaders.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Length of a play in seconds.
    pub round_secs: u32,
    pub starting_reputation: i32,
    pub delegate_uses: u8,
    /// Seconds deducted when a meeting without its own penalty is trashed.
    pub default_trash_penalty_secs: u32,
    pub trash_reputation_penalty: i32,
    /// Below this many seconds the drip feed reveals two meetings at a time.
    pub rush_threshold_secs: u32,
    /// At or below this many seconds the whole queue floods in.
    pub chaos_threshold_secs: u32,
    /// Countdown speed in percent while the conflict modal is open.
    pub conflict_speed_percent: u32,
    pub reschedule_failure_penalty: i32,
    pub decline_penalty: i32,
    pub grovel_time_cost_secs: u32,
    pub grovel_reputation_cost: i32,
    /// How long rejected cells stay highlighted.
    pub invalid_flash_ms: u32,
    /// Meetings revealed before the first placement.
    pub initial_visible: usize,
    /// The drip feed stops topping up once this many meetings are visible.
    pub visible_capacity: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    /// Weekdays on the grid (Monday..Friday).
    pub const DAYS: usize = 5;
    /// Half-hour slots per day (09:00..18:00).
    pub const SLOTS: usize = 18;
    /// Copies produced when a recurring meeting is expanded.
    pub const RECURRING_COPIES: usize = Self::DAYS;
    /// First slot of the day, in minutes after midnight.
    pub const DAY_START_MINUTES: u32 = 9 * 60;
    pub const SLOT_MINUTES: u32 = 30;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ROUND_SECS: u32 = 90;
    pub const DEFAULT_STARTING_REPUTATION: i32 = 80;
    pub const DEFAULT_DELEGATE_USES: u8 = 2;
    pub const DEFAULT_TRASH_PENALTY_SECS: u32 = 5;
    pub const DEFAULT_TRASH_REPUTATION_PENALTY: i32 = 2;
    pub const DEFAULT_RUSH_THRESHOLD_SECS: u32 = 40;
    pub const DEFAULT_CHAOS_THRESHOLD_SECS: u32 = 20;
    pub const DEFAULT_CONFLICT_SPEED_PERCENT: u32 = 50;
    pub const DEFAULT_RESCHEDULE_FAILURE_PENALTY: i32 = 5;
    pub const DEFAULT_DECLINE_PENALTY: i32 = 10;
    pub const DEFAULT_GROVEL_TIME_COST_SECS: u32 = 8;
    pub const DEFAULT_GROVEL_REPUTATION_COST: i32 = 3;
    pub const DEFAULT_INVALID_FLASH_MS: u32 = 600;
    pub const DEFAULT_INITIAL_VISIBLE: usize = 3;
    pub const DEFAULT_VISIBLE_CAPACITY: usize = 4;

    pub fn new() -> Self {
        Self {
            round_secs: Self::DEFAULT_ROUND_SECS,
            starting_reputation: Self::DEFAULT_STARTING_REPUTATION,
            delegate_uses: Self::DEFAULT_DELEGATE_USES,
            default_trash_penalty_secs: Self::DEFAULT_TRASH_PENALTY_SECS,
            trash_reputation_penalty: Self::DEFAULT_TRASH_REPUTATION_PENALTY,
            rush_threshold_secs: Self::DEFAULT_RUSH_THRESHOLD_SECS,
            chaos_threshold_secs: Self::DEFAULT_CHAOS_THRESHOLD_SECS,
            conflict_speed_percent: Self::DEFAULT_CONFLICT_SPEED_PERCENT,
            reschedule_failure_penalty: Self::DEFAULT_RESCHEDULE_FAILURE_PENALTY,
            decline_penalty: Self::DEFAULT_DECLINE_PENALTY,
            grovel_time_cost_secs: Self::DEFAULT_GROVEL_TIME_COST_SECS,
            grovel_reputation_cost: Self::DEFAULT_GROVEL_REPUTATION_COST,
            invalid_flash_ms: Self::DEFAULT_INVALID_FLASH_MS,
            initial_visible: Self::DEFAULT_INITIAL_VISIBLE,
            visible_capacity: Self::DEFAULT_VISIBLE_CAPACITY,
        }
    }

    pub fn with_round_secs(round_secs: u32) -> Self {
        Self {
            round_secs,
            ..Self::new()
        }
    }

    /// Seconds to milliseconds, pinned at `u32::MAX` for oversized content values.
    pub const fn secs_to_ms(secs: u32) -> u32 {
        secs.saturating_mul(1000)
    }

    /// Human-readable start time of a slot, e.g. `"09:30"`.
    pub fn slot_label(slot: usize) -> String {
        let minutes = Self::DAY_START_MINUTES + slot as u32 * Self::SLOT_MINUTES;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }

    /// Short weekday name for a day index.
    pub fn day_label(day: usize) -> &'static str {
        match day {
            0 => "Mon",
            1 => "Tue",
            2 => "Wed",
            3 => "Thu",
            4 => "Fri",
            _ => "???",
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_conversion_saturates() {
        assert_eq!(GameConfig::secs_to_ms(90), 90_000);
        assert_eq!(GameConfig::secs_to_ms(5_000_000), u32::MAX);
    }

    #[test]
    fn slot_labels_cover_the_working_day() {
        assert_eq!(GameConfig::slot_label(0), "09:00");
        assert_eq!(GameConfig::slot_label(1), "09:30");
        assert_eq!(GameConfig::slot_label(GameConfig::SLOTS - 1), "17:30");
    }

    #[test]
    fn round_override_keeps_other_defaults() {
        let config = GameConfig::with_round_secs(30);
        assert_eq!(config.round_secs, 30);
        assert_eq!(config.starting_reputation, 80);
        assert_eq!(config.delegate_uses, 2);
    }
}
