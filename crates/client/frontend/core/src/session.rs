//! Session driver: owns one play at a time and feeds it input and time.
//!
//! [`GameSession`] is the seam between a frontend's raw input and the
//! reducer. It turns pointer gestures into intents, measures nothing itself
//! (callers pass elapsed milliseconds), and reports the finished play to an
//! [`OutcomeObserver`] once, after the result delay.

use calendar_content::ScenarioCatalog;
use calendar_core::{
    ActionError, CalendarAction, CalendarEngine, CalendarEvent, CalendarState, GameConfig, Grid,
    MeetingId, Mode, Outcome, OutcomeMeta, PcgRng, Placements, Resolution, Scenario,
};

use crate::config::FrontendConfig;
use crate::drag::{DragOrigin, DragTracker, DropIntent};
use crate::geometry::BoardLayout;
use crate::message::{FeedLog, MessageEntry, MessageLevel};
use crate::view_model::CalendarView;

/// How long the trash zone shows a refusal.
const TRASH_REFUSED_MS: u32 = 600;

/// Receives the result of each finished play.
pub trait OutcomeObserver: Send {
    fn on_win(&mut self, grid: &Grid, placements: &Placements, meta: &OutcomeMeta);
    fn on_fail(&mut self, meta: &OutcomeMeta);
}

#[derive(Clone, Debug)]
struct FinishedPlay {
    outcome: Outcome,
    waited_ms: u32,
    reported: bool,
}

pub struct GameSession {
    catalog: ScenarioCatalog,
    game_config: GameConfig,
    scenario_name: String,
    state: CalendarState,
    rng: PcgRng,
    feed: FeedLog,
    drag: DragTracker,
    observer: Box<dyn OutcomeObserver>,
    result_delay_ms: u32,
    finished: Option<FinishedPlay>,
    base_seed: u64,
    plays: u64,
    trash_refused_ms: u32,
}

impl GameSession {
    /// Starts the first play. `config.scenario` pins the first scenario when
    /// it names one the catalog knows.
    pub fn new(
        mut catalog: ScenarioCatalog,
        game_config: GameConfig,
        config: &FrontendConfig,
        observer: Box<dyn OutcomeObserver>,
        seed: u64,
    ) -> Self {
        let requested = config
            .scenario
            .as_deref()
            .and_then(|id| catalog.select(id).cloned());
        if requested.is_none()
            && let Some(id) = &config.scenario
        {
            tracing::warn!(scenario = %id, "unknown scenario requested, picking at random");
        }
        let scenario = match requested {
            Some(scenario) => scenario,
            None => catalog.pick(seed).clone(),
        };

        let mut session = Self {
            state: CalendarState::new(&scenario, game_config.clone(), seed),
            scenario_name: scenario.name.clone(),
            catalog,
            game_config,
            rng: PcgRng,
            feed: FeedLog::new(config.feed_capacity),
            drag: DragTracker::new(),
            observer,
            result_delay_ms: config.result_delay_ms,
            finished: None,
            base_seed: seed,
            plays: 0,
            trash_refused_ms: 0,
        };
        session.announce(&scenario);
        session
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn feed(&self) -> &FeedLog {
        &self.feed
    }

    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    /// Terminal outcome once the result delay has passed.
    pub fn result(&self) -> Option<&Outcome> {
        self.finished
            .as_ref()
            .filter(|finished| finished.reported)
            .map(|finished| &finished.outcome)
    }

    pub fn is_finished(&self) -> bool {
        self.finished.is_some()
    }

    pub fn view(&self, message_limit: usize) -> CalendarView {
        CalendarView::from_state(
            &self.state,
            &self.scenario_name,
            self.drag.held(),
            self.trash_refused_ms > 0,
            self.result(),
            &self.feed,
            message_limit,
        )
    }

    /// Starts a fresh play on a newly picked scenario.
    pub fn restart(&mut self) {
        self.plays += 1;
        let seed = self.base_seed.wrapping_add(self.plays);
        let scenario = self.catalog.pick(seed).clone();
        self.start(&scenario, seed);
    }

    fn start(&mut self, scenario: &Scenario, seed: u64) {
        self.state = CalendarState::new(scenario, self.game_config.clone(), seed);
        self.scenario_name = scenario.name.clone();
        self.finished = None;
        self.drag.cancel();
        self.trash_refused_ms = 0;
        self.feed.clear();
        self.announce(scenario);
    }

    fn announce(&mut self, scenario: &Scenario) {
        tracing::info!(scenario = %scenario.id, seed = self.state.seed, "play started");
        self.feed.push(MessageEntry::new(
            format!("{}: {}", scenario.name, scenario.blurb),
            Some(self.state.time_left_secs()),
            MessageLevel::Info,
        ));
    }

    /// Runs one intent through the reducer and narrates the result.
    pub fn dispatch(&mut self, action: CalendarAction) -> Result<Vec<CalendarEvent>, ActionError> {
        let result = CalendarEngine::new(&mut self.state).execute(&action, &self.rng);
        match &result {
            Ok(events) => {
                for event in events {
                    self.feed.record(event, &self.state);
                }
            }
            Err(error) if !action.is_tick() => {
                self.feed.push(MessageEntry::new(
                    error.to_string(),
                    Some(self.state.time_left_secs()),
                    MessageLevel::Warning,
                ));
            }
            Err(_) => {}
        }
        self.check_finished();
        result
    }

    /// Advances real time by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        self.trash_refused_ms = self.trash_refused_ms.saturating_sub(elapsed_ms);

        if let Some(finished) = &mut self.finished {
            finished.waited_ms = finished.waited_ms.saturating_add(elapsed_ms);
            self.report_if_due();
            return;
        }
        let _ = self.dispatch(CalendarAction::tick(elapsed_ms));
    }

    fn check_finished(&mut self) {
        if self.finished.is_some() {
            return;
        }
        let Some(outcome) = self.state.outcome() else {
            return;
        };

        let line = match &outcome {
            Outcome::Won(meta) => format!("Week scheduled! Score {}", meta.score),
            Outcome::Failed(meta) => format!("Out of time. Score {}", meta.score),
        };
        self.feed.push(MessageEntry::new(
            line,
            Some(self.state.time_left_secs()),
            MessageLevel::Info,
        ));
        let flags = outcome.meta().flag_names();
        if !flags.is_empty() {
            self.feed.push(MessageEntry::new(
                format!("Earned: {}", flags.join(", ")),
                Some(self.state.time_left_secs()),
                MessageLevel::Info,
            ));
        }
        self.drag.cancel();
        self.finished = Some(FinishedPlay {
            outcome,
            waited_ms: 0,
            reported: false,
        });
        self.report_if_due();
    }

    fn report_if_due(&mut self) {
        let Some(finished) = &mut self.finished else {
            return;
        };
        if finished.reported || finished.waited_ms < self.result_delay_ms {
            return;
        }
        finished.reported = true;
        match &finished.outcome {
            Outcome::Won(meta) => {
                self.observer
                    .on_win(&self.state.grid, &self.state.placements, meta)
            }
            Outcome::Failed(meta) => self.observer.on_fail(meta),
        }
    }

    fn accepts_board_input(&self) -> bool {
        self.finished.is_none() && self.state.mode() == Mode::Normal
    }

    /// Pointer pressed: picks up a queue entry or lifts a placed meeting.
    pub fn pointer_down(&mut self, x: u16, y: u16, layout: &BoardLayout) {
        if !self.accepts_board_input() {
            return;
        }

        if let Some(index) = layout.queue_entry_at(x, y) {
            if let Some(id) = self.state.visible_queue.get(index).cloned() {
                self.pick_up(&id, DragOrigin::Queue, x, y);
            }
            return;
        }

        let Some(at) = layout.grid.hit_test(x, y) else {
            return;
        };
        let Some(id) = self.state.meeting_at(at).cloned() else {
            return;
        };
        if self.dispatch(CalendarAction::Unplace { meeting: id.clone() }).is_ok() {
            self.pick_up(&id, DragOrigin::Grid, x, y);
        }
    }

    fn pick_up(&mut self, id: &MeetingId, origin: DragOrigin, x: u16, y: u16) {
        if self
            .dispatch(CalendarAction::BeginDrag { meeting: id.clone() })
            .is_err()
        {
            return;
        }
        if let Some(meeting) = self.state.meeting(id) {
            self.drag.begin(meeting, origin, x, y);
        }
    }

    pub fn pointer_move(&mut self, x: u16, y: u16) -> bool {
        self.drag.move_to(x, y)
    }

    /// Pointer released: drops the held meeting.
    pub fn pointer_up(&mut self, x: u16, y: u16, layout: &BoardLayout) -> Option<DropIntent> {
        let held_id = self.drag.held()?.meeting.clone();
        let Some(meeting) = self.state.meeting(&held_id).cloned() else {
            self.drag.cancel();
            return None;
        };
        let (_, intent) = self.drag.release(&meeting, x, y, layout)?;

        let action = match intent {
            DropIntent::Trash => CalendarAction::Trash {
                meeting: held_id.clone(),
            },
            DropIntent::Place { day, slot } => CalendarAction::place(held_id.clone(), day, slot),
            DropIntent::TrashRefused => {
                self.trash_refused_ms = TRASH_REFUSED_MS;
                self.feed.push(MessageEntry::new(
                    format!("{} can't be trashed", meeting.title),
                    Some(self.state.time_left_secs()),
                    MessageLevel::Warning,
                ));
                CalendarAction::EndDrag
            }
            DropIntent::Cancel => CalendarAction::EndDrag,
        };
        let _ = self.dispatch(action);
        if self.state.dragging.is_some() {
            let _ = self.dispatch(CalendarAction::EndDrag);
        }
        Some(intent)
    }

    pub fn resolve(&mut self, resolution: Resolution) -> Result<(), ActionError> {
        self.dispatch(CalendarAction::ResolveConflict { resolution })
            .map(|_| ())
    }

    pub fn dismiss_interruption(&mut self) -> Result<(), ActionError> {
        self.dispatch(CalendarAction::DismissInterruption).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use calendar_core::{Meeting, MeetingFlags, Scenario};

    use super::*;
    use crate::geometry::{GridGeometry, Rect};

    #[derive(Clone, Default)]
    struct Recorder {
        results: Arc<Mutex<Vec<(bool, u32)>>>,
    }

    impl OutcomeObserver for Recorder {
        fn on_win(&mut self, _grid: &Grid, placements: &Placements, meta: &OutcomeMeta) {
            assert!(!placements.is_empty());
            self.results.lock().expect("lock").push((true, meta.score));
        }

        fn on_fail(&mut self, meta: &OutcomeMeta) {
            self.results.lock().expect("lock").push((false, meta.score));
        }
    }

    fn layout() -> BoardLayout {
        BoardLayout {
            grid: GridGeometry {
                origin_x: 0,
                origin_y: 0,
                label_width: 6,
                header_height: 1,
                cell_width: 10,
                cell_height: 1,
            },
            queue: Rect::new(60, 0, 24, 12),
            queue_row_height: 2,
            trash: Rect::new(60, 14, 24, 4),
        }
    }

    fn session(meetings: Vec<Meeting>, recorder: &Recorder) -> GameSession {
        let scenario = Scenario {
            id: "session".into(),
            name: "Session".into(),
            blurb: "test".into(),
            prefilled: Vec::new(),
            meetings,
            interruptions: Vec::new(),
        };
        let catalog = ScenarioCatalog::new(vec![scenario]).expect("catalog");
        let config = FrontendConfig {
            result_delay_ms: 1000,
            ..FrontendConfig::default()
        };
        GameSession::new(
            catalog,
            GameConfig::default(),
            &config,
            Box::new(recorder.clone()),
            5,
        )
    }

    #[test]
    fn drag_from_queue_to_grid_places_the_meeting() {
        let recorder = Recorder::default();
        let mut session = session(
            vec![Meeting::new("a", "A", 1), Meeting::new("b", "B", 1)],
            &recorder,
        );
        let layout = layout();

        session.pointer_down(62, 1, &layout);
        assert!(session.drag().is_dragging());
        assert_eq!(session.state().dragging, Some(MeetingId::new("a")));
        session.pointer_move(20, 3);

        let intent = session.pointer_up(16, 3, &layout);
        assert_eq!(intent, Some(DropIntent::Place { day: 1, slot: 2 }));
        assert!(session.state().is_placed(&MeetingId::new("a")));
        assert_eq!(session.state().dragging, None);
    }

    #[test]
    fn dropping_outside_targets_returns_to_the_queue() {
        let recorder = Recorder::default();
        let mut session = session(vec![Meeting::new("a", "A", 1)], &recorder);
        let layout = layout();

        session.pointer_down(62, 1, &layout);
        assert_eq!(session.pointer_up(2, 0, &layout), Some(DropIntent::Cancel));
        assert!(session.state().is_visible(&MeetingId::new("a")));
        assert_eq!(session.state().dragging, None);
    }

    #[test]
    fn untrashable_drop_flashes_the_trash_zone() {
        let recorder = Recorder::default();
        let mut session = session(
            vec![Meeting::new("ceo", "CEO", 1).with_flags(MeetingFlags::UNTRASHABLE)],
            &recorder,
        );
        let layout = layout();

        session.pointer_down(62, 1, &layout);
        assert_eq!(
            session.pointer_up(65, 15, &layout),
            Some(DropIntent::TrashRefused)
        );
        assert!(session.view(4).trash_refused);
        assert!(session.state().is_visible(&MeetingId::new("ceo")));
        session.tick(600);
        assert!(!session.view(4).trash_refused);
    }

    #[test]
    fn placed_meetings_can_be_lifted_again() {
        let recorder = Recorder::default();
        let mut session = session(
            vec![Meeting::new("a", "A", 1), Meeting::new("b", "B", 1)],
            &recorder,
        );
        let layout = layout();

        session.pointer_down(62, 1, &layout);
        session.pointer_up(16, 3, &layout);
        session.pointer_down(17, 3, &layout);
        assert!(!session.state().is_placed(&MeetingId::new("a")));
        assert_eq!(
            session.drag().held().map(|h| h.origin),
            Some(DragOrigin::Grid)
        );
    }

    #[test]
    fn win_is_reported_once_after_the_delay() {
        let recorder = Recorder::default();
        let mut session = session(vec![Meeting::new("a", "A", 1)], &recorder);
        let layout = layout();

        session.pointer_down(62, 1, &layout);
        session.pointer_up(16, 3, &layout);
        assert!(session.is_finished());
        assert!(session.result().is_none());
        assert!(recorder.results.lock().expect("lock").is_empty());

        session.tick(600);
        session.tick(600);
        session.tick(600);
        assert!(session.result().is_some_and(Outcome::is_won));
        assert_eq!(recorder.results.lock().expect("lock").len(), 1);
        assert!(recorder.results.lock().expect("lock")[0].0);
    }

    #[test]
    fn time_out_is_reported_as_a_failure() {
        let recorder = Recorder::default();
        let mut session = session(vec![Meeting::new("a", "A", 1)], &recorder);

        for _ in 0..100 {
            session.tick(1000);
        }
        assert!(session.result().is_some_and(|o| !o.is_won()));
        assert_eq!(*recorder.results.lock().expect("lock"), [(false, 90)]);
    }

    #[test]
    fn restart_begins_a_fresh_play() {
        let recorder = Recorder::default();
        let mut session = session(vec![Meeting::new("a", "A", 1)], &recorder);
        session.tick(5000);
        session.restart();
        assert_eq!(session.state().time_left_secs(), 90);
        assert!(!session.is_finished());
        assert_eq!(session.feed().len(), 1);
    }
}
