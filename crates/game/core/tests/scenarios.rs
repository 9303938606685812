//! Reducer behaviour driven end to end through `CalendarEngine::execute`.

use calendar_core::{
    ActionError, CalendarAction, CalendarEngine, CalendarEvent, CalendarState, Constraint,
    GameConfig, Interruption, InterruptionEffect, Meeting, MeetingFlags, MeetingId, Mode,
    PcgRng, PlacementError, Resolution, RngOracle, Scenario, SlotRef, Trigger,
};

/// Coin that always lands the same way.
struct FixedCoin(bool);

impl RngOracle for FixedCoin {
    fn next_u32(&self, _seed: u64) -> u32 {
        u32::from(self.0)
    }
}

fn scenario(meetings: Vec<Meeting>, interruptions: Vec<Interruption>) -> Scenario {
    Scenario {
        id: "test".into(),
        name: "Test".into(),
        blurb: String::new(),
        prefilled: Vec::new(),
        meetings,
        interruptions,
    }
}

fn plain(count: usize) -> Vec<Meeting> {
    (0..count)
        .map(|i| Meeting::new(format!("m{i}"), format!("Meeting {i}"), 1))
        .collect()
}

fn id(raw: &str) -> MeetingId {
    MeetingId::new(raw)
}

fn step(
    state: &mut CalendarState,
    action: CalendarAction,
) -> Result<Vec<CalendarEvent>, ActionError> {
    step_with(state, action, &PcgRng)
}

fn step_with(
    state: &mut CalendarState,
    action: CalendarAction,
    rng: &dyn RngOracle,
) -> Result<Vec<CalendarEvent>, ActionError> {
    let result = CalendarEngine::new(state).execute(&action, rng);
    state.validate().expect("invariants hold after every step");
    result
}

fn refused(state: &mut CalendarState, action: CalendarAction) -> ActionError {
    let before = state.clone();
    let error = step(state, action).expect_err("intent should be refused");
    assert_eq!(*state, before, "refused intent must not mutate state");
    error
}

#[test]
fn recurring_standup_fills_every_weekday() {
    let standup = Meeting::new("standup", "Daily Standup", 1)
        .with_constraint(Constraint {
            max_slot: Some(1),
            ..Default::default()
        })
        .with_flags(MeetingFlags::RECURRING);
    let mut state = CalendarState::new(
        &scenario(vec![standup], Vec::new()),
        GameConfig::default(),
        1,
    );

    step(&mut state, CalendarAction::place("standup", 0, 0)).expect("placed");

    assert_eq!(state.placements.len(), 5);
    for day in 0..5 {
        assert_eq!(
            state.placements.get(&id("standup").recurring_copy(day)),
            Some(&SlotRef::new(day, 0))
        );
    }
    assert!(state.recurring_all_five);
    assert!(state.expanded.contains(&id("standup")));
    assert!(state.is_won());
}

#[test]
fn conflict_halves_the_clock_and_delegate_places_both() {
    let meetings = vec![
        Meeting::new("y", "Vendor Call", 1),
        Meeting::new("x", "Board Prep", 2).with_conflicts_with("y"),
        Meeting::new("z", "1:1", 1),
    ];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);

    step(&mut state, CalendarAction::place("y", 0, 0)).expect("placed");
    let events = step(&mut state, CalendarAction::place("x", 1, 0)).expect("accepted");

    assert!(events.contains(&CalendarEvent::ConflictOpened {
        meeting: id("x"),
        conflicts_with: id("y"),
    }));
    let modal = state.conflict.clone().expect("modal open");
    assert_eq!((modal.meeting, modal.conflicts_with), (id("x"), id("y")));
    assert_eq!(state.mode(), Mode::ConflictPending);

    let before = state.time_left_ms;
    step(&mut state, CalendarAction::tick(1000)).expect("tick");
    assert_eq!(before - state.time_left_ms, 500);

    step(
        &mut state,
        CalendarAction::ResolveConflict {
            resolution: Resolution::Delegate,
        },
    )
    .expect("delegated");
    assert_eq!(state.placements.get(&id("x")), Some(&SlotRef::new(1, 0)));
    assert_eq!(state.placements.get(&id("y")), Some(&SlotRef::new(0, 0)));
    assert_eq!(state.delegate_uses_left, 1);
    assert_eq!(state.speed_percent, 100);
    assert_eq!(state.conflict, None);
}

#[test]
fn delegate_is_unavailable_once_used_up() {
    let meetings = vec![
        Meeting::new("y", "Vendor Call", 1),
        Meeting::new("x", "Board Prep", 1).with_conflicts_with("y"),
    ];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);
    state.delegate_uses_left = 0;

    step(&mut state, CalendarAction::place("y", 0, 0)).expect("placed");
    step(&mut state, CalendarAction::place("x", 0, 1)).expect("accepted");

    let error = refused(
        &mut state,
        CalendarAction::ResolveConflict {
            resolution: Resolution::Delegate,
        },
    );
    assert!(matches!(
        error,
        ActionError::ResolutionUnavailable {
            resolution: Resolution::Delegate,
            ..
        }
    ));
}

#[test]
fn conflicts_are_detected_in_both_directions() {
    let meetings = vec![
        Meeting::new("x", "Board Prep", 1).with_conflicts_with("y"),
        Meeting::new("y", "Vendor Call", 1),
    ];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);

    step(&mut state, CalendarAction::place("x", 0, 0)).expect("placed");
    step(&mut state, CalendarAction::place("y", 0, 1)).expect("accepted");
    let modal = state.conflict.clone().expect("modal open");
    assert_eq!((modal.meeting, modal.conflicts_with), (id("y"), id("x")));
}

#[test]
fn reschedule_follows_the_coin() {
    let meetings = vec![
        Meeting::new("y", "Vendor Call", 1),
        Meeting::new("x", "Board Prep", 1).with_conflicts_with("y"),
    ];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);
    step(&mut state, CalendarAction::place("y", 0, 0)).expect("placed");
    step(&mut state, CalendarAction::place("x", 0, 1)).expect("accepted");

    let reschedule = CalendarAction::ResolveConflict {
        resolution: Resolution::Reschedule,
    };
    step_with(&mut state, reschedule.clone(), &FixedCoin(false)).expect("resolved");
    assert_eq!(state.reputation, 75);
    assert!(state.is_visible(&id("x")));
    assert!(!state.is_placed(&id("x")));

    step(&mut state, CalendarAction::place("x", 0, 1)).expect("accepted");
    step_with(&mut state, reschedule, &FixedCoin(true)).expect("resolved");
    assert_eq!(state.reputation, 75);
    assert!(state.is_placed(&id("x")));
}

#[test]
fn decline_and_grovel_apply_their_costs() {
    let meetings = vec![
        Meeting::new("y", "Vendor Call", 1),
        Meeting::new("x", "Board Prep", 1).with_conflicts_with("y"),
        Meeting::new("w", "Offsite", 1).with_conflicts_with("y"),
    ];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);
    step(&mut state, CalendarAction::place("y", 0, 0)).expect("placed");

    step(&mut state, CalendarAction::place("x", 0, 1)).expect("accepted");
    step(
        &mut state,
        CalendarAction::ResolveConflict {
            resolution: Resolution::Decline,
        },
    )
    .expect("declined");
    assert_eq!(state.reputation, 70);
    assert!(state.trashed.contains(&id("x")));
    assert_eq!(state.trash_count, 0);

    let time_before = state.time_left_ms;
    step(&mut state, CalendarAction::place("w", 0, 1)).expect("accepted");
    step(
        &mut state,
        CalendarAction::ResolveConflict {
            resolution: Resolution::Grovel,
        },
    )
    .expect("groveled");
    assert_eq!(state.reputation, 67);
    assert_eq!(time_before - state.time_left_ms, 8000);
    assert_eq!(state.grovel_count, 1);
    assert!(state.is_placed(&id("w")));
}

#[test]
fn board_intents_wait_for_the_conflict() {
    let meetings = vec![
        Meeting::new("y", "Vendor Call", 1),
        Meeting::new("x", "Board Prep", 1).with_conflicts_with("y"),
        Meeting::new("z", "1:1", 1),
    ];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);
    step(&mut state, CalendarAction::place("y", 0, 0)).expect("placed");
    step(&mut state, CalendarAction::place("x", 0, 1)).expect("accepted");

    assert_eq!(
        refused(&mut state, CalendarAction::place("z", 3, 3)),
        ActionError::ConflictPending
    );
    assert_eq!(
        refused(&mut state, CalendarAction::Trash { meeting: id("z") }),
        ActionError::ConflictPending
    );
    assert_eq!(
        refused(&mut state, CalendarAction::DismissInterruption),
        ActionError::ConflictPending
    );
}

#[test]
fn chaos_starts_once_at_twenty_seconds() {
    let mut meetings = plain(6);
    meetings[4] = meetings[4].clone().with_flags(MeetingFlags::URGENT);
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);

    step(&mut state, CalendarAction::tick(69_000)).expect("tick");
    assert!(!state.chaos_mode);
    assert_eq!(state.time_left_ms, 21_000);

    let events = step(&mut state, CalendarAction::tick(1_000)).expect("tick");
    assert_eq!(state.time_left_ms, 20_000);
    assert!(state.chaos_mode);
    assert!(events.contains(&CalendarEvent::ChaosStarted { flooded: 3 }));
    assert_eq!(state.visible_queue.first(), Some(&id("m4")));
    assert_eq!(state.visible_queue.len(), 6);
    assert_eq!(state.drip_index, state.full_queue.len());

    let events = step(&mut state, CalendarAction::tick(1_000)).expect("tick");
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, CalendarEvent::ChaosStarted { .. }))
    );
}

#[test]
fn trash_costs_time_and_reputation() {
    let mut meetings = plain(4);
    meetings[0] = meetings[0].clone().with_trash_penalty(3);
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);

    step(&mut state, CalendarAction::Trash { meeting: id("m0") }).expect("trashed");
    assert_eq!(state.time_left_ms, 87_000);
    assert_eq!(state.reputation, 78);
    assert!(state.trashed.contains(&id("m0")));
    assert!(!state.is_visible(&id("m0")));
    assert!(state.is_visible(&id("m3")), "drip refilled the queue");
}

#[test]
fn trash_penalty_clamps_at_zero() {
    let mut state = CalendarState::new(&scenario(plain(3), Vec::new()), GameConfig::default(), 1);
    state.time_left_ms = 2_000;
    state.chaos_mode = true;

    step(&mut state, CalendarAction::Trash { meeting: id("m0") }).expect("trashed");
    assert_eq!(state.time_left_ms, 0);
    assert!(state.is_failed());
    assert_eq!(
        refused(&mut state, CalendarAction::tick(250)),
        ActionError::GameOver
    );
}

#[test]
fn untrashable_meetings_stay() {
    let meetings = vec![Meeting::new("ceo", "CEO Sync", 1).with_flags(MeetingFlags::UNTRASHABLE)];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);
    assert_eq!(
        refused(&mut state, CalendarAction::Trash { meeting: id("ceo") }),
        ActionError::Untrashable(id("ceo"))
    );
}

#[test]
fn unfired_add_meeting_blocks_the_win() {
    let late = Interruption {
        id: "late-ask".into(),
        title: "One more thing".into(),
        message: "Can we squeeze this in?".into(),
        trigger: Trigger::Placements { count: 5 },
        effect: InterruptionEffect::AddMeeting {
            meeting: Meeting::new("late", "Late Ask", 1),
        },
    };
    let mut state = CalendarState::new(&scenario(plain(1), vec![late]), GameConfig::default(), 1);

    step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    assert!(state.visible_queue.is_empty());
    assert_eq!(state.drip_index, state.full_queue.len());
    assert_eq!(state.pending_interruption, None);
    assert!(!state.is_won());
}

#[test]
fn add_meeting_interruption_feeds_the_queue() {
    let late = Interruption {
        id: "late-ask".into(),
        title: "One more thing".into(),
        message: "Can we squeeze this in?".into(),
        trigger: Trigger::Placements { count: 1 },
        effect: InterruptionEffect::AddMeeting {
            meeting: Meeting::new("late", "Late Ask", 1),
        },
    };
    let mut state = CalendarState::new(&scenario(plain(1), vec![late]), GameConfig::default(), 1);

    step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    assert_eq!(state.mode(), Mode::InterruptionPending);
    assert!(!state.is_won());

    step(&mut state, CalendarAction::DismissInterruption).expect("dismissed");
    assert!(state.is_visible(&id("late")));

    step(&mut state, CalendarAction::place("late", 0, 1)).expect("placed");
    assert!(state.is_won());
    assert!(state.outcome().expect("finished").is_won());
}

#[test]
fn forced_meeting_displaces_and_locks() {
    let all_hands = Interruption {
        id: "all-hands".into(),
        title: "All Hands".into(),
        message: "Mandatory.".into(),
        trigger: Trigger::TimeLeft { secs: 80 },
        effect: InterruptionEffect::ForcePlace {
            meeting: Meeting::new("all-hands", "All Hands", 2),
            day: 2,
            slot: 4,
        },
    };
    let mut state = CalendarState::new(
        &scenario(plain(3), vec![all_hands]),
        GameConfig::default(),
        1,
    );
    step(&mut state, CalendarAction::place("m0", 2, 5)).expect("placed");

    step(&mut state, CalendarAction::tick(10_000)).expect("tick");
    assert_eq!(state.mode(), Mode::InterruptionPending);
    assert_eq!(
        refused(&mut state, CalendarAction::place("m1", 0, 0)),
        ActionError::InterruptionPending
    );

    let events = step(&mut state, CalendarAction::DismissInterruption).expect("dismissed");
    assert!(events.contains(&CalendarEvent::Displaced { meeting: id("m0") }));
    assert!(state.is_visible(&id("m0")));
    assert_eq!(
        state.placements.get(&id("all-hands")),
        Some(&SlotRef::new(2, 4))
    );
    assert_eq!(
        refused(
            &mut state,
            CalendarAction::Unplace {
                meeting: id("all-hands")
            }
        ),
        ActionError::Locked(id("all-hands"))
    );
}

#[test]
fn removed_person_takes_queued_and_unrevealed_meetings() {
    let mut meetings = plain(6);
    meetings[1] = meetings[1].clone().with_person("dana");
    meetings[5] = meetings[5].clone().with_person("dana");
    let out_sick = Interruption {
        id: "out-sick".into(),
        title: "Dana is out".into(),
        message: "Cancel everything with Dana.".into(),
        trigger: Trigger::Placements { count: 1 },
        effect: InterruptionEffect::RemovePerson {
            person: "dana".into(),
        },
    };
    let mut state = CalendarState::new(
        &scenario(meetings, vec![out_sick]),
        GameConfig::default(),
        1,
    );

    step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    step(&mut state, CalendarAction::DismissInterruption).expect("dismissed");

    assert!(state.trashed.contains(&id("m1")));
    assert!(state.trashed.contains(&id("m5")));
    assert!(!state.is_visible(&id("m1")));
    assert_eq!(state.trash_count, 0);
    assert!(state.unrevealed().all(|queued| queued != &id("m5")));
}

#[test]
fn rescheduled_meeting_leaves_a_slot_it_no_longer_fits() {
    let moved = Interruption {
        id: "moved".into(),
        title: "Moved".into(),
        message: "Mornings only now.".into(),
        trigger: Trigger::Placements { count: 1 },
        effect: InterruptionEffect::Reschedule {
            meeting: id("m0"),
            constraint: Constraint {
                max_slot: Some(3),
                ..Default::default()
            },
        },
    };
    let mut state = CalendarState::new(&scenario(plain(3), vec![moved]), GameConfig::default(), 1);

    step(&mut state, CalendarAction::place("m0", 1, 10)).expect("placed");
    step(&mut state, CalendarAction::DismissInterruption).expect("dismissed");
    assert!(!state.is_placed(&id("m0")));
    assert!(state.is_visible(&id("m0")));

    let events = step(&mut state, CalendarAction::place("m0", 1, 10)).expect("accepted");
    assert!(events.iter().any(|e| matches!(
        e,
        CalendarEvent::PlacementRejected {
            reason: PlacementError::AfterMaxSlot { max_slot: 3 },
            ..
        }
    )));
}

#[test]
fn unplace_is_idempotent() {
    let mut state = CalendarState::new(&scenario(plain(3), Vec::new()), GameConfig::default(), 1);
    step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    step(&mut state, CalendarAction::Unplace { meeting: id("m0") }).expect("unplaced");

    assert_eq!(
        refused(&mut state, CalendarAction::Unplace { meeting: id("m0") }),
        ActionError::NotPlaced(id("m0"))
    );
}

#[test]
fn place_then_unplace_restores_the_grid() {
    let mut state = CalendarState::new(&scenario(plain(3), Vec::new()), GameConfig::default(), 1);
    let grid = state.grid.clone();
    let placements = state.placements.clone();

    step(&mut state, CalendarAction::place("m1", 3, 7)).expect("placed");
    step(&mut state, CalendarAction::Unplace { meeting: id("m1") }).expect("unplaced");

    assert_eq!(state.grid, grid);
    assert_eq!(state.placements, placements);
    assert!(state.is_visible(&id("m1")));
}

#[test]
fn invalid_drop_flashes_and_clears_the_latch() {
    let meetings = vec![Meeting::new("long", "Offsite", 3)];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);

    let events = step(&mut state, CalendarAction::place("long", 0, 16)).expect("accepted");
    assert!(matches!(
        events.as_slice(),
        [CalendarEvent::PlacementRejected {
            reason: PlacementError::OutOfBounds { .. },
            ..
        }]
    ));
    assert!(!state.no_invalid_placements);
    let flash = state.invalid_flash.clone().expect("flashing");
    assert_eq!(flash.cells, [SlotRef::new(0, 16), SlotRef::new(0, 17)]);

    step(&mut state, CalendarAction::tick(600)).expect("tick");
    assert_eq!(state.invalid_flash, None);

    step(&mut state, CalendarAction::place("long", 0, 15)).expect("placed");
    assert!(state.is_placed(&id("long")));
    assert!(!state.no_invalid_placements);
}

#[test]
fn dependency_must_finish_first() {
    let meetings = vec![
        Meeting::new("kickoff", "Kickoff", 2),
        Meeting::new("retro", "Retro", 1).with_depends_on("kickoff"),
    ];
    let mut state = CalendarState::new(&scenario(meetings, Vec::new()), GameConfig::default(), 1);

    let events = step(&mut state, CalendarAction::place("retro", 0, 0)).expect("accepted");
    assert!(matches!(
        events.as_slice(),
        [CalendarEvent::PlacementRejected {
            reason: PlacementError::DependencyNotPlaced { .. },
            ..
        }]
    ));

    step(&mut state, CalendarAction::place("kickoff", 0, 4)).expect("placed");
    let events = step(&mut state, CalendarAction::place("retro", 0, 6)).expect("accepted");
    assert!(matches!(
        events.as_slice(),
        [CalendarEvent::PlacementRejected {
            reason: PlacementError::DependencyNotFinished { .. },
            ..
        }]
    ));
    step(&mut state, CalendarAction::place("retro", 0, 7)).expect("placed");
    assert!(state.is_placed(&id("retro")));
}

#[test]
fn drag_tracks_the_held_meeting() {
    let mut state = CalendarState::new(&scenario(plain(4), Vec::new()), GameConfig::default(), 1);

    step(&mut state, CalendarAction::BeginDrag { meeting: id("m0") }).expect("drag");
    assert_eq!(state.dragging, Some(id("m0")));
    step(&mut state, CalendarAction::EndDrag).expect("drop");
    assert_eq!(state.dragging, None);

    assert_eq!(
        refused(&mut state, CalendarAction::BeginDrag { meeting: id("m3") }),
        ActionError::NotVisible(id("m3"))
    );
}

#[test]
fn drip_reveals_two_at_a_time_in_the_rush() {
    let config = GameConfig {
        initial_visible: 1,
        visible_capacity: 6,
        ..GameConfig::default()
    };
    let mut state = CalendarState::new(&scenario(plain(8), Vec::new()), config, 1);

    step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    assert_eq!(state.visible_queue, [id("m1")]);

    step(&mut state, CalendarAction::tick(55_000)).expect("tick");
    step(&mut state, CalendarAction::place("m1", 0, 1)).expect("placed");
    assert_eq!(state.visible_queue, [id("m2"), id("m3")]);
}

fn add_meeting(interruption: &str, trigger: Trigger, meeting: &str) -> Interruption {
    Interruption {
        id: interruption.into(),
        title: interruption.into(),
        message: "Something came up.".into(),
        trigger,
        effect: InterruptionEffect::AddMeeting {
            meeting: Meeting::new(meeting, meeting, 1),
        },
    }
}

#[test]
fn oversized_second_values_saturate() {
    let mut meetings = plain(3);
    meetings[0] = meetings[0].clone().with_trash_penalty(5_000_000);
    let huge = scenario(meetings, Vec::new());
    assert!(huge.validate().is_ok());

    let mut state = CalendarState::new(&huge, GameConfig::default(), 1);
    step(&mut state, CalendarAction::Trash { meeting: id("m0") }).expect("trashed");
    assert_eq!(state.time_left_ms, 0);
    assert_eq!(state.total_trash_penalty_secs, 5_000_000);
    assert!(state.is_failed());

    let early = add_meeting("early", Trigger::TimeLeft { secs: 5_000_000 }, "late");
    let mut state = CalendarState::new(
        &scenario(plain(3), vec![early]),
        GameConfig::default(),
        1,
    );
    step(&mut state, CalendarAction::tick(250)).expect("tick");
    assert_eq!(state.mode(), Mode::InterruptionPending);

    let endless = CalendarState::new(
        &scenario(plain(1), Vec::new()),
        GameConfig {
            rush_threshold_secs: u32::MAX,
            ..GameConfig::with_round_secs(u32::MAX)
        },
        1,
    );
    assert_eq!(endless.time_left_ms, u32::MAX);
    assert_eq!(endless.drip_allowance(), Some(1));
}

#[test]
fn first_declared_interruption_fires_and_the_next_waits() {
    let interruptions = vec![
        add_meeting("first", Trigger::Placements { count: 1 }, "a"),
        add_meeting("second", Trigger::Placements { count: 1 }, "b"),
    ];
    let mut state = CalendarState::new(&scenario(plain(3), interruptions), GameConfig::default(), 1);

    step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    assert_eq!(state.pending_interruption, Some("first".into()));
    assert!(!state.fired_interruptions.contains("second"));

    let events = step(&mut state, CalendarAction::DismissInterruption).expect("dismissed");
    assert!(events.contains(&CalendarEvent::InterruptionTriggered {
        interruption: "second".into(),
    }));
    assert_eq!(state.pending_interruption, Some("second".into()));
    assert!(state.is_visible(&id("a")));

    step(&mut state, CalendarAction::DismissInterruption).expect("dismissed");
    assert_eq!(state.mode(), Mode::Normal);
    assert!(state.is_visible(&id("b")));
}

#[test]
fn placement_trigger_fires_only_once() {
    let interruptions = vec![add_meeting("ask", Trigger::Placements { count: 1 }, "late")];
    let mut state = CalendarState::new(&scenario(plain(3), interruptions), GameConfig::default(), 1);

    step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    step(&mut state, CalendarAction::DismissInterruption).expect("dismissed");
    step(&mut state, CalendarAction::Unplace { meeting: id("m0") }).expect("unplaced");

    let events = step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, CalendarEvent::InterruptionTriggered { .. }))
    );
    assert_eq!(state.pending_interruption, None);
    assert_eq!(state.fired_interruptions.len(), 1);
}

#[test]
fn time_trigger_waits_for_the_open_conflict() {
    let meetings = vec![
        Meeting::new("y", "Vendor Call", 1),
        Meeting::new("x", "Board Prep", 2).with_conflicts_with("y"),
        Meeting::new("z", "1:1", 1),
    ];
    let interruptions = vec![add_meeting("crunch", Trigger::TimeLeft { secs: 85 }, "late")];
    let mut state = CalendarState::new(&scenario(meetings, interruptions), GameConfig::default(), 1);

    step(&mut state, CalendarAction::place("y", 0, 0)).expect("placed");
    step(&mut state, CalendarAction::place("x", 1, 0)).expect("accepted");
    step(&mut state, CalendarAction::tick(20_000)).expect("tick");
    assert_eq!(state.time_left_ms, 80_000);
    assert_eq!(state.mode(), Mode::ConflictPending);
    assert!(state.fired_interruptions.is_empty());

    let events = step(
        &mut state,
        CalendarAction::ResolveConflict {
            resolution: Resolution::Decline,
        },
    )
    .expect("declined");
    assert!(events.contains(&CalendarEvent::InterruptionTriggered {
        interruption: "crunch".into(),
    }));
    assert_eq!(state.mode(), Mode::InterruptionPending);
}

#[test]
fn ticks_leave_a_non_empty_queue_alone() {
    let config = GameConfig {
        initial_visible: 1,
        ..GameConfig::default()
    };
    let mut state = CalendarState::new(&scenario(plain(4), Vec::new()), config, 1);

    step(&mut state, CalendarAction::tick(60_000)).expect("tick");
    assert_eq!(state.visible_queue, [id("m0")]);
    assert_eq!(state.drip_index, 1);

    step(&mut state, CalendarAction::place("m0", 0, 0)).expect("placed");
    assert_eq!(state.visible_queue, [id("m1"), id("m2")]);
}
