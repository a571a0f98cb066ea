//! Integration tests for the deadline countdown engine.
//!
//! These walk the full reveal scenario (the 2026-02-02 midnight IST
//! deadline) and pin down the timeline-independence guarantee: the engine
//! consumes absolute UTC instants only, so a device's configured timezone
//! can never change what it displays.

use chrono::{FixedOffset, TimeZone};
use proptest::prelude::*;
use reveal_core::{CountdownEngine, CountdownState, DeadlineTarget, Event};

fn completions(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, Event::CountdownCompleted { .. }))
        .count()
}

#[test]
fn reveal_scenario_two_seconds_out() {
    let target = DeadlineTarget::at_default_offset(2026, 2, 2, 0, 0, 0).unwrap();
    let mut engine = CountdownEngine::new(target);

    // Two seconds before midnight IST.
    let now = target.epoch_ms() - 2_000;
    engine.tick_at(now);
    let state = engine.state();
    assert_eq!((state.hours, state.minutes, state.seconds), (0, 0, 2));
    assert!(!state.is_complete);

    engine.tick_at(now + 1_000);
    assert_eq!(engine.state().seconds, 1);

    let events = engine.tick_at(now + 2_000);
    assert_eq!(completions(&events), 1);
    assert!(engine.state().is_complete);

    // Ticks keep landing after the deadline; the signal never repeats.
    let mut later = Vec::new();
    for i in 1..=30 {
        later.extend(engine.tick_at(now + 2_000 + i * 1_000));
    }
    assert_eq!(completions(&later), 0);
}

#[test]
fn same_utc_instant_reads_the_same_in_any_timezone() {
    let target = DeadlineTarget::at_default_offset(2026, 2, 2, 0, 0, 0).unwrap();

    // The same physical instant, written down by a device in Tokyo and one
    // in New York. Both collapse to the same epoch value, so the countdown
    // they drive is identical.
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let new_york = FixedOffset::west_opt(5 * 3600).unwrap();
    let instant_tokyo = tokyo.with_ymd_and_hms(2026, 2, 2, 3, 29, 45).unwrap();
    let instant_ny = new_york.with_ymd_and_hms(2026, 2, 1, 13, 29, 45).unwrap();
    assert_eq!(
        instant_tokyo.timestamp_millis(),
        instant_ny.timestamp_millis()
    );

    let mut a = CountdownEngine::new(target);
    let mut b = CountdownEngine::new(target);
    a.tick_at(instant_tokyo.timestamp_millis());
    b.tick_at(instant_ny.timestamp_millis());
    assert_eq!(a.state(), b.state());
    assert_eq!(a.state().seconds, 15);
}

#[test]
fn first_evaluation_happens_at_start() {
    let target = DeadlineTarget::from_now_plus_secs(90);
    let mut engine = CountdownEngine::new(target);
    let events = engine.start();
    // The first paint is real data, not a blank placeholder.
    assert!(matches!(events[0], Event::CountdownTick { .. }));
    let total = engine.state().total_seconds();
    assert!(total > 0 && total <= 90);
}

#[test]
fn final_countdown_cues_land_once_per_second() {
    let target = DeadlineTarget::at_default_offset(2026, 2, 2, 0, 0, 0).unwrap();
    let mut engine = CountdownEngine::new(target);
    engine.set_sound(true);

    // Irregular tick cadence across the last twelve seconds, several ticks
    // landing inside the same second.
    let t = target.epoch_ms();
    let offsets = [
        -12_000, -11_400, -10_200, -9_900, -9_100, -8_000, -7_400, -7_100, -6_000, -5_000, -4_200,
        -3_900, -3_100, -2_000, -1_200, -900,
    ];
    let mut cues = Vec::new();
    for off in offsets {
        for event in engine.tick_at(t + off) {
            if let Event::FinalSecondCue { seconds_left, .. } = event {
                cues.push(seconds_left);
            }
        }
    }
    // One cue per distinct second in 1..=10, in descending order.
    assert_eq!(cues, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn stop_from_within_event_handling_is_safe() {
    let target = DeadlineTarget::at_default_offset(2026, 2, 2, 0, 0, 0).unwrap();
    let mut engine = CountdownEngine::new(target);
    let t = target.epoch_ms();

    // A consumer reacting to the completion by tearing the session down,
    // then a stray tick arriving afterwards.
    for event in engine.tick_at(t + 500) {
        if matches!(event, Event::CountdownCompleted { .. }) {
            engine.stop();
        }
    }
    assert!(engine.tick_at(t + 1_500).is_empty());
    engine.stop(); // Still idempotent after natural completion.
}

proptest! {
    /// Decomposition law: fields recombine to the floored total and the
    /// minute/second fields stay in range.
    #[test]
    fn decomposition_recombines(remaining_ms in 0u64..=400_000_000_000) {
        let target = DeadlineTarget::at_default_offset(2026, 2, 2, 0, 0, 0).unwrap();
        let mut engine = CountdownEngine::new(target);
        engine.tick_at(target.epoch_ms() - remaining_ms as i64);
        let state: CountdownState = engine.state();
        if remaining_ms == 0 {
            prop_assert!(state.is_complete);
        } else {
            let total = remaining_ms / 1000;
            prop_assert_eq!(state.total_seconds(), total);
            prop_assert_eq!(state.remaining_ms, remaining_ms);
            prop_assert!(state.minutes <= 59);
            prop_assert!(state.seconds <= 59);
        }
    }
}
