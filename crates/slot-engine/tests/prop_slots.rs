//! Property-based tests for slot computation using proptest.
//!
//! These check invariants that must hold for *any* well-formed working day,
//! not just the fixed scenarios in `calculator_tests.rs`.

use proptest::prelude::*;
use slot_engine::{compute_available_slots, merge_reserved, ScheduleConfig, TimeOfDay};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn hhmm(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn minutes_of(s: &str) -> i64 {
    s.parse::<TimeOfDay>().unwrap().minutes()
}

/// A working window `(start, end)` with `start < end`, both inside the day.
fn arb_window() -> impl Strategy<Value = (i64, i64)> {
    (0i64..=1380).prop_flat_map(|start| (Just(start), (start + 1)..=1439))
}

fn arb_step() -> impl Strategy<Value = i64> {
    prop_oneof![Just(5i64), Just(10), Just(15), Just(20), Just(30), Just(60), 1i64..=90]
}

fn arb_duration() -> impl Strategy<Value = i64> {
    1i64..=180
}

/// A full config: window, optional lunch inside the window, reserved starts
/// anywhere in the day.
fn arb_config() -> impl Strategy<Value = ScheduleConfig> {
    arb_window().prop_flat_map(|(start, end)| {
        let lunch = proptest::option::of((start..end).prop_flat_map(move |ls| {
            (Just(ls), (ls + 1)..=end)
        }));
        let reserved = proptest::collection::vec(0i64..1440, 0..12);
        (Just(start), Just(end), lunch, reserved).prop_map(|(start, end, lunch, reserved)| {
            let mut config = ScheduleConfig::new(hhmm(start), hhmm(end))
                .with_reserved(reserved.into_iter().map(hhmm));
            if let Some((ls, le)) = lunch {
                config = config.with_lunch(hhmm(ls), hhmm(le));
            }
            config
        })
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Output is strictly ascending
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn output_is_strictly_ascending(
        cfg in arb_config(),
        duration in arb_duration(),
        step in arb_step(),
    ) {
        let slots = compute_available_slots(&cfg, duration, step).unwrap();
        for pair in slots.windows(2) {
            prop_assert!(
                minutes_of(&pair[0]) < minutes_of(&pair[1]),
                "slots not strictly ascending: {} then {}",
                pair[0],
                pair[1]
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Every slot fits inside the working window
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_stay_inside_window(
        cfg in arb_config(),
        duration in arb_duration(),
        step in arb_step(),
    ) {
        let start = minutes_of(&cfg.start);
        let end = minutes_of(&cfg.end);
        for slot in compute_available_slots(&cfg, duration, step).unwrap() {
            let s = minutes_of(&slot);
            prop_assert!(s >= start, "{} starts before window", slot);
            prop_assert!(s + duration <= end, "{} runs past window end", slot);
            prop_assert_eq!((s - start) % step, 0, "{} is off the step grid", slot);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: No slot intersects lunch
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_slot_intersects_lunch(
        cfg in arb_config(),
        duration in arb_duration(),
        step in arb_step(),
    ) {
        if let (Some(ls), Some(le)) = (&cfg.lunch_start, &cfg.lunch_end) {
            let (ls, le) = (minutes_of(ls), minutes_of(le));
            for slot in compute_available_slots(&cfg, duration, step).unwrap() {
                let s = minutes_of(&slot);
                prop_assert!(
                    !(s < le && s + duration > ls),
                    "{} (+{}m) intersects lunch",
                    slot,
                    duration
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: No slot intersects any reserved block
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_slot_intersects_reserved_block(
        cfg in arb_config(),
        duration in arb_duration(),
        step in arb_step(),
    ) {
        for slot in compute_available_slots(&cfg, duration, step).unwrap() {
            let s = minutes_of(&slot);
            for r in &cfg.reserved {
                let r = minutes_of(r);
                prop_assert!(
                    !(s < r + step && s + duration > r),
                    "{} (+{}m) intersects reserved block at {}",
                    slot,
                    duration,
                    hhmm(r)
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Every rejected grid candidate has a reason
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn rejected_candidates_collide_with_something(
        cfg in arb_config(),
        duration in arb_duration(),
        step in arb_step(),
    ) {
        let slots = compute_available_slots(&cfg, duration, step).unwrap();
        let start = minutes_of(&cfg.start);
        let end = minutes_of(&cfg.end);
        let lunch = cfg
            .lunch_start
            .as_deref()
            .zip(cfg.lunch_end.as_deref())
            .map(|(ls, le)| (minutes_of(ls), minutes_of(le)));
        let reserved: Vec<i64> = cfg.reserved.iter().map(|r| minutes_of(r)).collect();

        let mut candidate = start;
        while candidate + duration <= end {
            if !slots.contains(&hhmm(candidate)) {
                let in_lunch = lunch
                    .is_some_and(|(ls, le)| candidate < le && candidate + duration > ls);
                let in_reserved = reserved
                    .iter()
                    .any(|&r| candidate < r + step && candidate + duration > r);
                prop_assert!(
                    in_lunch || in_reserved,
                    "{} was rejected without a collision",
                    hhmm(candidate)
                );
            }
            candidate += step;
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: Merged runs are sorted and cover every block exactly once
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn merged_runs_cover_every_block(
        starts in proptest::collection::vec(0i64..1440, 0..20),
        step in arb_step(),
    ) {
        let times: Vec<TimeOfDay> = starts
            .iter()
            .map(|&m| TimeOfDay::from_minutes(m).unwrap())
            .collect();
        let runs = merge_reserved(&times, step).unwrap();

        for pair in runs.windows(2) {
            prop_assert!(pair[0].start < pair[1].start, "runs not sorted");
        }
        for &s in &starts {
            prop_assert!(
                runs.iter().any(|r| r.start <= s && s + step <= r.end),
                "block at {} not covered by any run",
                hhmm(s)
            );
        }
        let total: i64 = runs.iter().map(|r| r.duration_minutes()).sum();
        let mut unique = starts.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(total, unique.len() as i64 * step);
    }
}

// ---------------------------------------------------------------------------
// Property 7: Idempotence
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn repeated_calls_agree(
        cfg in arb_config(),
        duration in arb_duration(),
        step in arb_step(),
    ) {
        let first = compute_available_slots(&cfg, duration, step).unwrap();
        let second = compute_available_slots(&cfg, duration, step).unwrap();
        prop_assert_eq!(first, second);
    }
}
