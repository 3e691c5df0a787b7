use proptest::prelude::*;
use outline_mini::depth::{normalize, normalize_from};
use outline_mini::prefix::render;
use outline_mini::{EngineBuilder, Entry, InputCommand, Mode};

fn depth_seq() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-5i32..20, 0..64)
}

fn entry_seq() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(("[a-z]{0,8}", 0i32..6), 0..24)
        .prop_map(|v| v.into_iter().map(|(t, d)| Entry::new(t, d)).collect())
}

fn command() -> impl Strategy<Value = InputCommand> {
    prop_oneof![
        Just(InputCommand::MoveUp),
        Just(InputCommand::MoveDown),
        Just(InputCommand::MoveLeft),
        Just(InputCommand::MoveRight),
        Just(InputCommand::Confirm),
        Just(InputCommand::Cancel),
        Just(InputCommand::Toggle),
        Just(InputCommand::Delete),
        Just(InputCommand::Backspace),
        Just(InputCommand::Home),
        Just(InputCommand::End),
        any::<char>().prop_map(InputCommand::CharacterInsert),
    ]
}

proptest! {
    #[test]
    fn normalization_is_idempotent(mut depths in depth_seq()) {
        normalize(&mut depths);
        let once = depths.clone();
        normalize(&mut depths);
        prop_assert_eq!(once, depths);
    }

    #[test]
    fn normalization_enforces_the_step_rule(mut depths in depth_seq()) {
        normalize(&mut depths);
        for i in 1..depths.len() {
            prop_assert!(depths[i] <= depths[i - 1] + 1);
        }
    }

    #[test]
    fn normalization_never_raises_a_depth(depths in depth_seq()) {
        let mut clamped = depths.clone();
        normalize(&mut clamped);
        for (before, after) in depths.iter().zip(&clamped) {
            prop_assert!(after <= before);
        }
    }

    #[test]
    fn partial_normalization_only_touches_the_tail(
        depths in depth_seq(),
        start in 0usize..64,
    ) {
        let mut clamped = depths.clone();
        normalize_from(&mut clamped, start);
        let head = start.min(depths.len()).max(1).min(depths.len());
        prop_assert_eq!(&depths[..head], &clamped[..head]);
    }

    #[test]
    fn render_is_deterministic(depths in depth_seq()) {
        prop_assert_eq!(render(&depths), render(&depths));
        prop_assert_eq!(render(&depths).len(), depths.len());
    }

    #[test]
    fn normalized_sequences_produce_wellformed_prefixes(mut depths in depth_seq()) {
        normalize(&mut depths);
        for (d, p) in depths.iter().zip(render(&depths)) {
            if *d <= 0 {
                prop_assert_eq!(p, "");
            } else {
                // One four-column segment per level.
                prop_assert_eq!(p.chars().count() as i32, d * 4);
            }
        }
    }

    #[test]
    fn command_sequences_never_panic(
        entries in entry_seq(),
        labels in 0usize..4,
        commands in prop::collection::vec(command(), 0..80),
    ) {
        let mut eng = EngineBuilder::default()
            .labels(labels)
            .entries(entries)
            .build();

        for cmd in commands {
            eng.handle_input(cmd);

            // Alignment invariants hold after every single command.
            let n = eng.len();
            prop_assert_eq!(eng.rows().count(), n);
            prop_assert!(eng.focus() < n || n == 0);
            for row in eng.rows() {
                prop_assert_eq!(row.tags.len(), labels);
            }
            if let Mode::Edit { buffer, cursor } = eng.mode() {
                prop_assert!(
                    *cursor <= buffer.chars().count(),
                    "cursor past buffer end"
                );
            }
            if let Mode::Tags { cursor } = eng.mode() {
                prop_assert!(*cursor < labels);
            }
        }
    }

    #[test]
    fn export_always_round_trips(
        entries in entry_seq(),
        commands in prop::collection::vec(command(), 0..40),
    ) {
        let mut eng = EngineBuilder::default().entries(entries).build();
        for cmd in commands {
            eng.handle_input(cmd);
        }

        // A pending re-indent nudge may still violate the step rule; the
        // first load clamps it. From then on the round trip is exact.
        let mut first = EngineBuilder::default().build();
        first.load(eng.export());
        let settled = first.export();

        let mut second = EngineBuilder::default().build();
        second.load(settled.clone());
        prop_assert_eq!(second.export(), settled);
    }
}
