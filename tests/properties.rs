use glam::Vec2;
use proptest::prelude::*;

use starfall_dodge::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, MAX_HEALTH};
use starfall_dodge::sim::difficulty;
use starfall_dodge::sim::{Difficulty, GameState, TickInput, tick};
use starfall_dodge::tuning::{Preset, RampTuning, Tuning};

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(up, down, left, right)| TickInput {
            up,
            down,
            left,
            right,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn player_stays_inside_canvas(
        seed in any::<u64>(),
        inputs in prop::collection::vec((input_strategy(), 1usize..40), 1..30),
    ) {
        let mut state = GameState::new(seed, Tuning::from_preset(Preset::Classic));
        let half = state.player.size / 2.0;
        for (input, repeat) in inputs {
            for _ in 0..repeat {
                tick(&mut state, &input);
                let p = state.player.pos;
                prop_assert!(p.x >= half && p.x <= CANVAS_WIDTH - half);
                prop_assert!(p.y >= half && p.y <= CANVAS_HEIGHT - half);
            }
        }
    }

    #[test]
    fn health_bounded_and_score_monotonic(
        seed in any::<u64>(),
        inputs in prop::collection::vec(input_strategy(), 200..1500),
    ) {
        let mut state = GameState::new(seed, Tuning::default());
        let mut last_score = 0;
        let mut game_overs = 0;
        for input in &inputs {
            let was_running = state.is_running();
            tick(&mut state, input);
            prop_assert!((0..=MAX_HEALTH).contains(&state.health));
            prop_assert!(state.score >= last_score);
            prop_assert_eq!((state.score - last_score) % 5, 0);
            last_score = state.score;
            if was_running && !state.is_running() {
                game_overs += 1;
                prop_assert_eq!(state.health, 0);
            }
        }
        prop_assert!(game_overs <= 1);
    }

    #[test]
    fn velocity_decays_without_input(vx in -50.0f32..50.0, vy in -50.0f32..50.0) {
        prop_assume!(Vec2::new(vx, vy).length() > 1e-3);
        let mut state = GameState::new(1, Tuning::from_preset(Preset::Classic));
        state.player.vel = Vec2::new(vx, vy);
        let mut prev = state.player.vel.length();
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
            let speed = state.player.vel.length();
            prop_assert!(speed < prev);
            prev = speed;
        }
    }

    #[test]
    fn ramp_never_passes_caps(steps in 0usize..200) {
        let tuning = Tuning::from_preset(Preset::Starfield);
        let ramp = RampTuning::default();
        let mut d = Difficulty::from_tuning(&tuning);
        for _ in 0..steps {
            difficulty::step(&mut d, &ramp);
        }
        prop_assert!(d.obstacle_speed <= 6.0);
        prop_assert!(d.resource_speed <= 4.4);
        prop_assert!(d.obstacle_interval >= 50);
        prop_assert!(d.resource_interval >= 100);
    }
}
