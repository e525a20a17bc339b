//! Frame driver
//!
//! Owns one session and runs Update then Draw for every display refresh.
//! Sound and host-shell access come in through the [`SoundPlayer`] and
//! [`DialogHost`] capabilities so the whole loop runs headless in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{Sound, SoundPlayer};
use crate::hud::{Hud, HudSink};
use crate::platform::{DialogButtons, DialogChoice, DialogHost, DialogSeverity};
use crate::renderer::DrawList;
use crate::sim::{GameEvent, GameState, KeyboardState, autopilot, tick};
use crate::tuning::Tuning;

/// What the host loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Keep scheduling frames
    Continue,
    /// The player chose to retry; a fresh session replaced the old one
    Restarted,
    /// The player quit; stop scheduling frames
    Exit,
}

/// Output of one frame
#[derive(Debug, Clone)]
pub struct Frame {
    pub draw_list: DrawList,
    pub outcome: FrameOutcome,
}

/// Game instance holding the session and its collaborators
pub struct Game<S: SoundPlayer, D: DialogHost> {
    pub state: GameState,
    keyboard: KeyboardState,
    hud: Hud,
    tuning: Tuning,
    sound: S,
    host: D,
    /// Seeds for sessions started by a retry
    seeds: Pcg32,
    /// Idle/demo mode - the bot plays instead of the keyboard
    autopilot: bool,
    game_over_handled: bool,
    exited: bool,
}

impl<S: SoundPlayer, D: DialogHost> Game<S, D> {
    pub fn new(seed: u64, tuning: Tuning, sound: S, host: D) -> Self {
        log::info!("Starting session with seed {seed}");
        Self {
            state: GameState::new(seed, tuning.clone()),
            keyboard: KeyboardState::new(),
            hud: Hud::new(),
            tuning,
            sound,
            host,
            seeds: Pcg32::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
            autopilot: false,
            game_over_handled: false,
            exited: false,
        }
    }

    /// Key press from the host; ignored once the run is over
    pub fn key_down(&mut self, identifier: &str) {
        if self.state.is_running() {
            self.keyboard.key_down(identifier);
        }
    }

    /// Key release from the host; ignored once the run is over
    pub fn key_up(&mut self, identifier: &str) {
        if self.state.is_running() {
            self.keyboard.key_up(identifier);
        }
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn toggle_autopilot(&mut self) -> bool {
        self.autopilot = !self.autopilot;
        log::info!("Idle mode: {}", self.autopilot);
        self.autopilot
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn host(&self) -> &D {
        &self.host
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    /// Run one display refresh: update, draw, HUD, game-over handling
    pub fn frame(&mut self, hud_sink: &mut impl HudSink) -> Frame {
        if self.exited {
            return Frame {
                draw_list: DrawList::default(),
                outcome: FrameOutcome::Exit,
            };
        }

        let input = if self.autopilot {
            autopilot(&self.state)
        } else {
            self.keyboard.snapshot()
        };
        tick(&mut self.state, &input);
        self.dispatch_events();

        let draw_list = DrawList::build(&self.state);
        self.hud.sync(&self.state, hud_sink);

        let outcome = if self.state.is_running() || self.game_over_handled {
            FrameOutcome::Continue
        } else {
            self.handle_game_over()
        };

        Frame { draw_list, outcome }
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::ObstacleHit { .. } => self.sound.play(Sound::Hit),
                GameEvent::ResourceCollected { .. } => self.sound.play(Sound::Collect),
                GameEvent::DifficultyRaised { .. } | GameEvent::GameOver { .. } => {}
            }
        }
    }

    /// Play the terminal sound and let the player retry or quit
    fn handle_game_over(&mut self) -> FrameOutcome {
        self.game_over_handled = true;
        self.keyboard.clear();
        self.sound.play(Sound::GameOver);

        let body = format!("Your final score is: {}.", self.state.score);
        let choice = self.host.show_message_box(
            "Game Over!",
            &body,
            DialogButtons::RetryCancel,
            DialogSeverity::Info,
        );

        if choice == DialogChoice::Retry {
            self.restart();
            FrameOutcome::Restarted
        } else {
            self.exited = true;
            self.host.exit();
            FrameOutcome::Exit
        }
    }

    /// Replace the session with a brand-new one
    pub fn restart(&mut self) {
        let seed = self.seeds.random::<u64>();
        log::info!("Restarting with seed {seed}");
        self.state = GameState::new(seed, self.tuning.clone());
        self.keyboard.clear();
        self.hud.invalidate();
        self.game_over_handled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::HudField;
    use crate::platform::HeadlessHost;
    use crate::sim::TickInput;

    #[derive(Default)]
    struct Sounds(Vec<Sound>);

    impl SoundPlayer for Sounds {
        fn play(&mut self, sound: Sound) {
            self.0.push(sound);
        }
    }

    struct NoHud;

    impl HudSink for NoHud {
        fn set_text(&mut self, _field: HudField, _text: &str) {}
        fn set_color(&mut self, _field: HudField, _css_color: &str) {}
    }

    #[test]
    fn test_keys_move_player() {
        let mut game = Game::new(
            1,
            Tuning::default(),
            Sounds::default(),
            HeadlessHost::new(DialogChoice::Cancel),
        );
        game.key_down("ArrowRight");
        game.frame(&mut NoHud);
        assert!(game.state.player.pos.x > 400.0);

        game.key_up("ArrowRight");
        game.key_down("Unidentified");
        let x = game.state.player.pos.x;
        game.frame(&mut NoHud);
        // Coasting on remaining velocity
        assert!(game.state.player.pos.x > x);
    }

    #[test]
    fn test_keys_ignored_while_not_running() {
        let mut game = Game::new(
            4,
            Tuning::default(),
            Sounds::default(),
            HeadlessHost::new(DialogChoice::Retry),
        );
        game.key_down("ArrowLeft");
        crate::sim::collision::enter_game_over(&mut game.state);

        game.key_down("ArrowRight");
        game.key_up("ArrowLeft");
        assert_eq!(
            game.keyboard.snapshot(),
            TickInput {
                left: true,
                ..TickInput::default()
            }
        );

        game.frame(&mut NoHud);
        assert_eq!(game.keyboard.snapshot(), TickInput::default());
    }

    #[test]
    fn test_retry_builds_fresh_session() {
        let mut game = Game::new(
            2,
            Tuning::default(),
            Sounds::default(),
            HeadlessHost::new(DialogChoice::Retry),
        );
        game.state.health = 0;
        crate::sim::collision::enter_game_over(&mut game.state);

        let frame = game.frame(&mut NoHud);
        assert_eq!(frame.outcome, FrameOutcome::Restarted);
        assert!(game.state.is_running());
        assert_eq!(game.state.health, 100);
        assert_eq!(game.state.frame_count, 0);
        assert_eq!(game.sound().0, vec![Sound::GameOver]);
        assert!(!game.host().exited);
    }

    #[test]
    fn test_cancel_exits() {
        let mut game = Game::new(
            3,
            Tuning::default(),
            Sounds::default(),
            HeadlessHost::new(DialogChoice::Cancel),
        );
        crate::sim::collision::enter_game_over(&mut game.state);

        let last = game.frame(&mut NoHud);
        assert_eq!(last.outcome, FrameOutcome::Exit);
        // The final scene still comes back for the host to paint
        assert!(!last.draw_list.is_empty());
        assert!(game.host().exited);
        assert!(game.has_exited());
        assert_eq!(game.frame(&mut NoHud).outcome, FrameOutcome::Exit);
        assert_eq!(game.sound().0, vec![Sound::GameOver]);
    }
}
