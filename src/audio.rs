//! Sound effects
//!
//! The simulation never plays audio itself; the frame driver maps game
//! events to [`Sound`]s and hands them to a [`SoundPlayer`]. On the web the
//! clips are synthesized with the Web Audio API, so no audio files ship.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    /// Obstacle hit the player
    Hit,
    /// Resource collected
    Collect,
    /// Health ran out
    GameOver,
}

impl Sound {
    pub fn name(&self) -> &'static str {
        match self {
            Sound::Hit => "hit",
            Sound::Collect => "collect",
            Sound::GameOver => "gameover",
        }
    }
}

/// Fire-and-forget playback. Playing a clip that is still sounding restarts
/// it from the beginning instead of layering a second copy.
pub trait SoundPlayer {
    fn play(&mut self, sound: Sound);
}

/// Player that only logs, for the native runner
#[derive(Debug, Default)]
pub struct LogSoundPlayer;

impl SoundPlayer for LogSoundPlayer {
    fn play(&mut self, sound: Sound) {
        log::debug!("Sound: {}", sound.name());
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::collections::HashMap;

    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{Sound, SoundPlayer};

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
        muted: bool,
        /// Oscillators still scheduled per clip, stopped on restart
        voices: HashMap<Sound, Vec<OscillatorNode>>,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: 0.8,
                muted: false,
                voices: HashMap::new(),
            }
        }

        /// Set volume (0.0 - 1.0)
        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
        }

        pub fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn effective_volume(&self) -> f32 {
            if self.muted { 0.0 } else { self.volume }
        }

        /// Stop whatever is left of a previous instance of `sound`
        fn rewind(&mut self, sound: Sound) {
            if let Some(voices) = self.voices.remove(&sound) {
                for osc in voices {
                    osc.stop().ok();
                }
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Play a short sequence of notes: (freq, delay, length, level)
        fn sequence(
            ctx: &AudioContext,
            vol: f32,
            osc_type: OscillatorType,
            notes: &[(f32, f64, f64, f32)],
        ) -> Vec<OscillatorNode> {
            let mut voices = Vec::with_capacity(notes.len());
            for &(freq, delay, length, level) in notes {
                let Some((osc, gain)) = Self::create_osc(ctx, freq, osc_type) else {
                    continue;
                };
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * level, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + length)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + length + 0.05).ok();
                voices.push(osc);
            }
            voices
        }

        /// Hit - low thump sliding down
        fn hit(ctx: &AudioContext, vol: f32) -> Vec<OscillatorNode> {
            let Some((osc, gain)) = Self::create_osc(ctx, 180.0, OscillatorType::Square) else {
                return Vec::new();
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol * 0.4, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.2)
                .ok();
            osc.frequency().set_value_at_time(180.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(50.0, t + 0.2)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + 0.25).ok();
            vec![osc]
        }

        /// Collect - rising chime
        fn collect(ctx: &AudioContext, vol: f32) -> Vec<OscillatorNode> {
            Self::sequence(
                ctx,
                vol,
                OscillatorType::Sine,
                &[
                    (600.0, 0.0, 0.15, 0.25),
                    (800.0, 0.08, 0.15, 0.25),
                    (1000.0, 0.16, 0.15, 0.25),
                ],
            )
        }

        /// Game over - descending tones
        fn game_over(ctx: &AudioContext, vol: f32) -> Vec<OscillatorNode> {
            Self::sequence(
                ctx,
                vol,
                OscillatorType::Sine,
                &[
                    (400.0, 0.0, 0.3, 0.3),
                    (350.0, 0.2, 0.3, 0.3),
                    (300.0, 0.4, 0.3, 0.3),
                    (200.0, 0.6, 0.3, 0.3),
                ],
            )
        }
    }

    impl SoundPlayer for AudioManager {
        fn play(&mut self, sound: Sound) {
            let vol = self.effective_volume();
            if vol <= 0.0 {
                return;
            }

            self.rewind(sound);

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let voices = match sound {
                Sound::Hit => Self::hit(ctx, vol),
                Sound::Collect => Self::collect(ctx, vol),
                Sound::GameOver => Self::game_over(ctx, vol),
            };
            self.voices.insert(sound, voices);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sound_names() {
        assert_eq!(Sound::Hit.name(), "hit");
        assert_eq!(Sound::Collect.name(), "collect");
        assert_eq!(Sound::GameOver.name(), "gameover");
    }
}
