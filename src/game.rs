//! Frame loop
//!
//! One `frame` call per displayed frame: clock → input → tick → draw. The
//! native and web entry points only differ in how they feed keys and time in
//! and where the recorded scene goes.

use crate::platform::{Canvas, FrameClock, Key, Keyboard};
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, tick};
use crate::ui::{self, Overlay};

/// Game instance holding all loop-owned state
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    pub keyboard: Keyboard,
    clock: FrameClock,
    last_phase: GamePhase,
}

impl Game {
    pub fn new(settings: Settings) -> Self {
        let state = GameState::new(settings.ruleset);
        log::info!("Ruleset: {}", settings.ruleset.as_str());
        Self {
            last_phase: state.phase,
            state,
            settings,
            keyboard: Keyboard::new(),
            clock: FrameClock::new(),
        }
    }

    pub fn key_down(&mut self, key: Key) {
        self.keyboard.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.keyboard.key_up(key);
    }

    /// Focus lost: keys released outside the window never report key-up
    pub fn release_keys(&mut self) {
        let held: Vec<Key> = self.keyboard.held().collect();
        if !held.is_empty() {
            log::debug!("Releasing held keys {:?}", held);
        }
        self.keyboard.release_all();
    }

    /// Escape asks the host to close
    pub fn wants_exit(&self) -> bool {
        self.keyboard.is_pressed(Key::Escape)
    }

    /// Run one frame at host time `now` (seconds) and draw it
    pub fn frame(&mut self, now: f64, canvas: &mut impl Canvas) {
        let dt = self.clock.tick(now);
        let input = self.keyboard.tick_input();

        tick(&mut self.state, &input, dt);

        if self.state.phase != self.last_phase {
            log::debug!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }

        let overlay = Overlay {
            fps: self.settings.show_fps.then(|| self.clock.fps()),
        };
        ui::draw(&self.state, overlay, canvas);

        self.keyboard.end_frame();
    }
}
