//! Game state and core simulation types
//!
//! Everything the frame loop mutates lives in [`GameState`]; nothing here
//! touches the window, the keyboard or the GPU.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which iteration of the game is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ruleset {
    /// Fixed per-frame steps, lagged edge collision, no menu, no restart
    Classic,
    /// Delta-time motion and the Menu/Playing/GameOver cycle
    Smooth,
    /// Adds the per-second score and session high score
    Scored,
    /// Adds two-axis axe motion and the difficulty ramp
    #[default]
    Ramped,
}

impl Ruleset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruleset::Classic => "Classic",
            Ruleset::Smooth => "Smooth",
            Ruleset::Scored => "Scored",
            Ruleset::Ramped => "Ramped",
        }
    }

    /// Parse a ruleset name, case-insensitive
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "plain" => Some(Ruleset::Classic),
            "smooth" => Some(Ruleset::Smooth),
            "scored" => Some(Ruleset::Scored),
            "ramped" => Some(Ruleset::Ramped),
            _ => None,
        }
    }

    /// Movement is scaled by delta-time (everything but the first iteration)
    pub fn uses_delta_time(&self) -> bool {
        *self != Ruleset::Classic
    }

    /// Starts on the menu and can be restarted after a loss
    pub fn has_menu(&self) -> bool {
        *self != Ruleset::Classic
    }

    pub fn keeps_score(&self) -> bool {
        matches!(self, Ruleset::Scored | Ruleset::Ramped)
    }

    pub fn two_axis_axe(&self) -> bool {
        *self == Ruleset::Ramped
    }

    pub fn ramps_difficulty(&self) -> bool {
        *self == Ruleset::Ramped
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for confirm
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; waits for restart (terminal under `Classic`)
    GameOver,
}

/// The player-controlled circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Centre position in screen pixels
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub color: [f32; 4],
}

impl Player {
    pub fn new(ruleset: Ruleset) -> Self {
        let (x, y, color) = match ruleset {
            Ruleset::Classic => (200, 200, colors::PURPLE),
            _ => (SCREEN_WIDTH / 2, SCREEN_HEIGHT / 2, colors::BLUE),
        };
        Self {
            x,
            y,
            radius: PLAYER_RADIUS,
            color,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    pub fn left(&self) -> i32 {
        self.x - self.radius
    }

    pub fn right(&self) -> i32 {
        self.x + self.radius
    }

    pub fn top(&self) -> i32 {
        self.y - self.radius
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.radius
    }
}

/// The bouncing square obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axe {
    /// Top-left corner in screen pixels
    pub x: i32,
    pub y: i32,
    pub length: i32,
    /// Pixels/second, or pixels/frame under `Classic`
    pub vel: Vec2,
    pub color: [f32; 4],
}

impl Axe {
    pub fn new(ruleset: Ruleset) -> Self {
        let vel = if !ruleset.uses_delta_time() {
            Vec2::new(0.0, CLASSIC_STEP as f32)
        } else if ruleset.two_axis_axe() {
            Vec2::splat(AXE_SPEED)
        } else {
            Vec2::new(0.0, AXE_SPEED)
        };
        Self {
            x: AXE_START_X,
            y: AXE_START_Y,
            length: AXE_LENGTH,
            vel,
            color: colors::RED,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            self.length as f32,
            self.length as f32,
        )
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.length
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.length
    }
}

/// Axis-aligned rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Score bookkeeping (scored rulesets only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub current: u32,
    /// Best score this session; survives restarts
    pub high: u32,
    /// Playing time not yet converted into a point, always in [0, 1)
    pub timer: f32,
    /// Last threshold at which the axe was sped up
    pub last_speed_increase: u32,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ruleset: Ruleset,
    pub phase: GamePhase,
    pub player: Player,
    pub axe: Axe,
    pub score: Score,
    /// Frames simulated while Playing
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh game for the given ruleset
    pub fn new(ruleset: Ruleset) -> Self {
        let phase = if ruleset.has_menu() {
            GamePhase::Menu
        } else {
            GamePhase::Playing
        };
        Self {
            ruleset,
            phase,
            player: Player::new(ruleset),
            axe: Axe::new(ruleset),
            score: Score::default(),
            time_ticks: 0,
        }
    }

    /// Put entities and score back to their initial values, keeping the
    /// session high score, and start playing.
    pub fn reset(&mut self) {
        let high = self.score.high;
        *self = Self::new(self.ruleset);
        self.score.high = high;
        self.phase = GamePhase::Playing;
    }

    /// Enter GameOver, folding the current score into the high score
    pub fn end_run(&mut self) {
        self.score.high = self.score.high.max(self.score.current);
        self.phase = GamePhase::GameOver;
    }
}

/// Entity colours (sRGB)
pub mod colors {
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const PURPLE: [f32; 4] = [200.0 / 255.0, 122.0 / 255.0, 1.0, 1.0];
    pub const BLUE: [f32; 4] = [0.0, 121.0 / 255.0, 241.0 / 255.0, 1.0];
    pub const RED: [f32; 4] = [230.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0, 1.0];
    pub const DARK_GRAY: [f32; 4] = [80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0, 1.0];
    pub const GRAY: [f32; 4] = [130.0 / 255.0, 130.0 / 255.0, 130.0 / 255.0, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_per_ruleset() {
        let classic = GameState::new(Ruleset::Classic);
        assert_eq!(classic.phase, GamePhase::Playing);
        assert_eq!((classic.player.x, classic.player.y), (200, 200));
        assert_eq!(classic.axe.vel, Vec2::new(0.0, 10.0));

        let ramped = GameState::new(Ruleset::Ramped);
        assert_eq!(ramped.phase, GamePhase::Menu);
        assert_eq!((ramped.player.x, ramped.player.y), (400, 225));
        assert_eq!((ramped.axe.x, ramped.axe.y), (300, 0));
        assert_eq!(ramped.axe.vel, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_reset_keeps_high_score_only() {
        let mut state = GameState::new(Ruleset::Scored);
        state.phase = GamePhase::Playing;
        state.player.x = 30;
        state.axe.y = 123;
        state.score.current = 7;
        state.score.timer = 0.4;
        state.end_run();
        assert_eq!(state.score.high, 7);

        state.reset();
        let mut expected = GameState::new(Ruleset::Scored);
        expected.phase = GamePhase::Playing;
        expected.score.high = 7;
        assert_eq!(state, expected);
    }

    #[test]
    fn test_end_run_never_lowers_high_score() {
        let mut state = GameState::new(Ruleset::Scored);
        state.score.high = 12;
        state.score.current = 3;
        state.end_run();
        assert_eq!(state.score.high, 12);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_ruleset_from_name() {
        assert_eq!(Ruleset::from_name("RAMPED"), Some(Ruleset::Ramped));
        assert_eq!(Ruleset::from_name("plain"), Some(Ruleset::Classic));
        assert_eq!(Ruleset::from_name("turbo"), None);
    }
}
