//! Axe Game - a tiny arcade dodge game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collision, game phases)
//! - `platform`: Capability interface over the window/input backend
//! - `ui`: Per-phase scene drawing through `platform::Canvas`
//! - `game`: The per-frame loop tying clock, input, sim and drawing together
//! - `renderer`: WebGPU rendering of the recorded scene
//! - `settings`: Player preferences (ruleset, overlays)

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::AxeGameError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (logical pixels)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 450;
    /// Default window title
    pub const WINDOW_TITLE: &str = "Axe Game";

    /// Frame rate the host loop is capped at
    pub const TARGET_FPS: u32 = 60;
    /// Largest delta-time fed to the sim (window drags, tab switches)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Player defaults
    pub const PLAYER_RADIUS: i32 = 25;
    /// Player speed for delta-time rulesets (pixels/second)
    pub const PLAYER_SPEED: f32 = 300.0;
    /// Per-frame step of the first iteration (pixels/frame)
    pub const CLASSIC_STEP: i32 = 10;

    /// Axe defaults
    pub const AXE_LENGTH: i32 = 50;
    pub const AXE_START_X: i32 = 300;
    pub const AXE_START_Y: i32 = 0;
    /// Axe speed per axis (pixels/second)
    pub const AXE_SPEED: f32 = 200.0;
    /// Hard cap on each velocity component once the ramp kicks in
    pub const AXE_MAX_SPEED: f32 = 600.0;

    /// Score points between difficulty steps
    pub const SPEED_RAMP_INTERVAL: u32 = 10;
    /// Multiplier applied to axe speed at each step
    pub const SPEED_RAMP_FACTOR: f32 = 1.2;
}
