//! Per-frame simulation step
//!
//! `tick` is the whole state machine: Menu → Playing → GameOver → Playing.

use super::collision::{edges_overlap, player_hits_axe};
use super::motion::Movement;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Directions held down
    pub movement: Movement,
    /// Confirm went down this frame (Space)
    pub confirm: bool,
    /// Restart went down this frame (R)
    pub restart: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                state.reset();
                log::info!("Run started ({})", state.ruleset.as_str());
            }
        }
        GamePhase::Playing => {
            if state.ruleset.uses_delta_time() {
                tick_playing(state, input, dt);
            } else {
                tick_classic(state, input);
            }
        }
        GamePhase::GameOver => {
            if input.restart && state.ruleset.has_menu() {
                state.reset();
                log::info!("Run restarted (high score {})", state.score.high);
            }
        }
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    state.player.update(input.movement, PLAYER_SPEED, dt);
    state.axe.update(dt);

    if state.ruleset.keeps_score() {
        accumulate_score(state, dt);
    }
    if state.ruleset.ramps_difficulty() {
        ramp_difficulty(state);
    }

    if player_hits_axe(&state.player, &state.axe) {
        state.end_run();
        log::info!(
            "Game over: score {} (high {})",
            state.score.current,
            state.score.high
        );
    }
}

/// First iteration: the hit test runs on the positions from before this
/// frame's movement, so a hit only ends the run one frame late.
fn tick_classic(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    let hit = edges_overlap(&state.player, &state.axe);

    state.axe.step_classic();
    state.player.step(input.movement, CLASSIC_STEP);

    if hit {
        state.end_run();
        log::info!("Game over after {} frames", state.time_ticks);
    }
}

/// Turn Playing time into whole points, one per full second
fn accumulate_score(state: &mut GameState, dt: f32) {
    let score = &mut state.score;
    score.timer += dt;
    while score.timer >= 1.0 {
        score.current += 1;
        score.timer -= 1.0;
    }
}

/// Speed the axe up once per `SPEED_RAMP_INTERVAL` points
fn ramp_difficulty(state: &mut GameState) {
    let threshold = (state.score.current / SPEED_RAMP_INTERVAL) * SPEED_RAMP_INTERVAL;
    if threshold == 0 || threshold <= state.score.last_speed_increase {
        return;
    }
    state.score.last_speed_increase = threshold;
    if state.axe.speed_up(SPEED_RAMP_FACTOR, AXE_MAX_SPEED) {
        log::debug!(
            "Axe sped up at score {}: ({:.0}, {:.0})",
            threshold,
            state.axe.vel.x,
            state.axe.vel.y
        );
    }
}
