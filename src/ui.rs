//! Scene drawing for each game phase
//!
//! Only talks to [`Canvas`], so tests can record the calls instead of
//! opening a window.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::{Canvas, Color};
use crate::sim::state::colors;
use crate::sim::{GamePhase, GameState, Rect, Ruleset};

const TITLE_SIZE: f32 = 40.0;
const TEXT_SIZE: f32 = 20.0;
const HUD_MARGIN: f32 = 10.0;

/// Extra per-frame info shown on top of the scene
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    pub fps: Option<u32>,
}

/// Draw the whole frame for the current phase
pub fn draw(state: &GameState, overlay: Overlay, canvas: &mut impl Canvas) {
    canvas.clear(colors::WHITE);

    match state.phase {
        GamePhase::Menu => draw_menu(state, canvas),
        GamePhase::Playing => draw_playing(state, canvas),
        GamePhase::GameOver => draw_game_over(state, canvas),
    }

    if let Some(fps) = overlay.fps {
        let text = format!("FPS: {fps}");
        let x = SCREEN_WIDTH as f32 - HUD_MARGIN - canvas.measure_text(&text, TEXT_SIZE);
        canvas.draw_text(&text, Vec2::new(x, HUD_MARGIN), TEXT_SIZE, colors::GRAY);
    }
}

/// Text centred horizontally with its top at `y`
fn centered_text(canvas: &mut impl Canvas, text: &str, y: f32, size: f32, color: Color) {
    let width = canvas.measure_text(text, size);
    let x = (SCREEN_WIDTH as f32 - width) / 2.0;
    canvas.draw_text(text, Vec2::new(x, y), size, color);
}

fn draw_menu(state: &GameState, canvas: &mut impl Canvas) {
    let mid = SCREEN_HEIGHT as f32 / 2.0;
    centered_text(canvas, "AXE GAME", mid - 80.0, TITLE_SIZE, colors::DARK_GRAY);
    centered_text(
        canvas,
        "PRESS SPACE TO START",
        mid,
        TEXT_SIZE,
        colors::DARK_GRAY,
    );
    if state.score.high > 0 {
        let text = format!("HIGH SCORE: {}", state.score.high);
        centered_text(canvas, &text, mid + 40.0, TEXT_SIZE, colors::GRAY);
    }
}

fn draw_entities(state: &GameState, canvas: &mut impl Canvas) {
    let player = &state.player;
    canvas.fill_circle(player.center(), player.radius as f32, player.color);

    let axe = &state.axe;
    canvas.fill_rect(axe.rect(), axe.color);
}

fn draw_playing(state: &GameState, canvas: &mut impl Canvas) {
    draw_entities(state, canvas);

    if state.ruleset.keeps_score() {
        let score = format!("SCORE: {}", state.score.current);
        let high = format!("HIGH SCORE: {}", state.score.high);
        canvas.draw_text(
            &score,
            Vec2::new(HUD_MARGIN, HUD_MARGIN),
            TEXT_SIZE,
            colors::DARK_GRAY,
        );
        canvas.draw_text(
            &high,
            Vec2::new(HUD_MARGIN, HUD_MARGIN + TEXT_SIZE + 4.0),
            TEXT_SIZE,
            colors::DARK_GRAY,
        );
    }
}

fn draw_game_over(state: &GameState, canvas: &mut impl Canvas) {
    if state.ruleset == Ruleset::Classic {
        canvas.draw_text("Game Over", Vec2::new(400.0, 200.0), TEXT_SIZE, colors::RED);
        return;
    }

    let mid = SCREEN_HEIGHT as f32 / 2.0;
    let panel = Rect::new(150.0, mid - 110.0, SCREEN_WIDTH as f32 - 300.0, 220.0);
    canvas.stroke_rect(panel, 3.0, colors::RED);

    centered_text(canvas, "GAME OVER", mid - 90.0, TITLE_SIZE, colors::RED);

    let mut y = mid - 20.0;
    if state.ruleset.keeps_score() {
        let score = format!("SCORE: {}", state.score.current);
        let high = format!("HIGH SCORE: {}", state.score.high);
        centered_text(canvas, &score, y, TEXT_SIZE, colors::DARK_GRAY);
        y += TEXT_SIZE + 8.0;
        centered_text(canvas, &high, y, TEXT_SIZE, colors::DARK_GRAY);
        y += TEXT_SIZE + 8.0;
    }
    centered_text(canvas, "PRESS R TO RESTART", y + 12.0, TEXT_SIZE, colors::GRAY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear(Color),
        Circle(Vec2, f32),
        Rect(Rect),
        Stroke(Rect),
        Text(String, Vec2),
    }

    /// Records draw calls; text is 10 px per character
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Recorder {
        fn texts(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Text(t, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for Recorder {
        fn clear(&mut self, color: Color) {
            self.calls.push(Call::Clear(color));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
            self.calls.push(Call::Circle(center, radius));
        }
        fn fill_rect(&mut self, rect: Rect, _color: Color) {
            self.calls.push(Call::Rect(rect));
        }
        fn stroke_rect(&mut self, rect: Rect, _thickness: f32, _color: Color) {
            self.calls.push(Call::Stroke(rect));
        }
        fn draw_text(&mut self, text: &str, pos: Vec2, _size: f32, _color: Color) {
            self.calls.push(Call::Text(text.to_string(), pos));
        }
        fn measure_text(&self, text: &str, _size: f32) -> f32 {
            text.len() as f32 * 10.0
        }
    }

    #[test]
    fn test_menu_shows_prompt_only() {
        let state = GameState::new(Ruleset::Ramped);
        let mut rec = Recorder::default();
        draw(&state, Overlay::default(), &mut rec);

        assert_eq!(rec.calls[0], Call::Clear(colors::WHITE));
        assert_eq!(rec.texts(), vec!["AXE GAME", "PRESS SPACE TO START"]);
        assert!(!rec.calls.iter().any(|c| matches!(c, Call::Circle(..))));
    }

    #[test]
    fn test_playing_draws_entities_and_score() {
        let mut state = GameState::new(Ruleset::Scored);
        state.reset();
        state.score.current = 3;
        state.score.high = 8;
        let mut rec = Recorder::default();
        draw(&state, Overlay::default(), &mut rec);

        assert!(rec
            .calls
            .contains(&Call::Circle(Vec2::new(400.0, 225.0), 25.0)));
        assert!(rec
            .calls
            .contains(&Call::Rect(Rect::new(300.0, 0.0, 50.0, 50.0))));
        assert_eq!(rec.texts(), vec!["SCORE: 3", "HIGH SCORE: 8"]);
    }

    #[test]
    fn test_unscored_playing_has_no_hud() {
        let mut state = GameState::new(Ruleset::Smooth);
        state.reset();
        let mut rec = Recorder::default();
        draw(&state, Overlay::default(), &mut rec);
        assert!(rec.texts().is_empty());
    }

    #[test]
    fn test_game_over_is_centered() {
        let mut state = GameState::new(Ruleset::Ramped);
        state.reset();
        state.score.current = 12;
        state.end_run();
        let mut rec = Recorder::default();
        draw(&state, Overlay::default(), &mut rec);

        let title = rec
            .calls
            .iter()
            .find_map(|c| match c {
                Call::Text(t, pos) if t == "GAME OVER" => Some(*pos),
                _ => None,
            })
            .unwrap();
        // 9 characters at 10 px
        assert_eq!(title.x, (800.0 - 90.0) / 2.0);
        assert!(rec.texts().contains(&"HIGH SCORE: 12"));
        assert!(rec.texts().contains(&"PRESS R TO RESTART"));
    }

    #[test]
    fn test_classic_game_over_text() {
        let mut state = GameState::new(Ruleset::Classic);
        state.end_run();
        let mut rec = Recorder::default();
        draw(&state, Overlay::default(), &mut rec);
        assert_eq!(
            rec.calls,
            vec![
                Call::Clear(colors::WHITE),
                Call::Text("Game Over".to_string(), Vec2::new(400.0, 200.0)),
            ]
        );
    }

    #[test]
    fn test_fps_overlay_right_aligned() {
        let state = GameState::new(Ruleset::Ramped);
        let mut rec = Recorder::default();
        draw(&state, Overlay { fps: Some(60) }, &mut rec);
        let last = rec.calls.last().unwrap();
        assert_eq!(
            last,
            &Call::Text("FPS: 60".to_string(), Vec2::new(800.0 - 10.0 - 70.0, 10.0))
        );
    }
}
