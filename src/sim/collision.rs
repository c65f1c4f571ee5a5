//! Collision predicates between the player circle and the axe square

use glam::Vec2;

use super::state::{Axe, Player, Rect};

/// Check whether a circle overlaps an axis-aligned rectangle.
///
/// Touching counts as overlapping. Works on the distance between the circle
/// centre and the rectangle centre, folded into the first quadrant.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: Rect) -> bool {
    let half = Vec2::new(rect.width / 2.0, rect.height / 2.0);
    let d = (center - rect.center()).abs();

    if d.x > half.x + radius || d.y > half.y + radius {
        return false;
    }
    if d.x <= half.x || d.y <= half.y {
        return true;
    }

    let corner = d - half;
    corner.length_squared() <= radius * radius
}

/// Does the player currently touch the axe?
pub fn player_hits_axe(player: &Player, axe: &Axe) -> bool {
    circle_rect_overlap(player.center(), player.radius as f32, axe.rect())
}

/// First-iteration test: the circle's bounding box against the axe's edges
pub fn edges_overlap(player: &Player, axe: &Axe) -> bool {
    axe.bottom() >= player.top()
        && axe.top() <= player.bottom()
        && axe.right() >= player.left()
        && axe.left() <= player.right()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Ruleset;

    fn rect() -> Rect {
        Rect::new(300.0, 200.0, 50.0, 50.0)
    }

    #[test]
    fn test_overlap_inside() {
        assert!(circle_rect_overlap(Vec2::new(325.0, 225.0), 5.0, rect()));
    }

    #[test]
    fn test_overlap_side() {
        // 20 px right of the right edge, radius 25
        assert!(circle_rect_overlap(Vec2::new(370.0, 225.0), 25.0, rect()));
        // Exactly touching
        assert!(circle_rect_overlap(Vec2::new(375.0, 225.0), 25.0, rect()));
        assert!(!circle_rect_overlap(Vec2::new(376.0, 225.0), 25.0, rect()));
    }

    #[test]
    fn test_overlap_corner() {
        // Diagonal from the bottom-right corner (350, 250)
        assert!(circle_rect_overlap(Vec2::new(365.0, 265.0), 25.0, rect()));
        // Inside the bounding square but outside the rounded corner
        assert!(!circle_rect_overlap(Vec2::new(370.0, 270.0), 25.0, rect()));
    }

    #[test]
    fn test_player_hits_axe() {
        let mut player = Player::new(Ruleset::Ramped);
        let mut axe = Axe::new(Ruleset::Ramped);
        axe.x = 300;
        axe.y = 200;
        assert!(!player_hits_axe(&player, &axe));

        player.x = 370;
        assert!(player_hits_axe(&player, &axe));
    }

    #[test]
    fn test_edges_overlap_uses_bounding_box() {
        let mut player = Player::new(Ruleset::Classic);
        let mut axe = Axe::new(Ruleset::Classic);
        // Corner case the circle test rejects but the box test accepts
        player.x = 370;
        player.y = 270;
        axe.x = 300;
        axe.y = 200;
        assert!(edges_overlap(&player, &axe));
        assert!(!player_hits_axe(&player, &axe));

        axe.y = 0;
        assert!(!edges_overlap(&player, &axe));
    }
}
