use crate::{Ball, Config, Events, GameMap, Score, SignSource};
use hecs::World;
use tracing::debug;

/// Check if ball reached the left or right edge (scoring)
///
/// Both edges are tested every tick and each may fire on its own: a ball
/// spanning the whole field would score for both sides in the same tick.
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    signs: &mut impl SignSource,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.rect.left() <= 0 {
            // Right player scores
            score.increment_right();
            events.right_scored = true;
            debug!(left = score.left, right = score.right, "right side scored");

            ball.reset(map, config, signs);
        }
        if ball.rect.right() >= map.width {
            // Left player scores
            score.increment_left();
            events.left_scored = true;
            debug!(left = score.left, right = score.right, "left side scored");

            ball.reset(map, config, signs);
        }
    }
}
