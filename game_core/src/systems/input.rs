use hecs::World;

use crate::{Config, GameMap, HeldKeys, Paddle, PlayMode, Side};

/// Move paddles from held keys: W/S for the left side, arrows for the right in two-player mode
pub fn apply_held_keys(
    world: &mut World,
    keys: &HeldKeys,
    mode: PlayMode,
    map: &GameMap,
    config: &Config,
) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        let (up, down) = match (paddle.side, mode) {
            (Side::Left, _) => (keys.w, keys.s),
            (Side::Right, PlayMode::Double) => (keys.up, keys.down),
            (Side::Right, PlayMode::Single) => continue,
        };

        // Each guard sees the edge left by the previous move
        if up {
            paddle.nudge_up(config.paddle_speed);
        }
        if down {
            paddle.nudge_down(config.paddle_speed, map.height);
        }
    }
}
