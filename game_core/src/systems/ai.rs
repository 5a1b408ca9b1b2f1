use hecs::World;

use crate::{Ball, Config, GameMap, Paddle, Side};

/// Drive the right paddle toward the ball's vertical center
///
/// Pure tracking: no prediction of the ball's path and no dead zone,
/// so the paddle only rests when both centers line up exactly.
pub fn track_ball(world: &mut World, map: &GameMap, config: &Config) {
    let ball_center_y = {
        let mut ball_query = world.query::<&Ball>();
        ball_query.iter().next().map(|(_e, ball)| ball.rect.center_y())
    };

    let Some(ball_center_y) = ball_center_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }
        let paddle_center_y = paddle.rect.center_y();
        if ball_center_y > paddle_center_y {
            paddle.nudge_down(config.paddle_speed, map.height);
        } else if ball_center_y < paddle_center_y {
            paddle.nudge_up(config.paddle_speed);
        }
    }
}
