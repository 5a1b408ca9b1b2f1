use crate::Ball;
use hecs::World;

/// Move ball by its velocity, one tick's worth
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rect.pos += ball.vel;
    }
}
