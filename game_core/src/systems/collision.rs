use crate::{Ball, Events, GameMap, Paddle, Rect, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls: flip only, the ball may sit past the edge for a tick
        if ball.rect.top() <= 0 || ball.rect.bottom() >= map.height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Left paddle is resolved before right; the direction guard keeps an
        // overlapping ball from flipping back on the next tick
        for side in [Side::Left, Side::Right] {
            let moving_toward = match side {
                Side::Left => ball.vel.x < 0,
                Side::Right => ball.vel.x > 0,
            };
            let hit = paddles
                .iter()
                .any(|(s, rect)| *s == side && rect.intersects(&ball.rect));
            if hit && moving_toward {
                ball.vel.x = -ball.vel.x;
                events.ball_hit_paddle = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config};
    use glam::IVec2;

    fn setup_world() -> (World, Config, GameMap, Events) {
        let world = World::new();
        let config = Config::new();
        let map = GameMap::new(&config);
        let events = Events::new();
        (world, config, map, events)
    }

    fn only_ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball exists");
        *ball
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, _config, map, mut events) = setup_world();
        create_ball(&mut world, Rect::new(400, -3, 20, 20), IVec2::new(7, -7));

        check_collisions(&mut world, &map, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel, IVec2::new(7, 7), "Only Y velocity flips");
        assert_eq!(ball.rect.top(), -3, "No positional correction");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, _config, map, mut events) = setup_world();
        create_ball(&mut world, Rect::new(400, 580, 20, 20), IVec2::new(-7, 7));

        check_collisions(&mut world, &map, &mut events);

        assert_eq!(only_ball(&world).vel, IVec2::new(-7, -7));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_wall_flip_is_unconditional() {
        // Already heading away from the wall, still flips while touching it
        let (mut world, _config, map, mut events) = setup_world();
        create_ball(&mut world, Rect::new(400, 0, 20, 20), IVec2::new(7, 7));

        check_collisions(&mut world, &map, &mut events);

        assert_eq!(only_ball(&world).vel.y, -7);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, map.paddle_spawn(Side::Left, &config));
        create_ball(&mut world, Rect::new(60, 290, 20, 20), IVec2::new(-7, 7));

        check_collisions(&mut world, &map, &mut events);

        let ball = only_ball(&world);
        assert_eq!(ball.vel, IVec2::new(7, 7), "Ball should bounce right");
        assert_eq!(ball.rect.pos, IVec2::new(60, 290), "No push-out");
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, map.paddle_spawn(Side::Right, &config));
        create_ball(&mut world, Rect::new(720, 290, 20, 20), IVec2::new(7, -7));

        check_collisions(&mut world, &map, &mut events);

        assert_eq!(only_ball(&world).vel, IVec2::new(-7, -7), "Ball should bounce left");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_corner_clip_still_bounces() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, map.paddle_spawn(Side::Left, &config));
        // One pixel of overlap with the paddle's bottom-right corner
        create_ball(&mut world, Rect::new(64, 349, 20, 20), IVec2::new(-7, 7));

        check_collisions(&mut world, &map, &mut events);

        assert_eq!(only_ball(&world).vel.x, 7);
    }

    #[test]
    fn test_ball_does_not_bounce_when_moving_away_from_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, map.paddle_spawn(Side::Left, &config));
        create_ball(&mut world, Rect::new(60, 290, 20, 20), IVec2::new(7, 7));

        check_collisions(&mut world, &map, &mut events);

        assert_eq!(only_ball(&world).vel.x, 7, "Ball should not bounce when moving away");
        assert!(!events.ball_hit_paddle, "Should not trigger collision when moving away");
    }

    #[test]
    fn test_overlapping_ball_bounces_once() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, map.paddle_spawn(Side::Left, &config));
        create_ball(&mut world, Rect::new(60, 290, 20, 20), IVec2::new(-7, 7));

        check_collisions(&mut world, &map, &mut events);
        events.clear();
        check_collisions(&mut world, &map, &mut events);

        assert_eq!(only_ball(&world).vel.x, 7, "Direction guard prevents a second flip");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_beside_paddle_but_vertically_clear_passes() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, map.paddle_spawn(Side::Left, &config));
        create_ball(&mut world, Rect::new(60, 100, 20, 20), IVec2::new(-7, 7));

        check_collisions(&mut world, &map, &mut events);

        assert_eq!(only_ball(&world).vel.x, -7);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, map.paddle_spawn(Side::Left, &config));

        check_collisions(&mut world, &map, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
