pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod settings;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use settings::*;

use hecs::World;
use systems::*;

/// Advance the match by one fixed tick
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    keys: &HeldKeys,
    mode: PlayMode,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    signs: &mut impl SignSource,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Player paddles from held keys
    apply_held_keys(world, keys, mode, map, config);

    // 2. AI paddle
    if mode == PlayMode::Single {
        track_ball(world, map, config);
    }

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, map, events);

    // 5. Check scoring (ball reached a side edge)
    check_scoring(world, map, score, events, signs, config);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, rect: Rect) -> hecs::Entity {
    world.spawn((Paddle::new(side, rect),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, vel: glam::IVec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, vel),))
}

/// Clear the world and lay out both paddles and a freshly served ball
pub fn spawn_match(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    signs: &mut impl SignSource,
) {
    world.clear();
    create_paddle(world, Side::Left, map.paddle_spawn(Side::Left, config));
    create_paddle(world, Side::Right, map.paddle_spawn(Side::Right, config));
    let vel = Ball::serve_velocity(config, signs);
    create_ball(world, map.ball_spawn(config), vel);
}
