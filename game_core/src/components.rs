use glam::IVec2;

use crate::{Config, GameMap, Rect, SignSource};

/// Which end of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }

    /// Step up by `speed` unless the top edge is already at or past the field top
    pub fn nudge_up(&mut self, speed: i32) {
        if self.rect.top() > 0 {
            self.rect.pos.y -= speed;
        }
    }

    /// Step down by `speed` unless the bottom edge is already at or past `field_height`
    pub fn nudge_down(&mut self, speed: i32, field_height: i32) {
        if self.rect.bottom() < field_height {
            self.rect.pos.y += speed;
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: IVec2,
}

impl Ball {
    pub fn new(rect: Rect, vel: IVec2) -> Self {
        Self { rect, vel }
    }

    /// Velocity with fixed per-axis speed and a random sign on each axis
    pub fn serve_velocity(config: &Config, signs: &mut impl SignSource) -> IVec2 {
        IVec2::new(
            config.ball_speed_x * signs.next_sign(),
            config.ball_speed_y * signs.next_sign(),
        )
    }

    /// Reset ball to the field center with a fresh random direction
    pub fn reset(&mut self, map: &GameMap, config: &Config, signs: &mut impl SignSource) {
        self.rect.set_center(map.center());
        self.vel = Self::serve_velocity(config, signs);
    }
}
