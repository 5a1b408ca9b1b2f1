use glam::IVec2;

use crate::{Config, Side};

/// Integer axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn center_x(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    /// Move the rectangle so its center lands on `center`
    pub fn set_center(&mut self, center: IVec2) {
        self.pos = center - self.size / 2;
    }

    /// Strict overlap: touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The play field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMap {
    pub width: i32,
    pub height: i32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
        }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    /// Starting rectangle for a side's paddle, vertically centered
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Rect {
        Rect::new(
            config.paddle_x(side),
            self.height / 2 - config.paddle_height / 2,
            config.paddle_width,
            config.paddle_height,
        )
    }

    /// Starting rectangle for the ball, centered on the field
    pub fn ball_spawn(&self, config: &Config) -> Rect {
        let mut rect = Rect::new(0, 0, config.ball_size, config.ball_size);
        rect.set_center(self.center());
        rect
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
