use thiserror::Error;

use crate::{Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub paddle_margin: i32,
    pub ball_size: i32,
    pub ball_speed_x: i32,
    pub ball_speed_y: i32,
    pub win_score: u8,
    pub tick_hz: u32,
}

/// Reasons a [`Config`] cannot drive a match
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: i64 },
    #[error("paddle height {paddle} does not fit in field height {field}")]
    PaddleTooTall { paddle: i32, field: i32 },
    #[error("ball size {ball} does not fit in a {width}x{height} field")]
    BallTooLarge { ball: i32, width: i32, height: i32 },
    #[error("paddles overlap: margin {margin} and width {paddle} leave no room in field width {field}")]
    PaddlesOverlap { margin: i32, paddle: i32, field: i32 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            win_score: Params::WIN_SCORE,
            tick_hz: Params::TICK_HZ,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a side's paddle
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives: [(&'static str, i64); 10] = [
            ("field_width", self.field_width.into()),
            ("field_height", self.field_height.into()),
            ("paddle_width", self.paddle_width.into()),
            ("paddle_height", self.paddle_height.into()),
            ("paddle_speed", self.paddle_speed.into()),
            ("ball_size", self.ball_size.into()),
            ("ball_speed_x", self.ball_speed_x.into()),
            ("ball_speed_y", self.ball_speed_y.into()),
            ("win_score", self.win_score.into()),
            ("tick_hz", self.tick_hz.into()),
        ];
        for (field, value) in positives {
            if value <= 0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.paddle_margin < 0 {
            return Err(ConfigError::NotPositive {
                field: "paddle_margin",
                value: self.paddle_margin.into(),
            });
        }

        if self.paddle_height > self.field_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                field: self.field_height,
            });
        }
        if self.ball_size > self.field_width || self.ball_size > self.field_height {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.paddle_x(Side::Left) + self.paddle_width > self.paddle_x(Side::Right) {
            return Err(ConfigError::PaddlesOverlap {
                margin: self.paddle_margin,
                paddle: self.paddle_width,
                field: self.field_width,
            });
        }
        Ok(())
    }
}
