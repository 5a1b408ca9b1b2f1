/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field (pixels)
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 15;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_SPEED: i32 = 7; // pixels per tick
    pub const PADDLE_MARGIN: i32 = 50; // gap between paddle and side wall

    // Ball
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED_X: i32 = 7;
    pub const BALL_SPEED_Y: i32 = 7;

    // Score
    pub const WIN_SCORE: u8 = 10; // First to 10 wins

    // Loop
    pub const TICK_HZ: u32 = 60;
}
