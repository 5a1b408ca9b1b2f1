//! Desktop client: menu, match loop, and ggez rendering on top of `game_core`

pub mod app;
pub mod fsm;
pub mod input;
pub mod menu;
pub mod renderer;
pub mod simulation;

pub use app::PongApp;
