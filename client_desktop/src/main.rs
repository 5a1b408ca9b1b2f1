use client_desktop::PongApp;
use game_core::Config;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder, GameError, GameResult};

fn main() -> GameResult {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Config::default();
    config
        .validate()
        .map_err(|err| GameError::ConfigError(err.to_string()))?;

    let (ctx, event_loop) = ContextBuilder::new("pong", "rgilks")
        .window_setup(WindowSetup::default().title("Enhanced Pong"))
        .window_mode(
            WindowMode::default()
                .dimensions(config.field_width as f32, config.field_height as f32)
                .resizable(false),
        )
        .build()?;

    tracing::info!(
        width = config.field_width,
        height = config.field_height,
        tick_hz = config.tick_hz,
        "starting pong"
    );

    let app = PongApp::new(config);
    event::run(ctx, event_loop, app)
}
