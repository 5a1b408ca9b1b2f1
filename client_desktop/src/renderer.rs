//! ggez drawing for the menu, the match, and the game over banner

use game_core::{GameMap, GameRng, PaletteColor, Rect, Side};
use ggez::graphics::{
    self, Canvas, Color, DrawMode, DrawParam, Mesh, MeshBuilder, Text, TextAlign, TextLayout,
};
use ggez::{Context, GameResult};
use rand::Rng;

use crate::menu::Menu;
use crate::simulation::LocalGame;

const BACKDROP_DOTS: usize = 15;
const TEXT_SIZE: f32 = 36.0;
const TITLE_SIZE: f32 = 48.0;
const SCORE_SIZE: f32 = 72.0;

pub fn background() -> Color {
    Color::from_rgb(30, 30, 30)
}

fn dot() -> Color {
    Color::from_rgb(50, 50, 50)
}

fn dimmed() -> Color {
    Color::from_rgb(150, 150, 150)
}

pub fn palette_color(color: PaletteColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::from_rgb(r, g, b)
}

pub fn to_gfx_rect(rect: Rect) -> graphics::Rect {
    graphics::Rect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.size.x as f32,
        rect.size.y as f32,
    )
}

/// Dashed center line segments: 4x10 every 20 px
pub fn center_line(map: &GameMap) -> Vec<Rect> {
    (0..map.height)
        .step_by(20)
        .map(|y| Rect::new(map.width / 2 - 2, y, 4, 10))
        .collect()
}

fn text(content: impl Into<String>, size: f32, h_align: TextAlign, v_align: TextAlign) -> Text {
    let mut text = Text::new(content.into());
    text.set_scale(size);
    text.set_layout(TextLayout { h_align, v_align });
    text
}

fn draw_centered(canvas: &mut Canvas, content: &str, size: f32, color: Color, x: f32, y: f32) {
    let text = text(content, size, TextAlign::Middle, TextAlign::Middle);
    canvas.draw(&text, DrawParam::default().dest([x, y]).color(color));
}

pub fn draw_menu(
    ctx: &mut Context,
    canvas: &mut Canvas,
    map: &GameMap,
    menu: &Menu,
    backdrop: &mut GameRng,
) -> GameResult {
    let mut dots = MeshBuilder::new();
    for _ in 0..BACKDROP_DOTS {
        let x = backdrop.0.gen_range(0..=map.width);
        let y = backdrop.0.gen_range(0..=map.height);
        dots.rectangle(DrawMode::fill(), to_gfx_rect(Rect::new(x, y, 2, 2)), dot())?;
    }
    let dots = Mesh::from_data(ctx, dots.build());
    canvas.draw(&dots, DrawParam::default());

    let cx = map.width as f32 / 2.0;
    draw_centered(canvas, "PONG", TITLE_SIZE, Color::WHITE, cx, 100.0);
    for (i, (label, focused)) in menu.rows().iter().enumerate() {
        let color = if *focused { Color::WHITE } else { dimmed() };
        draw_centered(canvas, label, TEXT_SIZE, color, cx, 200.0 + i as f32 * 60.0);
    }
    Ok(())
}

pub fn draw_match(ctx: &mut Context, canvas: &mut Canvas, game: &LocalGame) -> GameResult {
    let settings = game.settings;
    let mut shapes = MeshBuilder::new();

    for segment in center_line(&game.map) {
        shapes.rectangle(DrawMode::fill(), to_gfx_rect(segment), Color::WHITE)?;
    }

    for (side, color) in [
        (Side::Left, settings.left_color),
        (Side::Right, settings.right_color),
    ] {
        if let Some(rect) = game.paddle(side) {
            shapes.rectangle(DrawMode::fill(), to_gfx_rect(rect), palette_color(color))?;
        }
    }

    if let Some(ball) = game.ball() {
        let rect = ball.rect;
        let half = rect.size.as_vec2() / 2.0;
        shapes.ellipse(
            DrawMode::fill(),
            [rect.left() as f32 + half.x, rect.top() as f32 + half.y],
            half.x,
            half.y,
            0.1,
            palette_color(settings.ball_color),
        )?;
    }

    let shapes = Mesh::from_data(ctx, shapes.build());
    canvas.draw(&shapes, DrawParam::default());

    let width = game.map.width as f32;
    for (value, x) in [(game.score.left, width / 4.0), (game.score.right, width * 3.0 / 4.0)] {
        let score = text(value.to_string(), SCORE_SIZE, TextAlign::Middle, TextAlign::Begin);
        canvas.draw(&score, DrawParam::default().dest([x, 20.0]).color(Color::WHITE));
    }
    Ok(())
}

pub fn draw_game_over(canvas: &mut Canvas, map: &GameMap, winner_label: &str) {
    let cx = map.width as f32 / 2.0;
    let cy = map.height as f32 / 2.0;
    draw_centered(
        canvas,
        &format!("{winner_label} Wins!"),
        TITLE_SIZE,
        Color::WHITE,
        cx,
        cy,
    );
    draw_centered(
        canvas,
        "Press Enter to return to menu",
        TEXT_SIZE,
        Color::WHITE,
        cx,
        cy + 80.0,
    );
}
