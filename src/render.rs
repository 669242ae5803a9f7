use macroquad::prelude::{Color, BLACK, GREEN, RED, WHITE};
use macroquad::math::{vec2, Rect};
use macroquad::text::{draw_text_ex, TextParams};
use macroquad::texture::{draw_texture_ex, DrawTextureParams};
use macroquad::window::clear_background;
use macroquad::shapes::draw_rectangle;

use crate::Cell;
use crate::assets::Assets;
use crate::food::Spawner;
use crate::game::SnakeGame;
use crate::grid::{CELL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

const SNAKE_COLOR: Color = GREEN;
const SCORE_COLOR: Color = WHITE;
const SCORE_SIZE: u16 = 20;
const SCORE_POS: (f32, f32) = (10.0, 10.0);
const BANNER_TEXT: &str = "Game Over! Press R to Restart";
const BANNER_COLOR: Color = RED;
const BANNER_SIZE: u16 = 30;

/// One entry of a frame. Text positions are the top-left of the label.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Background { width: f32, height: f32 },
    Square { rect: Rect, color: Color },
    Food { rect: Rect },
    Label { text: String, x: f32, y: f32, size: u16, color: Color },
}

pub struct Renderer {
    assets: Assets,
    frame: Vec<DrawCmd>,
}

impl Renderer {
    pub fn new(assets: Assets) -> Self {
        Renderer { assets, frame: Vec::new() }
    }

    pub fn draw<S: Spawner>(&mut self, game: &SnakeGame<S>) {
        build_frame(&mut self.frame, game);

        clear_background(BLACK);
        for cmd in self.frame.iter() {
            self.paint(cmd);
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn paint(&self, cmd: &DrawCmd) {
        match cmd {
            DrawCmd::Background { width, height } => {
                draw_texture_ex(self.assets.background, 0.0, 0.0, WHITE, DrawTextureParams {
                    dest_size: Some(vec2(*width, *height)),
                    ..Default::default()
                });
            }
            DrawCmd::Square { rect, color } => {
                draw_rectangle(rect.x, rect.y, rect.w, rect.h, *color);
            }
            DrawCmd::Food { rect } => {
                draw_texture_ex(self.assets.food, rect.x, rect.y, WHITE, DrawTextureParams {
                    dest_size: Some(vec2(rect.w, rect.h)),
                    ..Default::default()
                });
            }
            DrawCmd::Label { text, x, y, size, color } => {
                // macroquad places text by its baseline
                draw_text_ex(text, *x, *y + *size as f32, TextParams {
                    font: self.assets.font,
                    font_size: *size,
                    color: *color,
                    ..Default::default()
                });
            }
        }
    }
}

/// Rebuilds `frame` from the current state, reusing its allocation.
pub fn build_frame<S: Spawner>(frame: &mut Vec<DrawCmd>, game: &SnakeGame<S>) {
    frame.clear();

    frame.push(DrawCmd::Background { width: WINDOW_WIDTH as f32, height: WINDOW_HEIGHT as f32 });

    for segment in game.snake().body() {
        frame.push(DrawCmd::Square { rect: cell_rect(*segment), color: SNAKE_COLOR });
    }

    frame.push(DrawCmd::Food { rect: cell_rect(game.food()) });

    frame.push(DrawCmd::Label {
        text: format!("Score: {}", game.score()),
        x: SCORE_POS.0,
        y: SCORE_POS.1,
        size: SCORE_SIZE,
        color: SCORE_COLOR,
    });

    if game.is_game_over() {
        frame.push(DrawCmd::Label {
            text: BANNER_TEXT.to_owned(),
            x: (WINDOW_WIDTH / 4) as f32,
            y: (WINDOW_HEIGHT / 2) as f32,
            size: BANNER_SIZE,
            color: BANNER_COLOR,
        });
    }
}

// Squares are one pixel short of a cell
fn cell_rect((x, y): Cell) -> Rect {
    let side = (CELL_SIZE - 1) as f32;
    Rect::new((x * CELL_SIZE) as f32, (y * CELL_SIZE) as f32, side, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::scripted::ScriptedSpawner;
    use crate::game::Input;
    use crate::grid::Grid;
    use crate::snake::Direction::*;

    fn labels(frame: &[DrawCmd]) -> Vec<&str> {
        frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn frame_order_while_playing() {
        let mut game = SnakeGame::new(Grid::new(40, 30), ScriptedSpawner::new(&[(21, 15), (2, 3)]));
        game.tick();

        let mut frame = Vec::new();
        build_frame(&mut frame, &game);

        assert_eq!(frame.len(), 5);
        assert_eq!(frame[0], DrawCmd::Background { width: 800.0, height: 600.0 });
        assert_eq!(frame[1], DrawCmd::Square { rect: Rect::new(420.0, 300.0, 19.0, 19.0), color: GREEN });
        assert_eq!(frame[2], DrawCmd::Square { rect: Rect::new(400.0, 300.0, 19.0, 19.0), color: GREEN });
        assert_eq!(frame[3], DrawCmd::Food { rect: Rect::new(40.0, 60.0, 19.0, 19.0) });
        assert_eq!(labels(&frame), vec!["Score: 1"]);
    }

    #[test]
    fn banner_only_after_game_over() {
        let mut game = SnakeGame::new(Grid::new(40, 30), ScriptedSpawner::new(&[(0, 0), (1, 1)]));
        game.handle_input(Input::Turn(Up));
        for _ in 0..16 {
            game.tick();
        }
        assert!(game.is_game_over());

        let mut frame = Vec::new();
        build_frame(&mut frame, &game);

        match frame.last() {
            Some(DrawCmd::Label { text, x, y, size, color }) => {
                assert_eq!(text, BANNER_TEXT);
                assert_eq!((*x, *y), (200.0, 300.0));
                assert_eq!(*size, 30);
                assert_eq!(*color, RED);
            }
            other => panic!("unexpected {:?}", other),
        }

        game.handle_input(Input::Restart);
        build_frame(&mut frame, &game);
        assert_eq!(labels(&frame), vec!["Score: 0"]);
    }

    #[test]
    fn frame_buffer_is_reused() {
        let game = SnakeGame::new(Grid::new(40, 30), ScriptedSpawner::new(&[(0, 0)]));
        let mut frame = Vec::new();

        build_frame(&mut frame, &game);
        let (len, capacity) = (frame.len(), frame.capacity());
        build_frame(&mut frame, &game);

        assert_eq!(frame.len(), len);
        assert_eq!(frame.capacity(), capacity);
    }
}
