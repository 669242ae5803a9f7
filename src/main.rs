mod assets;
mod food;
mod game;
mod grid;
mod input;
mod render;
mod snake;

use std::path::Path;
use std::process::exit;

use macroquad::input::prevent_quit;
use macroquad::time::get_time;
use macroquad::window::{next_frame, Conf};
use tracing::{error, info};

use crate::assets::Assets;
use crate::food::RandomSpawner;
use crate::game::{Flow, SnakeGame, Ticker, TICK_INTERVAL_SECS};
use crate::grid::{Grid, CELL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::render::Renderer;

pub type Cell = (i32, i32);

fn window_conf() -> Conf {
    Conf {
        window_title: "Enhanced Snake Game".to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let seed = food::clock_seed();
    info!(seed, "starting snake");

    let grid = Grid::from_window(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE);
    let mut game = SnakeGame::new(grid, RandomSpawner::seeded(seed));

    let assets = match Assets::load(Path::new(".")).await {
        Ok(assets) => assets,
        Err(err) => {
            error!(%err, "startup failed");
            eprintln!("Error: {}", err);
            exit(1);
        }
    };
    info!("assets loaded");

    let mut renderer = Renderer::new(assets);
    let mut ticker = Ticker::new(TICK_INTERVAL_SECS, get_time());
    let mut inputs = Vec::new();

    // Window close arrives as an input like any other
    prevent_quit();

    loop {
        input::poll(&mut inputs);

        for event in inputs.drain(..) {
            if game.handle_input(event) == Flow::Exit {
                info!(score = game.score(), "window closed");
                return;
            }
        }

        if ticker.ready(get_time()) {
            game.tick();
        }

        renderer.draw(&game);
        next_frame().await;
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
