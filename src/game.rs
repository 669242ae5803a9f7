use tracing::{debug, info};

use crate::Cell;
use crate::food::Spawner;
use crate::grid::Grid;
use crate::snake::{Snake, Direction::{*, self}, MoveResult::*};

pub const TICK_INTERVAL_SECS: f64 = 0.1;
const INITIAL_HEADING: Direction = Right;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    Restart,
    Close,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct SnakeGame<S> {
    grid: Grid,
    snake: Snake,
    // Heading used by the last tick, and the one the next tick will use
    heading: Direction,
    next_heading: Direction,
    food: Cell,
    score: u32,
    phase: Phase,
    spawner: S,
}

/// Lets the simulation step at most once per interval, however fast frames come.
pub struct Ticker {
    interval: f64,
    last: f64,
}

impl<S: Spawner> SnakeGame<S> {
    pub fn new(grid: Grid, mut spawner: S) -> Self {
        let food = spawner.spawn(&grid);
        SnakeGame {
            grid,
            snake: Snake::new(grid.center()),
            heading: INITIAL_HEADING,
            next_heading: INITIAL_HEADING,
            food,
            score: 0,
            phase: Phase::Playing,
            spawner,
        }
    }

    pub fn reset(&mut self) {
        self.snake = Snake::new(self.grid.center());
        self.heading = INITIAL_HEADING;
        self.next_heading = INITIAL_HEADING;
        self.food = self.spawner.spawn(&self.grid);
        self.score = 0;
        self.phase = Phase::Playing;
    }

    pub fn handle_input(&mut self, input: Input) -> Flow {
        match (self.phase, input) {
            (_, Input::Close) => return Flow::Exit,
            (Phase::Playing, Input::Turn(dir)) => self.turn(dir),
            (Phase::GameOver, Input::Restart) => {
                info!(score = self.score, "restarting");
                self.reset();
            }
            _ => {}
        }

        Flow::Continue
    }

    pub fn tick(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }

        self.heading = self.next_heading;

        match self.snake.advance(self.heading, self.food, &self.grid) {
            Crashed => {
                info!(score = self.score, length = self.snake.len(), "game over");
                self.phase = Phase::GameOver;
            }
            Moved(snake) => self.snake = snake,
            Ate(snake) => {
                self.snake = snake;
                self.score += 1;
                self.food = self.spawner.spawn(&self.grid);
            }
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    ///////////////////////////////////////////////////////////////////////////

    fn turn(&mut self, dir: Direction) {
        // Checked against the heading actually travelled, so two quick presses
        // can't fold the snake back onto its neck within one tick
        if dir.is_reverse_of(self.heading) {
            debug!(?dir, heading = ?self.heading, "ignored reversing turn");
        } else {
            debug!(?dir, "turn");
            self.next_heading = dir;
        }
    }
}

impl Ticker {
    pub fn new(interval: f64, now: f64) -> Self {
        Ticker { interval, last: now }
    }

    pub fn ready(&mut self, now: f64) -> bool {
        if now - self.last > self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }
}
