use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod robot;

pub use crate::robot::Robot;

/// Lowest value either coordinate can take.
pub const MIN_COORD: i32 = 0;
/// Highest value either coordinate can take.
pub const MAX_COORD: i32 = 100;

/// The directions a robot accepts, in the order they're reported back to callers.
pub const DIRECTIONS: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RobotError {
    #[error("invalid direction: {value:?}. allowed directions: N, S, E, W")]
    InvalidDirection { value: String },
}

// This is the capability callers program against. Anything that can be moved
// by compass letter and report where it's been is a navigator, so a standard
// and a fast robot can sit behind the same reference.
pub trait Navigator {
    fn go(&mut self, direction: &str) -> Result<(), RobotError>;
    fn path(&self) -> &[Point];
}

/// A single snapshot of where a robot stood.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Grid coordinates held inside `[MIN_COORD, MAX_COORD]` on both axes.
///
/// Every write saturates at the grid edge instead of failing, so a position
/// can never be observed outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x: clamp_coord(x),
            y: clamp_coord(y),
        }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Shift by `(dx, dy)`, stopping at the grid edge on each axis.
    pub fn update(&mut self, dx: i32, dy: i32) {
        let x = clamp_coord(self.x.saturating_add(dx));
        let y = clamp_coord(self.y.saturating_add(dy));
        self.x = x;
        self.y = y;
    }
}

fn clamp_coord(value: i32) -> i32 {
    value.clamp(MIN_COORD, MAX_COORD)
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::S => "S",
            Direction::E => "E",
            Direction::W => "W",
        }
    }

    /// Unit vector for this direction, north pointing up the y axis.
    pub fn unit(&self) -> (i32, i32) {
        match self {
            Direction::N => (0, 1),
            Direction::S => (0, -1),
            Direction::E => (1, 0),
            Direction::W => (-1, 0),
        }
    }
}

impl FromStr for Direction {
    type Err = RobotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "N" => Ok(Direction::N),
            "S" => Ok(Direction::S),
            "E" => Ok(Direction::E),
            "W" => Ok(Direction::W),
            _ => Err(RobotError::InvalidDirection {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far a robot travels per move.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Gait {
    #[default]
    Standard,
    Fast,
}

impl Gait {
    pub fn magnitude(&self) -> i32 {
        match self {
            Gait::Standard => 1,
            Gait::Fast => 2,
        }
    }

    /// Displacement for one move in `direction` at this gait.
    pub fn delta(&self, direction: Direction) -> (i32, i32) {
        let (dx, dy) = direction.unit();
        (dx * self.magnitude(), dy * self.magnitude())
    }
}
