use crate::{Direction, Gait, Navigator, Point, Position, RobotError};

use tracing::debug;

/// A robot on the 0..=100 grid that remembers every point it has stood on.
///
/// The gait decides how far each move goes. `Robot::fast` gives the two-cell
/// variant; everything else about the two is shared.
#[derive(Debug, Clone)]
pub struct Robot {
    position: Position,
    gait: Gait,
    // append only, seeded with the start so it's never empty
    path: Vec<Point>,
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Robot {
    pub fn new(x: i32, y: i32) -> Self {
        Self::with_gait(x, y, Gait::Standard)
    }

    pub fn fast(x: i32, y: i32) -> Self {
        Self::with_gait(x, y, Gait::Fast)
    }

    pub fn with_gait(x: i32, y: i32, gait: Gait) -> Self {
        let position = Position::new(x, y);
        let path = vec![position.point()];
        Self {
            position,
            gait,
            path,
        }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn gait(&self) -> Gait {
        self.gait
    }

    /// Move once in an already validated direction and record where we ended up.
    pub fn step(&mut self, direction: Direction) {
        let (dx, dy) = self.gait.delta(direction);
        self.position.update(dx, dy);
        let point = self.position.point();
        self.path.push(point);
        debug!(%direction, gait = ?self.gait, x = point.x, y = point.y, "robot moved");
    }

    /// Move by compass letter. An unknown letter leaves the robot untouched.
    pub fn go(&mut self, direction: &str) -> Result<(), RobotError> {
        let direction = direction.parse::<Direction>().inspect_err(|err| {
            debug!(%err, "rejected move");
        })?;
        self.step(direction);
        Ok(())
    }

    /// Apply `route` in order, stopping at the first bad direction.
    ///
    /// Moves made before the bad entry stay on the path.
    pub fn drive<I, S>(&mut self, route: I) -> Result<(), RobotError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for direction in route {
            self.go(direction.as_ref())?;
        }
        Ok(())
    }

    pub fn path(&self) -> &[Point] {
        &self.path
    }
}

impl Navigator for Robot {
    fn go(&mut self, direction: &str) -> Result<(), RobotError> {
        Robot::go(self, direction)
    }

    fn path(&self) -> &[Point] {
        Robot::path(self)
    }
}
