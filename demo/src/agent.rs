use robot::{Navigator, Point, RobotError};
use tracing::warn;

/// A named robot plus the route it's meant to follow.
pub struct Agent {
    pub name: String,
    pub(crate) navigator: Box<dyn Navigator>,
    pub(crate) route: Vec<String>,
}

impl Agent {
    pub fn new(name: impl Into<String>, navigator: Box<dyn Navigator>, route: Vec<String>) -> Self {
        Self {
            name: name.into(),
            navigator,
            route,
        }
    }

    /// Walk the whole route. A bad entry is logged and skipped rather than
    /// ending the walk; the rejected entries come back to the caller.
    pub fn drive(&mut self) -> Vec<RobotError> {
        let mut rejected = Vec::new();
        for direction in &self.route {
            if let Err(err) = self.navigator.go(direction) {
                warn!(agent = %self.name, %err, "skipping move");
                rejected.push(err);
            }
        }
        rejected
    }

    pub fn path(&self) -> &[Point] {
        self.navigator.path()
    }
}
