use anyhow::{anyhow, Context, Result};
use robot::{Point, Robot};
use serde::Serialize;
use std::str::FromStr;

mod agent;
pub mod logging;

pub use crate::agent::Agent;

pub struct DemoBuilder {}

impl DemoBuilder {
    pub fn from_env() -> Result<Demo> {
        let start = std::env::var("ROBOT_START").unwrap_or_else(|_| "50,50".to_string());
        let start = parse_point(&start).context("ROBOT_START")?;

        let route = std::env::var("ROBOT_ROUTE").unwrap_or_else(|_| "N,E,S".to_string());
        let fast_route =
            std::env::var("FAST_ROBOT_ROUTE").unwrap_or_else(|_| "N,W".to_string());

        let output = std::env::var("ROBOT_OUTPUT").unwrap_or_else(|_| "text".to_string());
        let output = output.parse::<OutputFormat>().context("ROBOT_OUTPUT")?;

        Ok(Demo::new(start, parse_route(&route), parse_route(&fast_route), output))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow!("unknown output format {other:?}, expected text or json")),
        }
    }
}

/// Parse an `x,y` pair. Values outside the grid are fine here; the robot clamps them.
pub fn parse_point(value: &str) -> Result<Point> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("expected x,y but got {value:?}"))?;
    let x = x.trim().parse::<i32>().context("bad x coordinate")?;
    let y = y.trim().parse::<i32>().context("bad y coordinate")?;
    Ok(Point::new(x, y))
}

/// Split a comma separated route. Entries aren't validated here, the robot does that.
pub fn parse_route(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Serialize)]
struct Report<'a> {
    name: &'a str,
    path: &'a [Point],
}

pub struct Demo {
    pub agents: Vec<Agent>,
    pub output: OutputFormat,
}

impl Demo {
    /// One standard and one fast robot, both starting at `start`.
    pub fn new(start: Point, route: Vec<String>, fast_route: Vec<String>, output: OutputFormat) -> Self {
        let agents = vec![
            Agent::new("robot", Box::new(Robot::new(start.x, start.y)), route),
            Agent::new("fast robot", Box::new(Robot::fast(start.x, start.y)), fast_route),
        ];
        Self { agents, output }
    }

    /// Drive every agent along its route. Returns how many moves were rejected.
    pub fn drive(&mut self) -> usize {
        self.agents
            .iter_mut()
            .map(|agent| agent.drive().len())
            .sum()
    }

    pub fn render(&self) -> Result<String> {
        match self.output {
            OutputFormat::Text => {
                let lines: Vec<String> = self
                    .agents
                    .iter()
                    .map(|agent| {
                        let path: Vec<String> =
                            agent.path().iter().map(ToString::to_string).collect();
                        format!("{} path: {}", agent.name, path.join(" -> "))
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Json => {
                let reports: Vec<Report> = self
                    .agents
                    .iter()
                    .map(|agent| Report {
                        name: &agent.name,
                        path: agent.path(),
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&reports)?)
            }
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let rejected = self.drive();
        if rejected > 0 {
            tracing::info!(rejected, "some moves were skipped");
        }
        println!("{}", self.render()?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(raw: &str) -> Vec<String> {
        parse_route(raw)
    }

    #[test]
    fn parse_point_accepts_spaces_and_out_of_grid_values() {
        assert_eq!(parse_point("50,50").unwrap(), Point::new(50, 50));
        assert_eq!(parse_point(" -3 , 400 ").unwrap(), Point::new(-3, 400));
    }

    #[test]
    fn parse_point_rejects_malformed_input() {
        assert!(parse_point("50").is_err());
        assert!(parse_point("a,1").is_err());
        assert!(parse_point("1,").is_err());
    }

    #[test]
    fn parse_route_drops_empty_entries() {
        assert_eq!(parse_route("N, E,,S "), vec!["N", "E", "S"]);
        assert!(parse_route("").is_empty());
    }

    #[test]
    fn output_format_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn default_routes_render_as_text() {
        let mut demo = Demo::new(Point::new(50, 50), route("N,E,S"), route("N,W"), OutputFormat::Text);
        assert_eq!(demo.drive(), 0);
        assert_eq!(
            demo.render().unwrap(),
            "robot path: (50, 50) -> (50, 51) -> (51, 51) -> (51, 50)\n\
             fast robot path: (50, 50) -> (50, 52) -> (48, 52)"
        );
    }

    #[test]
    fn json_output_lists_each_path() {
        let mut demo = Demo::new(Point::new(0, 0), route("S,Q"), route("E"), OutputFormat::Json);
        assert_eq!(demo.drive(), 1);

        let rendered: serde_json::Value = serde_json::from_str(&demo.render().unwrap()).unwrap();
        assert_eq!(
            rendered,
            serde_json::json!([
                { "name": "robot", "path": [{ "x": 0, "y": 0 }, { "x": 0, "y": 0 }] },
                { "name": "fast robot", "path": [{ "x": 0, "y": 0 }, { "x": 2, "y": 0 }] }
            ])
        );
    }
}
