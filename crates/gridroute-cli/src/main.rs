use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gridroute_lib::{
    check_dimensions, check_endpoints_clear, check_map_id, check_map_shape, check_route_clear,
    check_route_length, detect_cycles, plan_route, Connection, DimensionLimits, MapConfig, Point,
    RouteRequest, StrategyRegistry, Validation, MAX_ROUTE_LENGTH,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Grid pathfinding and map validation utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route across a grid, optionally through ordered waypoints.
    Route {
        /// Grid width in cells.
        #[arg(long)]
        width: i32,
        /// Grid height in cells.
        #[arg(long)]
        height: i32,
        /// Starting point as "x,y".
        #[arg(long, value_parser = parse_point)]
        start: Point,
        /// Destination point as "x,y".
        #[arg(long, value_parser = parse_point)]
        end: Point,
        /// Intermediate waypoint as "x,y"; repeat in visiting order.
        #[arg(long = "via", value_parser = parse_point)]
        via: Vec<Point>,
        /// Obstacle cell as "x,y"; repeatable.
        #[arg(long = "obstacle", value_parser = parse_point)]
        obstacles: Vec<Point>,
        /// Pathfinding algorithm name (defaults to astar).
        #[arg(long)]
        algorithm: Option<String>,
        /// Emit the plan as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Run validation checks against a JSON map configuration file.
    Validate {
        /// Path to the configuration file.
        config: PathBuf,
        /// Emit verdicts as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List the registered pathfinding strategies.
    Strategies,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route {
            width,
            height,
            start,
            end,
            via,
            obstacles,
            algorithm,
            json,
        } => {
            let request = RouteRequest {
                width,
                height,
                obstacles,
                waypoints: via,
                start,
                end,
                algorithm,
            };
            handle_route(&request, json)
        }
        Command::Validate { config, json } => handle_validate(&config, json),
        Command::Strategies => handle_strategies(),
    }
}

fn handle_route(request: &RouteRequest, json: bool) -> Result<()> {
    let registry = StrategyRegistry::default();
    let plan = plan_route(&registry, request).context("route planning failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("Algorithm: {}", plan.algorithm);
        println!("Distance: {}", plan.distance);
        println!("Path:");
        for point in &plan.path {
            println!("- {point}");
        }
    }

    Ok(())
}

/// On-disk map configuration accepted by the validate subcommand.
///
/// Every field is optional; checks run only for the data that is present.
#[derive(Debug, Deserialize)]
struct ValidateInput {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    width: Option<i32>,
    #[serde(default)]
    height: Option<i32>,
    #[serde(default, alias = "obstaclesConfig")]
    obstacles: Option<Vec<Point>>,
    #[serde(default, alias = "stoppingPoints")]
    waypoints: Option<Vec<Point>>,
    #[serde(default)]
    connections: Vec<Connection>,
    #[serde(default)]
    start: Option<Point>,
    #[serde(default)]
    end: Option<Point>,
    #[serde(default)]
    path: Option<Vec<Point>>,
}

#[derive(Debug, Serialize)]
struct NamedVerdict {
    check: &'static str,
    #[serde(flatten)]
    verdict: Validation,
}

fn handle_validate(config: &Path, json: bool) -> Result<()> {
    let raw = fs::read_to_string(config)
        .with_context(|| format!("failed to read {}", config.display()))?;
    let input: ValidateInput = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", config.display()))?;

    let layout = MapConfig {
        obstacles: input.obstacles.clone(),
        waypoints: input.waypoints.clone(),
    };
    let obstacles = input.obstacles.unwrap_or_default();

    let mut verdicts = vec![NamedVerdict {
        check: "shape",
        verdict: check_map_shape(&layout),
    }];

    if let Some(id) = &input.id {
        verdicts.push(NamedVerdict {
            check: "id-format",
            verdict: check_map_id(id),
        });
    }
    if let (Some(width), Some(height)) = (input.width, input.height) {
        verdicts.push(NamedVerdict {
            check: "dimensions",
            verdict: check_dimensions(width, height, DimensionLimits::default()),
        });
    }
    if let (Some(start), Some(end)) = (input.start, input.end) {
        verdicts.push(NamedVerdict {
            check: "endpoints",
            verdict: check_endpoints_clear(start, end, &obstacles),
        });
    }
    if !input.connections.is_empty() {
        verdicts.push(NamedVerdict {
            check: "cycles",
            verdict: detect_cycles(&input.connections),
        });
    }
    if let Some(path) = &input.path {
        verdicts.push(NamedVerdict {
            check: "route-length",
            verdict: check_route_length(path, MAX_ROUTE_LENGTH),
        });
        verdicts.push(NamedVerdict {
            check: "route-intersections",
            verdict: check_route_clear(path, &obstacles),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
    } else {
        for entry in &verdicts {
            let status = if entry.verdict.valid { "ok" } else { "FAIL" };
            match (&entry.verdict.reason, &entry.verdict.note) {
                (Some(reason), _) => println!("{:<20} {status}: {reason}", entry.check),
                (None, Some(note)) => println!("{:<20} {status} ({note})", entry.check),
                (None, None) => println!("{:<20} {status}", entry.check),
            }
        }
    }

    if verdicts.iter().any(|entry| !entry.verdict.valid) {
        anyhow::bail!("map configuration failed validation");
    }
    Ok(())
}

fn handle_strategies() -> Result<()> {
    let registry = StrategyRegistry::default();
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}

fn parse_point(raw: &str) -> std::result::Result<Point, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{raw}\""))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid x coordinate: {err}"))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid y coordinate: {err}"))?;
    Ok(Point::new(x, y))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
