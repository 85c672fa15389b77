use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use apex_core::prelude::*;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::prompt::Prompter;
use crate::report;

#[derive(Parser, Debug)]
#[command(name = "apex", version, about = "Multi-criteria road route planner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the best route between two nodes
    Route(RouteArgs),
    /// Print size and normalization bounds of a road network
    Info(InfoArgs),
}

/// Where the road network comes from
#[derive(Args, Debug, Clone, Default)]
pub struct MapArgs {
    /// JSON map file
    #[arg(short, long, conflicts_with_all = ["nodes", "edges"])]
    pub map: Option<PathBuf>,

    /// CSV node table (id,name)
    #[arg(long, requires = "edges")]
    pub nodes: Option<PathBuf>,

    /// CSV edge table (from,to,distance,speed_limit,traffic,toll)
    #[arg(long, requires = "nodes")]
    pub edges: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RouteArgs {
    #[command(flatten)]
    pub map: MapArgs,

    /// Starting node ID
    #[arg(short, long)]
    pub start: Option<NodeId>,

    /// Destination node ID
    #[arg(short, long)]
    pub end: Option<NodeId>,

    /// Weight for travel time
    #[arg(long = "time")]
    pub w_time: Option<f64>,

    /// Weight for distance
    #[arg(long = "distance")]
    pub w_dist: Option<f64>,

    /// Weight for monetary cost
    #[arg(long = "cost")]
    pub w_cost: Option<f64>,

    /// Fuel price per km, overrides the config file
    #[arg(long)]
    pub fuel_price: Option<f64>,

    /// TOML config with defaults for map, weights and fuel price
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the route as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InfoArgs {
    #[command(flatten)]
    pub map: MapArgs,

    /// Fuel price per km used for the cost bound, overrides the config file
    #[arg(long)]
    pub fuel_price: Option<f64>,

    /// TOML config with defaults for map and fuel price
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapSource {
    Json(PathBuf),
    Csv { nodes: PathBuf, edges: PathBuf },
}

impl MapSource {
    fn from_args(args: &MapArgs) -> Option<Self> {
        match (&args.map, &args.nodes, &args.edges) {
            (Some(map), _, _) => Some(MapSource::Json(map.clone())),
            (None, Some(nodes), Some(edges)) => Some(MapSource::Csv {
                nodes: nodes.clone(),
                edges: edges.clone(),
            }),
            _ => None,
        }
    }

    pub fn load(&self) -> anyhow::Result<RoadGraph> {
        let graph = match self {
            MapSource::Json(path) => load_json_map(path)
                .with_context(|| format!("could not load map '{}'", path.display()))?,
            MapSource::Csv { nodes, edges } => load_csv_map(nodes, edges).with_context(|| {
                format!(
                    "could not load map tables '{}' and '{}'",
                    nodes.display(),
                    edges.display()
                )
            })?,
        };
        Ok(graph)
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// `--fuel-price` wins over the config file
fn resolve_cost_model(config: &Config, fuel_price: Option<f64>) -> anyhow::Result<CostModel> {
    match fuel_price {
        Some(price) => Ok(CostModel::new(price)?),
        None => Ok(config.cost),
    }
}

/// Fully resolved inputs of one routing run
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub map: MapSource,
    pub start: NodeId,
    pub end: NodeId,
    pub weights: Weights,
    pub cost_model: CostModel,
}

/// Fills the request from arguments, then the config, then the prompter,
/// in the order the questions are asked interactively. Weights are
/// validated here, before any map is read.
pub fn resolve_request<R: BufRead, W: Write>(
    args: &RouteArgs,
    config: &Config,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<RouteRequest> {
    let map = match MapSource::from_args(&args.map) {
        Some(source) => source,
        None => MapSource::Json(prompter.or_ask(
            config.map.clone(),
            "Enter map filename (e.g., map.json): ",
        )?),
    };

    let start = prompter.or_ask(args.start, "Enter starting node ID: ")?;
    let end = prompter.or_ask(args.end, "Enter ending node ID: ")?;

    let w_time = args.w_time.or(config.weights.time);
    let w_dist = args.w_dist.or(config.weights.distance);
    let w_cost = args.w_cost.or(config.weights.cost);
    if w_time.is_none() || w_dist.is_none() || w_cost.is_none() {
        prompter.say("Enter your priorities (weights must sum to 1.0):")?;
    }
    let w_time = prompter.or_ask(w_time, "Weight for time (e.g., 0.7): ")?;
    let w_dist = prompter.or_ask(w_dist, "Weight for distance (e.g., 0.1): ")?;
    let w_cost = prompter.or_ask(w_cost, "Weight for cost (e.g., 0.2): ")?;
    let weights = Weights::new(w_time, w_dist, w_cost)?;
    let cost_model = resolve_cost_model(config, args.fuel_price)?;

    Ok(RouteRequest {
        map,
        start,
        end,
        weights,
        cost_model,
    })
}

pub fn run_route<R: BufRead, W: Write>(
    args: &RouteArgs,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let request = resolve_request(args, &config, prompter)?;
    let graph = request.map.load()?;

    info!(
        "Calculating the most optimal path from {} to {}",
        request.start, request.end
    );
    let engine = RouteEngine::with_cost_model(&graph, request.cost_model);
    let path = engine.find_optimal_path(request.start, request.end, &request.weights)?;

    let rendered = if args.json {
        serde_json::to_string_pretty(&path)?
    } else {
        match &path {
            Some(path) => report::render_path(path),
            None => report::render_no_path(),
        }
    };
    prompter.say(rendered.trim_end())?;
    Ok(())
}

pub fn run_info<R: BufRead, W: Write>(
    args: &InfoArgs,
    prompter: &mut Prompter<R, W>,
) -> anyhow::Result<()> {
    let config = load_config(args.config.as_ref())?;
    let cost_model = resolve_cost_model(&config, args.fuel_price)?;

    let source = match MapSource::from_args(&args.map) {
        Some(source) => source,
        None => MapSource::Json(prompter.or_ask(
            config.map.clone(),
            "Enter map filename (e.g., map.json): ",
        )?),
    };
    let graph = source.load()?;

    let bounds = NormalizationBounds::from_graph(&graph, &cost_model);
    prompter.say(report::render_network_info(&graph, &bounds).trim_end())?;
    Ok(())
}
