//! CLI interface

use clap::{Args, Parser, Subcommand};
use grid_robot::{RoomSize, StartPosition};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grid-robot")]
#[command(version, about = "Robot that walks around a room on a grid", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: ./grid-robot.toml if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service (default)
    Serve(ServeArgs),

    /// Run one navigation locally and print the report
    Run {
        /// Room size as WIDTH,DEPTH
        #[arg(long, value_parser = parse_room)]
        room: RoomSize,

        /// Start pose as X,Y,ORIENTATION
        #[arg(long, value_parser = parse_start)]
        start: StartPosition,

        /// Print every intermediate pose
        #[arg(long)]
        trace: bool,

        /// Commands made of L, R and F
        #[arg(default_value = "")]
        commands: String,
    },
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind, overrides config and environment
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overrides config and the PORT variable
    #[arg(short, long)]
    pub port: Option<u16>,
}

fn parse_room(s: &str) -> Result<RoomSize, String> {
    match s.split(',').map(str::trim).collect::<Vec<_>>().as_slice() {
        [width, depth] => Ok(RoomSize::new(
            width.parse().map_err(|_| format!("invalid width: {width}"))?,
            depth.parse().map_err(|_| format!("invalid depth: {depth}"))?,
        )),
        _ => Err("expected WIDTH,DEPTH".to_string()),
    }
}

fn parse_start(s: &str) -> Result<StartPosition, String> {
    match s.split(',').map(str::trim).collect::<Vec<_>>().as_slice() {
        [x, y, orientation] => Ok(StartPosition::new(
            x.parse().map_err(|_| format!("invalid x: {x}"))?,
            y.parse().map_err(|_| format!("invalid y: {y}"))?,
            *orientation,
        )),
        _ => Err("expected X,Y,ORIENTATION".to_string()),
    }
}
