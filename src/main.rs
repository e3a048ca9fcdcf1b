//! Command-line front end for rover deployment planning.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rover_deploy::{DeploymentInfo, Plateau, RoverControlSystem, RoverParser, logging};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "rover-deploy",
    version,
    about = "Plan rover deployments on a bounded plateau"
)]
struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a text command file and print the commands as JSON.
    Parse {
        /// Command file, or `-` for stdin.
        file: PathBuf,
    },
    /// Generate a plan from a JSON deployment document.
    Plan {
        /// JSON `DeploymentInfo` file, or `-` for stdin.
        file: PathBuf,
    },
    /// Parse a text command file and generate its plan.
    Run {
        /// Command file, or `-` for stdin.
        file: PathBuf,
        /// Largest valid x coordinate.
        #[arg(long)]
        width: u32,
        /// Largest valid y coordinate.
        #[arg(long)]
        height: u32,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Parse { file } => {
            let commands = RoverParser::new().parse(&read_input(&file)?)?;
            print_json(&commands, cli.pretty)
        }
        Command::Plan { file } => {
            let info: DeploymentInfo = serde_json::from_str(&read_input(&file)?)
                .with_context(|| format!("invalid deployment document {}", file.display()))?;
            let plan = RoverControlSystem::new().generate_deployment_plan(&info)?;
            print_json(&plan, cli.pretty)
        }
        Command::Run {
            file,
            width,
            height,
        } => {
            let commands = RoverParser::new().parse(&read_input(&file)?)?;
            let info = DeploymentInfo::new(Plateau::new(width, height), commands);
            let plan = RoverControlSystem::new().generate_deployment_plan(&info)?;
            print_json(&plan, cli.pretty)
        }
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
