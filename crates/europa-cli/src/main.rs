//! Terminal front end for Europa: The Last Frontier.

mod console;
mod driver;
mod render;

use std::io;
use std::process;
use std::time::Duration;

use clap::Parser;

use europa_game::{Game, GameConfig};

use crate::console::{Console, TerminalConsole};

#[derive(Parser)]
#[command(
    name = "europa",
    about = "Europa: The Last Frontier, a text adventure aboard a failing space station",
    version
)]
struct Cli {
    /// Player name (skips the name prompt)
    #[arg(short, long)]
    name: Option<String>,

    /// RNG seed for reproducible combat (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Delay between characters of story text, in milliseconds (0 disables)
    #[arg(long, default_value = "30")]
    text_delay_ms: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print the final status report as JSON on exit
    #[arg(long)]
    json_summary: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = TerminalConsole::new(
        stdin.lock(),
        stdout.lock(),
        Duration::from_millis(cli.text_delay_ms),
    );
    console.say(&render::title()).map_err(|e| e.to_string())?;

    let name = match cli.name {
        Some(name) => name,
        None => console
            .request_text("\nEnter your name: ")
            .map_err(|e| e.to_string())?
            .unwrap_or_default(),
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = GameConfig::default().with_seed(seed);
    let mut game = Game::new(&name, config).map_err(|e| e.to_string())?;

    driver::run(&mut game, &mut console).map_err(|e| e.to_string())?;

    if cli.json_summary {
        let json = serde_json::to_string_pretty(&game.status()).map_err(|e| e.to_string())?;
        console.say(&json).map_err(|e| e.to_string())?;
    }
    Ok(())
}
