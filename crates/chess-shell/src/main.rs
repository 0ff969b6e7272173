//! Interactive chess shell.
//!
//! Reads commands from stdin and prints results to stdout. Logs go to
//! stderr.

use std::io;
use std::path::PathBuf;

use chess_engine::TurnOrder;
use chess_shell::{Controller, Session, ShellConfig};
use clap::{ArgAction, Parser};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "chess-shell")]
#[command(about = "Play chess by typing MOVE, SHOW, GET, and EXIT commands")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = ShellConfig::DEFAULT_PATH)]
    config: PathBuf,

    /// Require every move to be made by the side to move
    #[arg(long)]
    strict_turns: bool,

    /// Starting placement, ranks 8 to 1 separated by '/'
    #[arg(long)]
    layout: Option<String>,

    /// Start with Black to move
    #[arg(long)]
    black_to_move: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Command-line flags override the configuration file.
    fn apply(&self, config: &mut ShellConfig) {
        if self.strict_turns {
            config.turn_order = TurnOrder::Strict;
        }
        if let Some(layout) = &self.layout {
            config.layout = Some(layout.clone());
        }
        if self.black_to_move {
            config.black_to_move = true;
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    let mut config = ShellConfig::load(&cli.config)?;
    cli.apply(&mut config);
    info!(
        config = %cli.config.display(),
        turn_order = %config.turn_order,
        show_after_move = config.show_after_move,
        "starting session"
    );

    let board = config.build_board()?;
    let controller =
        Controller::new(board, io::stdout()).with_show_after_move(config.show_after_move);
    let mut session = Session::new(io::stdin().lock(), controller);
    session.run()?;

    Ok(())
}
