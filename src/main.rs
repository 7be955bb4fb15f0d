// Solace - keyword-driven wellness companion
// Main entry point

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use solace::app::{Action, App};
use solace::catalog::CreativeKind;
use solace::cli::{default_history_path, InputHandler, Renderer, Repl};
use solace::config::{load_config, Config};
use solace::errors::config_parse_error;
use solace::matcher::{RandomSource, RngSource};
use solace::platform::ConsolePlatform;
use solace::screens::{Route, Screen};
use solace::SolaceError;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "solace")]
#[command(about = "A gentle companion for mood tracking, venting and finding support", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file (default: ~/.solace/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible replies
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    no_color: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Say one thing to the companion and print its reply
    Say {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Log a mood by id (happy, sad, ...) or in your own words
    Mood {
        #[arg(required = true, num_args = 1..)]
        mood: Vec<String>,
    },
    /// Generate a poem, affirmation or art idea
    Create {
        /// poem, affirmation or art-idea
        kind: CreativeKind,
    },
    /// Show crisis hotlines, coping strategies and a safety plan
    Support,
}

#[tokio::main]
async fn main() -> Result<()> {
    install_panic_handler();

    let args = Args::parse();

    init_tracing();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_config_error(&e, args.config.as_deref());
            std::process::exit(1);
        }
    };
    if args.no_color {
        config.color = false;
    }
    if matches!(args.command, Some(Command::Say { .. })) {
        // One-shot exchange: nobody is watching a typing indicator
        config = config.without_typing_delay();
    }

    let color = config.color && io::stdout().is_terminal();
    let mut repl = build_repl(config, args.seed, color)?;

    match args.command {
        Some(Command::Say { text }) => {
            repl.navigate(Route::to(Screen::Chat));
            repl.handle_line(&text.join(" ")).await?;
        }
        Some(Command::Mood { mood }) => {
            repl.navigate(Route::to(Screen::Mood));
            repl.handle_line(&mood.join(" ")).await?;
        }
        Some(Command::Create { kind }) => {
            repl.navigate(Route::to(Screen::Creative));
            repl.perform(Action::Create(kind)).await?;
        }
        Some(Command::Support) => {
            repl.open(Route::to(Screen::Support));
        }
        None if !io::stdin().is_terminal() => {
            // Piped input: every line is a chat message
            repl.navigate(Route::to(Screen::Chat));
            for line in io::stdin().lock().lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    repl.handle_line(&line).await?;
                }
            }
        }
        None => {
            repl.run().await?;
        }
    }

    Ok(())
}

fn build_repl(config: Config, seed: Option<u64>, color: bool) -> Result<Repl> {
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    };
    let platform = Box::new(ConsolePlatform::stdout(color));
    let app = App::new(config, rng, platform)?;

    let input = if io::stdin().is_terminal() {
        match InputHandler::new(default_history_path().as_deref()) {
            Ok(handler) => Some(handler),
            Err(e) => {
                tracing::warn!("Failed to initialize input handler: {}", e);
                None
            }
        }
    } else {
        None
    };

    Ok(Repl::new(app, Renderer::new(color), input))
}

fn report_config_error(error: &anyhow::Error, path: Option<&std::path::Path>) {
    match error.downcast_ref::<SolaceError>() {
        Some(SolaceError::ConfigParse { path, source }) => {
            eprintln!(
                "{}",
                config_parse_error(&path.display().to_string(), &source.to_string())
            );
        }
        _ => {
            let location = path
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "~/.solace/config.toml".to_string());
            eprintln!("Failed to load configuration ({}): {:#}", location, error);
        }
    }
}

/// Restore the terminal if we panic mid-prompt
fn install_panic_handler() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use crossterm::{cursor, execute, terminal};
        let _ = terminal::disable_raw_mode();
        let _ = execute!(std::io::stderr(), cursor::Show);

        default_panic(info);
    }));
}

/// Log level when neither RUST_LOG nor SOLACE_DEBUG is set
const DEFAULT_LOG_FILTER: &str = "warn";

fn debug_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Initialize tracing, writing to stderr so screens on stdout stay clean
fn init_tracing() {
    let show_debug = debug_requested(std::env::var("SOLACE_DEBUG").ok().as_deref());

    // Default: WARN so log lines don't interleave with the screens.
    // RUST_LOG overrides; SOLACE_DEBUG=1 forces debug.
    let env_filter = if show_debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(show_debug),
        )
        .init();

    // Bridge log crate → tracing (rustyline logs through `log`)
    tracing_log::LogTracer::init().ok();
}
