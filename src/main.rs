use std::io::{self, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use text_sentiment::{
    analysis::Analyzer,
    config::{Config, LogFormat, OutputFormat},
    console::{render, Console},
    history::SessionHistory,
    toolkit::LexiconToolkit,
};

/// On-demand text analytics: lexical statistics, part-of-speech
/// distribution, and sentiment scoring with a per-session history.
#[derive(Parser, Debug)]
#[command(name = "text-sentiment", version)]
struct Cli {
    /// Text to analyze in one shot; omit to start the interactive console
    text: Option<String>,

    /// Emit results as JSON instead of formatted text
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // CLI flags override the environment
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json {
        config.console.format = OutputFormat::Json;
    }

    // Initialize logging
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Text sentiment analyzer starting..."
    );

    let analyzer = Analyzer::with_config(LexiconToolkit::new(), config.analysis.clone());

    match cli.text {
        Some(text) => {
            let result = analyzer.analyze(&text);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            render::render_result(&mut out, &result, config.console.format)?;
            out.flush()?;
        }
        None => {
            let history = SessionHistory::new();
            info!(session_id = %history.id(), "Session started");

            let mut console = Console::new(analyzer, history, config.console.format);
            let stdin = io::stdin();
            let stdout = io::stdout();
            console.run(stdin.lock(), stdout.lock())?;
        }
    }

    info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
