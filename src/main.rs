//! Binary entrypoint for the Planephobia CLI.
//!
//! Commands:
//! - `start [--user <id>] [--name <name>]` - run a local console session
//!   against the rule engine as the given user
//! - `init` - create a starter `config.toml` and the content seed JSON
//! - `status` - print store and content summary
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;

use planephobia::bot::{console, Dispatcher};
use planephobia::config::Config;
use planephobia::game::content::{builtin_seed, GameContent};
use planephobia::game::PlayerStore;

#[derive(Parser)]
#[command(name = "planephobia")]
#[command(about = "A small text RPG driven by chat slash commands")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a local console session against the rule engine
    Start {
        /// Platform user id to play as
        #[arg(short, long, default_value_t = 1)]
        user: u64,

        /// Display name for the session
        #[arg(short, long, default_value = "console")]
        name: String,
    },
    /// Initialize a new configuration and content seed
    Init,
    /// Show store and content status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Start { user, name } => {
            let config = match pre_config {
                Some(c) => c,
                None => Config::load(&cli.config).await?,
            };
            info!("Starting Planephobia v{}", env!("CARGO_PKG_VERSION"));
            let store = PlayerStore::open(player_db_path(&config))?;
            let content = load_content(&config)?;
            let mut dispatcher = Dispatcher::new(store, content, config);
            console::run(&mut dispatcher, user, &name).await?;
        }
        Commands::Init => {
            info!("Initializing new configuration");
            let config = Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);

            let seed_dir = format!("{}/seeds", config.storage.data_dir);
            tokio::fs::create_dir_all(&seed_dir).await?;
            let seed_path = format!("{}/content.json", seed_dir);
            let seed = serde_json::to_string_pretty(&builtin_seed())?;
            tokio::fs::write(&seed_path, seed).await?;
            info!("Content seed written to {}", seed_path);
        }
        Commands::Status => {
            let config = match pre_config {
                Some(c) => c,
                None => Config::load(&cli.config).await?,
            };
            let store = PlayerStore::open(player_db_path(&config))?;
            let content = load_content(&config)?;
            println!("data dir:   {}", config.storage.data_dir);
            println!("players:    {}", store.count());
            println!("classes:    {}", content.classes().len());
            println!("items:      {}", content.items().count());
            println!(
                "cooldowns:  worship {}m, duel {}m, hunt {}m",
                config.game.cooldown_minutes.worship,
                config.game.cooldown_minutes.duel,
                config.game.cooldown_minutes.hunt
            );
        }
    }
    Ok(())
}

fn player_db_path(config: &Config) -> String {
    format!("{}/players", config.storage.data_dir)
}

fn load_content(config: &Config) -> Result<GameContent> {
    match &config.game.content_seed {
        Some(path) => {
            info!("Loading content seed from {}", path);
            Ok(GameContent::load(path)?)
        }
        None => Ok(GameContent::builtin()),
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level.as_str())
            .unwrap_or("info")
            .parse()
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.format(|fmt, record| {
        writeln!(
            fmt,
            "{} [{}] {}",
            chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ"),
            record.level(),
            record.args()
        )
    });
    if let Some(cfg) = config {
        if let Some(file) = &cfg.logging.file {
            if let Ok(f) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
            {
                builder.target(env_logger::Target::Pipe(Box::new(f)));
            }
        }
    }
    let _ = builder.try_init();
}
