use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use skillsprout::{
    AgeRange, AuthContext, AuthError, Category, Config, FileStorage, SkillSprout, logging,
};

#[derive(Parser, Debug)]
#[command(name = "skillsprout", version, about = "Fun puzzles for smart kids")]
struct Cli {
    /// Config file (defaults to ./skillsprout.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// File holding the saved login session
    #[arg(long, global = true)]
    storage: Option<PathBuf>,

    /// Directory with patterns.json, shapes_match.json and logical.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// Screen to open first, e.g. "/puzzle/patterns?age=3-4"
        #[arg(long)]
        route: Option<String>,
    },

    /// List the puzzles of a category
    Puzzles {
        /// patterns, shapes_match or logical
        #[arg(long)]
        category: String,

        /// Only puzzles overlapping this age range, e.g. "4-5"
        #[arg(long)]
        age: Option<String>,
    },

    /// Log in with a demo account and save the session
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Clear the saved session
    Logout,

    /// Show the logged-in user
    Whoami,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(storage) = cli.storage {
        config.storage_path = storage;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = Some(data_dir);
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = Some(log_file);
    }

    let command = cli.command.unwrap_or(Commands::Play { route: None });
    let interactive = matches!(command, Commands::Play { .. });

    match &config.log_file {
        Some(path) => logging::init_file(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?,
        None if !interactive => logging::init_stderr(),
        None => {}
    }

    match command {
        Commands::Play { route } => SkillSprout::open(&config, route.as_deref())?.run()?,
        Commands::Puzzles { category, age } => list_puzzles(&config, &category, age.as_deref())?,
        Commands::Login { username, password } => {
            let mut auth = restore_auth(&config)?;
            match auth.login(&username, &password) {
                Ok(user) => println!("Logged in as {user}"),
                Err(err @ (AuthError::MissingFields | AuthError::InvalidCredentials)) => {
                    bail!("{err}")
                }
                Err(err) => return Err(err).context("failed to save session"),
            }
        }
        Commands::Logout => {
            let mut auth = restore_auth(&config)?;
            auth.logout().context("failed to clear session")?;
            println!("Logged out");
        }
        Commands::Whoami => {
            let auth = restore_auth(&config)?;
            match auth.user() {
                Some(user) => println!("{user}"),
                None => println!("not logged in"),
            }
        }
    }

    Ok(())
}

fn restore_auth(config: &Config) -> Result<AuthContext<FileStorage>> {
    AuthContext::restore(FileStorage::new(&config.storage_path))
        .with_context(|| format!("failed to read session from {}", config.storage_path.display()))
}

fn list_puzzles(config: &Config, category: &str, age: Option<&str>) -> Result<()> {
    let Some(category) = Category::from_id(category) else {
        bail!("unknown category `{category}` (expected patterns, shapes_match or logical)");
    };
    let age = age.map(str::parse::<AgeRange>).transpose()?;

    let catalog = skillsprout::load_catalog(config)?;
    let puzzles = catalog.filtered(category, age);

    if puzzles.is_empty() {
        println!("No puzzles found!");
        return Ok(());
    }

    println!("{} {} ({} puzzles)", category.emoji(), category.name(), puzzles.len());
    for puzzle in &puzzles {
        println!("{:<12} {:<5} {}", puzzle.id, puzzle.age_range.as_str(), puzzle.title);
    }

    Ok(())
}
