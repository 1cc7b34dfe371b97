use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::{Parser, Subcommand, ValueEnum};
use loyalty::feedback::{Feedback, FeedbackError};
use loyalty::restaurants::{RESTAURANTS, find_restaurant};
use loyalty::{
    Catalog, CatalogError, ErrorCode, FileStore, Notice, PointsLedger, RedeemError, RewardsView, StoreError, prefs,
    reward_cards,
};
use serde_json::Value;
use tastepoints::api::{ApiClient, ApiError};
use tastepoints::config::{Config, ConfigError, trim_url};
use tastepoints::render;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("storage: {0}")]
    Store(#[from] StoreError),
    #[error("catalog {path}: {source}")]
    Catalog { path: PathBuf, source: CatalogError },
    #[error("reading catalog {path}: {source}")]
    CatalogRead { path: PathBuf, source: std::io::Error },
    #[error("{notice} ({code})")]
    Redeem { notice: Notice, code: &'static str },
    #[error("invalid feedback: {0}")]
    Feedback(#[from] FeedbackError),
    #[error("feedback submission failed: {0}")]
    Submit(ApiError),
    #[error("Unable to load reviews. ({0})")]
    Reviews(ApiError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "tastepoints", about = "TastePoints restaurant rewards and feedback")]
struct Cli {
    /// Storage file standing in for the browser's local storage.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[arg(long, global = true)]
    api_base_url: Option<String>,

    #[arg(long, global = true)]
    reviews_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List featured restaurants.
    Restaurants,
    /// Show the points balance and the reward catalog.
    Rewards {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Exchange points for a reward.
    Redeem { reward_id: u32 },
    /// Send feedback for a restaurant.
    Feedback {
        #[arg(long)]
        restaurant: String,
        #[arg(long)]
        rating: u8,
        #[arg(long)]
        comment: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// List published reviews.
    Reviews {
        #[arg(long)]
        search: Option<String>,
    },
    /// Show or change the dark mode preference.
    DarkMode {
        #[arg(value_enum, default_value_t = DarkModeAction::Status)]
        action: DarkModeAction,
    },
    /// Show or change the greeting name.
    Username {
        #[command(subcommand)]
        action: Option<UsernameAction>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DarkModeAction {
    Status,
    On,
    Off,
    Toggle,
}

#[derive(Subcommand, Debug)]
enum UsernameAction {
    Show,
    Set { name: String },
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = apply_overrides(Config::from_env()?, &cli);

    match cli.command {
        Command::Restaurants => run_restaurants(&config),
        Command::Rewards { json } => run_rewards(&config, json),
        Command::Redeem { reward_id } => run_redeem(&config, reward_id),
        Command::Feedback {
            restaurant,
            rating,
            comment,
            name,
        } => run_feedback(&config, &restaurant, rating, &comment, name.as_deref()).await,
        Command::Reviews { search } => run_reviews(&config, search.as_deref()).await,
        Command::DarkMode { action } => run_dark_mode(&config, action),
        Command::Username { action } => run_username(&config, action.unwrap_or(UsernameAction::Show)),
    }
}

fn apply_overrides(mut config: Config, cli: &Cli) -> Config {
    if let Some(path) = &cli.store {
        config.store_path.clone_from(path);
    }
    if let Some(url) = &cli.api_base_url {
        config.api_base_url = trim_url(url);
    }
    if let Some(url) = &cli.reviews_url {
        config.reviews_url = trim_url(url);
    }
    config
}

fn open_store(config: &Config) -> Result<Rc<FileStore>, CliError> {
    Ok(Rc::new(FileStore::open(&config.store_path)?))
}

fn load_catalog(config: &Config) -> Result<Catalog, CliError> {
    let Some(path) = &config.catalog_path else {
        return Ok(Catalog::default());
    };
    let raw = fs::read_to_string(path).map_err(|source| CliError::CatalogRead { path: path.clone(), source })?;
    Catalog::from_json(&raw).map_err(|source| CliError::Catalog { path: path.clone(), source })
}

fn rewards_view(config: &Config, store: &Rc<FileStore>) -> Result<RewardsView<Rc<FileStore>>, CliError> {
    let ledger = PointsLedger::with_starting_points(Rc::clone(store), config.starting_points);
    Ok(RewardsView::new(load_catalog(config)?, ledger))
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// =============================================================================
// COMMANDS
// =============================================================================

fn run_restaurants(config: &Config) -> Result<(), CliError> {
    let store = open_store(config)?;
    println!("{}", prefs::greeting(prefs::username(&store).as_deref()));
    println!();
    print!("{}", render::restaurant_cards(&RESTAURANTS));
    Ok(())
}

fn run_rewards(config: &Config, json: bool) -> Result<(), CliError> {
    let store = open_store(config)?;
    let view = rewards_view(config, &store)?;
    let balance = view.balance();
    let cards = reward_cards(view.catalog(), balance);
    if json {
        return print_json(&serde_json::json!({ "balance": balance, "rewards": cards }));
    }
    print!("{}", render::reward_listing(balance, &cards));
    Ok(())
}

fn run_redeem(config: &Config, reward_id: u32) -> Result<(), CliError> {
    let store = open_store(config)?;
    let mut view = rewards_view(config, &store)?;

    let refresh_catalog = view.catalog().clone();
    let refresh_ledger = PointsLedger::with_starting_points(Rc::clone(&store), config.starting_points);
    view.subscribe(move |redemption| {
        println!("{}", Notice::Redeemed { reward_name: redemption.reward.name.clone() });
        let balance = refresh_ledger.balance();
        println!();
        print!("{}", render::reward_listing(balance, &reward_cards(&refresh_catalog, balance)));
    });

    let outcome = view.redeem(reward_id);
    let notice = Notice::from_outcome(&outcome);
    match outcome {
        Ok(_) => Ok(()),
        Err(e) => {
            if let RedeemError::Ledger(inner) = &e {
                warn!(error = %inner, "redemption could not be saved");
            }
            Err(CliError::Redeem { notice, code: e.error_code() })
        }
    }
}

async fn run_feedback(
    config: &Config,
    restaurant: &str,
    rating: u8,
    comment: &str,
    name: Option<&str>,
) -> Result<(), CliError> {
    let restaurant = find_restaurant(restaurant).map_or(restaurant, |r| r.name);
    let store = open_store(config)?;
    let stored_name = prefs::username(&store);
    let feedback = Feedback::new(restaurant, rating, comment, name.or(stored_name.as_deref()))?;

    let client = ApiClient::new(config)?;
    let created = client.submit_feedback(&feedback).await.map_err(CliError::Submit)?;
    info!(restaurant = feedback.restaurant_name(), "feedback submitted");
    println!("Thank you! Your feedback for {} was submitted.", feedback.restaurant_name());
    if !created.is_null() {
        print_json(&created)?;
    }
    Ok(())
}

async fn run_reviews(config: &Config, search: Option<&str>) -> Result<(), CliError> {
    let client = ApiClient::new(config)?;
    let reviews = client.fetch_reviews(search).await.map_err(CliError::Reviews)?;
    print!("{}", render::review_cards(&reviews));
    Ok(())
}

fn run_dark_mode(config: &Config, action: DarkModeAction) -> Result<(), CliError> {
    let store = open_store(config)?;
    let enabled = match action {
        DarkModeAction::Status => prefs::dark_mode(&store),
        DarkModeAction::On => {
            prefs::set_dark_mode(&store, true)?;
            true
        }
        DarkModeAction::Off => {
            prefs::set_dark_mode(&store, false)?;
            false
        }
        DarkModeAction::Toggle => prefs::toggle_dark_mode(&store)?,
    };
    println!("dark mode: {}", if enabled { "on" } else { "off" });
    Ok(())
}

fn run_username(config: &Config, action: UsernameAction) -> Result<(), CliError> {
    let store = open_store(config)?;
    match action {
        UsernameAction::Show => match prefs::username(&store) {
            Some(name) => println!("{name}"),
            None => println!("(not set)"),
        },
        UsernameAction::Set { name } => {
            prefs::set_username(&store, &name)?;
            println!("{}", prefs::greeting(prefs::username(&store).as_deref()));
        }
        UsernameAction::Clear => {
            prefs::clear_username(&store)?;
            println!("username cleared");
        }
    }
    Ok(())
}
