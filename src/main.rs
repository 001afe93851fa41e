//! Command-line front end for wa-link.
//!
//! # Usage
//!
//! ```bash
//! # Generate a link (also recorded in history)
//! wa-link generate "010 1234 5678" --country EG
//!
//! # Check a number without generating anything
//! wa-link validate "+966 50 123 4567" -c SA --locale ar
//!
//! # Show or clear the history log
//! wa-link history list
//! wa-link history clear -y
//!
//! # List supported countries
//! wa-link countries
//!
//! # Interactive session (type numbers, :help for commands)
//! wa-link interactive
//! ```
//!
//! Links are printed to stdout; logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use tracing_subscriber::EnvFilter;

use wa_link::application::services::{HISTORY_KEY, HistoryStore, LinkService, Session};
use wa_link::config::Config;
use wa_link::domain::entities::{CountryCatalog, HistoryEntry};
use wa_link::domain::repositories::KeyValueStore;
use wa_link::domain::validator::{display_prefixes, format_length};
use wa_link::infrastructure::catalog;
use wa_link::infrastructure::persistence::{FileStore, MemoryStore};
use wa_link::messages::{self, Locale};

/// Generate WhatsApp chat links from local phone numbers.
#[derive(Parser)]
#[command(name = "wa-link")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Country code or dial code to validate against (e.g. EG, SA, +20)
    #[arg(short, long, global = true)]
    country: Option<String>,

    /// Message language: en or ar
    #[arg(short, long, global = true)]
    locale: Option<Locale>,

    /// JSON country dataset replacing the built-in one
    #[arg(long, global = true)]
    countries: Option<PathBuf>,

    /// Directory holding the history file
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Validate a number and generate its wa.me link
    Generate {
        /// Phone number in any format (spaces, dashes, leading 0 or country code)
        number: String,
    },

    /// Check a number without generating a link
    Validate {
        /// Phone number in any format
        number: String,
    },

    /// Show or clear generated links
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// List supported countries and their rules
    Countries,

    /// Start an interactive generator session
    Interactive,
}

/// History subcommands.
#[derive(Subcommand)]
enum HistoryAction {
    /// List generated links, newest first
    List,

    /// Delete all history entries
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    apply_overrides(&mut config, &cli);
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    let links = LinkService::new(Arc::new(load_catalog(&config)?));
    let country = match config.default_country.as_deref() {
        Some(code) => links
            .country(code)
            .cloned()
            .with_context(|| format!("Unknown country '{code}'. See `wa-link countries`."))?,
        None => links.catalog().default_country().clone(),
    };
    let history = HistoryStore::open(open_store(&config)).with_limit(config.history_limit);
    let mut session = Session::new(links, history, country, config.locale);

    match cli.command {
        Commands::Generate { number } => Ok(handle_generate(&mut session, &number)),
        Commands::Validate { number } => Ok(handle_validate(&session, &number)),
        Commands::History { action } => {
            handle_history_action(action, &mut session)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Countries => {
            list_countries(session.links().catalog(), session.locale());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Interactive => {
            run_interactive(&mut session)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Command-line flags win over environment values.
fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref code) = cli.country {
        config.default_country = Some(code.clone());
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }
    if let Some(ref path) = cli.countries {
        config.countries_file = Some(path.clone());
    }
    if let Some(ref dir) = cli.state_dir {
        config.state_dir = Some(dir.clone());
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn load_catalog(config: &Config) -> Result<CountryCatalog> {
    match config.countries_file {
        Some(ref path) => catalog::from_path(path)
            .with_context(|| format!("Failed to load countries from {}", path.display())),
        None => catalog::builtin().context("Built-in country dataset is invalid"),
    }
}

/// Picks the history backend, falling back to memory when no state dir is usable.
fn open_store(config: &Config) -> Arc<dyn KeyValueStore> {
    match config.state_dir {
        Some(ref dir) => {
            let store = FileStore::new(dir);
            tracing::info!("History stored in {}", store.path_for(HISTORY_KEY).display());
            Arc::new(store)
        }
        None => {
            tracing::warn!("No state directory available. History will not be persisted.");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Generates a link and prints it, or prints the localized reason.
fn handle_generate(session: &mut Session, number: &str) -> ExitCode {
    match session.generate(number) {
        Ok(link) => {
            println!("{}", link);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!(
                "{} {}",
                "✗".red().bold(),
                messages::describe_error(&e, session.country(), session.locale()).red()
            );
            ExitCode::FAILURE
        }
    }
}

/// Prints the validation outcome without touching history.
fn handle_validate(session: &Session, number: &str) -> ExitCode {
    let result = session.check(number);
    let country = session.country();

    match result.reason {
        None => {
            println!(
                "{} {} {}",
                "✓".green().bold(),
                country.dial_code.bright_black(),
                result.normalized_number.green()
            );
            ExitCode::SUCCESS
        }
        Some(ref reason) => {
            eprintln!(
                "{} {}",
                "✗".red().bold(),
                messages::describe(reason, country, session.locale()).red()
            );
            if !result.normalized_number.is_empty() {
                eprintln!("  Normalized: {}", result.normalized_number.bright_white());
            }
            ExitCode::FAILURE
        }
    }
}

/// Dispatches history commands.
fn handle_history_action(action: HistoryAction, session: &mut Session) -> Result<()> {
    match action {
        HistoryAction::List => print_history(session.history(), session.locale()),
        HistoryAction::Clear { yes } => clear_history(session, yes)?,
    }
    Ok(())
}

fn clear_history(session: &mut Session, skip_confirm: bool) -> Result<()> {
    if session.history().is_empty() {
        println!("{}", messages::empty_history(session.locale()).yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} history entries?", session.history().len()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    session.clear_history();
    println!("{}", "History cleared".green().bold());
    Ok(())
}

/// Prints the history log as a table.
///
/// # Output Format
///
/// ```text
/// History (2 links generated)
///
///   Number                Time    Link
///   ──────────────────────────────────────────────────────────
///   +20 1112345678        14:05   https://wa.me/201112345678
///   +20 1012345678        14:02   https://wa.me/201012345678
/// ```
fn print_history(entries: &[HistoryEntry], locale: Locale) {
    println!(
        "{}",
        messages::history_heading(entries.len(), locale)
            .bright_blue()
            .bold()
    );
    println!();

    if entries.is_empty() {
        println!("  {}", messages::empty_history(locale).yellow());
        return;
    }

    let [number, time, link] = messages::history_columns(locale);
    println!(
        "  {:<21} {:<7} {}",
        number.bright_white().bold(),
        time.bright_white().bold(),
        link.bright_white().bold()
    );
    println!("  {}", "─".repeat(58).bright_black());

    for entry in entries {
        let time = entry
            .created_at_utc()
            .map(|t| t.with_timezone(&Local).format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string());

        println!(
            "  {:<21} {:<7} {}",
            entry.display_number.cyan(),
            time.bright_black(),
            entry.link
        );
    }
}

/// Prints every country with its dial code and rule summary.
fn list_countries(catalog: &CountryCatalog, locale: Locale) {
    println!("{}", "Countries".bright_blue().bold());
    println!();

    for country in catalog.countries() {
        let rule = match catalog.rule_for(&country.code) {
            Some(rule) if rule.prefixes().is_empty() => {
                format!("{} digits", format_length(rule.min, rule.max))
            }
            Some(rule) => format!(
                "{} digits, starts with {}",
                format_length(rule.min, rule.max),
                display_prefixes(rule.prefixes()).join("/")
            ),
            None => "generic (7-15 digits)".to_string(),
        };

        println!(
            "  {} {:<3} {:<6} {:<24} {}",
            country.flag,
            country.code.bright_white().bold(),
            country.dial_code.cyan(),
            locale.country_name(country),
            rule.bright_black()
        );
    }
}

const INTERACTIVE_HELP: &str = "\
  <number>        generate a link for the selected country
  :copy           print the current link for copying
  :open           print the current link to open
  :reset          forget the current link
  :country <CC>   switch country (e.g. :country SA or :country +966)
  :lang           toggle English / Arabic messages
  :history        show generated links
  :clear          delete all history
  :quit           exit";

/// Runs the prompt loop until `:quit` or end of input.
fn run_interactive(session: &mut Session) -> Result<()> {
    println!("{}", "WhatsApp Link Generator".bright_green().bold());
    println!("{}", "Type a number, or :help for commands".bright_black());
    println!();

    loop {
        let country = session.country();
        let prompt = format!("{} {}", country.flag, country.dial_code);
        let line: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let line = line.trim();

        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let outcome = match command {
            "" => continue,
            ":q" | ":quit" | ":exit" => break,
            ":help" | ":h" => {
                println!("{}", INTERACTIVE_HELP);
                Ok(())
            }
            ":copy" => session.copy_target().map(|link| println!("{}", link)),
            ":open" => session
                .open_target()
                .map(|link| println!("Open in WhatsApp: {}", link.bright_green())),
            ":reset" => {
                session.reset();
                println!("{}", "Cleared".bright_black());
                Ok(())
            }
            ":country" => {
                let selected = session.select_country(argument).map(|_| ());
                if selected.is_ok() {
                    let c = session.country();
                    println!(
                        "Selected {} {} {}",
                        c.flag,
                        session.locale().country_name(c),
                        c.dial_code
                    );
                }
                selected
            }
            ":lang" => {
                let locale = session.toggle_locale();
                println!("Language: {}", locale);
                Ok(())
            }
            ":history" => {
                print_history(session.history(), session.locale());
                Ok(())
            }
            ":clear" => {
                clear_history(session, false)?;
                Ok(())
            }
            _ => session
                .generate(line)
                .map(|link| println!("{} {}", "✓".green().bold(), link.bright_green())),
        };

        if let Err(e) = outcome {
            println!(
                "{} {}",
                "✗".red().bold(),
                messages::describe_error(&e, session.country(), session.locale()).red()
            );
        }
    }

    Ok(())
}
