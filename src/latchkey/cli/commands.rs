//! # CLI Layer
//!
//! This module is **one possible host** for latchkey. The browser pages were
//! another; both sit on the same `AccountDirectory` and `PreferenceStore`.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Decides exit codes
//! - Runs the registration form checks
//! - Acts on the next view an operation names
//!
//! ## Navigation
//!
//! A terminal has no pages to move between, so "navigating" to a view means
//! printing that view: its header, and what it shows. The home view shows the
//! account badge, the registration-success view shows the confirmation link,
//! the rest print a usage hint.
//!
//! ## Exit Codes
//!
//! - `0`: the operation succeeded or the view rendered
//! - `1`: a validation failure, a redirect away from a protected view,
//!   corruption found by `doctor` without `--reset`, or an error (printed as
//!   `Error: ...` by `main.rs`)
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory and loads configuration
//! - `handle_*()`: Per-command handlers that call the API and print results

use super::render::{
    print_badge, print_error, print_hint, print_link, print_messages, print_redirect,
    print_theme, print_view_header, Badge,
};
use super::setup::{AccountCommands, Cli, Commands, MiscCommands, SessionCommands, ThemeArg};
use clap::Parser;
use directories::ProjectDirs;
use latchkey::api::{AccountDirectory, CmdResult, ConfigAction, MessageLevel, PreferenceStore};
use latchkey::commands::{config, doctor, init, link};
use latchkey::config::LatchkeyConfig;
use latchkey::error::{LatchkeyError, Result};
use latchkey::forms::validate_registration;
use latchkey::model::Theme;
use latchkey::routes::{RouteDecision, View};
use latchkey::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LATCHKEY_LOG";

/// How a successfully executed command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// Validation failure or redirect; the process exits with status 1
    Rejected,
}

impl Outcome {
    fn from_result(result: &CmdResult) -> Self {
        if result.is_success() {
            Outcome::Done
        } else {
            Outcome::Rejected
        }
    }
}

struct AppContext {
    data_dir: PathBuf,
    config: LatchkeyConfig,
}

impl AppContext {
    fn directory(&self) -> Result<AccountDirectory<FileStore>> {
        AccountDirectory::open(self.store())
    }

    fn preferences(&self) -> PreferenceStore<FileStore> {
        PreferenceStore::with_default(self.store(), self.config.default_theme)
    }

    fn store(&self) -> FileStore {
        FileStore::new(self.data_dir.clone())
    }
}

pub fn run() -> Result<Outcome> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli)?;
    debug!(data_dir = %ctx.data_dir.display(), "context ready");

    match cli.command {
        Some(Commands::Account(cmd)) => match cmd {
            AccountCommands::Register {
                email,
                password,
                confirm_password,
            } => handle_register(&ctx, &email, &password, &confirm_password),
            AccountCommands::Confirm { token } => handle_confirm(&ctx, &token),
            AccountCommands::Link => handle_link(&ctx),
        },
        Some(Commands::Session(cmd)) => match cmd {
            SessionCommands::Login { email, password } => handle_login(&ctx, &email, &password),
            SessionCommands::Logout => handle_logout(&ctx),
            SessionCommands::Whoami => handle_whoami(&ctx),
            SessionCommands::Open { view } => handle_open(&ctx, &view),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Theme { action } => handle_theme(&ctx, action),
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Doctor { reset } => handle_doctor(&ctx, reset),
            MiscCommands::Init => handle_init(&ctx),
        },
        None => handle_whoami(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "latchkey=debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "latchkey", "latchkey")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                LatchkeyError::Config(
                    "Could not determine a data directory, pass --data-dir".to_string(),
                )
            })?,
    };
    let config = LatchkeyConfig::load(&data_dir)?;
    Ok(AppContext { data_dir, config })
}

fn handle_register(
    ctx: &AppContext,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<Outcome> {
    if let Err(e) = validate_registration(password, confirm_password, ctx.config.min_password_length)
    {
        print_error(&e.to_string());
        return Ok(Outcome::Rejected);
    }

    // Checked before saving: the link is the only place the token is shown.
    link::check_origin(&ctx.config.origin).map_err(|e| {
        LatchkeyError::Config(format!(
            "Invalid origin '{}': {}. Fix it with `latchkey config origin URL`",
            ctx.config.origin, e
        ))
    })?;

    let mut dir = ctx.directory()?;
    let result = dir.register(email, password)?;
    print_messages(&result.messages);

    if let Some(token) = &result.confirmation_token {
        let url = link::build(&ctx.config.origin, token)?;
        link::save(dir.store_mut(), &url)?;
    }

    navigate(ctx, &dir, &result)?;
    Ok(Outcome::from_result(&result))
}

fn handle_confirm(ctx: &AppContext, input: &str) -> Result<Outcome> {
    let token = link::token_from_input(input);
    let mut dir = ctx.directory()?;
    let result = dir.confirm_email(&token)?;
    print_messages(&result.messages);
    navigate(ctx, &dir, &result)?;
    Ok(Outcome::from_result(&result))
}

fn handle_link(ctx: &AppContext) -> Result<Outcome> {
    match link::load(&ctx.store())? {
        Some(url) => {
            print_link(&url);
            Ok(Outcome::Done)
        }
        None => {
            print_error("No confirmation link yet. Register first.");
            Ok(Outcome::Rejected)
        }
    }
}

fn handle_login(ctx: &AppContext, email: &str, password: &str) -> Result<Outcome> {
    let mut dir = ctx.directory()?;
    let result = dir.login(email, password)?;
    print_messages(&result.messages);
    navigate(ctx, &dir, &result)?;
    Ok(Outcome::from_result(&result))
}

fn handle_logout(ctx: &AppContext) -> Result<Outcome> {
    let mut dir = ctx.directory()?;
    let result = dir.logout()?;
    print_messages(&result.messages);
    navigate(ctx, &dir, &result)?;
    Ok(Outcome::from_result(&result))
}

fn handle_whoami(ctx: &AppContext) -> Result<Outcome> {
    let dir = ctx.directory()?;
    print_badge(&badge(&dir));
    Ok(Outcome::Done)
}

fn handle_open(ctx: &AppContext, view: &str) -> Result<Outcome> {
    let target: View = match view.parse() {
        Ok(target) => target,
        Err(message) => {
            print_error(&message);
            return Ok(Outcome::Rejected);
        }
    };

    let dir = ctx.directory()?;
    match dir.guard(target) {
        RouteDecision::Render(view) => {
            show_view(ctx, &dir, view)?;
            Ok(Outcome::Done)
        }
        RouteDecision::Redirect(to) => {
            print_redirect(target, to);
            show_view(ctx, &dir, to)?;
            Ok(Outcome::Rejected)
        }
    }
}

fn handle_theme(ctx: &AppContext, action: Option<ThemeArg>) -> Result<Outcome> {
    let mut prefs = ctx.preferences();
    let theme = match action {
        None => prefs.theme()?,
        Some(ThemeArg::Toggle) => prefs.toggle_theme()?,
        Some(ThemeArg::Light) => set_theme(&mut prefs, Theme::Light)?,
        Some(ThemeArg::Dark) => set_theme(&mut prefs, Theme::Dark)?,
    };
    print_theme(theme);
    Ok(Outcome::Done)
}

fn set_theme(prefs: &mut PreferenceStore<FileStore>, theme: Theme) -> Result<Theme> {
    prefs.set_theme(theme)?;
    Ok(theme)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<Outcome> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = config::run(&ctx.data_dir, action)?;
    print_messages(&result.messages);
    Ok(if has_errors(&result) {
        Outcome::Rejected
    } else {
        Outcome::Done
    })
}

fn handle_doctor(ctx: &AppContext, reset: bool) -> Result<Outcome> {
    let mut store = ctx.store();
    let corrupted = !doctor::check(&store)?.corrupted_keys.is_empty();
    let result = doctor::run(&mut store, reset)?;
    print_messages(&result.messages);
    Ok(if corrupted && !reset {
        Outcome::Rejected
    } else {
        Outcome::Done
    })
}

fn handle_init(ctx: &AppContext) -> Result<Outcome> {
    let result = init::run(&ctx.data_dir)?;
    print_messages(&result.messages);
    Ok(Outcome::Done)
}

/// Moves to the view a result names, if any.
fn navigate(
    ctx: &AppContext,
    dir: &AccountDirectory<FileStore>,
    result: &CmdResult,
) -> Result<()> {
    match result.next_view {
        Some(view) => show_view(ctx, dir, view),
        None => Ok(()),
    }
}

fn show_view(ctx: &AppContext, dir: &AccountDirectory<FileStore>, view: View) -> Result<()> {
    print_view_header(view);
    match view {
        View::Home => {
            print_badge(&badge(dir));
            print_theme(ctx.preferences().theme()?);
        }
        View::RegistrationSuccess => match link::load(dir.store())? {
            Some(url) => print_link(&url),
            None => print_hint(view),
        },
        other => print_hint(other),
    }
    Ok(())
}

fn badge(dir: &AccountDirectory<FileStore>) -> Badge {
    Badge {
        initial: dir.user_initial(),
        email: dir.user_email(),
        authenticated: dir.is_authenticated(),
        created_at: dir.current_account().map(|a| a.created_at),
    }
}

fn has_errors(result: &CmdResult) -> bool {
    result
        .messages
        .iter()
        .any(|m| matches!(m.level, MessageLevel::Error))
}
