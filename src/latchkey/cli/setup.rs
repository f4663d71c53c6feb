use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "latchkey", bin_name = "latchkey", version)]
#[command(
    about = "Local mock accounts: register, confirm, log in, and keep a theme preference",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the store (defaults to the user data directory)
    #[arg(long, global = true, env = "LATCHKEY_HOME", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Account(AccountCommands),

    #[command(flatten)]
    Session(SessionCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Register a new account (prints the confirmation link)
    #[command(display_order = 1)]
    Register {
        email: String,
        password: String,
        /// Password again
        confirm_password: String,
    },

    /// Confirm an email with a token or a confirmation link
    #[command(display_order = 2)]
    Confirm {
        /// Token, or the full link printed by `register`
        token: String,
    },

    /// Print the most recent confirmation link
    #[command(display_order = 3)]
    Link,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Log in to a confirmed account
    #[command(display_order = 10)]
    Login { email: String, password: String },

    /// Log out of the current session
    #[command(display_order = 11)]
    Logout,

    /// Show the signed-in account
    #[command(display_order = 12)]
    Whoami,

    /// Open a view, redirecting to login if it is protected (exit 1 on redirect)
    #[command(display_order = 13)]
    Open {
        /// home, login, register, registration-success, confirm (or a page path like index.html)
        view: String,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Toggle,
    Light,
    Dark,
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Show, toggle or set the theme
    #[command(display_order = 20)]
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeArg>,
    },

    /// Get or set configuration
    #[command(display_order = 21)]
    Config {
        /// Configuration key (origin, min-password-length, default-theme)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Check stored values and optionally reset corrupted ones
    #[command(display_order = 22)]
    Doctor {
        /// Remove values that cannot be decoded
        #[arg(long)]
        reset: bool,
    },

    /// Initialize the store directory
    #[command(display_order = 23)]
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_register() {
        let cli = Cli::try_parse_from(["latchkey", "register", "a@x.com", "pw1", "pw2"]).unwrap();
        match cli.command {
            Some(Commands::Account(AccountCommands::Register {
                email,
                password,
                confirm_password,
            })) => {
                assert_eq!(email, "a@x.com");
                assert_eq!(password, "pw1");
                assert_eq!(confirm_password, "pw2");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn register_requires_confirmation() {
        assert!(Cli::try_parse_from(["latchkey", "register", "a@x.com", "pw1"]).is_err());
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["latchkey", "whoami", "--data-dir", "/tmp/lk", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/lk")));
    }

    #[test]
    fn parses_theme_actions() {
        let cli = Cli::try_parse_from(["latchkey", "theme", "toggle"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Misc(MiscCommands::Theme {
                action: Some(ThemeArg::Toggle)
            }))
        ));

        let cli = Cli::try_parse_from(["latchkey", "theme"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Misc(MiscCommands::Theme { action: None }))
        ));

        assert!(Cli::try_parse_from(["latchkey", "theme", "blue"]).is_err());
    }

    #[test]
    fn parses_doctor_reset() {
        let cli = Cli::try_parse_from(["latchkey", "doctor", "--reset"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Misc(MiscCommands::Doctor { reset: true }))
        ));
    }
}
