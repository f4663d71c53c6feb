use chrono::{DateTime, Utc};
use colored::Colorize;
use latchkey::api::{CmdMessage, MessageLevel};
use latchkey::model::Theme;
use latchkey::routes::View;
use timeago::Formatter;

/// What the home view shows for the signed-in account.
pub(super) struct Badge {
    pub initial: String,
    pub email: String,
    pub authenticated: bool,
    pub created_at: Option<DateTime<Utc>>,
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_error(message: &str) {
    println!("{}", message.red());
}

pub(super) fn print_view_header(view: View) {
    println!("{}", format!("[{}]", view.name()).bold());
}

pub(super) fn print_redirect(from: View, to: View) {
    println!(
        "{}",
        format!("{} requires login, redirecting to {}", from, to).yellow()
    );
}

pub(super) fn print_badge(badge: &Badge) {
    println!("{} {}", format!("({})", badge.initial).bold(), badge.email);
    if !badge.authenticated {
        println!("{}", "Not logged in.".dimmed());
    }
    if let Some(created_at) = badge.created_at {
        println!("{}", format!("registered {}", format_time_ago(created_at)).dimmed());
    }
}

pub(super) fn print_link(link: &str) {
    println!("Confirmation link: {}", link.cyan().underline());
}

pub(super) fn print_hint(view: View) {
    let hint = match view {
        View::Home => return,
        View::Login => "Log in with: latchkey login EMAIL PASSWORD",
        View::Register => "Register with: latchkey register EMAIL PASSWORD CONFIRM",
        View::RegistrationSuccess => "Check your email (or run `latchkey link`) to confirm.",
        View::Confirm => "Confirm with: latchkey confirm TOKEN_OR_LINK",
    };
    println!("{}", hint.dimmed());
}

pub(super) fn print_theme(theme: Theme) {
    println!("Theme: {}", theme.as_str().bold());
    println!("{}", format!("Toggle: {}", theme.toggle_label()).dimmed());
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
