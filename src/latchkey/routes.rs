//! # Views and Route Protection
//!
//! The core never navigates. Operations name the [`View`] a host should show
//! next, and [`guard`] tells the host whether a requested view may render.
//!
//! Policy: a protected view renders only for an authenticated session,
//! otherwise the host is sent to [`View::Login`]. The login and registration
//! views are never redirected.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
    RegistrationSuccess,
    Confirm,
}

impl View {
    pub fn requires_auth(&self) -> bool {
        matches!(self, View::Home)
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Login => "login",
            View::Register => "register",
            View::RegistrationSuccess => "registration-success",
            View::Confirm => "confirm",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = String;

    /// Accepts view names as well as the page paths of the browser version
    /// (`index.html`, `/`, `login.html`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let page = s.rsplit('/').next().unwrap_or(s);
        let page = page.strip_suffix(".html").unwrap_or(page);
        match page {
            "" | "home" | "index" => Ok(View::Home),
            "login" => Ok(View::Login),
            "register" => Ok(View::Register),
            "registration-success" => Ok(View::RegistrationSuccess),
            "confirm" => Ok(View::Confirm),
            other => Err(format!("Unknown view: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render(View),
    Redirect(View),
}

pub fn guard(target: View, authenticated: bool) -> RouteDecision {
    if target.requires_auth() && !authenticated {
        RouteDecision::Redirect(View::Login)
    } else {
        RouteDecision::Render(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_view_redirects_when_signed_out() {
        assert_eq!(guard(View::Home, false), RouteDecision::Redirect(View::Login));
        assert_eq!(guard(View::Home, true), RouteDecision::Render(View::Home));
    }

    #[test]
    fn public_views_always_render() {
        for view in [
            View::Login,
            View::Register,
            View::RegistrationSuccess,
            View::Confirm,
        ] {
            assert_eq!(guard(view, false), RouteDecision::Render(view));
            assert_eq!(guard(view, true), RouteDecision::Render(view));
        }
    }

    #[test]
    fn parses_names_and_page_paths() {
        assert_eq!("home".parse::<View>().unwrap(), View::Home);
        assert_eq!("/".parse::<View>().unwrap(), View::Home);
        assert_eq!("index.html".parse::<View>().unwrap(), View::Home);
        assert_eq!("/app/login.html".parse::<View>().unwrap(), View::Login);
        assert_eq!("register".parse::<View>().unwrap(), View::Register);
        assert_eq!(
            "registration-success.html".parse::<View>().unwrap(),
            View::RegistrationSuccess
        );
        assert!("settings".parse::<View>().is_err());
    }
}
