//! Page routing state machine
//!
//! ```text
//! LoggedOut(Login) --valid login--------> LoggedIn(Dashboard)
//! LoggedOut(Login) <--register ok-------- LoggedOut(Register)
//! LoggedIn(*)      --menu item----------> LoggedIn(target)
//! LoggedIn(*)      --logout-------------> LoggedOut(Login)
//! ```
//!
//! [`route`] is pure apart from the credential provider: it never touches
//! the current state, and a rejected action leaves the caller's state as is.

use crate::auth::AuthenticationProvider;
use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Pages reachable without logging in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublicPage {
    Login,
    Register,
}

/// Pages behind the login gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberPage {
    Dashboard,
    Appliances,
    Analytics,
    Scheduling,
    Report,
}

/// Every page a session can rest on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Login,
    Register,
    Dashboard,
    Appliances,
    Analytics,
    Scheduling,
    Report,
}

impl Page {
    /// Translation key of the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            Page::Login => "page.login",
            Page::Register => "page.register",
            Page::Dashboard => "page.dashboard",
            Page::Appliances => "page.appliances",
            Page::Analytics => "page.analytics",
            Page::Scheduling => "page.scheduling",
            Page::Report => "page.report",
        }
    }

    pub fn requires_login(&self) -> bool {
        !matches!(self, Page::Login | Page::Register)
    }
}

impl From<PublicPage> for Page {
    fn from(page: PublicPage) -> Self {
        match page {
            PublicPage::Login => Page::Login,
            PublicPage::Register => Page::Register,
        }
    }
}

impl From<MemberPage> for Page {
    fn from(page: MemberPage) -> Self {
        match page {
            MemberPage::Dashboard => Page::Dashboard,
            MemberPage::Appliances => Page::Appliances,
            MemberPage::Analytics => Page::Analytics,
            MemberPage::Scheduling => Page::Scheduling,
            MemberPage::Report => Page::Report,
        }
    }
}

/// Sidebar entries shown to a logged-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuItem {
    Dashboard,
    Appliances,
    Analytics,
    Scheduling,
    Report,
    Logout,
}

impl MenuItem {
    pub const ALL: [MenuItem; 6] = [
        MenuItem::Dashboard,
        MenuItem::Appliances,
        MenuItem::Analytics,
        MenuItem::Scheduling,
        MenuItem::Report,
        MenuItem::Logout,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dashboard" | "home" => Some(MenuItem::Dashboard),
            "appliances" | "devices" => Some(MenuItem::Appliances),
            "analytics" => Some(MenuItem::Analytics),
            "scheduling" | "schedule" => Some(MenuItem::Scheduling),
            "report" => Some(MenuItem::Report),
            "logout" => Some(MenuItem::Logout),
            _ => None,
        }
    }

    /// Page the item leads to; `None` for logout
    pub fn target(&self) -> Option<MemberPage> {
        match self {
            MenuItem::Dashboard => Some(MemberPage::Dashboard),
            MenuItem::Appliances => Some(MemberPage::Appliances),
            MenuItem::Analytics => Some(MemberPage::Analytics),
            MenuItem::Scheduling => Some(MemberPage::Scheduling),
            MenuItem::Report => Some(MemberPage::Report),
            MenuItem::Logout => None,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            MenuItem::Dashboard => "nav.dashboard",
            MenuItem::Appliances => "nav.appliances",
            MenuItem::Analytics => "nav.analytics",
            MenuItem::Scheduling => "nav.scheduling",
            MenuItem::Report => "nav.report",
            MenuItem::Logout => "nav.logout",
        }
    }
}

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SubmitLogin { username: String, password: String },
    SubmitRegistration { username: String, password: String },
    ShowRegister,
    ShowLogin,
    Select(MenuItem),
}

impl Action {
    pub fn login(username: &str, password: &str) -> Self {
        Action::SubmitLogin {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn register(username: &str, password: &str) -> Self {
        Action::SubmitRegistration {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Authentication and navigation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut(PublicPage),
    LoggedIn { username: String, page: MemberPage },
}

impl SessionState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, SessionState::LoggedIn { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            SessionState::LoggedIn { username, .. } => Some(username),
            SessionState::LoggedOut(_) => None,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            SessionState::LoggedOut(page) => (*page).into(),
            SessionState::LoggedIn { page, .. } => (*page).into(),
        }
    }

    /// Flat view of the state
    pub fn flags(&self) -> SessionFlags {
        SessionFlags {
            logged_in: self.is_logged_in(),
            username: self.username().unwrap_or_default().to_string(),
            current_page: self.page(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::LoggedOut(PublicPage::Login)
    }
}

/// Flat session flags as exposed to front ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlags {
    pub logged_in: bool,
    pub username: String,
    pub current_page: Page,
}

impl TryFrom<SessionFlags> for SessionState {
    type Error = Error;

    /// Rejects flag combinations that no reachable state produces
    fn try_from(flags: SessionFlags) -> Result<Self> {
        if !flags.logged_in {
            return match flags.current_page {
                Page::Login => Ok(SessionState::LoggedOut(PublicPage::Login)),
                Page::Register => Ok(SessionState::LoggedOut(PublicPage::Register)),
                other => Err(Error::Auth(format!("{:?} requires a logged-in session", other))),
            };
        }

        if flags.username.is_empty() {
            return Err(Error::Validation("Logged-in session without a username".to_string()));
        }

        let page = match flags.current_page {
            Page::Login | Page::Register => {
                return Err(Error::Validation(format!(
                    "Logged-in session cannot rest on {:?}",
                    flags.current_page
                )))
            }
            Page::Dashboard => MemberPage::Dashboard,
            Page::Appliances => MemberPage::Appliances,
            Page::Analytics => MemberPage::Analytics,
            Page::Scheduling => MemberPage::Scheduling,
            Page::Report => MemberPage::Report,
        };

        Ok(SessionState::LoggedIn {
            username: flags.username,
            page,
        })
    }
}

/// Success messages raised by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    LoggedIn,
    Registered,
    LoggedOut,
}

impl Notice {
    pub fn message_key(&self) -> &'static str {
        match self {
            Notice::LoggedIn => "notice.logged_in",
            Notice::Registered => "notice.registered",
            Notice::LoggedOut => "notice.logged_out",
        }
    }
}

/// Result of a successful action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub notice: Option<Notice>,
}

impl Transition {
    fn to(state: SessionState) -> Self {
        Self { state, notice: None }
    }

    fn with_notice(state: SessionState, notice: Notice) -> Self {
        Self {
            state,
            notice: Some(notice),
        }
    }

    pub fn page(&self) -> Page {
        self.state.page()
    }
}

/// Compute the next state for `action`
pub fn route<A>(state: &SessionState, action: Action, auth: &mut A) -> Result<Transition>
where
    A: AuthenticationProvider + ?Sized,
{
    match (state, action) {
        (SessionState::LoggedOut(PublicPage::Login), Action::SubmitLogin { username, password }) => {
            let (username, password) = required_credentials(&username, &password)?;

            if !auth.verify(username, password) {
                log::warn!("Rejected login for '{}'", username);
                return Err(Error::Auth("Invalid username or password".to_string()));
            }

            log::info!("User '{}' logged in", username);
            Ok(Transition::with_notice(
                SessionState::LoggedIn {
                    username: username.to_string(),
                    page: MemberPage::Dashboard,
                },
                Notice::LoggedIn,
            ))
        }

        (SessionState::LoggedOut(PublicPage::Login), Action::ShowRegister) => {
            Ok(Transition::to(SessionState::LoggedOut(PublicPage::Register)))
        }

        (SessionState::LoggedOut(PublicPage::Register), Action::SubmitRegistration { username, password }) => {
            let (username, password) = required_credentials(&username, &password)?;

            auth.register(username, password).map_err(|e| {
                log::warn!("Registration for '{}' rejected: {}", username, e);
                e
            })?;

            log::info!("Registered user '{}'", username);
            Ok(Transition::with_notice(
                SessionState::LoggedOut(PublicPage::Login),
                Notice::Registered,
            ))
        }

        (SessionState::LoggedOut(PublicPage::Register), Action::ShowLogin) => {
            Ok(Transition::to(SessionState::LoggedOut(PublicPage::Login)))
        }

        // Form actions for the other public page are ignored
        (SessionState::LoggedOut(page), Action::SubmitLogin { .. } | Action::SubmitRegistration { .. } | Action::ShowRegister | Action::ShowLogin) => {
            Ok(Transition::to(SessionState::LoggedOut(*page)))
        }

        (SessionState::LoggedOut(_), Action::Select(item)) => {
            log::warn!("Menu item {:?} selected without a logged-in session", item);
            Err(Error::Auth("Please log in to continue".to_string()))
        }

        (SessionState::LoggedIn { username, .. }, Action::Select(item)) => match item.target() {
            Some(page) => {
                log::debug!("'{}' navigated to {:?}", username, page);
                Ok(Transition::to(SessionState::LoggedIn {
                    username: username.clone(),
                    page,
                }))
            }
            None => {
                log::info!("User '{}' logged out", username);
                Ok(Transition::with_notice(
                    SessionState::LoggedOut(PublicPage::Login),
                    Notice::LoggedOut,
                ))
            }
        },

        // Login and registration forms are not shown to a logged-in user
        (SessionState::LoggedIn { .. }, _) => Ok(Transition::to(state.clone())),
    }
}

/// Trim the username and reject empty fields
fn required_credentials<'a>(username: &'a str, password: &'a str) -> Result<(&'a str, &'a str)> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(Error::Validation("Please enter username and password".to_string()));
    }
    Ok((username, password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::InMemoryCredentials;

    fn logged_in(page: MemberPage) -> SessionState {
        SessionState::LoggedIn {
            username: "alice".to_string(),
            page,
        }
    }

    #[test]
    fn test_initial_state_is_login() {
        let state = SessionState::default();
        assert_eq!(state.page(), Page::Login);
        assert!(!state.is_logged_in());
        assert_eq!(state.flags().username, "");
    }

    #[test]
    fn test_unregistered_login_is_auth_error() {
        let mut auth = InMemoryCredentials::new();
        let state = SessionState::default();

        let err = route(&state, Action::login("alice", "secret"), &mut auth).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
        assert_eq!(state, SessionState::default());
    }

    #[test]
    fn test_empty_fields_are_validation_errors() {
        let mut auth = InMemoryCredentials::new();
        let login = SessionState::default();
        let register = SessionState::LoggedOut(PublicPage::Register);

        assert!(matches!(route(&login, Action::login("", "secret"), &mut auth), Err(Error::Validation(_))));
        assert!(matches!(route(&login, Action::login("   ", "secret"), &mut auth), Err(Error::Validation(_))));
        assert!(matches!(route(&login, Action::login("alice", ""), &mut auth), Err(Error::Validation(_))));
        assert!(matches!(route(&register, Action::register("alice", ""), &mut auth), Err(Error::Validation(_))));
        assert!(auth.is_empty());
    }

    #[test]
    fn test_register_then_login() {
        let mut auth = InMemoryCredentials::new();

        let t = route(&SessionState::default(), Action::ShowRegister, &mut auth).unwrap();
        assert_eq!(t.page(), Page::Register);

        let t = route(&t.state, Action::register("alice", "secret"), &mut auth).unwrap();
        assert_eq!(t.page(), Page::Login);
        assert_eq!(t.notice, Some(Notice::Registered));

        let t = route(&t.state, Action::login("alice", "secret"), &mut auth).unwrap();
        assert_eq!(t.state, logged_in(MemberPage::Dashboard));
        assert_eq!(t.notice, Some(Notice::LoggedIn));
    }

    #[test]
    fn test_duplicate_registration_is_conflict() {
        let mut auth = InMemoryCredentials::new();
        let register = SessionState::LoggedOut(PublicPage::Register);

        route(&register, Action::register("alice", "secret"), &mut auth).unwrap();
        let err = route(&register, Action::register("alice", "other"), &mut auth).unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[test]
    fn test_username_is_trimmed() {
        let mut auth = InMemoryCredentials::new();
        let register = SessionState::LoggedOut(PublicPage::Register);
        route(&register, Action::register("  alice ", "secret"), &mut auth).unwrap();

        let t = route(&SessionState::default(), Action::login("alice", "secret"), &mut auth).unwrap();
        assert_eq!(t.state.username(), Some("alice"));
    }

    #[test]
    fn test_register_back_to_login() {
        let mut auth = InMemoryCredentials::new();
        let t = route(&SessionState::LoggedOut(PublicPage::Register), Action::ShowLogin, &mut auth).unwrap();
        assert_eq!(t.page(), Page::Login);
    }

    #[test]
    fn test_menu_navigation() {
        let mut auth = InMemoryCredentials::new();
        let mut state = logged_in(MemberPage::Dashboard);

        for (item, page) in [
            (MenuItem::Appliances, Page::Appliances),
            (MenuItem::Analytics, Page::Analytics),
            (MenuItem::Scheduling, Page::Scheduling),
            (MenuItem::Report, Page::Report),
            (MenuItem::Dashboard, Page::Dashboard),
        ] {
            state = route(&state, Action::Select(item), &mut auth).unwrap().state;
            assert_eq!(state.page(), page);
            assert_eq!(state.username(), Some("alice"));
        }
    }

    #[test]
    fn test_logout_clears_user() {
        let mut auth = InMemoryCredentials::new();
        let t = route(&logged_in(MemberPage::Report), Action::Select(MenuItem::Logout), &mut auth).unwrap();

        assert_eq!(t.state, SessionState::LoggedOut(PublicPage::Login));
        assert_eq!(t.notice, Some(Notice::LoggedOut));
        let flags = t.state.flags();
        assert!(!flags.logged_in);
        assert!(flags.username.is_empty());
    }

    #[test]
    fn test_menu_requires_login() {
        let mut auth = InMemoryCredentials::new();
        let err = route(&SessionState::default(), Action::Select(MenuItem::Analytics), &mut auth).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn test_public_actions_ignored_when_logged_in() {
        let mut auth = InMemoryCredentials::new();
        let state = logged_in(MemberPage::Analytics);

        let t = route(&state, Action::ShowRegister, &mut auth).unwrap();
        assert_eq!(t.state, state);
        let t = route(&state, Action::login("bob", "pw"), &mut auth).unwrap();
        assert_eq!(t.state, state);
    }

    #[test]
    fn test_flags_conversion_enforces_invariant() {
        let bad = SessionFlags {
            logged_in: false,
            username: String::new(),
            current_page: Page::Report,
        };
        assert!(SessionState::try_from(bad).is_err());

        for page in [Page::Login, Page::Register] {
            let stuck = SessionFlags {
                logged_in: true,
                username: "alice".into(),
                current_page: page,
            };
            assert!(matches!(SessionState::try_from(stuck), Err(Error::Validation(_))));
        }

        let good = logged_in(MemberPage::Scheduling).flags();
        assert_eq!(SessionState::try_from(good).unwrap(), logged_in(MemberPage::Scheduling));
    }

    #[test]
    fn test_only_public_pages_skip_login() {
        assert!(!Page::Login.requires_login());
        assert!(!Page::Register.requires_login());
        for item in MenuItem::ALL {
            if let Some(target) = item.target() {
                assert!(Page::from(target).requires_login());
            }
        }
    }

    #[test]
    fn test_menu_item_parse() {
        assert_eq!(MenuItem::parse("Home"), Some(MenuItem::Dashboard));
        assert_eq!(MenuItem::parse("devices"), Some(MenuItem::Appliances));
        assert_eq!(MenuItem::parse("LOGOUT"), Some(MenuItem::Logout));
        assert_eq!(MenuItem::parse("settings"), None);
    }
}
