//! Session State Machine
//!
//! Decides what happens to the session on login, logout, token refresh and
//! storage changes made by other tabs. The machine is pure: it returns
//! [`SessionEffect`]s and the caller performs them (timers, fetches,
//! redirects).

use crate::storage::{TOKEN_KEY, USER_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated,
}

/// A `storage` event from another tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageChange {
    /// `None` when the other tab cleared all storage
    pub key: Option<String>,
    pub new_value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeKind {
    TokenSet,
    TokenRemoved,
    Cleared,
    User,
    Unrelated,
}

impl StorageChange {
    fn kind(&self) -> ChangeKind {
        match self.key.as_deref() {
            None => ChangeKind::Cleared,
            Some(TOKEN_KEY) => match self.new_value.as_deref() {
                Some(value) if !value.is_empty() => ChangeKind::TokenSet,
                _ => ChangeKind::TokenRemoved,
            },
            Some(USER_KEY) => ChangeKind::User,
            Some(_) => ChangeKind::Unrelated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// App start; `has_token` reflects persisted storage
    Restored { has_token: bool },
    /// Login, registration or accepted invitation in this tab
    LoggedIn,
    RefreshSucceeded,
    RefreshFailed,
    LoggedOut,
    StorageChanged(StorageChange),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEffect {
    StartRefreshTimer,
    StopRefreshTimer,
    LoadOrganization,
    /// Re-read the stored user into shared state
    ReloadUser,
    /// Drop user and organization from shared state
    ResetState,
    RedirectToLogin,
}

#[derive(Debug, Clone, Default)]
pub struct SessionMachine {
    state: SessionState,
}

impl SessionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    pub fn handle(&mut self, event: SessionEvent) -> Vec<SessionEffect> {
        use SessionEffect::*;
        use SessionState::*;

        let (next, effects) = match (self.state, event) {
            (_, SessionEvent::Restored { has_token: true }) => {
                (Authenticated, vec![StartRefreshTimer, LoadOrganization, ReloadUser])
            }
            (_, SessionEvent::Restored { has_token: false }) => (Unauthenticated, vec![]),

            (state, SessionEvent::LoggedIn) => (Authenticated, Self::login_effects(state)),

            (Authenticated, SessionEvent::RefreshSucceeded) => (Authenticated, vec![]),
            (Authenticated, SessionEvent::RefreshFailed) => (Unauthenticated, vec![StopRefreshTimer]),

            (Authenticated, SessionEvent::LoggedOut) => {
                (Unauthenticated, vec![StopRefreshTimer, ResetState, RedirectToLogin])
            }
            (Unauthenticated, SessionEvent::LoggedOut) => (Unauthenticated, vec![ResetState, RedirectToLogin]),

            (state, SessionEvent::StorageChanged(change)) => match (state, change.kind()) {
                (state, ChangeKind::TokenSet) => (Authenticated, Self::login_effects(state)),
                (Authenticated, ChangeKind::TokenRemoved | ChangeKind::Cleared) => {
                    (Unauthenticated, vec![StopRefreshTimer, ResetState])
                }
                (Authenticated, ChangeKind::User) => (Authenticated, vec![ReloadUser]),
                (state, _) => (state, vec![]),
            },

            // A refresh that resolves after logout
            (Unauthenticated, SessionEvent::RefreshSucceeded | SessionEvent::RefreshFailed) => {
                (Unauthenticated, vec![])
            }
        };

        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "session state changed");
        }
        self.state = next;
        effects
    }

    fn login_effects(from: SessionState) -> Vec<SessionEffect> {
        match from {
            SessionState::Unauthenticated => vec![
                SessionEffect::StartRefreshTimer,
                SessionEffect::LoadOrganization,
                SessionEffect::ReloadUser,
            ],
            SessionState::Authenticated => vec![SessionEffect::LoadOrganization, SessionEffect::ReloadUser],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use SessionEffect::*;

    fn storage_event(key: Option<&str>, value: Option<&str>) -> SessionEvent {
        SessionEvent::StorageChanged(StorageChange {
            key: key.map(Into::into),
            new_value: value.map(Into::into),
        })
    }

    fn authenticated() -> SessionMachine {
        let mut machine = SessionMachine::new();
        machine.handle(SessionEvent::Restored { has_token: true });
        machine
    }

    #[test]
    fn test_restore_with_token_starts_timer() {
        let mut machine = SessionMachine::new();
        let effects = machine.handle(SessionEvent::Restored { has_token: true });
        assert_eq!(effects, vec![StartRefreshTimer, LoadOrganization, ReloadUser]);
        assert!(machine.is_authenticated());
    }

    #[test]
    fn test_restore_without_token_stays_out() {
        let mut machine = SessionMachine::new();
        assert!(machine.handle(SessionEvent::Restored { has_token: false }).is_empty());
        assert_eq!(machine.state(), SessionState::Unauthenticated);
    }

    #[test]
    fn test_login_starts_timer_once() {
        let mut machine = SessionMachine::new();
        assert_eq!(
            machine.handle(SessionEvent::LoggedIn),
            vec![StartRefreshTimer, LoadOrganization, ReloadUser]
        );
        assert_eq!(machine.handle(SessionEvent::LoggedIn), vec![LoadOrganization, ReloadUser]);
    }

    #[test]
    fn test_refresh_failure_stops_timer() {
        let mut machine = authenticated();
        assert!(machine.handle(SessionEvent::RefreshSucceeded).is_empty());
        assert_eq!(machine.handle(SessionEvent::RefreshFailed), vec![StopRefreshTimer]);
        assert!(!machine.is_authenticated());
    }

    #[test]
    fn test_stale_refresh_after_logout_is_ignored() {
        let mut machine = authenticated();
        machine.handle(SessionEvent::LoggedOut);
        assert!(machine.handle(SessionEvent::RefreshSucceeded).is_empty());
        assert!(machine.handle(SessionEvent::RefreshFailed).is_empty());
        assert!(!machine.is_authenticated());
    }

    #[test]
    fn test_logout() {
        let mut machine = authenticated();
        assert_eq!(
            machine.handle(SessionEvent::LoggedOut),
            vec![StopRefreshTimer, ResetState, RedirectToLogin]
        );
        assert_eq!(machine.handle(SessionEvent::LoggedOut), vec![ResetState, RedirectToLogin]);
    }

    #[test]
    fn test_other_tab_logs_in() {
        let mut machine = SessionMachine::new();
        let effects = machine.handle(storage_event(Some("token"), Some("new-token")));
        assert_eq!(effects, vec![StartRefreshTimer, LoadOrganization, ReloadUser]);
        assert!(machine.is_authenticated());
    }

    #[test]
    fn test_other_tab_logs_out() {
        let mut machine = authenticated();
        assert_eq!(machine.handle(storage_event(Some("token"), None)), vec![StopRefreshTimer, ResetState]);

        let mut machine = authenticated();
        assert_eq!(machine.handle(storage_event(None, None)), vec![StopRefreshTimer, ResetState]);
    }

    #[test]
    fn test_user_and_unrelated_keys() {
        let mut machine = authenticated();
        assert_eq!(machine.handle(storage_event(Some("user"), Some("{}"))), vec![ReloadUser]);
        assert!(machine.handle(storage_event(Some("theme"), Some("dark"))).is_empty());

        let mut machine = SessionMachine::new();
        assert!(machine.handle(storage_event(Some("user"), Some("{}"))).is_empty());
        assert!(machine.handle(storage_event(Some("token"), Some(""))).is_empty());
        assert!(!machine.is_authenticated());
    }
}
