//! Session/auth shell: token custody and the login/register tab pair.

use taskdeck_client::SessionToken;

/// Tabs shown while unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    /// Credential entry; the default tab.
    #[default]
    Login,
    /// Account creation.
    Register,
}

/// What the shell currently renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellView {
    /// Unauthenticated: the auth forms, with the given tab active.
    Auth(AuthTab),
    /// Authenticated: the task workspace.
    Workspace,
}

/// Holds at most one active session token and the auth tab selection.
///
/// Once a token is stored the shell renders the workspace unconditionally;
/// there is no logout, refresh, or expiry handling, so the token is trusted
/// for the rest of the session.
#[derive(Debug, Default)]
pub struct SessionShell {
    token: Option<SessionToken>,
    auth_tab: AuthTab,
}

impl SessionShell {
    /// Fresh shell: no token, login tab active.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently rendered view.
    #[must_use]
    pub const fn view(&self) -> ShellView {
        if self.token.is_some() {
            ShellView::Workspace
        } else {
            ShellView::Auth(self.auth_tab)
        }
    }

    /// Active session token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// Switch between the login and register tabs. Purely local; has no
    /// effect on any stored token.
    pub const fn select_tab(&mut self, tab: AuthTab) {
        self.auth_tab = tab;
    }

    /// Store the token obtained from a successful login and switch to the
    /// workspace for the remainder of the session.
    pub fn complete_login(&mut self, token: SessionToken) {
        self.token = Some(token);
    }

    /// A registration succeeded: return to the login tab without touching
    /// any token.
    pub const fn complete_registration(&mut self) {
        self.auth_tab = AuthTab::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated_on_login_tab() {
        let shell = SessionShell::new();
        assert_eq!(shell.view(), ShellView::Auth(AuthTab::Login));
        assert!(shell.token().is_none());
    }

    #[test]
    fn login_switches_to_workspace_permanently() {
        let mut shell = SessionShell::new();
        shell.complete_login(SessionToken::new("tok"));
        assert_eq!(shell.view(), ShellView::Workspace);

        // Tab selection is auth-only state; it must not pull the shell back.
        shell.select_tab(AuthTab::Register);
        assert_eq!(shell.view(), ShellView::Workspace);
    }

    #[test]
    fn registration_success_returns_to_login_tab_without_token() {
        let mut shell = SessionShell::new();
        shell.select_tab(AuthTab::Register);
        assert_eq!(shell.view(), ShellView::Auth(AuthTab::Register));

        shell.complete_registration();
        assert_eq!(shell.view(), ShellView::Auth(AuthTab::Login));
        assert!(shell.token().is_none());
    }
}
