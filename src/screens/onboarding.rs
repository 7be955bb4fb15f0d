// Welcome and sign-in screens
//
// There are no accounts behind the sign-in form: every way out of it
// lands on the home screen.

use super::{Command, Screen};

#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomeScreen;

impl WelcomeScreen {
    pub fn get_started(&self) -> Command {
        Command::navigate(Screen::Auth)
    }

    pub fn skip(&self) -> Command {
        Command::navigate(Screen::Home)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Welcome Back",
            AuthMode::SignUp => "Join Solace",
        }
    }

    pub fn subheading(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign in to continue your wellness journey",
            AuthMode::SignUp => "Start your mental wellness journey",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "Sign In",
            AuthMode::SignUp => "Create Account",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthScreen {
    mode: AuthMode,
}

impl AuthScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Switch between signing in and creating an account
    pub fn toggle_mode(&mut self) -> AuthMode {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.mode
    }

    pub fn submit(&self) -> Command {
        Command::navigate(Screen::Home)
    }

    pub fn continue_as_guest(&self) -> Command {
        Command::navigate(Screen::Home)
    }

    pub fn back(&self) -> Command {
        Command::navigate(Screen::Welcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_links() {
        let welcome = WelcomeScreen;
        assert_eq!(welcome.get_started(), Command::navigate(Screen::Auth));
        assert_eq!(welcome.skip(), Command::navigate(Screen::Home));
    }

    #[test]
    fn test_auth_toggle() {
        let mut auth = AuthScreen::new();
        assert_eq!(auth.mode().submit_label(), "Sign In");
        assert_eq!(auth.toggle_mode(), AuthMode::SignUp);
        assert_eq!(auth.mode().heading(), "Join Solace");
        assert_eq!(auth.toggle_mode(), AuthMode::SignIn);
    }

    #[test]
    fn test_auth_always_lands_home() {
        let auth = AuthScreen::new();
        assert_eq!(auth.submit(), Command::navigate(Screen::Home));
        assert_eq!(auth.continue_as_guest(), Command::navigate(Screen::Home));
        assert_eq!(auth.back(), Command::navigate(Screen::Welcome));
    }
}
