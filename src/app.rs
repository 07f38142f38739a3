use std::sync::Arc;

use tracing::{debug, warn};

use crate::api::TugasApi;
use crate::commands::{Command, HELP};
use crate::navigation::{NavAction, Navigator, Route, Tab};
use crate::notice::Notice;
use crate::screens::{
    HomeScreen, LoginScreen, Outcome, ProfileScreen, RegisterScreen, TugasScreen,
};
use crate::session::TokenStore;

pub enum ActiveScreen {
    Login(LoginScreen),
    Register(RegisterScreen),
    Home(HomeScreen),
    Tugas(TugasScreen),
    Profile(ProfileScreen),
}

pub struct App {
    api: Arc<dyn TugasApi>,
    tokens: Arc<dyn TokenStore>,
    navigator: Navigator,
    screen: ActiveScreen,
}

impl App {
    /// Opens on the home tab when a token is stored, on the login screen otherwise.
    pub async fn start(api: Arc<dyn TugasApi>, tokens: Arc<dyn TokenStore>) -> (Self, Outcome) {
        let initial = match tokens.load().await {
            Ok(Some(_)) => Route::Main(Tab::Home),
            Ok(None) => Route::Login,
            Err(e) => {
                warn!("Could not read stored token: {}", e);
                Route::Login
            }
        };

        let screen = ActiveScreen::Login(LoginScreen::new(api.clone(), tokens.clone()));
        let mut app = Self {
            api,
            tokens,
            navigator: Navigator::new(initial),
            screen,
        };
        let outcome = app.enter(initial).await;
        (app, outcome)
    }

    pub fn current_route(&self) -> Route {
        self.navigator.current()
    }

    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    /// Builds a fresh screen for `route` and mounts it.
    async fn enter(&mut self, route: Route) -> Outcome {
        debug!("Entering {}", route);
        let api = self.api.clone();
        let tokens = self.tokens.clone();
        match route {
            Route::Login => {
                self.screen = ActiveScreen::Login(LoginScreen::new(api, tokens));
                Outcome::none()
            }
            Route::Register => {
                self.screen = ActiveScreen::Register(RegisterScreen::new(api));
                Outcome::none()
            }
            Route::Main(Tab::Home) => {
                let mut screen = HomeScreen::new(api);
                let outcome = screen.mount().await;
                self.screen = ActiveScreen::Home(screen);
                outcome
            }
            Route::Main(Tab::Tugas) => {
                let mut screen = TugasScreen::new(api);
                let outcome = screen.mount().await;
                self.screen = ActiveScreen::Tugas(screen);
                outcome
            }
            Route::Main(Tab::Profile) => {
                let mut screen = ProfileScreen::new(api, tokens);
                let outcome = screen.mount().await;
                self.screen = ActiveScreen::Profile(screen);
                outcome
            }
        }
    }

    /// Applies the navigation an action asked for, mounting the new screen.
    async fn follow(&mut self, mut outcome: Outcome) -> Outcome {
        if let Some(action) = outcome.nav {
            let before = self.navigator.current();
            self.navigator.apply(action);
            let after = self.navigator.current();
            if before != after || matches!(action, NavAction::Replace(_)) {
                outcome = outcome.merge(self.enter(after).await);
            }
        }
        outcome
    }

    pub async fn dispatch(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::Set { field, value } => self.set_field(&field, value),
            Command::Submit => match &mut self.screen {
                ActiveScreen::Login(s) => s.submit().await,
                ActiveScreen::Register(s) => s.submit().await,
                ActiveScreen::Tugas(s) => s.submit().await,
                _ => not_here("submit"),
            },
            Command::Refresh => match &mut self.screen {
                ActiveScreen::Home(s) => s.refresh().await,
                ActiveScreen::Tugas(s) => s.fetch().await,
                ActiveScreen::Profile(s) => s.mount().await,
                _ => not_here("refresh"),
            },
            Command::Edit(key) => match &mut self.screen {
                ActiveScreen::Tugas(s) => match s.find(&key).cloned() {
                    Some(tugas) => {
                        s.edit(&tugas);
                        Outcome::none()
                    }
                    None => Outcome::notice(Notice::info(format!("No tugas matches {}", key))),
                },
                _ => not_here("edit"),
            },
            Command::Delete(key) => match &mut self.screen {
                ActiveScreen::Tugas(s) => match s.find(&key).map(|t| t.id.clone()) {
                    Some(id) => s.delete(&id).await,
                    None => Outcome::notice(Notice::info(format!("No tugas matches {}", key))),
                },
                _ => not_here("delete"),
            },
            Command::Cancel => match &mut self.screen {
                ActiveScreen::Tugas(s) => {
                    s.reset_form();
                    Outcome::none()
                }
                _ => not_here("cancel"),
            },
            Command::Logout => match &mut self.screen {
                ActiveScreen::Profile(s) => s.logout().await,
                _ => not_here("logout"),
            },
            Command::Goto(route) => self.goto(route).await,
            Command::Back => {
                if self.navigator.back() {
                    let route = self.navigator.current();
                    return self.enter(route).await;
                }
                Outcome::none()
            }
            Command::Show | Command::Quit => Outcome::none(),
            Command::Help => Outcome::notice(Notice::new("Help", HELP)),
        };
        self.follow(outcome).await
    }

    async fn goto(&mut self, route: Route) -> Outcome {
        if route.requires_session() {
            let has_token = matches!(self.tokens.load().await, Ok(Some(_)));
            if !has_token {
                return Outcome::notice(Notice::info("Please log in first."));
            }
        }
        match &self.screen {
            ActiveScreen::Login(s) if route == Route::Register => s.go_register(),
            ActiveScreen::Register(s) if route == Route::Login => s.go_login(),
            _ => Outcome::navigate(NavAction::Navigate(route)),
        }
    }

    fn set_field(&mut self, field: &str, value: String) -> Outcome {
        let slot = match (&mut self.screen, field) {
            (ActiveScreen::Login(s), "email") => &mut s.email,
            (ActiveScreen::Login(s), "password") => &mut s.password,
            (ActiveScreen::Register(s), "name") => &mut s.name,
            (ActiveScreen::Register(s), "email") => &mut s.email,
            (ActiveScreen::Register(s), "password") => &mut s.password,
            (ActiveScreen::Tugas(s), "mata_kuliah") => &mut s.form.mata_kuliah,
            (ActiveScreen::Tugas(s), "tugas_ke") => &mut s.form.tugas_ke,
            (ActiveScreen::Tugas(s), "tenggat_kumpul") => &mut s.form.tenggat_kumpul,
            _ => {
                return Outcome::notice(Notice::info(format!(
                    "No field {} on this screen",
                    field
                )));
            }
        };
        *slot = value;
        Outcome::none()
    }

    pub fn render(&self) -> String {
        let body = match &self.screen {
            ActiveScreen::Login(s) => s.render(),
            ActiveScreen::Register(s) => s.render(),
            ActiveScreen::Home(s) => s.render(),
            ActiveScreen::Tugas(s) => s.render(),
            ActiveScreen::Profile(s) => s.render(),
        };
        match self.current_route() {
            Route::Main(active) => {
                let bar: Vec<String> = Tab::ALL
                    .iter()
                    .map(|tab| {
                        if *tab == active {
                            format!("[{}]", tab.title())
                        } else {
                            tab.title().to_string()
                        }
                    })
                    .collect();
                format!("{}\n\n{}", body, bar.join(" | "))
            }
            _ => body,
        }
    }
}

fn not_here(action: &str) -> Outcome {
    Outcome::notice(Notice::info(format!(
        "Nothing to {} on this screen",
        action
    )))
}
