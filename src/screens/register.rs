use std::sync::Arc;

use tracing::{info, warn};

use crate::api::TugasApi;
use crate::models::RegisterRequest;
use crate::navigation::{NavAction, Route};
use crate::notice::Notice;
use crate::screens::Outcome;

pub struct RegisterScreen {
    api: Arc<dyn TugasApi>,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterScreen {
    pub fn new(api: Arc<dyn TugasApi>) -> Self {
        Self {
            api,
            name: String::new(),
            email: String::new(),
            password: String::new(),
        }
    }

    pub async fn submit(&mut self) -> Outcome {
        let req = RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        };
        match self.api.register(&req).await {
            Ok(()) => {
                info!("Registered {}", self.email);
                Outcome::notice(Notice::success("Registration successful!"))
                    .with_nav(NavAction::Navigate(Route::Login))
            }
            Err(e) => {
                warn!("Registration failed: {}", e);
                Outcome::notice(Notice::error("Registration failed. Please try again."))
            }
        }
    }

    pub fn go_login(&self) -> Outcome {
        Outcome::navigate(NavAction::Navigate(Route::Login))
    }

    pub fn render(&self) -> String {
        format!(
            "Welcome!\nCreate an account to start your journey\n\n  name:     {}\n  email:    {}\n  password: {}\n\nAlready have an account? `goto login`",
            self.name,
            self.email,
            "*".repeat(self.password.chars().count())
        )
    }
}
