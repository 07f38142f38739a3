use std::sync::Arc;

use tracing::{info, warn};

use crate::api::TugasApi;
use crate::error::AppError;
use crate::models::LoginRequest;
use crate::navigation::{NavAction, Route, Tab};
use crate::notice::Notice;
use crate::screens::Outcome;
use crate::session::TokenStore;

pub struct LoginScreen {
    api: Arc<dyn TugasApi>,
    tokens: Arc<dyn TokenStore>,
    pub email: String,
    pub password: String,
}

impl LoginScreen {
    pub fn new(api: Arc<dyn TugasApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            tokens,
            email: String::new(),
            password: String::new(),
        }
    }

    pub async fn submit(&mut self) -> Outcome {
        match self.login().await {
            Ok(()) => {
                info!("Logged in as {}", self.email);
                Outcome::notice(Notice::success("Login successful!"))
                    .with_nav(NavAction::Navigate(Route::Main(Tab::Home)))
            }
            Err(e) => {
                warn!("Login failed: {}", e);
                Outcome::notice(Notice::error(
                    "Login failed. Please check your credentials.",
                ))
            }
        }
    }

    async fn login(&self) -> Result<(), AppError> {
        let req = LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        let response = self.api.login(&req).await?;
        self.tokens.save(&response.token).await
    }

    pub fn go_register(&self) -> Outcome {
        Outcome::navigate(NavAction::Navigate(Route::Register))
    }

    pub fn render(&self) -> String {
        format!(
            "Welcome Back!\nLog in to manage your tasks\n\n  email:    {}\n  password: {}\n\nDon't have an account? `goto register`",
            self.email,
            "*".repeat(self.password.chars().count())
        )
    }
}
