use std::sync::Arc;

use tracing::{error, info};

use crate::api::TugasApi;
use crate::error::AppError;
use crate::models::Profile;
use crate::navigation::{NavAction, Route};
use crate::notice::Notice;
use crate::screens::Outcome;
use crate::session::TokenStore;

pub struct ProfileScreen {
    api: Arc<dyn TugasApi>,
    tokens: Arc<dyn TokenStore>,
    pub user: Option<Profile>,
    pub loading: bool,
}

impl ProfileScreen {
    pub fn new(api: Arc<dyn TugasApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            tokens,
            user: None,
            loading: true,
        }
    }

    pub async fn mount(&mut self) -> Outcome {
        let outcome = match self.api.fetch_profile().await {
            Ok(profile) => {
                self.user = Some(profile);
                Outcome::none()
            }
            Err(e) => {
                error!("Error fetching user data: {}", e);
                Outcome::notice(Notice::from_error(&e, "Failed to fetch user data."))
            }
        };
        self.loading = false;
        outcome
    }

    pub async fn logout(&mut self) -> Outcome {
        match self.tokens.load().await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Outcome::notice(Notice::error("No token found. Please log in again."))
                    .with_nav(NavAction::Replace(Route::Login));
            }
            Err(e) => {
                error!("Error during logout: {}", e);
                return Outcome::notice(Notice::error(
                    "Failed to logout. Please try again later.",
                ));
            }
        }

        match self.end_session().await {
            Ok(()) => {
                info!("Logged out");
                Outcome::notice(Notice::new("Logout", "You have successfully logged out."))
                    .with_nav(NavAction::Replace(Route::Login))
            }
            Err(e) => {
                error!("Error during logout: {}", e);
                Outcome::notice(Notice::error("Failed to logout. Please try again later."))
            }
        }
    }

    async fn end_session(&self) -> Result<(), AppError> {
        self.api.logout().await?;
        self.tokens.clear().await
    }

    pub fn render(&self) -> String {
        if self.loading {
            return "Loading...".to_string();
        }
        match &self.user {
            Some(user) => format!(
                "My Profile\n\n  Name:  {}\n  Email: {}\n\n`logout` to sign out",
                user.name, user.email
            ),
            None => "My Profile\n\nFailed to load user data.\n\n`logout` to sign out".to_string(),
        }
    }
}
