use std::sync::Arc;

use crate::api::TugasApi;
use crate::error::AppError;
use crate::models::{Profile, Tugas};
use crate::notice::Notice;
use crate::screens::Outcome;

pub struct HomeScreen {
    api: Arc<dyn TugasApi>,
    pub tugas: Vec<Tugas>,
    pub user_name: String,
    pub refreshing: bool,
}

impl HomeScreen {
    pub fn new(api: Arc<dyn TugasApi>) -> Self {
        Self {
            api,
            tugas: Vec::new(),
            user_name: String::new(),
            refreshing: false,
        }
    }

    /// Loads the task table and the greeting name concurrently.
    pub async fn mount(&mut self) -> Outcome {
        let api = self.api.clone();
        let (tugas, profile) = tokio::join!(api.fetch_tugas(), api.fetch_profile());
        self.apply_tugas(tugas, "Failed to fetch tasks.")
            .merge(self.apply_profile(profile))
    }

    pub async fn refresh(&mut self) -> Outcome {
        self.refreshing = true;
        let result = self.api.fetch_tugas().await;
        let outcome = self.apply_tugas(result, "Failed to refresh tasks.");
        self.refreshing = false;
        outcome
    }

    fn apply_tugas(&mut self, result: Result<Vec<Tugas>, AppError>, fallback: &str) -> Outcome {
        match result {
            Ok(tugas) => {
                self.tugas = tugas;
                Outcome::none()
            }
            Err(e) => Outcome::notice(Notice::from_error(&e, fallback)),
        }
    }

    fn apply_profile(&mut self, result: Result<Profile, AppError>) -> Outcome {
        match result {
            Ok(profile) => {
                self.user_name = profile.name;
                Outcome::none()
            }
            Err(_) => Outcome::notice(Notice::error("Failed to fetch user data.")),
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!("Welcome, {}!\nDaftar Tugas\n\n", self.user_name);
        out.push_str(&format!("{:<24} {:>8}  {}\n", "Mata Kuliah", "Tugas Ke", "Tenggat"));
        for tugas in &self.tugas {
            out.push_str(&format!(
                "{:<24} {:>8}  {}\n",
                tugas.mata_kuliah,
                tugas.tugas_ke,
                tugas.due_date_label()
            ));
        }
        if self.refreshing {
            out.push_str("(refreshing...)\n");
        }
        out
    }
}
