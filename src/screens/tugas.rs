use std::sync::Arc;

use tracing::{debug, info};

use crate::api::TugasApi;
use crate::error::AppError;
use crate::models::{Tugas, TugasRequest};
use crate::notice::Notice;
use crate::screens::Outcome;

/// Raw text of the add/edit form, exactly as typed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TugasForm {
    pub mata_kuliah: String,
    pub tugas_ke: String,
    pub tenggat_kumpul: String,
}

impl TugasForm {
    pub fn from_tugas(tugas: &Tugas) -> Self {
        Self {
            mata_kuliah: tugas.mata_kuliah.clone(),
            tugas_ke: tugas.tugas_ke.to_string(),
            tenggat_kumpul: tugas.tenggat_kumpul.clone(),
        }
    }

    /// Checks the required fields and builds the request body.
    pub fn to_request(&self) -> Result<TugasRequest, AppError> {
        let fields = [&self.mata_kuliah, &self.tugas_ke, &self.tenggat_kumpul];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(AppError::Validation("All fields are required.".to_string()));
        }
        let tugas_ke = self
            .tugas_ke
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation("Tugas Ke must be a number.".to_string()))?;

        Ok(TugasRequest {
            mata_kuliah: self.mata_kuliah.clone(),
            tugas_ke,
            tenggat_kumpul: self.tenggat_kumpul.clone(),
        })
    }
}

pub struct TugasScreen {
    api: Arc<dyn TugasApi>,
    pub tugas: Vec<Tugas>,
    pub form: TugasForm,
    editing_id: Option<String>,
    pub loading: bool,
}

impl TugasScreen {
    pub fn new(api: Arc<dyn TugasApi>) -> Self {
        Self {
            api,
            tugas: Vec::new(),
            form: TugasForm::default(),
            editing_id: None,
            loading: false,
        }
    }

    pub async fn mount(&mut self) -> Outcome {
        self.fetch().await
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit_mode() {
            "Update Tugas"
        } else {
            "Tambah Tugas"
        }
    }

    /// Replaces the list with the server's; on failure the current list is kept.
    pub async fn fetch(&mut self) -> Outcome {
        self.loading = true;
        let outcome = match self.api.fetch_tugas().await {
            Ok(tugas) => {
                debug!("Fetched {} tugas", tugas.len());
                self.tugas = tugas;
                Outcome::none()
            }
            Err(e) => Outcome::notice(Notice::from_error(&e, "Failed to fetch tugas.")),
        };
        self.loading = false;
        outcome
    }

    pub async fn submit(&mut self) -> Outcome {
        let req = match self.form.to_request() {
            Ok(req) => req,
            Err(AppError::Validation(msg)) => return Outcome::notice(Notice::validation(msg)),
            Err(e) => return Outcome::notice(Notice::from_error(&e, "Failed to save tugas.")),
        };

        let saved = match self.editing_id.clone() {
            Some(id) => self.api.update_tugas(&id, &req).await.map(|()| {
                info!("Updated tugas {}", id);
                Notice::success("Tugas updated successfully!")
            }),
            None => self.api.create_tugas(&req).await.map(|created| {
                info!("Created tugas {}", created.id);
                self.tugas.push(created);
                Notice::success("Tugas added successfully!")
            }),
        };

        match saved {
            Ok(notice) => {
                self.reset_form();
                Outcome::notice(notice).merge(self.fetch().await)
            }
            Err(e) => Outcome::notice(Notice::from_error(&e, "Failed to save tugas.")),
        }
    }

    pub async fn delete(&mut self, id: &str) -> Outcome {
        match self.api.delete_tugas(id).await {
            Ok(()) => {
                info!("Deleted tugas {}", id);
                Outcome::notice(Notice::success("Tugas deleted successfully!"))
                    .merge(self.fetch().await)
            }
            Err(e) => Outcome::notice(Notice::from_error(&e, "Failed to delete tugas.")),
        }
    }

    /// Pre-fills the form with `tugas` and switches to edit mode.
    pub fn edit(&mut self, tugas: &Tugas) {
        self.form = TugasForm::from_tugas(tugas);
        self.editing_id = Some(tugas.id.clone());
    }

    pub fn reset_form(&mut self) {
        self.form = TugasForm::default();
        self.editing_id = None;
    }

    /// Looks a task up by 1-based row number or by id.
    pub fn find(&self, key: &str) -> Option<&Tugas> {
        if let Ok(row) = key.parse::<usize>() {
            if let Some(tugas) = row.checked_sub(1).and_then(|i| self.tugas.get(i)) {
                return Some(tugas);
            }
        }
        self.tugas.iter().find(|t| t.id == key)
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Daftar Tugas\n\n");
        out.push_str(&format!(
            "  mata_kuliah:    {}\n  tugas_ke:       {}\n  tenggat_kumpul: {} (YYYY-MM-DD)\n  [{}]\n\n",
            self.form.mata_kuliah,
            self.form.tugas_ke,
            self.form.tenggat_kumpul,
            self.submit_label()
        ));
        if self.loading {
            out.push_str("(loading...)\n");
        }
        for (i, tugas) in self.tugas.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {}\n     Tugas Ke: {}\n     Tenggat: {}\n",
                i + 1,
                tugas.mata_kuliah,
                tugas.tugas_ke,
                tugas.due_date_label()
            ));
        }
        out
    }
}
