#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tugas::api::TugasApi;
use tugas::error::AppError;
use tugas::models::{LoginRequest, LoginResponse, Profile, RegisterRequest, Tugas, TugasRequest};

/// Which operations the fake should fail, and with what server message.
#[derive(Default, Clone)]
pub struct Failures {
    pub login: bool,
    pub register: bool,
    pub profile: bool,
    pub logout: bool,
    pub fetch: bool,
    pub save: bool,
    pub delete: bool,
    pub message: Option<String>,
}

#[derive(Default)]
pub struct Calls {
    pub login: AtomicUsize,
    pub register: AtomicUsize,
    pub profile: AtomicUsize,
    pub logout: AtomicUsize,
    pub fetch: AtomicUsize,
    pub create: AtomicUsize,
    pub update: AtomicUsize,
    pub delete: AtomicUsize,
}

impl Calls {
    pub fn total(&self) -> usize {
        [
            &self.login,
            &self.register,
            &self.profile,
            &self.logout,
            &self.fetch,
            &self.create,
            &self.update,
            &self.delete,
        ]
        .iter()
        .map(|c| c.load(Ordering::SeqCst))
        .sum()
    }
}

/// In-memory stand-in for the tugas server.
#[derive(Default)]
pub struct FakeTugasApi {
    pub tugas: Mutex<Vec<Tugas>>,
    pub profile: Mutex<Option<Profile>>,
    pub failures: Mutex<Failures>,
    pub calls: Calls,
    pub last_update: Mutex<Option<(String, TugasRequest)>>,
}

impl FakeTugasApi {
    pub fn new() -> Self {
        Self {
            profile: Mutex::new(Some(Profile {
                name: "Siti Rahma".to_string(),
                email: "siti@kampus.ac.id".to_string(),
            })),
            ..Self::default()
        }
    }

    pub fn with_tugas(tugas: Vec<Tugas>) -> Self {
        let api = Self::new();
        *api.tugas.lock().unwrap() = tugas;
        api
    }

    pub fn fail(&self, f: impl FnOnce(&mut Failures)) {
        let mut failures = self.failures.lock().unwrap();
        f(&mut *failures);
    }

    pub fn count(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    fn error(&self) -> AppError {
        AppError::Api {
            status: 500,
            message: self.failures.lock().unwrap().message.clone(),
        }
    }

    fn failing(&self, pick: impl FnOnce(&Failures) -> bool) -> bool {
        pick(&*self.failures.lock().unwrap())
    }
}

pub fn make_tugas(id: &str, mata_kuliah: &str, tugas_ke: i64, tenggat_kumpul: &str) -> Tugas {
    Tugas {
        id: id.to_string(),
        mata_kuliah: mata_kuliah.to_string(),
        tugas_ke,
        tenggat_kumpul: tenggat_kumpul.to_string(),
    }
}

#[async_trait]
impl TugasApi for FakeTugasApi {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, AppError> {
        self.calls.login.fetch_add(1, Ordering::SeqCst);
        if self.failing(|f| f.login) {
            return Err(self.error());
        }
        Ok(LoginResponse {
            token: format!("token-for-{}", req.email),
        })
    }

    async fn register(&self, _req: &RegisterRequest) -> Result<(), AppError> {
        self.calls.register.fetch_add(1, Ordering::SeqCst);
        if self.failing(|f| f.register) {
            return Err(self.error());
        }
        Ok(())
    }

    async fn fetch_profile(&self) -> Result<Profile, AppError> {
        self.calls.profile.fetch_add(1, Ordering::SeqCst);
        if self.failing(|f| f.profile) {
            return Err(self.error());
        }
        self.profile.lock().unwrap().clone().ok_or(AppError::Api {
            status: 404,
            message: None,
        })
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.calls.logout.fetch_add(1, Ordering::SeqCst);
        if self.failing(|f| f.logout) {
            return Err(self.error());
        }
        Ok(())
    }

    async fn fetch_tugas(&self) -> Result<Vec<Tugas>, AppError> {
        self.calls.fetch.fetch_add(1, Ordering::SeqCst);
        if self.failing(|f| f.fetch) {
            return Err(self.error());
        }
        Ok(self.tugas.lock().unwrap().clone())
    }

    async fn create_tugas(&self, req: &TugasRequest) -> Result<Tugas, AppError> {
        self.calls.create.fetch_add(1, Ordering::SeqCst);
        if self.failing(|f| f.save) {
            return Err(self.error());
        }
        let created = Tugas {
            id: uuid::Uuid::new_v4().to_string(),
            mata_kuliah: req.mata_kuliah.clone(),
            tugas_ke: req.tugas_ke,
            tenggat_kumpul: req.tenggat_kumpul.clone(),
        };
        self.tugas.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_tugas(&self, id: &str, req: &TugasRequest) -> Result<(), AppError> {
        self.calls.update.fetch_add(1, Ordering::SeqCst);
        if self.failing(|f| f.save) {
            return Err(self.error());
        }
        *self.last_update.lock().unwrap() = Some((id.to_string(), req.clone()));
        let mut tugas = self.tugas.lock().unwrap();
        let existing = tugas.iter_mut().find(|t| t.id == id).ok_or(AppError::Api {
            status: 404,
            message: Some("Tugas not found".to_string()),
        })?;
        existing.mata_kuliah = req.mata_kuliah.clone();
        existing.tugas_ke = req.tugas_ke;
        existing.tenggat_kumpul = req.tenggat_kumpul.clone();
        Ok(())
    }

    async fn delete_tugas(&self, id: &str) -> Result<(), AppError> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        if self.failing(|f| f.delete) {
            return Err(self.error());
        }
        self.tugas.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}
