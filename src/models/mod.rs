pub mod tugas;
pub mod user;

pub use tugas::{Tugas, TugasRequest};
pub use user::{LoginRequest, LoginResponse, Profile, RegisterRequest};
