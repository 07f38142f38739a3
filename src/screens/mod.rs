//! Per-screen view state and the actions each screen performs against the API.
//!
//! Screens never render alerts or move between routes themselves. Every
//! action returns an [`Outcome`] with the notices to show, in order, and the
//! navigation to perform, if any.

pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod tugas;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use profile::ProfileScreen;
pub use register::RegisterScreen;
pub use tugas::{TugasForm, TugasScreen};

use crate::navigation::NavAction;
use crate::notice::Notice;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Outcome {
    pub notices: Vec<Notice>,
    pub nav: Option<NavAction>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            nav: None,
        }
    }

    pub fn navigate(action: NavAction) -> Self {
        Self {
            notices: Vec::new(),
            nav: Some(action),
        }
    }

    pub fn with_nav(mut self, action: NavAction) -> Self {
        self.nav = Some(action);
        self
    }

    pub fn merge(mut self, other: Outcome) -> Self {
        self.notices.extend(other.notices);
        if other.nav.is_some() {
            self.nav = other.nav;
        }
        self
    }

    pub fn has_error(&self) -> bool {
        self.notices.iter().any(Notice::is_error)
    }
}
