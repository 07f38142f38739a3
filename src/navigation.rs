use std::fmt;

/// Tabs of the bottom bar shown once logged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Tugas,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Tugas, Tab::Profile];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Tugas => "Tugas",
            Tab::Profile => "Profile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Main(Tab),
}

impl Route {
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "login" => Some(Route::Login),
            "register" => Some(Route::Register),
            "home" | "main" => Some(Route::Main(Tab::Home)),
            "tugas" => Some(Route::Main(Tab::Tugas)),
            "profile" => Some(Route::Main(Tab::Profile)),
            _ => None,
        }
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Route::Main(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => f.write_str("Login"),
            Route::Register => f.write_str("Register"),
            Route::Main(tab) => write!(f, "Main/{}", tab.title()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Navigate(Route),
    Replace(Route),
}

/// Route stack. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Route {
        self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Goes to `route`, popping back to it if it is already on the stack.
    /// Switching between tabs swaps the top entry instead of stacking.
    pub fn navigate(&mut self, route: Route) {
        if let Some(pos) = self.stack.iter().position(|r| *r == route) {
            self.stack.truncate(pos + 1);
            return;
        }
        match (self.current(), route) {
            (Route::Main(_), Route::Main(_)) => self.replace(route),
            _ => self.stack.push(route),
        }
    }

    /// Swaps the top entry for `route`, collapsing onto an existing entry for it.
    pub fn replace(&mut self, route: Route) {
        self.stack.pop();
        match self.stack.iter().position(|r| *r == route) {
            Some(pos) => self.stack.truncate(pos + 1),
            None => self.stack.push(route),
        }
    }

    /// Returns false when already at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Navigate(route) => self.navigate(route),
            NavAction::Replace(route) => self.replace(route),
        }
    }
}
