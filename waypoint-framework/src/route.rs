use std::fmt;

/// One of the fixed screens of the application.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Home,
    Form,
    Details,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Login, Route::Home, Route::Form, Route::Details];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Home => "/home",
            Route::Form => "/form",
            Route::Details => "/details",
        }
    }

    /// Resolve a path to a route. Empty segments are ignored, so `/home/`
    /// and `//home` both resolve to [`Route::Home`] and `""` to the login
    /// screen.
    pub fn from_path(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::Login),
            ["home"] => Some(Route::Home),
            ["form"] => Some(Route::Form),
            ["details"] => Some(Route::Details),
            _ => None,
        }
    }

    /// Where the back button on this screen leads. This is a fixed edge, not
    /// a history pop.
    pub fn back(&self) -> Option<Route> {
        match self {
            Route::Form => Some(Route::Home),
            Route::Details => Some(Route::Form),
            Route::Login | Route::Home => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
            Route::Form => "Form",
            Route::Details => "Details",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The screen currently on display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    View(Route),
    /// A path that matched no route, kept so it can be shown to the user.
    NotFound(String),
}

impl Screen {
    pub fn resolve(path: &str) -> Screen {
        match Route::from_path(path) {
            Some(route) => Screen::View(route),
            None => Screen::NotFound(path.to_string()),
        }
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Screen::View(route) => Some(*route),
            Screen::NotFound(_) => None,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Screen::View(route) => route.path(),
            Screen::NotFound(path) => path,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::View(Route::Login)
    }
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        Screen::View(route)
    }
}
