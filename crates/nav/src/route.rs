//! Route Enumeration
//!
//! The closed set of screens. Every route is parameterless.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Banking,
    Ideas,
    Add,
    Links,
    Network,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Login,
        Route::Dashboard,
        Route::Banking,
        Route::Ideas,
        Route::Add,
        Route::Links,
        Route::Network,
    ];

    pub const fn code(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Dashboard => "dashboard",
            Route::Banking => "banking",
            Route::Ideas => "ideas",
            Route::Add => "add",
            Route::Links => "links",
            Route::Network => "network",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Route::ALL.iter().copied().find(|r| r.code() == code)
    }

    /// Everything except the login screen requires an authenticated user
    pub const fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
