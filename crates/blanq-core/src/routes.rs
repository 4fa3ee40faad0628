//! Client-side routes and sidebar entries

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// `/` shows the client list
    Home,
    Dashboard,
    Clients,
    Projects,
    Finance,
    LegalDocs,
    Testimonials,
    Templates,
    Tasks,
    Search,
    Login,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 12] = [
        Route::Home,
        Route::Dashboard,
        Route::Clients,
        Route::Projects,
        Route::Finance,
        Route::LegalDocs,
        Route::Testimonials,
        Route::Templates,
        Route::Tasks,
        Route::Search,
        Route::Login,
        Route::NotFound,
    ];

    /// Sidebar entries, top to bottom
    pub const NAV: [Route; 9] = [
        Route::Dashboard,
        Route::Clients,
        Route::Projects,
        Route::Tasks,
        Route::Finance,
        Route::Testimonials,
        Route::Templates,
        Route::LegalDocs,
        Route::Search,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::Clients => "/client-management",
            Route::Projects => "/project-management",
            Route::Finance => "/finance",
            Route::LegalDocs => "/legal-quebec-docs",
            Route::Testimonials => "/testimonials-section",
            Route::Templates => "/templates-library",
            Route::Tasks => "/collaborative-to-do-management",
            Route::Search => "/search",
            Route::Login => "/login",
            Route::NotFound => "/404",
        }
    }

    /// Unknown paths resolve to `NotFound`; a trailing slash is ignored
    pub fn from_path(path: &str) -> Route {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL
            .into_iter()
            .filter(|r| *r != Route::NotFound)
            .find(|r| r.path() == trimmed)
            .unwrap_or(Route::NotFound)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home | Route::Clients => "Clients",
            Route::Dashboard => "Dashboard",
            Route::Projects => "Projects",
            Route::Finance => "Finance",
            Route::LegalDocs => "Legal & Docs",
            Route::Testimonials => "Testimonials",
            Route::Templates => "Templates",
            Route::Tasks => "Tasks",
            Route::Search => "Search",
            Route::Login => "Sign In",
            Route::NotFound => "Not Found",
        }
    }

    /// Icon glyph shown next to the sidebar label
    pub fn icon(&self) -> &'static str {
        match self {
            Route::Dashboard => "▦",
            Route::Home | Route::Clients => "👥",
            Route::Projects => "📁",
            Route::Finance => "🧾",
            Route::LegalDocs => "📄",
            Route::Testimonials => "💬",
            Route::Templates => "🗂",
            Route::Tasks => "☑",
            Route::Search => "🔍",
            Route::Login | Route::NotFound => "",
        }
    }

    /// Whether the sidebar entry for `self` should be highlighted at `path`
    pub fn is_active(&self, path: &str) -> bool {
        let current = Route::from_path(path);
        current == *self || (*self == Route::Clients && current == Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in Route::ALL.into_iter().filter(|r| *r != Route::NotFound) {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_and_trailing_slash() {
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path("/finance/"), Route::Finance);
        assert_eq!(Route::from_path(""), Route::Home);
    }

    #[test]
    fn test_clients_active_on_home() {
        assert!(Route::Clients.is_active("/"));
        assert!(!Route::Dashboard.is_active("/"));
    }
}
