//! Views the app can show.
//!
//! Controllers return a `Route` instead of navigating, so the UI decides how
//! a route change is carried out (hash update, timer, etc).

/// A navigable view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Products,
    Create,
    Edit(String),
    Login,
    Register,
}

impl Route {
    /// Path form, used as the location hash
    pub fn path(&self) -> String {
        match self {
            Route::Products => "/products".to_string(),
            Route::Create => "/create".to_string(),
            Route::Edit(id) => format!("/edit/{}", id),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
        }
    }

    /// Parse a path (with or without a leading `#`); unknown paths land on the product list
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('#').trim_end_matches('/');
        match path {
            "" | "/" | "/products" => Route::Products,
            "/create" => Route::Create,
            "/login" => Route::Login,
            "/register" => Route::Register,
            other => match other.strip_prefix("/edit/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Edit(id.to_string()),
                _ => Route::Products,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Products,
            Route::Create,
            Route::Edit("abc-123".into()),
            Route::Login,
            Route::Register,
        ] {
            assert_eq!(Route::from_path(&route.path()), route);
        }
    }

    #[test]
    fn test_hash_and_fallbacks() {
        assert_eq!(Route::from_path("#/edit/42"), Route::Edit("42".into()));
        assert_eq!(Route::from_path(""), Route::Products);
        assert_eq!(Route::from_path("#/"), Route::Products);
        assert_eq!(Route::from_path("/edit/"), Route::Products);
        assert_eq!(Route::from_path("/nowhere"), Route::Products);
    }
}
