//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::rc::Rc;

use catalog_client::api::{AuthApi, ProductApi};
use catalog_client::{Route, Session};
use leptos::prelude::*;

/// Backend handles and the session, created once in `main`
#[derive(Clone)]
pub struct Services {
    pub products: Rc<dyn ProductApi>,
    pub auth: Rc<dyn AuthApi>,
    pub session: Session,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// View currently shown - read
    pub route: ReadSignal<Route>,
    /// View currently shown - write
    set_route: WriteSignal<Route>,
    /// Bumped on login/logout so the navbar re-reads the session - read
    pub session_version: ReadSignal<u32>,
    /// Bumped on login/logout so the navbar re-reads the session - write
    set_session_version: WriteSignal<u32>,
    /// Not `Send`, so kept in local storage
    services: StoredValue<Services, LocalStorage>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        session_version: (ReadSignal<u32>, WriteSignal<u32>),
        services: Services,
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            session_version: session_version.0,
            set_session_version: session_version.1,
            services: StoredValue::new_local(services),
        }
    }

    pub fn services(&self) -> Services {
        self.services.get_value()
    }

    /// Show another view and reflect it in the location hash
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&route.path());
        }
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    /// Sync the route after the user edited the URL or used back/forward
    pub fn sync_with_location(&self) {
        let route = current_route();
        if self.route.get_untracked() != route {
            log::debug!("location changed to {}", route.path());
            self.set_route.set(route);
        }
    }

    /// Notify readers that the stored token changed
    pub fn session_changed(&self) {
        self.set_session_version.update(|v| *v += 1);
    }
}

/// Route encoded in the current location hash
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_path(&hash))
        .unwrap_or_default()
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
