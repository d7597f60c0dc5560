#![allow(warnings)]
//! Catalog Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;

use std::rc::Rc;

use app::App;
use catalog_client::api::HttpApi;
use catalog_client::{AppConfig, Session};
use context::Services;
use leptos::prelude::*;
use storage::LocalStorageTokenStore;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Err(e) = console_logger::init(config.log_level) {
        web_sys::console::error_1(&format!("logger already installed: {}", e).into());
    }
    log::info!("catalog front end starting, backend at {}", config.api.base_url);

    let api = Rc::new(HttpApi::new(config.api));
    let services = Services {
        products: api.clone(),
        auth: api,
        session: Session::new(Rc::new(LocalStorageTokenStore::new())),
    };

    mount_to_body(move || view! { <App services=services /> });
}
