//! Catalog Frontend App
//!
//! Navbar on top, one view below chosen by the current route, and the
//! collapsed log panel at the bottom.

use catalog_client::Route;
use leptos::prelude::*;

use crate::components::{LogPanel, LoginForm, Navbar, ProductForm, ProductList, RegisterForm};
use crate::context::{current_route, AppContext, Services};

#[component]
pub fn App(services: Services) -> impl IntoView {
    // State
    let (route, set_route) = signal(current_route());
    let (session_version, set_session_version) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new((route, set_route), (session_version, set_session_version), services);
    provide_context(ctx);

    // Back/forward and hand-edited URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| ctx.sync_with_location());

    view! {
        <Navbar />
        <main>
            {move || match route.get() {
                Route::Products => view! { <ProductList /> }.into_any(),
                Route::Create => view! { <ProductForm id=None /> }.into_any(),
                Route::Edit(id) => view! { <ProductForm id=Some(id) /> }.into_any(),
                Route::Login => view! { <LoginForm /> }.into_any(),
                Route::Register => view! { <RegisterForm /> }.into_any(),
            }}
        </main>
        <LogPanel />
    }
}
