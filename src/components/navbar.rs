//! Navbar Component
//!
//! Shows the logged-in user's name from the stored token, or login/register
//! links when there is no usable token.

use catalog_client::Route;
use leptos::prelude::*;

use crate::context::{use_app_context, AppContext};

fn nav_link(ctx: AppContext, route: Route, label: &'static str) -> impl IntoView {
    let href = format!("#{}", route.path());
    let class = move || {
        if ctx.route.get() == route { "nav-link active" } else { "nav-link" }
    };
    view! {
        <li class="nav-item">
            <a class=class href=href>{label}</a>
        </li>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();

    // Re-read storage on every navigation and every login/logout
    let user = Memo::new(move |_| {
        ctx.route.track();
        ctx.session_version.get();
        ctx.services().session.current_user()
    });

    let logout = move |_| {
        ctx.services().session.clear_token();
        ctx.session_changed();
        ctx.navigate(Route::Login);
    };

    view! {
        <nav class="navbar navbar-expand-lg navbar-dark bg-dark">
            <div class="container">
                <a class="navbar-brand" href="#/">"MyApp"</a>
                <ul class="navbar-nav ms-auto">
                    {nav_link(ctx, Route::Products, "Products")}
                    {move || match user.get() {
                        Some(claims) => view! {
                            <li class="nav-item">
                                <span class="nav-link">{claims.sub}</span>
                            </li>
                            <li class="nav-item">
                                <button class="btn btn-link nav-link" on:click=logout>"Logout"</button>
                            </li>
                        }.into_any(),
                        None => view! {
                            {nav_link(ctx, Route::Login, "Login")}
                            {nav_link(ctx, Route::Register, "Register")}
                        }.into_any(),
                    }}
                </ul>
            </div>
        </nav>
    }
}
