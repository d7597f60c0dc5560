//! Register Form Component
//!
//! After a successful registration the confirmation stays up for a moment,
//! then the login view opens. Leaving the view first cancels that redirect.

use catalog_client::controllers::{RegisterController, RegisterField};
use catalog_client::Route;
use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(RegisterController::new());
    // Dropping the Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);

    on_cleanup(move || {
        let _ = pending.try_update_value(|t| t.take());
        let _ = form.try_update(|f| f.cancel_redirect());
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        pending.update_value(|t| {
            t.take();
        });
        let Some(request) = form.try_update(|f| f.submit()).flatten() else { return };
        let api = ctx.services().auth;
        spawn_local(async move {
            let result = request.send(api.as_ref()).await;
            let Some(redirect) = form.try_update(|f| f.apply_result(result)).flatten() else {
                return;
            };
            let ticket = redirect.ticket;
            let timeout = Timeout::new(redirect.after.as_millis() as u32, move || {
                if let Some(route) = form.try_update(|f| f.redirect_due(ticket)).flatten() {
                    ctx.navigate(route);
                }
            });
            let _ = pending.try_update_value(|t| *t = Some(timeout));
        });
    };

    let value = move |field: RegisterField| form.with(|f| f.value(field).to_string());

    view! {
        <div class="container mt-4">
            <h2>"Register"</h2>
            {move || form.with(|f| f.error().map(|e| view! {
                <div class="alert alert-danger">{e.to_string()}</div>
            }))}
            {move || form.with(|f| f.success().map(|s| view! {
                <div class="alert alert-success">{s.to_string()}</div>
            }))}
            <form on:submit=on_submit>
                <div class="mb-3">
                    <label for="name" class="form-label">"Username:"</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        class="form-control"
                        prop:value=move || value(RegisterField::Username)
                        on:input=move |ev| form.update(|f| f.update_field(RegisterField::Username, &event_target_value(&ev)))
                        required
                    />
                </div>

                <div class="mb-3">
                    <label for="email" class="form-label">"Email:"</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        class="form-control"
                        prop:value=move || value(RegisterField::Email)
                        on:input=move |ev| form.update(|f| f.update_field(RegisterField::Email, &event_target_value(&ev)))
                        required
                    />
                </div>

                <div class="mb-3">
                    <label for="password" class="form-label">"Password:"</label>
                    <input
                        type="password"
                        id="password"
                        name="password"
                        class="form-control"
                        prop:value=move || value(RegisterField::Password)
                        on:input=move |ev| form.update(|f| f.update_field(RegisterField::Password, &event_target_value(&ev)))
                        required
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-success"
                    disabled=move || form.with(|f| f.is_submitting())
                >
                    "Register"
                </button>
            </form>
            <p class="mt-3">
                "Already have an account? "
                <a href=format!("#{}", Route::Login.path())>"Login"</a>
            </p>
        </div>
    }
}
