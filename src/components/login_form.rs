//! Login Form Component

use catalog_client::controllers::{LoginController, LoginField};
use catalog_client::Route;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(LoginController::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(|f| f.submit()).flatten() else { return };
        let services = ctx.services();
        spawn_local(async move {
            let result = request.send(services.auth.as_ref()).await;
            let next = form.try_update(|f| f.apply_result(&services.session, result)).flatten();
            if let Some(route) = next {
                ctx.session_changed();
                ctx.navigate(route);
            }
        });
    };

    let value = move |field: LoginField| form.with(|f| f.value(field).to_string());

    view! {
        <div class="container mt-4">
            <h2>"Login"</h2>
            {move || form.with(|f| f.error().map(|e| view! {
                <div class="alert alert-danger">{e.to_string()}</div>
            }))}
            <form on:submit=on_submit>
                <div class="mb-3">
                    <label for="username" class="form-label">"Username:"</label>
                    <input
                        type="text"
                        id="username"
                        name="username"
                        class="form-control"
                        prop:value=move || value(LoginField::Username)
                        on:input=move |ev| form.update(|f| f.update_field(LoginField::Username, &event_target_value(&ev)))
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
                        prop:value=move || value(LoginField::Password)
                        on:input=move |ev| form.update(|f| f.update_field(LoginField::Password, &event_target_value(&ev)))
                        required
                    />
                </div>

                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || form.with(|f| f.is_submitting())
                >
                    "Login"
                </button>
            </form>
            <p class="mt-3">
                "No account yet? "
                <a href=format!("#{}", Route::Register.path())>"Register"</a>
            </p>
        </div>
    }
}
