//! Product Form Component
//!
//! Create and edit share this form; an id switches it to edit mode.

use catalog_client::controllers::{FormMode, ProductField, ProductFormController};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn ProductForm(id: Option<String>) -> impl IntoView {
    let ctx = use_app_context();
    let (controller, load) = ProductFormController::new(FormMode::from_id(id));
    let form = RwSignal::new(controller);

    // Edit mode: pre-fill from the stored product
    if let Some(load) = load {
        let api = ctx.services().products;
        spawn_local(async move {
            let result = load.send(api.as_ref()).await;
            let _ = form.try_update(|f| f.apply_loaded(&load, result));
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(|f| f.submit()).flatten() else { return };
        let api = ctx.services().products;
        spawn_local(async move {
            let result = request.send(api.as_ref()).await;
            if let Some(route) = form.try_update(|f| f.apply_saved(result)).flatten() {
                ctx.navigate(route);
            }
        });
    };

    let value = move |field: ProductField| form.with(|f| f.value(field).to_string());
    let is_edit = form.with_untracked(|f| f.is_edit());

    view! {
        <Show
            when=move || !form.with(|f| f.is_loading())
            fallback=|| view! { <div>"Loading product data..."</div> }
        >
            <div class="container mt-4">
                <h2>{if is_edit { "Edit Product" } else { "Add New Product" }}</h2>
                {move || form.with(|f| f.error().map(|e| view! {
                    <div class="alert alert-danger">{e.to_string()}</div>
                }))}
                <form on:submit=on_submit>
                    <div class="mb-3">
                        <label for="name" class="form-label">"Name:"</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            class="form-control"
                            prop:value=move || value(ProductField::Name)
                            on:input=move |ev| form.update(|f| f.update_field(ProductField::Name, &event_target_value(&ev)))
                            required
                        />
                    </div>

                    <div class="mb-3">
                        <label for="description" class="form-label">"Description:"</label>
                        <textarea
                            id="description"
                            name="description"
                            class="form-control"
                            prop:value=move || value(ProductField::Description)
                            on:input=move |ev| form.update(|f| f.update_field(ProductField::Description, &event_target_value(&ev)))
                            required
                        ></textarea>
                    </div>

                    <div class="mb-3">
                        <label for="price" class="form-label">"Price ($):"</label>
                        <input
                            type="number"
                            step="0.01"
                            id="price"
                            name="price"
                            class="form-control"
                            prop:value=move || value(ProductField::Price)
                            on:input=move |ev| form.update(|f| f.update_field(ProductField::Price, &event_target_value(&ev)))
                            required
                        />
                    </div>

                    <div class="mb-3">
                        <label for="imageUrl" class="form-label">"Image URL:"</label>
                        <input
                            type="url"
                            id="imageUrl"
                            name="imageUrl"
                            class="form-control"
                            prop:value=move || value(ProductField::ImageUrl)
                            on:input=move |ev| form.update(|f| f.update_field(ProductField::ImageUrl, &event_target_value(&ev)))
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-success"
                        disabled=move || form.with(|f| f.is_saving())
                    >
                        {if is_edit { "Update Product" } else { "Create Product" }}
                    </button>
                </form>
            </div>
        </Show>
    }
}
