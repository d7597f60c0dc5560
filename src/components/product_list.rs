//! Product List Component
//!
//! Paginated product table with edit links and inline delete.

use catalog_client::api::ProductApi;
use catalog_client::controllers::{PageRequest, PageUpdate, ProductListController, DEFAULT_PAGE_SIZE};
use catalog_client::models::ProductListEntry;
use catalog_client::Route;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, PaginationBar};
use crate::context::use_app_context;

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_app_context();
    let list = RwSignal::new(ProductListController::new(DEFAULT_PAGE_SIZE));

    // Send a page request and apply the answer (stale answers are dropped by the controller).
    // If the page count shrank under us, follow the controller back to the last page.
    let fetch = move |request: Option<PageRequest>| {
        let Some(mut request) = request else { return };
        let api = ctx.services().products;
        spawn_local(async move {
            loop {
                let result = request.send(api.as_ref()).await;
                match list.try_update(|l| l.apply_page(request, result)) {
                    Some(PageUpdate::Clamped(next)) => request = next,
                    _ => break,
                }
            }
        });
    };

    let delete = move |id: String| {
        let api = ctx.services().products;
        spawn_local(async move {
            let result = api.delete_product(&id).await;
            let _ = list.try_update(|l| l.apply_delete(&id, result));
        });
    };

    fetch(list.try_update(|l| l.load_page(0, DEFAULT_PAGE_SIZE)));

    view! {
        <div class="container mt-4">
            <h2>"Product List"</h2>
            <a href=format!("#{}", Route::Create.path()) class="btn btn-primary mb-3">
                "Add New Product"
            </a>

            {move || list.with(|l| l.error().map(|e| view! {
                <div class="alert alert-danger">{e.to_string()}</div>
            }))}

            {move || list.with(|l| {
                if l.is_loading() && l.entries().is_empty() {
                    view! { <div>"Loading products..."</div> }.into_any()
                } else if l.entries().is_empty() {
                    view! { <p>"No products available."</p> }.into_any()
                } else {
                    let rows = l.entries().to_vec();
                    view! {
                        <table class="table table-bordered">
                            <thead class="table-light">
                                <tr>
                                    <th>"Image"</th>
                                    <th>"ID"</th>
                                    <th>"Name"</th>
                                    <th>"Description"</th>
                                    <th>"Price ($)"</th>
                                    <th>"Quantity"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows.into_iter()
                                    .map(|entry| view! { <ProductRow entry=entry on_delete=delete /> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            })}

            <PaginationBar
                page=Signal::derive(move || list.with(|l| l.page()))
                total_pages=Signal::derive(move || list.with(|l| l.total_pages()))
                can_previous=Signal::derive(move || list.with(|l| l.can_previous() && !l.is_loading()))
                can_next=Signal::derive(move || list.with(|l| l.can_next() && !l.is_loading()))
                on_previous=move |_| fetch(list.try_update(|l| l.previous()).flatten())
                on_next=move |_| fetch(list.try_update(|l| l.next()).flatten())
            />
        </div>
    }
}

#[component]
fn ProductRow(entry: ProductListEntry, #[prop(into)] on_delete: Callback<String>) -> impl IntoView {
    let ProductListEntry { product, stock } = entry;
    let id = product.id.clone();
    let edit_href = format!("#{}", Route::Edit(product.id.clone()).path());

    view! {
        <tr>
            <td>
                <img src=product.image_url width="100" height="100" alt=product.name.clone() />
            </td>
            <td>{product.id}</td>
            <td>{product.name}</td>
            <td>{product.description}</td>
            <td>{format!("{:.2}", product.price)}</td>
            <td>{stock.qty}</td>
            <td>
                <a href=edit_href class="btn btn-sm btn-warning me-2">"Edit"</a>
                <DeleteConfirmButton
                    button_class="btn btn-sm btn-danger"
                    on_confirm=move |_| on_delete.run(id.clone())
                />
            </td>
        </tr>
    }
}
