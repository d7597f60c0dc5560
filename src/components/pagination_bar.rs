//! Pagination Bar Component

use leptos::prelude::*;

/// Previous / "Page x of y" / Next, with the buttons disabled at the ends
#[component]
pub fn PaginationBar(
    page: Signal<u32>,
    total_pages: Signal<u32>,
    can_previous: Signal<bool>,
    can_next: Signal<bool>,
    #[prop(into)] on_previous: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn btn-secondary"
                disabled=move || !can_previous.get()
                on:click=move |_| on_previous.run(())
            >
                "Previous"
            </button>
            <span>{move || format!(" Page {} of {} ", page.get() + 1, total_pages.get())}</span>
            <button
                class="btn btn-secondary"
                disabled=move || !can_next.get()
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
