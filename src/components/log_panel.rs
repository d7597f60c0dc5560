//! Log Panel Component
//!
//! Collapsed panel under the main view listing the logger's recent lines,
//! newest last. The list is re-read whenever the panel is opened or refreshed.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let lines = RwSignal::new(Vec::<String>::new());
    let refresh = move || lines.set(console_logger::recent());

    view! {
        <details class="container mt-4 small text-muted" on:toggle=move |_| refresh()>
            <summary>"Recent log"</summary>
            <button class="btn btn-sm btn-outline-secondary my-2" on:click=move |_| refresh()>
                "Refresh"
            </button>
            <pre class="border rounded p-2 bg-light">
                {move || lines.with(|l| {
                    if l.is_empty() { "No log lines yet.".to_string() } else { l.join("\n") }
                })}
            </pre>
        </details>
    }
}
