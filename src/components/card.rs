use leptos::prelude::*;

/// Bordered, padded, shadowed container. Pure layout, no state.
#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! {
        <div class="card">
            {children()}
        </div>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! {
        <div class="card-content">
            {children()}
        </div>
    }
}
