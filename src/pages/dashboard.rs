use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{Card, CardContent, PriceChart};
use crate::models::PricePoint;
use crate::services::fetch_prices;

#[component]
pub fn Dashboard() -> impl IntoView {
    let (prices, set_prices) = signal(Vec::<PricePoint>::new());
    let (loading, set_loading) = signal(true);

    // Load data on mount. The component body runs once per mount, so the
    // fetch cannot be re-issued by re-renders. A failure is logged and
    // swallowed; the view still reaches the loaded state with an empty
    // series and renders an empty plot.
    spawn_local(async move {
        match fetch_prices().await {
            Ok(points) => set_prices.set(points),
            Err(err) => {
                web_sys::console::error_1(&format!("Error fetching data: {}", err).into());
            }
        }
        set_loading.set(false);
    });

    view! {
        <Show
            when=move || !loading.get()
            fallback=move || view! { <div class="loading">"Loading data..."</div> }
        >
            <div class="page">
                <h1>"Brent Oil Price Dashboard"</h1>
                <Card>
                    <CardContent>
                        <PriceChart prices=prices width=760 height=420/>
                    </CardContent>
                </Card>
            </div>
        </Show>
    }
}
