// Fallback for unmatched routes
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    // Surface broken inbound links in the console
    Effect::new(move || {
        web_sys::console::error_1(
            &format!("404: no route matches {}", location.pathname.get()).into(),
        );
    });

    view! {
        <section class="not-found">
            <div class="container">
                <h1 class="not-found-code">"404"</h1>
                <p class="not-found-message">"This page never shipped."</p>
                <A href="/" attr:class="btn btn-primary">
                    "Back to the launch pad"
                </A>
            </div>
        </section>
    }
}
