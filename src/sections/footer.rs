use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"toolship"</span>
                </div>
                <div class="footer-links">
                    <a href="https://github.com/toolship/toolship" target="_blank" class="footer-link">
                        "GitHub"
                    </a>
                    <a href="https://github.com/toolship/toolship/discussions" target="_blank" class="footer-link">
                        "Community"
                    </a>
                    <a href="https://github.com/toolship/toolship/blob/main/LICENSE" target="_blank" class="footer-link">
                        "MIT License"
                    </a>
                </div>
                <p class="footer-copyright">
                    "Developed with 🚀 by The Toolship Team (c)2025"
                </p>
            </div>
        </footer>
    }
}
