use super::VERSION;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let badge_text = format!("{} — The Inside-Out Playbook", VERSION);
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {badge_text}
                    </div>
                    <h1 class="hero-title">
                        "Turn your "
                        <span class="hero-title-accent">"internal tool"</span>
                        <br />
                        "into a product."
                    </h1>
                    <p class="hero-description">
                        "The deploy bot, the log sifter, the dashboard nobody asked you to build. "
                        "If it was very useful at one company, it is very useful at others. "
                        "Score your tool, study the precedents, follow the launch plan."
                    </p>
                    <div class="hero-actions">
                        <a href="#validation" class="btn btn-primary">
                            "Score Your Tool"
                        </a>
                        <a href="#case-studies" class="btn btn-secondary">
                            "View Case Studies →"
                        </a>
                    </div>
                    <div class="hero-stats">
                        <StatTile value="10,000+" label="Teams share your pain point" />
                        <StatTile value="< 10 min" label="Integration time that wins deals" />
                        <StatTile value="4 steps" label="From repo to launch" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatTile(value: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="stat-tile">
            <div class="stat-value">{value}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
