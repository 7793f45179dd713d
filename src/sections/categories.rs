use leptos::prelude::*;

#[component]
pub fn ToolCategories() -> impl IntoView {
    view! {
        <section id="categories" class="categories">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Tool Taxonomy"</p>
                    <h2 class="section-title">"What kind of tool did you build?"</h2>
                    <p class="section-description">
                        "Identify the category of your internal tool to understand its market potential."
                    </p>
                </div>
                <div class="categories-grid">
                    <CategoryCard
                        icon="[br]"
                        title="Build & Release Tools"
                        description="CI/CD pipelines, deploy automation, test runners."
                        examples=["Pre-tested deploy paths", "Automated rollback logic", "Ephemeral environments"]
                    />
                    <CategoryCard
                        icon="[sec]"
                        title="DevSecOps"
                        description="Security scanning, dependency auditing, policy enforcement."
                        examples=["Secret scanning", "SBOM awareness", "Security without slowdown"]
                    />
                    <CategoryCard
                        icon="[data]"
                        title="Data & Analytics"
                        description="ETL pipelines, data validation, debugging tools."
                        examples=["Simpler than Airflow", "Real-time validation", "Flaky job debugging"]
                    />
                    <CategoryCard
                        icon="[code]"
                        title="Code Collaboration"
                        description="Code search, review automation, knowledge graphs."
                        examples=["Codebase knowledge graph", "Git hook automation", "Chat-integrated reviews"]
                    />
                    <CategoryCard
                        icon="[ops]"
                        title="ChatOps & Admin"
                        description="Bots for cloud resources, no-code dashboards."
                        examples=["Cloud resource management", "PM/analyst dashboards", "Internal status pages"]
                    />
                    <CategoryCard
                        icon="[dx]"
                        title="Developer Experience"
                        description="Tools that make developers more productive."
                        examples=["Local dev environments", "API mocking", "Performance profiling"]
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    examples: [&'static str; 3],
) -> impl IntoView {
    view! {
        <article class="category-card">
            <div class="category-icon">{icon}</div>
            <h3 class="category-title">{title}</h3>
            <p class="category-description">{description}</p>
            <ul class="category-examples">
                {examples.iter().map(|e| view! { <li>{*e}</li> }).collect_view()}
            </ul>
        </article>
    }
}
