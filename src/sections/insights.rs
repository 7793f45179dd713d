use leptos::prelude::*;

#[component]
pub fn Insights() -> impl IntoView {
    view! {
        <section id="insights" class="insights">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"The Inside-Out Playbook"</p>
                    <h2 class="section-title">"Why internal tools make great startups"</h2>
                    <p class="section-description">
                        "The lineage of all software tools traces back to something a programmer "
                        "built to solve their own painful problem. Four signals say yours is next."
                    </p>
                </div>
                <div class="insights-grid">
                    <InsightCard
                        icon="[1]"
                        title="The Hidden Goldmine"
                        description="Internal tools with funny nicknames that never see daylight."
                        quote="If it's very useful at one company, it's very useful at others."
                        indicators=["Deploy bot \"Jenkins Jr.\"", "Database migrator \"DBuddy\"", "Log analyzer \"Sherlock\""]
                    />
                    <InsightCard
                        icon="[2]"
                        title="Proven Problem-Solution Fit"
                        description="These tools solved real, painful problems at scale."
                        quote="Built by programmers to solve their own particularly painful problems."
                        indicators=["Saved hours daily", "Prevented production outages", "Eliminated manual processes"]
                    />
                    <InsightCard
                        icon="[3]"
                        title="Natural Adoption Pattern"
                        description="Tools that spread organically prove market demand."
                        quote="The lineage of all software tools traces back to something a programmer built."
                        indicators=["Other teams requested access", "Became part of standard workflow", "Reduced support tickets"]
                    />
                    <InsightCard
                        icon="[4]"
                        title="Startup Inspiration Source"
                        description="Your competitive advantage is knowing what works."
                        quote="Aspiring founders don't realize internal tools are great inspiration sources."
                        indicators=["You know the exact pain point", "You understand the workflow", "You've seen it work at scale"]
                    />
                </div>

                <div class="insights-summary">
                    <h3>"The pattern is clear"</h3>
                    <p>
                        "Every successful developer tool started as someone solving their own "
                        "problem. GitHub, Jira, PagerDuty, and Retool all began as internal "
                        "solutions that teams loved so much they couldn't imagine working "
                        "without them. There is no reason to doubt this pattern will continue."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InsightCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    quote: &'static str,
    indicators: [&'static str; 3],
) -> impl IntoView {
    view! {
        <article class="insight-card">
            <div class="insight-icon">{icon}</div>
            <h3 class="insight-title">{title}</h3>
            <p class="insight-description">{description}</p>
            <blockquote class="insight-quote">{format!("\u{201c}{quote}\u{201d}")}</blockquote>
            <h4 class="insight-indicators-label">"Key indicators"</h4>
            <ul class="insight-indicators">
                {indicators.iter().map(|i| view! { <li>{*i}</li> }).collect_view()}
            </ul>
        </article>
    }
}
