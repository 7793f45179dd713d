use crate::checklist::SelectionSet;
use leptos::prelude::*;

struct ActionStep {
    id: u32,
    title: &'static str,
    description: &'static str,
    tasks: [&'static str; 4],
    deliverable: &'static str,
}

static ACTION_STEPS: [ActionStep; 4] = [
    ActionStep {
        id: 1,
        title: "Identify Your Tool",
        description: "Document the internal tool that solved real problems.",
        tasks: [
            "List tools you built or used that saved significant time",
            "Identify which ones replaced expensive SaaS",
            "Note tools that spread organically to other teams",
            "Choose the one with the biggest impact",
        ],
        deliverable: "Tool selection with impact metrics",
    },
    ActionStep {
        id: 2,
        title: "Sketch Your MVP",
        description: "Define the core functionality and integration points.",
        tasks: [
            "Design the CLI/API entry point",
            "Identify the killer feature that saves the most time",
            "Map integration points with existing workflows",
            "Define the minimum viable feature set",
        ],
        deliverable: "MVP specification document",
    },
    ActionStep {
        id: 3,
        title: "Build a Landing Page",
        description: "Tell a compelling story and gather early interest.",
        tasks: [
            "Write a README with real examples",
            "Create a landing page explaining the problem",
            "Share with ex-coworkers and communities",
            "Gather feedback and gauge interest",
        ],
        deliverable: "Landing page with early user feedback",
    },
    ActionStep {
        id: 4,
        title: "Launch & Iterate",
        description: "Release the MVP and build on user feedback.",
        tasks: [
            "Release an open source version or beta",
            "Document real-world usage examples",
            "Build a community around the tool",
            "Plan the monetization strategy",
        ],
        deliverable: "Live product with a user base",
    },
];

#[component]
pub fn ActionPlan() -> impl IntoView {
    // Binary per-step completion; no aggregate score on this widget.
    let (done, set_done) = signal(SelectionSet::new());

    view! {
        <section id="action-plan" class="action-plan">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Launch Plan"</p>
                    <h2 class="section-title">"Your 4-step launch plan"</h2>
                    <p class="section-description">
                        "Work the list top to bottom and tick each step off as it lands."
                    </p>
                </div>
                <div class="steps-list">
                    {ACTION_STEPS.iter().map(|step| {
                        let id = step.id;
                        view! {
                            <article class=move || if done.get().contains(id) {
                                "step-card complete"
                            } else {
                                "step-card"
                            }>
                                <div class="step-header">
                                    <button
                                        class=move || if done.get().contains(id) {
                                            "step-toggle done"
                                        } else {
                                            "step-toggle"
                                        }
                                        on:click=move |_| set_done.update(|sel| sel.toggle(id))
                                    >
                                        {move || if done.get().contains(id) {
                                            "ok".to_string()
                                        } else {
                                            id.to_string()
                                        }}
                                    </button>
                                    <div class="step-heading">
                                        <h3 class="step-title">{step.title}</h3>
                                        <p class="step-description">{step.description}</p>
                                    </div>
                                    <span class=move || if done.get().contains(id) {
                                        "step-badge complete"
                                    } else {
                                        "step-badge"
                                    }>
                                        {move || if done.get().contains(id) { "Complete" } else { "Todo" }}
                                    </span>
                                </div>
                                <div class="step-body">
                                    <div class="step-tasks">
                                        <h4>"Action Items"</h4>
                                        <ul>
                                            {step.tasks.iter().map(|t| view! { <li>{*t}</li> }).collect_view()}
                                        </ul>
                                    </div>
                                    <div class="step-deliverable">
                                        <h4>"Deliverable"</h4>
                                        <p>{step.deliverable}</p>
                                    </div>
                                </div>
                            </article>
                        }
                    }).collect_view()}
                </div>

                <div class="launch-cta">
                    <h3>"Ready to launch?"</h3>
                    <p>
                        "Thousands of developers have turned the tool from their last job into "
                        "their next product. Templates, examples, and a community are waiting."
                    </p>
                    <div class="launch-cta-actions">
                        <a href="https://github.com/toolship/toolship" target="_blank" class="btn btn-primary">
                            "Get Launch Templates"
                        </a>
                        <a href="https://github.com/toolship/toolship/discussions" target="_blank" class="btn btn-secondary">
                            "Join the Community"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
