use crate::checklist::{SelectionSet, project};
use leptos::prelude::*;

/// Weight classification for a validation criterion.
#[derive(Clone, Copy)]
enum Weight {
    Critical,
    High,
    Medium,
}

impl Weight {
    fn label(self) -> &'static str {
        match self {
            Weight::Critical => "Critical",
            Weight::High => "High",
            Weight::Medium => "Medium",
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            Weight::Critical => "weight-critical",
            Weight::High => "weight-high",
            Weight::Medium => "weight-medium",
        }
    }
}

struct Criterion {
    id: u32,
    title: &'static str,
    question: &'static str,
    checkpoints: [&'static str; 3],
    weight: Weight,
}

static CRITERIA: [Criterion; 4] = [
    Criterion {
        id: 1,
        title: "Time Saved",
        question: "How many hours did this tool save your team weekly?",
        checkpoints: [
            "Saved 5+ hours per developer",
            "Eliminated repetitive tasks",
            "Cut deployment time in half",
        ],
        weight: Weight::High,
    },
    Criterion {
        id: 2,
        title: "Cost Replacement",
        question: "Did it replace expensive SaaS or prevent tool purchases?",
        checkpoints: [
            "Replaced $1000+/month tools",
            "Prevented new subscriptions",
            "Reduced infrastructure costs",
        ],
        weight: Weight::Medium,
    },
    Criterion {
        id: 3,
        title: "Organic Adoption",
        question: "Did other teams start using it without being forced?",
        checkpoints: [
            "Spread to other teams",
            "Developers requested access",
            "Became part of the workflow",
        ],
        weight: Weight::High,
    },
    Criterion {
        id: 4,
        title: "Problem Universality",
        question: "Do other companies have this same pain point?",
        checkpoints: [
            "Common in your industry",
            "Mentioned in tech blogs",
            "Discussed in forums and communities",
        ],
        weight: Weight::Critical,
    },
];

/// Ids of the fixed criteria list, in card order.
const CRITERION_IDS: [u32; 4] = [1, 2, 3, 4];

#[component]
pub fn ValidationFramework() -> impl IntoView {
    // Owned by this widget instance; resets on reload, shared with nothing.
    let (checked, set_checked) = signal(SelectionSet::new());

    let summary = move || checked.with(|sel| project(sel, &CRITERION_IDS));

    view! {
        <section id="validation" class="validation">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Self-Assessment"</p>
                    <h2 class="section-title">"Validate your tool's market potential"</h2>
                    <p class="section-description">
                        "Check every criterion your tool already meets. The score updates as you go."
                    </p>
                </div>
                <div class="validation-grid">
                    <div class="criteria-list">
                        {CRITERIA.iter().map(|c| {
                            let id = c.id;
                            view! {
                                <article
                                    class=move || if checked.get().contains(id) {
                                        "criterion-card checked"
                                    } else {
                                        "criterion-card"
                                    }
                                    on:click=move |_| set_checked.update(|sel| sel.toggle(id))
                                >
                                    <div class="criterion-header">
                                        <span class=move || if checked.get().contains(id) {
                                            "criterion-mark done"
                                        } else {
                                            "criterion-mark"
                                        }>
                                            {move || if checked.get().contains(id) { "ok" } else { "?" }}
                                        </span>
                                        <div class="criterion-heading">
                                            <h3 class="criterion-title">{c.title}</h3>
                                            <span class=format!("weight-badge {}", c.weight.css_class())>
                                                {c.weight.label()}
                                            </span>
                                        </div>
                                    </div>
                                    <p class="criterion-question">{c.question}</p>
                                    <ul class="criterion-checkpoints">
                                        {c.checkpoints.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}
                                    </ul>
                                </article>
                            }
                        }).collect_view()}
                    </div>

                    <div class="score-panel">
                        <h3 class="score-panel-title">"Validation Score"</h3>
                        <div class=move || format!("score-figure {}", summary().potential().css_class())>
                            {move || format!("{}/{}", summary().count, summary().total)}
                        </div>
                        <p class="score-message">{move || summary().potential().message()}</p>
                        <div class="score-meter">
                            <div class="score-meter-header">
                                <span class="score-meter-label">"Market validation"</span>
                                <span class=move || summary().potential().css_class()>
                                    {move || format!("{}%", summary().percentage)}
                                </span>
                            </div>
                            <div class="score-track">
                                <div
                                    class="score-fill"
                                    style=move || format!("width: {}%", summary().percentage)
                                ></div>
                            </div>
                        </div>
                        <Show when=move || (summary().count >= 2)>
                            <a href="#action-plan" class="btn btn-primary score-cta">
                                "Generate MVP Plan"
                            </a>
                        </Show>
                    </div>
                </div>
            </div>
        </section>
    }
}
