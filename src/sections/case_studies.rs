use leptos::prelude::*;

struct CaseStudy {
    company: &'static str,
    category: &'static str,
    origin: &'static str,
    problem: &'static str,
    outcome: &'static str,
}

static CASE_STUDIES: [CaseStudy; 4] = [
    CaseStudy {
        company: "GitHub",
        category: "Code Collaboration",
        origin: "Internal Git collaboration tool",
        problem: "Better version control collaboration",
        outcome: "$7.5B acquisition by Microsoft",
    },
    CaseStudy {
        company: "PagerDuty",
        category: "DevOps",
        origin: "In-house alert handling system",
        problem: "Managing critical incidents and alerts",
        outcome: "$1.7B public company",
    },
    CaseStudy {
        company: "Retool",
        category: "Internal Tools",
        origin: "Internal admin tools at Stripe/Coinbase",
        problem: "Building internal dashboards quickly",
        outcome: "$3.2B valuation",
    },
    CaseStudy {
        company: "Jira",
        category: "Project Management",
        origin: "Atlassian's project tracker",
        problem: "Issue tracking and project management",
        outcome: "Part of $58B Atlassian",
    },
];

#[component]
pub fn CaseStudies() -> impl IntoView {
    view! {
        <section id="case-studies" class="case-studies">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Precedents"</p>
                    <h2 class="section-title">"Billion-dollar tools started internal"</h2>
                    <p class="section-description">
                        "These companies turned their internal tools into market-defining products."
                    </p>
                </div>
                <div class="studies-grid">
                    {CASE_STUDIES.iter().map(|study| view! {
                        <article class="study-card">
                            <div class="study-header">
                                <h3 class="study-company">{study.company}</h3>
                                <span class="study-category">{study.category}</span>
                            </div>
                            <div class="study-row">
                                <h4>"Origin"</h4>
                                <p>{study.origin}</p>
                            </div>
                            <div class="study-row">
                                <h4>"Problem Solved"</h4>
                                <p>{study.problem}</p>
                            </div>
                            <div class="study-outcome">
                                <h4>"Outcome"</h4>
                                <p>{study.outcome}</p>
                            </div>
                        </article>
                    }).collect_view()}
                </div>

                <div class="studies-cta">
                    <h3>"Your tool could be next"</h3>
                    <p>
                        "Every successful developer tool started as someone solving their own "
                        "problem. The key is recognizing when that solution has broader appeal."
                    </p>
                </div>
            </div>
        </section>
    }
}
