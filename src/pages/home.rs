// Home page - full landing section stack
use crate::sections::{
    ActionPlan, CaseStudies, Footer, Hero, Insights, ToolCategories, ValidationFramework,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Insights />
        <ToolCategories />
        <ValidationFramework />
        <CaseStudies />
        <ActionPlan />
        <Footer />
    }
}
