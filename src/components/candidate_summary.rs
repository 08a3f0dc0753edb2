//! Candidate Summary Component

use leptos::prelude::*;

use crate::models::Candidate;

/// "1 year" / "3 years" / "2.5 years"
pub fn experience_label(years: f64) -> String {
    let shown = if years.fract() == 0.0 { format!("{}", years as i64) } else { format!("{:.1}", years) };
    let unit = if years == 1.0 { "year" } else { "years" };
    format!("Experience: {} {}", shown, unit)
}

#[component]
pub fn CandidateSummary(candidate: Candidate) -> impl IntoView {
    let name = candidate.display_name().to_string();
    let location = candidate.location.clone().unwrap_or_default();

    view! {
        <section class="candidate-summary" aria-label="Candidate summary">
            <div class="resume-preview" aria-label="Résumé preview placeholder">
                <span>"PDF Preview"</span>
            </div>
            <div class="candidate-info">
                <h2 class="candidate-name">{name}</h2>
                {(!location.is_empty()).then(|| view! {
                    <div class="candidate-location">"📍 " {location.clone()}</div>
                })}
                <div class="candidate-skills">
                    {candidate.skills.iter().map(|skill| view! {
                        <span class="skill-chip">{skill.clone()}</span>
                    }).collect_view()}
                </div>
                {candidate.experience_years.map(|years| view! {
                    <div class="candidate-experience">{experience_label(years)}</div>
                })}
            </div>
        </section>
    }
}
