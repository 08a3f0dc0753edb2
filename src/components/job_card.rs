//! Job Card Component
//!
//! One matched posting with score badge, selection checkbox and apply button.

use leptos::prelude::*;

use crate::models::Job;

/// Badge colour class for a match score
pub fn score_class(score: u8) -> &'static str {
    if score >= 80 {
        "score-badge high"
    } else if score >= 50 {
        "score-badge medium"
    } else {
        "score-badge low"
    }
}

#[component]
pub fn JobCard(
    job: Job,
    #[prop(into)] selected: Signal<bool>,
    #[prop(into)] applying: Signal<bool>,
    on_toggle: Callback<String>,
    on_apply: Callback<Job>,
) -> impl IntoView {
    let title = job.posting.title.clone();
    let id = job.id.clone();
    let score = job.score;
    let url = job.posting.url.clone();
    let subtitle = format!("{} • {}", job.posting.company, job.posting.location);
    let apply_job = job.clone();

    view! {
        <div class="job-card">
            <input
                type="checkbox"
                class="job-select"
                aria-label=format!("Select {}", title)
                prop:checked=move || selected.get()
                disabled=move || applying.get()
                on:change=move |_| on_toggle.run(id.clone())
            />
            <div class="job-card-header">
                <h3 class="job-title">
                    {title.clone()}
                    {(!url.is_empty()).then(|| view! {
                        <a
                            class="job-link"
                            href=url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=format!("View job posting for {}", title)
                        >
                            "↗"
                        </a>
                    })}
                </h3>
                <p class="job-subtitle">{subtitle}</p>
            </div>
            <div class="job-card-score">
                <span class=score_class(score) aria-label=format!("Match score: {}%", score)>
                    {format!("Match: {}%", score)}
                </span>
            </div>
            <button
                class="btn btn-primary job-apply"
                disabled=move || applying.get()
                aria-label=format!("Apply to {}", job.posting.title)
                on:click=move |_| on_apply.run(apply_job.clone())
            >
                {move || if applying.get() { "Applying..." } else { "Apply" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_thresholds() {
        assert_eq!(score_class(100), "score-badge high");
        assert_eq!(score_class(80), "score-badge high");
        assert_eq!(score_class(79), "score-badge medium");
        assert_eq!(score_class(50), "score-badge medium");
        assert_eq!(score_class(49), "score-badge low");
        assert_eq!(score_class(0), "score-badge low");
    }
}
