//! Matches Page
//!
//! Jobs matched to the active candidate, with single and bulk apply.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{fetch_jobs, submit_applications};
use crate::components::{BulkToolbar, CandidateSummary, JobCard, Spinner};
use crate::context::use_app_context;
use crate::error::ApiError;
use crate::models::{Job, JobPosting};
use crate::route::Route;
use crate::store::{store_candidate_id, use_app_store, AppStateStoreFields};
use crate::toast::{Notification, Toaster};

/// Toast text for a successful submission of `count` jobs
pub fn queued_message(count: usize) -> String {
    format!(
        "Successfully queued {} job application{}!",
        count,
        if count == 1 { "" } else { "s" }
    )
}

/// Toggle `id` in the selection, keeping click order
pub fn toggle_selection(selected: &mut Vec<String>, id: &str) {
    if let Some(pos) = selected.iter().position(|s| s == id) {
        selected.remove(pos);
    } else {
        selected.push(id.to_string());
    }
}

/// How the page starts for the active candidate
#[derive(Debug, Clone, PartialEq)]
pub enum MatchesStart {
    /// No candidate: leave for this route without fetching
    Redirect(Route),
    Fetch(String),
}

/// Decide whether matches can be fetched. Without a candidate this raises
/// the single "No Resume Found" toast.
pub fn start_matches(candidate_id: Option<String>, toaster: &Toaster) -> MatchesStart {
    match candidate_id {
        Some(id) => MatchesStart::Fetch(id),
        None => {
            log::error!("[MATCHES] {}", ApiError::MissingCandidate);
            toaster.add(Notification::error("No Resume Found", "Please upload a resume first."));
            MatchesStart::Redirect(Route::Upload)
        }
    }
}

#[component]
pub fn MatchesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let jobs = RwSignal::new(Vec::<Job>::new());
    let (loading, set_loading) = signal(true);
    let selected = RwSignal::new(Vec::<String>::new());
    let (applying, set_applying) = signal(false);

    let candidate_id = store_candidate_id(&store);

    match start_matches(candidate_id.clone(), &ctx.toaster) {
        MatchesStart::Redirect(route) => {
            // Runs once after mount
            Effect::new(move |_| ctx.router.redirect(route));
        }
        MatchesStart::Fetch(id) => {
            let api = ctx.api();
            spawn_local(async move {
                match fetch_jobs(&api, &id).await {
                    Ok(postings) => {
                        log::info!("[MATCHES] {} job(s) for {}", postings.len(), id);
                        jobs.try_set(postings.into_iter().map(Job::from).collect());
                    }
                    Err(err) => {
                        ctx.report("Error", "Failed to fetch job matches. Please try again later.", &err);
                        jobs.try_set(Vec::new());
                    }
                }
                set_loading.try_set(false);
            });
        }
    }

    let apply = move |ids: Vec<String>| {
        let Some(candidate_id) = candidate_id.clone() else {
            ctx.report("No Resume Found", "Please upload a resume first.", &ApiError::MissingCandidate);
            ctx.navigate(Route::Upload);
            return;
        };
        if ids.is_empty() || applying.get_untracked() {
            return;
        }
        let postings: Vec<JobPosting> = jobs.with_untracked(|jobs| {
            jobs.iter()
                .filter(|job| ids.contains(&job.id))
                .map(|job| job.posting.clone())
                .collect()
        });
        set_applying.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match submit_applications(&api, &candidate_id, &postings).await {
                Ok(receipt) => {
                    if let Some(message) = receipt.message {
                        log::info!("[MATCHES] {}", message);
                    }
                    ctx.toaster.add(Notification::success("Applications Submitted", queued_message(ids.len())));
                    selected.try_set(Vec::new());
                }
                Err(err) => {
                    ctx.report("Error", "Failed to submit job applications. Please try again later.", &err);
                }
            }
            set_applying.try_set(false);
        });
    };
    let apply = StoredValue::new(apply);

    let on_toggle = Callback::new(move |id: String| selected.update(|s| toggle_selection(s, &id)));
    let on_apply = Callback::new(move |job: Job| apply.with_value(|apply| apply(vec![job.id])));
    let on_bulk_apply = Callback::new(move |_: ()| {
        let ids = selected.get_untracked();
        apply.with_value(|apply| apply(ids));
    });
    let on_email = Callback::new(move |_: ()| {
        log::info!("[MATCHES] Email requested for {} job(s)", selected.with_untracked(|s| s.len()));
        ctx.toaster.add(Notification::info("Email", "Emailing job lists is not available yet."));
    });
    let on_clear = Callback::new(move |_: ()| selected.set(Vec::new()));

    let selected_count = Signal::derive(move || selected.with(|s| s.len()));

    view! {
        <div class="page matches-page">
            {move || store.candidate().get().map(|candidate| view! {
                <CandidateSummary candidate=candidate />
            })}

            <BulkToolbar
                selected_count=selected_count
                applying=applying
                on_apply=on_bulk_apply
                on_email=on_email
                on_clear=on_clear
            />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <Spinner label="Finding your matches..." /> }
            >
                <Show
                    when=move || jobs.with(|j| !j.is_empty())
                    fallback=|| view! {
                        <div class="empty-state">
                            <div class="empty-icon">"⌕"</div>
                            <span>"No job matches found."</span>
                        </div>
                    }
                >
                    <div class="job-grid">
                        <For
                            each=move || jobs.get()
                            key=|job| job.id.clone()
                            children=move |job| {
                                let id = job.id.clone();
                                let is_selected = Signal::derive(move || selected.with(|s| s.contains(&id)));
                                view! {
                                    <JobCard
                                        job=job
                                        selected=is_selected
                                        applying=applying
                                        on_toggle=on_toggle
                                        on_apply=on_apply
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::config::DEFAULT_TOAST_MS;
    use crate::timer::manual::ManualScheduler;
    use crate::toast::Variant;

    #[test]
    fn test_missing_candidate_redirects_with_one_error_toast() {
        let owner = Owner::new();
        owner.set();
        let sched = ManualScheduler::new();
        let toaster = Toaster::new(Rc::new(sched.clone()), DEFAULT_TOAST_MS);

        let start = start_matches(None, &toaster);

        assert_eq!(start, MatchesStart::Redirect(Route::Upload));
        let toasts = toaster.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].variant, Variant::Error);
        assert_eq!(toasts[0].title, "No Resume Found");
        assert_eq!(sched.live(), 1);
    }

    #[test]
    fn test_candidate_present_fetches_without_toast() {
        let owner = Owner::new();
        owner.set();
        let sched = ManualScheduler::new();
        let toaster = Toaster::new(Rc::new(sched.clone()), DEFAULT_TOAST_MS);

        let start = start_matches(Some("c-1".into()), &toaster);

        assert_eq!(start, MatchesStart::Fetch("c-1".into()));
        assert!(toaster.toasts().is_empty());
        assert_eq!(sched.live(), 0);
    }

    #[test]
    fn test_queued_message_pluralises() {
        assert_eq!(queued_message(1), "Successfully queued 1 job application!");
        assert_eq!(queued_message(3), "Successfully queued 3 job applications!");
    }

    #[test]
    fn test_toggle_selection() {
        let mut selected = Vec::new();
        toggle_selection(&mut selected, "https://jobs/1");
        toggle_selection(&mut selected, "https://jobs/2");
        assert_eq!(selected, vec!["https://jobs/1", "https://jobs/2"]);
        toggle_selection(&mut selected, "https://jobs/1");
        assert_eq!(selected, vec!["https://jobs/2"]);
    }
}
