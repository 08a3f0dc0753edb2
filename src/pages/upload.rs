//! Upload Page
//!
//! Pick one résumé, send it to the parser, then continue to matches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{upload_resume, RESUME_EXTENSIONS};
use crate::components::FileDropzone;
use crate::context::use_app_context;
use crate::route::Route;
use crate::store::{store_set_candidate, use_app_store};
use crate::toast::Notification;

#[component]
pub fn UploadPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let files = RwSignal::new_local(Vec::<web_sys::File>::new());
    let (uploading, set_uploading) = signal(false);

    let on_files = Callback::new(move |picked: Vec<web_sys::File>| {
        log::debug!("[UPLOAD] Selected {} file(s)", picked.len());
        files.set(picked);
    });

    let on_rejected = Callback::new(move |name: String| {
        ctx.toaster.add(Notification::error(
            "Unsupported File",
            format!("{} is not a PDF or DOCX file.", name),
        ));
    });

    let do_upload = move |_| {
        let Some(file) = files.with_untracked(|f| f.first().cloned()) else { return };
        if uploading.get_untracked() {
            return;
        }
        set_uploading.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match upload_resume(&api, &file).await {
                Ok(candidate) => {
                    store_set_candidate(&store, candidate);
                    files.set(Vec::new());
                    ctx.toaster.success("Success", "Resume uploaded successfully! Redirecting to matches...");
                    ctx.navigate(Route::Matches);
                }
                Err(err) => {
                    log::error!("[UPLOAD] {}", err);
                    ctx.toaster.add(Notification::error("Upload Failed", err.detail()));
                }
            }
            set_uploading.try_set(false);
        });
    };

    let file_name = move || files.with(|f| f.first().map(|f| f.name()));

    view! {
        <div class="page upload-page">
            <h2>"Upload Resume"</h2>
            <p class="page-subtitle">"We'll parse your résumé and find matching jobs."</p>
            <FileDropzone
                accept=RESUME_EXTENSIONS
                uploading=uploading
                on_files=on_files
                on_rejected=on_rejected
            />
            {move || file_name().map(|name| view! {
                <div class="selected-file">
                    <span class="selected-file-name">{name}</span>
                    <button
                        class="btn btn-ghost"
                        aria-label="Remove file"
                        disabled=move || uploading.get()
                        on:click=move |_| files.set(Vec::new())
                    >
                        "✕"
                    </button>
                </div>
            })}
            <button
                class="btn btn-primary"
                disabled=move || uploading.get() || files.with(|f| f.is_empty())
                on:click=do_upload
            >
                {move || if uploading.get() { "Parsing..." } else { "Parse & Match" }}
            </button>
        </div>
    }
}
