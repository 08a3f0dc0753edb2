//! File Dropzone Component
//!
//! Drag a file onto the zone or click it to browse. Only one file is taken;
//! files with other extensions are reported through `on_rejected`.

use leptos::html;
use leptos::prelude::*;
use web_sys::DragEvent;

use crate::api::accepts_file;

fn file_list_to_vec(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else { return Vec::new() };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn FileDropzone(
    accept: &'static [&'static str],
    #[prop(into)] uploading: Signal<bool>,
    on_files: Callback<Vec<web_sys::File>>,
    on_rejected: Callback<String>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let take = move |files: Vec<web_sys::File>| {
        let mut accepted = Vec::new();
        for file in files {
            if accepts_file(&file.name(), accept) {
                accepted.push(file);
            } else {
                on_rejected.run(file.name());
            }
        }
        // Single file only
        accepted.truncate(1);
        if !accepted.is_empty() {
            on_files.run(accepted);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !uploading.get_untracked() {
            set_is_over.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if uploading.get_untracked() {
            return;
        }
        take(file_list_to_vec(ev.data_transfer().and_then(|dt| dt.files())));
    };

    let on_click = move |_| {
        if uploading.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        take(file_list_to_vec(input.files()));
        // Allow picking the same file again
        input.set_value("");
    };

    let zone_class = move || {
        let mut c = String::from("dropzone");
        if is_over.get() { c.push_str(" active"); }
        if uploading.get() { c.push_str(" uploading"); }
        c
    };

    view! {
        <div
            class=zone_class
            role="button"
            tabindex="0"
            aria-disabled=move || uploading.get().to_string()
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
        >
            <input
                node_ref=input_ref
                type="file"
                class="dropzone-input"
                accept=accept.join(",")
                on:change=on_change
            />
            <Show
                when=move || uploading.get()
                fallback=move || view! {
                    <div class="dropzone-icon">"☁"</div>
                    <p class="dropzone-hint">"Drag & drop PDF/DOCX here or click to browse"</p>
                }
            >
                <div class="dropzone-overlay"><div class="spinner large"></div></div>
            </Show>
        </div>
    }
}
