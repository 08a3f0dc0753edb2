//! App Layout Component
//!
//! Side navigation, top bar and the page area. Toasts render above all.

use leptos::prelude::*;

use super::{SideNav, ToastContainer, TopBar};

#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    let (collapsed, set_collapsed) = signal(false);
    let toggle = Callback::new(move |_: ()| set_collapsed.update(|c| *c = !*c));

    view! {
        <div class="app-layout">
            <SideNav collapsed=collapsed />
            <div class="app-body">
                <TopBar collapsed=collapsed on_toggle=toggle />
                <main class="main-content">{children()}</main>
            </div>
            <ToastContainer />
        </div>
    }
}
