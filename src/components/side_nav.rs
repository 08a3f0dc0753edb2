//! Side Navigation Component
//!
//! One link per page; collapses to icons only.

use leptos::prelude::*;

use crate::route::Route;
use crate::context::use_app_context;

#[component]
pub fn SideNav(#[prop(into)] collapsed: Signal<bool>) -> impl IntoView {
    let ctx = use_app_context();

    let nav_class = move || {
        if collapsed.get() { "side-nav collapsed" } else { "side-nav" }
    };

    view! {
        <nav class=nav_class aria-label="Main navigation">
            <ul>
                {Route::ALL.into_iter().map(|route| {
                    let link_class = move || {
                        if ctx.router.current() == route { "nav-link active" } else { "nav-link" }
                    };
                    let on_click = move |ev: web_sys::MouseEvent| {
                        // Plain clicks stay in-app; modified clicks open normally
                        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                            return;
                        }
                        ev.prevent_default();
                        ctx.navigate(route);
                    };
                    view! {
                        <li>
                            <a
                                class=link_class
                                href=route.path()
                                title=route.label()
                                aria-current=move || (ctx.router.current() == route).then_some("page")
                                on:click=on_click
                            >
                                <span class="nav-icon" aria-hidden="true">{route.icon()}</span>
                                <Show when=move || !collapsed.get()>
                                    <span class="nav-label">{route.label()}</span>
                                </Show>
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
