//! App Root Component
//!
//! Lays out the shell and provides the global state.

use leptos::*;

use crate::components::NodeView;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let nav = state.nav();
    let active = create_memo(move |_| nav.get().active());

    // The header is rendered once: the search box owns its own text after
    // that, and rebuilding it would drop focus on every keystroke.
    let header = state.shell.with_untracked(|shell| shell.render_header());

    let sidebar_state = state.clone();
    let main_state = state.clone();

    view! {
        <div class="min-h-screen bg-slate-950 text-white flex">
            // Sidebar follows the navigation state
            {move || {
                nav.get();
                let node = sidebar_state.shell.with_untracked(|shell| shell.render_sidebar());
                view! { <NodeView node=node /> }
            }}

            <div class="flex-1 flex flex-col min-w-0">
                <NodeView node=header />

                // Content swaps only when the active section changes
                {move || {
                    active.get();
                    let node = main_state.shell.with_untracked(|shell| shell.render_main());
                    view! { <NodeView node=node /> }
                }}
            </div>
        </div>
    }
}
