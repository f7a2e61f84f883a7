//! Global Application State
//!
//! Reactive wrapper around the dashboard shell using Leptos signals.

use leptos::*;
use trendwave::config::Config;
use trendwave::navigation::NavState;
use trendwave::shell::Shell;
use trendwave::view::Action;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Session state and dataset
    pub shell: RwSignal<Shell>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        shell: create_rw_signal(Shell::from_config(&Config::default())),
    };

    provide_context(state);
}

impl GlobalState {
    /// Apply an action emitted by a clicked or edited node
    pub fn dispatch(&self, action: Action) {
        self.shell.update(|shell| {
            shell.dispatch(action);
        });
    }

    /// Navigation snapshot that only notifies when it actually changes
    pub fn nav(&self) -> Memo<NavState> {
        let shell = self.shell;
        create_memo(move |_| shell.with(|s| s.nav()))
    }
}
