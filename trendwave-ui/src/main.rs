//! Trendwave Dashboard
//!
//! Music streaming trends dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The `trendwave` library composes every screen as a view tree;
//! this crate paints those trees into the DOM and routes clicks and typing
//! back to the shell as actions. There is no server: all data is the
//! built-in dataset.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
