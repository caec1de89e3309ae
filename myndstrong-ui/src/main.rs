//! MyndStrong Front-end
//!
//! Mental health companion single-page app built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It has no data source at runtime: every card comes from the
//! content tables in the `myndstrong` crate, and view switching is a signal,
//! not a route. Build with `trunk build --release`; the `myndstrong` host
//! binary serves the resulting `dist/` directory.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
