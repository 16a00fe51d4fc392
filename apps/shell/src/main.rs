mod app;
mod components;
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    leptos::prelude::mount_to_body(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
