//! Browser entrypoint for the component showcase.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    aria_ui_showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `aria_ui_showcase_app` for wasm32 with the `csr` feature and serve it with trunk."
    );
}
