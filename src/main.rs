//! Client-side entry point (built with `trunk` and the `csr` feature).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger not installed: {e}").into());
        }
        leptos::mount::mount_to_body(locboard::app::App);
    }
}
