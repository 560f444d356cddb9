fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        use ledgerly_web::app::App;

        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        leptos::mount::mount_to_body(App);
    }
}
