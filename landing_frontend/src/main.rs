use landing_frontend::components::Intro;
use leptos::mount::mount_to_body;
use leptos::prelude::*;

fn main() {
    // set up logging
    tracing_wasm::set_as_global_default();
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        view! {
            <main class="min-h-screen bg-black">
                <Intro/>
            </main>
        }
    })
}
