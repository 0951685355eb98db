// ArtzyBear studio page - Leptos 0.8 Edition

mod sections;
mod telemetry;

use artzybear_commissions::SiteConfig;
use artzybear_commissions::{HttpStudioApi, workflow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = SiteConfig::from_build_env();
    telemetry::init(config.log_filter());
    tracing::info!(backend = config.backend_url(), "mounting studio page");
    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    // One client for the whole page; sections clone it from context.
    let api = HttpStudioApi::new(config.clone());
    provide_context(config);
    provide_context(api.clone());

    // One-shot connectivity check; the outcome only reaches the console.
    Effect::new(move || {
        let api = api.clone();
        spawn_local(async move {
            workflow::probe_health(&api).await;
        });
    });

    view! {
        <div class="app">
            <Nav />
            <main>
                <Hero />
                <Portfolio />
                <CommissionSection />
                <About />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}
