use api::config::EvolutionConfig;
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    // the embedded server talks to evolution directly, so surface where.
    let config = EvolutionConfig::from_env();
    dioxus_logger::tracing::info!("evolution api at {}", config.base_url());
    if config.global_api_key().is_none() {
        dioxus_logger::tracing::warn!("EVOLUTION_API_KEY not set; instance lookups will fail");
    }

    dioxus::launch(Manager);
}

#[component]
fn Manager() -> Element {
    ui::App()
}
