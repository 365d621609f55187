//! This crate contains all shared fullstack server functions.

pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod evolution;
pub mod instance;
pub mod message;

use dioxus::prelude::*;
use instance::Instance;
use message::SendTextData;
use message::SendTextResponse;

pub type ApiError = anyhow::Error;

/// Sends a plain text message from the given instance.
///
/// The instance `token` is forwarded to the Evolution API as the `apikey`
/// header. Sending to a number with no prior history is what opens a new
/// conversation on the Evolution side.
#[post("/api/send_text")]
pub async fn send_text(
    instance_name: String,
    token: String,
    data: SendTextData,
) -> Result<SendTextResponse, ApiError> {
    let client = evolution::EvolutionClient::from_env();
    let response = client.send_text(&instance_name, &token, &data).await?;

    dioxus_logger::tracing::info!(
        "sent text from instance {} to {}",
        instance_name,
        data.number
    );

    Ok(response)
}

/// Looks up a single instance by id using the global api key.
#[post("/api/fetch_instance")]
pub async fn fetch_instance(instance_id: String) -> Result<Option<Instance>, ApiError> {
    let client = evolution::EvolutionClient::from_env();
    let instance = client.fetch_instance(&instance_id).await?;

    if instance.is_none() {
        dioxus_logger::tracing::warn!("instance {} not found", instance_id);
    }

    Ok(instance)
}
