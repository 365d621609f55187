// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Shows a blocking browser alert.
    pub async fn alert(message: String) {
        match web_sys::window() {
            Some(window) => {
                if window.alert_with_message(&message).is_err() {
                    dioxus_logger::tracing::warn!("could not show alert: {}", message);
                }
            }
            None => dioxus_logger::tracing::warn!("no window for alert: {}", message),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Shows a native message box and waits until it is dismissed.
    pub async fn alert(message: String) {
        rfd::AsyncMessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Evolution Manager")
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show()
            .await;
    }
}
