//! Starting a conversation with a number that has no chat yet.
//!
//! Everything here is free of Dioxus hooks so it can be driven from tests.
//! The `NewChatDialog` component supplies the real [`TextSender`] and
//! [`NewChatView`] implementations.

use std::fmt;
use std::time::Duration;

use api::instance::Instance;
use api::message::SendTextData;
use api::ApiError;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::html::input_data::keyboard_types::Modifiers;

use crate::compat;
use crate::Route;

/// Text sent when the message field is left blank.
pub const DEFAULT_GREETING: &str = "Olá!";

/// Country code assumed for numbers typed without one (Brazil).
pub const DEFAULT_COUNTRY_CODE: &str = "55";

/// Digit count from which a number is assumed to already carry a country code.
const MIN_DIGITS_WITH_COUNTRY_CODE: usize = 12;

/// How long to wait after sending before opening the conversation.
///
/// There is no acknowledgment that the chat record exists yet; this only
/// gives the server a moment to create it.
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);

pub const ERROR_ALERT: &str =
    "Erro ao criar conversa. Verifique se o número está correto e tente novamente.";

/// Normalizes a user typed phone number to the digits-only form the
/// messaging api expects.
///
/// - `+5521999999999` -> `5521999999999` (explicit country code kept)
/// - `(21) 99999-9999` -> `5521999999999` (default country code added)
/// - `5521999999999` -> `5521999999999` (long enough to carry one already)
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if raw.starts_with('+') {
        return digits;
    }

    if digits.len() < MIN_DIGITS_WITH_COUNTRY_CODE {
        return format!("{DEFAULT_COUNTRY_CODE}{digits}");
    }

    digits
}

/// Conversation address of a WhatsApp user.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RemoteJid(String);

impl RemoteJid {
    pub const USER_SUFFIX: &'static str = "@s.whatsapp.net";

    /// Expects an already normalized number.
    pub fn for_number(number: &str) -> Self {
        Self(format!("{number}{}", Self::USER_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteJid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The editable fields of the dialog.
#[derive(Clone, PartialEq, Debug)]
pub struct NewChatForm {
    pub phone_number: String,
    pub message: String,
}

impl Default for NewChatForm {
    fn default() -> Self {
        Self {
            phone_number: String::new(),
            message: DEFAULT_GREETING.to_string(),
        }
    }
}

impl NewChatForm {
    pub fn has_phone_number(&self) -> bool {
        !self.phone_number.trim().is_empty()
    }

    /// The text to send, falling back to the greeting when blank.
    pub fn outgoing_text(&self) -> &str {
        match self.message.trim() {
            "" => DEFAULT_GREETING,
            text => text,
        }
    }

    /// Builds the send request, or `None` if the form or instance is not
    /// ready.
    pub fn to_request(&self, instance: Option<&Instance>) -> Option<SendTextRequest> {
        if !self.has_phone_number() {
            return None;
        }
        let (instance_name, token) = instance?.credentials()?;

        Some(SendTextRequest {
            instance_name: instance_name.to_string(),
            token: token.to_string(),
            data: SendTextData {
                number: format_phone_number(&self.phone_number),
                text: self.outgoing_text().to_string(),
            },
        })
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct SendTextRequest {
    pub instance_name: String,
    pub token: String,
    pub data: SendTextData,
}

/// Something that can deliver a text message for an instance.
#[allow(async_fn_in_trait)]
pub trait TextSender {
    async fn send_text(&self, request: SendTextRequest) -> Result<(), ApiError>;
}

/// Sends through the `api::send_text` server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerTextSender;

impl TextSender for ServerTextSender {
    async fn send_text(&self, request: SendTextRequest) -> Result<(), ApiError> {
        api::send_text(request.instance_name, request.token, request.data)
            .await
            .map(|_| ())
    }
}

/// The UI side effects of a submission.
#[allow(async_fn_in_trait)]
pub trait NewChatView {
    fn set_loading(&mut self, loading: bool);
    fn navigate(&mut self, route: Route);
    /// Resolves once the user has dismissed the alert.
    async fn alert(&mut self, message: &str);
    /// Clears both fields and closes the dialog.
    fn finish(&mut self);
}

#[derive(Clone, PartialEq, Debug, strum::EnumIs)]
pub enum SubmitOutcome {
    /// Missing phone number or instance credentials. Nothing happened.
    Skipped,
    Created(RemoteJid),
    Failed,
}

/// Sends the first message and opens the new conversation.
pub async fn submit_new_chat(
    form: &NewChatForm,
    instance: Option<&Instance>,
    instance_id: &str,
    sender: &impl TextSender,
    view: &mut impl NewChatView,
) -> SubmitOutcome {
    let Some(request) = form.to_request(instance) else {
        return SubmitOutcome::Skipped;
    };

    view.set_loading(true);

    let number = request.data.number.clone();
    let outcome = match sender.send_text(request).await {
        Ok(()) => {
            compat::sleep(SETTLE_DELAY).await;

            let remote_jid = RemoteJid::for_number(&number);
            view.navigate(Route::Chat {
                instance_id: instance_id.to_string(),
                remote_jid: remote_jid.to_string(),
            });
            view.finish();

            SubmitOutcome::Created(remote_jid)
        }
        Err(e) => {
            dioxus_logger::tracing::error!("failed to create conversation with {}: {}", number, e);
            view.alert(ERROR_ALERT).await;
            SubmitOutcome::Failed
        }
    };

    view.set_loading(false);
    outcome
}

/// Enter submits; Shift+Enter does not.
pub fn is_submit_key(key: &Key, modifiers: Modifiers) -> bool {
    *key == Key::Enter && !modifiers.contains(Modifiers::SHIFT)
}
