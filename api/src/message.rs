use serde::Deserialize;
use serde::Serialize;

/// Body of a `sendText` request.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SendTextData {
    pub number: String,
    pub text: String,
}

/// Identifies a stored message.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageKey {
    pub remote_jid: String,
    #[serde(default)]
    pub from_me: bool,
    pub id: String,
}

/// The parts of the `sendText` response the console cares about.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct SendTextResponse {
    #[serde(default)]
    pub key: Option<MessageKey>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_send_text_response() {
        let json = r#"{
            "key": {
                "remoteJid": "5521999999999@s.whatsapp.net",
                "fromMe": true,
                "id": "3EB0C767D26A8A4B1C"
            },
            "message": {"conversation": "Olá!"},
            "messageTimestamp": "1717689097",
            "status": "PENDING"
        }"#;

        let response: SendTextResponse = serde_json::from_str(json).unwrap();
        let key = response.key.unwrap();
        assert_eq!(key.remote_jid, "5521999999999@s.whatsapp.net");
        assert!(key.from_me);
        assert_eq!(response.status.as_deref(), Some("PENDING"));
    }

    #[test]
    fn tolerates_empty_response_body() {
        let response: SendTextResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, SendTextResponse::default());
    }
}
