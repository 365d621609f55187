use serde::Deserialize;
use serde::Serialize;

/// Connection state of an instance as reported by the Evolution API.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIs,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConnectionState {
    Open,
    Connecting,
    Close,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A configured messaging account/session.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub connection_status: ConnectionState,
    #[serde(default)]
    pub owner_jid: Option<String>,
    #[serde(default)]
    pub profile_name: Option<String>,
}

impl Instance {
    /// Returns `(name, token)` when both are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.name.is_empty() || self.token.is_empty() {
            None
        } else {
            Some((&self.name, &self.token))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fetch_instances_entry() {
        let json = r#"{
            "id": "b1c2",
            "name": "suporte",
            "connectionStatus": "open",
            "ownerJid": "5521988887777@s.whatsapp.net",
            "profileName": "Suporte",
            "token": "abc-123",
            "integration": "WHATSAPP-BAILEYS"
        }"#;

        let instance: Instance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.name, "suporte");
        assert_eq!(instance.token, "abc-123");
        assert!(instance.connection_status.is_open());
        assert_eq!(instance.credentials(), Some(("suporte", "abc-123")));
    }

    #[test]
    fn unknown_connection_status_does_not_fail_decoding() {
        let json = r#"{"id": "x", "name": "n", "token": "t", "connectionStatus": "refused"}"#;
        let instance: Instance = serde_json::from_str(json).unwrap();
        assert!(instance.connection_status.is_unknown());
    }

    #[test]
    fn missing_token_means_no_credentials() {
        let json = r#"{"id": "x", "name": "n"}"#;
        let instance: Instance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.credentials(), None);
    }
}
