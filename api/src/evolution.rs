//! HTTP client for the Evolution API. Server side only.

use crate::config::EvolutionConfig;
use crate::instance::Instance;
use crate::message::SendTextData;
use crate::message::SendTextResponse;
use reqwest::Response;
use reqwest::Url;

#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("invalid evolution api url: {0}")]
    InvalidBaseUrl(String),

    #[error("request to evolution api failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("evolution api returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode evolution api response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("EVOLUTION_API_KEY is not set")]
    MissingGlobalKey,
}

#[derive(Clone, Debug)]
pub struct EvolutionClient {
    http: reqwest::Client,
    config: EvolutionConfig,
}

impl EvolutionClient {
    pub fn new(config: EvolutionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        // no caching for now. reading a couple of env vars per call is cheap
        // and picks up config changes without a restart.
        Self::new(EvolutionConfig::from_env())
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// `POST /message/sendText/{instance}` authenticated with the instance token.
    pub async fn send_text(
        &self,
        instance_name: &str,
        token: &str,
        data: &SendTextData,
    ) -> Result<SendTextResponse, EvolutionError> {
        let url = self.endpoint(&["message", "sendText", instance_name])?;

        let resp = self
            .http
            .post(url)
            .header("apikey", token)
            .json(data)
            .send()
            .await?;

        Self::ensure_success(resp)
            .await?
            .json::<SendTextResponse>()
            .await
            .map_err(EvolutionError::Decode)
    }

    /// `GET /instance/fetchInstances?instanceId=...` authenticated with the global key.
    pub async fn fetch_instance(
        &self,
        instance_id: &str,
    ) -> Result<Option<Instance>, EvolutionError> {
        let api_key = self
            .config
            .global_api_key()
            .ok_or(EvolutionError::MissingGlobalKey)?;

        let mut url = self.endpoint(&["instance", "fetchInstances"])?;
        url.query_pairs_mut().append_pair("instanceId", instance_id);

        let resp = self.http.get(url).header("apikey", api_key).send().await?;

        let instances = Self::ensure_success(resp)
            .await?
            .json::<Vec<Instance>>()
            .await
            .map_err(EvolutionError::Decode)?;

        Ok(instances.into_iter().find(|i| i.id == instance_id))
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, EvolutionError> {
        let base = self.config.base_url();
        let mut url =
            Url::parse(base).map_err(|e| EvolutionError::InvalidBaseUrl(format!("{base}: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| EvolutionError::InvalidBaseUrl(base.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn ensure_success(resp: Response) -> Result<Response, EvolutionError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        dioxus_logger::tracing::warn!("evolution api error {}: {}", status, body);

        Err(EvolutionError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::body_json;
    use wiremock::matchers::header;
    use wiremock::matchers::method;
    use wiremock::matchers::path;
    use wiremock::matchers::query_param;
    use wiremock::Mock;
    use wiremock::MockServer;
    use wiremock::ResponseTemplate;

    fn client_for(server: &MockServer, global_key: Option<&str>) -> EvolutionClient {
        EvolutionClient::new(EvolutionConfig::new(
            server.uri(),
            global_key.map(str::to_string),
        ))
    }

    fn greeting_to(number: &str) -> SendTextData {
        SendTextData {
            number: number.to_string(),
            text: "Olá!".to_string(),
        }
    }

    #[tokio::test]
    async fn send_text_posts_body_with_instance_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/message/sendText/suporte"))
            .and(header("apikey", "instance-token"))
            .and(body_json(json!({
                "number": "5521999999999",
                "text": "Olá!"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "key": {
                    "remoteJid": "5521999999999@s.whatsapp.net",
                    "fromMe": true,
                    "id": "BAE5F5A632EAE722"
                },
                "status": "PENDING"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server, None)
            .send_text("suporte", "instance-token", &greeting_to("5521999999999"))
            .await
            .unwrap();

        assert_eq!(
            response.key.unwrap().remote_jid,
            "5521999999999@s.whatsapp.net"
        );
    }

    #[tokio::test]
    async fn send_text_escapes_instance_name_in_path() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/message/sendText/loja%20centro"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server, None)
            .send_text("loja centro", "t", &greeting_to("5511912345678"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn send_text_reports_non_success_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/message/sendText/suporte"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"message":["exists: false"]}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .send_text("suporte", "t", &greeting_to("550000"))
            .await
            .unwrap_err();

        match err {
            EvolutionError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("exists: false"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn fetch_instance_uses_global_key_and_filters_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/instance/fetchInstances"))
            .and(query_param("instanceId", "b1c2"))
            .and(header("apikey", "global-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "b1c2",
                    "name": "suporte",
                    "token": "instance-token",
                    "connectionStatus": "open"
                }
            ])))
            .mount(&server)
            .await;

        let instance = client_for(&server, Some("global-key"))
            .fetch_instance("b1c2")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(instance.name, "suporte");
        assert_eq!(instance.token, "instance-token");
    }

    #[tokio::test]
    async fn fetch_instance_returns_none_for_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/instance/fetchInstances"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let instance = client_for(&server, Some("global-key"))
            .fetch_instance("missing")
            .await
            .unwrap();

        assert!(instance.is_none());
    }

    #[tokio::test]
    async fn fetch_instance_requires_global_key() {
        let server = MockServer::start().await;

        let err = client_for(&server, None)
            .fetch_instance("b1c2")
            .await
            .unwrap_err();

        assert!(matches!(err, EvolutionError::MissingGlobalKey));
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let client = EvolutionClient::new(EvolutionConfig::new("not a url", None));
        assert!(matches!(
            client.endpoint(&["message"]),
            Err(EvolutionError::InvalidBaseUrl(_))
        ));
    }
}
