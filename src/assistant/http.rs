//! Network assistant — the canonical transport.
//!
//! Speaks the local chat contract: `POST {base}/api/chat` with the message
//! and optional tags, expecting `{"response", "processingTime"?}` back. Any
//! connection failure or non-2xx status maps to [`TransportError`]; the
//! caller turns that into the in-conversation error bubble.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{AssistantClient, AssistantReply, TransportError};
use crate::models::{AircraftModel, IssueCategory, MessageTags};

pub struct HttpAssistant {
    base_url: String,
    http: reqwest::Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequestBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    aircraft_model: Option<&'a AircraftModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    issue_category: Option<&'a IssueCategory>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatResponseBody {
    response: String,
    processing_time: Option<f64>,
}

impl HttpAssistant {
    /// `base_url` without a trailing slash, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[async_trait]
impl AssistantClient for HttpAssistant {
    async fn send(
        &self,
        message: &str,
        tags: &MessageTags,
    ) -> Result<AssistantReply, TransportError> {
        let body = ChatRequestBody {
            message,
            aircraft_model: tags.aircraft_model.as_ref(),
            issue_category: tags.issue_category.as_ref(),
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
            });
        }

        let parsed: ChatResponseBody = response
            .json()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))?;

        Ok(AssistantReply {
            text: parsed.response,
            processing_time: parsed.processing_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let client = HttpAssistant::new("http://localhost:5000/");
        assert_eq!(client.endpoint(), "http://localhost:5000/api/chat");
    }

    #[test]
    fn request_body_omits_unset_tags() {
        let body = ChatRequestBody {
            message: "APU start fails",
            aircraft_model: None,
            issue_category: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["message"], "APU start fails");
    }

    #[test]
    fn request_body_uses_camel_case_tags() {
        let model = AircraftModel::AirbusA320;
        let category = IssueCategory::Hydraulics;
        let body = ChatRequestBody {
            message: "slow retraction",
            aircraft_model: Some(&model),
            issue_category: Some(&category),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["aircraftModel"], "Airbus A320");
        assert_eq!(json["issueCategory"], "Hydraulics");
    }

    #[test]
    fn response_body_accepts_missing_processing_time() {
        let parsed: ChatResponseBody =
            serde_json::from_str(r#"{"response":"Checked."}"#).unwrap();
        assert_eq!(parsed.response, "Checked.");
        assert!(parsed.processing_time.is_none());

        let parsed: ChatResponseBody =
            serde_json::from_str(r#"{"response":"Checked.","processingTime":0.42}"#).unwrap();
        assert_eq!(parsed.processing_time, Some(0.42));
    }

    #[tokio::test]
    async fn unreachable_endpoint_maps_to_request_error() {
        // Port 9 (discard) on localhost is not listening.
        let client = HttpAssistant::new("http://127.0.0.1:9");
        let err = client
            .send("hello", &MessageTags::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Request(_)));
    }
}
