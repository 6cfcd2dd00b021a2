//! Request and response bodies of the Resend email endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /emails`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendEmailRequest {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<Vec<String>>,
    /// ISO 8601 timestamp or a phrase the API interprets (e.g. "in 1 hour").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

/// Success body of `POST /emails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub id: String,
}

/// Success body of `GET /emails`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListEmailsResponse {
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub has_more: Option<bool>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub data: Vec<EmailRecord>,
}

/// One email as returned by `GET /emails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailRecord {
    pub id: String,
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_event: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_omits_absent_fields() {
        let request = SendEmailRequest {
            from: "Acme <onboarding@resend.dev>".to_string(),
            to: "user@example.com".to_string(),
            subject: "Hi".to_string(),
            text: "Hello".to_string(),
            html: None,
            cc: None,
            bcc: Some(vec!["audit@example.com".to_string()]),
            reply_to: Some(vec!["support@example.com".to_string()]),
            scheduled_at: Some("in 2 hours".to_string()),
        };

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("html"));
        assert!(!object.contains_key("cc"));
        assert_eq!(json["reply_to"][0], "support@example.com");
        assert_eq!(json["scheduled_at"], "in 2 hours");
    }

    #[test]
    fn test_list_response_tolerates_missing_fields() {
        let json = r#"{
            "object": "list",
            "has_more": false,
            "data": [
                {
                    "id": "4ef9a417-02e9-4d39-ad75-9611e0fcc33c",
                    "to": ["delivered@resend.dev"],
                    "from": "Acme <onboarding@resend.dev>",
                    "created_at": "2023-04-03 22:13:42.674981+00",
                    "subject": "Hello World",
                    "last_event": "delivered",
                    "scheduled_at": null
                },
                { "id": "b1f8a2c0-0000-4000-8000-000000000000" }
            ]
        }"#;

        let response: ListEmailsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.total, None);
        assert_eq!(response.data[0].last_event.as_deref(), Some("delivered"));
        assert!(response.data[1].to.is_empty());
    }
}
