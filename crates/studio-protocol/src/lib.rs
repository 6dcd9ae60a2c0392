//! Client <-> server contact protocol.

use serde::{Deserialize, Deserializer, Serialize};

pub const CONTACT_PATH: &str = "/api/contact";

pub const MSG_MISSING_FIELDS: &str = "Name, email, and message are required";
pub const MSG_SEND_FAILED: &str = "Failed to send email";
pub const MSG_INTERNAL: &str = "Internal server error";

pub const NOT_SPECIFIED: &str = "Not specified";

/// Project types offered by the contact form, keyed by their wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Web,
    App,
    Consultation,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [ProjectType::Web, ProjectType::App, ProjectType::Consultation];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "web" => Some(ProjectType::Web),
            "app" => Some(ProjectType::App),
            "consultation" => Some(ProjectType::Consultation),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ProjectType::Web => "web",
            ProjectType::App => "app",
            ProjectType::Consultation => "consultation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Web => "Web Development",
            ProjectType::App => "App Development",
            ProjectType::Consultation => "Web Consultation",
        }
    }
}

/// Label for a raw project-type code; unknown or empty codes read as "Not specified".
pub fn project_type_label(code: &str) -> &'static str {
    ProjectType::from_code(code)
        .map(ProjectType::label)
        .unwrap_or(NOT_SPECIFIED)
}

/// Body of `POST /api/contact`.
///
/// Absent and `null` fields both deserialize to an empty string so that the
/// server can report them as missing instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub project_type: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactResponse {
    Sent { success: bool, id: String },
    Failed { error: String },
}

impl ContactResponse {
    pub fn sent(id: impl Into<String>) -> Self {
        ContactResponse::Sent {
            success: true,
            id: id.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        ContactResponse::Failed {
            error: error.into(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ContactResponse::Failed { error } => Some(error),
            ContactResponse::Sent { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_type_codes_map_to_labels() {
        assert_eq!(project_type_label("web"), "Web Development");
        assert_eq!(project_type_label("app"), "App Development");
        assert_eq!(project_type_label("consultation"), "Web Consultation");
        assert_eq!(project_type_label(""), NOT_SPECIFIED);
        assert_eq!(project_type_label("Web"), NOT_SPECIFIED);
        assert_eq!(project_type_label("design"), NOT_SPECIFIED);
        for kind in ProjectType::ALL {
            assert_eq!(ProjectType::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn request_uses_camel_case_and_tolerates_nulls() {
        let json = r#"{"name":"Ada","email":null,"projectType":"app"}"#;
        let req: ContactRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Ada");
        assert_eq!(req.email, "");
        assert_eq!(req.project_type, "app");
        assert_eq!(req.message, "");

        let out = serde_json::to_value(&req).unwrap();
        assert_eq!(out["projectType"], "app");
    }

    #[test]
    fn response_shapes_match_wire_format() {
        let sent = serde_json::to_value(ContactResponse::sent("abc")).unwrap();
        assert_eq!(sent, serde_json::json!({ "success": true, "id": "abc" }));

        let failed: ContactResponse =
            serde_json::from_str(r#"{"error":"Failed to send email"}"#).unwrap();
        assert_eq!(failed.error_message(), Some(MSG_SEND_FAILED));
    }
}
