use serde::{Deserialize, Serialize};

/// Payload for the `create-file` channel. Lives for a single invocation;
/// nothing is retained between calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFileRequest {
    pub filename: String,
    #[serde(default)]
    pub content: String,
    pub target_dir: Option<String>,
}

/// Payload for the `delete-file` channel.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFileRequest {
    pub filename: String,
    pub target_dir: Option<String>,
}

/// Uniform response for file mutations. Every expected failure is folded
/// into `success: false` rather than surfaced as a command error.
#[derive(Debug, Clone, Serialize)]
pub struct FileOpResult {
    pub success: bool,
    pub message: String,
}

impl FileOpResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_camel_case_wire_fields() {
        let req: CreateFileRequest = serde_json::from_str(
            r#"{"filename":"a.txt","content":"hi","targetDir":"Desktop"}"#,
        )
        .unwrap();
        assert_eq!(req.filename, "a.txt");
        assert_eq!(req.content, "hi");
        assert_eq!(req.target_dir.as_deref(), Some("Desktop"));
    }

    #[test]
    fn omitted_fields_deserialize_as_defaults() {
        let req: CreateFileRequest = serde_json::from_str(r#"{"filename":"a.txt"}"#).unwrap();
        assert_eq!(req.content, "");
        assert!(req.target_dir.is_none());
    }

    #[test]
    fn result_serializes_success_flag_and_message() {
        let json = serde_json::to_value(FileOpResult::failure("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "message": "nope"}));
    }
}
