//! Hook Edge Case Tests
//!
//! Tests hook handlers with edge cases, focusing on:
//! - Malformed input handling
//! - Empty/missing fields
//! - Missing or unreadable project files
//! - Hook response format compliance
//!
//! Every case must end in a well-formed envelope, never an error.

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::panic,
    clippy::missing_const_for_fn
)]

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use directions::DirectionsConfig;
use directions::hooks::{HookHandler, SessionStartHandler, UserPromptHandler, read_input};
use serde_json::{Value, json};
use tempfile::TempDir;

fn marked_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("docs/sessions")).unwrap();
    fs::write(dir.path().join("docs/00_base.md"), "# Base").unwrap();
    dir
}

fn parse(output: &str) -> Value {
    serde_json::from_str(output).expect("handler output must be JSON")
}

fn assert_envelope(value: &Value) {
    let object = value.as_object().expect("envelope must be an object");
    assert!(object.keys().all(|k| k == "message"), "unexpected keys: {object:?}");
    if let Some(message) = object.get("message") {
        assert!(message.is_string());
    }
}

// ============================================================================
// User Prompt Handler Edge Cases
// ============================================================================

mod user_prompt {
    use super::*;

    fn handler(root: &Path) -> UserPromptHandler {
        UserPromptHandler::from_config(root, &DirectionsConfig::default()).unwrap()
    }

    #[test]
    fn test_handle_empty_input() {
        let dir = marked_project();
        let output = handler(dir.path()).handle("").unwrap();
        assert_eq!(output, "{}");
    }

    #[test]
    fn test_handle_invalid_json_treated_as_text() {
        let dir = marked_project();
        let output = handler(dir.path()).handle("{{{ my build crashed").unwrap();
        let response = parse(&output);
        assert_envelope(&response);
        assert!(response["message"].as_str().unwrap().contains("31_debugging.md"));
    }

    #[test]
    fn test_handle_null_prompt() {
        let dir = marked_project();
        let input = json!({"prompt": null, "session_id": "abc"}).to_string();
        assert_eq!(handler(dir.path()).handle(&input).unwrap(), "{}");
    }

    #[test]
    fn test_handle_extra_fields_ignored() {
        let dir = marked_project();
        let input = json!({
            "session_id": "abc",
            "cwd": "/elsewhere",
            "hook_event_name": "UserPromptSubmit",
            "prompt": "Where should the toolbar go?"
        })
        .to_string();

        let response = parse(&handler(dir.path()).handle(&input).unwrap());
        assert_envelope(&response);
        assert!(response["message"].as_str().unwrap().contains("41_apple-ui.md"));
    }

    #[test]
    fn test_handle_unicode_prompt() {
        let dir = marked_project();
        let input = json!({"prompt": "日本語のテキスト 🚀"}).to_string();
        assert_eq!(handler(dir.path()).handle(&input).unwrap(), "{}");
    }

    #[test]
    fn test_handle_very_long_prompt() {
        let dir = marked_project();
        let prompt = format!("{} crash", "lorem ipsum ".repeat(10_000));
        let input = json!({ "prompt": prompt }).to_string();
        let response = parse(&handler(dir.path()).handle(&input).unwrap());
        assert!(response["message"].as_str().unwrap().contains("31_debugging.md"));
    }

    #[test]
    fn test_marker_directory_missing() {
        let dir = TempDir::new().unwrap();
        let input = json!({"prompt": "deploy to production"}).to_string();
        assert_eq!(handler(dir.path()).handle(&input).unwrap(), "{}");
    }

    #[test]
    fn test_event_type() {
        let dir = TempDir::new().unwrap();
        assert_eq!(handler(dir.path()).event_type(), "UserPromptSubmit");
    }
}

// ============================================================================
// Session Start Handler Edge Cases
// ============================================================================

mod session_start {
    use super::*;

    fn handler(root: &Path) -> SessionStartHandler {
        SessionStartHandler::from_config(root, &DirectionsConfig::default())
    }

    #[test]
    fn test_handle_any_input_shape() {
        let dir = marked_project();
        for input in ["", "not valid json {{{{", "[1, 2, 3]", r#"{"session_id": null}"#] {
            let response = parse(&handler(dir.path()).handle(input).unwrap());
            assert_envelope(&response);
            assert!(response["message"].is_string());
        }
    }

    #[test]
    fn test_nonexistent_root_gets_menu() {
        let response = parse(
            &handler(Path::new("/definitely/not/a/project"))
                .handle("{}")
                .unwrap(),
        );
        let message = response["message"].as_str().unwrap();
        assert!(message.starts_with("What would you like to do?"));
    }

    #[test]
    fn test_state_document_is_directory() {
        let dir = marked_project();
        fs::create_dir(dir.path().join("docs/PROJECT_STATE.md")).unwrap();

        let message = handler(dir.path()).build_context().text;
        assert!(message.starts_with("This project uses **Directions**"));
        assert!(!message.contains("Current Phase"));
    }

    #[test]
    fn test_session_log_not_utf8() {
        let dir = marked_project();
        fs::write(dir.path().join("docs/sessions/2024-06-01.md"), [0xff, 0xfe, 0xfd]).unwrap();

        let message = handler(dir.path()).build_context().text;
        assert!(message.contains("**Last Session:** 2024-06-01.md\n\n"));
    }

    #[test]
    fn test_sessions_path_is_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/00_base.md"), "").unwrap();
        fs::write(dir.path().join("docs/sessions"), "not a directory").unwrap();

        let message = handler(dir.path()).build_context().text;
        assert!(!message.contains("Last Session"));
    }

    #[test]
    fn test_response_format_compliance() {
        let dir = marked_project();
        let output = handler(dir.path()).handle("{}").unwrap();
        let response = parse(&output);
        assert_envelope(&response);
        assert!(response.get("message").is_some());
    }

    #[test]
    fn test_event_type() {
        assert_eq!(handler(Path::new(".")).event_type(), "SessionStart");
    }
}

// ============================================================================
// Raw Input Edge Cases
// ============================================================================

mod raw_input {
    use super::*;

    /// Reader that fails on every call.
    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn test_invalid_utf8_still_routes() {
        let dir = marked_project();
        let input = read_input(&b"app crash \xff\xfe"[..]);
        assert!(input.starts_with("app crash "));

        let handler =
            UserPromptHandler::from_config(dir.path(), &DirectionsConfig::default()).unwrap();
        let response = parse(&handler.handle(&input).unwrap());
        assert_envelope(&response);
        assert!(response["message"].as_str().unwrap().contains("31_debugging.md"));
    }

    #[test]
    fn test_invalid_utf8_session_start_answers() {
        let dir = marked_project();
        let input = read_input(&b"\xff"[..]);

        let handler = SessionStartHandler::from_config(dir.path(), &DirectionsConfig::default());
        let response = parse(&handler.handle(&input).unwrap());
        assert_envelope(&response);
        assert!(response["message"].is_string());
    }

    #[test]
    fn test_read_error_yields_empty_input() {
        let dir = marked_project();
        let input = read_input(BrokenPipe);
        assert_eq!(input, "");

        let handler =
            UserPromptHandler::from_config(dir.path(), &DirectionsConfig::default()).unwrap();
        assert_eq!(handler.handle(&input).unwrap(), "{}");
    }

    #[test]
    fn test_valid_utf8_passes_through() {
        let payload = r#"{"prompt": "Ready to deploy? 🚀"}"#;
        assert_eq!(read_input(payload.as_bytes()), payload);
    }
}
