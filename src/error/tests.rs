//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod draft_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let draft_error = DraftError::from(reqwest_error);

        match draft_error {
            DraftError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let draft_error = DraftError::from(json_error);

        match draft_error {
            DraftError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let draft_error = DraftError::from(io_error);

        match draft_error {
            DraftError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let draft_error = DraftError::from(parse_error);

        match draft_error {
            DraftError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_no_data_message_names_the_payload() {
        let error = DraftError::NoData {
            what: "league details",
        };
        assert_eq!(error.to_string(), "Failed to fetch league details");
    }

    #[test]
    fn test_missing_prerequisites_lists_every_item() {
        let error = DraftError::MissingPrerequisites {
            missing: vec!["https-client".to_string(), "writable-storage".to_string()],
        };
        assert_eq!(
            error.to_string(),
            "Missing prerequisites: https-client, writable-storage"
        );
    }

    #[test]
    fn test_outside_api_message() {
        let error = DraftError::OutsideApi {
            url: "https://example.com/game".to_string(),
            prefix: "https://draft.premierleague.com/api/".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("https://example.com/game"));
        assert!(message.contains("outside the API prefix"));
    }

    #[test]
    fn test_missing_field_message() {
        let error = DraftError::MissingField {
            endpoint: "game".to_string(),
            field: "current_event",
        };
        assert_eq!(
            error.to_string(),
            "Response from game is missing field 'current_event'"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = DraftError::InvalidLeagueCode {
            code: "a/b".to_string(),
            reason: "must not contain '/'".to_string(),
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidLeagueCode"));
        assert!(debug_string.contains("a/b"));
    }
}
