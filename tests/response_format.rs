use deckhand::error::BuildFailedDetails;
use deckhand::output::{map_cmd_result_to_json, CliResponse};
use deckhand::Error;

#[test]
fn build_failure_serializes_command_and_output() {
    let err = Error::build_failed(
        "Build failed",
        BuildFailedDetails {
            command: "node build.js".to_string(),
            exit_code: 127,
            stdout: "some stdout".to_string(),
            stderr: "some stderr".to_string(),
        },
    );

    let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

    assert!(json.contains("\"code\": \"build.failed\""));
    assert!(json.contains("some stdout"));
    assert!(json.contains("some stderr"));
    assert!(json.contains("\"exitCode\": 127"));
}

#[test]
fn build_failure_maps_to_exit_code_20() {
    let err = Error::build_failed(
        "Build failed",
        BuildFailedDetails {
            command: "node build.js".to_string(),
            exit_code: 1,
            stdout: String::new(),
            stderr: String::new(),
        },
    );

    let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));

    assert_eq!(exit_code, 20);
}

#[test]
fn missing_files_error_names_every_file() {
    let err = Error::validate_missing_files(vec![
        "styles.min.css".to_string(),
        "scripts.min.js".to_string(),
    ]);

    assert_eq!(err.code.as_str(), "validate.missing_files");
    assert!(err.message.contains("styles.min.css"));
    assert!(err.message.contains("scripts.min.js"));

    let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
    assert_eq!(exit_code, 20);
}

#[test]
fn invalid_argument_maps_to_exit_code_2() {
    let err = Error::validation_invalid_argument(
        "config",
        "Config file not found: missing.json",
        None,
        None,
    );

    let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));
    assert_eq!(exit_code, 2);
}

#[test]
fn hints_are_included_in_the_envelope() {
    let err = Error::validate_missing_files(vec!["index.html".to_string()]);
    let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

    assert!(json.contains("\"hints\""));
    assert!(json.contains("deckhand build"));
}

#[test]
fn success_envelope_wraps_data() {
    let (value, exit_code) =
        map_cmd_result_to_json(Ok((serde_json::json!({"ok": true}), 0)));

    let json = CliResponse::success(value.unwrap()).to_json().unwrap();
    assert!(json.contains("\"success\": true"));
    assert_eq!(exit_code, 0);
}
