mod common;

use assert_cmd::Command;
use common::{config_with_key, temp_home_with_config};
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::TempDir;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn larc() -> Command {
    Command::cargo_bin("larc").unwrap()
}

/// Run the mock server on its own runtime so the blocking binary
/// invocations can happen on the test thread
fn start_server() -> (tokio::runtime::Runtime, MockServer) {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap();
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

#[test]
fn test_larc_without_args_shows_usage() {
    larc()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn test_larc_help_flag() {
    larc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("command-line client"))
        .stdout(predicate::str::contains("credits"))
        .stdout(predicate::str::contains("reverse"))
        .stdout(predicate::str::contains("database"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_larc_version_flag() {
    larc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("larc"));
}

#[test]
fn test_config_set_api_key() {
    let home = TempDir::new().unwrap();

    larc()
        .env("HOME", home.path())
        .args(["config", "set-api-key", "test-key-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API key set successfully"));

    let config_path = home.path().join(".larc").join("config.toml");
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("test-key-123"));

    let mode = fs::metadata(&config_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    let dir_mode = fs::metadata(home.path().join(".larc"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(dir_mode & 0o777, 0o700);
}

#[test]
fn test_config_set_api_key_without_key_fails() {
    let home = TempDir::new().unwrap();

    larc()
        .env("HOME", home.path())
        .args(["config", "set-api-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API key is required"));
}

#[test]
fn test_youtube_comments_requires_an_identifier() {
    let home = TempDir::new().unwrap();

    larc()
        .env("HOME", home.path())
        .args(["youtube", "comments"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "at least one of --user-id, --handle, or --channel-id",
        ));
}

#[test]
fn test_twitter_requires_handle_or_id() {
    let home = TempDir::new().unwrap();

    larc()
        .env("HOME", home.path())
        .arg("twitter")
        .assert()
        .failure()
        .stderr(predicate::str::contains("either --handle or --id"));
}

#[test]
fn test_reverse_phone_requires_a_number() {
    let home = TempDir::new().unwrap();

    larc()
        .env("HOME", home.path())
        .args(["reverse", "phone"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("phone is required"));
}

#[test]
fn test_database_requires_a_query() {
    let home = TempDir::new().unwrap();

    larc()
        .env("HOME", home.path())
        .arg("database")
        .assert()
        .failure()
        .stderr(predicate::str::contains("query is required"));
}

#[test]
fn test_twitch_messages_requires_a_username() {
    let home = TempDir::new().unwrap();

    larc()
        .env("HOME", home.path())
        .args(["twitch", "messages"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--username is required"));
}

#[test]
fn test_credits_prints_body_verbatim() {
    let (rt, server) = start_server();

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/credits_left"))
            .and(header("apikey", "secret"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"credits_left":42}"#))
            .mount(&server),
    );

    let (home, _) = temp_home_with_config(&config_with_key("secret", &server.uri()));

    larc()
        .env("HOME", home.path())
        .arg("credits")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"credits_left":42}"#));
}

#[test]
fn test_reverse_phone_unauthorized_without_key_instructs_setup() {
    let (rt, server) = start_server();

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/reverse_phone_lookup"))
            .and(header("phone", "5551234"))
            .and(header("apikey", ""))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server),
    );

    // No key configured: the request is still issued and the server's 401
    // is turned into setup guidance, not a process failure.
    let (home, _) = temp_home_with_config(&config_with_key("", &server.uri()));

    larc()
        .env("HOME", home.path())
        .args(["reverse", "phone", "--phone", "5551234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set your API key"))
        .stdout(predicate::str::contains("config set-api-key"));
}

#[test]
fn test_database_empty_result_reports_no_data() {
    let (rt, server) = start_server();

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/database_lookup"))
            .and(header("query", "jane doe"))
            .and(header("exact", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&server),
    );

    let (home, _) = temp_home_with_config(&config_with_key("secret", &server.uri()));

    larc()
        .env("HOME", home.path())
        .args(["database", "--query", "jane doe", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data found for this query"));
}

#[test]
fn test_guided_server_error_still_exits_zero() {
    let (rt, server) = start_server();

    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/database_lookup"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server),
    );

    let (home, _) = temp_home_with_config(&config_with_key("secret", &server.uri()));

    larc()
        .env("HOME", home.path())
        .args(["database", "--query", "anything"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Internal server error"));
}

#[test]
fn test_connection_failure_exits_nonzero() {
    // Discard port: nothing listens there, so the send fails outright
    let (home, _) = temp_home_with_config(&config_with_key("secret", "http://127.0.0.1:9"));

    larc()
        .env("HOME", home.path())
        .arg("credits")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to send request"));
}
