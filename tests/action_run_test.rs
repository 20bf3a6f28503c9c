//! Integration tests for the action run against a mocked GitHub API
//!
//! Tests verify:
//! - The report is written to the GITHUB_OUTPUT file
//! - The pull request body is patched only when a switch was toggled
//! - API failures fail the run

use prswitch::action::WorkflowOutput;
use prswitch::cli::run::execute;
use prswitch::github::{GitHubClient, PullRequestRef};
use prswitch::models::ActionConfig;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(capture_labels: bool) -> ActionConfig {
    ActionConfig {
        github_token: "github-token-for-something".to_string(),
        delay: 0,
        namespace: None,
        capture_labels,
    }
}

fn reference() -> PullRequestRef {
    PullRequestRef::new("owner", "repo", 124)
}

async fn mock_pull(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/repos/owner/repo/pulls/124"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "number": 124,
            "body": body,
        })))
        .mount(server)
        .await;
}

fn read_report_output(output_file: &std::path::Path) -> serde_json::Value {
    let content = std::fs::read_to_string(output_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines[0].starts_with("report<<ghadelimiter_"));
    serde_json::from_str(lines[1]).unwrap()
}

#[tokio::test]
async fn test_run_updates_toggled_switches() {
    let server = MockServer::start().await;
    mock_pull(
        &server,
        "Body\n- [ ] Stop <!-- stop state[x] -->\n- [x] Go <!-- go state[x] -->",
    )
    .await;
    Mock::given(method("PATCH"))
        .and(path("/repos/owner/repo/pulls/124"))
        .and(body_json(serde_json::json!({
            "body": "Body\n- [ ] Stop <!-- stop state[ ] -->\n- [x] Go <!-- go state[x] -->"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"number": 124})))
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let output_file = temp.path().join("github_output");
    let mut output = WorkflowOutput::new(Some(output_file.clone()));
    let client = GitHubClient::new("github-token-for-something", server.uri()).unwrap();

    let outcome = execute(&config(true), &reference(), &client, &mut output, false)
        .await
        .unwrap();

    assert!(outcome.updated);
    let report = read_report_output(&output_file);
    assert_eq!(
        report,
        serde_json::json!({
            "hasChanged": true,
            "state": {"stop": false, "go": true},
            "captures": {"stop": "Stop", "go": "Go"},
        })
    );
}

#[tokio::test]
async fn test_run_without_changes_does_not_patch() {
    let server = MockServer::start().await;
    mock_pull(&server, "- [x] Go <!-- go state[x] -->").await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let output_file = temp.path().join("github_output");
    let mut output = WorkflowOutput::new(Some(output_file.clone()));
    let client = GitHubClient::new("token", server.uri()).unwrap();

    let outcome = execute(&config(false), &reference(), &client, &mut output, false)
        .await
        .unwrap();

    assert!(!outcome.updated);
    assert_eq!(
        read_report_output(&output_file),
        serde_json::json!({"hasChanged": false, "state": {"go": true}})
    );
}

#[tokio::test]
async fn test_run_fails_when_update_is_rejected() {
    let server = MockServer::start().await;
    mock_pull(&server, "- [x] Go <!-- go state[ ] -->").await;
    Mock::given(method("PATCH"))
        .and(path("/repos/owner/repo/pulls/124"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(serde_json::json!({"message": "Resource not accessible by integration"})),
        )
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let mut output = WorkflowOutput::new(Some(temp.path().join("github_output")));
    let client = GitHubClient::new("token", server.uri()).unwrap();

    let err = execute(&config(false), &reference(), &client, &mut output, false)
        .await
        .unwrap_err();

    let message = format!("{:#}", err);
    assert!(message.contains("owner/repo#124"));
    assert!(message.contains("Resource not accessible by integration"));
}
