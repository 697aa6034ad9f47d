use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

/// Command pointed at the mock backend, with plain output.
fn wise_cmd(server: &MockServer) -> Command {
    let mut cmd = Command::cargo_bin("wise").expect("Failed to find wise binary");
    cmd.args(["--no-color", "--base-url"])
        .arg(format!("{}/wise/api", server.uri()));
    cmd
}

fn envelope(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({"code": 0, "msg": "ok", "data": data}))
}

fn task_json(tid: &str, status: &str) -> serde_json::Value {
    json!({
        "tid": tid,
        "name": format!("task {tid}"),
        "types": "url",
        "status": status,
        "total_steps": 4,
        "current_step": 2,
        "params": "{\"url\":\"https://example.com\"}",
        "created_at": "2024-03-01 08:30:00"
    })
}

async fn mount_task(server: &MockServer, tid: &str, status: &str) {
    Mock::given(method("GET"))
        .and(path("/wise/api/task"))
        .and(query_param("tid", tid))
        .respond_with(envelope(task_json(tid, status)))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_default_lists_first_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/tasks"))
        .and(query_param("page", "1"))
        .respond_with(envelope(json!({
            "total": 1,
            "list": [task_json("T1", "running")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    wise_cmd(&server)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Tasks (page 1/1, 1 total)"))
        .stdout(predicate::str::contains("## task T1 (ID: T1)"))
        .stdout(predicate::str::contains("- **Actions**: pause, cancel"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_list_with_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/tasks"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "5"))
        .and(query_param("status", "failed"))
        .respond_with(envelope(json!({"total": 6, "list": [task_json("T6", "failed")]})))
        .expect(1)
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args([
            "task",
            "list",
            "--page",
            "2",
            "--page-size",
            "5",
            "--status",
            "failed",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(page 2/2, 6 total)"))
        .stdout(predicate::str::contains("- **Actions**: retry"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_list_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/tasks"))
        .respond_with(envelope(json!({"total": 0, "list": null})))
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_show_task_pretty_prints_payload() {
    let server = MockServer::start().await;
    mount_task(&server, "T1", "running").await;

    wise_cmd(&server)
        .args(["task", "show", "T1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# task T1 (T1)"))
        .stdout(predicate::str::contains("- Progress: 2/4"))
        .stdout(predicate::str::contains("\"url\": \"https://example.com\""));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_business_error_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/task"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 1, "msg": "task not found", "data": null})),
        )
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "show", "T404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load task T404"))
        .stderr(predicate::str::contains("task not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_http_error_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/tasks"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP Error: 503"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_delete_requires_confirm() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/wise/api/task"))
        .respond_with(envelope(json!(null)))
        .expect(0)
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "delete", "T1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("explicitly confirmed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_delete_with_confirm() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/wise/api/task"))
        .and(body_json(json!({"tid": "T1"})))
        .respond_with(envelope(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "rm", "T1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task T1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_action_reloads_task() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wise/api/task/retry"))
        .and(body_json(json!({"tid": "T1"})))
        .respond_with(envelope(json!({"result": "queued"})))
        .expect(1)
        .mount(&server)
        .await;
    mount_task(&server, "T1", "retry").await;

    wise_cmd(&server)
        .args(["task", "retry", "T1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Requested retry for task T1: queued"))
        .stdout(predicate::str::contains("- Status: ↻ retry"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_create_and_update() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/wise/api/task"))
        .and(body_json(json!({
            "name": "crawl",
            "types": "url",
            "params": "",
            "total_steps": 2,
            "current_state": ""
        })))
        .respond_with(envelope(task_json("T9", "init")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/wise/api/task"))
        .and(body_json(json!({"tid": "T9", "status": "paused"})))
        .respond_with(envelope(task_json("T9", "paused")))
        .expect(1)
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "create", "crawl", "--types", "url", "--total-steps", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task with ID: T9"));

    wise_cmd(&server)
        .args(["task", "update", "T9", "--status", "paused"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task T9"))
        .stdout(predicate::str::contains("- status"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_watch_renders_and_quits() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/task/visualization"))
        .and(query_param("tid", "T1"))
        .respond_with(envelope(json!({
            "tid": "T1",
            "name": "crawl",
            "status": "running",
            "plans": [
                {"pid": "P1", "name": "read", "index": 0, "status": "success"},
                {"pid": "P2", "name": "mark", "index": 1, "status": "running"}
            ]
        })))
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "watch", "T1", "--plan", "P2"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# crawl (T1)"))
        .stdout(predicate::str::contains("## Selected plan"))
        .stdout(predicate::str::contains("- ID: P2"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_watch_finished_task_exits_without_stdin() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/task/visualization"))
        .and(query_param("tid", "T2"))
        .respond_with(envelope(json!({
            "tid": "T2",
            "name": "done",
            "status": "success",
            "plans": [{"pid": "P1", "name": "read", "index": 0, "status": "success"}]
        })))
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "watch", "T2"])
        .write_stdin("")
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(predicate::str::contains("# done (T2)"))
        .stdout(predicate::str::contains("- ID: P1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_watch_unknown_task_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/task/visualization"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"code": 2, "msg": "", "data": null})),
        )
        .mount(&server)
        .await;

    wise_cmd(&server)
        .args(["task", "watch", "T404"])
        .write_stdin("q\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open task T404"))
        .stderr(predicate::str::contains("request failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_reads_config_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/wise/api/tasks"))
        .and(query_param("page_size", "3"))
        .respond_with(envelope(json!({"total": 0, "list": []})))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = NamedTempFile::new().unwrap();
    write!(
        config,
        "{}",
        json!({"base_url": format!("{}/wise/api", server.uri()), "page_size": 3})
    )
    .unwrap();

    Command::cargo_bin("wise")
        .unwrap()
        .args(["--no-color", "--config"])
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_cli_rejects_invalid_base_url() {
    Command::cargo_bin("wise")
        .unwrap()
        .args(["--no-color", "--base-url", "not a url", "task", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
