use jiff::civil::date;
use serde_json::json;

use super::*;
use crate::error::ConsoleError;

#[test]
fn test_task_status_parsing_is_lenient() {
    assert_eq!(TaskStatus::from("running".to_string()), TaskStatus::Running);
    assert_eq!(TaskStatus::from("RETRY".to_string()), TaskStatus::Retry);
    assert_eq!(TaskStatus::from("completed".to_string()), TaskStatus::Success);
    assert_eq!(
        TaskStatus::from("archived".to_string()),
        TaskStatus::Other("archived".to_string())
    );
}

#[test]
fn test_unknown_status_round_trips_verbatim() {
    let status: TaskStatus = serde_json::from_value(json!("queued")).unwrap();
    assert_eq!(serde_json::to_value(&status).unwrap(), json!("queued"));
}

#[test]
fn test_terminal_statuses() {
    assert!(TaskStatus::Success.is_terminal());
    assert!(TaskStatus::Failed.is_terminal());
    assert!(TaskStatus::Cancelled.is_terminal());
    assert!(!TaskStatus::Running.is_terminal());
    assert!(!TaskStatus::Paused.is_terminal());
}

#[test]
fn test_task_decodes_backend_shape() {
    let task: Task = serde_json::from_value(json!({
        "tid": "T1",
        "name": "mark url",
        "types": "url",
        "status": "failed",
        "current_state": "read",
        "total_steps": 4,
        "current_step": 2,
        "retry_count": 1,
        "params": "{\"url\":\"https://example.com\"}",
        "result": "",
        "error": "timeout",
        "extend": "",
        "created_at": "2024-03-01 08:30:00",
        "updated_at": "2024-03-01 08:31:05"
    }))
    .unwrap();

    assert_eq!(task.status, TaskStatus::Failed);
    assert_eq!(task.progress(), Some((2, 4)));
    assert_eq!(task.created_at, Some(date(2024, 3, 1).at(8, 30, 0, 0)));
    assert_eq!(task.updated_at, Some(date(2024, 3, 1).at(8, 31, 5, 0)));
}

#[test]
fn test_missing_and_null_fields_default() {
    let task: Task = serde_json::from_value(json!({
        "tid": "T2",
        "name": null,
        "created_at": ""
    }))
    .unwrap();

    assert_eq!(task.name, "");
    assert_eq!(task.status, TaskStatus::Init);
    assert_eq!(task.created_at, None);
    assert_eq!(task.progress(), None);
}

#[test]
fn test_page_with_null_list() {
    let page: TaskPage = serde_json::from_value(json!({"total": 0, "list": null})).unwrap();
    assert!(page.list.is_empty());
    assert_eq!(page.page_count(10), 0);

    let page = TaskPage {
        total: 21,
        list: vec![],
    };
    assert_eq!(page.page_count(10), 3);
    assert_eq!(page.page_count(0), 0);
}

#[test]
fn test_visualization_find_plan() {
    let detail: TaskVisualization = serde_json::from_value(json!({
        "tid": "T1",
        "plans": [
            {"pid": "P1", "name": "read", "index": 0, "status": "success", "duration": 120},
            {"pid": "P2", "name": "mark", "index": 1, "status": "running"}
        ]
    }))
    .unwrap();

    assert_eq!(detail.find_plan("P2").map(|p| p.index), Some(1));
    assert_eq!(detail.find_plan("P9"), None);
    assert_eq!(detail.first_plan().map(|p| p.duration), Some(120));
    assert_eq!(detail.plans[1].status, PlanStatus::Running);
}

#[test]
fn test_envelope_success_and_failure() {
    let ok: Envelope = serde_json::from_value(json!({
        "code": 0,
        "msg": "ok",
        "data": {"total": 1, "list": [{"tid": "T1"}]}
    }))
    .unwrap();
    let page: TaskPage = ok.into_data().unwrap();
    assert_eq!(page.total, 1);

    let failed: Envelope =
        serde_json::from_value(json!({"code": 500, "msg": "任务不存在", "data": null})).unwrap();
    let err = failed.into_data::<TaskPage>().unwrap_err();
    assert!(matches!(err, ConsoleError::Business { code: 500, .. }));
    assert_eq!(err.to_string(), "任务不存在");
}

#[test]
fn test_envelope_unit_payload() {
    let ok: Envelope = serde_json::from_value(json!({"code": 0, "msg": "", "data": null})).unwrap();
    ok.into_data::<()>().unwrap();
}
