use httpmock::prelude::*;
use serde_json::{json, Value};

use super::*;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn shift_json(id: i64) -> Value {
    json!({
        "id": id,
        "organization_id": 2,
        "organization_name": "本社",
        "name": "日勤",
        "code": "GEN",
        "start_time": "09:00:00",
        "end_time": "18:00:00",
        "grace_minutes": 10,
        "half_day_hours": 4.0,
        "full_day_hours": 8.0,
        "break_minutes": 60,
        "week_off_days": [0, 6],
        "is_night_shift": false,
        "is_flexible": false,
        "description": null,
        "is_active": true,
        "assigned_employee_count": 3
    })
}

fn assignment_json(id: i64, is_current: bool) -> Value {
    json!({
        "id": id,
        "shift_id": 1,
        "shift_name": "日勤",
        "employee_id": 7,
        "employee_name": "Asha Rao",
        "employee_code": "EMP-007",
        "effective_from": "2026-08-01",
        "effective_to": if is_current { Value::Null } else { json!("2026-08-20") },
        "is_current": is_current
    })
}

#[tokio::test]
async fn list_shifts_sends_normalized_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/shifts")
                .query_param("page", "2")
                .query_param("pageSize", "9")
                .query_param("is_active", "true");
            then.status(200).json_body(json!({
                "data": [shift_json(1)],
                "pagination": {"page": 2, "pageSize": 9, "totalItems": 10, "totalPages": 2}
            }));
        })
        .await;

    let api = client_for(&server);
    let options = ShiftListOptions {
        page: "2".into(),
        page_size: "9".into(),
        organization_id: "all".into(),
        is_active: "true".into(),
    };
    let envelope = api.list_shifts(&options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.pagination.unwrap().total_pages, 2);
}

#[tokio::test]
async fn list_shifts_coerces_loose_active_values_on_the_wire() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/shifts")
                .query_param("is_active", "false");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let api = client_for(&server);
    let options = ShiftListOptions {
        is_active: "yes".into(),
        ..Default::default()
    };
    let envelope = api.list_shifts(&options).await.unwrap();

    mock.assert_async().await;
    assert!(envelope.data.is_empty());
    assert!(envelope.pagination.is_none());
}

#[tokio::test]
async fn create_shift_posts_payload_and_unwraps_envelope() {
    let server = MockServer::start_async().await;
    let payload = ShiftPayload {
        organization_id: 2,
        name: "日勤".into(),
        code: "GEN".into(),
        start_time: "09:00:00".into(),
        end_time: "18:00:00".into(),
        grace_minutes: 10,
        half_day_hours: 4.0,
        full_day_hours: 8.0,
        break_minutes: 60,
        week_off_days: vec![0, 6],
        is_night_shift: false,
        is_flexible: false,
        description: None,
    };
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/shifts")
                .json_body(serde_json::to_value(&payload).unwrap());
            then.status(201).json_body(json!({"data": shift_json(5)}));
        })
        .await;

    let api = client_for(&server);
    let created = api.create_shift(&payload).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.id, 5);
    assert_eq!(created.code, "GEN");
}

#[tokio::test]
async fn get_shift_rejects_malformed_id_before_any_request() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({"data": shift_json(1)}));
        })
        .await;

    let api = client_for(&server);
    let err = api.get_shift("12abc").await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidId(_)));
    assert_eq!(mock.hits_async().await, 0);
}

#[tokio::test]
async fn delete_shift_surfaces_structured_backend_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/shifts/4");
            then.status(409).json_body(json!({
                "errors": [
                    {"message": "割当中の従業員が存在します"},
                    {"message": "先に割当を解除してください"}
                ]
            }));
        })
        .await;

    let api = client_for(&server);
    let err = api.delete_shift("4").await.unwrap_err();

    match err {
        ApiError::Backend(messages) => assert_eq!(messages.len(), 2),
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[tokio::test]
async fn remove_assignment_surfaces_single_message_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/shifts/assignments/9");
            then.status(404)
                .json_body(json!({"message": "割当が見つかりません"}));
        })
        .await;

    let api = client_for(&server);
    let err = api.remove_assignment("9").await.unwrap_err();

    assert!(matches!(err, ApiError::Message(ref m) if m == "割当が見つかりません"));
}

#[tokio::test]
async fn assign_employee_serializes_open_ended_range() {
    let server = MockServer::start_async().await;
    let request = AssignShiftRequest {
        shift_id: 1,
        employee_id: 7,
        effective_from: "2026-08-23".parse().unwrap(),
        effective_to: None,
    };
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/shifts/assign").json_body(json!({
                "shift_id": 1,
                "employee_id": 7,
                "effective_from": "2026-08-23",
                "effective_to": null
            }));
            then.status(201)
                .json_body(json!({"data": assignment_json(11, true)}));
        })
        .await;

    let api = client_for(&server);
    let assignment = api.assign_employee(&request).await.unwrap();

    mock.assert_async().await;
    assert!(assignment.is_current);
    assert!(assignment.effective_to.is_none());
}

#[tokio::test]
async fn list_shift_assignments_returns_history() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/shifts/1/assignments");
            then.status(200).json_body(json!({
                "data": [assignment_json(11, true), assignment_json(8, false)]
            }));
        })
        .await;

    let api = client_for(&server);
    let assignments = api.list_shift_assignments("1").await.unwrap();

    assert_eq!(assignments.len(), 2);
    assert!(assignments[0].is_current);
    assert!(!assignments[1].is_current);
}

#[tokio::test]
async fn list_employee_assignments_uses_employee_route() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/shifts/employee/7");
            then.status(200)
                .json_body(json!({"data": [assignment_json(11, true)]}));
        })
        .await;

    let api = client_for(&server);
    let assignments = api.list_employee_assignments("7").await.unwrap();

    mock.assert_async().await;
    assert_eq!(assignments.len(), 1);
}

#[tokio::test]
async fn update_shift_puts_to_item_route() {
    let server = MockServer::start_async().await;
    let payload = ShiftPayload {
        organization_id: 2,
        name: "夜勤".into(),
        code: "NGT".into(),
        start_time: "22:00:00".into(),
        end_time: "07:00:00".into(),
        grace_minutes: 15,
        half_day_hours: 4.0,
        full_day_hours: 8.0,
        break_minutes: 45,
        week_off_days: vec![3],
        is_night_shift: true,
        is_flexible: false,
        description: Some("夜間帯".into()),
    };
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/shifts/5");
            then.status(200).json_body(json!({"data": shift_json(5)}));
        })
        .await;

    let api = client_for(&server);
    api.update_shift("5", &payload).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn list_employees_scopes_to_active_members_of_organization() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/employees")
                .query_param("organization_id", "2")
                .query_param("is_active", "true")
                .query_param("pageSize", "200");
            then.status(200).json_body(json!({
                "data": [{
                    "id": 7,
                    "first_name": "Asha",
                    "last_name": "Rao",
                    "employee_code": "EMP-007",
                    "email": "asha@example.com",
                    "department_name": "開発部",
                    "designation": "Engineer"
                }]
            }));
        })
        .await;

    let api = client_for(&server);
    let options = EmployeeListOptions {
        organization_id: 2,
        is_active: true,
        page_size: 200,
    };
    let employees = api.list_employees(&options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(employees[0].display_name(), "Asha Rao");
}

#[tokio::test]
async fn non_json_error_body_becomes_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/shifts/3");
            then.status(502).body("bad gateway");
        })
        .await;

    let api = client_for(&server);
    let err = api.get_shift("3").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(ref m) if m.contains("502")));
}
