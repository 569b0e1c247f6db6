//! # Resource Module Tests
//!
//! Request shaping (method, path, query, body) and typed decoding for the
//! resource modules.

use super::*;
use crate::core::error::{ApiError, TransportErrorKind};
use crate::services::api::applications::FileUpload;
use crate::services::api::request::{MultipartPart, RequestBody};
use crate::services::api::{admin, application_fields, applications, auth, notifications, quota, scholarships, system_settings, users};
use reqwest::Method;
use serde_json::json;
use shared::{
    ApplicationStatus, MatrixQuotaUpdate, PageRequest, ScholarshipFilter, StatusUpdateRequest, SystemSettingUpdate, UserFilter,
    UserRole,
};

#[tokio::test]
async fn test_admin_applications_query() {
    // Arrange
    let (client, transport) = test_client();
    transport.push_json(200, json!({"items": [], "total": 0, "page": 1, "size": 10, "pages": 0}));

    // Act
    let response = admin::get_all_applications(
        &client,
        PageRequest { page: 1, size: 10 },
        Some(&ApplicationStatus::Submitted),
    )
    .await
    .unwrap();

    // Assert
    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url, url("/admin/applications?page=1&size=10&status=submitted"));
    let page = response.data.unwrap();
    assert_eq!(page.total, 0);
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_upload_file_sends_multipart() {
    let (client, transport) = test_client();
    transport.push_json(201, json!({"id": 5, "file_type": "transcript", "original_filename": "t.pdf"}));
    let file = FileUpload::new("t.pdf", b"%PDF-1.4".to_vec()).with_mime_type("application/pdf");

    let response = applications::upload_file(&client, 42, "transcript", file).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, url("/applications/42/files/upload?file_type=transcript"));
    assert_eq!(request.header("content-type"), None);
    match &request.body {
        RequestBody::Multipart(form) => assert_eq!(
            form.parts(),
            &[MultipartPart::File {
                name: "file".to_string(),
                file_name: "t.pdf".to_string(),
                mime_type: Some("application/pdf".to_string()),
                bytes: b"%PDF-1.4".to_vec(),
            }]
        ),
        other => panic!("Expected multipart body, got {:?}", other),
    }
    assert_eq!(response.data.unwrap().id, 5);
}

#[tokio::test]
async fn test_login_stores_token() {
    let (client, transport) = test_client();
    transport.push_json(
        200,
        json!({
            "success": true,
            "message": "Login successful",
            "data": {
                "access_token": "jwt-abc",
                "token_type": "bearer",
                "expires_in": 3600,
                "user": {"id": 1, "name": "Alice", "role": "student"}
            }
        }),
    );

    let response = auth::login(&client, "alice", "pw").await.unwrap();

    assert_eq!(response.data.unwrap().user.unwrap().role, UserRole::Student);
    assert_eq!(client.tokens().get_token().as_deref(), Some("jwt-abc"));
    let request = transport.last_request();
    assert_eq!(request.url, url("/auth/login"));
    assert_eq!(request.body, RequestBody::Json(json!({"username": "alice", "password": "pw"})));
}

#[tokio::test]
async fn test_failed_login_leaves_no_token() {
    let (client, transport) = test_client();
    transport.push_json(200, json!({"success": false, "message": "Invalid credentials"}));
    transport.push_json(401, json!({"detail": "Incorrect username or password"}));

    let soft = auth::login(&client, "alice", "bad").await.unwrap();
    let hard = auth::login(&client, "alice", "bad").await.unwrap_err();

    assert!(!soft.success);
    assert!(matches!(hard, ApiError::Unauthorized { .. }));
    assert!(!client.tokens().has_token());
}

#[tokio::test]
async fn test_refresh_replaces_token_and_logout_clears_it() {
    let (client, transport) = test_client();
    client.tokens().set_token("old");
    transport.push_json(200, json!({"success": true, "message": "ok", "data": {"access_token": "new"}}));

    auth::refresh_token(&client).await.unwrap();
    assert_eq!(transport.last_request().header("Authorization"), Some("Bearer old"));
    assert_eq!(transport.last_request().method, Method::POST);
    assert_eq!(client.tokens().get_token().as_deref(), Some("new"));

    auth::logout(&client);
    assert!(!client.tokens().has_token());
}

#[tokio::test]
async fn test_scholarship_filters() {
    let (client, transport) = test_client();
    transport.push_json(200, json!([]));
    let filter = ScholarshipFilter {
        academic_year: Some(113),
        semester: Some(String::new()),
        is_active: Some(true),
        ..ScholarshipFilter::default()
    };

    scholarships::get_all(&client, &filter).await.unwrap();

    assert_eq!(transport.last_request().url, url("/scholarships?academic_year=113&is_active=true"));
}

#[tokio::test]
async fn test_users_query_and_delete() {
    let (client, transport) = test_client();
    transport.push_json(200, json!({"items": [], "total": 0, "page": 2, "size": 5, "pages": 0}));
    transport.push_json(200, json!({"success": true, "message": "User deleted"}));
    let filter = UserFilter {
        role: Some(UserRole::SuperAdmin),
        search: Some("chen wei".to_string()),
    };

    users::get_all(&client, PageRequest { page: 2, size: 5 }, &filter).await.unwrap();
    let first = transport.last_request();
    let deleted = users::delete(&client, 9).await.unwrap();

    assert_eq!(first.url, url("/users?page=2&size=5&role=super_admin&search=chen+wei"));
    assert_eq!(transport.last_request().method, Method::DELETE);
    assert_eq!(transport.last_request().url, url("/users/9"));
    assert_eq!(deleted.message, "User deleted");
}

#[tokio::test]
async fn test_status_update_is_patch_with_json() {
    let (client, transport) = test_client();
    transport.push_json(200, json!({"id": 3, "status": "approved"}));
    let request = StatusUpdateRequest {
        status: ApplicationStatus::Approved,
        comments: Some("Well prepared".to_string()),
        rejection_reason: None,
    };

    let response = applications::update_status(&client, 3, &request).await.unwrap();

    let sent = transport.last_request();
    assert_eq!(sent.method, Method::PATCH);
    assert_eq!(sent.url, url("/applications/3/status"));
    assert_eq!(sent.header("content-type"), Some("application/json"));
    match sent.body {
        RequestBody::Json(body) => assert_eq!(body["status"], "approved"),
        other => panic!("Expected JSON body, got {:?}", other),
    }
    assert_eq!(response.data.unwrap().status, ApplicationStatus::Approved);
}

#[tokio::test]
async fn test_unread_count_accepts_both_shapes() {
    let (client, transport) = test_client();
    transport.push_json(200, json!({"success": true, "message": "ok", "data": {"count": 4}}));
    transport.push_json(200, json!({"success": true, "message": "ok", "data": 7}));

    let object = notifications::get_unread_count(&client).await.unwrap();
    let bare = notifications::get_unread_count(&client).await.unwrap();

    assert_eq!(object.data, Some(4));
    assert_eq!(bare.data, Some(7));
}

#[tokio::test]
async fn test_notifications_unread_filter() {
    let (client, transport) = test_client();
    transport.push_json(200, json!([]));
    transport.push_json(200, json!([]));

    notifications::get_all(&client, false, None).await.unwrap();
    assert_eq!(transport.last_request().url, url("/notifications"));

    notifications::get_all(&client, true, Some(PageRequest::default())).await.unwrap();
    assert_eq!(transport.last_request().url, url("/notifications?unread_only=true&page=1&size=20"));
}

#[tokio::test]
async fn test_batch_quota_update_aggregates_failures() {
    // Arrange
    let (client, transport) = test_client();
    transport.push_json(
        200,
        json!({"success": true, "message": "ok", "data": {"sub_type": "nstc", "college": "E", "old_quota": 3, "new_quota": 5}}),
    );
    transport.push_json(400, json!({"detail": "Quota below used count"}));
    transport.push_error(TransportError::new(TransportErrorKind::Timeout, "request timed out"));
    transport.push_json(200, json!({"success": false, "message": "Period locked"}));
    let updates = [("nstc", "E", 5), ("nstc", "C", 0), ("moe_1w", "E", 2), ("moe_1w", "C", 4)]
        .into_iter()
        .map(|(sub_type, college, new_quota)| MatrixQuotaUpdate {
            sub_type: sub_type.to_string(),
            college: college.to_string(),
            new_quota,
        })
        .collect::<Vec<_>>();

    // Act
    let response = quota::batch_update_matrix_quotas(&client, &updates).await;

    // Assert
    assert_eq!(transport.requests().len(), 4);
    assert!(transport.requests().iter().all(|r| r.method == Method::PUT));
    assert!(!response.success);
    assert_eq!(response.message, "Updated 1 of 4 quotas");
    assert_eq!(response.data.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        response.errors.unwrap(),
        vec![
            "nstc/C: Quota below used count",
            "moe_1w/E: request timed out",
            "moe_1w/C: Period locked",
        ]
    );
}

#[tokio::test]
async fn test_batch_quota_update_all_succeed() {
    let (client, _transport) = test_client();
    let updates = vec![MatrixQuotaUpdate {
        sub_type: "nstc".to_string(),
        college: "E".to_string(),
        new_quota: 8,
    }];

    let response = quota::batch_update_matrix_quotas(&client, &updates).await;

    assert!(response.success);
    assert_eq!(response.errors, None);
    assert_eq!(response.message, "Updated 1 of 1 quotas");
    assert_eq!(response.data.unwrap()[0].new_quota, 8);
}

#[tokio::test]
async fn test_matrix_quota_status_path() {
    let (client, transport) = test_client();
    transport.push_json(
        200,
        json!({
            "success": true,
            "message": "ok",
            "data": {
                "period": "113",
                "phd_quotas": {"nstc": {"E": {"total_quota": 5, "used": 2, "available": 3, "applications": 4}}}
            }
        }),
    );

    let response = quota::get_matrix_quota_status(&client, "113").await.unwrap();

    assert_eq!(transport.last_request().url, url("/scholarship-quotas/matrix-quota-status/113"));
    let status = response.data.unwrap();
    assert_eq!(status.phd_quotas["nstc"]["E"].available, 3);
}

#[tokio::test]
async fn test_string_path_segments_are_encoded() {
    // Arrange
    let (client, transport) = test_client();
    let update = SystemSettingUpdate {
        value: json!(10),
        description: None,
    };

    // Act
    system_settings::get(&client, "mail/smtp host").await.unwrap();
    let get_url = transport.last_request().url;
    system_settings::update(&client, "limits?max#1", &update).await.unwrap();
    let put_url = transport.last_request().url;
    quota::get_matrix_quota_status(&client, "113/1").await.unwrap();
    let quota_url = transport.last_request().url;
    application_fields::get_form_config(&client, "phd").await.unwrap();
    let form_url = transport.last_request().url;

    // Assert
    assert_eq!(get_url, url("/system-settings/mail%2Fsmtp%20host"));
    assert_eq!(put_url, url("/system-settings/limits%3Fmax%231"));
    assert_eq!(quota_url, url("/scholarship-quotas/matrix-quota-status/113%2F1"));
    assert_eq!(form_url, url("/application-fields/form-config/phd"));
}
