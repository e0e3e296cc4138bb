mod common;

use common::*;
use reqwest::Method;
use serde_json::json;
use tutoradmin_core::error::AdminError;
use tutoradmin_core::models::{
    AnnouncementPriority, BankDetails, EmailContent, EmailPayload, LoginCredentials,
    NewAnnouncement, PaymentStatus, StudentStatus, TutorStatus, UserKind,
};
use tutoradmin_interaction::TokenStatus;

const JAN_1: &str = "2024-01-01T00:00:00Z";

// ============================================================================
// auth
// ============================================================================

#[tokio::test]
async fn test_login_returns_auth_response_without_touching_session() {
    let transport = MockTransport::new();
    transport.push_data(json!({ "user": admin_json("1"), "token": "tok", "refreshToken": "r" }));
    let session = empty_session();
    let client = client_with(&transport, session.clone());

    let response = client
        .auth()
        .login(&LoginCredentials::new("a@b.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(response.user.id, "1");
    assert_eq!(response.token, "tok");
    assert_eq!(response.refresh_token, "r");
    assert!(!session.is_authenticated());

    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(path_of(&request), "/api/auth/login");
    assert_eq!(
        request.body,
        Some(json!({ "email": "a@b.com", "password": "secret1" }))
    );
}

#[tokio::test]
async fn test_sign_in_stores_session() {
    let transport = MockTransport::new();
    transport.push_data(json!({ "user": admin_json("1"), "token": "tok", "refreshToken": "r" }));
    let session = empty_session();
    let client = client_with(&transport, session.clone());

    client
        .auth()
        .sign_in(&LoginCredentials::new("a@b.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(session.token().as_deref(), Some("tok"));
    assert_eq!(session.user().unwrap().id, "1");
}

#[tokio::test]
async fn test_failed_sign_in_leaves_session_empty() {
    let transport = MockTransport::new();
    transport.push_json(401, json!({ "message": "Invalid credentials", "statusCode": 401 }));
    let session = empty_session();
    let client = client_with(&transport, session.clone());

    let err = client
        .auth()
        .sign_in(&LoginCredentials::new("a@b.com", "wrong"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_sign_out_clears_session_even_when_server_fails() {
    let transport = MockTransport::new();
    transport.push(Err(AdminError::network("connection reset")));
    let session = empty_session();
    session.set_auth(admin("1"), "tok").unwrap();
    let client = client_with(&transport, session.clone());

    let err = client.auth().sign_out().await.unwrap_err();

    assert!(err.is_network());
    assert!(!session.is_authenticated());
    assert_eq!(
        transport.last_request().header("Authorization"),
        Some("Bearer tok")
    );
}

#[tokio::test]
async fn test_refresh_session_replaces_token() {
    let transport = MockTransport::new();
    transport.push_data(json!({ "user": admin_json("1"), "token": "tok2", "refreshToken": "r2" }));
    let session = empty_session();
    session.set_auth(admin("1"), "tok").unwrap();
    let client = client_with(&transport, session.clone());

    let response = client.auth().refresh_session("r").await.unwrap();

    assert_eq!(response.refresh_token, "r2");
    assert_eq!(session.token().as_deref(), Some("tok2"));
    assert_eq!(transport.last_request().body, Some(json!({ "refreshToken": "r" })));
}

#[tokio::test]
async fn test_verify_token_outcomes() {
    let transport = MockTransport::new();
    transport.push_data(json!({ "valid": true }));
    transport.push_data(json!({ "valid": false }));
    transport.push_json(401, json!({ "message": "expired" }));
    transport.push(Err(AdminError::network("connection refused")));
    let client = client_with(&transport, empty_session());
    let auth = client.auth();

    assert_eq!(auth.check_token().await, TokenStatus::Valid);
    assert_eq!(auth.check_token().await, TokenStatus::Invalid);
    assert_eq!(auth.check_token().await, TokenStatus::Invalid);
    assert_eq!(auth.check_token().await, TokenStatus::Unreachable);
}

#[tokio::test]
async fn test_verify_token_is_false_on_network_error() {
    let transport = MockTransport::new();
    transport.push(Err(AdminError::network("connection refused")));
    let client = client_with(&transport, empty_session());

    assert!(!client.auth().verify_token().await);
    assert_eq!(path_of(&transport.last_request()), "/api/auth/verify");
}

#[tokio::test]
async fn test_password_endpoints_send_camel_case_bodies() {
    let transport = MockTransport::new();
    for _ in 0..3 {
        transport.push_json(200, json!({ "success": true }));
    }
    let client = client_with(&transport, empty_session());
    let auth = client.auth();

    auth.change_password("old-pass", "new-pass").await.unwrap();
    auth.forgot_password("a@b.com").await.unwrap();
    auth.reset_password("reset-tok", "new-pass").await.unwrap();

    let requests = transport.requests();
    assert_eq!(path_of(&requests[0]), "/api/auth/change-password");
    assert_eq!(
        requests[0].body,
        Some(json!({ "currentPassword": "old-pass", "newPassword": "new-pass" }))
    );
    assert_eq!(requests[1].body, Some(json!({ "email": "a@b.com" })));
    assert_eq!(
        requests[2].body,
        Some(json!({ "token": "reset-tok", "newPassword": "new-pass" }))
    );
}

// ============================================================================
// students / tutors
// ============================================================================

#[tokio::test]
async fn test_ban_student_sends_single_patch_with_reason() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({ "success": true, "data": null }));
    let client = client_with(&transport, empty_session());

    client
        .students()
        .ban_student("42", Some("cheating"))
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::PATCH);
    assert_eq!(path_of(&requests[0]), "/api/students/42/ban");
    assert_eq!(requests[0].body, Some(json!({ "reason": "cheating" })));
}

#[tokio::test]
async fn test_ban_without_reason_sends_empty_object() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({ "success": true }));
    let client = client_with(&transport, empty_session());

    client.tutors().ban_tutor("t1", None).await.unwrap();

    assert_eq!(transport.last_request().body, Some(json!({})));
}

#[tokio::test]
async fn test_update_student_returns_updated_record() {
    let transport = MockTransport::new();
    transport.push_data(json!({
        "id": "42",
        "name": "Grace",
        "email": "grace@example.com",
        "modulesEnrolled": ["rust-101"],
        "status": "active",
        "enrolledAt": JAN_1,
        "totalSpent": 120.5
    }));
    let client = client_with(&transport, empty_session());

    let update = tutoradmin_core::models::StudentUpdate {
        name: Some("Grace".to_string()),
        ..Default::default()
    };
    let student = client
        .students()
        .update_student("42", &update)
        .await
        .unwrap();

    assert_eq!(student.name, "Grace");
    let request = transport.last_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.body, Some(json!({ "name": "Grace" })));
}

#[tokio::test]
async fn test_student_list_decodes_date_only_records() {
    let transport = MockTransport::new();
    transport.push_data(json!({
        "students": [{
            "id": "1",
            "name": "Alice Brown",
            "email": "alice@example.com",
            "modulesEnrolled": ["Mathematics 101", "Physics"],
            "status": "active",
            "totalSpent": 250,
            "enrolledAt": "2025-01-15"
        }],
        "total": 1
    }));
    let client = client_with(&transport, empty_session());

    let page = client.students().get_students(None, None).await.unwrap();

    let alice = &page.students[0];
    assert_eq!(alice.status, StudentStatus::Active);
    assert!(alice.profile_picture.is_none());
    assert_eq!(alice.total_spent, 250.0);
    assert_eq!(alice.enrolled_at.as_str(), "2025-01-15");
    assert_eq!(
        alice.enrolled_at.date().map(|date| date.to_string()),
        Some("2025-01-15".to_string())
    );
}

#[tokio::test]
async fn test_tutor_record_keeps_optional_profile_fields() {
    let transport = MockTransport::new();
    transport.push_data(json!({
        "id": "t1",
        "name": "Dr. Sarah Johnson",
        "email": "sarah@example.com",
        "modules": ["Mathematics 101", "Calculus"],
        "status": "approved",
        "totalEarnings": 2500,
        "studentsCount": 45,
        "joinedAt": "2024-09-01",
        "bio": "PhD in applied mathematics",
        "expertise": ["Calculus", "Linear Algebra"]
    }));
    let client = client_with(&transport, empty_session());

    let tutor = client.tutors().get_tutor("t1").await.unwrap();

    assert_eq!(tutor.status, TutorStatus::Approved);
    assert_eq!(tutor.students_count, 45);
    assert_eq!(tutor.joined_at.as_str(), "2024-09-01");
    assert_eq!(tutor.bio.as_deref(), Some("PhD in applied mathematics"));
    assert_eq!(
        tutor.expertise.as_deref(),
        Some(&["Calculus".to_string(), "Linear Algebra".to_string()][..])
    );
    assert!(tutor.profile_picture.is_none());
    assert!(tutor.phone.is_none());
}

#[tokio::test]
async fn test_tutor_stats_path() {
    let transport = MockTransport::new();
    transport.push_data(json!({
        "totalEarnings": 900.0,
        "totalStudents": 12,
        "activeModules": 3,
        "rating": 4.8
    }));
    let client = client_with(&transport, empty_session());

    let stats = client.tutors().get_tutor_stats("t9").await.unwrap();

    assert_eq!(stats.total_students, 12);
    assert_eq!(path_of(&transport.last_request()), "/api/tutors/t9/stats");
}

// ============================================================================
// payments
// ============================================================================

#[tokio::test]
async fn test_payment_actions() {
    let transport = MockTransport::new();
    for _ in 0..3 {
        transport.push_json(200, json!({ "success": true }));
    }
    let client = client_with(&transport, empty_session());
    let payments = client.payments();

    payments.approve_payment("p1", Some("paid via BACS")).await.unwrap();
    payments.reject_payment("p2", "duplicate").await.unwrap();
    payments
        .process_bulk_payments(&["p3".to_string(), "p4".to_string()])
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(path_of(&requests[0]), "/api/payments/requests/p1/approve");
    assert_eq!(requests[0].body, Some(json!({ "notes": "paid via BACS" })));
    assert_eq!(path_of(&requests[1]), "/api/payments/requests/p2/reject");
    assert_eq!(requests[1].body, Some(json!({ "reason": "duplicate" })));
    assert_eq!(path_of(&requests[2]), "/api/payments/bulk-approve");
    assert_eq!(requests[2].body, Some(json!({ "paymentIds": ["p3", "p4"] })));
    assert!(requests.iter().all(|r| r.method == Method::POST));
}

#[tokio::test]
async fn test_payment_requests_decode_bank_details() {
    let transport = MockTransport::new();
    transport.push_data(json!({
        "payments": [{
            "id": "p1",
            "tutorId": "t1",
            "tutorName": "Dr. Sarah Johnson",
            "tutorEmail": "sarah@example.com",
            "module": "Mathematics 101",
            "studentsEnrolled": 15,
            "claimDate": "2025-10-01",
            "amount": 450,
            "status": "pending",
            "bankDetails": {
                "accountName": "Sarah Johnson",
                "accountNumber": "****1234",
                "bankName": "First National Bank"
            }
        }],
        "total": 1
    }));
    let client = client_with(&transport, empty_session());

    let page = client.payments().get_payment_requests(None).await.unwrap();

    let request = &page.payments[0];
    assert_eq!(request.status, PaymentStatus::Pending);
    assert_eq!(request.amount, 450.0);
    assert_eq!(request.claim_date.as_str(), "2025-10-01");
    assert_eq!(
        request.bank_details,
        Some(BankDetails {
            account_name: "Sarah Johnson".to_string(),
            account_number: "****1234".to_string(),
            bank_name: "First National Bank".to_string(),
        })
    );
    assert_eq!(path_of(&transport.last_request()), "/api/payments/requests");
}

#[tokio::test]
async fn test_payment_history_decodes_date_only_paid_date() {
    let transport = MockTransport::new();
    transport.push_data(json!({
        "history": [{
            "id": "h1",
            "tutorId": "t2",
            "tutorName": "Prof. Michael Chen",
            "amount": 320,
            "paidDate": "2025-09-30",
            "transactionId": "TXN-2025-0930",
            "module": "Computer Science"
        }],
        "total": 1
    }));
    let client = client_with(&transport, empty_session());

    let page = client.payments().get_payment_history(None).await.unwrap();

    let entry = &page.history[0];
    assert_eq!(entry.transaction_id, "TXN-2025-0930");
    assert_eq!(entry.paid_date.as_str(), "2025-09-30");
    assert!(entry.paid_date.to_datetime().is_some());
}

#[tokio::test]
async fn test_tutor_payments_list() {
    let transport = MockTransport::new();
    transport.push_data(json!([{
        "id": "h1",
        "tutorId": "t1",
        "tutorName": "Jane",
        "amount": 250.0,
        "paidDate": JAN_1,
        "transactionId": "tx-1",
        "module": "rust-101"
    }]));
    let client = client_with(&transport, empty_session());

    let history = client.payments().get_tutor_payments("t1").await.unwrap();

    assert_eq!(history[0].transaction_id, "tx-1");
    assert_eq!(path_of(&transport.last_request()), "/api/payments/tutor/t1");
}

// ============================================================================
// mail
// ============================================================================

#[tokio::test]
async fn test_mail_bodies() {
    let transport = MockTransport::new();
    for _ in 0..3 {
        transport.push_json(200, json!({ "success": true }));
    }
    let client = client_with(&transport, empty_session());
    let mail = client.mail();

    mail.send_email(&EmailPayload::new(
        "t@example.com",
        EmailContent::new("Hello", "Body"),
    ))
    .await
    .unwrap();
    mail.send_bulk_email(
        &["a@example.com".to_string(), "b@example.com".to_string()],
        &EmailContent::new("News", "Update").with_cc("ops@example.com"),
    )
    .await
    .unwrap();
    mail.send_ban_notification("u1", UserKind::Student, "spam")
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[0].body,
        Some(json!({ "to": "t@example.com", "subject": "Hello", "message": "Body" }))
    );
    assert_eq!(path_of(&requests[1]), "/api/mail/send-bulk");
    assert_eq!(
        requests[1].body,
        Some(json!({
            "recipients": ["a@example.com", "b@example.com"],
            "subject": "News",
            "message": "Update",
            "cc": ["ops@example.com"]
        }))
    );
    assert_eq!(
        requests[2].body,
        Some(json!({ "userId": "u1", "type": "student", "reason": "spam" }))
    );
}

#[tokio::test]
async fn test_notification_paths_have_no_body() {
    let transport = MockTransport::new();
    transport.push_json(200, json!({ "success": true }));
    transport.push_json(200, json!({ "success": true }));
    let client = client_with(&transport, empty_session());

    client.mail().send_payment_notification("p1").await.unwrap();
    client.mail().send_approval_notification("t1").await.unwrap();

    let requests = transport.requests();
    assert_eq!(path_of(&requests[0]), "/api/mail/payment-notification/p1");
    assert_eq!(path_of(&requests[1]), "/api/mail/tutor-approval/t1");
    assert!(requests.iter().all(|r| r.body.is_none()));
}

// ============================================================================
// analytics
// ============================================================================

#[tokio::test]
async fn test_analytics_defaults_are_sent() {
    let transport = MockTransport::new();
    for _ in 0..4 {
        transport.push_data(json!([]));
    }
    let client = client_with(&transport, empty_session());
    let analytics = client.analytics();

    analytics.get_recent_activities(None).await.unwrap();
    analytics.get_enrollment_growth(None).await.unwrap();
    analytics.get_revenue_over_time(Some(12)).await.unwrap();
    analytics.get_top_modules(None).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{}/analytics/activities?limit=10", BASE_URL));
    assert_eq!(
        requests[1].url,
        format!("{}/analytics/enrollment-growth?months=6", BASE_URL)
    );
    assert_eq!(requests[2].url, format!("{}/analytics/revenue?months=12", BASE_URL));
    assert_eq!(requests[3].url, format!("{}/analytics/top-modules?limit=5", BASE_URL));
}

#[tokio::test]
async fn test_announcements_without_limit_send_no_query() {
    let transport = MockTransport::new();
    transport.push_data(json!([]));
    let client = client_with(&transport, empty_session());

    client.analytics().get_announcements(None).await.unwrap();

    assert_eq!(
        transport.last_request().url,
        format!("{}/analytics/announcements", BASE_URL)
    );
}

#[tokio::test]
async fn test_create_announcement() {
    let transport = MockTransport::new();
    transport.push_data(json!({
        "id": "an1",
        "title": "Maintenance",
        "message": "Down at midnight",
        "createdAt": JAN_1,
        "priority": "high",
        "author": "Ada"
    }));
    let client = client_with(&transport, empty_session());

    let announcement = client
        .analytics()
        .create_announcement(&NewAnnouncement {
            title: "Maintenance".to_string(),
            message: "Down at midnight".to_string(),
            priority: AnnouncementPriority::High,
            author: "Ada".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(announcement.id, "an1");
    let request = transport.last_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(
        request.body,
        Some(json!({
            "title": "Maintenance",
            "message": "Down at midnight",
            "priority": "high",
            "author": "Ada"
        }))
    );
}
