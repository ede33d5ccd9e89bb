//! End-to-end API tests: registration/login, the application ledger,
//! close/reopen idempotency reporting, cascade delete, and ownership
//! denial. All tests require a running Postgres (TEST_DATABASE_URL) and
//! are ignored by default.

mod common;

use common::TestApp;
use jobstack_auth::Role;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_register_login_profile_flow() {
    let app = TestApp::new().await.unwrap();
    let email = format!("flow-{}@example.com", Uuid::new_v4().simple());

    let (status, _) = app
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Flow Tester",
                "email": email,
                "password": "a strong password",
                "role": "employer",
            })),
        )
        .await
        .unwrap();
    assert_eq!(status, 201);

    // Duplicate email is a conflict, reported as 400
    let (status, body) = app
        .request(
            "POST",
            "/api/auth/register",
            None,
            Some(json!({
                "name": "Flow Tester",
                "email": email,
                "password": "a strong password",
            })),
        )
        .await
        .unwrap();
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "CONFLICT");

    let (status, body) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": "a strong password" })),
        )
        .await
        .unwrap();
    assert_eq!(status, 200);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = app
        .request("GET", "/api/profile", Some(&token), None)
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["profile"]["email"], email.as_str());
    assert_eq!(body["profile"]["role"], "employer");

    // Wrong password is 401, unknown user is 404
    let (status, _) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": email, "password": "wrong" })),
        )
        .await
        .unwrap();
    assert_eq!(status, 401);

    let (status, _) = app
        .request(
            "POST",
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": "x" })),
        )
        .await
        .unwrap();
    assert_eq!(status, 404);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_apply_twice_counts_once() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let seeker = app.create_user(Role::JobSeeker).await.unwrap();
    let job = app.create_job(employer.id, "3", &[]).await.unwrap();
    let token = app.token_for(&seeker);

    let (status, _) = app
        .request(
            "POST",
            "/api/jobs/apply",
            Some(&token),
            Some(json!({ "job_id": job.id })),
        )
        .await
        .unwrap();
    assert_eq!(status, 201);

    // Second apply with the same pair reports the conflict
    let (status, body) = app
        .request(
            "POST",
            "/api/jobs/apply",
            Some(&token),
            Some(json!({ "job_id": job.id })),
        )
        .await
        .unwrap();
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "CONFLICT");

    // Counter rose exactly once
    let stored = app.jobs.jobs.find(job.id).await.unwrap().unwrap();
    assert_eq!(stored.num_applications, 1);

    // And the application shows up in the seeker's listing, newest first
    let (status, body) = app
        .request("GET", "/api/applications", Some(&token), None)
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["total"], 1);
    assert_eq!(body["applications"][0]["job_id"], json!(job.id));
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_apply_to_closed_job_rejected() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let seeker = app.create_user(Role::JobSeeker).await.unwrap();
    let job = app.create_job(employer.id, "3", &[]).await.unwrap();

    let employer_token = app.token_for(&employer);
    let (status, _) = app
        .request(
            "PATCH",
            &format!("/api/employer/jobs/{}/close", job.id),
            Some(&employer_token),
            None,
        )
        .await
        .unwrap();
    assert_eq!(status, 200);

    let token = app.token_for(&seeker);
    let (status, _) = app
        .request(
            "POST",
            "/api/jobs/apply",
            Some(&token),
            Some(json!({ "job_id": job.id })),
        )
        .await
        .unwrap();
    assert_eq!(status, 400);

    let stored = app.jobs.jobs.find(job.id).await.unwrap().unwrap();
    assert_eq!(stored.num_applications, 0);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_close_twice_reports_already_closed() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let job = app.create_job(employer.id, "3", &[]).await.unwrap();
    let token = app.token_for(&employer);
    let uri = format!("/api/employer/jobs/{}/close", job.id);

    let (status, _) = app.request("PATCH", &uri, Some(&token), None).await.unwrap();
    assert_eq!(status, 200);

    // Second close is a reported no-op, not a success and not a 500
    let (status, body) = app.request("PATCH", &uri, Some(&token), None).await.unwrap();
    assert_eq!(status, 400);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("already closed"));

    let stored = app.jobs.jobs.find(job.id).await.unwrap().unwrap();
    assert!(stored.is_closed);

    // Reopen is symmetric
    let uri = format!("/api/employer/jobs/{}/reopen", job.id);
    let (status, _) = app.request("PATCH", &uri, Some(&token), None).await.unwrap();
    assert_eq!(status, 200);
    let (status, _) = app.request("PATCH", &uri, Some(&token), None).await.unwrap();
    assert_eq!(status, 400);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_delete_job_cascades_applications() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let seeker = app.create_user(Role::JobSeeker).await.unwrap();
    let job = app.create_job(employer.id, "3", &[]).await.unwrap();

    let seeker_token = app.token_for(&seeker);
    app.request(
        "POST",
        "/api/jobs/apply",
        Some(&seeker_token),
        Some(json!({ "job_id": job.id })),
    )
    .await
    .unwrap();

    let token = app.token_for(&employer);
    let (status, _) = app
        .request(
            "DELETE",
            &format!("/api/employer/jobs/{}", job.id),
            Some(&token),
            None,
        )
        .await
        .unwrap();
    assert_eq!(status, 200);

    // No applications reference the job afterwards
    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM applications WHERE job_id = $1")
            .bind(job.id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
    assert!(app.jobs.jobs.find(job.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_non_owner_employer_denied_and_state_unchanged() {
    let app = TestApp::new().await.unwrap();
    let owner = app.create_user(Role::Employer).await.unwrap();
    let other = app.create_user(Role::Employer).await.unwrap();
    let job = app.create_job(owner.id, "3", &[]).await.unwrap();
    let token = app.token_for(&other);

    let cases = [
        ("PATCH", format!("/api/employer/jobs/{}", job.id), Some(json!({ "title": "Hijacked" }))),
        ("PATCH", format!("/api/employer/jobs/{}/close", job.id), None),
        ("DELETE", format!("/api/employer/jobs/{}", job.id), None),
    ];
    for (method, uri, body) in cases {
        let (status, _) = app.request(method, &uri, Some(&token), body).await.unwrap();
        assert_eq!(status, 403, "{} {} should be denied", method, uri);
    }

    let stored = app.jobs.jobs.find(job.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Test Job");
    assert!(!stored.is_closed);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_update_with_malformed_body_uses_error_envelope() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let job = app.create_job(employer.id, "3", &[]).await.unwrap();
    let token = app.token_for(&employer);

    // Wrong field type rejects with the shared envelope, not a bare 422
    let (status, body) = app
        .request(
            "PATCH",
            &format!("/api/employer/jobs/{}", job.id),
            Some(&token),
            Some(json!({ "title": 123 })),
        )
        .await
        .unwrap();
    assert_eq!(status, 400);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let stored = app.jobs.jobs.find(job.id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Test Job");
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_admin_bypasses_ownership() {
    let app = TestApp::new().await.unwrap();
    let owner = app.create_user(Role::Employer).await.unwrap();
    let admin = app.create_user(Role::Admin).await.unwrap();
    let job = app.create_job(owner.id, "3", &[]).await.unwrap();
    let token = app.token_for(&admin);

    let (status, _) = app
        .request(
            "POST",
            &format!("/api/admin/jobs/{}/close", job.id),
            Some(&token),
            None,
        )
        .await
        .unwrap();
    assert_eq!(status, 200);

    let (status, _) = app
        .request(
            "DELETE",
            &format!("/api/admin/jobs/{}", job.id),
            Some(&token),
            None,
        )
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert!(app.jobs.jobs.find(job.id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_role_gates() {
    let app = TestApp::new().await.unwrap();
    let seeker = app.create_user(Role::JobSeeker).await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();

    // A job seeker cannot create jobs
    let (status, _) = app
        .request(
            "POST",
            "/api/employer/jobs/create",
            Some(&app.token_for(&seeker)),
            Some(json!({
                "title": "t", "company": "c", "description": "d",
                "location": "l", "work_mode": "remote", "yoe": "1", "salary": "1"
            })),
        )
        .await
        .unwrap();
    assert_eq!(status, 403);

    // An employer cannot apply
    let (status, _) = app
        .request(
            "POST",
            "/api/jobs/apply",
            Some(&app.token_for(&employer)),
            Some(json!({ "job_id": Uuid::new_v4() })),
        )
        .await
        .unwrap();
    assert_eq!(status, 403);

    // Neither can list users
    let (status, _) = app
        .request("GET", "/api/admin/users", Some(&app.token_for(&employer)), None)
        .await
        .unwrap();
    assert_eq!(status, 403);

    // Anonymous callers are rejected outright
    let (status, _) = app.request("GET", "/api/applications", None, None).await.unwrap();
    assert_eq!(status, 401);
}
