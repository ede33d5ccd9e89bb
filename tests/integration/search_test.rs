//! Job search tests: the numeric-yoe filter asymmetry, pagination
//! totals, and the skills round trip. All tests require a running
//! Postgres (TEST_DATABASE_URL) and are ignored by default.

mod common;

use common::TestApp;
use jobstack_auth::Role;
use uuid::Uuid;

/// Unique per-test skill tag so tests can share a database
fn tag() -> String {
    format!("tag-{}", Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_yoe_bounds_exclude_non_numeric_rows() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let tag = tag();

    for yoe in ["3", "5", "senior"] {
        app.create_job(employer.id, yoe, &[tag.clone()]).await.unwrap();
    }

    // With a bound, only numeric rows >= 4 match; "senior" drops out
    let (status, body) = app
        .request(
            "GET",
            &format!("/api/jobs/search?skill={}&min_yoe=4", tag),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"][0]["yoe"], "5");

    // Without bounds all three rows are included, "senior" too
    let (status, body) = app
        .request("GET", &format!("/api/jobs/search?skill={}", tag), None, None)
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_bounded_search_tolerates_oversized_digit_runs() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let tag = tag();

    // 25 digits passes a naive digit check but exceeds bigint range;
    // it must behave like free text, not break the whole query
    app.create_job(employer.id, "9999999999999999999999999", &[tag.clone()])
        .await
        .unwrap();
    app.create_job(employer.id, "7", &[tag.clone()]).await.unwrap();

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/jobs/search?skill={}&min_yoe=1", tag),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"][0]["yoe"], "7");

    // Unbounded search still includes the oversized row
    let (_, body) = app
        .request("GET", &format!("/api/jobs/search?skill={}", tag), None, None)
        .await
        .unwrap();
    assert_eq!(body["total"], 2);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_huge_pagination_params_are_harmless() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let tag = tag();
    app.create_job(employer.id, "1", &[tag.clone()]).await.unwrap();

    let (status, body) = app
        .request(
            "GET",
            &format!("/api/jobs/search?skill={}&page=9223372036854775807", tag),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(status, 200);
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_status_filter() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let tag = tag();

    let open_job = app.create_job(employer.id, "2", &[tag.clone()]).await.unwrap();
    let closed_job = app.create_job(employer.id, "2", &[tag.clone()]).await.unwrap();
    app.jobs.jobs.set_closed(closed_job.id, true).await.unwrap();

    let (_, body) = app
        .request(
            "GET",
            &format!("/api/jobs/search?skill={}&status=open", tag),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"][0]["id"], serde_json::json!(open_job.id));

    let (_, body) = app
        .request(
            "GET",
            &format!("/api/jobs/search?skill={}&status=closed", tag),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"][0]["is_closed"], true);

    // status=any (the default) sees both
    let (_, body) = app
        .request("GET", &format!("/api/jobs/search?skill={}", tag), None, None)
        .await
        .unwrap();
    assert_eq!(body["total"], 2);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_pagination_totals_and_last_page() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let tag = tag();

    for _ in 0..25 {
        app.create_job(employer.id, "1", &[tag.clone()]).await.unwrap();
    }

    let (_, body) = app
        .request(
            "GET",
            &format!("/api/jobs/search?skill={}&page=3&per_page=10", tag),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(body["total"], 25);
    assert_eq!(body["total_pages"], 3);
    assert_eq!(body["page"], 3);
    assert_eq!(body["jobs"].as_array().unwrap().len(), 5);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_skills_round_trip_through_storage() {
    let app = TestApp::new().await.unwrap();
    let employer = app.create_user(Role::Employer).await.unwrap();
    let tag = tag();

    let skills = vec![tag.clone(), "Go".to_string(), "SQL".to_string()];
    app.create_job(employer.id, "2", &skills).await.unwrap();

    let (_, body) = app
        .request("GET", &format!("/api/jobs/search?skill={}", tag), None, None)
        .await
        .unwrap();
    let listed: Vec<String> = body["jobs"][0]["skills"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, skills);

    // The skill match is a case-insensitive substring
    let (_, body) = app
        .request(
            "GET",
            &format!("/api/jobs/search?skill={}", tag.to_uppercase()),
            None,
            None,
        )
        .await
        .unwrap();
    assert_eq!(body["total"], 1);
}

#[tokio::test]
#[ignore] // requires TEST_DATABASE_URL
async fn test_employer_listing_is_owner_scoped() {
    let app = TestApp::new().await.unwrap();
    let a = app.create_user(Role::Employer).await.unwrap();
    let b = app.create_user(Role::Employer).await.unwrap();
    let tag = tag();

    app.create_job(a.id, "1", &[tag.clone()]).await.unwrap();
    app.create_job(b.id, "1", &[tag.clone()]).await.unwrap();

    let (_, body) = app
        .request(
            "GET",
            &format!("/api/employer/jobs?skill={}", tag),
            Some(&app.token_for(&a)),
            None,
        )
        .await
        .unwrap();
    assert_eq!(body["total"], 1);
    assert_eq!(body["jobs"][0]["posted_by"], serde_json::json!(a.id));
}
