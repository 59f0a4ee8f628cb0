mod common;

use common::TestApp;

#[tokio::test]
async fn unfiltered_listing_returns_all_doctors() {
    let app = TestApp::spawn().await;

    app.create(
        "/api/doctors",
        &serde_json::json!({ "name": "Dr. Asha Rao", "hospital_id": "H1" }),
    )
    .await;
    app.create(
        "/api/doctors",
        &serde_json::json!({ "name": "Dr. Vikram Shah", "hospital_id": "H2" }),
    )
    .await;
    app.create("/api/doctors", &serde_json::json!({ "name": "Dr. Meena Iyer" }))
        .await;

    let items = app.list("/api/doctors").await;
    assert_eq!(items.len(), 3);

    app.cleanup().await;
}

#[tokio::test]
async fn hospital_id_filter_matches_exactly() {
    let app = TestApp::spawn().await;

    app.create(
        "/api/doctors",
        &serde_json::json!({ "name": "Dr. Asha Rao", "hospital_id": "H1" }),
    )
    .await;
    app.create(
        "/api/doctors",
        &serde_json::json!({ "name": "Dr. Vikram Shah", "hospital_id": "H10" }),
    )
    .await;

    let items = app.list("/api/doctors?hospital_id=H1").await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Dr. Asha Rao");

    // No partial matching: "H" is not a prefix search
    let items = app.list("/api/doctors?hospital_id=H").await;
    assert!(items.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn department_filter_combines_with_hospital_id() {
    let app = TestApp::spawn().await;

    app.create(
        "/api/doctors",
        &serde_json::json!({
            "name": "Dr. Asha Rao",
            "hospital_id": "H1",
            "department": "Cardiology",
            "opd_days": ["Mon", "Wed"],
            "opd_timings": "10:00-13:00"
        }),
    )
    .await;
    app.create(
        "/api/doctors",
        &serde_json::json!({
            "name": "Dr. Vikram Shah",
            "hospital_id": "H1",
            "department": "Orthopaedics"
        }),
    )
    .await;

    let items = app
        .list("/api/doctors?hospital_id=H1&department=Cardiology")
        .await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Dr. Asha Rao");
    assert_eq!(items[0]["opd_days"], serde_json::json!(["Mon", "Wed"]));

    app.cleanup().await;
}
