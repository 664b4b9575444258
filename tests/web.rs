//! Integration tests for the HTTP API: export, chart query, submission and reset.

use actix_web::{http::StatusCode, test, web::Data, App};
use serde_json::Value;
use tempfile::TempDir;
use ultimate_stats_web::{
    web::{configure, StatsState, EXPORT_FILE_NAME},
    StatCollection, StatInput, StatsStore, STAT_COLUMNS,
};

/// Store seeded with Alex in G1 and G2, Sam in G1.
fn seeded_store() -> (TempDir, StatsStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = StatsStore::new(dir.path().join("ultimate_stats.csv"));
    let mut c = StatCollection::new();
    for (player, game) in [("Alex", "G1"), ("Sam", "G1"), ("Alex", "G2")] {
        c = store.append(&c, &StatInput::new(player, game)).unwrap();
    }
    (dir, store)
}

macro_rules! app_for {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new(StatsState::new($store)))
                .configure(configure),
        )
        .await
    };
}

#[actix_web::test]
async fn export_downloads_only_the_filtered_view() {
    let (_dir, store) = seeded_store();
    let app = app_for!(store);

    let req = test::TestRequest::get()
        .uri("/api/stats/export?player=Alex")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(
        disposition,
        format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME)
    );
    assert_eq!(EXPORT_FILE_NAME, "filtered_stats.csv");

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], STAT_COLUMNS.join(","));
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("Alex,G1,"));
    assert!(lines[2].starts_with("Alex,G2,"));
}

#[actix_web::test]
async fn export_without_filters_has_every_record() {
    let (_dir, store) = seeded_store();
    let app = app_for!(store);

    let req = test::TestRequest::get().uri("/api/stats/export").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(String::from_utf8(body.to_vec()).unwrap().lines().count(), 4);
}

#[actix_web::test]
async fn trend_rejects_unknown_stat() {
    let (_dir, store) = seeded_store();
    let app = app_for!(store);

    let req = test::TestRequest::get()
        .uri("/api/stats/trend?stat=Points")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn trend_follows_filter_and_stat() {
    let (_dir, store) = seeded_store();
    let app = app_for!(store);

    let req = test::TestRequest::get()
        .uri("/api/stats/trend?stat=Plus%2FMinus&game=G1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["title"], "Plus/Minus Over Games");
    let series = body["series"].as_array().unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["player"], "Alex");
    assert_eq!(series[1]["player"], "Sam");
}

#[actix_web::test]
async fn empty_player_is_bad_request_and_not_stored() {
    let (_dir, store) = seeded_store();
    let app = app_for!(store.clone());

    let req = test::TestRequest::post()
        .uri("/api/stats")
        .set_json(serde_json::json!({ "player": "", "game": "G3" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.load().len(), 3);
}

#[actix_web::test]
async fn negative_count_is_bad_request() {
    let (_dir, store) = seeded_store();
    let app = app_for!(store.clone());

    let req = test::TestRequest::post()
        .uri("/api/stats")
        .set_json(serde_json::json!({ "player": "Alex", "game": "G3", "goals": -1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(store.load().len(), 3);
}

#[actix_web::test]
async fn logged_game_is_listed_with_derived_fields() {
    let (_dir, store) = seeded_store();
    let app = app_for!(store.clone());

    let req = test::TestRequest::post()
        .uri("/api/stats")
        .set_json(serde_json::json!({
            "player": "Jordan",
            "game": "G3",
            "goals": 2,
            "assists": 1,
            "drops": 1,
            "defensive_blocks": 3,
            "total_pulls": 5,
            "out_of_bounds_pulls": 1
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 4);
    assert_eq!(body["record"]["Plus/Minus"], 5);
    assert_eq!(body["record"]["Pull Success %"], 80.0);

    let req = test::TestRequest::get()
        .uri("/api/stats?player=Jordan")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["records"].as_array().unwrap().len(), 1);
    assert_eq!(body["players"], serde_json::json!(["All", "Alex", "Jordan", "Sam"]));
    assert_eq!(store.load().len(), 4);
}

#[actix_web::test]
async fn delete_clears_list_and_file() {
    let (_dir, store) = seeded_store();
    let app = app_for!(store.clone());

    let req = test::TestRequest::delete().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["deleted"], 3);

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["players"], serde_json::json!(["All"]));
    assert!(store.load().is_empty());
}
