mod common;

use actix_web::test;
use serde_json::json;
use serial_test::serial;

use common::{trip_request, TestApp};

#[actix_rt::test]
#[serial]
async fn test_generate_itinerary_success() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&trip_request("Paris"))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"].as_str().unwrap().len(), 24);

    let itinerary = &body["itinerary"];
    assert_eq!(itinerary["name"], "Paris: 3 days");
    assert_eq!(itinerary["destination_emoji"], "🗺️");
    assert_eq!(itinerary["preference"]["destination"], "Paris");
    assert!(itinerary["created_at"].is_string());

    let items = itinerary["items"].as_array().unwrap();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0]["title"], "Arrival & Check-in");
    assert_eq!(items[0]["category"], "transport");
    assert_eq!(items[1]["category"], "food");
    assert_eq!(
        items[1]["description"],
        "Curated food stop aligned with your mood: romantic."
    );
    assert_eq!(items[7]["title"], "Farewell Dinner");
    assert_eq!(items[7]["day"], 3);
}

#[actix_rt::test]
#[serial]
async fn test_generate_with_unparsable_dates_uses_three_days() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let mut body = trip_request("Reykjavik");
    body["start_date"] = json!("whenever");
    body["pace"] = json!("packed");

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&body)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["itinerary"]["name"], "Reykjavik: 3 days");
    assert_eq!(body["itinerary"]["destination_emoji"], "✈️");
    assert_eq!(body["itinerary"]["items"].as_array().unwrap().len(), 1 + 3 * 4 + 1);
}

#[actix_rt::test]
#[serial]
async fn test_generate_rejects_invalid_preferences() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let mut too_many = trip_request("Paris");
    too_many["travelers"] = json!(20);
    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&too_many)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("travelers"));

    let mut bad_pace = trip_request("Paris");
    bad_pace["pace"] = json!("frantic");
    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&bad_pace)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&json!({ "destination": "Paris" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
}

#[actix_rt::test]
#[serial]
async fn test_generate_rejects_overlong_trip() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let mut body = trip_request("Everywhere");
    body["start_date"] = json!("0001-01-01");
    body["end_date"] = json!("9999-12-31");
    body["pace"] = json!("packed");

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("trip length must be at most 365 days"));

    let req = test::TestRequest::get().uri("/api/itineraries").to_request();
    let listed: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed["items"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
#[serial]
async fn test_list_itineraries_newest_first() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/itineraries").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 0);

    for destination in ["Rome", "Kyoto", "Bali"] {
        let req = test::TestRequest::post()
            .uri("/api/itineraries/generate")
            .set_json(&trip_request(destination))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get().uri("/api/itineraries").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let items = body["items"].as_array().unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "Bali: 3 days");
    assert_eq!(items[2]["name"], "Rome: 3 days");
    for item in items {
        assert!(item["id"].is_string());
        assert!(item.get("_id").is_none());
        assert!(item["created_at"].is_string());
    }
}

#[actix_rt::test]
#[serial]
async fn test_list_caps_at_ten() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for n in 0..11 {
        let req = test::TestRequest::post()
            .uri("/api/itineraries/generate")
            .set_json(&trip_request(&format!("Town {}", n)))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/itineraries").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["items"].as_array().unwrap().len(), 10);
}

#[actix_rt::test]
#[serial]
async fn test_get_itinerary_by_valid_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&trip_request("Tokyo"))
        .to_request();
    let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/itineraries/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Tokyo: 3 days");
    assert_eq!(body["destination_emoji"], "🗻");
    assert_eq!(body["items"], created["itinerary"]["items"]);
}

#[actix_rt::test]
#[serial]
async fn test_get_itinerary_by_invalid_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/invalid_id_format")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["detail"], "Itinerary not found");
}

#[actix_rt::test]
#[serial]
async fn test_get_itinerary_by_unknown_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/65f1c0ffee0000000000abcd")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_store_failure_returns_server_error() {
    let test_app = TestApp::unavailable();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/generate")
        .set_json(&trip_request("Paris"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"].as_str().unwrap().contains("Database error"));

    let req = test::TestRequest::get().uri("/api/itineraries").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
}
