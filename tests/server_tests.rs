//! Router-level tests driven through `tower::ServiceExt::oneshot`, no real
//! network listener involved.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use cubalink23::models::AppState;
use cubalink23::routes::build_router;

fn test_state() -> AppState {
    AppState {
        sessions: Arc::new(Mutex::new(HashMap::new())),
        flash_store: Arc::new(Mutex::new(HashMap::new())),
        api_base_url: String::new(),
        public_base_url: "http://localhost:3000".to_string(),
        client: reqwest::Client::new(),
        custom_css: None,
    }
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn health_answers_locally_without_backend() {
    let app = build_router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["message"], "Cubalink23 Web Server Running");
}

#[tokio::test]
async fn home_page_prompts_for_location_when_storage_is_empty() {
    let app = build_router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("locationModal"));
    assert!(body.contains("Seleccione Provincia"));
    assert!(body.contains(r#"rel="canonical" href="http://localhost:3000/""#));
}

#[tokio::test]
async fn home_page_skips_the_modal_when_location_is_stored() {
    let app = build_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/")
                .header(
                    header::COOKIE,
                    "selectedProvince=la-habana; selectedMunicipality=playa",
                )
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(!body.contains("locationModal"));
}

#[tokio::test]
async fn confirming_location_sets_all_four_cookies() {
    let app = build_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/location")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("province=la-habana&municipality=playa"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    let has = |prefix: &str| cookies.iter().any(|c| c.starts_with(prefix));
    assert!(has("selectedProvince=la-habana"));
    assert!(has("selectedMunicipality=playa"));
    assert!(has("selectedProvinceName=La%20Habana"));
    assert!(has("selectedMunicipalityName=Playa"));
}

#[tokio::test]
async fn incomplete_confirmation_degrades_to_a_redirect() {
    let app = build_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/location")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("province=la-habana&municipality="))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
}

#[tokio::test]
async fn unknown_paths_fall_back_to_the_home_page() {
    let app = build_router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/no-such-page").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Cubalink23"));
}

#[tokio::test]
async fn account_requires_a_session() {
    let app = build_router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/account").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
}

#[tokio::test]
async fn flight_search_redirects_to_its_tab_with_a_pending_toast() {
    let app = build_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/search/flights")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("origin=HAV&destination=MIA&date=2026-09-01"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/?tab=flights");
    // The pending toast is queued against a freshly minted visitor cookie.
    let cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("visitor_id=")));
}

#[tokio::test]
async fn hotel_and_car_searches_redirect_to_their_tabs() {
    for (path, tab) in [("/search/hotels", "hotels"), ("/search/cars", "cars")] {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(path)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("destination=varadero"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], format!("/?tab={tab}"));
    }
}

#[tokio::test]
async fn contact_form_redirects_home_with_a_confirmation_toast() {
    let app = build_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Ana&email=ana%40example.com&message=Hola"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
    let cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("visitor_id=")));
}

#[tokio::test]
async fn add_to_cart_sets_cookie_and_redirects() {
    let app = build_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cart")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("product_id=combo-familiar"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookies: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|c| c.starts_with("cubalink23_cart=")));
}
