use actix_web::{http::StatusCode, test, web::Data, App};
use gazetteer_core::DefaultGazetteer;
use gazetteer_server::startup::configure;
use serde_json::Value;
use std::path::PathBuf;

fn sample_db() -> Data<DefaultGazetteer> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../gazetteer-core/tests/data/sample.txt");
    Data::new(DefaultGazetteer::load_from_path(path).expect("sample dataset loads"))
}

/// Percent-encodes every non-alphanumeric byte, enough for Cyrillic query values.
fn encode(s: &str) -> String {
    s.bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b == b'-' {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect()
}

macro_rules! call {
    ($req:expr) => {{
        let app = test::init_service(App::new().app_data(sample_db()).configure(configure)).await;
        test::call_service(&app, $req.to_request()).await
    }};
}

#[actix_web::test]
async fn health_check_works() {
    let resp = call!(test::TestRequest::get().uri("/health_check"));
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn reads_a_city_by_id() {
    let resp = call!(test::TestRequest::get().uri("/city?geonameid=498817"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["geonameid"], "498817");
    assert_eq!(body["name"], "Sankt-Peterburg");
    assert_eq!(body["timezone"], "Europe/Moscow");
    assert_eq!(body["modification_date"], "2022-12-10");
    assert_eq!(body["cc2"], Value::Null);
}

#[actix_web::test]
async fn unknown_city_is_404() {
    let resp = call!(test::TestRequest::get().uri("/city?geonameid=42"));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "City not found");
}

#[actix_web::test]
async fn bad_city_ids_are_400() {
    for uri in ["/city?geonameid=0", "/city?geonameid=-5", "/city?geonameid=abc", "/city"] {
        let resp = call!(test::TestRequest::get().uri(uri));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string(), "{uri}");
    }
}

#[actix_web::test]
async fn lists_a_page() {
    let resp = call!(test::TestRequest::get().uri("/list-of-cities?page_num=2&page_size=4"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let ids: Vec<_> = body["cities_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["geonameid"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(ids, ["554234", "571476", "480060", "1486209"]);
}

#[actix_web::test]
async fn page_past_the_end_is_empty() {
    let resp = call!(test::TestRequest::get().uri("/list-of-cities?page_num=50&page_size=10"));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["cities_list"], Value::Array(vec![]));
}

#[actix_web::test]
async fn zero_page_size_is_rejected() {
    let resp = call!(test::TestRequest::get().uri("/list-of-cities?page_num=1&page_size=0"));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn zero_page_num_is_rejected() {
    let resp = call!(test::TestRequest::get().uri("/list-of-cities?page_num=0&page_size=10"));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn compares_two_cities_typed_in_cyrillic() {
    let uri = format!(
        "/two-cities?first_city={}&second_city={}",
        encode("Москва"),
        encode("Санкт-Петербург")
    );
    let resp = call!(test::TestRequest::get().uri(&uri));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["cities_list"][0]["geonameid"], "524901");
    assert_eq!(body["cities_list"][1]["geonameid"], "498817");
    assert_eq!(body["more_northerly"], "Sankt-Peterburg");
    assert_eq!(body["timezone_coincidence"], true);
    assert_eq!(body["time_shifting"], "0:00:00");
}

#[actix_web::test]
async fn comparison_with_unknown_city_is_404() {
    let uri = format!("/two-cities?first_city=Moskva&second_city={}", encode("Атлантида"));
    let resp = call!(test::TestRequest::get().uri(&uri));
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn comparison_names_are_length_checked() {
    let short = call!(test::TestRequest::get().uri("/two-cities?first_city=M&second_city=Tomsk"));
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);

    let long_name = encode(&"я".repeat(21));
    let uri = format!("/two-cities?first_city=Tomsk&second_city={long_name}");
    let long = call!(test::TestRequest::get().uri(&uri));
    assert_eq!(long.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn autocompletes_a_cyrillic_prefix() {
    let uri = format!("/autocomplete?string={}", encode("Мос"));
    let resp = call!(test::TestRequest::post().uri(&uri));
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["list_of_variations"],
        serde_json::json!(["Moskovskiy", "Moskva"])
    );
}

#[actix_web::test]
async fn autocomplete_requires_a_prefix() {
    let resp = call!(test::TestRequest::post().uri("/autocomplete?string="));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn autocomplete_is_post_only() {
    let resp = call!(test::TestRequest::get().uri("/autocomplete?string=Mos"));
    assert_ne!(resp.status(), StatusCode::OK);
}
