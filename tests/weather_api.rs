use krishibot::weather::{fetch_current, WeatherConfig, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> WeatherConfig {
    WeatherConfig {
        api_key: "w".to_string(),
        base_url: Some(format!("{}/weather", server.uri())),
    }
}

const RAINY_BODY: &str = r#"{
    "main": {
        "temp": 27.4,
        "feels_like": 29.1,
        "temp_min": 25.0,
        "temp_max": 30.2,
        "pressure": 1006,
        "humidity": 83
    },
    "weather": [{"description": "light rain"}],
    "wind": {"speed": 3.6},
    "rain": {"1h": 0.8}
}"#;

const CLEAR_BODY: &str = r#"{
    "main": {
        "temp": 31.0,
        "feels_like": 33.5,
        "temp_min": 29.4,
        "temp_max": 32.1,
        "pressure": 1011,
        "humidity": 42
    },
    "weather": [{"description": "clear sky"}],
    "wind": {"speed": 1.9}
}"#;

#[tokio::test]
async fn fetch_builds_the_india_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Nashik, Maharashtra, India"))
        .and(query_param("appid", "w"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(RAINY_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    let snapshot = fetch_current(&config, "Nashik", "Maharashtra").await.unwrap();

    assert_eq!(snapshot.temperature, 27.4);
    assert_eq!(snapshot.humidity, 83.0);
    assert_eq!(snapshot.description, "light rain");
    assert_eq!(snapshot.rainfall_1h, Some(0.8));
    server.verify().await;
}

#[tokio::test]
async fn empty_state_narrows_the_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("q", "Pune, India"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(CLEAR_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server);
    let snapshot = fetch_current(&config, "Pune", "").await.unwrap();

    assert_eq!(snapshot.rainfall_1h, None);
    assert_eq!(snapshot.wind_speed, 1.9);
    server.verify().await;
}

#[tokio::test]
async fn unknown_city_is_a_dedicated_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(r#"{"cod":"404","message":"city not found"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err = fetch_current(&config, "Nowhere", "Maharashtra").await.unwrap_err();
    match err {
        WeatherError::CityNotFound(query) => {
            assert_eq!(query, "Nowhere, Maharashtra, India");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn bad_credentials_surface_the_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_raw(r#"{"cod":401,"message":"Invalid API key"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err = fetch_current(&config, "Pune", "").await.unwrap_err();
    match err {
        WeatherError::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Invalid API key"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_conditions_are_an_invalid_response() {
    let server = MockServer::start().await;
    let body = r#"{
        "main": {"temp": 20.0, "feels_like": 20.0, "temp_min": 19.0, "temp_max": 21.0, "pressure": 1010, "humidity": 50},
        "weather": [],
        "wind": {"speed": 2.0}
    }"#;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let config = test_config(&server);
    let err = fetch_current(&config, "Pune", "").await.unwrap_err();
    assert!(matches!(err, WeatherError::InvalidResponse(_)));
}
