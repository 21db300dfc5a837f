use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use tower::ServiceExt;

use crate::shell::http::{STATIC_INDEX, router};
use crate::tests::fixtures::app_state::make_test_state;

const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

#[fixture]
fn app() -> Router {
    router(make_test_state(), STATIC_DIR)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn post(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Request::post(uri).body(Body::empty()).unwrap()).await
}

async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let (status, json) = send(app, Request::get("/activities").body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(json[activity]["participants"].clone()).unwrap()
}

#[rstest]
#[tokio::test]
async fn lists_are_identical_without_mutation(app: Router) {
    let (_, first) = send(&app, Request::get("/activities").body(Body::empty()).unwrap()).await;
    let (_, second) = send(&app, Request::get("/activities").body(Body::empty()).unwrap()).await;
    assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn sign_up_shows_the_participant_in_the_listing(app: Router) {
    let email = "newstudent@mergington.edu";
    let (status, json) = post(
        &app,
        &format!("/activities/Basketball%20Team/signup?email={email}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains(email));
    assert!(participants(&app, "Basketball Team").await.contains(&email.to_string()));
}

#[rstest]
#[tokio::test]
async fn duplicate_sign_up_is_rejected_after_the_first(app: Router) {
    let uri = "/activities/Drama%20Club/signup?email=duplicate@mergington.edu";

    let (first, _) = post(&app, uri).await;
    let (second, json) = post(&app, uri).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"], "duplicate@mergington.edu is already signed up");
    assert_eq!(
        participants(&app, "Drama Club").await,
        vec!["duplicate@mergington.edu"]
    );
}

#[rstest]
#[tokio::test]
async fn sign_up_then_unregister_restores_the_participants(app: Router) {
    let before = participants(&app, "Tennis Club").await;

    let (status, _) = post(
        &app,
        "/activities/Tennis%20Club/signup?email=unregister@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = post(
        &app,
        "/activities/Tennis%20Club/unregister?email=unregister@mergington.edu",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Unregistered unregister@mergington.edu from Tennis Club"
    );

    assert_eq!(participants(&app, "Tennis Club").await, before);
}

#[rstest]
#[tokio::test]
async fn unregister_response_names_the_participant(app: Router) {
    let email = "unregister2@mergington.edu";
    post(&app, &format!("/activities/Robotics%20Club/signup?email={email}")).await;

    let (status, json) = post(
        &app,
        &format!("/activities/Robotics%20Club/unregister?email={email}"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["message"].as_str().unwrap().contains(email));
}

#[rstest]
#[case("NonExistent%20Activity", "signup")]
#[case("NonExistent%20Activity", "unregister")]
#[case("%FF", "signup")]
#[case("%FF", "unregister")]
#[tokio::test]
async fn unknown_activities_answer_404(app: Router, #[case] activity: &str, #[case] action: &str) {
    let (status, json) = post(
        &app,
        &format!("/activities/{activity}/{action}?email=test@mergington.edu"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Activity not found");
}

#[rstest]
#[tokio::test]
async fn unregister_without_sign_up_answers_400(app: Router) {
    let (status, json) = post(
        &app,
        "/activities/Art%20Studio/unregister?email=notregistered@mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("not signed up"));
}

#[rstest]
#[tokio::test]
async fn root_redirects_to_the_static_index(app: Router) {
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], STATIC_INDEX);
}

#[rstest]
#[tokio::test]
async fn static_index_is_served(app: Router) {
    let response = app
        .oneshot(Request::get(STATIC_INDEX).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&bytes).contains("Mergington High School"));
}

#[rstest]
#[tokio::test]
async fn graphql_endpoint_sees_http_sign_ups(app: Router) {
    post(&app, "/activities/Math%20Olympiad/signup?email=gql@mergington.edu").await;

    let (status, json) = send(
        &app,
        Request::post("/gql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"query":"{ activities { name participants } }"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let math = json["data"]["activities"]
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["name"] == "Math Olympiad")
        .unwrap()
        .clone();
    assert_eq!(math["participants"], serde_json::json!(["gql@mergington.edu"]));
}
