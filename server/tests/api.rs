use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use todo_server::app;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(empty_request("GET", "/todos")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201_with_default_completed() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"title":"Buy milk"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo = body_json(resp).await;
    assert_eq!(todo["title"], "Buy milk");
    assert_eq!(todo["completed"], false);
    assert!(todo["id"].is_string());
    assert!(todo.get("order").is_none());
}

#[tokio::test]
async fn create_todo_missing_title_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"completed":true}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "required_property_missing");
    assert_eq!(body["property"], "title");
}

#[tokio::test]
async fn create_todo_wrong_type_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"title":123}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "property_type_mismatch");
    assert_eq!(
        body["message"],
        "property 'title' must be of type string, got number value '123'"
    );
}

#[tokio::test]
async fn create_todo_extraneous_property_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"title":"x","bogus":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "extraneous_property");
    assert_eq!(body["property"], "bogus");
}

#[tokio::test]
async fn create_todo_malformed_json_is_rejected() {
    let resp = app()
        .oneshot(json_request("POST", "/todos", r#"{"title":"#))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

// --- get / update / delete on unknown ids ---

#[tokio::test]
async fn get_todo_not_found() {
    let resp = app().oneshot(empty_request("GET", "/todos/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn update_todo_not_found() {
    let resp = app()
        .oneshot(json_request("PATCH", "/todos/missing", r#"{"title":"Nope"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_todo_not_found() {
    let resp = app().oneshot(empty_request("DELETE", "/todos/missing")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"title":"Walk dog","order":2}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    // second todo sorts ahead by order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos", r#"{"title":"Feed cat","order":1}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // list
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos = body_json(resp).await;
    let titles: Vec<&str> = todos
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Feed cat", "Walk dog"]);

    // get
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, created);

    // patch: only completed
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", &format!("/todos/{id}"), r#"{"completed":true}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["title"], "Walk dog"); // unchanged
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["order"], 2.0);

    // put behaves like patch
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PUT", &format!("/todos/{id}"), r#"{"title":"Walk cat"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = body_json(resp).await;
    assert_eq!(updated["title"], "Walk cat");
    assert_eq!(updated["completed"], true); // unchanged from previous update
    assert_eq!(updated["id"], id.as_str());

    // invalid patch leaves the record alone
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", &format!("/todos/{id}"), r#"{"order":"last"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // get after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // delete all
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", "/todos"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/todos"))
        .await
        .unwrap();
    assert_eq!(body_json(resp).await, json!([]));
}
