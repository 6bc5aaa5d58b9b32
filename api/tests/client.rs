use api::{ApiClient, ApiError, IngredientDto, ListIngredientsQuery};
use serde_json::json;
use uuid::Uuid;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri()).expect("mock server uri parses")
}

#[tokio::test]
async fn lists_ingredients_with_paging_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredients"))
        .and(query_param("page", "0"))
        .and(query_param("size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Ingredient 1" },
            { "name": "Ingredient 2" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .list_ingredients(&ListIngredientsQuery::default())
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(
        response.data_or_default(),
        vec![
            IngredientDto::named("Ingredient 1"),
            IngredientDto::named("Ingredient 2")
        ]
    );
}

#[tokio::test]
async fn forwards_search_term() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredients"))
        .and(query_param("search", "flour"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": "Flour" }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let query = ListIngredientsQuery {
        search: Some("flour".into()),
        ..ListIngredientsQuery::default()
    };
    let items = client.list_ingredients(&query).await.unwrap().data_or_default();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "Flour");
}

#[tokio::test]
async fn empty_body_yields_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredients"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .list_ingredients(&ListIngredientsQuery::default())
        .await
        .unwrap();

    assert!(response.data.is_none());
    assert!(response.data_or_default().is_empty());
}

#[tokio::test]
async fn null_body_yields_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredients"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .list_ingredients(&ListIngredientsQuery::default())
        .await
        .unwrap();

    assert!(response.data.is_none());
}

#[tokio::test]
async fn not_found_carries_backend_message() {
    let server = MockServer::start().await;
    let id = Uuid::nil();

    Mock::given(method("GET"))
        .and(path(format!("/ingredients/{id}")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": format!("Ingredient not found for id: {id}")
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.get_ingredient(id).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    match err {
        ApiError::Status { message, .. } => assert!(message.contains("Ingredient not found")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn server_error_without_body_uses_reason_phrase() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredients"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .list_ingredients(&ListIngredientsQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err.to_string(),
        "server responded with 500: Internal Server Error"
    );
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ingredients"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"oops\""))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .list_ingredients(&ListIngredientsQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn reads_variants_and_custom_units() {
    let server = MockServer::start().await;
    let id = Uuid::nil();

    Mock::given(method("GET"))
        .and(path(format!("/ingredients/{id}/variants")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "description": "Whole", "defaultVariant": true }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/ingredients/{id}/custom-units")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": "Glass", "conversionUnit": "MILLILITER" }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let variants = client
        .list_ingredient_variants(id)
        .await
        .unwrap()
        .data_or_default();
    let units = client.list_custom_units(id).await.unwrap().data_or_default();

    assert_eq!(variants[0].description, "Whole");
    assert_eq!(units[0].name, "Glass");
}
