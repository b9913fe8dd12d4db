use recipe_explorer::{
    FetchError, HttpRecipeSource, Recipe, RecipeBrowserState, RecipeSource, ViewMode,
};
use std::net::TcpListener;
use std::time::Duration;

/// URL on a local port that nothing listens on
fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/recipes")
}

const CATALOG: &str = r#"
{
    "recipes": [
        {"id": 1, "name": "Soup", "rating": "4.5", "image": "http://x/1.png"},
        {"id": 2, "name": "Salad", "rating": "3.8", "image": "http://x/2.png"}
    ],
    "total": 2,
    "skip": 0,
    "limit": 30
}
"#;

#[tokio::test]
async fn test_fetch_catalog_in_order() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CATALOG)
        .create_async()
        .await;

    let source = HttpRecipeSource::new(&format!("{}/recipes", server.url()), None).unwrap();
    let recipes = source.fetch_catalog().await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].id, 1);
    assert_eq!(recipes[0].name, "Soup");
    assert_eq!(recipes[0].rating, "4.5");
    assert_eq!(recipes[0].image, "http://x/1.png");
    assert_eq!(recipes[1].id, 2);
    assert_eq!(recipes[1].name, "Salad");
}

#[tokio::test]
async fn test_numeric_rating_and_extra_fields() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"
    {
        "recipes": [{
            "id": 1,
            "name": "Classic Margherita Pizza",
            "ingredients": ["Pizza dough", "Tomato sauce", "Fresh mozzarella cheese"],
            "prepTimeMinutes": 20,
            "cuisine": "Italian",
            "tags": ["Pizza", "Italian"],
            "rating": 4.6,
            "reviewCount": 98,
            "image": "https://cdn.dummyjson.com/recipe-images/1.webp"
        }],
        "total": 50,
        "skip": 0,
        "limit": 1
    }
    "#;
    let _m = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let source = HttpRecipeSource::new(&format!("{}/recipes", server.url()), None).unwrap();
    let recipes = source.fetch_catalog().await.unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].rating, "4.6");
    assert_eq!(
        recipes[0].image,
        "https://cdn.dummyjson.com/recipe-images/1.webp"
    );
}

#[tokio::test]
async fn test_negative_id_in_catalog() {
    let mut server = mockito::Server::new_async().await;
    let body = r#"
    {
        "recipes": [
            {"id": 1, "name": "Soup", "rating": "4.5", "image": "http://x/1.png"},
            {"id": -2, "name": "Leftovers", "rating": "3.1", "image": "http://x/2.png"}
        ]
    }
    "#;
    let _m = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let source = HttpRecipeSource::new(&format!("{}/recipes", server.url()), None).unwrap();
    let mut state = RecipeBrowserState::new();
    state.initialize(&source).await;

    let ids: Vec<_> = state.catalog().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, -2]);
}

#[tokio::test]
async fn test_refused_connection_is_request_error() {
    let source = HttpRecipeSource::new(&unreachable_url(), Some(Duration::from_secs(5))).unwrap();
    let result = source.fetch_catalog().await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}

#[tokio::test]
async fn test_initialize_survives_network_failure() {
    let source = HttpRecipeSource::new(&unreachable_url(), Some(Duration::from_secs(5))).unwrap();
    let mut state = RecipeBrowserState::new();

    state.initialize(&source).await;

    assert!(state.catalog().is_empty());
    state.set_view(ViewMode::Saved);
    assert!(state.visible().is_empty());
    let bread = Recipe {
        id: 9,
        name: "Bread".to_string(),
        rating: "5".to_string(),
        image: "http://x/9.png".to_string(),
    };
    assert!(state.save(bread));
    assert_eq!(state.visible().len(), 1);
}

#[tokio::test]
async fn test_non_success_status_is_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes")
        .with_status(503)
        .with_body("unavailable")
        .create_async()
        .await;

    let source = HttpRecipeSource::new(&format!("{}/recipes", server.url()), None).unwrap();
    let result = source.fetch_catalog().await;

    assert!(matches!(result, Err(FetchError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"products": []}"#)
        .create_async()
        .await;

    let source = HttpRecipeSource::new(&format!("{}/recipes", server.url()), None).unwrap();
    let result = source.fetch_catalog().await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_initialize_requests_catalog_once() {
    let mut server = mockito::Server::new_async().await;
    let m = server
        .mock("GET", "/recipes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CATALOG)
        .expect(1)
        .create_async()
        .await;

    let source = HttpRecipeSource::new(
        &format!("{}/recipes", server.url()),
        Some(Duration::from_secs(5)),
    )
    .unwrap();
    let mut state = RecipeBrowserState::new();
    state.initialize(&source).await;
    state.initialize(&source).await;

    m.assert_async().await;
    assert_eq!(state.catalog().len(), 2);
}

#[tokio::test]
async fn test_browse_absorbs_server_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/recipes")
        .with_status(500)
        .create_async()
        .await;

    let state = recipe_explorer::browse(&format!("{}/recipes", server.url()))
        .await
        .unwrap();

    assert!(state.catalog().is_empty());
    assert!(state.is_initialized());
}
