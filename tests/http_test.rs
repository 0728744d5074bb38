//! End-to-end tests: the router served on a loopback port, driven with reqwest.

use serde_json::{json, Value};
use shop_records::cart_store;
use shop_records::domain::Product;
use shop_records::framework::{CodecOptions, MemoryStore, StoreError, WriteDiscipline};
use shop_records::http::{self, error::INTERNAL_ERROR_MESSAGE, AppState};
use shop_records::clients::ProductClient;
use shop_records::product_store;
use std::path::Path;
use tempfile::TempDir;

struct TestServer {
    base: String,
    _dir: TempDir,
}

impl TestServer {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

async fn serve(state: AppState, dir: TempDir) -> TestServer {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, http::router(state)).await.unwrap();
    });
    TestServer {
        base: format!("http://{addr}"),
        _dir: dir,
    }
}

fn state_in(dir: &Path, discipline: WriteDiscipline) -> AppState {
    let products_file = dir.join("productos.json");
    std::fs::write(&products_file, "[]").unwrap();

    let (products, product_actor) =
        product_store::open(products_file, CodecOptions::default(), discipline, 16);
    let (carts, cart_actor) =
        cart_store::open(dir.join("carrito.json"), CodecOptions::default(), discipline, 16);
    if let Some(actor) = product_actor {
        tokio::spawn(actor.run());
    }
    if let Some(actor) = cart_actor {
        tokio::spawn(actor.run());
    }
    AppState::new(products, carts)
}

async fn start(discipline: WriteDiscipline) -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path(), discipline);
    serve(state, dir).await
}

#[tokio::test]
async fn health_check() {
    let server = start(WriteDiscipline::Unguarded).await;
    let body = reqwest::get(server.url("/health")).await.unwrap().text().await.unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn product_lifecycle() {
    let server = start(WriteDiscipline::Unguarded).await;
    let client = reqwest::Client::new();

    let created: Value = client
        .post(server.url("/api/products"))
        .json(&json!({
            "title": "Mate",
            "description": "Calabaza",
            "code": "M-1",
            "price": 10,
            "stock": 5,
            "category": "hogar",
            "thumbnails": []
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["status"], true);
    assert_eq!(created["price"], 10.0);

    let fetched: Value = reqwest::get(server.url(&format!("/api/products/{id}")))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, created);

    let updated: Value = client
        .put(server.url(&format!("/api/products/{id}")))
        .json(&json!({ "price": 20 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(updated["price"], 20.0);
    assert_eq!(updated["title"], "Mate");

    // zero is not truthy, so the price stays
    let kept: Value = client
        .put(server.url(&format!("/api/products/{id}")))
        .json(&json!({ "price": 0, "stock": 0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(kept["price"], 20.0);
    assert_eq!(kept["stock"], 5);

    let deleted = client
        .delete(server.url(&format!("/api/products/{id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(deleted.status(), 200);

    let missing = reqwest::get(server.url(&format!("/api/products/{id}"))).await.unwrap();
    assert_eq!(missing.status(), 404);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["error"], "Producto no encontrado");
}

#[tokio::test]
async fn list_honours_positive_limits_only() {
    let server = start(WriteDiscipline::Serialized).await;
    let client = reqwest::Client::new();
    for title in ["a", "b", "c"] {
        client
            .post(server.url("/api/products"))
            .json(&json!({ "title": title }))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    let titles = |products: Vec<Product>| -> Vec<String> {
        products.into_iter().map(|p| p.title).collect()
    };

    let all: Vec<Product> = reqwest::get(server.url("/api/products"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(titles(all), ["a", "b", "c"]);

    let two: Vec<Product> = reqwest::get(server.url("/api/products?limit=2"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(titles(two), ["a", "b"]);

    for ignored in ["0", "-1", "abc"] {
        let listed: Vec<Product> = reqwest::get(server.url(&format!("/api/products?limit={ignored}")))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(listed.len(), 3, "limit={ignored}");
    }
}

#[tokio::test]
async fn unknown_product_update_and_delete_are_404() {
    let server = start(WriteDiscipline::Unguarded).await;
    let client = reqwest::Client::new();

    let update = client
        .put(server.url("/api/products/nope"))
        .json(&json!({ "title": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update.status(), 404);

    let delete = client.delete(server.url("/api/products/nope")).send().await.unwrap();
    assert_eq!(delete.status(), 404);
}

#[tokio::test]
async fn cart_lifecycle() {
    let server = start(WriteDiscipline::Unguarded).await;
    let client = reqwest::Client::new();

    let cart: Value = client
        .post(server.url("/api/carts"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let cart_id = cart["id"].as_str().unwrap().to_string();
    assert_eq!(cart["products"], json!([]));

    for _ in 0..2 {
        client
            .post(server.url(&format!("/api/carts/{cart_id}/product/p1")))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    let items: Value = reqwest::get(server.url(&format!("/api/carts/{cart_id}")))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items, json!([{ "product": "p1", "quantity": 2 }]));

    let missing = reqwest::get(server.url("/api/carts/other")).await.unwrap();
    assert_eq!(missing.status(), 404);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body["error"], "Carrito no encontrado");

    let add_missing = client
        .post(server.url("/api/carts/other/product/p1"))
        .send()
        .await
        .unwrap();
    assert_eq!(add_missing.status(), 404);
}

#[tokio::test]
async fn storage_failures_are_500_with_a_generic_body() {
    let dir = tempfile::tempdir().unwrap();
    let carts = state_in(dir.path(), WriteDiscipline::Unguarded).carts;
    let failing = ProductClient::new(MemoryStore::<Product>::failing(|| StoreError::StoreClosed));
    let server = serve(AppState::new(failing, carts), dir).await;

    let response = reqwest::get(server.url("/api/products")).await.unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn corrupt_cart_file_is_500() {
    let dir = tempfile::tempdir().unwrap();
    let state = state_in(dir.path(), WriteDiscipline::Unguarded);
    std::fs::write(dir.path().join("carrito.json"), "{ broken").unwrap();
    let server = serve(state, dir).await;

    let response = reqwest::get(server.url("/api/carts/c1")).await.unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
}
