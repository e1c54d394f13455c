use std::sync::Arc;

use catalogo_auth::StaticTokenValidator;
use catalogo_core::{User, UserId};
use catalogo_infra::{CatalogStore, InMemoryCatalogStore};
use reqwest::StatusCode;
use serde_json::{json, Value};

const TOKEN: &str = "token-secreto";

struct TestServer {
    base_url: String,
    store: Arc<InMemoryCatalogStore>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        Self::spawn_with(InMemoryCatalogStore::new()).await
    }

    async fn spawn_with(store: InMemoryCatalogStore) -> Self {
        // Same router as prod, in-memory store, ephemeral port.
        let store = Arc::new(store);
        let app = catalogo_api::build_app(store.clone(), Arc::new(StaticTokenValidator::new(TOKEN)));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, store, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn item_count(&self) -> usize {
        self.store.list_items().await.unwrap().len()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create(client: &reqwest::Client, srv: &TestServer, nombre: &str) -> Value {
    let res = client
        .post(srv.url("/items"))
        .bearer_auth(TOKEN)
        .json(&json!({ "nombre": nombre }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn requests_without_valid_token_are_rejected_without_side_effects() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let attempts = [
        client.get(srv.url("/usuarios")),
        client.get(srv.url("/metodos")).bearer_auth("wrong"),
        client.get(srv.url("/items")).header("Authorization", "Basic dG9rZW4="),
        client.post(srv.url("/items")).json(&json!({ "nombre": "Widget" })),
        client
            .put(srv.url("/items/1"))
            .bearer_auth("token-secreto-no")
            .json(&json!({ "nombre": "X" })),
        client.delete(srv.url("/items/1")).header("Authorization", TOKEN),
        client.get(srv.url("/rutas")).header("Authorization", "bearer token-secreto"),
    ];

    for req in attempts {
        let res = req.send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!({ "error": "No autorizado" }));
    }

    assert_eq!(srv.item_count().await, 0);
}

#[tokio::test]
async fn item_lifecycle_create_list_update_delete() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    // Create
    let created = create(&client, &srv, "Widget").await;
    assert_eq!(created["mensaje"], "Item creado");
    assert_eq!(created["nombre"], "Widget");
    let id = created["id"].as_i64().expect("id must be a number");

    // List
    let res = client.get(srv.url("/items")).bearer_auth(TOKEN).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let items: Value = res.json().await.unwrap();
    assert_eq!(items, json!([{ "id": id, "nombre": "Widget" }]));

    // Update
    let res = client
        .put(srv.url(&format!("/items/{id}")))
        .bearer_auth(TOKEN)
        .json(&json!({ "nombre": "Gadget" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "mensaje": "Item actualizado", "id": id, "nombre": "Gadget" }));

    // Delete, then delete again
    let res = client
        .delete(srv.url(&format!("/items/{id}")))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "mensaje": "Item eliminado", "id": id }));

    let res = client
        .delete(srv.url(&format!("/items/{id}")))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Item no encontrado" }));

    assert_eq!(srv.item_count().await, 0);
}

#[tokio::test]
async fn create_without_nombre_is_rejected_and_writes_nothing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();
    create(&client, &srv, "existing").await;
    let before = srv.item_count().await;

    for body in [json!({}), json!({ "nombre": "" }), json!({ "nombre": null }), json!({ "nombre": 7 })] {
        let res = client
            .post(srv.url("/items"))
            .bearer_auth(TOKEN)
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{body}");
        let err: Value = res.json().await.unwrap();
        assert_eq!(err, json!({ "error": "Dato faltante 'nombre'" }));
    }

    // Not JSON at all.
    let res = client
        .post(srv.url("/items"))
        .bearer_auth(TOKEN)
        .body("nombre=Widget")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    assert_eq!(srv.item_count().await, before);
}

#[tokio::test]
async fn update_validates_and_reports_missing_items() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(srv.url("/items/999999"))
        .bearer_auth(TOKEN)
        .json(&json!({ "nombre": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Item no encontrado" }));

    let created = create(&client, &srv, "keep").await;
    let id = created["id"].as_i64().unwrap();
    let res = client
        .put(srv.url(&format!("/items/{id}")))
        .bearer_auth(TOKEN)
        .json(&json!({ "nombre": "" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let items: Value = client
        .get(srv.url("/items"))
        .bearer_auth(TOKEN)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items[0]["nombre"], "keep");
}

#[tokio::test]
async fn usuarios_lists_rows_in_order() {
    let users = vec![
        User {
            id: UserId::new(1),
            nombre: Some("Ana".into()),
            correo: Some("ana@example.com".into()),
        },
        User {
            id: UserId::new(2),
            nombre: Some("Luis".into()),
            correo: None,
        },
    ];
    let srv = TestServer::spawn_with(InMemoryCatalogStore::with_users(users)).await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/usuarios")).bearer_auth(TOKEN).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            { "id": 1, "nombre": "Ana", "correo": "ana@example.com" },
            { "id": 2, "nombre": "Luis", "correo": null },
        ])
    );
}

#[tokio::test]
async fn empty_tables_list_as_empty_arrays() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for path in ["/usuarios", "/items"] {
        let res = client.get(srv.url(path)).bearer_auth(TOKEN).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body, json!([]), "{path}");
    }
}

#[tokio::test]
async fn metodos_returns_fixed_description() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/metodos")).bearer_auth(TOKEN).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "GET": "Obtener datos. No necesita token.",
            "POST": "Crear nuevo recurso. Requiere token Bearer.",
            "PUT": "Actualizar recurso. Requiere token Bearer.",
            "DELETE": "Eliminar recurso. Requiere token Bearer.",
        })
    );
}

#[tokio::test]
async fn rutas_lists_every_route_and_each_is_served() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/rutas")).bearer_auth(TOKEN).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let routes: Vec<Value> = res.json().await.unwrap();

    let paths: Vec<&str> = routes.iter().map(|r| r["ruta"].as_str().unwrap()).collect();
    for expected in ["/usuarios", "/metodos", "/items", "/items/:item_id", "/rutas"] {
        assert!(paths.contains(&expected), "missing {expected}");
    }

    for route in &routes {
        let methods = route["metodos"].as_array().unwrap();
        assert!(!methods.is_empty());

        let path = route["ruta"].as_str().unwrap().replace(":item_id", "424242");
        for m in methods {
            let method = reqwest::Method::from_bytes(m.as_str().unwrap().as_bytes()).unwrap();
            let res = client
                .request(method.clone(), srv.url(&path))
                .bearer_auth(TOKEN)
                .json(&json!({ "nombre": "probe" }))
                .send()
                .await
                .unwrap();
            // Served routes answer with a JSON body; the fallback says "Recurso no encontrado".
            assert_ne!(res.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
            let body: Value = res.json().await.unwrap();
            assert_ne!(body["error"], "Recurso no encontrado", "{method} {path}");
        }
    }
}
