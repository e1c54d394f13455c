//! Route table.
//!
//! `ENDPOINTS` is the single source for both the router and `GET /rutas`.

use axum::{
    routing::{delete, get, post, put, MethodRouter},
    Router,
};

use crate::app::dto::RouteEntry;

pub mod items;
pub mod system;
pub mod usuarios;

/// One method on one path.
pub struct Endpoint {
    pub path: &'static str,
    pub method: &'static str,
    handler: fn() -> MethodRouter,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint { path: "/usuarios", method: "GET", handler: usuarios_get },
    Endpoint { path: "/metodos", method: "GET", handler: metodos_get },
    Endpoint { path: "/items", method: "GET", handler: items_get },
    Endpoint { path: "/items", method: "POST", handler: items_post },
    Endpoint { path: "/items/:item_id", method: "PUT", handler: item_put },
    Endpoint { path: "/items/:item_id", method: "DELETE", handler: item_delete },
    Endpoint { path: "/rutas", method: "GET", handler: rutas_get },
];

fn usuarios_get() -> MethodRouter {
    get(usuarios::list_users)
}

fn metodos_get() -> MethodRouter {
    get(system::methods_info)
}

fn items_get() -> MethodRouter {
    get(items::list_items)
}

fn items_post() -> MethodRouter {
    post(items::create_item)
}

fn item_put() -> MethodRouter {
    put(items::update_item)
}

fn item_delete() -> MethodRouter {
    delete(items::delete_item)
}

fn rutas_get() -> MethodRouter {
    get(system::list_routes)
}

/// Router for every endpoint in [`ENDPOINTS`].
pub fn router() -> Router {
    ENDPOINTS
        .iter()
        .fold(Router::new(), |router, e| router.route(e.path, (e.handler)()))
}

/// [`ENDPOINTS`] grouped by path, in declaration order.
pub fn route_table() -> Vec<RouteEntry> {
    let mut table: Vec<RouteEntry> = Vec::new();
    for e in ENDPOINTS {
        match table.iter_mut().find(|r| r.ruta == e.path) {
            Some(entry) => entry.metodos.push(e.method),
            None => table.push(RouteEntry {
                ruta: e.path,
                metodos: vec![e.method],
            }),
        }
    }
    table
}
