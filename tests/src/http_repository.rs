#![cfg(test)]
use std::collections::HashMap;
use std::sync::Arc;

use pkgview_common::error::RepoError;
use pkgview_common::models::route::RouteParams;
use pkgview_common::models::view::Load;
use pkgview_core::adapters::http::HttpRepository;
use pkgview_core::controller::PackageController;
use pkgview_core::ports::PackageRepository;
use pkgview_core::router::RouteTable;

use crate::support::server::{Reply, TestServer};

async fn catalog_server() -> TestServer {
    let routes = HashMap::from([
        (
            "/pkg/api/api.json".to_string(),
            Reply::json(r#"[{"id":"Foo"},{"id":"Biobase"}]"#),
        ),
        (
            "/pkg/api/Foo.json".to_string(),
            Reply::json(r#"{"id":"Foo","versions":["2.1","2.0"]}"#),
        ),
        (
            "/pkg/api/Foo/2.1.json".to_string(),
            Reply::json(r#"[{"name":"libx","ok":true},{"name":"liby","ok":false}]"#),
        ),
        ("/pkg/api/Broken.json".to_string(), Reply::json("{oops")),
        (
            "/pkg/api/42.json".to_string(),
            Reply::json(r#"{"id":42,"title":"numbered"}"#),
        ),
        (
            "/pkg/api/My%20Pkg.json".to_string(),
            Reply::json(r#"{"id":"My Pkg"}"#),
        ),
    ]);
    TestServer::start(routes).await
}

#[tokio::test]
async fn fetches_each_endpoint() {
    let server = catalog_server().await;
    let repo = HttpRepository::new(&server.base_url()).unwrap();

    let list = repo.query_packages().await.unwrap();
    assert_eq!(list.len(), 2);

    let pkg = repo.get_package(Some("Foo")).await.unwrap();
    assert_eq!(pkg.id, "Foo");
    assert_eq!(pkg.fields.get("versions"), Some(&serde_json::json!(["2.1", "2.0"])));

    let deps = repo.query_version_deps(Some("Foo"), Some("2.1")).await.unwrap();
    assert_eq!(deps.len(), 2);
    assert!(deps[0].ok);
    assert!(!deps[1].ok);
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = catalog_server().await;
    let repo = HttpRepository::new(&server.base_url()).unwrap();

    let err = repo.get_package(Some("Missing")).await.unwrap_err();
    match err {
        RepoError::Status { status, url } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/pkg/api/Missing.json"), "url: {url}");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let server = catalog_server().await;
    let repo = HttpRepository::new(&server.base_url()).unwrap();

    let err = repo.get_package(Some("Broken")).await.unwrap_err();
    assert!(matches!(err, RepoError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_request_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let repo = HttpRepository::new(&format!("http://{addr}/")).unwrap();

    let err = repo.query_packages().await.unwrap_err();
    assert!(matches!(err, RepoError::Request { .. }), "got {err:?}");
}

#[tokio::test]
async fn controller_request_shapes_over_http() {
    let server = catalog_server().await;
    let repo = Arc::new(HttpRepository::new(&server.base_url()).unwrap());
    let controller = PackageController::new(repo);

    let view = controller.activate(&RouteParams::new(Some("Foo"), Some("2.1"))).await;
    assert_eq!(
        server.paths(),
        ["/pkg/api/Foo.json", "/pkg/api/Foo/2.1.json", "/pkg/api/api.json"]
    );
    assert!(matches!(view.version.map(|v| v.deps), Some(Load::Loaded(d)) if d.len() == 2));

    let _ = controller.activate(&RouteParams::default()).await;
    assert!(server.paths().contains(&"/pkg/api.json".to_string()));
}

#[tokio::test]
async fn odd_entries_do_not_fail_the_list() {
    let routes = HashMap::from([(
        "/pkg/api/api.json".to_string(),
        Reply::json(r#"[{"id":"Foo"},{"title":"untitled","versions":[]}]"#),
    )]);
    let server = TestServer::start(routes).await;
    let repo = HttpRepository::new(&server.base_url()).unwrap();

    let list = repo.query_packages().await.unwrap();
    let ids: Vec<&str> = list.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["Foo", ""]);
}

#[tokio::test]
async fn numeric_id_loads() {
    let server = catalog_server().await;
    let repo = HttpRepository::new(&server.base_url()).unwrap();

    let pkg = repo.get_package(Some("42")).await.unwrap();
    assert_eq!(pkg.id, "42");
}

#[tokio::test]
async fn encoded_route_is_requested_encoded_once() {
    let server = catalog_server().await;
    let repo = Arc::new(HttpRepository::new(&server.base_url()).unwrap());
    let controller = PackageController::new(repo);

    let nav = RouteTable::package_routes("Biobase").navigate("/pkg/My%20Pkg/");
    assert_eq!(nav.params.pkg_id.as_deref(), Some("My Pkg"));

    let view = controller.activate(&nav.params).await;
    assert!(server.paths().contains(&"/pkg/api/My%20Pkg.json".to_string()));
    assert!(matches!(view.pkg, Load::Loaded(ref p) if p.id == "My Pkg"));
}
