#![cfg(test)]
use std::collections::HashMap;

use pkgview_core::probe::ArchiveProbe;

use crate::support::server::{Reply, TestServer};

async fn archive_server() -> TestServer {
    let routes = HashMap::from([
        ("/Foo_2.1.tar.gz".to_string(), Reply::status(200)),
        (
            "/Foo_2.0.tar.gz".to_string(),
            Reply::redirect("https://mirror.example.org/Foo_2.0.tar.gz"),
        ),
    ]);
    TestServer::start(routes).await
}

#[tokio::test]
async fn head_found_and_redirect_count_as_present() {
    let server = archive_server().await;
    let probe = ArchiveProbe::new(&server.base_url()).unwrap();

    assert!(probe.exists(&probe.tarball_url("Foo", "2.1")).await.unwrap());
    assert!(probe.exists(&probe.tarball_url("Foo", "2.0")).await.unwrap());
    assert!(!probe.exists(&probe.tarball_url("Foo", "1.0")).await.unwrap());

    assert!(server.requests().iter().all(|(method, _)| method == "HEAD"));
}

#[tokio::test]
async fn check_all_keeps_input_order() {
    let server = archive_server().await;
    let probe = ArchiveProbe::new(&server.base_url()).unwrap();

    let urls: Vec<String> = ["2.0", "1.0", "2.1"]
        .iter()
        .map(|v| probe.tarball_url("Foo", v))
        .collect();

    let found = probe.check_all(&urls).await;
    assert_eq!(found, vec![urls[0].clone(), urls[2].clone()]);
}
