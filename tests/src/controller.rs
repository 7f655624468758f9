#![cfg(test)]
use std::sync::Arc;

use pkgview_common::filter::checkmark;
use pkgview_common::models::dependency::DependencyRecord;
use pkgview_common::models::route::RouteParams;
use pkgview_common::models::view::Load;
use pkgview_core::controller::PackageController;
use pkgview_core::router::RouteTable;

use crate::support::fake_repo::{Call, FakeRepository};

fn params_for(path: &str) -> RouteParams {
    RouteTable::package_routes("Biobase").navigate(path).params
}

#[tokio::test]
async fn package_path_issues_list_and_detail_only() {
    let repo = Arc::new(FakeRepository::with_packages(&["Foo", "Bar"]));
    let controller = PackageController::new(repo.clone());

    let view = controller.activate(&params_for("/pkg/Foo/")).await;

    let mut calls = repo.calls();
    calls.sort_by_key(|c| format!("{c:?}"));
    assert_eq!(calls, vec![Call::Get(Some("Foo".into())), Call::List]);
    assert!(
        view.version.is_none(),
        "no version routed, so no dependency state should be exposed"
    );
    assert_eq!(view.pkg.as_loaded().map(|p| p.id.as_str()), Some("Foo"));
    assert_eq!(view.pkg_list.as_loaded().map(Vec::len), Some(2));
}

#[tokio::test]
async fn version_path_issues_all_three_queries() {
    let repo = Arc::new(
        FakeRepository::with_packages(&["Foo"])
            .with_deps("Foo", "2.1", vec![DependencyRecord::new("libx", true)]),
    );
    let controller = PackageController::new(repo.clone());

    let view = controller.activate(&params_for("/pkg/Foo/2.1/")).await;

    let calls = repo.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.contains(&Call::List));
    assert!(calls.contains(&Call::Get(Some("Foo".into()))));
    assert!(calls.contains(&Call::Deps(Some("Foo".into()), Some("2.1".into()))));

    let version = view.version.expect("version state");
    assert_eq!(version.version, "2.1");
    let deps = version.deps.as_loaded().expect("deps loaded");
    assert_eq!(checkmark(deps[0].ok), "✓");
}

#[tokio::test]
async fn list_path_requests_detail_without_id() {
    let repo = Arc::new(FakeRepository::with_packages(&["Foo"]));
    let controller = PackageController::new(repo.clone());

    let view = controller.activate(&params_for("/pkg/")).await;

    assert!(repo.calls().contains(&Call::Get(None)));
    assert!(view.pkg.is_failed());
    assert!(!view.pkg_list.is_failed());
}

#[tokio::test]
async fn failures_stay_with_their_query() {
    let repo = Arc::new(FakeRepository::with_packages(&["Foo"]).failing_list());
    let controller = PackageController::new(repo.clone());

    let view = controller.activate(&RouteParams::new(Some("Foo"), Some("9.9"))).await;

    match &view.pkg_list {
        Load::Failed(reason) => assert!(reason.contains("500"), "reason: {reason}"),
        other => panic!("expected failed list, got {other:?}"),
    }
    assert!(view.pkg.as_loaded().is_some());
    assert!(view.version.as_ref().is_some_and(|v| v.deps.is_failed()));
}

#[tokio::test]
async fn unmatched_path_loads_default_package() {
    let repo = Arc::new(FakeRepository::with_packages(&["Biobase"]));
    let controller = PackageController::new(repo.clone());

    let view = controller.activate(&params_for("/not/a/route")).await;

    assert!(repo.calls().contains(&Call::Get(Some("Biobase".into()))));
    assert_eq!(view.pkg.as_loaded().map(|p| p.id.as_str()), Some("Biobase"));
}
