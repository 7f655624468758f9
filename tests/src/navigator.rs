#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use pkgview_core::controller::PackageController;
use pkgview_core::navigator::Navigator;
use pkgview_core::router::RouteTable;

use crate::support::fake_repo::FakeRepository;

fn navigator(repo: FakeRepository) -> Navigator {
    Navigator::new(
        RouteTable::package_routes("Biobase"),
        PackageController::new(Arc::new(repo)),
    )
}

#[tokio::test]
async fn open_commits_latest_screen() {
    let nav = navigator(FakeRepository::with_packages(&["Foo"]));

    let screen = nav.open("/pkg/Foo/").await.expect("screen");

    assert_eq!(screen.navigation.path, "/pkg/Foo/");
    assert!(!screen.navigation.redirected);
    assert_eq!(nav.current(), Some(screen));
}

#[tokio::test]
async fn stale_ticket_is_rejected() {
    let nav = navigator(FakeRepository::with_packages(&["Foo", "Bar"]));

    let first = nav.begin("/pkg/Foo/");
    let second = nav.begin("/pkg/Bar/");
    assert!(second.id() > first.id());

    let first_view = nav.load(&first).await;
    let second_view = nav.load(&second).await;

    assert!(nav.commit(first, first_view).is_none());
    assert!(nav.commit(second, second_view).is_some());
    let current = nav.current().expect("screen");
    assert_eq!(current.navigation.params.pkg_id.as_deref(), Some("Bar"));
}

#[tokio::test]
async fn slow_response_does_not_overwrite_newer_view() {
    let repo = FakeRepository::with_packages(&["Slow", "Fast"])
        .with_delay("Slow", Duration::from_millis(150));
    let nav = navigator(repo);

    let (slow, fast) = tokio::join!(nav.open("/pkg/Slow/"), nav.open("/pkg/Fast/"));

    assert!(slow.is_none(), "slow navigation should have been superseded");
    assert!(fast.is_some());
    let current = nav.current().expect("screen");
    assert_eq!(current.navigation.params.pkg_id.as_deref(), Some("Fast"));
}

#[tokio::test]
async fn redirect_is_reported() {
    let nav = navigator(FakeRepository::with_packages(&["Biobase"]));

    let screen = nav.open("/somewhere/else").await.expect("screen");

    assert!(screen.navigation.redirected);
    assert_eq!(screen.navigation.path, "/pkg/Biobase/");
}
