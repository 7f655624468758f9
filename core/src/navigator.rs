//! Navigation with stale-result suppression.
//!
//! Every call to [`Navigator::begin`] hands out a ticket with a higher number
//! than any before it. Only the view loaded for the most recent ticket may be
//! committed, so a slow response from an earlier navigation can never replace
//! what a later one put on screen.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use pkgview_common::models::view::PackageView;
use tracing::debug;

use crate::controller::PackageController;
use crate::router::{Navigation, RouteTable};

/// One in-flight navigation.
#[derive(Clone, Debug)]
pub struct Ticket {
    id: u64,
    pub navigation: Navigation,
}

impl Ticket {
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// What is currently on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Screen {
    pub navigation: Navigation,
    pub view: PackageView,
}

pub struct Navigator {
    routes: RouteTable,
    controller: PackageController,
    latest: AtomicU64,
    current: Mutex<Option<Screen>>,
}

impl Navigator {
    pub fn new(routes: RouteTable, controller: PackageController) -> Self {
        Self {
            routes,
            controller,
            latest: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Routes `path` and claims a new ticket for it.
    pub fn begin(&self, path: &str) -> Ticket {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let navigation = self.routes.navigate(path);
        if navigation.redirected {
            debug!("{path} redirected to {}", navigation.path);
        }
        Ticket { id, navigation }
    }

    pub async fn load(&self, ticket: &Ticket) -> PackageView {
        self.controller.activate(&ticket.navigation.params).await
    }

    /// Puts `view` on screen if `ticket` is still the newest navigation.
    pub fn commit(&self, ticket: Ticket, view: PackageView) -> Option<Screen> {
        let mut current = self.lock_current();
        if ticket.id != self.latest.load(Ordering::SeqCst) {
            debug!("dropping stale view for ticket {}", ticket.id);
            return None;
        }
        let screen = Screen {
            navigation: ticket.navigation,
            view,
        };
        *current = Some(screen.clone());
        Some(screen)
    }

    /// Navigates to `path` and returns the screen, or `None` when a newer
    /// navigation started while this one was loading.
    pub async fn open(&self, path: &str) -> Option<Screen> {
        let ticket = self.begin(path);
        let view = self.load(&ticket).await;
        self.commit(ticket, view)
    }

    pub fn current(&self) -> Option<Screen> {
        self.lock_current().clone()
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<Screen>> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
