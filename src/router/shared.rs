//! Router shared between concurrent lookups and occasional registrations.
//!
//! Readers load the current snapshot from an [`ArcSwap`] without locking.
//! Writers are serialized by a mutex: each `add` clones the current router,
//! registers the route on the copy and publishes it, so a lookup always sees
//! either the old or the new route set and never a half-inserted one.

use arc_swap::ArcSwap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

use super::core::{RouteMatch, Router};
use crate::error::RouteError;
use crate::route::Route;

/// A copy-on-write handle around any [`Router`].
pub struct SharedRouter<R> {
    snapshot: ArcSwap<R>,
    writer: Mutex<()>,
}

impl<R: Router + Clone> SharedRouter<R> {
    #[must_use]
    pub fn new(router: R) -> Self {
        Self {
            snapshot: ArcSwap::from_pointee(router),
            writer: Mutex::new(()),
        }
    }

    /// Register a route and publish the updated router.
    ///
    /// A failed registration publishes nothing.
    ///
    /// # Errors
    ///
    /// Propagates the inner router's [`RouteError`].
    pub fn add(&self, route: Route) -> Result<(), RouteError> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next = R::clone(&self.snapshot.load());
        next.add(route)?;
        self.snapshot.store(Arc::new(next));
        debug!("Published updated router snapshot");
        Ok(())
    }

    #[must_use]
    pub fn route(&self, path: &str) -> Option<Arc<Route>> {
        self.snapshot.load().route(path)
    }

    #[must_use]
    pub fn find(&self, path: &str) -> Option<RouteMatch> {
        self.snapshot.load().find(path)
    }

    /// The router as currently published.
    #[must_use]
    pub fn snapshot(&self) -> Arc<R> {
        self.snapshot.load_full()
    }
}

impl<R: Router + Clone + Default> Default for SharedRouter<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}
