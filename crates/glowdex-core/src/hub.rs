//! Explicit catalog state container.
//!
//! The earlier generation of this system held the merged catalog in
//! module-level singleton controllers with ad-hoc `subscribers`/`data`
//! fields imported wherever they were needed. Here that state is an owned
//! value constructed by the caller and passed down explicitly, with a
//! narrow subscribe/notify surface.

use crate::RawListing;

type Subscriber = Box<dyn Fn(&[RawListing]) + Send + Sync>;

/// Owns the latest merged batch of listings and the parties interested
/// in catalog refreshes.
///
/// The hub carries no resolution state: buckets and projections are
/// recomputed from the snapshot on every read, so swapping the snapshot
/// is the only mutation.
#[derive(Default)]
pub struct CatalogHub {
    listings: Vec<RawListing>,
    subscribers: Vec<Subscriber>,
}

impl CatalogHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked with the new snapshot after every
    /// [`replace`](Self::replace).
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(&[RawListing]) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Swap in a freshly merged batch and notify every subscriber.
    pub fn replace(&mut self, batch: Vec<RawListing>) {
        self.listings = batch;
        for subscriber in &self.subscribers {
            subscriber(&self.listings);
        }
    }

    /// Current snapshot, read-only.
    #[must_use]
    pub fn listings(&self) -> &[RawListing] {
        &self.listings
    }
}

impl std::fmt::Debug for CatalogHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogHub")
            .field("listings", &self.listings.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn listing(name: &str) -> RawListing {
        RawListing {
            name: name.to_string(),
            ..RawListing::default()
        }
    }

    #[test]
    fn starts_empty() {
        let hub = CatalogHub::new();
        assert!(hub.listings().is_empty());
    }

    #[test]
    fn replace_swaps_the_snapshot() {
        let mut hub = CatalogHub::new();
        hub.replace(vec![listing("a"), listing("b")]);
        assert_eq!(hub.listings().len(), 2);
        hub.replace(vec![listing("c")]);
        assert_eq!(hub.listings().len(), 1);
        assert_eq!(hub.listings()[0].name, "c");
    }

    #[test]
    fn subscribers_see_every_refresh() {
        let seen = Arc::new(AtomicUsize::new(0));
        let seen_in_callback = Arc::clone(&seen);

        let mut hub = CatalogHub::new();
        hub.subscribe(move |snapshot| {
            seen_in_callback.store(snapshot.len(), Ordering::SeqCst);
        });

        hub.replace(vec![listing("a"), listing("b"), listing("c")]);
        assert_eq!(seen.load(Ordering::SeqCst), 3);

        hub.replace(vec![listing("d")]);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn multiple_subscribers_are_all_notified() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut hub = CatalogHub::new();
        for _ in 0..3 {
            let count = Arc::clone(&count);
            hub.subscribe(move |_| {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        hub.replace(vec![listing("a")]);
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn subscribing_after_a_refresh_misses_nothing_next_time() {
        let seen = Arc::new(AtomicUsize::new(0));
        let mut hub = CatalogHub::new();
        hub.replace(vec![listing("a")]);

        let seen_in_callback = Arc::clone(&seen);
        hub.subscribe(move |snapshot| {
            seen_in_callback.store(snapshot.len(), Ordering::SeqCst);
        });
        hub.replace(vec![listing("a"), listing("b")]);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
