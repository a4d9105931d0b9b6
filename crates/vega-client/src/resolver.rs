//! The identity-enrichment side effect.
//!
//! One `PeerView` per mounted component instance, one `IdentityResolver`
//! shared by all of them. The effect is keyed on the peer's phone number:
//! it fires once per distinct number per view, never blocks the initial
//! render, and drops its result when the view has unmounted or the number
//! changed while the lookup was in flight.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use vega_core::{Peer, ResolvedIdentity};
use vega_directory::DirectoryApi;

struct ViewInner {
    peer: Mutex<Peer>,
    alive: AtomicBool,
    /// Bumped whenever the phone number "prop" changes; an in-flight
    /// lookup captured under an older epoch must not apply.
    epoch: AtomicU64,
    /// Effect key: the last phone number a lookup was issued for. Recorded
    /// before the fetch, so a failed or empty resolution does not re-fire
    /// on the next render.
    attempted_phone: Mutex<Option<String>>,
}

/// A live view over one peer record, standing in for a mounted component.
///
/// Cheap to clone; clones share state. The view publishes merged peer
/// snapshots instead of mutating the record the caller handed in.
#[derive(Clone)]
pub struct PeerView {
    inner: Arc<ViewInner>,
}

impl PeerView {
    pub fn mount(peer: Peer) -> Self {
        PeerView {
            inner: Arc::new(ViewInner {
                peer: Mutex::new(peer),
                alive: AtomicBool::new(true),
                epoch: AtomicU64::new(0),
                attempted_phone: Mutex::new(None),
            }),
        }
    }

    /// Current snapshot of the peer record.
    pub fn peer(&self) -> Peer {
        self.inner.peer.lock().clone()
    }

    pub fn phone_number(&self) -> Option<String> {
        self.inner.peer.lock().phone_number.clone()
    }

    pub fn is_alive(&self) -> bool {
        self.inner.alive.load(Ordering::Acquire)
    }

    /// Mark the view disposed. In-flight lookups become no-ops.
    pub fn unmount(&self) {
        self.inner.alive.store(false, Ordering::Release);
    }

    /// Replace the peer record (new props from the store). Bumps the epoch
    /// and re-arms the effect when the phone number changed.
    pub fn replace_peer(&self, peer: Peer) {
        let mut current = self.inner.peer.lock();
        if current.phone_number != peer.phone_number {
            self.inner.epoch.fetch_add(1, Ordering::AcqRel);
            *self.inner.attempted_phone.lock() = None;
        }
        *current = peer;
    }

    fn epoch(&self) -> u64 {
        self.inner.epoch.load(Ordering::Acquire)
    }

    fn already_attempted(&self, phone: &str) -> bool {
        self.inner.attempted_phone.lock().as_deref() == Some(phone)
    }

    fn record_attempt(&self, phone: &str) {
        *self.inner.attempted_phone.lock() = Some(phone.to_string());
    }

    /// Apply a resolved identity, unless the view is gone or the lookup is
    /// stale. Returns whether the merge was published.
    fn apply_identity(&self, phone: &str, epoch: u64, identity: &ResolvedIdentity) -> bool {
        if !self.is_alive() {
            tracing::debug!("dropping identity merge for unmounted view");
            return false;
        }
        if self.epoch() != epoch {
            tracing::debug!("dropping stale identity merge (phone number changed)");
            return false;
        }
        let mut peer = self.inner.peer.lock();
        if peer.phone_number.as_deref() != Some(phone) {
            return false;
        }
        *peer = peer.with_identity(identity);
        true
    }
}

/// Shared enrichment capability over any [`DirectoryApi`].
pub struct IdentityResolver<D: DirectoryApi> {
    directory: Arc<D>,
}

impl<D: DirectoryApi> Clone for IdentityResolver<D> {
    fn clone(&self) -> Self {
        IdentityResolver {
            directory: self.directory.clone(),
        }
    }
}

impl<D: DirectoryApi> IdentityResolver<D> {
    pub fn new(directory: Arc<D>) -> Self {
        IdentityResolver { directory }
    }

    pub fn directory(&self) -> &Arc<D> {
        &self.directory
    }

    /// The effect body. Runs at most one lookup per distinct phone number
    /// per view, whether or not it resolves; a peer without a phone number
    /// never hits the directory. A new number re-arms the effect.
    pub async fn enrich(&self, view: &PeerView) {
        let Some(phone) = view.phone_number() else {
            return;
        };
        if view.already_attempted(&phone) {
            return;
        }
        let epoch = view.epoch();
        view.record_attempt(&phone);

        let Some(identity) = self.directory.resolve_identity(&phone).await else {
            return;
        };

        view.apply_identity(&phone, epoch, &identity);
    }

    /// Fire-and-forget variant: the lookup runs on the runtime while the
    /// caller proceeds to render the unresolved record.
    pub fn spawn_enrich(&self, view: &PeerView) -> tokio::task::JoinHandle<()> {
        let resolver = self.clone();
        let view = view.clone();
        tokio::spawn(async move {
            resolver.enrich(&view).await;
        })
    }
}
