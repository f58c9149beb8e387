use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::invoke::Invoker;
use crate::key::SubjectKey;
use crate::lock::MutexIsh;
use crate::mocker::Mocker;

/// Whether a [Registry] answers calls at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// Providers are consulted.
    #[default]
    Active,
    /// Every dispatch passes through unmatched, as if no registry was bound.
    Inert,
}

/// Ordered providers per [SubjectKey], for one test context.
///
/// A registry is meant to be created per test and shared with the mocked
/// subjects through an [Arc]. Providers are tried in the order they were added.
pub struct Registry {
    mockers: MutexIsh<BTreeMap<SubjectKey, Vec<Arc<dyn Invoker>>>>,
    inert: AtomicBool,
}

impl Registry {
    /// An empty, active registry.
    pub fn new() -> Self {
        Self::with_mode(DispatchMode::Active)
    }

    pub fn with_mode(mode: DispatchMode) -> Self {
        Self {
            mockers: MutexIsh::new(BTreeMap::new()),
            inert: AtomicBool::new(mode == DispatchMode::Inert),
        }
    }

    pub fn mode(&self) -> DispatchMode {
        if self.inert.load(Ordering::Acquire) {
            DispatchMode::Inert
        } else {
            DispatchMode::Active
        }
    }

    pub fn set_mode(&self, mode: DispatchMode) {
        self.inert
            .store(mode == DispatchMode::Inert, Ordering::Release);
    }

    /// Append `provider` to the queue for `key`.
    pub fn add_provider(&self, key: SubjectKey, provider: Arc<dyn Invoker>) {
        let position = self.mockers.locked(|mockers| {
            let queue = mockers.entry(key).or_default();
            queue.push(provider);
            queue.len() - 1
        });

        tracing::trace!(
            subject = key.type_name(),
            method = key.method(),
            position,
            "registered mock provider"
        );
    }

    /// Snapshot of the providers for `key`, in registration order.
    ///
    /// The lock is released before returning, so providers are free to call
    /// back into the registry while they run.
    pub fn lookup_providers(&self, key: SubjectKey) -> Vec<Arc<dyn Invoker>> {
        self.mockers
            .locked(|mockers| mockers.get(&key).cloned().unwrap_or_default())
    }

    pub fn provider_count(&self, key: SubjectKey) -> usize {
        self.mockers
            .locked(|mockers| mockers.get(&key).map_or(0, Vec::len))
    }

    /// Register a new typed provider for `method` on subject `S`.
    pub fn mocker<S, A, R>(&self, method: &'static str) -> Mocker<A, R>
    where
        S: ?Sized + 'static,
    {
        Mocker::new(self, SubjectKey::of::<S>(method))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Registry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.mockers.locked(|mockers| {
            let mut map = f.debug_map();
            for (key, providers) in mockers.iter() {
                map.entry(
                    &format_args!("{}::{}", key.type_name(), key.method()),
                    &providers.len(),
                );
            }
            map.finish()
        })
    }
}
