use std::sync::Arc;

use crate::envelope::Envelope;
use crate::error::MockError;
use crate::invoke::{Invoker, Strategy};
use crate::lock::RwLockIsh;

pub(crate) type HandleFn = dyn Fn(&Envelope) -> Option<Envelope> + Send + Sync;
pub(crate) type WhenFn = dyn Fn(&Envelope) -> bool + Send + Sync;
pub(crate) type ReturnFn = dyn Fn() -> Envelope + Send + Sync;

/// A reconfigurable closure slot.
///
/// Readers clone the `Arc` out, so the lock is never held while user code runs.
struct Slot<F: ?Sized>(RwLockIsh<Option<Arc<F>>>);

impl<F: ?Sized> Slot<F> {
    fn empty() -> Self {
        Self(RwLockIsh::new(None))
    }

    fn set(&self, f: Arc<F>) {
        self.0.write(|slot| *slot = Some(f));
    }

    fn get(&self) -> Option<Arc<F>> {
        self.0.read(|slot| slot.clone())
    }

    fn is_set(&self) -> bool {
        self.0.read(|slot| slot.is_some())
    }
}

/// The erased state behind a [Mocker](crate::Mocker).
///
/// Every closure stored here already speaks [Envelope]: the typed facade wraps
/// user closures with the downcasts for their exact signature.
pub(crate) struct Provider {
    handle: Slot<HandleFn>,
    when: Slot<WhenFn>,
    returns: Slot<ReturnFn>,
}

impl Provider {
    pub fn new() -> Self {
        Self {
            handle: Slot::empty(),
            when: Slot::empty(),
            returns: Slot::empty(),
        }
    }

    pub fn set_handle(&self, handle: Arc<HandleFn>) {
        self.handle.set(handle);
    }

    pub fn set_when(&self, when: Arc<WhenFn>) {
        self.when.set(when);
    }

    pub fn set_returns(&self, returns: Arc<ReturnFn>) {
        self.returns.set(returns);
    }
}

impl Invoker for Provider {
    fn strategy(&self) -> Strategy {
        if self.handle.is_set() {
            Strategy::Handle
        } else {
            Strategy::WhenReturn
        }
    }

    fn try_when(&self, args: &Envelope) -> bool {
        match self.when.get() {
            Some(when) => when(args),
            None => false,
        }
    }

    fn produce_return(&self, _args: &Envelope) -> Envelope {
        match self.returns.get() {
            Some(returns) => returns(),
            None => panic!(
                "{}",
                MockError::NoReturnValue {
                    strategy: Strategy::WhenReturn
                }
            ),
        }
    }

    fn try_handle(&self, args: &Envelope) -> Option<Envelope> {
        self.handle.get().and_then(|handle| handle(args))
    }
}
