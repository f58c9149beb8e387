//! Locks behind the registry and provider slots.
//!
//! `std` locks are used unless the `spin-lock` feature selects `spin`.
//! No lock is held while user closures run. A poisoned `std` lock is recovered.

pub(crate) struct MutexIsh<T> {
    #[cfg(not(feature = "spin-lock"))]
    inner: ::std::sync::Mutex<T>,

    #[cfg(feature = "spin-lock")]
    inner: ::spin::Mutex<T>,
}

pub(crate) struct RwLockIsh<T> {
    #[cfg(not(feature = "spin-lock"))]
    inner: ::std::sync::RwLock<T>,

    #[cfg(feature = "spin-lock")]
    inner: ::spin::RwLock<T>,
}

#[cfg(not(feature = "spin-lock"))]
impl<T> MutexIsh<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: ::std::sync::Mutex::new(value),
        }
    }

    pub fn locked<U>(&self, func: impl FnOnce(&mut T) -> U) -> U {
        let mut lock = self
            .inner
            .lock()
            .unwrap_or_else(::std::sync::PoisonError::into_inner);
        func(&mut *lock)
    }
}

#[cfg(feature = "spin-lock")]
impl<T> MutexIsh<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: ::spin::Mutex::new(value),
        }
    }

    pub fn locked<U>(&self, func: impl FnOnce(&mut T) -> U) -> U {
        let mut lock = self.inner.lock();
        func(&mut *lock)
    }
}

#[cfg(not(feature = "spin-lock"))]
impl<T> RwLockIsh<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: ::std::sync::RwLock::new(value),
        }
    }

    pub fn read<U>(&self, func: impl FnOnce(&T) -> U) -> U {
        let lock = self
            .inner
            .read()
            .unwrap_or_else(::std::sync::PoisonError::into_inner);
        func(&*lock)
    }

    pub fn write<U>(&self, func: impl FnOnce(&mut T) -> U) -> U {
        let mut lock = self
            .inner
            .write()
            .unwrap_or_else(::std::sync::PoisonError::into_inner);
        func(&mut *lock)
    }
}

#[cfg(feature = "spin-lock")]
impl<T> RwLockIsh<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: ::spin::RwLock::new(value),
        }
    }

    pub fn read<U>(&self, func: impl FnOnce(&T) -> U) -> U {
        let lock = self.inner.read();
        func(&*lock)
    }

    pub fn write<U>(&self, func: impl FnOnce(&mut T) -> U) -> U {
        let mut lock = self.inner.write();
        func(&mut *lock)
    }
}
