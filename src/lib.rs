//! `mocker` swaps trait implementations for programmable fakes in tests.
//!
//! A [Registry] holds, per subject type and method name, an ordered queue of
//! providers. A mocked method forwards its arguments to the dispatcher, which
//! tries the providers in registration order until one claims the call.
//!
//! The [mockgen] attribute generates the mock type for a trait:
//!
//! ```rust
//! use std::sync::Arc;
//! use mocker::*;
//!
//! #[mockgen]
//! trait Lookup {
//!     fn find(&self, id: u32) -> Option<String>;
//! }
//!
//! fn describe(lookup: &impl Lookup, id: u32) -> String {
//!     lookup.find(id).unwrap_or_else(|| "unknown".to_string())
//! }
//!
//! let registry = Arc::new(Registry::new());
//! let lookup = LookupMockImpl::new(registry);
//!
//! lookup.mock_find().when(|id| *id == 7).returns(|| Some("seven".to_string()));
//! lookup.mock_find().handle(|_| Some(None));
//!
//! assert_eq!(describe(&lookup, 7), "seven");
//! assert_eq!(describe(&lookup, 8), "unknown");
//! ```
//!
//! Each provider follows one of two [Strategy]s. A handler registered with
//! `handle` sees the arguments and claims the call by returning `Some`. A
//! `when`/`returns` pair answers with the canned response whenever the
//! predicate holds. The first provider to claim a call wins; if none does,
//! the generated method panics with `no mock code matched`.
//!
//! Providers for a key are never reordered: register specific providers
//! before general ones.

#![forbid(unsafe_code)]

mod envelope;
mod error;
mod invoke;
mod key;
mod lock;
mod mocker;
mod provider;
mod registry;
mod unbox;

pub use envelope::Envelope;
pub use error::{MockError, MockResult};
pub use invoke::{invoke, try_invoke, Invoker, Strategy};
pub use key::SubjectKey;
pub use mocker::Mocker;
pub use registry::{DispatchMode, Registry};
pub use unbox::{unbox1, unbox2, unbox3, unbox4, unbox5};

/// Generate a registry-backed mock implementation of a trait.
///
/// For `trait Service`, the attribute emits `ServiceMockImpl`, which holds an
/// `Arc<Registry>` and implements `Service` by dispatching every call. For
/// each method `foo` it also emits `mock_foo()`, which registers a new
/// [Mocker] with the method's argument and result types.
///
/// # Attributes
/// * `name = Ident`: name of the generated type, instead of `<Trait>MockImpl`.
/// * `prefix = path`: path to this crate, if it is re-exported elsewhere.
///
/// Mocked methods take a `self` receiver and at most [MAX_PARAM_COUNT] owned
/// arguments. A return type that is a tuple of two to [MAX_RESULT_COUNT]
/// elements is split into that many result slots.
#[cfg(feature = "macros")]
pub use mocker_macros::mockgen;

/// Most arguments a mocked method may take.
pub const MAX_PARAM_COUNT: usize = 5;

/// Most result slots a mocked method may produce.
pub const MAX_RESULT_COUNT: usize = 5;
