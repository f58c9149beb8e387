use core::marker::PhantomData;
use std::sync::Arc;

use crate::envelope::Envelope;
use crate::invoke::{Invoker, Strategy};
use crate::key::SubjectKey;
use crate::provider::Provider;
use crate::registry::Registry;

/// Typed handle to one registered provider.
///
/// `A` is the tuple of argument types and `R` the tuple of result types of
/// the mocked method, e.g. `Mocker<(u32, String), (Option<User>,)>`.
/// The provider is registered as soon as the `Mocker` is created; configure
/// it with [handle](#method.handle), or with [when](#method.when) followed
/// by [returns](#method.returns), before the subject is exercised.
///
/// Closures receive arguments by reference. A handler answers `Some` to claim
/// the call. Methods with a single result take and return that value directly,
/// methods with several results use a tuple.
pub struct Mocker<A, R> {
    provider: Arc<Provider>,
    key: SubjectKey,
    signature: PhantomData<fn(A) -> R>,
}

impl<A, R> Mocker<A, R> {
    /// Register a fresh, unconfigured provider for `key`.
    pub fn new(registry: &Registry, key: SubjectKey) -> Self {
        let provider = Arc::new(Provider::new());
        registry.add_provider(key, provider.clone());

        Self {
            provider,
            key,
            signature: PhantomData,
        }
    }

    pub fn key(&self) -> SubjectKey {
        self.key
    }

    pub fn strategy(&self) -> Strategy {
        self.provider.strategy()
    }
}

impl<A, R> core::fmt::Debug for Mocker<A, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Mocker")
            .field("subject", &self.key.type_name())
            .field("method", &self.key.method())
            .field("strategy", &self.strategy())
            .finish()
    }
}

// A single result is passed bare, several as a tuple. Works for types and patterns.
macro_rules! unary_or_tuple {
    ($single:ident) => {
        $single
    };
    ($($many:ident),+) => {
        ($($many),+)
    };
}

macro_rules! typed_mocker {
    ([$($idx:tt $T:ident $a:ident),*] [$($R:ident $r:ident),+]) => {
        impl<$($T: 'static,)* $($R: 'static),+> Mocker<($($T,)*), ($($R,)+)> {
            /// Answer calls with a custom handler.
            ///
            /// Returning `None` declines the call, letting later providers try.
            /// Once set, the handler takes precedence over `when`/`returns`.
            #[allow(unused_variables)]
            pub fn handle<F>(&self, handle: F)
            where
                F: Fn($(&$T),*) -> Option<unary_or_tuple!($($R),+)> + Send + Sync + 'static,
            {
                self.provider.set_handle(Arc::new(move |args: &Envelope| {
                    $(let $a = args.arg::<$T>($idx);)*
                    handle($($a),*).map(|results| {
                        let unary_or_tuple!($($r),+) = results;
                        let mut envelope = Envelope::new();
                        $(envelope.push($r);)+
                        envelope
                    })
                }));
            }

            /// Only answer calls whose arguments satisfy `when`.
            #[allow(unused_variables)]
            pub fn when<F>(&self, when: F) -> &Self
            where
                F: Fn($(&$T),*) -> bool + Send + Sync + 'static,
            {
                self.provider.set_when(Arc::new(move |args: &Envelope| {
                    $(let $a = args.arg::<$T>($idx);)*
                    when($($a),*)
                }));
                self
            }

            /// Produce the response once `when` matched.
            pub fn returns<F>(&self, returns: F)
            where
                F: Fn() -> unary_or_tuple!($($R),+) + Send + Sync + 'static,
            {
                self.provider.set_returns(Arc::new(move || {
                    let unary_or_tuple!($($r),+) = returns();
                    let mut envelope = Envelope::new();
                    $(envelope.push($r);)+
                    envelope
                }));
            }
        }
    };
}

macro_rules! typed_mockers {
    (@args $args:tt [$($results:tt)+]) => {
        $(typed_mocker!($args $results);)+
    };
    ($([$($args:tt)*])+ ; $results:tt) => {
        $(typed_mockers!(@args [$($args)*] $results);)+
    };
}

typed_mockers! {
    []
    [0 T1 a1]
    [0 T1 a1, 1 T2 a2]
    [0 T1 a1, 1 T2 a2, 2 T3 a3]
    [0 T1 a1, 1 T2 a2, 2 T3 a3, 3 T4 a4]
    [0 T1 a1, 1 T2 a2, 2 T3 a3, 3 T4 a4, 4 T5 a5]
    ;
    [
        [R1 r1]
        [R1 r1, R2 r2]
        [R1 r1, R2 r2, R3 r3]
        [R1 r1, R2 r2, R3 r3, R4 r4]
        [R1 r1, R2 r2, R3 r3, R4 r4, R5 r5]
    ]
}
