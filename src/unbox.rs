//! Extraction of typed results from an erased result [Envelope].
//!
//! Rust has no universal zero value, so every slot comes back as an `Option`:
//! `None` stands in for a slot that was missing or held another type.

use core::any::Any;

use crate::envelope::Envelope;
use crate::error::MockError;

fn checked_slots(ret: Envelope, expected: usize) -> std::vec::IntoIter<Box<dyn Any>> {
    if ret.len() != expected {
        let error = MockError::ArityMismatch {
            expected,
            actual: ret.len(),
        };
        tracing::warn!(expected, actual = ret.len(), "{error}");
        return Vec::new().into_iter();
    }

    ret.into_slots().into_iter()
}

fn next_slot<R: 'static>(slots: &mut std::vec::IntoIter<Box<dyn Any>>) -> Option<R> {
    slots
        .next()
        .and_then(|slot| slot.downcast::<R>().ok())
        .map(|value| *value)
}

macro_rules! unbox {
    ($(#[$attr:meta])* $name:ident, $arity:literal, $($R:ident),+) => {
        $(#[$attr])*
        pub fn $name<$($R: 'static),+>(ret: Envelope) -> ($(Option<$R>,)+) {
            let mut slots = checked_slots(ret, $arity);
            ($(next_slot::<$R>(&mut slots),)+)
        }
    };
}

unbox!(
    /// Extract one typed result.
    unbox1, 1, R1
);
unbox!(
    /// Extract two typed results.
    unbox2, 2, R1, R2
);
unbox!(
    /// Extract three typed results.
    unbox3, 3, R1, R2, R3
);
unbox!(
    /// Extract four typed results.
    unbox4, 4, R1, R2, R3, R4
);
unbox!(
    /// Extract five typed results.
    unbox5, 5, R1, R2, R3, R4, R5
);
