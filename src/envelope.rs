use core::any::Any;

use crate::error::MockError;

/// An ordered, fixed-length sequence of type-erased values.
///
/// Envelopes carry call arguments from a mocked method into the dispatcher
/// and carry results back out. They live for the duration of a single call,
/// so the slots need neither `Send` nor `Sync`.
#[derive(Default)]
pub struct Envelope {
    slots: Vec<Box<dyn Any>>,
}

impl Envelope {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Append a value as the next slot.
    pub fn push<T: 'static>(&mut self, value: T) {
        self.slots.push(Box::new(value));
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Borrow slot `index` as `T`.
    pub fn get<T: 'static>(&self, index: usize) -> Result<&T, MockError> {
        let slot = self.slots.get(index).ok_or(MockError::MissingSlot {
            slot: index,
            len: self.slots.len(),
        })?;

        slot.downcast_ref::<T>().ok_or(MockError::Downcast {
            slot: index,
            expected: core::any::type_name::<T>(),
        })
    }

    /// Borrow argument slot `index` as `T`, panicking on mismatch.
    ///
    /// A mismatch means the caller and the shim disagree about the signature,
    /// which no test can recover from.
    #[track_caller]
    pub fn arg<T: 'static>(&self, index: usize) -> &T {
        match self.get::<T>(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Consume the envelope, yielding the raw slots in order.
    pub fn into_slots(self) -> Vec<Box<dyn Any>> {
        self.slots
    }
}

impl core::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Envelope")
            .field("len", &self.slots.len())
            .finish()
    }
}

/// Build an [Envelope] from a list of values, one slot per value.
///
/// ```rust
/// let args = mocker::envelope![1_u32, String::from("key")];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! envelope {
    () => {
        $crate::Envelope::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut envelope = $crate::Envelope::new();
        $(
            envelope.push($value);
        )+
        envelope
    }};
}
