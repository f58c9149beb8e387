use core::any::TypeId;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Identifies a mockable call site: the concrete subject type plus a method name.
///
/// Identity is nominal. Two traits mocked through the same concrete type share
/// keys for equally named methods, and their providers end up in the same queue.
///
/// The type name is kept only for diagnostics and does not take part in
/// comparisons.
#[derive(Clone, Copy, Debug)]
pub struct SubjectKey {
    type_id: TypeId,
    type_name: &'static str,
    method: &'static str,
}

impl SubjectKey {
    /// Key for `method` on subject type `S`.
    pub fn of<S: ?Sized + 'static>(method: &'static str) -> Self {
        Self {
            type_id: TypeId::of::<S>(),
            type_name: core::any::type_name::<S>(),
            method,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully qualified name of the subject type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn method(&self) -> &'static str {
        self.method
    }
}

impl PartialEq for SubjectKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.method == other.method
    }
}

impl Eq for SubjectKey {}

impl PartialOrd for SubjectKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SubjectKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.type_id
            .cmp(&other.type_id)
            .then_with(|| self.method.cmp(other.method))
    }
}

impl Hash for SubjectKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.method.hash(state);
    }
}
