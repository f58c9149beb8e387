use crate::envelope::Envelope;
use crate::error::{MockError, MockResult};
use crate::key::SubjectKey;
use crate::registry::{DispatchMode, Registry};

/// How a provider decides whether it claims a call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// A custom handler sees the arguments and may claim the call.
    Handle,
    /// A predicate guards a canned response.
    WhenReturn,
}

/// The type-erased surface every provider exposes to the dispatcher.
///
/// [Mocker](crate::Mocker) implements this on behalf of typed closures, but
/// any `Invoker` may be registered through [Registry::add_provider].
pub trait Invoker: Send + Sync {
    /// The strategy currently in effect.
    fn strategy(&self) -> Strategy;

    /// Evaluate the predicate. An absent predicate never matches.
    fn try_when(&self, args: &Envelope) -> bool;

    /// Produce the canned response after [Invoker::try_when] matched.
    fn produce_return(&self, args: &Envelope) -> Envelope;

    /// Run the handler. `None` means the call was not claimed.
    fn try_handle(&self, args: &Envelope) -> Option<Envelope>;
}

/// Find the first provider registered for `key` that claims the call.
///
/// Providers are tried in registration order and later ones are never
/// consulted once one has answered. `None` is returned when no registry is
/// bound, the registry is inert, or nothing matched.
pub fn try_invoke(
    registry: Option<&Registry>,
    key: SubjectKey,
    args: Envelope,
) -> Option<Envelope> {
    let registry = registry?;
    if registry.mode() == DispatchMode::Inert {
        tracing::trace!(
            subject = key.type_name(),
            method = key.method(),
            "registry is inert, passing through"
        );
        return None;
    }

    let providers = registry.lookup_providers(key);
    tracing::trace!(
        subject = key.type_name(),
        method = key.method(),
        providers = providers.len(),
        "dispatching mock call"
    );

    for (index, provider) in providers.iter().enumerate() {
        let strategy = provider.strategy();
        let answer = match strategy {
            Strategy::Handle => provider.try_handle(&args),
            Strategy::WhenReturn => {
                if provider.try_when(&args) {
                    Some(provider.produce_return(&args))
                } else {
                    None
                }
            }
        };

        if let Some(results) = answer {
            tracing::debug!(
                subject = key.type_name(),
                method = key.method(),
                index,
                ?strategy,
                "provider claimed call"
            );
            return Some(results);
        }
    }

    tracing::debug!(
        subject = key.type_name(),
        method = key.method(),
        "no provider claimed call"
    );
    None
}

/// Like [try_invoke], but reports a miss as [MockError::NoMockMatched].
pub fn invoke(
    registry: Option<&Registry>,
    key: SubjectKey,
    args: Envelope,
) -> MockResult<Envelope> {
    try_invoke(registry, key, args).ok_or(MockError::NoMockMatched {
        subject: key.type_name(),
        method: key.method(),
    })
}
