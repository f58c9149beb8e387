use std::sync::Arc;

use mocker::*;

#[mockgen]
trait Scale {
    fn apply(&self, factor: i64, value: i64) -> i64;
}

/// Claims calls whose factor is even, by hand.
struct EvenFactors;

impl Invoker for EvenFactors {
    fn strategy(&self) -> Strategy {
        Strategy::WhenReturn
    }

    fn try_when(&self, args: &Envelope) -> bool {
        matches!(args.get::<i64>(0), Ok(factor) if factor % 2 == 0)
    }

    fn produce_return(&self, args: &Envelope) -> Envelope {
        envelope![args.arg::<i64>(0) * args.arg::<i64>(1)]
    }

    fn try_handle(&self, _: &Envelope) -> Option<Envelope> {
        None
    }
}

#[test]
fn custom_invokers_share_the_queue_with_mockers() {
    let scale = ScaleMockImpl::new(Arc::new(Registry::new()));
    scale
        .registry()
        .add_provider(SubjectKey::of::<ScaleMockImpl>("apply"), Arc::new(EvenFactors));
    scale.mock_apply().handle(|_, value| Some(-*value));

    assert_eq!(scale.apply(2, 21), 42);
    assert_eq!(scale.apply(3, 21), -21);
}

#[test]
#[should_panic(expected = "result #0 was missing or of the wrong type.")]
fn mistyped_result_is_reported_by_the_mock() {
    struct WrongType;

    impl Invoker for WrongType {
        fn strategy(&self) -> Strategy {
            Strategy::Handle
        }

        fn try_when(&self, _: &Envelope) -> bool {
            false
        }

        fn produce_return(&self, _: &Envelope) -> Envelope {
            Envelope::new()
        }

        fn try_handle(&self, _: &Envelope) -> Option<Envelope> {
            Some(envelope!["not an i64"])
        }
    }

    let scale = ScaleMockImpl::new(Arc::new(Registry::new()));
    scale
        .registry()
        .add_provider(SubjectKey::of::<ScaleMockImpl>("apply"), Arc::new(WrongType));

    scale.apply(1, 1);
}
