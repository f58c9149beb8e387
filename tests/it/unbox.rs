use std::io;
use std::sync::{Arc, Mutex};

use mocker::*;
use pretty_assertions::assert_eq;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer({
            let captured = captured.clone();
            move || captured.clone()
        })
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();

    let value = tracing::subscriber::with_default(subscriber, f);
    (value, captured.contents())
}

#[test]
fn arity_mismatch_is_logged_and_yields_none() {
    let (slots, logs) = with_captured_logs(|| unbox3::<u8, u8, u8>(envelope![1_u8, 2_u8]));

    assert_eq!(slots, (None, None, None));
    assert!(logs.contains("WARN"), "{logs}");
    assert!(
        logs.contains("unexpected number of return values: 2 (expected 3)"),
        "{logs}"
    );
}

#[test]
fn matching_arity_logs_nothing() {
    let (slots, logs) =
        with_captured_logs(|| unbox3::<u8, String, bool>(envelope![1_u8, "s".to_string(), false]));

    assert_eq!(slots, (Some(1), Some("s".to_string()), Some(false)));
    assert_eq!(logs, "");
}

#[mockgen]
trait Pair {
    fn pair(&self) -> (u8, u8);
}

#[test]
fn dispatch_is_traced() {
    let ((), logs) = with_captured_logs(|| {
        let pair = PairMockImpl::new(Arc::new(Registry::new()));
        pair.mock_pair().when(|| true).returns(|| (1, 2));
        assert_eq!(pair.pair(), (1, 2));
    });

    assert!(logs.contains("registered mock provider"), "{logs}");
    assert!(logs.contains("provider claimed call"), "{logs}");
    assert!(logs.contains("method=\"pair\""), "{logs}");
}
