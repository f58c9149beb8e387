use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use mocker::*;

#[mockgen]
trait Counter {
    fn next(&self, step: u32) -> u32;
}

#[tokio_1::test(crate = "tokio_1", flavor = "multi_thread", worker_threads = 4)]
async fn tasks_with_separate_registries_do_not_interfere() {
    let tasks = (0..16_u32).map(|task| {
        tokio_1::spawn(async move {
            let counter = CounterMockImpl::new(Arc::new(Registry::new()));
            counter.mock_next().handle(move |step| Some(task * 100 + step));

            (0..50).map(|step| counter.next(step)).collect::<Vec<_>>()
        })
    });

    for (task, handle) in tasks.collect::<Vec<_>>().into_iter().enumerate() {
        let values = handle.await.unwrap();
        let expected = (0..50).map(|step| task as u32 * 100 + step).collect::<Vec<_>>();
        assert_eq!(values, expected);
    }
}

#[tokio_1::test(crate = "tokio_1", flavor = "multi_thread", worker_threads = 4)]
async fn shared_registry_is_safe_to_dispatch_from_many_tasks() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::new(CounterMockImpl::new(Arc::new(Registry::new())));
    counter.mock_next().handle({
        let calls = calls.clone();
        move |step| {
            calls.fetch_add(1, Ordering::SeqCst);
            Some(step + 1)
        }
    });

    let tasks = (0..8)
        .map(|_| {
            let counter = counter.clone();
            tokio_1::spawn(async move { (0..25).map(|step| counter.next(step)).sum::<u32>() })
        })
        .collect::<Vec<_>>();

    for task in tasks {
        assert_eq!(task.await.unwrap(), (1..=25).sum::<u32>());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 8 * 25);
}

#[test]
fn registration_races_with_dispatch() {
    let counter = Arc::new(CounterMockImpl::new(Arc::new(Registry::new())));
    counter.mock_next().handle(|step| Some(*step));

    std::thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..100 {
                counter.mock_next().when(|_| false).returns(|| 0);
            }
        });
        scope.spawn(|| {
            for step in 0..100 {
                assert_eq!(counter.next(step), step);
            }
        });
    });

    assert_eq!(
        counter
            .registry()
            .provider_count(SubjectKey::of::<CounterMockImpl>("next")),
        101
    );
}
