use std::sync::Arc;

use mocker::*;

#[mockgen]
trait Repository<T> {
    fn save(&self, item: T) -> Result<u64, String>;
    fn load(&self, id: u64) -> Option<T>;
}

#[test]
fn generic_mock_dispatches_per_instantiation() {
    let registry = Arc::new(Registry::new());
    let numbers = RepositoryMockImpl::<i32>::new(registry.clone());
    let words = RepositoryMockImpl::<String>::new(registry.clone());

    numbers.mock_load().handle(|id| Some(Some(*id as i32)));
    words
        .mock_load()
        .when(|id| *id == 1)
        .returns(|| Some("one".to_string()));

    assert_eq!(numbers.load(5), Some(5));
    assert_eq!(words.load(1), Some("one".to_string()));
    assert_eq!(
        registry.provider_count(SubjectKey::of::<RepositoryMockImpl<i32>>("load")),
        1
    );
    assert_eq!(
        registry.provider_count(SubjectKey::of::<RepositoryMockImpl<String>>("load")),
        1
    );
}

#[test]
fn generic_arguments_reach_the_handler() {
    let repository = RepositoryMockImpl::<Vec<u8>>::new(Arc::new(Registry::new()));
    repository.mock_save().handle(|item| {
        if item.is_empty() {
            Some(Err("empty".to_string()))
        } else {
            Some(Ok(item.len() as u64))
        }
    });

    assert_eq!(repository.save(vec![1, 2, 3]), Ok(3));
    assert_eq!(repository.save(vec![]), Err("empty".to_string()));
}

#[test]
#[should_panic(expected = "no mock code matched for")]
fn other_instantiation_is_not_matched() {
    let registry = Arc::new(Registry::new());
    RepositoryMockImpl::<i32>::new(registry.clone())
        .mock_load()
        .handle(|_| Some(None));

    RepositoryMockImpl::<u32>::new(registry).load(1);
}
