pub mod prefecture_repository_impl;

pub use prefecture_repository_impl::InMemoryPrefectureRepository;
