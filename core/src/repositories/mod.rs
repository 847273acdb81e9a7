pub mod prefecture;

pub use prefecture::PrefectureRepository;

#[cfg(test)]
pub use prefecture::MockPrefectureRepository;
