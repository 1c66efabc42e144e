pub mod sample_set;
pub mod summary;

pub use sample_set::SampleSet;
pub use summary::SampleSummary;
