pub mod aggregator;
pub mod classifier;
pub mod platforms;
pub mod providers;

pub use aggregator::Aggregator;
pub use classifier::{ContentClassifier, StubClassifier, Verdict};
pub use platforms::platform_key;
