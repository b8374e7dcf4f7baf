// Extraction backend implementations
pub mod mock;
pub mod remote;
pub mod statistical;

pub use mock::{MockExtractor, RecordedCall};
pub use remote::RemoteExtractor;
pub use statistical::StatisticalExtractor;
