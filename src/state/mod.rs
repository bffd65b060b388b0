pub mod cache;
pub mod signature;
pub mod snapshot;

pub use cache::{CachedState, StateCache};
pub use signature::{StateSignature, WidgetSignature};
pub use snapshot::Snapshot;
