pub mod logger;
pub mod trace;

pub use logger::MatchTraceLogger;
pub use trace::MatchTraceEvent;
