pub mod collector;

pub use collector::WidgetCollector;
