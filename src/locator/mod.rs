pub mod equality;
pub mod locator;

pub use equality::is_equal;
pub use locator::{find_widget_by_attr, locate_widget, nearest_button};
