//! Widget matching for GUI test migration.
//!
//! A recorded action targets a widget on a source snapshot of an app. After
//! the app evolves, the same action has to be replayed on a target snapshot
//! whose widgets were renamed, moved or restyled. This crate parses UI
//! hierarchy dumps, fingerprints UI states and widgets, and ranks the widgets
//! of a target snapshot by similarity to the source widget.

pub mod collector;
pub mod config;
pub mod engine;
pub mod error;
pub mod hierarchy;
pub mod locator;
pub mod logging;
pub mod matcher;
pub mod oracle;
pub mod state;
pub mod trace;
pub mod widget;

pub use engine::MigrationEngine;
pub use error::{MatchError, Result};
