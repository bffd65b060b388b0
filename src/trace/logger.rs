use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::trace::trace::MatchTraceEvent;

/// JSONL sink for [`MatchTraceEvent`]s, one line per ranking pass.
///
/// A sink that cannot be opened or written to degrades to a no-op with a
/// warning, so matching results never depend on it.
pub struct MatchTraceLogger {
    sink: Option<(PathBuf, Mutex<File>)>,
}

impl MatchTraceLogger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let sink = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(|file| (path.to_path_buf(), Mutex::new(file)))
            .map_err(|e| warn!(path = %path.display(), error = %e, "match trace disabled"))
            .ok();
        Self { sink }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, event: &MatchTraceEvent) {
        let Some((path, file)) = &self.sink else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "match trace event not serializable");
                return;
            }
        };

        let written = file
            .lock()
            .map_err(|e| e.to_string())
            .and_then(|mut f| writeln!(f, "{line}").map_err(|e| e.to_string()));
        if let Err(error) = written {
            warn!(path = %path.display(), error = %error, "match trace write failed");
        }
    }
}
