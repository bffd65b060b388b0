use tracing::debug;

use crate::collector::WidgetCollector;
use crate::config::{EngineConfig, OracleBackend, OracleConfig};
use crate::error::Result;
use crate::matcher::CandidateMatcher;
use crate::oracle::{CachedOracle, HttpOracle, LexicalOracle, SimilarityOracle};
use crate::state::{Snapshot, StateCache};
use crate::trace::MatchTraceLogger;
use crate::widget::widget_model::{RankedCandidate, SourceWidget, WidgetRecord};

/// One migration pipeline: a collector and a matcher sharing a private
/// state cache. Run pipelines in parallel by giving each its own engine.
pub struct MigrationEngine {
    cache: StateCache,
    collector: WidgetCollector,
    matcher: CandidateMatcher<Box<dyn SimilarityOracle>>,
}

impl MigrationEngine {
    pub fn new(collector: WidgetCollector, matcher: CandidateMatcher<Box<dyn SimilarityOracle>>) -> Self {
        Self {
            cache: StateCache::new(),
            collector,
            matcher,
        }
    }

    /// Engine with the oracle backend and trace file named in `config`.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let oracle = build_oracle(&config.oracle)?;
        Ok(Self::with_oracle(config, oracle))
    }

    pub fn with_oracle(config: &EngineConfig, oracle: Box<dyn SimilarityOracle>) -> Self {
        let trace = match &config.trace.path {
            Some(path) => MatchTraceLogger::new(path),
            None => MatchTraceLogger::disabled(),
        };
        let matcher = CandidateMatcher::new(oracle, config.matching.clone()).with_trace(trace);
        Self::new(WidgetCollector::new(config.rules.clone()), matcher)
    }

    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    pub fn collector(&self) -> &WidgetCollector {
        &self.collector
    }

    pub fn matcher(&self) -> &CandidateMatcher<Box<dyn SimilarityOracle>> {
        &self.matcher
    }

    pub fn collect(
        &mut self,
        dom: &str,
        package: &str,
        activity: &str,
        update_cache: bool,
    ) -> Result<Vec<WidgetRecord>> {
        self.collector
            .collect_dom(&mut self.cache, dom, package, activity, update_cache)
    }

    /// Ranked candidates for `source` on a target dump, using cached widgets
    /// when the state was collected before.
    pub fn rank(
        &mut self,
        source: &SourceWidget,
        dom: &str,
        package: &str,
        activity: &str,
    ) -> Result<Vec<RankedCandidate>> {
        let widgets = self.collect(dom, package, activity, false)?;
        Ok(self.matcher.rank(source, &widgets))
    }

    /// Top candidate for `source` on a target dump, memoized per state.
    pub fn best_match(
        &mut self,
        source: &SourceWidget,
        dom: &str,
        package: &str,
        activity: &str,
    ) -> Result<Option<RankedCandidate>> {
        if self.collector.is_excluded(package, activity) {
            debug!(package, activity, "no match on excluded snapshot");
            return Ok(None);
        }
        let snapshot = Snapshot::parse(dom, package, activity)?;
        let widgets = self.collector.collect(&mut self.cache, &snapshot, false);
        Ok(self
            .matcher
            .best_match(&mut self.cache, snapshot.signature(), source, &widgets))
    }
}

pub fn build_oracle(config: &OracleConfig) -> Result<Box<dyn SimilarityOracle>> {
    let oracle: Box<dyn SimilarityOracle> = match (config.backend, config.cache) {
        (OracleBackend::Lexical, false) => Box::new(LexicalOracle::default()),
        (OracleBackend::Lexical, true) => Box::new(CachedOracle::new(LexicalOracle::default())),
        (OracleBackend::Http, false) => Box::new(HttpOracle::new(&config.endpoint, config.timeout_ms)?),
        (OracleBackend::Http, true) => Box::new(CachedOracle::new(HttpOracle::new(
            &config.endpoint,
            config.timeout_ms,
        )?)),
    };
    Ok(oracle)
}
