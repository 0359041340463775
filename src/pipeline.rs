//! End-to-end orchestration: extract → summarize → segment → bucketize.
//!
//! The pipeline is I/O-bound (one document decode, one network round-trip)
//! and runs as a sequential async chain with no internal parallelism. A
//! [`Session`] enforces the run lifecycle: at most one live [`Report`],
//! replaced atomically, with a superseded run's result always discarded.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::config::Config;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::extract;
use crate::provider::{SummaryProvider, SummaryRequestOptions};
use crate::report::Report;

/// One end-to-end invocation chain for a single document and request.
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full chain, selecting the provider from the options.
    pub async fn run(
        &self,
        document: &Document,
        api_key: &str,
        options: SummaryRequestOptions,
    ) -> Result<Report> {
        let provider = options.provider.client(&self.config)?;
        self.run_with(provider.as_ref(), document, api_key, options, None)
            .await
    }

    /// Run the full chain with an explicit provider and optional abort flag.
    ///
    /// The flag is checked between stages; a tripped flag ends the run with
    /// [`Error::Cancelled`]. No automatic retries: one failed attempt
    /// surfaces to the caller, who may re-invoke.
    pub async fn run_with(
        &self,
        provider: &dyn SummaryProvider,
        document: &Document,
        api_key: &str,
        options: SummaryRequestOptions,
        abort: Option<&AtomicBool>,
    ) -> Result<Report> {
        let run_id = Uuid::new_v4();
        let aborted = || abort.map(|flag| flag.load(Ordering::SeqCst)).unwrap_or(false);

        tracing::info!(
            run = %run_id,
            file = document.name(),
            provider = options.provider.as_str(),
            length = options.length.as_str(),
            "starting summarization run"
        );

        if aborted() {
            return Err(Error::Cancelled);
        }

        let text = extract::extract(document, self.config.min_text_len)?;

        if aborted() {
            return Err(Error::Cancelled);
        }

        let raw = provider.summarize(&text, api_key, &options).await?;

        if aborted() {
            tracing::info!(run = %run_id, "run aborted after provider reply, discarding");
            return Err(Error::Cancelled);
        }

        let report = Report::from_raw_reply(&raw)?;
        tracing::info!(run = %run_id, "run complete");
        Ok(report)
    }
}

/// One user session: serializes runs logically, keeps at most one live
/// report, and guarantees a previous run's result never overwrites a newer
/// run's state.
pub struct Session {
    pipeline: Pipeline,
    run_seq: AtomicU64,
    abort: Arc<AtomicBool>,
    current: RwLock<Option<Arc<Report>>>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            pipeline: Pipeline::new(config),
            run_seq: AtomicU64::new(0),
            abort: Arc::new(AtomicBool::new(false)),
            current: RwLock::new(None),
        }
    }

    /// Run the pipeline and publish the result, unless a newer run or a
    /// cancel superseded this one in the meantime.
    pub async fn run(
        &self,
        document: &Document,
        api_key: &str,
        options: SummaryRequestOptions,
    ) -> Result<Arc<Report>> {
        let provider = options.provider.client(self.pipeline.config())?;
        self.run_with(provider.as_ref(), document, api_key, options)
            .await
    }

    /// As [`Session::run`], with an explicit provider.
    pub async fn run_with(
        &self,
        provider: &dyn SummaryProvider,
        document: &Document,
        api_key: &str,
        options: SummaryRequestOptions,
    ) -> Result<Arc<Report>> {
        let id = self.run_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.abort.store(false, Ordering::SeqCst);

        let outcome = self
            .pipeline
            .run_with(provider, document, api_key, options, Some(&self.abort))
            .await;

        // Publish only if this is still the newest run.
        if self.run_seq.load(Ordering::SeqCst) != id {
            tracing::info!("discarding result of superseded run");
            return Err(Error::Cancelled);
        }

        let report = Arc::new(outcome?);
        *self.write_lock() = Some(report.clone());
        Ok(report)
    }

    /// Cancel the in-flight run, if any. Its result will be discarded.
    pub fn cancel(&self) {
        self.run_seq.fetch_add(1, Ordering::SeqCst);
        self.abort.store(true, Ordering::SeqCst);
    }

    /// Drop the live report, e.g. when the document is removed.
    pub fn clear(&self) {
        self.cancel();
        *self.write_lock() = None;
    }

    /// The live report, if a run has completed.
    pub fn current(&self) -> Option<Arc<Report>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, Option<Arc<Report>>> {
        self.current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
