//! Prometheus metrics
//!
//! One latency histogram for the encode pipeline, labeled by outcome.
//! Every pipeline run is observed exactly once: successful, failed, or
//! cancelled because the caller went away. Requests rejected before the
//! pipeline runs (unknown model, bad payload) are not.

use std::time::{Duration, Instant};

use prometheus::{HistogramOpts, HistogramVec, Registry};

pub const ENCODE_REQUEST_SECONDS: &str = "encode_request_processing_seconds";

const ENCODE_BUCKETS: &[f64] = &[
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeOutcome {
    Success,
    Failure,
    Cancelled,
}

impl EncodeOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            EncodeOutcome::Success => "success",
            EncodeOutcome::Failure => "failure",
            EncodeOutcome::Cancelled => "cancelled",
        }
    }
}

/// Metric registry owned by the server (not the process-global default)
#[derive(Clone)]
pub struct EncodeMetrics {
    registry: Registry,
    encode_seconds: HistogramVec,
}

impl EncodeMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let encode_seconds = HistogramVec::new(
            HistogramOpts::new(
                ENCODE_REQUEST_SECONDS,
                "Time spent processing embedding request",
            )
            .buckets(ENCODE_BUCKETS.to_vec()),
            &["outcome"],
        )?;
        registry.register(Box::new(encode_seconds.clone()))?;

        Ok(Self {
            registry,
            encode_seconds,
        })
    }

    /// Start timing one pipeline run
    ///
    /// The observation is recorded when the timer is dropped; a timer that is
    /// never finished counts as `cancelled`.
    pub fn start_encode(&self) -> EncodeTimer {
        EncodeTimer {
            metrics: self.clone(),
            started: Instant::now(),
            outcome: EncodeOutcome::Cancelled,
        }
    }

    pub fn observe_encode(&self, outcome: EncodeOutcome, seconds: f64) {
        self.encode_seconds
            .with_label_values(&[outcome.as_str()])
            .observe(seconds);
    }

    /// Number of observations recorded for `outcome`
    pub fn encode_count(&self, outcome: EncodeOutcome) -> u64 {
        self.encode_seconds
            .with_label_values(&[outcome.as_str()])
            .get_sample_count()
    }

    /// Render all metrics in the Prometheus text exposition format
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        prometheus::Encoder::encode(
            &prometheus::TextEncoder::new(),
            &self.registry.gather(),
            &mut buffer,
        )?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

/// In-flight encode timing, observed on drop
pub struct EncodeTimer {
    metrics: EncodeMetrics,
    started: Instant,
    outcome: EncodeOutcome,
}

impl EncodeTimer {
    /// Set the outcome and record the observation; returns the elapsed time
    pub fn finish(mut self, outcome: EncodeOutcome) -> Duration {
        self.outcome = outcome;
        self.started.elapsed()
    }
}

impl Drop for EncodeTimer {
    fn drop(&mut self) {
        self.metrics
            .observe_encode(self.outcome, self.started.elapsed().as_secs_f64());
    }
}
