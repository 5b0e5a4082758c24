use plexdi_types::CommissionStatus;
use prometheus::{CounterVec, IntCounter, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Metrics collector for the RPC server
///
/// Counters live in a private registry so several collectors can coexist in
/// one process.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,

    // Commission metrics
    pub commissions_created: IntCounter,
    pub status_transitions: CounterVec,
    pub commissions_deleted: IntCounter,

    // Request metrics
    pub request_errors: CounterVec,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let commissions_created = IntCounter::new(
            "plexdi_commissions_created_total",
            "Total number of commissions requested",
        )?;
        registry.register(Box::new(commissions_created.clone()))?;

        let status_transitions = CounterVec::new(
            Opts::new(
                "plexdi_status_transitions_total",
                "Total number of commission status transitions",
            ),
            &["status"],
        )?;
        registry.register(Box::new(status_transitions.clone()))?;

        let commissions_deleted = IntCounter::new(
            "plexdi_commissions_deleted_total",
            "Total number of commissions deleted",
        )?;
        registry.register(Box::new(commissions_deleted.clone()))?;

        let request_errors = CounterVec::new(
            Opts::new(
                "plexdi_request_errors_total",
                "Total number of failed requests",
            ),
            &["kind"],
        )?;
        registry.register(Box::new(request_errors.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            commissions_created,
            status_transitions,
            commissions_deleted,
            request_errors,
        })
    }

    /// Export metrics in Prometheus format
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder.encode_to_string(&metric_families)
    }

    pub fn record_created(&self) {
        self.commissions_created.inc();
    }

    /// Record a transition into `status`
    ///
    /// Free-form labels share the `other` series.
    pub fn record_transition(&self, status: &CommissionStatus) {
        let label = match status {
            CommissionStatus::Queued => CommissionStatus::QUEUED,
            CommissionStatus::InProgress => CommissionStatus::IN_PROGRESS,
            CommissionStatus::Completed => CommissionStatus::COMPLETED,
            CommissionStatus::Other(_) => "other",
        };
        self.status_transitions.with_label_values(&[label]).inc();
    }

    pub fn record_deleted(&self) {
        self.commissions_deleted.inc();
    }

    /// Record a failed request by error kind
    pub fn record_error(&self, kind: &str) {
        self.request_errors.with_label_values(&[kind]).inc();
    }
}
