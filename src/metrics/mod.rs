//! Metrics for the rivalry ledger
//!
//! Counters and gauges live on a private Prometheus registry; nothing is
//! served over the network. Callers render the registry with
//! `MetricsCollector::gather_text`.

pub mod collector;

pub use collector::{MetricsCollector, MetricsTimer, RivalryMetrics, SeasonMetrics};
