//! Metrics collection using Prometheus
//!
//! This module records season activity (games, ties, rejections,
//! rivalries and championships) as Prometheus metrics.

use anyhow::Result;
use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Main metrics collector for seasons
#[derive(Clone)]
pub struct MetricsCollector {
    /// Prometheus registry
    registry: Arc<Registry>,

    /// Game-related metrics
    season_metrics: SeasonMetrics,

    /// Rivalry and legacy metrics
    rivalry_metrics: RivalryMetrics,
}

/// Game-related metrics
#[derive(Clone)]
pub struct SeasonMetrics {
    /// Total games accepted into a season
    pub games_recorded_total: IntCounter,

    /// Total accepted games that ended level
    pub ties_total: IntCounter,

    /// Games rejected before any state changed, by reason
    pub games_rejected_total: IntCounterVec,

    /// Time spent applying a game to a season
    pub add_game_duration: Histogram,
}

/// Rivalry and legacy metrics
#[derive(Clone)]
pub struct RivalryMetrics {
    /// Total rivalries created on first meeting
    pub rivalries_created_total: IntCounter,

    /// Rivalries currently tracked
    pub active_rivalries: IntGauge,

    /// Total championships awarded
    pub championships_total: IntCounter,
}

impl MetricsCollector {
    /// Create a new metrics collector with its own registry
    pub fn new() -> Result<Self> {
        let registry = Arc::new(Registry::new());
        Self::with_registry(registry)
    }

    /// Create a new metrics collector with custom registry
    pub fn with_registry(registry: Arc<Registry>) -> Result<Self> {
        let season_metrics = SeasonMetrics::new(&registry)?;
        let rivalry_metrics = RivalryMetrics::new(&registry)?;

        Ok(Self {
            registry,
            season_metrics,
            rivalry_metrics,
        })
    }

    /// Get the Prometheus registry
    pub fn registry(&self) -> Arc<Registry> {
        self.registry.clone()
    }

    pub fn season(&self) -> &SeasonMetrics {
        &self.season_metrics
    }

    pub fn rivalry(&self) -> &RivalryMetrics {
        &self.rivalry_metrics
    }

    /// Record a game accepted into a season
    pub fn record_game(&self, tie: bool, duration: Duration) {
        self.season_metrics.games_recorded_total.inc();
        if tie {
            self.season_metrics.ties_total.inc();
        }
        self.season_metrics
            .add_game_duration
            .observe(duration.as_secs_f64());
    }

    /// Record a game rejected with the given reason
    pub fn record_rejection(&self, reason: &str) {
        self.season_metrics
            .games_rejected_total
            .with_label_values(&[reason])
            .inc();
    }

    /// Record a newly created rivalry
    pub fn record_rivalry_created(&self) {
        self.rivalry_metrics.rivalries_created_total.inc();
    }

    pub fn set_active_rivalries(&self, count: usize) {
        self.rivalry_metrics.active_rivalries.set(count as i64);
    }

    pub fn record_championship(&self) {
        self.rivalry_metrics.championships_total.inc();
    }

    /// Render every registered metric in the Prometheus text format
    pub fn gather_text(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Start a timer for measuring operation duration
    pub fn start_timer(&self) -> MetricsTimer {
        MetricsTimer::new()
    }
}

impl std::fmt::Debug for MetricsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsCollector")
            .field(
                "games_recorded",
                &self.season_metrics.games_recorded_total.get(),
            )
            .field(
                "active_rivalries",
                &self.rivalry_metrics.active_rivalries.get(),
            )
            .finish()
    }
}

/// Timer for measuring operation durations
pub struct MetricsTimer {
    start: Instant,
}

impl MetricsTimer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop timer and return elapsed duration
    pub fn stop(self) -> Duration {
        self.elapsed()
    }
}

impl SeasonMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let games_recorded_total = IntCounter::new(
            "rivalry_ledger_games_recorded_total",
            "Total games recorded into seasons",
        )?;
        registry.register(Box::new(games_recorded_total.clone()))?;

        let ties_total = IntCounter::new("rivalry_ledger_ties_total", "Total tied games")?;
        registry.register(Box::new(ties_total.clone()))?;

        let games_rejected_total = IntCounterVec::new(
            Opts::new(
                "rivalry_ledger_games_rejected_total",
                "Total games rejected by a season",
            ),
            &["reason"],
        )?;
        registry.register(Box::new(games_rejected_total.clone()))?;

        let add_game_duration = Histogram::with_opts(
            HistogramOpts::new(
                "rivalry_ledger_add_game_duration_seconds",
                "Time spent recording a game",
            )
            .buckets(vec![0.000_001, 0.000_01, 0.000_1, 0.001, 0.01]),
        )?;
        registry.register(Box::new(add_game_duration.clone()))?;

        Ok(Self {
            games_recorded_total,
            ties_total,
            games_rejected_total,
            add_game_duration,
        })
    }
}

impl RivalryMetrics {
    fn new(registry: &Registry) -> Result<Self> {
        let rivalries_created_total = IntCounter::new(
            "rivalry_ledger_rivalries_created_total",
            "Total rivalries created",
        )?;
        registry.register(Box::new(rivalries_created_total.clone()))?;

        let active_rivalries = IntGauge::new(
            "rivalry_ledger_active_rivalries",
            "Number of rivalries currently tracked",
        )?;
        registry.register(Box::new(active_rivalries.clone()))?;

        let championships_total = IntCounter::new(
            "rivalry_ledger_championships_total",
            "Total championships awarded",
        )?;
        registry.register(Box::new(championships_total.clone()))?;

        Ok(Self {
            rivalries_created_total,
            active_rivalries,
            championships_total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_collector_creation() {
        let collector = MetricsCollector::new().expect("Failed to create metrics collector");

        assert_eq!(collector.season().games_recorded_total.get(), 0);
        assert_eq!(collector.rivalry().active_rivalries.get(), 0);
    }

    #[test]
    fn test_game_recording() {
        let collector = MetricsCollector::new().expect("Failed to create metrics collector");

        collector.record_game(false, Duration::from_micros(5));
        collector.record_game(true, Duration::from_micros(5));
        collector.record_rejection("incomplete_game");

        assert_eq!(collector.season().games_recorded_total.get(), 2);
        assert_eq!(collector.season().ties_total.get(), 1);
        assert_eq!(
            collector
                .season()
                .games_rejected_total
                .with_label_values(&["incomplete_game"])
                .get(),
            1
        );
    }

    #[test]
    fn test_gather_text() {
        let collector = MetricsCollector::new().expect("Failed to create metrics collector");
        collector.record_rivalry_created();
        collector.set_active_rivalries(1);
        collector.record_championship();

        let text = collector.gather_text().unwrap();
        assert!(text.contains("rivalry_ledger_rivalries_created_total 1"));
        assert!(text.contains("rivalry_ledger_active_rivalries 1"));
        assert!(text.contains("rivalry_ledger_championships_total 1"));
    }

    #[test]
    fn test_collectors_are_independent() {
        let first = MetricsCollector::new().unwrap();
        let second = MetricsCollector::new().unwrap();

        first.record_rivalry_created();
        assert_eq!(second.rivalry().rivalries_created_total.get(), 0);
    }

    #[test]
    fn test_metrics_timer() {
        let collector = MetricsCollector::new().expect("Failed to create metrics collector");
        let timer = collector.start_timer();

        std::thread::sleep(Duration::from_millis(10));
        let duration = timer.elapsed();

        assert!(duration >= Duration::from_millis(10));

        let final_duration = timer.stop();
        assert!(final_duration >= Duration::from_millis(10));
    }
}
