//! Metrics collection and reporting

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// System metrics
#[derive(Debug, Clone)]
pub struct SystemMetrics {
    /// Total requests processed
    pub total_requests: u64,

    /// Total errors
    pub total_errors: u64,

    /// Average response time (ms)
    pub avg_response_time_ms: f64,

    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Latency histogram buckets (in milliseconds)
const LATENCY_BUCKETS: &[f64] = &[1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0];

/// Histogram for tracking latency distribution
#[derive(Debug, Clone)]
pub struct Histogram {
    buckets: Vec<(f64, Arc<AtomicU64>)>,
    sum: Arc<AtomicU64>,
    count: Arc<AtomicU64>,
}

impl Histogram {
    fn new(buckets: &[f64]) -> Self {
        let bucket_counters = buckets
            .iter()
            .map(|&b| (b, Arc::new(AtomicU64::new(0))))
            .collect();

        Self {
            buckets: bucket_counters,
            sum: Arc::new(AtomicU64::new(0)),
            count: Arc::new(AtomicU64::new(0)),
        }
    }

    fn observe(&self, value: f64) {
        self.sum.fetch_add(value as u64, Ordering::Relaxed);
        self.count.fetch_add(1, Ordering::Relaxed);

        // Buckets are cumulative - every bucket >= value gets incremented
        for (bucket, counter) in &self.buckets {
            if value <= *bucket {
                counter.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn export_prometheus(&self, name: &str, help: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("# HELP {} {}\n", name, help));
        output.push_str(&format!("# TYPE {} histogram\n", name));

        for (bucket, counter) in &self.buckets {
            let count = counter.load(Ordering::Relaxed);
            output.push_str(&format!("{}_bucket{{le=\"{}\"}} {}\n", name, bucket, count));
        }

        let total_count = self.count.load(Ordering::Relaxed);
        output.push_str(&format!("{}_bucket{{le=\"+Inf\"}} {}\n", name, total_count));

        let sum = self.sum.load(Ordering::Relaxed) as f64;
        output.push_str(&format!("{}_sum {:.3}\n", name, sum));
        output.push_str(&format!("{}_count {}\n", name, total_count));

        output
    }
}

/// Metrics collector
pub struct MetricsCollector {
    start_time: Instant,
    total_requests: Arc<AtomicU64>,
    total_errors: Arc<AtomicU64>,
    total_response_time_ms: Arc<AtomicU64>,

    // Histograms for latency tracking
    request_latency: Histogram,
    embedding_latency: Histogram,
}

impl MetricsCollector {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            total_requests: Arc::new(AtomicU64::new(0)),
            total_errors: Arc::new(AtomicU64::new(0)),
            total_response_time_ms: Arc::new(AtomicU64::new(0)),
            request_latency: Histogram::new(LATENCY_BUCKETS),
            embedding_latency: Histogram::new(LATENCY_BUCKETS),
        }
    }

    /// Record a request
    pub fn record_request(&self, response_time: Duration) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        let ms = response_time.as_millis() as u64;
        self.total_response_time_ms.fetch_add(ms, Ordering::Relaxed);
        self.request_latency.observe(ms as f64);
    }

    /// Record embedding operation latency
    pub fn record_embedding_latency(&self, duration: Duration) {
        self.embedding_latency.observe(duration.as_millis() as f64);
    }

    /// Record an error
    pub fn record_error(&self) {
        self.total_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics
    pub fn get_metrics(&self) -> SystemMetrics {
        let total_requests = self.total_requests.load(Ordering::Relaxed);
        let total_errors = self.total_errors.load(Ordering::Relaxed);
        let total_response_time = self.total_response_time_ms.load(Ordering::Relaxed);

        let avg_response_time_ms = if total_requests > 0 {
            total_response_time as f64 / total_requests as f64
        } else {
            0.0
        };

        SystemMetrics {
            total_requests,
            total_errors,
            avg_response_time_ms,
            uptime_secs: self.start_time.elapsed().as_secs(),
        }
    }

    /// Export metrics in Prometheus format
    pub fn export_prometheus(&self) -> String {
        let metrics = self.get_metrics();

        let mut output = format!(
            "# HELP embed_server_requests_total Total number of requests\n\
             # TYPE embed_server_requests_total counter\n\
             embed_server_requests_total {}\n\
             \n\
             # HELP embed_server_errors_total Total number of errors\n\
             # TYPE embed_server_errors_total counter\n\
             embed_server_errors_total {}\n\
             \n\
             # HELP embed_server_avg_response_time_ms Average response time in milliseconds\n\
             # TYPE embed_server_avg_response_time_ms gauge\n\
             embed_server_avg_response_time_ms {:.2}\n\
             \n\
             # HELP embed_server_uptime_seconds Uptime in seconds\n\
             # TYPE embed_server_uptime_seconds counter\n\
             embed_server_uptime_seconds {}\n\
             \n",
            metrics.total_requests,
            metrics.total_errors,
            metrics.avg_response_time_ms,
            metrics.uptime_secs,
        );

        output.push_str(&self.request_latency.export_prometheus(
            "embed_server_request_duration_ms",
            "Request duration in milliseconds",
        ));
        output.push('\n');

        output.push_str(&self.embedding_latency.export_prometheus(
            "embed_server_embedding_duration_ms",
            "Embedding operation duration in milliseconds",
        ));

        output
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
