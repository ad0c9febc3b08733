//! Basic metrics instrumentation for tracking upstream performance and endpoint activity.
//!
//! Provides counters and duration tracking for upstream HTTP requests and store writes.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the client and the services.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of upstream HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of upstream HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all upstream HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Chat replies returned to callers
    chat_replies_total: Arc<AtomicU64>,

    /// Chat replies that used the fallback text
    fallback_replies_total: Arc<AtomicU64>,

    /// Contact messages stored
    contact_submissions_total: Arc<AtomicU64>,

    /// Users registered
    registrations_total: Arc<AtomicU64>,

    /// Successful logins
    logins_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            chat_replies_total: Arc::new(AtomicU64::new(0)),
            fallback_replies_total: Arc::new(AtomicU64::new(0)),
            contact_submissions_total: Arc::new(AtomicU64::new(0)),
            registrations_total: Arc::new(AtomicU64::new(0)),
            logins_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an upstream HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an upstream HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a chat reply, noting whether it was the fallback text.
    pub fn record_chat_reply(&self, fallback: bool) {
        self.chat_replies_total.fetch_add(1, Ordering::Relaxed);
        if fallback {
            self.fallback_replies_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a stored contact message.
    pub fn record_contact_submission(&self) {
        self.contact_submissions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a registration.
    pub fn record_registration(&self) {
        self.registrations_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful login.
    pub fn record_login(&self) {
        self.logins_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total upstream HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total upstream HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total upstream HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average upstream HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn chat_replies_total(&self) -> u64 {
        self.chat_replies_total.load(Ordering::Relaxed)
    }

    pub fn fallback_replies_total(&self) -> u64 {
        self.fallback_replies_total.load(Ordering::Relaxed)
    }

    pub fn contact_submissions_total(&self) -> u64 {
        self.contact_submissions_total.load(Ordering::Relaxed)
    }

    pub fn registrations_total(&self) -> u64 {
        self.registrations_total.load(Ordering::Relaxed)
    }

    pub fn logins_total(&self) -> u64 {
        self.logins_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_total_ms: self.http_duration_total_ms(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            chat_replies_total: self.chat_replies_total(),
            fallback_replies_total: self.fallback_replies_total(),
            contact_submissions_total: self.contact_submissions_total(),
            registrations_total: self.registrations_total(),
            logins_total: self.logins_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_total_ms: u64,
    pub http_duration_avg_ms: f64,
    pub chat_replies_total: u64,
    pub fallback_replies_total: u64,
    pub contact_submissions_total: u64,
    pub registrations_total: u64,
    pub logins_total: u64,
}

/// Helper for timing upstream HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_http_request(duration);
        self.metrics.record_http_error();
    }
}
