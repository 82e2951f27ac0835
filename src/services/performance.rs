//! Performance monitor
//!
//! Process-wide table of named timings. Handlers and the timing middleware
//! record into it concurrently; in development the table is dumped to the
//! log on demand.

use std::collections::BTreeMap;
use std::sync::OnceLock;
use std::time::Instant;

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::config::Environment;

static MONITOR: OnceLock<PerformanceMonitor> = OnceLock::new();

#[derive(Debug, Default)]
pub struct PerformanceMonitor {
    marks: DashMap<String, Instant>,
    metrics: DashMap<String, f64>,
}

impl PerformanceMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全局单例
    pub fn global() -> &'static PerformanceMonitor {
        MONITOR.get_or_init(PerformanceMonitor::new)
    }

    pub fn mark(&self, name: &str) {
        self.marks.insert(name.to_string(), Instant::now());
    }

    /// 结束计时并记录（毫秒）；没有对应的 mark 时返回 None
    pub fn measure(&self, name: &str) -> Option<f64> {
        let Some((_, started)) = self.marks.remove(name) else {
            warn!("Performance measurement failed: no mark named '{}'", name);
            return None;
        };
        let duration = started.elapsed().as_secs_f64() * 1000.0;
        self.metrics.insert(name.to_string(), duration);
        Some(duration)
    }

    pub fn record(&self, name: &str, duration_ms: f64) {
        self.metrics.insert(name.to_string(), duration_ms);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).map(|v| *v)
    }

    pub fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    /// 仅在开发环境输出
    pub fn log_metrics(&self, environment: Environment) {
        if environment.is_production() {
            return;
        }
        let metrics = self.metrics();
        if metrics.is_empty() {
            debug!("No performance metrics recorded yet");
            return;
        }
        let width = metrics.keys().map(String::len).max().unwrap_or(0);
        for (name, duration) in &metrics {
            debug!("{:<width$}  {:>10.3} ms", name, duration, width = width);
        }
    }

    pub fn clear(&self) {
        self.marks.clear();
        self.metrics.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_measure() {
        let monitor = PerformanceMonitor::new();
        monitor.mark("render");
        let duration = monitor.measure("render").unwrap();
        assert!(duration >= 0.0);
        assert_eq!(monitor.get("render"), Some(duration));
        // mark 只能消费一次
        assert!(monitor.measure("render").is_none());
    }

    #[test]
    fn test_measure_without_mark() {
        let monitor = PerformanceMonitor::new();
        assert!(monitor.measure("missing").is_none());
        assert!(monitor.metrics().is_empty());
    }

    #[test]
    fn test_record_overwrites() {
        let monitor = PerformanceMonitor::new();
        monitor.record("GET /", 3.0);
        monitor.record("GET /", 5.0);
        assert_eq!(monitor.metrics().get("GET /"), Some(&5.0));
        monitor.log_metrics(Environment::Development);
        monitor.clear();
        assert!(monitor.metrics().is_empty());
    }

    #[test]
    fn test_concurrent_records() {
        let monitor = std::sync::Arc::new(PerformanceMonitor::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let monitor = monitor.clone();
                std::thread::spawn(move || monitor.record(&format!("route-{}", i), i as f64))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(monitor.metrics().len(), 8);
    }
}
