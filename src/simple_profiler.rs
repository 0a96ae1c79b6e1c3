//! Simple profiling guards backed by global atomic counters
//!
//! Lightweight timing for the decision pipeline without changing function
//! signatures. Enable with environment variable: SNAKE_PROFILE=1

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

/// Profiled sections of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    PathSearch,
    SafetyCheck,
    Decision,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::PathSearch, Category::SafetyCheck, Category::Decision];

    fn index(self) -> usize {
        match self {
            Category::PathSearch => 0,
            Category::SafetyCheck => 1,
            Category::Decision => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::PathSearch => "path_search",
            Category::SafetyCheck => "safety_check",
            Category::Decision => "decision",
        }
    }
}

static TOTAL_MICROS: [AtomicU64; 3] = [AtomicU64::new(0), AtomicU64::new(0), AtomicU64::new(0)];
static CALL_COUNTS: [AtomicUsize; 3] = [AtomicUsize::new(0), AtomicUsize::new(0), AtomicUsize::new(0)];

static ENABLED: OnceLock<bool> = OnceLock::new();

#[inline]
pub fn is_profiling_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("SNAKE_PROFILE").is_ok())
}

pub struct ProfileGuard {
    start: Instant,
    category: Category,
}

impl ProfileGuard {
    pub fn new(category: Category) -> Option<Self> {
        if is_profiling_enabled() {
            Some(ProfileGuard {
                start: Instant::now(),
                category,
            })
        } else {
            None
        }
    }
}

impl Drop for ProfileGuard {
    fn drop(&mut self) {
        record(self.category, self.start.elapsed().as_micros() as u64);
    }
}

/// Adds one timed call to the global counters
pub fn record(category: Category, micros: u64) {
    let idx = category.index();
    TOTAL_MICROS[idx].fetch_add(micros, Ordering::Relaxed);
    CALL_COUNTS[idx].fetch_add(1, Ordering::Relaxed);
}

/// Point-in-time copy of one category's counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: Category,
    pub calls: usize,
    pub total_micros: u64,
}

impl CategoryStats {
    pub fn average_micros(&self) -> f64 {
        if self.calls == 0 {
            0.0
        } else {
            self.total_micros as f64 / self.calls as f64
        }
    }
}

pub fn snapshot() -> Vec<CategoryStats> {
    Category::ALL
        .iter()
        .map(|&category| CategoryStats {
            category,
            calls: CALL_COUNTS[category.index()].load(Ordering::Relaxed),
            total_micros: TOTAL_MICROS[category.index()].load(Ordering::Relaxed),
        })
        .collect()
}

pub fn reset() {
    for idx in 0..Category::ALL.len() {
        TOTAL_MICROS[idx].store(0, Ordering::Relaxed);
        CALL_COUNTS[idx].store(0, Ordering::Relaxed);
    }
}

/// Prints the accumulated counters to stderr
pub fn print_report() {
    eprintln!("─── profile ───────────────────────────────────────────────");
    for stats in snapshot() {
        eprintln!(
            "{:<14} calls: {:>8}  total: {:>10}µs  avg: {:>8.1}µs",
            stats.category.label(),
            stats.calls,
            stats.total_micros,
            stats.average_micros()
        );
    }
}
