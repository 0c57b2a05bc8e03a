//! Memoization of natal charts.
//!
//! Chart computation is pure, so a cached chart is identical to a freshly
//! computed one. Floating-point inputs are keyed by their bit patterns.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::chart::{BirthInput, NatalChart, natal_chart};
use crate::config::ChartConfig;
use crate::error::ChartError;

/// Hit/miss counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ChartKey {
    date: (i32, u32, u32, u32, u32, u64),
    latitude_bits: u64,
    longitude_bits: u64,
    utc_offset_minutes: i32,
    config: ChartConfig,
}

impl ChartKey {
    fn new(birth: &BirthInput, config: &ChartConfig) -> Self {
        let d = &birth.datetime;
        Self {
            date: (
                d.year(),
                d.month(),
                d.day(),
                d.hour(),
                d.minute(),
                d.second().to_bits(),
            ),
            latitude_bits: birth.latitude_deg.to_bits(),
            longitude_bits: birth.longitude_deg.to_bits(),
            utc_offset_minutes: birth.utc_offset_minutes,
            config: *config,
        }
    }
}

struct Inner {
    charts: HashMap<ChartKey, NatalChart>,
    stats: CacheStats,
}

/// Thread-safe chart cache with a fixed capacity.
///
/// When the capacity is reached the cache is emptied before the next
/// insert. Errors are never cached.
pub struct ChartCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl ChartCache {
    /// Create a cache holding at most `capacity` charts (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            inner: Mutex::new(Inner {
                charts: HashMap::with_capacity(capacity.min(64)),
                stats: CacheStats::default(),
            }),
        }
    }

    /// Return the cached chart or compute and remember it.
    pub fn natal_chart(
        &self,
        birth: &BirthInput,
        config: &ChartConfig,
    ) -> Result<NatalChart, ChartError> {
        let key = ChartKey::new(birth, config);
        {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(chart) = inner.charts.get(&key).cloned() {
                inner.stats.hits += 1;
                return Ok(chart);
            }
            inner.stats.misses += 1;
        }

        let chart = natal_chart(birth, config)?;

        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.charts.len() >= self.capacity {
            log::debug!("chart cache full ({} entries), clearing", inner.charts.len());
            inner.charts.clear();
        }
        inner.charts.insert(key, chart.clone());
        Ok(chart)
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).stats
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .charts
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .charts
            .clear();
    }
}

impl Default for ChartCache {
    fn default() -> Self {
        Self::new(256)
    }
}
