//! Memoizing risk calculator.
//!
//! Caches one result per distinct patient input in front of another
//! `RiskCalculator`. Intake forms produce a small set of repeated inputs,
//! so a bounded map is enough; no eviction order is kept.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::patient::PatientInput;
use crate::domain::risk::RiskResult;
use crate::ports::RiskCalculator;

/// Default number of cached inputs.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Exact identity of a patient input. Reals are keyed by bit pattern so that
/// `-0.0`, `0.0` and each NaN payload are distinct entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct InputKey {
    age: i32,
    male: bool,
    systolic_bp: i32,
    total_cholesterol: u64,
    hdl: u64,
    is_smoker: bool,
    has_diabetes: bool,
}

impl From<&PatientInput> for InputKey {
    fn from(input: &PatientInput) -> Self {
        Self {
            age: input.age,
            male: input.sex.is_male(),
            systolic_bp: input.systolic_bp,
            total_cholesterol: input.total_cholesterol.to_bits(),
            hdl: input.hdl.to_bits(),
            is_smoker: input.is_smoker,
            has_diabetes: input.has_diabetes,
        }
    }
}

/// Memoizing implementation of the RiskCalculator port.
///
/// Thread-safe via internal `Mutex`. When the cache reaches `capacity` it is
/// cleared before the next insert.
///
/// # Example
///
/// ```ignore
/// let calculator = MemoizedRiskCalculator::new(Arc::new(RiskScorer), 256);
/// let first = calculator.calculate(&input);  // miss
/// let second = calculator.calculate(&input); // hit
/// assert_eq!(first, second);
/// ```
pub struct MemoizedRiskCalculator {
    inner: Arc<dyn RiskCalculator>,
    capacity: usize,
    entries: Mutex<HashMap<InputKey, RiskResult>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoizedRiskCalculator {
    /// Wraps `inner`, caching at most `capacity` inputs (minimum 1).
    pub fn new(inner: Arc<dyn RiskCalculator>, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner,
            capacity,
            entries: Mutex::new(HashMap::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Maximum number of cached inputs.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of calls answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of calls forwarded to the wrapped calculator.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Number of cached inputs.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every cached result. Counters are kept.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // A poisoned map only ever holds complete entries, so it stays usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<InputKey, RiskResult>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RiskCalculator for MemoizedRiskCalculator {
    fn calculate(&self, input: &PatientInput) -> RiskResult {
        let key = InputKey::from(input);

        if let Some(result) = self.lock().get(&key).copied() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return result;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = self.inner.calculate(input);

        let mut entries = self.lock();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            debug!(capacity = self.capacity, "Risk cache full, clearing");
            entries.clear();
        }
        entries.insert(key, result);

        result
    }
}
