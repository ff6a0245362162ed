//! Hit-map aggregation

use crate::sim::HitMap;

use tracing::info;

/// Per-base and overall success rates of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    per_base: Vec<(usize, f64)>,
    overall: f64,
}

impl Summary {
    /// Aggregate a hit-map.
    pub fn from_hits(hits: &HitMap) -> Self {
        let mut per_base = Vec::with_capacity(hits.outer_count());
        let mut successes = 0usize;
        let mut attempts = 0usize;

        for (base, outcomes) in hits.iter() {
            let hit = outcomes.iter().filter(|hit| **hit).count();
            successes += hit;
            attempts += outcomes.len();

            let rate = if outcomes.is_empty() {
                0.0
            } else {
                hit as f64 / outcomes.len() as f64
            };
            per_base.push((base, rate));
        }

        let overall = if attempts == 0 {
            0.0
        } else {
            successes as f64 / attempts as f64
        };

        Self { per_base, overall }
    }

    /// Success rate per outer base, in base order.
    pub fn per_base_rates(&self) -> &[(usize, f64)] {
        &self.per_base
    }

    /// Success rate across the whole grid.
    pub const fn overall_rate(&self) -> f64 {
        self.overall
    }

    /// Emit the sweep results through the log subscriber.
    pub fn log(&self) {
        for (base, rate) in &self.per_base {
            info!("base {base:#x}: success rate {:.2}%", rate * 100.0);
        }
        info!("total success rate: {:.2}%", self.overall * 100.0);
    }
}
