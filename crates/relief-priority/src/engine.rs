//! Priority scoring and ranking.

use log::debug;

use relief_core::config::validate_penalty_factor;
use relief_core::{GeoPoint, ReliefConfig, Severity};
use relief_network::NetworkModel;

use crate::{PriorityError, PriorityRecord, PriorityResult};

/// `severity * 10 - distance_km * factor`.
#[inline]
pub fn priority_score(severity: Severity, distance_km: f64, factor: f64) -> f64 {
    f64::from(severity.get()) * 10.0 - distance_km * factor
}

/// Ranks every area in a [`NetworkModel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityEngine {
    distance_penalty_factor: f64,
}

impl PriorityEngine {
    /// Fails with `InvalidPenaltyFactor` unless `factor` is finite and ≥ 0.
    pub fn new(distance_penalty_factor: f64) -> PriorityResult<Self> {
        Ok(Self { distance_penalty_factor: validate_penalty_factor(distance_penalty_factor)? })
    }

    pub fn from_config(config: &ReliefConfig) -> PriorityResult<Self> {
        Self::new(config.distance_penalty_factor)
    }

    pub fn distance_penalty_factor(&self) -> f64 {
        self.distance_penalty_factor
    }

    /// Rank areas by distance from the model's own relief center.
    pub fn compute(&self, network: &NetworkModel) -> PriorityResult<Vec<PriorityRecord>> {
        self.compute_from(network, network.center())
    }

    /// Rank areas by distance from `center`.
    ///
    /// Returns one record per area, highest score first.  The sort is stable
    /// so equal scores stay in area insertion order.
    pub fn compute_from(
        &self,
        network: &NetworkModel,
        center: GeoPoint,
    ) -> PriorityResult<Vec<PriorityRecord>> {
        if network.is_empty() {
            return Err(PriorityError::EmptyNetwork);
        }

        let mut records = network
            .areas()
            .iter()
            .map(|area| -> PriorityResult<PriorityRecord> {
                let distance_km = center.distance_km(area.position)?;
                Ok(PriorityRecord {
                    name: area.name.clone(),
                    severity: area.severity,
                    distance_km,
                    score: priority_score(area.severity, distance_km, self.distance_penalty_factor),
                    position: area.position,
                    served: area.served,
                })
            })
            .collect::<PriorityResult<Vec<_>>>()?;

        records.sort_by(|a, b| b.score.total_cmp(&a.score));

        debug!(
            "ranked {} areas (penalty factor {}), top {:?}",
            records.len(),
            self.distance_penalty_factor,
            records[0].name
        );
        Ok(records)
    }
}

impl Default for PriorityEngine {
    fn default() -> Self {
        Self { distance_penalty_factor: 1.0 }
    }
}

/// Rank every area of `network` by distance from `center` with the given
/// penalty factor.
pub fn compute_priority(
    network: &NetworkModel,
    center: GeoPoint,
    distance_penalty_factor: f64,
) -> PriorityResult<Vec<PriorityRecord>> {
    PriorityEngine::new(distance_penalty_factor)?.compute_from(network, center)
}
