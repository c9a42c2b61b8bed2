//! The `ReliefSession` struct and the allocation pass.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};

use relief_core::ReliefConfig;
use relief_input::{ReliefInput, load_input_file};
use relief_network::{DijkstraPathFinder, NetworkError, NetworkModel, PathFinder, Route};
use relief_priority::{PriorityEngine, PriorityRecord};
use relief_report::{PathOutcome, Report, build_report};

use crate::SessionResult;

/// Which ranked areas get a shortest path in [`ReliefSession::allocate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PathSelection {
    /// Ranking only; every entry is `NotRequested`.
    None,
    /// Only the highest-priority area.
    TopOnly,
    /// Every ranked area.
    #[default]
    All,
}

/// One relief-allocation workspace.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].
pub struct ReliefSession<P: PathFinder = DijkstraPathFinder> {
    pub(crate) config:  ReliefConfig,
    pub(crate) network: NetworkModel,
    pub(crate) engine:  PriorityEngine,
    pub(crate) finder:  P,
}

impl<P: PathFinder> ReliefSession<P> {
    pub fn config(&self) -> &ReliefConfig {
        &self.config
    }

    pub fn network(&self) -> &NetworkModel {
        &self.network
    }

    /// Mutable access for adding areas, coordinates and roads directly.
    pub fn network_mut(&mut self) -> &mut NetworkModel {
        &mut self.network
    }

    pub fn path_finder(&self) -> &P {
        &self.finder
    }

    /// Feed parsed batch input into the network.
    ///
    /// All or nothing: on error the network is left as it was.
    pub fn load_input(&mut self, input: &ReliefInput) -> SessionResult<()> {
        let mut staged = self.network.clone();
        input.apply(&mut staged)?;
        self.network = staged;
        Ok(())
    }

    /// Parse `path` and feed it into the network.
    pub fn load_input_file(&mut self, path: &Path) -> SessionResult<()> {
        let input = load_input_file(path)?;
        info!("loading {}", path.display());
        self.load_input(&input)
    }

    /// Every area ranked by priority score, highest first.
    pub fn prioritize(&self) -> SessionResult<Vec<PriorityRecord>> {
        Ok(self.engine.compute(&self.network)?)
    }

    /// Shortest route from the relief center to `area`.
    pub fn route_to(&self, area: &str) -> SessionResult<Route> {
        Ok(self
            .finder
            .shortest_path(&self.network, self.network.center_name(), area)?)
    }

    /// Rank every area, route to the ones `selection` picks and assemble
    /// the report.
    pub fn allocate(&self, selection: PathSelection) -> SessionResult<Report> {
        let ranked = self.prioritize()?;
        let paths = self.route_ranked(&ranked, selection)?;

        let report = build_report(&ranked, &paths);
        info!(
            "allocation: {} areas ranked, {} routed, {} unreachable",
            report.entries.len(),
            paths.len(),
            report.unreachable().count()
        );
        Ok(report)
    }

    /// Deliver relief in priority order.
    ///
    /// Every area the center can reach is routed and marked served in the
    /// network.  Unreachable areas are left as they were.  The returned
    /// report carries the updated `served` flags.
    pub fn dispatch(&mut self) -> SessionResult<Report> {
        let mut ranked = self.prioritize()?;
        let paths = self.route_ranked(&ranked, PathSelection::All)?;

        for record in &mut ranked {
            if let Some(PathOutcome::Found { total_km, .. }) = paths.get(&record.name) {
                self.network.set_served(&record.name, true)?;
                record.served = true;
                debug!("relief delivered to {:?} ({total_km:.1} km)", record.name);
            }
        }

        let report = build_report(&ranked, &paths);
        info!(
            "dispatch: {} of {} areas served, {} unreachable",
            report.served_count(),
            report.entries.len(),
            report.unreachable().count()
        );
        Ok(report)
    }

    /// Route from the relief center to the ranked areas `selection` picks.
    /// Unreachable areas map to `NoPath`; other routing errors are returned.
    fn route_ranked(
        &self,
        ranked: &[PriorityRecord],
        selection: PathSelection,
    ) -> SessionResult<HashMap<String, PathOutcome>> {
        let targets: Vec<&str> = match selection {
            PathSelection::None => Vec::new(),
            PathSelection::TopOnly => ranked.iter().take(1).map(|r| r.name.as_str()).collect(),
            PathSelection::All => ranked.iter().map(|r| r.name.as_str()).collect(),
        };

        let mut paths = HashMap::with_capacity(targets.len());
        if targets.is_empty() {
            return Ok(paths);
        }

        let routes = self
            .finder
            .shortest_paths_from(&self.network, self.network.center_name(), &targets)?;
        for (name, result) in routes {
            let outcome = match result {
                Ok(route) => PathOutcome::from(route),
                Err(NetworkError::NoPathFound { .. }) => {
                    debug!("{name:?} is unreachable from the relief center");
                    PathOutcome::NoPath
                }
                Err(e) => return Err(e.into()),
            };
            paths.insert(name, outcome);
        }
        Ok(paths)
    }
}
