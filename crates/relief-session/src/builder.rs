//! Fluent builder for constructing a [`ReliefSession`].

use relief_core::ReliefConfig;
use relief_network::{DijkstraPathFinder, NetworkModel, PathFinder};
use relief_priority::PriorityEngine;

use crate::{ReliefSession, SessionResult};

/// Fluent builder for [`ReliefSession<P>`].
///
/// | Method              | Default                |
/// |---------------------|------------------------|
/// | `.path_finder(p)`   | [`DijkstraPathFinder`] |
///
/// # Example
///
/// ```rust,ignore
/// let session = SessionBuilder::new(ReliefConfig::legacy_desktop())
///     .path_finder(DijkstraPathFinder)
///     .build()?;
/// ```
pub struct SessionBuilder<P: PathFinder = DijkstraPathFinder> {
    config: ReliefConfig,
    finder: P,
}

impl SessionBuilder<DijkstraPathFinder> {
    pub fn new(config: ReliefConfig) -> Self {
        Self { config, finder: DijkstraPathFinder }
    }
}

impl<P: PathFinder> SessionBuilder<P> {
    /// Replace the routing algorithm.
    pub fn path_finder<Q: PathFinder>(self, finder: Q) -> SessionBuilder<Q> {
        SessionBuilder { config: self.config, finder }
    }

    /// Validate the config and create an empty network holding only the
    /// relief center.
    pub fn build(self) -> SessionResult<ReliefSession<P>> {
        self.config.validate()?;
        let engine = PriorityEngine::from_config(&self.config)?;
        let network = NetworkModel::new(&self.config)?;

        Ok(ReliefSession {
            config: self.config,
            network,
            engine,
            finder: self.finder,
        })
    }
}
