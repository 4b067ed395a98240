//! Fluent builder for constructing a [`Sim`].

use af_core::SolveConfig;
use af_graph::FarmGraph;
use af_route::select_paths;
use af_sched::{AntAssignment, TurnPlanner};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - a built [`FarmGraph`]
/// - the colony size
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                |
/// |---------------|------------------------|
/// | `.config(c)`  | `SolveConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(&graph, ants)
///     .config(SolveConfig { max_path_rooms: Some(8), ..Default::default() })
///     .build()?;
/// let report = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<'a> {
    graph: &'a FarmGraph,
    ants: u32,
    config: SolveConfig,
}

impl<'a> SimBuilder<'a> {
    pub fn new(graph: &'a FarmGraph, ants: u32) -> Self {
        Self {
            graph,
            ants,
            config: SolveConfig::default(),
        }
    }

    /// Override the path-search configuration.
    pub fn config(mut self, config: SolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Select paths, assign ants, and return a ready-to-run [`Sim`].
    ///
    /// Fails if the configuration is invalid or no start-to-end route exists.
    /// A disconnected farm is rejected even for a colony of zero ants — an
    /// unroutable farm is an input error, not an empty schedule.
    pub fn build(self) -> SimResult<Sim<'a>> {
        self.config
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let set = select_paths(self.graph, self.ants, &self.config)?;
        let assignment = AntAssignment::new(&set, self.ants)?;
        let planner = TurnPlanner::new(&set, &assignment);
        Ok(Sim::new(self.graph, planner, self.ants))
    }
}
