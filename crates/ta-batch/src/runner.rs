//! Batch median-path attribution.
//!
//! # Per-trip randomness
//!
//! Trip `i` draws from `SampleRng::for_query(config.seed, i)`.  No RNG state
//! is shared between trips, so the `parallel` feature and the thread count
//! never change a result.

use std::collections::BTreeSet;

use ta_core::{AreaId, SampleRng, StudyConfig};
use ta_network::{DijkstraRouter, Router, StreetGraph};
use ta_sampling::{areas_by_metric, PathSampler, SamplingResult};

use crate::{BatchResult, Dataset, Trip, TripFailure};

/// Runs one median-path query per trip against a fixed street graph.
pub struct BatchRunner<'g, R: Router = DijkstraRouter> {
    sampler: PathSampler<'g, R>,
    config:  StudyConfig,
    areas:   BTreeSet<AreaId>,
}

impl<'g> BatchRunner<'g, DijkstraRouter> {
    /// Validate `config` and prepare a runner using Dijkstra routing.
    pub fn new(graph: &'g StreetGraph, config: StudyConfig) -> BatchResult<Self> {
        Self::with_router(graph, DijkstraRouter, config)
    }
}

impl<'g, R: Router> BatchRunner<'g, R> {
    pub fn with_router(graph: &'g StreetGraph, router: R, config: StudyConfig) -> BatchResult<Self> {
        config.validate()?;
        Ok(Self {
            sampler: PathSampler::with_router(graph, router),
            config,
            areas: graph.all_areas(),
        })
    }

    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Attribute every trip (up to `max_trips`) and collect the results.
    ///
    /// A trip that fails to sample or route is recorded in
    /// [`Dataset::failures`] and skipped; the batch continues.
    pub fn run(&self, trips: &[Trip]) -> BatchResult<Dataset> {
        let limit = self.config.max_trips.map_or(trips.len(), |m| m.min(trips.len()));
        let selected = &trips[..limit];

        let outcomes = self.execute(selected)?;

        let mut dataset = Dataset::new(self.areas.iter().copied().collect());
        for (index, (trip, outcome)) in selected.iter().zip(outcomes).enumerate() {
            match outcome {
                Ok(row) => dataset.push(row, trip.target),
                Err(error) => {
                    log::warn!("trip #{index} {} -> {} skipped: {error}", trip.source, trip.destination);
                    dataset.failures.push(TripFailure { index, trip: *trip, error });
                }
            }
        }

        log::info!(
            "batch finished: {} of {} trips attributed over {} areas",
            dataset.len(),
            selected.len(),
            dataset.columns.len()
        );
        Ok(dataset)
    }

    /// The reindexed attribution vector of a single trip.
    pub fn run_trip(&self, index: usize, trip: &Trip) -> BatchResult<Vec<f64>> {
        Ok(self.attribute(index, trip)?)
    }

    fn attribute(&self, index: usize, trip: &Trip) -> SamplingResult<Vec<f64>> {
        let mut rng = SampleRng::for_query(self.config.seed, index as u64);
        let median = self.sampler.median_path(
            trip.source,
            trip.destination,
            self.config.metric,
            self.config.sample_size,
            &mut rng,
        )?;
        let shares = areas_by_metric(self.sampler.graph(), &median.path, self.config.metric);
        Ok(shares.reindex(&self.areas))
    }

    #[cfg(not(feature = "parallel"))]
    fn execute(&self, trips: &[Trip]) -> BatchResult<Vec<SamplingResult<Vec<f64>>>> {
        Ok(trips.iter().enumerate().map(|(i, trip)| self.attribute(i, trip)).collect())
    }

    #[cfg(feature = "parallel")]
    fn execute(&self, trips: &[Trip]) -> BatchResult<Vec<SamplingResult<Vec<f64>>>> {
        use rayon::prelude::*;

        let run = || {
            trips
                .par_iter()
                .enumerate()
                .map(|(i, trip)| self.attribute(i, trip))
                .collect::<Vec<_>>()
        };

        match self.config.num_threads {
            None => Ok(run()),
            Some(n) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| ta_core::CoreError::Config(e.to_string()))?;
                Ok(pool.install(run))
            }
        }
    }
}
