//! Unit tests for ta-batch.

#[cfg(test)]
mod helpers {
    use ta_areas::AreaCatalog;
    use ta_core::{AreaId, CrossingId, GeoPoint};
    use ta_network::{StreetGraph, StreetGraphBuilder};

    use crate::Trip;

    fn rect(x0: f64, x1: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(x0, 0.0),
            GeoPoint::new(x1, 0.0),
            GeoPoint::new(x1, 1.0),
            GeoPoint::new(x0, 1.0),
        ]
    }

    /// `0001` = [0,1]×[0,1], `0002` = [1,2]×[0,1], `0003` = [5,6]×[0,1].
    pub fn catalog() -> AreaCatalog {
        AreaCatalog::from_rings([
            (AreaId(1), rect(0.0, 1.0)),
            (AreaId(2), rect(1.0, 2.0)),
            (AreaId(3), rect(5.0, 6.0)),
        ])
        .unwrap()
    }

    /// One crossing per area joined by a single 100 m / 10 s segment.
    pub fn pair() -> StreetGraph {
        let mut b = StreetGraphBuilder::new();
        b.add_crossing(CrossingId(1), GeoPoint::new(0.5, 0.5));
        b.add_crossing(CrossingId(2), GeoPoint::new(1.5, 0.5));
        b.add_segment(CrossingId(1), CrossingId(2), 100.0, 10.0);
        b.build(&catalog()).unwrap()
    }

    /// Chain 1–2–3–4–5–6, three crossings in each of `0001` and `0002`.
    pub fn chain() -> StreetGraph {
        let mut b = StreetGraphBuilder::new();
        for (id, x) in [(1, 0.2), (2, 0.5), (3, 0.8), (4, 1.2), (5, 1.5), (6, 1.8)] {
            b.add_crossing(CrossingId(id), GeoPoint::new(x, 0.5));
        }
        for id in 1..6 {
            let len = 40.0 + 15.0 * id as f64;
            b.add_segment(CrossingId(id), CrossingId(id + 1), len, len / 9.0);
        }
        b.build(&catalog()).unwrap()
    }

    pub fn trip(source: u32, destination: u32, target: f64) -> Trip {
        Trip { source: AreaId(source), destination: AreaId(destination), target }
    }
}

// ── Trip table ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trips {
    use std::collections::BTreeSet;
    use std::io::{Cursor, Write};

    use ta_core::AreaId;

    use super::helpers::trip;
    use crate::{load_trips_csv, load_trips_reader, retain_known_areas, BatchError};

    const TRIPS: &str = "sourceid,dstid,hod,mean_travel_time\n\
                         1,2,8,947.5\n\
                         0002,0001,8,951\n";

    #[test]
    fn parses_and_pads() {
        let trips = load_trips_reader(Cursor::new(TRIPS)).unwrap();
        assert_eq!(trips, [trip(1, 2, 947.5), trip(2, 1, 951.0)]);
        assert_eq!(trips[1].source.code(), "0002");
    }

    #[test]
    fn bad_area_is_parse_error() {
        let text = "sourceid,dstid,mean_travel_time\nA1,2,10\n";
        assert!(matches!(load_trips_reader(Cursor::new(text)), Err(BatchError::Parse(_))));
    }

    #[test]
    fn missing_target_column() {
        let text = "sourceid,dstid\n1,2\n";
        assert!(matches!(load_trips_reader(Cursor::new(text)), Err(BatchError::Parse(_))));
    }

    #[test]
    fn unknown_areas_dropped() {
        let known: BTreeSet<_> = [AreaId(1), AreaId(2)].into_iter().collect();
        let kept = retain_known_areas(
            vec![trip(1, 2, 1.0), trip(1, 9999, 2.0), trip(3, 2, 3.0), trip(2, 2, 4.0)],
            &known,
        );
        assert_eq!(kept, [trip(1, 2, 1.0), trip(2, 2, 4.0)]);
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TRIPS.as_bytes()).unwrap();
        assert_eq!(load_trips_csv(file.path()).unwrap().len(), 2);
    }
}

// ── Batch runner ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod runner {
    use ta_core::{AreaId, Metric, SampleRng, StudyConfig};
    use ta_sampling::{PathSampler, SamplingError};

    use super::helpers::{chain, pair, trip};
    use crate::{BatchError, BatchRunner};

    #[test]
    fn border_trip_is_split_evenly() {
        let g = pair();
        let runner = BatchRunner::new(&g, StudyConfig::default()).unwrap();
        let ds = runner.run(&[trip(1, 2, 900.0), trip(2, 2, 60.0)]).unwrap();

        assert_eq!(ds.columns, [AreaId(1), AreaId(2)]);
        assert_eq!(ds.rows, [vec![5.0, 5.0], vec![0.0, 0.0]]);
        assert_eq!(ds.targets, [900.0, 60.0]);
        assert!(ds.failures.is_empty());
    }

    #[test]
    fn distance_metric() {
        let g = pair();
        let config = StudyConfig { metric: Metric::Distance, ..StudyConfig::default() };
        let ds = BatchRunner::new(&g, config).unwrap().run(&[trip(2, 1, 1.0)]).unwrap();
        assert_eq!(ds.rows[0], [50.0, 50.0]);
    }

    #[test]
    fn failed_trip_is_recorded_and_skipped() {
        let g = pair();
        let runner = BatchRunner::new(&g, StudyConfig::default()).unwrap();
        let ds = runner
            .run(&[trip(1, 2, 1.0), trip(1, 9999, 2.0), trip(2, 1, 3.0)])
            .unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.targets, [1.0, 3.0]);
        assert_eq!(ds.failures.len(), 1);
        assert_eq!(ds.failures[0].index, 1);
        assert!(matches!(ds.failures[0].error, SamplingError::EmptyArea(AreaId(9999))));
    }

    #[test]
    fn max_trips_limits_the_batch() {
        let g = pair();
        let config = StudyConfig { max_trips: Some(1), ..StudyConfig::default() };
        let ds = BatchRunner::new(&g, config)
            .unwrap()
            .run(&[trip(1, 2, 1.0), trip(2, 1, 2.0)])
            .unwrap();
        assert_eq!(ds.targets, [1.0]);
    }

    #[test]
    fn rows_conserve_the_median_cost() {
        let g = chain();
        let trips = [trip(1, 2, 1.0), trip(2, 1, 1.0), trip(1, 1, 1.0)];
        let runner = BatchRunner::new(&g, StudyConfig { seed: 11, ..StudyConfig::default() }).unwrap();
        let ds = runner.run(&trips).unwrap();
        assert_eq!(ds.len(), 3);

        let sampler = PathSampler::new(&g);
        for (i, t) in trips.iter().enumerate() {
            let mut rng = SampleRng::for_query(11, i as u64);
            let median = sampler
                .median_path(t.source, t.destination, Metric::TravelTime, 3, &mut rng)
                .unwrap();
            let total: f64 = ds.rows[i].iter().sum();
            assert!((total - median.cost).abs() < 1e-9, "trip {i}: {total} vs {}", median.cost);
        }
        // A trip within 0001 never credits 0002.
        assert_eq!(ds.rows[2][1], 0.0);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn thread_count_does_not_change_rows() {
        let g = chain();
        let trips: Vec<_> = (0..12)
            .map(|i| if i % 3 == 0 { trip(1, 1, 1.0) } else if i % 2 == 0 { trip(1, 2, 1.0) } else { trip(2, 1, 1.0) })
            .collect();
        let run = |num_threads| {
            let config = StudyConfig { seed: 5, num_threads, ..StudyConfig::default() };
            BatchRunner::new(&g, config).unwrap().run(&trips).unwrap().rows
        };
        let single = run(Some(1));
        assert_eq!(single.len(), trips.len());
        assert_eq!(single, run(Some(4)));
        assert_eq!(single, run(None));
    }

    #[test]
    fn same_seed_same_dataset() {
        let g = chain();
        let trips = [trip(1, 2, 1.0), trip(2, 1, 2.0), trip(1, 2, 3.0)];
        let config = StudyConfig { seed: 3, ..StudyConfig::default() };
        let a = BatchRunner::new(&g, config.clone()).unwrap().run(&trips).unwrap();
        let b = BatchRunner::new(&g, config).unwrap().run(&trips).unwrap();
        assert_eq!(a.rows, b.rows);
    }

    #[test]
    fn single_trip_matches_batch_row() {
        let g = chain();
        let trips = [trip(2, 1, 1.0), trip(1, 2, 2.0)];
        let runner = BatchRunner::new(&g, StudyConfig { seed: 8, ..StudyConfig::default() }).unwrap();
        let ds = runner.run(&trips).unwrap();
        assert_eq!(runner.run_trip(1, &trips[1]).unwrap(), ds.rows[1]);
    }

    #[test]
    fn invalid_config_rejected() {
        let g = pair();
        let config = StudyConfig { sample_size: 0, ..StudyConfig::default() };
        assert!(matches!(BatchRunner::new(&g, config), Err(BatchError::Config(_))));
    }
}

// ── CSV output ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_output {
    use tempfile::TempDir;

    use ta_core::AreaId;

    use crate::{BatchError, Dataset, DatasetWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn dataset() -> Dataset {
        let mut ds = Dataset::new(vec![AreaId(1), AreaId(12)]);
        ds.push(vec![5.0, 0.5], 900.0);
        ds.push(vec![0.0, 7.25], 61.5);
        ds
    }

    fn read(path: std::path::PathBuf) -> (Vec<String>, Vec<Vec<String>>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = DatasetWriter::new(dir.path(), &[AreaId(1), AreaId(12)]).unwrap();
        w.finish().unwrap();

        let (features, _) = read(dir.path().join("features.csv"));
        assert_eq!(features, ["0001", "0012"]);
        let (targets, _) = read(dir.path().join("targets.csv"));
        assert_eq!(targets, ["mean_travel_time"]);
    }

    #[test]
    fn dataset_round_trip() {
        let dir = tmp();
        let ds = dataset();
        let mut w = DatasetWriter::new(dir.path(), &ds.columns).unwrap();
        w.write_dataset(&ds).unwrap();

        let (_, rows) = read(dir.path().join("features.csv"));
        assert_eq!(rows, [vec!["5", "0.5"], vec!["0", "7.25"]]);
        let (_, targets) = read(dir.path().join("targets.csv"));
        assert_eq!(targets, [vec!["900"], vec!["61.5"]]);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = DatasetWriter::new(dir.path(), &[AreaId(1)]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn wrong_row_width_rejected() {
        let dir = tmp();
        let mut w = DatasetWriter::new(dir.path(), &[AreaId(1), AreaId(2)]).unwrap();
        assert!(matches!(
            w.write_row(&[1.0], 2.0),
            Err(BatchError::RowWidth { got: 1, expected: 2 })
        ));
    }

    #[test]
    fn column_lookup() {
        let ds = dataset();
        assert_eq!(ds.column(AreaId(12)), Some(1));
        assert_eq!(ds.column(AreaId(3)), None);
    }
}
