//! Unit tests for ta-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CrossingId, NodeId, SegmentId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(SegmentId::INVALID.0, u32::MAX);
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(CrossingId(1_234_567).to_string(), "crossing 1234567");
    }
}

#[cfg(test)]
mod area {
    use crate::AreaId;

    #[test]
    fn zero_padded_display() {
        assert_eq!(AreaId(1).to_string(), "0001");
        assert_eq!(AreaId(1370).code(), "1370");
    }

    #[test]
    fn parses_padded_and_unpadded() {
        assert_eq!("0007".parse::<AreaId>().unwrap(), AreaId(7));
        assert_eq!("7".parse::<AreaId>().unwrap(), AreaId(7));
        assert_eq!(" 12 ".parse::<AreaId>().unwrap(), AreaId(12));
    }

    #[test]
    fn rejects_non_numeric() {
        assert!("".parse::<AreaId>().is_err());
        assert!("12a".parse::<AreaId>().is_err());
        assert!("-3".parse::<AreaId>().is_err());
    }

    #[test]
    fn numeric_order_matches_padded_order() {
        let mut ids = vec![AreaId(10), AreaId(2), AreaId(100)];
        ids.sort();
        let codes: Vec<_> = ids.iter().map(|a| a.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort();
        assert_eq!(codes, sorted);
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn finiteness() {
        assert!(GeoPoint::new(16.37, 48.21).is_finite());
        assert!(!GeoPoint::new(f64::NAN, 48.21).is_finite());
        assert!(!GeoPoint::new(16.37, f64::INFINITY).is_finite());
    }

    #[test]
    fn lon_lat_order() {
        let p = GeoPoint::from((16.37, 48.21));
        assert_eq!(p.to_array(), [16.37, 48.21]);
    }
}

#[cfg(test)]
mod metric {
    use crate::{Metric, StreetCategory};

    #[test]
    fn category_codes() {
        assert_eq!(StreetCategory::from_code("G").unwrap(), StreetCategory::Local);
        assert_eq!(StreetCategory::from_code("L").unwrap(), StreetCategory::Main);
        assert_eq!(StreetCategory::from_code("B").unwrap(), StreetCategory::Federal);
        assert_eq!(StreetCategory::from_code("federal").unwrap(), StreetCategory::Federal);
        assert!(StreetCategory::from_code("X").is_err());
    }

    #[test]
    fn speed_limits() {
        assert_eq!(StreetCategory::Local.speed_kmh(), 30.0);
        assert_eq!(StreetCategory::Main.speed_kmh(), 50.0);
        assert_eq!(StreetCategory::Federal.speed_kmh(), 70.0);
    }

    #[test]
    fn travel_secs_at_30_kmh() {
        // 500 m at 30 km/h = 60 s
        assert!((StreetCategory::Local.travel_secs(500.0) - 60.0).abs() < 1e-9);
        // 1 km at 50 km/h = 72 s
        assert!((StreetCategory::Main.travel_secs(1_000.0) - 72.0).abs() < 1e-9);
    }

    #[test]
    fn metric_parse_and_display() {
        assert_eq!("distance".parse::<Metric>().unwrap(), Metric::Distance);
        assert_eq!("TRAVEL_TIME".parse::<Metric>().unwrap(), Metric::TravelTime);
        assert!("speed".parse::<Metric>().is_err());
        assert_eq!(Metric::TravelTime.to_string(), "travel_time");
        assert_eq!(Metric::default(), Metric::TravelTime);
    }
}

#[cfg(test)]
mod rng {
    use crate::SampleRng;

    const POOL: [u32; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

    fn draws(rng: &mut SampleRng, n: usize) -> Vec<u32> {
        (0..n).map(|_| *rng.choose(&POOL).unwrap()).collect()
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SampleRng::new(42);
        let mut b = SampleRng::new(42);
        assert_eq!(draws(&mut a, 16), draws(&mut b, 16));
    }

    #[test]
    fn query_streams_are_independent() {
        let mut q0 = SampleRng::for_query(42, 0);
        let mut q1 = SampleRng::for_query(42, 1);
        assert_ne!(draws(&mut q0, 16), draws(&mut q1, 16));
    }

    #[test]
    fn query_stream_is_reproducible() {
        let mut a = SampleRng::for_query(7, 3);
        let mut b = SampleRng::for_query(7, 3);
        assert_eq!(draws(&mut a, 8), draws(&mut b, 8));
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SampleRng::new(1);
        let empty: [u32; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}

#[cfg(test)]
mod config {
    use crate::StudyConfig;

    #[test]
    fn default_is_valid() {
        let cfg = StudyConfig::default();
        assert_eq!(cfg.sample_size, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_sample_size_rejected() {
        let cfg = StudyConfig { sample_size: 0, ..StudyConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_threads_rejected() {
        let cfg = StudyConfig { num_threads: Some(0), ..StudyConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
