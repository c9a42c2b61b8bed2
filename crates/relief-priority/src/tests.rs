//! Unit tests for relief-priority.

#[cfg(test)]
mod helpers {
    use relief_core::{EARTH_RADIUS_KM, GeoPoint, ReliefConfig};
    use relief_network::NetworkModel;

    pub const ORIGIN: GeoPoint = GeoPoint::new(0.0, 0.0);

    /// A point `km` due north of the origin.  Along a meridian the haversine
    /// distance is exactly the arc length, so scores are predictable.
    pub fn north_of_origin(km: f64) -> GeoPoint {
        GeoPoint::new((km / EARTH_RADIUS_KM).to_degrees(), 0.0)
    }

    pub fn model_at_origin() -> NetworkModel {
        let cfg = ReliefConfig { center: ORIGIN, ..Default::default() };
        NetworkModel::new(&cfg).unwrap()
    }

    pub fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}

#[cfg(test)]
mod scoring {
    use relief_core::{CoreError, Severity};

    use crate::{PriorityEngine, PriorityError, priority_score};

    #[test]
    fn formula() {
        let s = |v| Severity::new(v).unwrap();
        assert_eq!(priority_score(s(9), 5.0, 1.0), 85.0);
        assert_eq!(priority_score(s(3), 2.0, 1.0), 28.0);
        assert_eq!(priority_score(s(10), 50.0, 0.1), 95.0);
        assert_eq!(priority_score(s(1), 0.0, 1.0), 10.0);
    }

    #[test]
    fn penalty_factor_validated() {
        assert_eq!(
            PriorityEngine::new(-0.5),
            Err(PriorityError::Core(CoreError::InvalidPenaltyFactor(-0.5)))
        );
        assert!(PriorityEngine::new(f64::INFINITY).is_err());
        assert_eq!(PriorityEngine::new(0.0).unwrap().distance_penalty_factor(), 0.0);
        assert_eq!(PriorityEngine::default().distance_penalty_factor(), 1.0);
    }
}

#[cfg(test)]
mod ranking {
    use relief_core::{GeoPoint, ReliefConfig, Zone};
    use relief_network::NetworkModel;

    use super::helpers::{ORIGIN, close, model_at_origin, north_of_origin};
    use crate::{PriorityEngine, PriorityError, compute_priority};

    #[test]
    fn severe_near_area_ranks_first() {
        let mut net = model_at_origin();
        net.add_area("B", 3, north_of_origin(2.0)).unwrap();
        net.add_area("A", 9, north_of_origin(5.0)).unwrap();

        let ranked = compute_priority(&net, ORIGIN, 1.0).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert!(close(ranked[0].score, 85.0), "A = {}", ranked[0].score);
        assert!(close(ranked[1].score, 28.0), "B = {}", ranked[1].score);
        assert!(close(ranked[0].distance_km, 5.0));
    }

    #[test]
    fn empty_network_is_an_error() {
        let net = model_at_origin();
        assert_eq!(PriorityEngine::default().compute(&net), Err(PriorityError::EmptyNetwork));
    }

    #[test]
    fn one_record_per_area_sorted_descending() {
        let mut net = model_at_origin();
        for (i, sev) in [4, 9, 1, 7, 7, 10, 2].into_iter().enumerate() {
            net.add_area(format!("Area {i}"), sev, north_of_origin(i as f64 * 3.0)).unwrap();
        }
        let ranked = PriorityEngine::default().compute(&net).unwrap();
        assert_eq!(ranked.len(), net.area_count());
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut net = model_at_origin();
        // Same severity, same spot → identical scores.
        for name in ["Delta", "Alpha", "Charlie", "Bravo"] {
            net.add_area(name, 6, GeoPoint::new(0.5, 0.5)).unwrap();
        }
        net.add_area("Echo", 10, GeoPoint::new(0.5, 0.5)).unwrap();

        let ranked = PriorityEngine::default().compute(&net).unwrap();
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Echo", "Delta", "Alpha", "Charlie", "Bravo"]);
    }

    #[test]
    fn idempotent() {
        let mut net = model_at_origin();
        net.add_area("A", 5, north_of_origin(12.0)).unwrap();
        net.add_area("B", 8, north_of_origin(40.0)).unwrap();
        net.add_area("C", 2, north_of_origin(1.0)).unwrap();

        let engine = PriorityEngine::default();
        assert_eq!(engine.compute(&net).unwrap(), engine.compute(&net).unwrap());
    }

    #[test]
    fn penalty_factor_changes_order() {
        let mut net = model_at_origin();
        net.add_area("Far severe", 9, north_of_origin(100.0)).unwrap();
        net.add_area("Near mild", 4, north_of_origin(1.0)).unwrap();

        // factor 1.0: 90 - 100 = -10  vs  40 - 1 = 39
        let direct = compute_priority(&net, ORIGIN, 1.0).unwrap();
        assert_eq!(direct[0].name, "Near mild");

        // factor 0.1: 90 - 10 = 80  vs  40 - 0.1 = 39.9
        let scaled = compute_priority(&net, ORIGIN, 0.1).unwrap();
        assert_eq!(scaled[0].name, "Far severe");
    }

    #[test]
    fn uses_model_center_by_default() {
        let cfg = ReliefConfig::legacy_desktop();
        let mut net = NetworkModel::new(&cfg).unwrap();
        net.add_area_auto("A", 8).unwrap();

        let ranked = PriorityEngine::from_config(&cfg).unwrap().compute(&net).unwrap();
        assert_eq!(ranked[0].distance_km, 0.0);
        assert_eq!(ranked[0].score, 80.0);
    }

    #[test]
    fn served_flag_copied() {
        let mut net = model_at_origin();
        net.add_area("A", 5, north_of_origin(1.0)).unwrap();
        net.add_area("B", 5, north_of_origin(2.0)).unwrap();
        net.set_served("B", true).unwrap();

        let ranked = PriorityEngine::default().compute(&net).unwrap();
        let served: Vec<_> = ranked.iter().map(|r| (r.name.as_str(), r.served)).collect();
        assert_eq!(served, [("A", false), ("B", true)]);
    }

    #[test]
    fn records_expose_zone() {
        let mut net = model_at_origin();
        net.add_area("H", 8, ORIGIN).unwrap();
        net.add_area("M", 5, ORIGIN).unwrap();
        net.add_area("L", 4, ORIGIN).unwrap();

        let ranked = PriorityEngine::default().compute(&net).unwrap();
        let zones: Vec<_> = ranked.iter().map(|r| r.zone()).collect();
        assert_eq!(zones, [Zone::High, Zone::Medium, Zone::Low]);
    }
}
