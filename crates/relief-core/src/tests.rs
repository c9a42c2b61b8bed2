//! Unit tests for relief-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn center_is_first() {
        assert_eq!(NodeId::CENTER, NodeId(0));
        assert!(NodeId::CENTER < NodeId(1));
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{CoreError, GeoPoint, distance_km};

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6129, 77.2295);
        assert_eq!(p.distance_km(p).unwrap(), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(28.6129, 77.2295);
        let b = GeoPoint::new(19.0760, 72.8777);
        assert_eq!(a.distance_km(b).unwrap(), b.distance_km(a).unwrap());
    }

    #[test]
    fn one_degree_of_latitude() {
        // 1° on a 6371 km sphere = 6371 * π / 180 ≈ 111.195 km
        let d = distance_km(30.0, -88.0, 31.0, -88.0).unwrap();
        assert!((d - 111.195).abs() < 0.01, "got {d}");
    }

    #[test]
    fn delhi_to_mumbai() {
        let d = distance_km(28.6129, 77.2295, 19.0760, 72.8777).unwrap();
        assert!((d - 1_150.0).abs() < 15.0, "got {d}");
    }

    #[test]
    fn non_finite_rejected() {
        let err = distance_km(f64::NAN, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, CoreError::NumericDomain { .. }));
        assert!(distance_km(0.0, 0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(distance_km(91.0, 0.0, 0.0, 0.0).is_err());
        assert!(distance_km(0.0, 0.0, 0.0, -180.5).is_err());
        // Boundaries are inclusive.
        assert!(distance_km(90.0, 180.0, -90.0, -180.0).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(28.61294, 77.2).to_string(), "(28.6129, 77.2000)");
    }
}

#[cfg(test)]
mod severity {
    use crate::{CoreError, Severity, Zone};

    #[test]
    fn range_enforced() {
        assert!(Severity::new(1).is_ok());
        assert!(Severity::new(10).is_ok());
        assert_eq!(Severity::new(0), Err(CoreError::InvalidSeverity(0)));
        assert_eq!(Severity::new(11), Err(CoreError::InvalidSeverity(11)));
        assert!(Severity::new(-3).is_err());
    }

    #[test]
    fn zone_boundaries() {
        let zone = |v| Severity::new(v).unwrap().zone();
        assert_eq!(zone(10), Zone::High);
        assert_eq!(zone(8), Zone::High);
        assert_eq!(zone(7), Zone::Medium);
        assert_eq!(zone(5), Zone::Medium);
        assert_eq!(zone(4), Zone::Low);
        assert_eq!(zone(1), Zone::Low);
    }

    #[test]
    fn zone_presentation_names() {
        assert_eq!(Zone::High.color(), "red");
        assert_eq!(Zone::Medium.legacy_name(), "YELLOW ZONE");
        assert_eq!(Zone::Low.to_string(), "low");
    }
}

#[cfg(test)]
mod config {
    use crate::{CenterLinkPolicy, CoordinatePolicy, CoreError, GeoPoint, ReliefConfig};

    #[test]
    fn default_is_valid() {
        let cfg = ReliefConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.distance_penalty_factor, 1.0);
        assert_eq!(cfg.center_links, CenterLinkPolicy::Manual);
        assert_eq!(cfg.center_name, "Relief Center");
    }

    #[test]
    fn legacy_desktop_grid_layout() {
        let cfg = ReliefConfig::legacy_desktop();
        assert!(cfg.validate().is_ok());
        let origin = cfg.center;

        let p0 = cfg.coordinate_policy.position_for(0);
        let p3 = cfg.coordinate_policy.position_for(3);
        let p4 = cfg.coordinate_policy.position_for(4);
        let p5 = cfg.coordinate_policy.position_for(5);

        assert_eq!(p0, origin);
        assert!((p3.lat - (origin.lat + 0.24)).abs() < 1e-9);
        assert_eq!(p3.lon, origin.lon);
        // Fifth area wraps to the next column.
        assert_eq!(p4.lat, origin.lat);
        assert!((p4.lon - (origin.lon + 0.08)).abs() < 1e-9);
        assert!((p5.lat - (origin.lat + 0.08)).abs() < 1e-9);
    }

    #[test]
    fn explicit_policy_uses_fallback() {
        let policy = CoordinatePolicy::default();
        assert_eq!(policy.position_for(0), GeoPoint::new(0.0, 0.0));
        assert_eq!(policy.position_for(17), GeoPoint::new(0.0, 0.0));
    }

    #[test]
    fn invalid_fields_rejected() {
        let cfg = ReliefConfig { distance_penalty_factor: -1.0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(CoreError::InvalidPenaltyFactor(-1.0)));

        let cfg = ReliefConfig { center_name: "  ".into(), ..Default::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));

        let cfg = ReliefConfig { center: GeoPoint::new(120.0, 0.0), ..Default::default() };
        assert!(matches!(cfg.validate(), Err(CoreError::NumericDomain { .. })));

        let cfg = ReliefConfig {
            coordinate_policy: CoordinatePolicy::Grid {
                origin:   GeoPoint::new(0.0, 0.0),
                step_deg: 0.1,
                rows:     0,
            },
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }
}

#[cfg(test)]
mod config_toml {
    use crate::{CenterLinkPolicy, CoordinatePolicy, ReliefConfig, Severity};

    #[test]
    fn partial_file_uses_defaults() {
        let cfg: ReliefConfig = toml::from_str("distance_penalty_factor = 0.1\n").unwrap();
        assert_eq!(cfg.distance_penalty_factor, 0.1);
        assert_eq!(cfg.center_name, "Relief Center");
    }

    #[test]
    fn grid_policy_from_toml() {
        let src = r#"
            center_links = "auto_haversine"

            [coordinate_policy]
            kind     = "grid"
            step_deg = 0.05
            rows     = 3
            origin   = { lat = 10.0, lon = 20.0 }
        "#;
        let cfg: ReliefConfig = toml::from_str(src).unwrap();
        assert_eq!(cfg.center_links, CenterLinkPolicy::AutoHaversine);
        assert!(matches!(cfg.coordinate_policy, CoordinatePolicy::Grid { rows: 3, .. }));
    }

    #[test]
    fn legacy_desktop_round_trips() {
        let cfg = ReliefConfig::legacy_desktop();
        let text = toml::to_string(&cfg).unwrap();
        assert_eq!(toml::from_str::<ReliefConfig>(&text).unwrap(), cfg);
    }

    #[test]
    fn severity_range_checked_on_load() {
        #[derive(serde::Deserialize)]
        struct Row {
            severity: Severity,
        }
        let row: Row = toml::from_str("severity = 7").unwrap();
        assert_eq!(row.severity.get(), 7);
        assert!(toml::from_str::<Row>("severity = 11").is_err());
    }
}
