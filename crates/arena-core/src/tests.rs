#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::config::{ArenaConfig, CatalogEntry, PowerCatalog};
    use crate::enums::*;
    use crate::error::ArenaError;
    use crate::events::DirectorEvent;
    use crate::types::*;

    // ---- Config ----

    #[test]
    fn test_default_config_is_valid() {
        ArenaConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ArenaConfig::from_json_str(r#"{ "noise_threshold": 0.6, "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert!((config.noise_threshold - 0.6).abs() < f32::EPSILON);
        assert_eq!(config.power_increment_per_wave, 50);
        assert_eq!(config.power_catalog.cost(EntityKind::StationaryThreat), 100);
        assert_eq!(config.power_catalog.cost(EntityKind::RoamingThreat), 10);
    }

    #[test]
    fn test_catalog_json_shape() {
        let config = ArenaConfig::from_json_str(
            r#"{ "power_catalog": [ { "kind": "RoamingThreat", "cost": 5 } ] }"#,
        )
        .unwrap();
        assert_eq!(config.power_catalog.entries().len(), 1);
        assert_eq!(config.power_catalog.min_cost(), Some(5));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ArenaConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ArenaError::Parse(_)));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let cases: Vec<(&str, fn(&mut ArenaConfig))> = vec![
            ("wave_timer_max", |c| c.wave_timer_max = 0.0),
            ("action_interval_secs", |c| c.action_interval_secs = -1.0),
            ("noise_scale", |c| c.noise_scale = f64::NAN),
            ("noise_threshold", |c| c.noise_threshold = 1.5),
            ("noise_offset_min", |c| c.noise_offset_min = c.noise_offset_max),
        ];
        for (field, mutate) in cases {
            let mut config = ArenaConfig::default();
            mutate(&mut config);
            match config.validate() {
                Err(ArenaError::InvalidConfig { field: f, .. }) => assert_eq!(f, field),
                other => panic!("{field}: expected InvalidConfig, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_bad_catalogs() {
        let bad = [
            vec![],
            vec![CatalogEntry {
                kind: EntityKind::Prop,
                cost: 5,
            }],
            vec![CatalogEntry {
                kind: EntityKind::RoamingThreat,
                cost: 0,
            }],
            vec![
                CatalogEntry {
                    kind: EntityKind::RoamingThreat,
                    cost: 10,
                },
                CatalogEntry {
                    kind: EntityKind::RoamingThreat,
                    cost: 20,
                },
            ],
        ];
        for entries in bad {
            let config = ArenaConfig {
                power_catalog: PowerCatalog::new(entries.clone()),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ArenaError::Catalog(_))),
                "catalog {entries:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zero_increment_is_unaffordable() {
        let config = ArenaConfig {
            power_increment_per_wave: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ArenaError::Unaffordable(_))));
    }

    #[test]
    fn test_strongest_affordable_tie_keeps_catalog_order() {
        let catalog = PowerCatalog::new(vec![
            CatalogEntry {
                kind: EntityKind::RoamingThreat,
                cost: 30,
            },
            CatalogEntry {
                kind: EntityKind::StationaryThreat,
                cost: 30,
            },
        ]);
        let pick = catalog.strongest_affordable(30).unwrap();
        assert_eq!(pick.kind, EntityKind::RoamingThreat);
        assert!(catalog.strongest_affordable(29).is_none());
    }

    #[test]
    fn test_strongest_affordable_default_catalog() {
        let catalog = PowerCatalog::default();
        assert_eq!(
            catalog.strongest_affordable(50).unwrap().kind,
            EntityKind::RoamingThreat
        );
        assert_eq!(
            catalog.strongest_affordable(100).unwrap().kind,
            EntityKind::StationaryThreat
        );
    }

    // ---- Grid geometry ----

    #[test]
    fn test_grid_dims_from_default_bounds() {
        let dims = GridDims::from_bounds(&WorldBounds::default()).unwrap();
        assert_eq!(dims, GridDims::new(32, 18));
        assert_eq!(dims.cell_count(), 576);
        assert_eq!(dims.center(), GridCoord::new(16, 9));
    }

    #[test]
    fn test_grid_dims_rejects_degenerate_bounds() {
        let zero_tile = WorldBounds::new(Vec2::new(16.0, 9.0), Vec2::ZERO);
        assert!(matches!(
            GridDims::from_bounds(&zero_tile),
            Err(ArenaError::Bounds(_))
        ));
        let huge_tile = WorldBounds::new(Vec2::new(1.0, 1.0), Vec2::splat(5.0));
        assert!(matches!(
            GridDims::from_bounds(&huge_tile),
            Err(ArenaError::Bounds(_))
        ));
    }

    #[test]
    fn test_cell_to_world_is_tile_centered() {
        let bounds = WorldBounds::new(Vec2::new(16.0, 9.0), Vec2::new(1.0, 1.0));
        assert_eq!(bounds.cell_to_world(GridCoord::new(0, 0)), Vec2::new(-15.5, -8.5));
        assert_eq!(bounds.cell_to_world(GridCoord::new(31, 17)), Vec2::new(15.5, 8.5));
        assert!(bounds.contains(bounds.cell_to_world(GridCoord::new(31, 17))));
        assert!(!bounds.contains(Vec2::new(16.0, 0.0)));
    }

    #[test]
    fn test_index_of_and_contains() {
        let dims = GridDims::new(4, 3);
        assert_eq!(dims.index_of(GridCoord::new(0, 0)), Some(0));
        assert_eq!(dims.index_of(GridCoord::new(3, 2)), Some(11));
        assert_eq!(dims.index_of(GridCoord::new(4, 0)), None);
        assert_eq!(dims.index_of(GridCoord::new(-1, 0)), None);
        assert_eq!(dims.coords().count(), 12);
        assert_eq!(dims.coords().nth(5), Some(GridCoord::new(1, 1)));
    }

    #[test]
    fn test_neighbors_and_touching() {
        let c = GridCoord::new(5, 5);
        let ns: Vec<_> = c.neighbors().collect();
        assert_eq!(ns.len(), 8);
        assert!(ns.iter().all(|n| n.chebyshev(c) == 1));
        assert!(c.touches(c));
        assert!(c.touches(GridCoord::new(6, 4)));
        assert!(!c.touches(GridCoord::new(7, 5)));
    }

    // ---- Kind map / enums ----

    #[test]
    fn test_kind_map_indexing() {
        let mut counts = KindCounts::default();
        counts[EntityKind::RoamingThreat] += 3;
        counts[EntityKind::Prop] += 1;
        assert_eq!(counts.total(), 4);
        assert_eq!(counts[EntityKind::Obstacle], 0);
        let kinds: Vec<_> = counts.iter().filter(|(_, n)| **n > 0).map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![EntityKind::Prop, EntityKind::RoamingThreat]);
    }

    #[test]
    fn test_phase_rotation() {
        let mut phase = WavePhase::Idle;
        let mut seen = Vec::new();
        for _ in 0..6 {
            seen.push(phase);
            phase = phase.next();
        }
        assert_eq!(
            seen,
            vec![
                WavePhase::Idle,
                WavePhase::Clearing,
                WavePhase::Generating,
                WavePhase::Idle,
                WavePhase::Clearing,
                WavePhase::Generating,
            ]
        );
    }

    #[test]
    fn test_containers() {
        assert_eq!(EntityKind::Obstacle.container(), Container::Navigation);
        assert_eq!(EntityKind::StationaryThreat.container(), Container::Navigation);
        assert_eq!(EntityKind::Prop.container(), Container::Navigation);
        assert_eq!(EntityKind::RoamingThreat.container(), Container::Root);
        assert!(!EntityKind::Prop.is_threat());
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = DirectorEvent::WaveStarted { wave: 3 };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"WaveStarted","wave":3}"#);
    }
}
