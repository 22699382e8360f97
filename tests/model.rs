use approx::assert_relative_eq;
use impact_assessment::model::{
    Asteroid, AsteroidParams, Composition, GeoEnrichment, ImpactLocation, LocationParams,
    ModelError, TerrainType,
};

fn stony(mass_kg: f64, diameter_m: f64, velocity_m_s: f64) -> AsteroidParams {
    AsteroidParams {
        mass_kg,
        diameter_m,
        velocity_m_s,
        impact_angle_deg: 45.0,
        composition: Composition::Stony,
        density_kg_m3: None,
        porosity: None,
        strength_pa: None,
    }
}

fn site(terrain_type: TerrainType) -> LocationParams {
    LocationParams {
        latitude_deg: 10.0,
        longitude_deg: 20.0,
        elevation_m: 0.0,
        terrain_type,
        water_depth_m: None,
        population_density_per_km2: 100.0,
        infrastructure_density: 0.5,
        soil_type: None,
        bedrock_depth_m: None,
    }
}

#[test]
fn composition_defaults_fill_density_and_porosity() {
    let asteroid = Asteroid::new(stony(1.0e7, 20.0, 19_000.0)).expect("valid asteroid");
    assert_eq!(asteroid.density_kg_m3(), 3_000.0);
    assert_eq!(asteroid.porosity(), 0.0);
    assert_eq!(asteroid.strength_pa(), None);
    assert_eq!(asteroid.effective_strength_pa(), 1.0e8);

    let iron = Asteroid::new(AsteroidParams {
        composition: Composition::Iron,
        ..stony(1.0e7, 20.0, 19_000.0)
    })
    .expect("valid iron body");
    assert_eq!(iron.density_kg_m3(), 7_800.0);
    assert_eq!(iron.effective_strength_pa(), 1.0e9);
}

#[test]
fn explicit_density_overrides_the_material_table() {
    let asteroid = Asteroid::new(AsteroidParams {
        density_kg_m3: Some(2_500.0),
        porosity: Some(0.3),
        strength_pa: Some(5.0e6),
        ..stony(1.0e7, 20.0, 19_000.0)
    })
    .expect("valid asteroid");
    assert_eq!(asteroid.density_kg_m3(), 2_500.0);
    assert_eq!(asteroid.porosity(), 0.3);
    assert_eq!(asteroid.effective_strength_pa(), 5.0e6);
}

#[test]
fn kinetic_energy_matches_half_m_v_squared() {
    let asteroid = Asteroid::new(stony(1.0e7, 20.0, 19_000.0)).expect("valid asteroid");
    assert_eq!(asteroid.kinetic_energy_joules(), 0.5 * 1.0e7 * 19_000.0 * 19_000.0);
    assert_relative_eq!(
        asteroid.kinetic_energy_megatons(),
        1.805e15 / 4.184e15,
        max_relative = 1e-12
    );
}

#[test]
fn out_of_range_asteroid_fields_are_rejected() {
    let cases = [
        ("mass_kg", stony(0.0, 20.0, 19_000.0)),
        ("mass_kg", stony(-1.0, 20.0, 19_000.0)),
        ("diameter_m", stony(1.0e7, 0.0, 19_000.0)),
        ("velocity_m_s", stony(1.0e7, 20.0, 0.0)),
        ("velocity_m_s", stony(1.0e7, 20.0, f64::NAN)),
        (
            "impact_angle_deg",
            AsteroidParams {
                impact_angle_deg: 91.0,
                ..stony(1.0e7, 20.0, 19_000.0)
            },
        ),
        (
            "impact_angle_deg",
            AsteroidParams {
                impact_angle_deg: -0.5,
                ..stony(1.0e7, 20.0, 19_000.0)
            },
        ),
        (
            "porosity",
            AsteroidParams {
                porosity: Some(1.5),
                ..stony(1.0e7, 20.0, 19_000.0)
            },
        ),
        (
            "density_kg_m3",
            AsteroidParams {
                density_kg_m3: Some(0.0),
                ..stony(1.0e7, 20.0, 19_000.0)
            },
        ),
    ];

    for (expected_field, params) in cases {
        match Asteroid::new(params) {
            Err(ModelError::OutOfRange { field, .. }) => assert_eq!(field, expected_field),
            Ok(asteroid) => panic!("{expected_field} should be rejected: {asteroid:?}"),
        }
    }
}

#[test]
fn boundary_angles_are_accepted() {
    for angle in [0.0, 90.0] {
        let params = AsteroidParams {
            impact_angle_deg: angle,
            ..stony(1.0e7, 20.0, 19_000.0)
        };
        assert!(Asteroid::new(params).is_ok(), "angle {angle} is in range");
    }
}

#[test]
fn error_message_names_field_and_value() {
    let err = Asteroid::new(stony(-5.0, 20.0, 19_000.0)).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("mass_kg"), "{message}");
    assert!(message.contains("-5"), "{message}");
}

#[test]
fn diameter_consistency_uses_spherical_volume() {
    let asteroid = Asteroid::new(stony(1.0e7, 20.0, 19_000.0)).expect("valid asteroid");
    let expected = 2.0 * (3.0 * 1.0e7 / (4.0 * std::f64::consts::PI * 3_000.0)).cbrt();
    assert_relative_eq!(asteroid.expected_diameter_m(), expected, max_relative = 1e-12);
    assert!(asteroid.diameter_mismatch() < 0.1);

    let fluffy = Asteroid::new(stony(1.0e7, 60.0, 19_000.0)).expect("valid asteroid");
    assert!(fluffy.diameter_mismatch() > 0.1);
}

#[test]
fn deceleration_floors_velocity_at_zero() {
    let asteroid = Asteroid::new(stony(1.0e7, 20.0, 19_000.0)).expect("valid asteroid");
    let slowed = asteroid.decelerated(4_000.0);
    assert_eq!(slowed.velocity_m_s(), 15_000.0);
    assert_eq!(slowed.mass_kg(), asteroid.mass_kg());
    assert_eq!(asteroid.velocity_m_s(), 19_000.0);

    let stopped = asteroid.decelerated(25_000.0);
    assert_eq!(stopped.velocity_m_s(), 0.0);
    assert_eq!(stopped.kinetic_energy_joules(), 0.0);
}

#[test]
fn deserialization_validates_through_params() {
    let ok: Asteroid = serde_json::from_str(
        r#"{"mass_kg":1e7,"diameter_m":20,"velocity_m_s":19000,"impact_angle_deg":20,"composition":"stony"}"#,
    )
    .expect("valid json asteroid");
    assert_eq!(ok.density_kg_m3(), 3_000.0);

    let bad = serde_json::from_str::<Asteroid>(
        r#"{"mass_kg":1e7,"diameter_m":20,"velocity_m_s":19000,"impact_angle_deg":120,"composition":"stony"}"#,
    );
    assert!(bad.is_err());
}

#[test]
fn location_validation_covers_ranges() {
    assert!(ImpactLocation::new(site(TerrainType::Urban)).is_ok());

    let bad_lat = LocationParams {
        latitude_deg: 91.0,
        ..site(TerrainType::Urban)
    };
    assert!(ImpactLocation::new(bad_lat).is_err());

    let bad_lon = LocationParams {
        longitude_deg: -181.0,
        ..site(TerrainType::Urban)
    };
    assert!(ImpactLocation::new(bad_lon).is_err());

    let bad_infra = LocationParams {
        infrastructure_density: 1.2,
        ..site(TerrainType::Urban)
    };
    assert!(ImpactLocation::new(bad_infra).is_err());

    let bad_population = LocationParams {
        population_density_per_km2: -3.0,
        ..site(TerrainType::Urban)
    };
    assert!(ImpactLocation::new(bad_population).is_err());
}

#[test]
fn terrain_parsing_and_labels() {
    assert_eq!("Ocean".parse::<TerrainType>(), Ok(TerrainType::Ocean));
    assert_eq!("urban".parse::<TerrainType>(), Ok(TerrainType::Urban));
    assert!("swamp".parse::<TerrainType>().is_err());
    assert!(TerrainType::Ocean.is_ocean());
    assert!(!TerrainType::Ice.is_ocean());
    assert_eq!(TerrainType::Mountain.label(), "mountain");
    assert_eq!("IRON".parse::<Composition>(), Ok(Composition::Iron));
}

#[test]
fn enrichment_overrides_present_fields_only() {
    let location = ImpactLocation::new(LocationParams {
        soil_type: Some("sand".into()),
        ..site(TerrainType::Rural)
    })
    .expect("valid site");

    let enriched = location
        .enriched(&GeoEnrichment {
            population_density_per_km2: Some(750.0),
            elevation_m: Some(120.0),
            terrain_type: None,
            soil_type: None,
        })
        .expect("valid enrichment");
    assert_eq!(enriched.population_density_per_km2(), 750.0);
    assert_eq!(enriched.elevation_m(), 120.0);
    assert_eq!(enriched.terrain_type(), TerrainType::Rural);
    assert_eq!(enriched.soil_type(), Some("sand"));
    assert_eq!(enriched.infrastructure_density(), 0.5);
}

#[test]
fn enrichment_to_ocean_supplies_default_depth() {
    let location = ImpactLocation::new(site(TerrainType::Land)).expect("valid site");
    let enriched = location
        .enriched(&GeoEnrichment {
            terrain_type: Some(TerrainType::Ocean),
            ..GeoEnrichment::default()
        })
        .expect("valid enrichment");
    assert_eq!(enriched.terrain_type(), TerrainType::Ocean);
    assert_eq!(enriched.water_depth_m(), Some(3_000.0));

    let charted = ImpactLocation::new(LocationParams {
        water_depth_m: Some(450.0),
        ..site(TerrainType::Ocean)
    })
    .expect("valid site")
    .enriched(&GeoEnrichment::default())
    .expect("valid enrichment");
    assert_eq!(charted.water_depth_m(), Some(450.0));
}

#[test]
fn enrichment_results_are_revalidated() {
    let location = ImpactLocation::new(site(TerrainType::Urban)).expect("valid site");
    let result = location.enriched(&GeoEnrichment {
        population_density_per_km2: Some(-1.0),
        ..GeoEnrichment::default()
    });
    assert!(result.is_err());
}
