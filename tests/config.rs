use std::fs;

use impact_assessment::config::{ConfigError, find_scenario, load_scenarios};
use impact_assessment::model::{Composition, TerrainType};

#[test]
fn toml_catalogue_loads_sorted_by_file_name() {
    let scenarios = load_scenarios("configs/scenarios").expect("toml catalogue");
    let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Chelyabinsk", "Mid-Atlantic", "Tunguska"]);

    let chelyabinsk = &scenarios[0];
    assert_eq!(chelyabinsk.asteroid.mass_kg, 1.0e7);
    assert_eq!(chelyabinsk.asteroid.composition, Composition::Stony);
    assert_eq!(chelyabinsk.location.terrain_type, TerrainType::Urban);
    assert!(chelyabinsk.include_zones);
    assert!(!chelyabinsk.enhance);
    assert!(chelyabinsk.mitigation.is_none());
}

#[test]
fn yaml_catalogue_carries_mitigation_and_enrichment() {
    let scenarios = load_scenarios("data/scenarios/impacts.yaml").expect("yaml catalogue");
    assert!(scenarios.len() >= 4);

    let deflected = find_scenario(&scenarios, "deflected chelyabinsk").expect("deflected");
    let mitigation = deflected.mitigation.as_ref().expect("mitigation block");
    assert_eq!(mitigation.dv_mps, 5_000.0);
    assert_eq!(mitigation.method.as_deref(), Some("kinetic_impactor"));
    assert!(deflected.enhance);

    let pacific = find_scenario(&scenarios, "PACIFIC SHELF").expect("pacific");
    assert!(!pacific.include_zones);
    assert_eq!(
        pacific.enrichment.as_ref().and_then(|e| e.terrain_type),
        Some(TerrainType::Ocean)
    );
}

#[test]
fn single_toml_file_loads_one_scenario() {
    let scenarios = load_scenarios("configs/scenarios/tunguska.toml").expect("single file");
    assert_eq!(scenarios.len(), 1);
    assert_eq!(scenarios[0].location.soil_type.as_deref(), Some("permafrost"));
}

#[test]
fn directory_ignores_non_toml_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("b.toml"),
        r#"
name = "Bravo"

[asteroid]
mass_kg = 1e6
diameter_m = 8.0
velocity_m_s = 12000.0
impact_angle_deg = 45.0
composition = "iron"

[location]
latitude_deg = 0.0
longitude_deg = 0.0
terrain_type = "desert"
"#,
    )
    .expect("write b.toml");
    fs::write(
        dir.path().join("a.toml"),
        r#"
name = "Alpha"
enhance = true

[asteroid]
mass_kg = 2e6
diameter_m = 10.0
velocity_m_s = 15000.0
impact_angle_deg = 30.0
composition = "carbonaceous"

[location]
latitude_deg = 1.0
longitude_deg = 1.0
terrain_type = "ice"

[mitigation]
dv_mps = 250.0
"#,
    )
    .expect("write a.toml");
    fs::write(dir.path().join("notes.txt"), "not a scenario").expect("write notes");

    let scenarios = load_scenarios(dir.path()).expect("temp catalogue");
    let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo"]);
    assert_eq!(scenarios[0].mitigation.as_ref().map(|m| m.dv_mps), Some(250.0));
    assert_eq!(scenarios[0].mitigation.as_ref().and_then(|m| m.method.clone()), None);
    assert_eq!(scenarios[1].location.population_density_per_km2, 0.0);
}

#[test]
fn missing_scenario_is_reported_by_name() {
    let scenarios = load_scenarios("configs/scenarios").expect("toml catalogue");
    match find_scenario(&scenarios, "Barringer") {
        Err(ConfigError::NotFound(name)) => assert_eq!(name, "Barringer"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn malformed_files_surface_parse_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let toml_path = dir.path().join("broken.toml");
    fs::write(&toml_path, "name = \"Broken\"\n[asteroid]\nmass_kg = \"heavy\"\n").expect("write");
    assert!(matches!(load_scenarios(&toml_path), Err(ConfigError::Toml(_))));

    let yaml_path = dir.path().join("broken.yaml");
    fs::write(&yaml_path, "- name: [unclosed\n").expect("write");
    assert!(matches!(load_scenarios(&yaml_path), Err(ConfigError::Parse(_))));

    assert!(matches!(
        load_scenarios(dir.path().join("absent.yaml")),
        Err(ConfigError::Io(_))
    ));
}
