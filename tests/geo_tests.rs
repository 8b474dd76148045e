// Host-side tests for marker projection and the marker catalog.

use dive_core::*;

#[test]
fn projected_points_lie_on_the_sphere() {
    for radius in [0.5_f32, 1.0, 2.5, 6.371] {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(20) {
                let p = lat_lon_to_vec3(lat as f32, lon as f32, radius);
                assert!(
                    (p.length() - radius).abs() < 1e-4 * radius.max(1.0),
                    "lat={lat} lon={lon} r={radius} -> |p|={}",
                    p.length()
                );
            }
        }
    }
}

#[test]
fn axis_convention_matches_texture_layout() {
    let r = 2.0;
    let north = lat_lon_to_vec3(90.0, 0.0, r);
    assert!(north.abs_diff_eq(glam::Vec3::new(0.0, r, 0.0), 1e-5));

    let south = lat_lon_to_vec3(-90.0, 45.0, r);
    assert!(south.abs_diff_eq(glam::Vec3::new(0.0, -r, 0.0), 1e-5));

    let null_island = lat_lon_to_vec3(0.0, 0.0, r);
    assert!(null_island.abs_diff_eq(glam::Vec3::new(r, 0.0, 0.0), 1e-5));

    let east = lat_lon_to_vec3(0.0, 90.0, r);
    assert!(east.abs_diff_eq(glam::Vec3::new(0.0, 0.0, -r), 1e-5));
}

#[test]
fn projection_is_deterministic() {
    let a = lat_lon_to_vec3(29.56, 106.55, 2.5);
    let b = lat_lon_to_vec3(29.56, 106.55, 2.5);
    assert_eq!(a, b);
}

#[test]
fn default_catalog_has_the_four_scenes() {
    let catalog = MarkerCatalog::default();
    assert_eq!(catalog.len(), 4);
    let ny = catalog.get(1).expect("marker 1");
    assert_eq!(ny.name, "New York");
    assert_eq!(ny.lat, 40.7);
    assert_eq!(ny.lon, -74.0);
    assert!(catalog.get(99).is_none());
    let ids: Vec<_> = catalog.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn catalog_loads_from_json() {
    let json = r#"[
        {"id": 7, "name": "Reykjavik", "lat": 64.14, "lon": -21.94, "pano": "/vr/rvk.jpg"},
        {"id": 9, "name": "Cape Town", "lat": -33.92, "lon": 18.42, "pano": "/vr/cpt.jpg"}
    ]"#;
    let catalog = MarkerCatalog::from_json(json).expect("valid catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(9).map(|m| m.pano.as_str()), Some("/vr/cpt.jpg"));
}

#[test]
fn catalog_rejects_duplicates_and_empty_lists() {
    let dup = vec![
        Marker::new(1, "a", 0.0, 0.0, "a.jpg"),
        Marker::new(1, "b", 1.0, 1.0, "b.jpg"),
    ];
    assert!(matches!(MarkerCatalog::new(dup), Err(CatalogError::DuplicateId(1))));
    assert!(matches!(MarkerCatalog::new(Vec::new()), Err(CatalogError::Empty)));
    assert!(matches!(
        MarkerCatalog::from_json("{not json"),
        Err(CatalogError::Parse(_))
    ));
}
