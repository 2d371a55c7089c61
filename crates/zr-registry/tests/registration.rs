//! Registration scenarios across several buildings.

use zr_core::Verbosity;
use zr_registry::{
    InstanceRegistry, RegistryError, SequentialFactory, Warning, ZoneDeclaration,
};

fn decl<'a>(source: &'a str, zone: &'a str) -> ZoneDeclaration<'a> {
    ZoneDeclaration::new(source, "USA_IL_Chicago.mos", "Energy+.idd", zone)
}

fn zone_names(registry: &InstanceRegistry, source: &str) -> Vec<String> {
    let id = registry.find_by_source_name(source).unwrap();
    registry
        .building(id)
        .unwrap()
        .zone_names()
        .map(str::to_string)
        .collect()
}

#[test]
fn first_zone_creates_instance() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();

    registry.register_zone(&mut factory, &decl("B.idf", "Z1")).unwrap();

    assert_eq!(registry.count(), 1);
    assert_eq!(zone_names(&registry, "B.idf"), ["Z1"]);
    assert_eq!(factory.created().len(), 1);
}

#[test]
fn second_zone_reuses_instance() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();

    let h1 = registry.register_zone(&mut factory, &decl("B.idf", "Z1")).unwrap();
    let h2 = registry.register_zone(&mut factory, &decl("B.idf", "Z2")).unwrap();

    assert_eq!(registry.count(), 1);
    assert_eq!(h1.building, h2.building);
    assert_eq!(zone_names(&registry, "B.idf"), ["Z1", "Z2"]);
    assert_eq!(factory.created(), ["B.idf"]);
}

#[test]
fn duplicate_zone_fails_without_mutation() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();
    registry.register_zone(&mut factory, &decl("B.idf", "Z1")).unwrap();
    registry.register_zone(&mut factory, &decl("B.idf", "Z2")).unwrap();

    let err = registry
        .register_zone(
            &mut factory,
            &decl("B.idf", "Z1").with_verbosity(Verbosity::Debug),
        )
        .unwrap_err();

    match &err {
        RegistryError::DuplicateZone { zone, building } => {
            assert_eq!(zone, "Z1");
            assert_eq!(building, "B.idf");
        }
        other => panic!("unexpected error: {other}"),
    }
    let message = err.to_string();
    assert!(message.contains("Z1") && message.contains("B.idf"));

    assert_eq!(registry.count(), 1);
    assert_eq!(zone_names(&registry, "B.idf"), ["Z1", "Z2"]);
    assert_eq!(registry.global_verbosity(), Some(Verbosity::Warning));
    assert!(registry.warnings().is_empty());
}

#[test]
fn conflicting_archive_fails_without_mutation() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();
    registry
        .register_zone(&mut factory, &decl("B.idf", "Z1").with_archive_path("/b"))
        .unwrap();

    let err = registry
        .register_zone(&mut factory, &decl("B.idf", "Z3").with_archive_path("/a"))
        .unwrap_err();

    match &err {
        RegistryError::ConflictingArchivePath { requested, pinned } => {
            assert_eq!(requested, "/a");
            assert_eq!(pinned, "/b");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("/a") && err.to_string().contains("/b"));
    assert_eq!(zone_names(&registry, "B.idf"), ["Z1"]);
}

#[test]
fn zone_without_archive_joins_pinned_instance() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();
    registry
        .register_zone(&mut factory, &decl("B.idf", "Z1").with_archive_path("/b"))
        .unwrap();
    registry.register_zone(&mut factory, &decl("B.idf", "Z2")).unwrap();
    registry
        .register_zone(&mut factory, &decl("B.idf", "Z3").with_archive_path("/b"))
        .unwrap();

    let building = registry.by_index(0).unwrap();
    assert_eq!(building.archive_path(), Some("/b"));
    assert_eq!(building.zone_count(), 3);
}

#[test]
fn inconsistent_verbosity_takes_maximum_and_warns() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();

    registry
        .register_zone(&mut factory, &decl("C.idf", "Z4").with_verbosity(Verbosity::Error))
        .unwrap();
    registry
        .register_zone(&mut factory, &decl("B.idf", "Z5").with_verbosity(Verbosity::Fatal))
        .unwrap();

    assert_eq!(registry.global_verbosity(), Some(Verbosity::Error));
    assert_eq!(
        registry.warnings(),
        [Warning::InconsistentVerbosity {
            requested: Verbosity::Fatal,
            current: Verbosity::Error,
        }]
    );
    assert_eq!(registry.count(), 2);
}

#[test]
fn same_zone_name_in_different_buildings_is_allowed() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();

    let a = registry.register_zone(&mut factory, &decl("A.idf", "Core")).unwrap();
    let b = registry.register_zone(&mut factory, &decl("B.idf", "Core")).unwrap();

    assert_ne!(a.building, b.building);
    assert_eq!(registry.zones().count(), 2);
    assert_eq!(factory.created(), ["A.idf", "B.idf"]);
}

#[test]
fn interleaved_declarations_group_by_source() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();

    for (source, zone) in [
        ("A.idf", "North"),
        ("B.idf", "Attic"),
        ("A.idf", "South"),
        ("C.idf", "Core"),
        ("B.idf", "Core"),
        ("A.idf", "Core"),
    ] {
        registry.register_zone(&mut factory, &decl(source, zone)).unwrap();
    }

    assert_eq!(registry.count(), 3);
    assert_eq!(zone_names(&registry, "A.idf"), ["North", "South", "Core"]);
    assert_eq!(zone_names(&registry, "B.idf"), ["Attic", "Core"]);
    assert_eq!(zone_names(&registry, "C.idf"), ["Core"]);

    for (i, building) in registry.buildings().iter().enumerate() {
        assert_eq!(building.id().as_usize(), i);
        assert!(building.zones().iter().all(|z| z.building() == building.id()));
    }
}

#[test]
fn registered_zone_has_unbound_channels() {
    let mut registry = InstanceRegistry::new();
    let mut factory = SequentialFactory::new();
    let handle = registry.register_zone(&mut factory, &decl("B.idf", "Core_ZN")).unwrap();

    let zone = registry.zone(handle).unwrap();
    assert!(!zone.is_instantiated());
    assert!(!zone.is_initialized());
    assert_eq!(
        zone.inputs().qualified_names().collect::<Vec<_>>(),
        [
            "Core_ZN_T",
            "Core_ZN_X",
            "Core_ZN_mInlets_flow",
            "Core_ZN_TAveInlet",
            "Core_ZN_QGaiRad_flow",
        ]
    );
    assert!(!zone.parameter_outputs().is_bound());
}
