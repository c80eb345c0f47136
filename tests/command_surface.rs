use mesh_info::command::{PolyVolume, PolyVolumeOptions, poly_volume};
use mesh_info::mesh::{PolyMesh, Space, Transform};
use mesh_info::mesh_error::MeshInfoError;
use mesh_info::mesh_generation::unit_cube;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn load_pyramid() -> PolyMesh {
    let json = std::fs::read_to_string("tests/data/square_pyramid.json")
        .expect("fixture mesh is checked in");
    serde_json::from_str(&json).expect("fixture mesh parses")
}

#[test]
fn selection_arity_is_checked_first() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(
        poly_volume(&[], PolyVolumeOptions::default()).unwrap_err(),
        MeshInfoError::EmptySelection
    );
    let three = [unit_cube()?, unit_cube()?, unit_cube()?];
    assert_eq!(
        poly_volume(&three, PolyVolumeOptions::default()).unwrap_err(),
        MeshInfoError::AmbiguousSelection(3)
    );
    Ok(())
}

#[test]
fn measures_a_fixture_mesh() {
    // Unit-base square pyramid of height 1: volume 1/3, area 1 + sqrt(5).
    let pyramid = load_pyramid();
    match poly_volume(&[pyramid], PolyVolumeOptions::default()).unwrap() {
        PolyVolume::Value(volume) => assert!(approx(volume, 1.0 / 3.0)),
        PolyVolume::Node(_) => panic!("expected a value without construction history"),
    }
}

#[test]
fn world_space_flag_selects_the_frame() {
    let mut pyramid = load_pyramid();
    pyramid.set_transform(Transform::from_uniform_scale(2.0));
    let selection = [pyramid];

    let world = poly_volume(&selection, PolyVolumeOptions::default()).unwrap();
    let object = poly_volume(
        &selection,
        PolyVolumeOptions {
            world_space: false,
            ..PolyVolumeOptions::default()
        },
    )
    .unwrap();

    match (world, object) {
        (PolyVolume::Value(world), PolyVolume::Value(object)) => {
            assert!(approx(object, 1.0 / 3.0));
            assert!(approx(world, 8.0 / 3.0));
        }
        _ => panic!("expected plain values"),
    }
}

#[test]
fn construction_history_hands_back_a_live_node() {
    let selection = [load_pyramid()];
    let options = PolyVolumeOptions {
        construction_history: true,
        ..PolyVolumeOptions::default()
    };
    let mut node = match poly_volume(&selection, options).unwrap() {
        PolyVolume::Node(node) => node,
        PolyVolume::Value(_) => panic!("expected a node with construction history on"),
    };

    assert_eq!(node.space(), Space::World);
    assert!(approx(node.volume(), 1.0 / 3.0));
    assert!(approx(node.area(), 1.0 + 5.0_f64.sqrt()));

    // The node keeps reevaluating after the command returned.
    node.set_space(Space::Object);
    assert!(approx(node.volume(), 1.0 / 3.0));
}
