// Host-side tests for the built-in mesh library.

use drift_core::{icosphere, AssetError, MeshLibrary, MEME_MESH};

#[test]
fn builtin_library_resolves_the_meme_mesh() {
    let library = MeshLibrary::builtin();
    let (mesh, material) = library.get(MEME_MESH).expect("built-in mesh present");
    assert!(!mesh.positions.is_empty());
    assert_eq!(mesh.positions.len(), mesh.normals.len());
    assert!(material.base_color[3] > 0.0, "material must be opaque");
}

#[test]
fn unknown_mesh_name_is_an_error() {
    let library = MeshLibrary::builtin();
    match library.get("thursday") {
        Err(AssetError::UnknownMesh(name)) => assert_eq!(name, "thursday"),
        other => panic!("expected UnknownMesh, got {other:?}"),
    }
}

#[test]
fn library_lists_its_names() {
    let library = MeshLibrary::builtin();
    assert!(library.names().any(|n| n == MEME_MESH));
}

#[test]
fn icosphere_vertices_sit_on_the_sphere() {
    let radius = 0.5;
    let mesh = icosphere(2, radius);
    for (i, p) in mesh.positions.iter().enumerate() {
        assert!(
            (p.length() - radius).abs() < 1e-5,
            "vertex {i} at distance {} from center",
            p.length()
        );
    }
}

#[test]
fn icosphere_normals_are_unit_length() {
    let mesh = icosphere(1, 2.0);
    for n in &mesh.normals {
        assert!((n.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn icosphere_indices_stay_in_range() {
    let mesh = icosphere(2, 1.0);
    assert_eq!(mesh.indices.len() % 3, 0, "triangle list");
    let max = mesh.positions.len() as u32;
    for &i in &mesh.indices {
        assert!(i < max, "index {i} out of range {max}");
    }
}

#[test]
fn subdivision_quadruples_the_face_count() {
    let coarse = icosphere(0, 1.0);
    let fine = icosphere(1, 1.0);
    assert_eq!(coarse.indices.len(), 20 * 3);
    assert_eq!(fine.indices.len(), 80 * 3);
}

#[test]
fn interleaved_layout_is_six_floats_per_vertex() {
    let mesh = icosphere(0, 1.0);
    let data = mesh.interleaved();
    assert_eq!(data.len(), mesh.positions.len() * 6);
    // first vertex: position then normal
    let p = mesh.positions[0];
    let n = mesh.normals[0];
    assert_eq!(&data[0..6], &[p.x, p.y, p.z, n.x, n.y, n.z]);
}
