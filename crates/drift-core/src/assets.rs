//! Built-in mesh/material pairs, looked up by name.
//!
//! The drift rules treat geometry and material as opaque handles; this module
//! is the collaborator that hands them out. A lookup miss is the one error
//! that aborts scene construction.

use fnv::FnvHashMap;
use glam::Vec3;
use thiserror::Error;

/// Asset name of the meme mesh the field is built from.
pub const MEME_MESH: &str = "wednesday";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("unknown mesh asset `{0}`")]
    UnknownMesh(String),
}

/// Triangle mesh data, ready to interleave into a vertex buffer.
#[derive(Clone, Debug)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Interleave position + normal per vertex for upload.
    pub fn interleaved(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.positions.len() * 6);
        for (p, n) in self.positions.iter().zip(self.normals.iter()) {
            out.extend_from_slice(&[p.x, p.y, p.z, n.x, n.y, n.z]);
        }
        out
    }
}

/// Flat material description paired with a mesh.
#[derive(Clone, Copy, Debug)]
pub struct MeshMaterial {
    pub base_color: [f32; 4],
    pub roughness: f32,
}

/// Named mesh/material registry with the built-in scene assets.
pub struct MeshLibrary {
    meshes: FnvHashMap<&'static str, (MeshData, MeshMaterial)>,
}

impl MeshLibrary {
    pub fn builtin() -> Self {
        let mut meshes = FnvHashMap::default();
        meshes.insert(
            MEME_MESH,
            (
                icosphere(2, 0.5),
                MeshMaterial {
                    base_color: [0.36, 0.62, 0.28, 1.0],
                    roughness: 0.65,
                },
            ),
        );
        Self { meshes }
    }

    pub fn get(&self, name: &str) -> Result<&(MeshData, MeshMaterial), AssetError> {
        self.meshes
            .get(name)
            .ok_or_else(|| AssetError::UnknownMesh(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.meshes.keys().copied()
    }
}

/// Build a unit-direction icosphere of the given radius.
///
/// Normals equal the normalized positions, which is exact for a sphere.
pub fn icosphere(subdivisions: u32, radius: f32) -> MeshData {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut positions: Vec<Vec3> = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ]
    .iter()
    .map(|v| Vec3::from_slice(v).normalize())
    .collect();
    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
    for _ in 0..subdivisions {
        let mut next = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in faces {
            let ab = midpoint(&mut positions, &mut midpoints, a, b);
            let bc = midpoint(&mut positions, &mut midpoints, b, c);
            let ca = midpoint(&mut positions, &mut midpoints, c, a);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let normals = positions.clone();
    let positions = positions.into_iter().map(|p| p * radius).collect();
    let indices = faces.into_iter().flatten().collect();
    MeshData {
        positions,
        normals,
        indices,
    }
}

fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut FnvHashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&i) = cache.get(&key) {
        return i;
    }
    let mid = ((positions[a as usize] + positions[b as usize]) * 0.5).normalize();
    let i = positions.len() as u32;
    positions.push(mid);
    cache.insert(key, i);
    i
}
