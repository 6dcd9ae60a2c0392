//! Wireframe geometry for the backdrop shapes.

use std::collections::BTreeSet;

use glam::{Mat4, Vec3};
use studio_core::{ShapeInstance, ShapeKind};
use thiserror::Error;

pub const BOX_SIZE: f32 = 1.0;
pub const OCTAHEDRON_RADIUS: f32 = 0.6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeomError {
    #[error("index count {0} is not a multiple of three")]
    NotTriangles(usize),
    #[error("index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: u32, len: usize },
}

#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl TriMesh {
    /// Unique undirected edges of every triangle, the set a wireframe
    /// material draws. Quad faces therefore keep their diagonal.
    pub fn edges(&self) -> Result<Vec<[u32; 2]>, GeomError> {
        if self.indices.len() % 3 != 0 {
            return Err(GeomError::NotTriangles(self.indices.len()));
        }
        let len = self.positions.len();
        if let Some(&index) = self.indices.iter().find(|&&i| i as usize >= len) {
            return Err(GeomError::IndexOutOfRange { index, len });
        }

        let mut edges = BTreeSet::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                if a != b {
                    edges.insert([a.min(b), a.max(b)]);
                }
            }
        }
        Ok(edges.into_iter().collect())
    }
}

/// Axis-aligned cube centered on the origin, two triangles per face.
pub fn box_mesh(size: f32) -> TriMesh {
    let h = size / 2.0;
    let corner = |i: u32| {
        [
            if i & 1 != 0 { h } else { -h },
            if i & 2 != 0 { h } else { -h },
            if i & 4 != 0 { h } else { -h },
        ]
    };
    let quads: [[u32; 4]; 6] = [
        [0, 4, 6, 2],
        [1, 3, 7, 5],
        [0, 1, 5, 4],
        [2, 6, 7, 3],
        [0, 2, 3, 1],
        [4, 5, 7, 6],
    ];
    let mut indices = Vec::with_capacity(36);
    for [a, b, c, d] in quads {
        indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
    TriMesh {
        positions: (0..8).map(corner).collect(),
        indices,
    }
}

pub fn octahedron_mesh(radius: f32) -> TriMesh {
    let r = radius;
    TriMesh {
        positions: vec![
            [r, 0.0, 0.0],
            [-r, 0.0, 0.0],
            [0.0, r, 0.0],
            [0.0, -r, 0.0],
            [0.0, 0.0, r],
            [0.0, 0.0, -r],
        ],
        indices: vec![
            0, 2, 4, 2, 1, 4, 1, 3, 4, 3, 0, 4, //
            2, 0, 5, 1, 2, 5, 3, 1, 5, 0, 3, 5,
        ],
    }
}

#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    pub positions: Vec<[f32; 3]>,
    pub edges: Vec<[u32; 2]>,
}

impl Wireframe {
    pub fn from_mesh(mesh: &TriMesh) -> Result<Self, GeomError> {
        Ok(Self {
            positions: mesh.positions.clone(),
            edges: mesh.edges()?,
        })
    }
}

/// Line-list vertices for one frame, two per segment.
#[derive(Debug, Clone, Default)]
pub struct LineBatch {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
}

impl LineBatch {
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn append_transformed(&mut self, wire: &Wireframe, transform: Mat4, color: [f32; 4]) {
        let world: Vec<[f32; 3]> = wire
            .positions
            .iter()
            .map(|p| transform.transform_point3(Vec3::from_array(*p)).to_array())
            .collect();
        for [a, b] in &wire.edges {
            self.positions.push(world[*a as usize]);
            self.positions.push(world[*b as usize]);
        }
        self.colors
            .extend(std::iter::repeat(color).take(wire.edges.len() * 2));
    }
}

/// Wireframes for each shape kind, built once at startup.
#[derive(Debug, Clone)]
pub struct ShapeLibrary {
    cube: Wireframe,
    octahedron: Wireframe,
}

impl ShapeLibrary {
    pub fn new() -> Result<Self, GeomError> {
        Ok(Self {
            cube: Wireframe::from_mesh(&box_mesh(BOX_SIZE))?,
            octahedron: Wireframe::from_mesh(&octahedron_mesh(OCTAHEDRON_RADIUS))?,
        })
    }

    pub fn wireframe(&self, kind: ShapeKind) -> &Wireframe {
        match kind {
            ShapeKind::Box => &self.cube,
            ShapeKind::Octahedron => &self.octahedron,
        }
    }

    /// Rebuilds `batch` in place for this frame's instances.
    pub fn build_frame(
        &self,
        batch: &mut LineBatch,
        instances: impl IntoIterator<Item = ShapeInstance>,
    ) {
        batch.clear();
        for instance in instances {
            batch.append_transformed(
                self.wireframe(instance.kind),
                instance.transform,
                instance.color.with_alpha(instance.opacity),
            );
        }
    }
}
