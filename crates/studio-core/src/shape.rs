//! Static descriptors for the decorative backdrop shapes.

use glam::{Vec2, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    Octahedron,
}

impl ShapeKind {
    /// Per-frame gain applied to the pointer-driven rotation term.
    pub fn pointer_gain(self) -> f32 {
        match self {
            ShapeKind::Box => 0.5,
            ShapeKind::Octahedron => 0.3,
        }
    }

    /// Axes driven by the pointer: `(by pointer y, by pointer x)`.
    pub fn pointer_axes(self) -> (Axis, Axis) {
        match self {
            ShapeKind::Box => (Axis::X, Axis::Y),
            ShapeKind::Octahedron => (Axis::X, Axis::Z),
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            ShapeKind::Box => 0.25,
            ShapeKind::Octahedron => 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// Display color stored as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    pub fn to_unit_rgb(self) -> [f32; 3] {
        let channel = |shift: u32| ((self.0 >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }

    pub fn with_alpha(self, alpha: f32) -> [f32; 4] {
        let [r, g, b] = self.to_unit_rgb();
        [r, g, b, alpha]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescriptor {
    pub kind: ShapeKind,
    pub base_position: Vec3,
    pub color: Rgb,
    pub rotation_axis: Axis,
    /// Radians per second around `rotation_axis`.
    pub rotation_speed: f32,
    pub float_amplitude: f32,
    pub float_speed: f32,
    pub mouse_influence: f32,
    pub scale: f32,
    pub initial_rotation: Vec3,
}

impl ShapeDescriptor {
    /// Pointer-driven rotation per second for a normalized pointer offset.
    pub(crate) fn pointer_rate(&self, offset: Vec2) -> Vec3 {
        let (by_y, by_x) = self.kind.pointer_axes();
        let gain = self.kind.pointer_gain();
        let offset = offset * self.mouse_influence;
        by_y.unit() * (offset.y * gain) + by_x.unit() * (offset.x * gain)
    }
}

#[allow(clippy::too_many_arguments)]
const fn shape(
    kind: ShapeKind,
    base_position: Vec3,
    color: u32,
    rotation_speed: f32,
    rotation_axis: Axis,
    float_amplitude: f32,
    float_speed: f32,
    initial_rotation: Vec3,
    mouse_influence: f32,
    scale: f32,
) -> ShapeDescriptor {
    ShapeDescriptor {
        kind,
        base_position,
        color: Rgb(color),
        rotation_axis,
        rotation_speed,
        float_amplitude,
        float_speed,
        mouse_influence,
        scale,
        initial_rotation,
    }
}

/// The hero backdrop: four corners, two mid-sides and one large box far behind.
pub const BACKDROP_SHAPES: [ShapeDescriptor; 7] = [
    shape(
        ShapeKind::Box,
        Vec3::new(5.0, 2.5, -3.0),
        0x3f3f46,
        0.12,
        Axis::Y,
        0.4,
        0.4,
        Vec3::new(0.8, 0.0, 0.8),
        0.5,
        1.2,
    ),
    shape(
        ShapeKind::Octahedron,
        Vec3::new(-5.0, 2.0, -2.0),
        0x3b82f6,
        0.18,
        Axis::Z,
        0.35,
        0.5,
        Vec3::ZERO,
        0.4,
        0.9,
    ),
    shape(
        ShapeKind::Box,
        Vec3::new(6.0, 0.0, -2.0),
        0x8b5cf6,
        0.15,
        Axis::X,
        0.3,
        0.55,
        Vec3::new(0.5, 0.3, 0.0),
        0.35,
        0.8,
    ),
    shape(
        ShapeKind::Box,
        Vec3::new(-6.0, -0.5, -1.5),
        0x52525b,
        0.2,
        Axis::Z,
        0.25,
        0.6,
        Vec3::new(0.3, 0.6, 0.2),
        0.3,
        0.7,
    ),
    shape(
        ShapeKind::Octahedron,
        Vec3::new(4.0, -2.5, -2.5),
        0x3b82f6,
        0.22,
        Axis::Y,
        0.3,
        0.65,
        Vec3::ZERO,
        0.45,
        1.0,
    ),
    shape(
        ShapeKind::Box,
        Vec3::new(-4.0, -2.0, -3.0),
        0x8b5cf6,
        0.1,
        Axis::Y,
        0.35,
        0.45,
        Vec3::new(0.4, 0.2, 0.5),
        0.4,
        1.1,
    ),
    shape(
        ShapeKind::Box,
        Vec3::new(0.0, 1.0, -5.0),
        0x27272a,
        0.08,
        Axis::Z,
        0.5,
        0.35,
        Vec3::new(0.7, 0.7, 0.0),
        0.2,
        1.5,
    ),
];
