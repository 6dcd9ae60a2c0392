//! Per-frame procedural motion: clock, pointer, and the closed-form update
//! applied to each backdrop shape.

use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

use crate::shape::ShapeDescriptor;

/// Turns animation-frame timestamps into frame deltas.
#[derive(Debug, Default, Clone)]
pub struct AnimationClock {
    last_ms: Option<f64>,
    elapsed: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to `now_ms` and returns the delta in seconds.
    ///
    /// The first tick yields zero. Timestamps that go backwards are treated
    /// as no time passing, so `elapsed` never decreases.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) if now_ms > last => (now_ms - last) / 1000.0,
            Some(_) => 0.0,
            None => 0.0,
        };
        self.last_ms = Some(self.last_ms.map_or(now_ms, |last| last.max(now_ms)));
        self.elapsed += dt;
        dt as f32
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

/// Latest pointer position in viewport pixels.
#[derive(Debug, Default, Clone, Copy)]
pub struct PointerTracker {
    position: Vec2,
}

impl PointerTracker {
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Maps a pixel position to `[-0.5, 0.5]` around the viewport center.
    /// An empty extent contributes zero on that axis.
    pub fn normalize(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(
            centered(pointer.x, self.width),
            centered(pointer.y, self.height),
        )
    }
}

fn centered(value: f32, extent: f32) -> f32 {
    if extent.is_finite() && extent > 0.0 {
        value / extent - 0.5
    } else {
        0.0
    }
}

/// Rotation added this frame by the pointer, before the shape's own spin.
pub fn pointer_rotation(desc: &ShapeDescriptor, offset: Vec2, dt: f32) -> Vec3 {
    desc.pointer_rate(offset) * dt
}

/// Runtime transform of one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeState {
    time: f32,
    position: Vec3,
    rotation: Vec3,
}

impl ShapeState {
    /// Starts a shape at `phase` seconds into its float cycle.
    pub fn new(desc: &ShapeDescriptor, phase: f32) -> Self {
        Self {
            time: phase,
            position: desc.base_position,
            rotation: desc.initial_rotation,
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Integrates one frame. `pointer_offset` is the normalized offset from
    /// [`Viewport::normalize`].
    pub fn advance(&mut self, desc: &ShapeDescriptor, dt: f32, pointer_offset: Vec2) {
        self.time += dt;
        self.rotation += desc.rotation_axis.unit() * (dt * desc.rotation_speed);
        self.position.y =
            desc.base_position.y + (self.time * desc.float_speed).sin() * desc.float_amplitude;
        self.rotation += pointer_rotation(desc, pointer_offset, dt);
    }

    /// Model matrix: translate, then XYZ Euler rotation, then uniform scale.
    pub fn model_matrix(&self, scale: f32) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, self.position)
    }
}
