use glam::{Mat4, Vec3};
use rand::Rng;

use crate::motion::{PointerTracker, ShapeState, Viewport};
use crate::shape::{Rgb, ShapeDescriptor, ShapeKind};

/// Upper bound (exclusive) of the random per-shape starting phase, in seconds.
pub const MAX_PHASE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub position: Vec3,
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
}

pub const BACKDROP_CAMERA: CameraConfig = CameraConfig {
    position: Vec3::new(0.0, 0.0, 8.0),
    fov_y_degrees: 60.0,
    near: 0.1,
    far: 1000.0,
};

/// What the rendering surface needs to draw one shape this frame.
#[derive(Debug, Clone, Copy)]
pub struct ShapeInstance {
    pub kind: ShapeKind,
    pub color: Rgb,
    pub opacity: f32,
    pub transform: Mat4,
}

/// Fixed set of shapes plus their runtime state.
pub struct SceneComposer {
    descriptors: Vec<ShapeDescriptor>,
    states: Vec<ShapeState>,
}

impl SceneComposer {
    /// Each shape starts at a random phase in `[0, MAX_PHASE)` so that the
    /// shapes do not bob in sync.
    pub fn new<R: Rng + ?Sized>(descriptors: &[ShapeDescriptor], rng: &mut R) -> Self {
        let states = descriptors
            .iter()
            .map(|desc| ShapeState::new(desc, rng.gen_range(0.0..MAX_PHASE)))
            .collect();
        Self {
            descriptors: descriptors.to_vec(),
            states,
        }
    }

    pub fn descriptors(&self) -> &[ShapeDescriptor] {
        &self.descriptors
    }

    pub fn states(&self) -> &[ShapeState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// One cooperative tick: every shape moves by `dt` seconds.
    pub fn advance(&mut self, dt: f32, pointer: &PointerTracker, viewport: Viewport) {
        let offset = viewport.normalize(pointer.position());
        for (desc, state) in self.descriptors.iter().zip(self.states.iter_mut()) {
            state.advance(desc, dt, offset);
        }
    }

    pub fn instances(&self) -> impl Iterator<Item = ShapeInstance> + '_ {
        self.descriptors
            .iter()
            .zip(self.states.iter())
            .map(|(desc, state)| ShapeInstance {
                kind: desc.kind,
                color: desc.color,
                opacity: desc.kind.opacity(),
                transform: state.model_matrix(desc.scale),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::BACKDROP_SHAPES;
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn composer(seed: u64) -> SceneComposer {
        SceneComposer::new(&BACKDROP_SHAPES, &mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn phases_are_in_range_and_distinct() {
        let scene = composer(7);
        assert_eq!(scene.len(), 7);
        let phases: Vec<f32> = scene.states().iter().map(ShapeState::time).collect();
        for phase in &phases {
            assert!((0.0..MAX_PHASE).contains(phase));
        }
        let first = phases[0];
        assert!(phases.iter().skip(1).any(|p| *p != first));
    }

    #[test]
    fn advance_moves_every_shape_and_keeps_descriptors() {
        let mut scene = composer(11);
        let before: Vec<f32> = scene.states().iter().map(ShapeState::time).collect();

        let mut pointer = PointerTracker::default();
        pointer.move_to(100.0, 600.0);
        scene.advance(0.5, &pointer, Viewport::new(800.0, 800.0));

        for (state, start) in scene.states().iter().zip(before) {
            assert!((state.time() - start - 0.5).abs() < 1e-4);
        }
        assert_eq!(scene.descriptors(), &BACKDROP_SHAPES[..]);
    }

    #[test]
    fn instances_carry_kind_opacity_and_scale() {
        let scene = composer(3);
        let instances: Vec<ShapeInstance> = scene.instances().collect();
        assert_eq!(instances.len(), BACKDROP_SHAPES.len());
        for (instance, desc) in instances.iter().zip(BACKDROP_SHAPES.iter()) {
            assert_eq!(instance.kind, desc.kind);
            assert_eq!(instance.color, desc.color);
            assert_eq!(instance.opacity, desc.kind.opacity());
            let (scale, _, _) = instance.transform.to_scale_rotation_translation();
            assert!((scale - Vec3::splat(desc.scale)).length() < 1e-5);
        }
    }

    #[test]
    fn pointer_at_center_matches_unpointed_run() {
        let viewport = Viewport::new(1920.0, 1080.0);
        let mut centered = composer(5);
        let mut pointer = PointerTracker::default();
        pointer.move_to(960.0, 540.0);

        let mut reference = composer(5);
        for _ in 0..30 {
            centered.advance(1.0 / 30.0, &pointer, viewport);
            for (desc, state) in reference.descriptors.iter().zip(reference.states.iter_mut()) {
                state.advance(desc, 1.0 / 30.0, Vec2::ZERO);
            }
        }
        assert_eq!(centered.states(), reference.states());
    }
}
