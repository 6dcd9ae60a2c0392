use glam::{Mat4, Vec3};
use studio_core::CameraConfig;

/// Clip-space transform for a camera looking at the origin with +Y up.
pub fn view_projection(camera: &CameraConfig, aspect: f32) -> Mat4 {
    let view = Mat4::look_at_rh(camera.position, Vec3::ZERO, Vec3::Y);
    let proj = Mat4::perspective_rh(
        camera.fov_y_degrees.to_radians(),
        aspect.max(0.01),
        camera.near,
        camera.far,
    );
    proj * view
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;
    use studio_core::BACKDROP_CAMERA;

    fn to_ndc(m: Mat4, p: Vec3) -> Vec3 {
        let clip = m * Vec4::new(p.x, p.y, p.z, 1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let m = view_projection(&BACKDROP_CAMERA, 16.0 / 9.0);
        let ndc = to_ndc(m, Vec3::ZERO);
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn backdrop_shapes_are_in_front_of_camera() {
        let m = view_projection(&BACKDROP_CAMERA, 1.0);
        for desc in &studio_core::BACKDROP_SHAPES {
            let ndc = to_ndc(m, desc.base_position);
            assert!((0.0..=1.0).contains(&ndc.z), "{desc:?} clipped");
        }
    }

    #[test]
    fn degenerate_aspect_is_clamped() {
        let m = view_projection(&BACKDROP_CAMERA, 0.0);
        assert!(m.is_finite());
    }
}
