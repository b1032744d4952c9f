use std::time::Duration;

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Degrees of yaw per elapsed millisecond.
pub const ROTATION_DEG_PER_MS: f32 = -0.0005;

const MODEL_OFFSET: Vec3 = Vec3::new(0.5, 0.0, 0.0);
const MODEL_SCALE: Vec3 = Vec3::new(2.0, 2.0, 2.0);
const VIEW_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -5.0);
const FOV_Y_DEG: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Rotation is a function of wall-clock time since startup, not frame count.
pub fn rotation_angle_deg(elapsed: Duration) -> f32 {
    elapsed.as_secs_f32() * 1000.0 * ROTATION_DEG_PER_MS
}

/// Translation outermost, then rotation about Y, then uniform scale.
pub fn model(elapsed: Duration) -> Mat4 {
    Mat4::from_translation(MODEL_OFFSET)
        * Mat4::from_rotation_y(rotation_angle_deg(elapsed).to_radians())
        * Mat4::from_scale(MODEL_SCALE)
}

/// Camera pulled back five units along -Z.
pub fn view() -> Mat4 {
    Mat4::from_translation(VIEW_OFFSET)
}

pub fn projection(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(FOV_Y_DEG.to_radians(), aspect, Z_NEAR, Z_FAR)
}

/// Shader-side transform block: model, view, projection, in that order.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct TransformUniform {
    model: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

impl TransformUniform {
    pub fn new(elapsed: Duration, aspect: f32) -> Self {
        Self {
            model: model(elapsed).to_cols_array_2d(),
            view: view().to_cols_array_2d(),
            projection: projection(aspect).to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec4;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_rotation_angle_is_linear_in_elapsed_millis() {
        assert_eq!(rotation_angle_deg(Duration::ZERO), 0.0);
        let angle = rotation_angle_deg(Duration::from_millis(10_000));
        assert!((angle - 10_000.0 * ROTATION_DEG_PER_MS).abs() < EPS);
    }

    #[test]
    fn test_model_at_start_is_translate_times_scale() {
        let m = model(Duration::ZERO);
        let mapped = m * Vec4::new(0.5, 0.5, 0.0, 1.0);
        assert!((mapped - Vec4::new(1.5, 1.0, 0.0, 1.0)).length() < EPS);
    }

    #[test]
    fn test_view_pulls_camera_back() {
        let eye = view().transform_point3(Vec3::ZERO);
        assert!((eye - Vec3::new(0.0, 0.0, -5.0)).length() < EPS);
    }

    #[test]
    fn test_projection_tracks_aspect() {
        // Focal term on X is f/aspect, so doubling the aspect halves it.
        let narrow = projection(1.0);
        let wide = projection(2.0);
        assert!((wide.col(0).x - narrow.col(0).x / 2.0).abs() < EPS);

        // 400x300 and 800x600 share an aspect and must agree exactly.
        assert_eq!(projection(400.0 / 300.0), projection(800.0 / 600.0));
    }

    #[test]
    fn test_uniform_layout_and_field_order() {
        let uniform = TransformUniform::new(Duration::ZERO, 800.0 / 600.0);
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 192);

        let model_cols = model(Duration::ZERO).to_cols_array();
        let view_cols = view().to_cols_array();
        let proj_cols = projection(800.0 / 600.0).to_cols_array();

        assert_eq!(&bytes[..64], bytemuck::cast_slice::<f32, u8>(&model_cols));
        assert_eq!(&bytes[64..128], bytemuck::cast_slice::<f32, u8>(&view_cols));
        assert_eq!(&bytes[128..], bytemuck::cast_slice::<f32, u8>(&proj_cols));
    }

    #[test]
    fn test_composition_maps_centered_vertex_into_clip_space() {
        let mvp = projection(800.0 / 600.0) * view() * model(Duration::ZERO);
        let clip = mvp * Vec4::new(0.0, 0.0, 0.0, 1.0);
        // Object center sits in front of the camera, inside the frustum.
        assert!(clip.w > 0.0);
        let ndc = clip / clip.w;
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }
}
