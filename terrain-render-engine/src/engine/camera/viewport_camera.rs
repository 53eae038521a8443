use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;

use constants::camera::{
    CAMERA_LERP_SPEED, CAMERA_START_EYE, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE,
    ORBIT_PITCH_LIMIT, ORBIT_PITCH_SENSITIVITY, ORBIT_YAW_SENSITIVITY, ORBIT_ZOOM_STEP,
};
use constants::terrain::TERRAIN_SIZE;

/// Orbit-style viewport camera state.
///
/// The camera circles `focus_point` at `distance`, oriented by yaw and
/// pitch. The controller only mutates this resource; the camera entity's
/// transform follows it with smoothing each frame.
#[derive(Resource)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl ViewportCamera {
    /// Place the orbit at an explicit eye position looking at `focus`
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().max(ORBIT_MIN_DISTANCE);
        Self {
            focus_point: focus,
            yaw: offset.x.atan2(offset.z),
            pitch: -(offset.y / distance).asin(),
            distance,
        }
    }

    /// Scale the default eye position so a terrain of the given planar
    /// size fills the view the way the default terrain does
    pub fn with_terrain_size(size: f32) -> Self {
        let eye = Vec3::from(CAMERA_START_EYE) * (size / TERRAIN_SIZE);
        Self::from_eye(eye, Vec3::ZERO)
    }

    /// World rotation of the camera for the current yaw and pitch
    pub fn orbit_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// World position of the camera eye on the orbit sphere
    pub fn eye_position(&self) -> Vec3 {
        self.focus_point + self.orbit_rotation() * (Vec3::Z * self.distance)
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self::from_eye(Vec3::from(CAMERA_START_EYE), Vec3::ZERO)
    }
}

/// Spawn the viewer camera at the configured start position
pub fn spawn_camera(commands: &mut Commands) {
    let eye = Vec3::from(CAMERA_START_EYE);
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Left-drag orbits around the focus point
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * ORBIT_YAW_SENSITIVITY;
        orbit.pitch -= mouse_delta.y * ORBIT_PITCH_SENSITIVITY;
        orbit.pitch = orbit.pitch.clamp(-ORBIT_PITCH_LIMIT, ORBIT_PITCH_LIMIT);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Wheel dollies towards or away from the focus point
    if scroll_accum.abs() > f32::EPSILON {
        let factor = 1.0 - scroll_accum * ORBIT_ZOOM_STEP;
        orbit.distance = (orbit.distance * factor).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
    }

    let target_rot = orbit.orbit_rotation();
    let target_pos = orbit.eye_position();

    let lerp_speed = (CAMERA_LERP_SPEED * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_eye_reconstructs_the_eye_position() {
        let eye = Vec3::new(1000.0, 240.0, 0.0);
        let orbit = ViewportCamera::from_eye(eye, Vec3::ZERO);
        assert!((orbit.eye_position() - eye).length() < 1e-2);
    }

    #[test]
    fn terrain_sized_orbit_scales_with_the_terrain() {
        let default_orbit = ViewportCamera::default();
        let half_orbit = ViewportCamera::with_terrain_size(TERRAIN_SIZE * 0.5);
        assert!((half_orbit.distance - default_orbit.distance * 0.5).abs() < 1e-2);
    }
}
