use bevy::prelude::*;

use constants::lighting::LIGHT_RIG;

/// Spawn the scene's lights from the fixed light rig description.
/// The rig is plain data; nothing mutates it after startup.
pub fn spawn_lighting(commands: &mut Commands) {
    let [ar, ag, ab] = LIGHT_RIG.ambient_colour;
    commands.insert_resource(AmbientLight {
        color: Color::srgb(ar, ag, ab),
        brightness: LIGHT_RIG.ambient_brightness,
        ..default()
    });

    let [sr, sg, sb] = LIGHT_RIG.sun_colour;
    commands.spawn((
        DirectionalLight {
            color: Color::srgb(sr, sg, sb),
            illuminance: LIGHT_RIG.sun_illuminance,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from(LIGHT_RIG.sun_position))
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
