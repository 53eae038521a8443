/// Fixed-schema description of the scene's light sources.
/// Plain data handed to the renderer at startup; never mutated afterwards.
pub struct LightRig {
    /// Ambient term colour (linear RGB)
    pub ambient_colour: [f32; 3],
    /// Ambient term brightness (lux)
    pub ambient_brightness: f32,
    /// World position the sun shines from, towards the origin
    pub sun_position: [f32; 3],
    /// Sun colour (linear RGB)
    pub sun_colour: [f32; 3],
    /// Sun intensity (lux)
    pub sun_illuminance: f32,
}

/// Default light rig: a white sun low over the +X horizon, ambient off
pub const LIGHT_RIG: LightRig = LightRig {
    ambient_colour: [0.266, 0.266, 0.266],
    ambient_brightness: 0.0,
    sun_position: [900.0, 400.0, 0.0],
    sun_colour: [1.0, 1.0, 1.0],
    sun_illuminance: 10_000.0,
};
