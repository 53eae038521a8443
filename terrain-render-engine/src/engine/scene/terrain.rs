use bevy::prelude::*;
use bevy::render::render_resource::TextureFormat;

use crate::engine::assets::terrain_assets::TerrainAssets;
use crate::engine::assets::terrain_manifest::TerrainManifest;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::terrain::error::TerrainError;
use crate::engine::terrain::heightfield::HeightField;
use crate::engine::terrain::mesh::{TerrainMesh, TerrainMeshBuilder};

use constants::terrain::TERRAIN_SURFACE_COLOUR;

/// Marker for the displaced terrain surface entity
#[derive(Component)]
pub struct TerrainSurface;

/// Build and spawn the terrain once its heightmap image is available.
///
/// Decode and build failures are terminal: they are reported and the app
/// exits, so a partially displaced mesh never reaches the scene.
pub fn create_terrain_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut assets: ResMut<TerrainAssets>,
    images: Res<Assets<Image>>,
    manifest: Option<Res<TerrainManifest>>,
    mut exit: EventWriter<AppExit>,
) {
    if loading_progress.terrain_created || !loading_progress.heightmap_loaded {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };
    let Some(image) = images.get(&assets.heightmap) else {
        return;
    };

    let Some(pixels) = rgba_pixels(image) else {
        error!(
            "Heightmap did not decode to RGBA8 pixel data (format {:?})",
            image.texture_descriptor.format
        );
        exit.write(AppExit::error());
        return;
    };

    let terrain_mesh = match build_terrain_mesh(pixels, image.width(), image.height(), &manifest) {
        Ok(mesh) => mesh,
        Err(err) => {
            error!("Terrain construction failed: {err}");
            exit.write(AppExit::error());
            return;
        }
    };

    spawn_terrain_entity(&mut commands, &mut meshes, &mut materials, terrain_mesh);

    assets.is_loaded = true;
    loading_progress.terrain_created = true;
    println!("Terrain mesh ready");
}

/// Raw RGBA bytes of the image, if it holds 8-bit RGBA data
fn rgba_pixels(image: &Image) -> Option<&[u8]> {
    match image.texture_descriptor.format {
        TextureFormat::Rgba8Unorm | TextureFormat::Rgba8UnormSrgb => image.data.as_deref(),
        _ => None,
    }
}

/// Decode the heightmap and displace a grid mesh with it.
/// The segment count is taken from the image so every pixel lands on
/// exactly one vertex.
fn build_terrain_mesh(
    pixels: &[u8],
    width: u32,
    height: u32,
    manifest: &TerrainManifest,
) -> Result<TerrainMesh, TerrainError> {
    let heights = HeightField::decode(pixels, width, height)?;
    let segments = heights.edge_segments();

    TerrainMeshBuilder::new(manifest.size, manifest.size, segments)
        .with_height_scale(manifest.height_scale)
        .build(&heights)
}

/// Spawn the terrain entity in its ground-plane orientation.
///
/// The mesh is built in the XY plane with +Z elevation; a single fixed
/// rotation lays it flat so up is where Y grows.
fn spawn_terrain_entity(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    terrain_mesh: TerrainMesh,
) {
    let [r, g, b] = TERRAIN_SURFACE_COLOUR;
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(r, g, b),
        perceptual_roughness: 1.0,
        ..default()
    });

    let vertex_count = terrain_mesh.positions.len();
    commands.spawn((
        Mesh3d(meshes.add(terrain_mesh.into_mesh())),
        MeshMaterial3d(material),
        Transform::from_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
        Visibility::Visible,
        TerrainSurface,
    ));

    println!("Terrain entity spawned with {vertex_count} vertices");
}
