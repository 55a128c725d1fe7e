use bevy::{
    pbr::light_consts,
    prelude::*,
    render::{
        render_asset::RenderAssetUsages,
        render_resource::{Extent3d, TextureDimension, TextureFormat},
    },
};
use nalgebra::{UnitQuaternion, Vector3};

use crate::{
    components::{GliderState, GliderTelemetry, PlayerController},
    plugins::{AppState, GliderSet},
    resources::{TerrainColorMap, TerrainSurface},
};

#[derive(Component)]
pub struct TerrainMesh;

#[derive(Component)]
pub struct HudText;

/// Trails the player's glider from behind and above.
#[derive(Component, Debug, Clone)]
pub struct ChaseCamera {
    /// Horizontal distance behind the glider [m]
    pub distance: f32,
    /// Height above the glider [m]
    pub height: f32,
    /// Exponential follow rate [1/s]
    pub stiffness: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            distance: 30.0,
            height: 8.0,
            stiffness: 4.0,
        }
    }
}

/// Renders the terrain, the glider and a chase view once the terrain is ready.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.55, 0.72, 0.92)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 300.0,
            })
            .add_systems(
                OnEnter(AppState::Flying),
                (
                    spawn_terrain_mesh,
                    spawn_glider_model,
                    spawn_lighting,
                    spawn_chase_camera,
                    spawn_hud,
                ),
            )
            .add_systems(
                Update,
                (glider_transform_system, chase_camera_system, hud_system)
                    .chain()
                    .after(GliderSet::Telemetry)
                    .run_if(in_state(AppState::Flying)),
            );
    }
}

pub fn to_render_translation(position: &Vector3<f64>) -> Vec3 {
    Vec3::new(position.x as f32, position.y as f32, position.z as f32)
}

pub fn to_render_rotation(attitude: &UnitQuaternion<f64>) -> Quat {
    Quat::from_xyzw(
        attitude.i as f32,
        attitude.j as f32,
        attitude.k as f32,
        attitude.w as f32,
    )
}

/// Camera position `distance` behind the glider's heading and `height` above it.
pub fn chase_target(state: &GliderState, chase: &ChaseCamera) -> Vec3 {
    let heading = state.yaw as f32;
    let behind = Vec3::new(-heading.sin(), 0.0, heading.cos());
    to_render_translation(&state.position) + behind * chase.distance + Vec3::Y * chase.height
}

fn color_map_image(map: &TerrainColorMap) -> Image {
    Image::new(
        Extent3d {
            width: map.width,
            height: map.height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        map.rgba.clone(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

fn spawn_terrain_mesh(
    mut commands: Commands,
    surface: Res<TerrainSurface>,
    color_map: Option<Res<TerrainColorMap>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let data = surface.build_mesh();
    info!(
        "Terrain mesh: {} vertices, {} triangles",
        data.vertex_count(),
        data.triangle_count()
    );

    let base_color_texture = color_map.map(|map| images.add(color_map_image(&map)));
    let base_color = if base_color_texture.is_some() {
        Color::WHITE
    } else {
        Color::srgb(0.35, 0.5, 0.3)
    };

    commands.spawn((
        Mesh3d(meshes.add(data.into_mesh())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color,
            base_color_texture,
            perceptual_roughness: 0.95,
            ..default()
        })),
        Transform::default(),
        TerrainMesh,
        Name::new("Terrain"),
    ));
}

fn spawn_glider_model(
    mut commands: Commands,
    gliders: Query<(Entity, &GliderState)>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let wing = meshes.add(Cuboid::new(12.0, 0.3, 1.5));
    let fuselage = meshes.add(Cuboid::new(0.8, 0.8, 6.0));
    let material = materials.add(Color::srgb(0.92, 0.92, 0.96));

    for (entity, state) in gliders.iter() {
        commands
            .entity(entity)
            .insert((
                Transform::from_translation(to_render_translation(&state.position))
                    .with_rotation(to_render_rotation(&state.attitude)),
                Visibility::default(),
            ))
            .with_children(|parent| {
                parent.spawn((Mesh3d(wing.clone()), MeshMaterial3d(material.clone())));
                parent.spawn((
                    Mesh3d(fuselage.clone()),
                    MeshMaterial3d(material.clone()),
                    Transform::from_xyz(0.0, 0.0, 1.0),
                ));
            });
    }
}

fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: light_consts::lux::AMBIENT_DAYLIGHT,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));
}

fn spawn_chase_camera(
    mut commands: Commands,
    gliders: Query<&GliderState, With<PlayerController>>,
) {
    let chase = ChaseCamera::default();
    let transform = match gliders.get_single() {
        Ok(state) => Transform::from_translation(chase_target(state, &chase))
            .looking_at(to_render_translation(&state.position), Vec3::Y),
        Err(_) => {
            warn!("No player glider found when spawning camera");
            Transform::from_xyz(0.0, 1000.0, 0.0)
        }
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            far: 20_000.0,
            ..default()
        }),
        transform,
        chase,
    ));
}

fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
        HudText,
    ));
}

fn glider_transform_system(mut gliders: Query<(&GliderState, &mut Transform)>) {
    for (state, mut transform) in gliders.iter_mut() {
        transform.translation = to_render_translation(&state.position);
        transform.rotation = to_render_rotation(&state.attitude);
    }
}

fn chase_camera_system(
    time: Res<Time>,
    gliders: Query<&GliderState, With<PlayerController>>,
    mut cameras: Query<(&mut Transform, &ChaseCamera)>,
) {
    let Ok(state) = gliders.get_single() else {
        return;
    };
    let Ok((mut transform, chase)) = cameras.get_single_mut() else {
        return;
    };

    let blend = 1.0 - (-chase.stiffness * time.delta_secs()).exp();
    transform.translation = transform.translation.lerp(chase_target(state, chase), blend);
    transform.look_at(to_render_translation(&state.position), Vec3::Y);
}

fn hud_system(
    gliders: Query<&GliderTelemetry, With<PlayerController>>,
    mut hud: Query<&mut Text, With<HudText>>,
) {
    let (Ok(telemetry), Ok(mut text)) = (gliders.get_single(), hud.get_single_mut()) else {
        return;
    };

    text.0 = format!(
        "Speed {:.0} km/h\nAltitude {:.0} m\nAoA {:.1}°\nLift {:.2} m/s²\nHeading {:.0}°",
        telemetry.speed_kmh,
        telemetry.altitude,
        telemetry.angle_of_attack_deg,
        telemetry.lift,
        telemetry.heading_deg,
    );
    if telemetry.crashed {
        text.0.push_str("\n\nCRASHED (press R to reset)");
    }
}
