//! Light collection for the mesh pass
//!
//! Walks the top-level light entities of a world and packs them into
//! [`SceneUniforms`]. Rect-area lights are approximated as point lights at
//! their position with a fixed range.

use liminal_core::{LightKind, World};
use liminal_math::{Mat4, Vec3};

use crate::pipeline::{GpuDirectionalLight, GpuPointLight, SceneUniforms, MAX_DIRECTIONAL_LIGHTS, MAX_POINT_LIGHTS};

/// Range used when a rect-area light is drawn as a point light
pub const RECT_AREA_RANGE: f32 = 20.0;

/// Build the per-frame uniforms for one environment
pub fn scene_uniforms(world: &World, view_projection: Mat4, eye: Vec3) -> SceneUniforms {
    let mut uniforms = SceneUniforms {
        view_projection,
        camera_position: [eye.x, eye.y, eye.z, 1.0],
        ..SceneUniforms::default()
    };

    let mut ambient = [0.0f32; 3];
    let mut points = 0usize;
    let mut directionals = 0usize;
    let mut dropped = 0usize;

    for entity in world.iter() {
        let Some(light) = entity.as_light() else {
            continue;
        };
        let position = entity.transform.position;
        let color = [light.color[0], light.color[1], light.color[2], light.intensity];

        match light.kind {
            LightKind::Ambient => {
                for (sum, c) in ambient.iter_mut().zip(light.color) {
                    *sum += c * light.intensity;
                }
            }
            LightKind::Point { .. } | LightKind::RectArea { .. } => {
                let range = match light.kind {
                    LightKind::Point { range } => range,
                    _ => RECT_AREA_RANGE,
                };
                if points < MAX_POINT_LIGHTS {
                    uniforms.point_lights[points] = GpuPointLight {
                        position: [position.x, position.y, position.z, range],
                        color,
                    };
                    points += 1;
                } else {
                    dropped += 1;
                }
            }
            LightKind::Directional => {
                let direction = if position.length_squared() > 0.0 { position.normalized() } else { Vec3::Y };
                if directionals < MAX_DIRECTIONAL_LIGHTS {
                    uniforms.directional_lights[directionals] = GpuDirectionalLight {
                        direction: [direction.x, direction.y, direction.z, 0.0],
                        color,
                    };
                    directionals += 1;
                } else {
                    dropped += 1;
                }
            }
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {} lights over the per-environment limit", dropped);
    }

    uniforms.ambient = [ambient[0], ambient[1], ambient[2], 1.0];
    uniforms.light_counts = [points as u32, directionals as u32, 0, 0];
    uniforms
}

#[cfg(test)]
mod tests {
    use super::*;
    use liminal_core::{Entity, Light};
    use liminal_math::mat4;

    fn uniforms_for(world: &World) -> SceneUniforms {
        scene_uniforms(world, mat4::IDENTITY, Vec3::new(0.0, 1.6, 5.0))
    }

    #[test]
    fn test_ambient_summed() {
        let mut world = World::new();
        world.add_entity(Entity::light(Light::ambient(0xffffff, 0.25)));
        world.add_entity(Entity::light(Light::ambient(0xffffff, 0.25)));

        let uniforms = uniforms_for(&world);
        assert!((uniforms.ambient[0] - 0.5).abs() < 1e-6);
        assert_eq!(uniforms.light_counts, [0, 0, 0, 0]);
    }

    #[test]
    fn test_point_and_rect_area_lights() {
        let mut world = World::new();
        world.add_entity(Entity::light(Light::point(0xccccff, 0.8, 10.0)).at(Vec3::new(0.0, 2.8, -5.0)));
        world.add_entity(Entity::light(Light::rect_area(0xffffff, 6.0, 4.0, 0.5)).at(Vec3::new(0.0, 3.9, 0.0)));

        let uniforms = uniforms_for(&world);
        assert_eq!(uniforms.light_counts[0], 2);
        assert_eq!(uniforms.point_lights[0].position, [0.0, 2.8, -5.0, 10.0]);
        assert_eq!(uniforms.point_lights[0].color[3], 0.8);
        assert_eq!(uniforms.point_lights[1].position[3], RECT_AREA_RANGE);
        assert_eq!(uniforms.point_lights[1].color[3], 6.0);
    }

    #[test]
    fn test_directional_points_toward_light() {
        let mut world = World::new();
        world.add_entity(Entity::light(Light::directional(0xffffff, 1.0)).at(Vec3::new(0.0, 10.0, 0.0)));

        let uniforms = uniforms_for(&world);
        assert_eq!(uniforms.light_counts[1], 1);
        assert_eq!(uniforms.directional_lights[0].direction, [0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_point_lights_capped() {
        let mut world = World::new();
        for i in 0..(MAX_POINT_LIGHTS + 5) {
            world.add_entity(Entity::light(Light::point(0xffffff, 1.0, 5.0)).at(Vec3::new(0.0, 0.0, i as f32)));
        }
        let uniforms = uniforms_for(&world);
        assert_eq!(uniforms.light_counts[0] as usize, MAX_POINT_LIGHTS);
    }

    #[test]
    fn test_camera_position() {
        let uniforms = uniforms_for(&World::new());
        assert_eq!(uniforms.camera_position, [0.0, 1.6, 5.0, 1.0]);
    }
}
