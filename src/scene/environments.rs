//! The three liminal environments
//!
//! Layout is fixed; the injected RNG only jitters door sides, chair
//! placement, fish and bubble parameters, and light flicker.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use rand::Rng;

use liminal_core::{AnimState, Entity, Environment, EnvironmentKind, Euler, Light, Material, ObjectTag, Primitive};
use liminal_math::Vec3;

use super::SceneBuilder;

/// Corridor: a long backrooms hallway with doors and flickering ceiling lights
pub fn build_corridor<R: Rng>(rng: &mut R) -> Environment {
    let mut builder = SceneBuilder::with_capacity(48)
        .add_floor(20.0, 100.0, 0x777777, ObjectTag::DriftingPlane)
        .add_ceiling(20.0, 100.0, 3.0, 0x888888)
        .add_wall(100.0, 3.0, 0x999999, Vec3::new(-10.0, 1.5, 0.0), FRAC_PI_2, ObjectTag::DriftingPlane)
        .add_wall(100.0, 3.0, 0x999999, Vec3::new(10.0, 1.5, 0.0), -FRAC_PI_2, ObjectTag::DriftingPlane);

    for i in 0..10 {
        let x = if rng.gen::<f32>() > 0.5 { -8.0 } else { 8.0 };
        let z = -(i as f32) * 10.0;
        let door = Entity::mesh_with_material(Primitive::cuboid(1.5, 2.5, 0.1), Material::from_hex(0x555555))
            .with_name(format!("door_{}", i))
            .at(Vec3::new(x, 1.25, z));
        let handle_x = if x > 0.0 { x - 0.5 } else { x + 0.5 };
        let handle = Entity::mesh_with_material(Primitive::sphere(0.05), Material::from_hex(0xaaaaaa))
            .at(Vec3::new(handle_x, 1.25, z - 0.05));
        builder = builder.add(door).add(handle);
    }

    builder = builder.add_light(Light::ambient(0x404040, 0.5), Vec3::ZERO, ObjectTag::Static);

    for i in 0..20 {
        let intensity = 0.8 + rng.gen::<f32>() * 0.4;
        let light = Entity::light(Light::point(0xccccff, intensity, 10.0))
            .with_tag(ObjectTag::FlickerLight)
            .at(Vec3::new(0.0, 2.8, -(i as f32) * 5.0));
        let interval_ms = 500.0 + rng.gen::<f64>() * 1000.0;
        builder = builder.add_flickering_lights(vec![light], interval_ms, 0.6, 0.6);
    }

    builder
        .add_hidden_orb(0.1, 0xffaaaa, 0xff5555, Vec3::new(5.0, 0.5, -15.0))
        .build(EnvironmentKind::Corridor)
}

/// Pool: a tiled poolroom with floating chairs, fish, and rising bubbles
pub fn build_pool<R: Rng>(rng: &mut R) -> Environment {
    let water = Entity::mesh_with_material(
        Primitive::cuboid(15.0, 2.0, 15.0),
        Material::from_hex(0x4488ff).with_opacity(0.8),
    )
    .with_name("water")
    .with_tag(ObjectTag::Water)
    .at(Vec3::new(0.0, -1.0, 0.0));

    let edge = Entity::mesh_with_material(Primitive::cuboid(16.0, 0.5, 16.0), Material::from_hex(0xffffff))
        .with_name("pool_edge");

    let mut builder = SceneBuilder::with_capacity(32)
        .add_floor(30.0, 30.0, 0xaaaaaa, ObjectTag::Static)
        .add(water)
        .add(edge);

    for i in 0..3 {
        let step = Entity::mesh_with_material(Primitive::cuboid(1.0, 0.1, 2.0), Material::from_hex(0x888888))
            .at(Vec3::new(6.0, -0.9 + i as f32 * 0.3, 0.0));
        builder = builder.add(step);
    }

    for _ in 0..5 {
        let position = Vec3::new(
            -10.0 + rng.gen::<f32>() * 20.0,
            rng.gen::<f32>() * 3.0,
            -10.0 + rng.gen::<f32>() * 20.0,
        );
        let mut chair = Entity::mesh_with_material(Primitive::cuboid(1.0, 0.8, 0.5), Material::from_hex(0xff8888))
            .with_tag(ObjectTag::FloatingChair)
            .at(position);
        chair.transform_mut().rotation = Euler::about_y(rng.gen::<f32>() * TAU);
        builder = builder.add(chair);
    }

    builder = builder
        .add_light(Light::ambient(0x606060, 0.6), Vec3::ZERO, ObjectTag::Static)
        .add_light(Light::directional(0xffffff, 0.8), Vec3::new(5.0, 10.0, 5.0), ObjectTag::Static)
        .add_hidden_orb(0.15, 0xffff88, 0xffff00, Vec3::new(0.0, -0.5, 5.0));

    for i in 0..4 {
        builder = builder.add(fish(rng, i));
    }
    for _ in 0..12 {
        builder = builder.add(bubble(rng));
    }

    builder.build(EnvironmentKind::Pool)
}

/// Fish swim lanes run along Z inside the water volume
const FISH_MIN_Z: f32 = -7.0;
const FISH_MAX_Z: f32 = 7.0;

fn fish<R: Rng>(rng: &mut R, lane: usize) -> Entity {
    let color = [0xff9944, 0xffcc33, 0xff6677, 0x66ddcc][lane % 4];
    let direction = if rng.gen::<bool>() { 1.0 } else { -1.0 };
    let z = -6.0 + rng.gen::<f32>() * 12.0;
    let position = Vec3::new(-4.5 + lane as f32 * 3.0, -1.2 - (lane % 2) as f32 * 0.3, z);

    let tail = Entity::mesh_with_material(Primitive::cuboid(0.02, 0.15, 0.2), Material::from_hex(color))
        .with_tag(ObjectTag::FishTail)
        .at(Vec3::new(0.0, 0.0, -0.3));

    let mut body = Entity::mesh_with_material(Primitive::cuboid(0.2, 0.15, 0.5), Material::from_hex(color))
        .with_name(format!("fish_{}", lane))
        .with_tag(ObjectTag::Fish)
        .at(position)
        .with_anim(AnimState::Fish {
            direction,
            speed: 0.01 + rng.gen::<f32>() * 0.02,
            phase: rng.gen::<f32>() * TAU,
            min_z: FISH_MIN_Z,
            max_z: FISH_MAX_Z,
        })
        .with_child(tail);
    body.transform_mut().rotation = Euler::about_y(if direction > 0.0 { 0.0 } else { PI });
    body
}

/// Bubbles rise from just above the pool floor and wrap at the surface
fn bubble<R: Rng>(rng: &mut R) -> Entity {
    let origin = Vec3::new(-7.0 + rng.gen::<f32>() * 14.0, -1.9, -7.0 + rng.gen::<f32>() * 14.0);
    let start = Vec3::new(origin.x, origin.y + rng.gen::<f32>() * 1.9, origin.z);

    Entity::mesh_with_material(
        Primitive::sphere(0.03 + rng.gen::<f32>() * 0.04),
        Material::from_hex(0xccffff).with_opacity(0.5),
    )
    .with_tag(ObjectTag::Bubble)
    .at(start)
    .with_anim(AnimState::Bubble {
        origin,
        rise_speed: 0.005 + rng.gen::<f32>() * 0.01,
        ceiling: 0.0,
    })
}

/// Classroom: rows of desks under flickering fluorescent panels
pub fn build_classroom<R: Rng>(rng: &mut R) -> Environment {
    let blackboard = Entity::mesh_with_material(Primitive::plane(8.0, 4.0), Material::from_hex(0x222222))
        .with_name("blackboard")
        .with_tag(ObjectTag::Blackboard)
        .at(Vec3::new(0.0, 2.5, -12.4));

    let mut builder = SceneBuilder::with_capacity(48)
        .add_floor(25.0, 25.0, 0x886644, ObjectTag::Furniture)
        .add_wall(25.0, 4.0, 0xccaa99, Vec3::new(0.0, 2.0, -12.5), 0.0, ObjectTag::Static)
        .add_wall(25.0, 4.0, 0xccaa99, Vec3::new(-12.5, 2.0, 0.0), FRAC_PI_2, ObjectTag::Static)
        .add_wall(25.0, 4.0, 0xccaa99, Vec3::new(12.5, 2.0, 0.0), -FRAC_PI_2, ObjectTag::Static)
        .add(blackboard);

    for i in 0..15 {
        let x = -10.0 + (i % 5) as f32 * 5.0;
        let z = -8.0 + (i / 5) as f32 * 4.0;
        let desk = Entity::mesh_with_material(Primitive::cuboid(1.5, 0.7, 0.8), Material::from_hex(0x664422))
            .with_tag(ObjectTag::Furniture)
            .at(Vec3::new(x, 0.35, z));
        let chair = Entity::mesh_with_material(Primitive::cuboid(0.6, 0.6, 0.6), Material::from_hex(0x443322))
            .with_tag(ObjectTag::Furniture)
            .at(Vec3::new(x, 0.3, z + 1.0));
        builder = builder.add(desk).add(chair);
    }

    builder = builder.add_light(Light::ambient(0x406080, 0.5), Vec3::ZERO, ObjectTag::Static);

    let panels = [(0x88ffff, 6.0, 0.0), (0x66ffff, 5.0, -6.0), (0x99ffff, 5.0, 6.0)]
        .into_iter()
        .map(|(hex, intensity, x)| {
            Entity::light(Light::rect_area(hex, intensity, 4.0, 1.0))
                .with_tag(ObjectTag::FluorescentLight)
                .at(Vec3::new(x, 3.8, 0.0))
        })
        .collect();
    let interval_ms = 200.0 + rng.gen::<f64>() * 800.0;
    builder = builder.add_flickering_lights(panels, interval_ms, 4.0, 4.0);

    for (x, z) in [(-10.0, -10.0), (10.0, -10.0), (-10.0, 10.0), (10.0, 10.0)] {
        builder = builder.add_light(Light::point(0x44aaaa, 0.5, 15.0), Vec3::new(x, 2.0, z), ObjectTag::Static);
    }

    builder
        .add_hidden_orb(0.12, 0xff88ff, 0xff00ff, Vec3::new(-5.0, 1.0, -10.0))
        .build(EnvironmentKind::Classroom)
}

/// Build all three environments in index order
pub fn build_all<R: Rng>(rng: &mut R) -> [Environment; 3] {
    let corridor = build_corridor(rng);
    let pool = build_pool(rng);
    let classroom = build_classroom(rng);
    log::info!(
        "Built environments: corridor {} objects, pool {} objects, classroom {} objects",
        corridor.world.entity_count(),
        pool.world.entity_count(),
        classroom.world.entity_count()
    );
    [corridor, pool, classroom]
}

#[cfg(test)]
mod tests {
    use super::*;
    use liminal_core::{EffectAction, EntityKind, LightKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn count_tag(env: &Environment, tag: ObjectTag) -> usize {
        env.world.iter().filter(|e| e.has_tag(tag)).count()
    }

    fn count_lights(env: &Environment, pred: impl Fn(&LightKind) -> bool) -> usize {
        env.world
            .iter()
            .filter(|e| matches!(&e.kind, EntityKind::Light(light) if pred(&light.kind)))
            .count()
    }

    #[test]
    fn test_corridor_structure() {
        let env = build_corridor(&mut rng());
        assert_eq!(env.kind(), EnvironmentKind::Corridor);
        assert_eq!(env.world.entity_count(), 46);
        assert_eq!(count_tag(&env, ObjectTag::DriftingPlane), 3);
        assert_eq!(count_tag(&env, ObjectTag::FlickerLight), 20);
        assert_eq!(count_tag(&env, ObjectTag::Hidden), 1);
        assert_eq!(count_lights(&env, |k| matches!(k, LightKind::Ambient)), 1);
        assert_eq!(env.effects().len(), 20);
    }

    #[test]
    fn test_corridor_jitter_ranges() {
        let env = build_corridor(&mut rng());
        for light in env.world.iter().filter_map(|e| e.as_light()) {
            if let LightKind::Point { range } = light.kind {
                assert_eq!(range, 10.0);
                assert!((0.8..=1.2).contains(&light.intensity));
            }
        }
        for effect in env.effects() {
            assert!((500.0..=1500.0).contains(&effect.interval_ms()));
        }
        for i in 0..10 {
            let (_, door) = env.world.find_by_name(&format!("door_{}", i)).unwrap();
            assert_eq!(door.transform.position.x.abs(), 8.0);
            assert_eq!(door.transform.position.z, -(i as f32) * 10.0);
        }
    }

    #[test]
    fn test_pool_structure() {
        let env = build_pool(&mut rng());
        assert_eq!(env.world.entity_count(), 30);
        assert_eq!(count_tag(&env, ObjectTag::Water), 1);
        assert_eq!(count_tag(&env, ObjectTag::FloatingChair), 5);
        assert_eq!(count_tag(&env, ObjectTag::Fish), 4);
        assert_eq!(count_tag(&env, ObjectTag::Bubble), 12);
        assert_eq!(count_lights(&env, |k| matches!(k, LightKind::Directional)), 1);
        assert!(env.effects().is_empty());

        let (_, water) = env.world.find_by_name("water").unwrap();
        assert!(water.material.transparent);
        assert_eq!(water.material.opacity(), 0.8);
    }

    #[test]
    fn test_pool_ocean_life() {
        let env = build_pool(&mut rng());
        for fish in env.world.iter().filter(|e| e.has_tag(ObjectTag::Fish)) {
            assert_eq!(fish.children.len(), 1);
            assert!(fish.children[0].has_tag(ObjectTag::FishTail));
            let z = fish.transform.position.z;
            assert!((FISH_MIN_Z..=FISH_MAX_Z).contains(&z));
            assert!(matches!(fish.anim, Some(AnimState::Fish { .. })));
        }
        for bubble in env.world.iter().filter(|e| e.has_tag(ObjectTag::Bubble)) {
            match bubble.anim {
                Some(AnimState::Bubble { origin, ceiling, .. }) => {
                    assert!(bubble.transform.position.y >= origin.y);
                    assert!(bubble.transform.position.y <= ceiling);
                    assert!(origin.x.abs() <= 7.0 && origin.z.abs() <= 7.0);
                }
                other => panic!("Expected bubble state, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_pool_chairs_in_range() {
        let env = build_pool(&mut rng());
        for chair in env.world.iter().filter(|e| e.has_tag(ObjectTag::FloatingChair)) {
            let p = chair.transform.position;
            assert!((-10.0..=10.0).contains(&p.x));
            assert!((0.0..=3.0).contains(&p.y));
            assert!((-10.0..=10.0).contains(&p.z));
        }
    }

    #[test]
    fn test_classroom_structure() {
        let env = build_classroom(&mut rng());
        assert_eq!(env.world.entity_count(), 44);
        assert_eq!(count_tag(&env, ObjectTag::Furniture), 31);
        assert_eq!(count_tag(&env, ObjectTag::Blackboard), 1);
        assert_eq!(count_tag(&env, ObjectTag::FluorescentLight), 3);
        assert_eq!(count_lights(&env, |k| matches!(k, LightKind::Point { .. })), 4);

        assert_eq!(env.effects().len(), 1);
        let effect = &env.effects()[0];
        assert!((200.0..=1000.0).contains(&effect.interval_ms()));
        let EffectAction::FlickerIntensity { targets, base, spread } = effect.action();
        assert_eq!(targets.len(), 3);
        assert_eq!((*base, *spread), (4.0, 4.0));
    }

    #[test]
    fn test_fluorescent_intensities() {
        let env = build_classroom(&mut rng());
        let intensities: Vec<f32> = env
            .world
            .iter()
            .filter(|e| e.has_tag(ObjectTag::FluorescentLight))
            .filter_map(|e| e.as_light().map(|l| l.intensity))
            .collect();
        assert_eq!(intensities, vec![6.0, 5.0, 5.0]);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = build_pool(&mut StdRng::seed_from_u64(99));
        let b = build_pool(&mut StdRng::seed_from_u64(99));
        let positions = |env: &Environment| env.world.iter().map(|e| e.transform.position).collect::<Vec<_>>();
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn test_build_all_order() {
        let envs = build_all(&mut rng());
        let kinds: Vec<EnvironmentKind> = envs.iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, EnvironmentKind::ALL.to_vec());
        assert!(envs.iter().all(|e| !e.is_visible()));
    }
}
