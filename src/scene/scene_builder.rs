//! SceneBuilder - Declarative environment construction
//!
//! Provides a fluent API for building an environment's object list together
//! with the periodic effects it owns.

use std::f32::consts::FRAC_PI_2;

use liminal_core::{
    EffectAction, Entity, Environment, EnvironmentKind, Euler, Light, Material, ObjectTag,
    PeriodicEffect, Primitive, Transform, World,
};
use liminal_math::Vec3;

/// Builder for constructing one environment
///
/// # Example
/// ```ignore
/// let corridor = SceneBuilder::new()
///     .add_floor(20.0, 100.0, 0x777777, ObjectTag::DriftingPlane)
///     .add_light(Light::ambient(0x404040, 0.5), Vec3::ZERO, ObjectTag::Static)
///     .add_hidden_orb(0.1, 0xffaaaa, 0xff5555, Vec3::new(5.0, 0.5, -15.0))
///     .build(EnvironmentKind::Corridor);
/// ```
pub struct SceneBuilder {
    world: World,
    effects: Vec<PeriodicEffect>,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self {
            world: World::new(),
            effects: Vec::new(),
        }
    }

    /// Create a scene builder with a pre-allocated world capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            world: World::with_capacity(capacity),
            effects: Vec::new(),
        }
    }

    /// Add an entity as-is
    pub fn add(mut self, entity: Entity) -> Self {
        self.world.add_entity(entity);
        self
    }

    /// Add a horizontal floor plane at y = 0
    pub fn add_floor(self, width: f32, depth: f32, hex: u32, tag: ObjectTag) -> Self {
        let floor = Entity::mesh_with_material(Primitive::plane(width, depth), Material::from_hex(hex))
            .with_name("floor")
            .with_tag(tag)
            .with_transform(Transform::from_position_rotation(Vec3::ZERO, Euler::about_x(-FRAC_PI_2)));
        self.add(floor)
    }

    /// Add a ceiling plane facing down at `height`
    pub fn add_ceiling(self, width: f32, depth: f32, height: f32, hex: u32) -> Self {
        let ceiling = Entity::mesh_with_material(Primitive::plane(width, depth), Material::from_hex(hex))
            .with_name("ceiling")
            .with_transform(Transform::from_position_rotation(
                Vec3::new(0.0, height, 0.0),
                Euler::about_x(FRAC_PI_2),
            ));
        self.add(ceiling)
    }

    /// Add a vertical wall plane turned by `yaw` about Y
    pub fn add_wall(self, width: f32, height: f32, hex: u32, position: Vec3, yaw: f32, tag: ObjectTag) -> Self {
        let wall = Entity::mesh_with_material(Primitive::plane(width, height), Material::from_hex(hex))
            .with_name("wall")
            .with_tag(tag)
            .with_transform(Transform::from_position_rotation(position, Euler::about_y(yaw)));
        self.add(wall)
    }

    /// Add a light at a position
    pub fn add_light(self, light: Light, position: Vec3, tag: ObjectTag) -> Self {
        self.add(Entity::light(light).at(position).with_tag(tag))
    }

    /// Add lights that share one flicker effect
    ///
    /// Every `interval_ms` each light's intensity is set to
    /// `base + U(0,1) * spread`.
    pub fn add_flickering_lights(mut self, lights: Vec<Entity>, interval_ms: f64, base: f32, spread: f32) -> Self {
        let targets = lights
            .into_iter()
            .map(|light| self.world.add_entity(light))
            .collect();
        self.effects.push(PeriodicEffect::new(
            interval_ms,
            EffectAction::FlickerIntensity { targets, base, spread },
        ));
        self
    }

    /// Add the small glowing orb hidden in each environment
    pub fn add_hidden_orb(self, radius: f32, hex: u32, emissive: u32, position: Vec3) -> Self {
        let orb = Entity::mesh_with_material(
            Primitive::sphere(radius),
            Material::from_hex(hex).with_emissive(emissive),
        )
        .with_name("hidden_orb")
        .with_tag(ObjectTag::Hidden)
        .at(position);
        self.add(orb)
    }

    /// Number of top-level entities added so far
    pub fn entity_count(&self) -> usize {
        self.world.entity_count()
    }

    /// Build a hidden environment of the given kind
    pub fn build(mut self, kind: EnvironmentKind) -> Environment {
        self.world.clear_all_dirty();
        Environment::new(kind, self.world).with_effects(self.effects)
    }
}
