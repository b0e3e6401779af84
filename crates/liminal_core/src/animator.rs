//! Per-frame animator
//!
//! Every frame the animator walks the active environment's object list and
//! applies small time-parameterized offsets. The update rule for each object
//! is looked up by `(EnvironmentKind, ObjectTag)`; objects without a rule are
//! left untouched.
//!
//! Rules are frame-rate dependent: per-frame increments are not scaled by
//! delta time.

use std::collections::HashMap;
use std::f32::consts::PI;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::entity::{AnimState, Entity, ObjectTag};
use crate::environment::{Environment, EnvironmentKind};

/// Chance per frame that a fish turns around on its own
pub const FISH_REVERSE_CHANCE: f32 = 0.005;

/// Per-object inputs to a rule
#[derive(Clone, Copy, Debug)]
pub struct RuleContext {
    /// Seconds since the animation clock started
    pub time: f32,
    /// Object index within its environment
    pub index: usize,
}

/// An update rule applied in place to one entity
pub type AnimationRule = fn(&mut Entity, &RuleContext, &mut StdRng);

/// Lookup table from `(environment, tag)` to a rule
pub struct RuleTable {
    rules: HashMap<(EnvironmentKind, ObjectTag), AnimationRule>,
}

impl RuleTable {
    /// An empty table
    pub fn empty() -> Self {
        Self { rules: HashMap::new() }
    }

    /// Register (or replace) a rule
    pub fn insert(&mut self, kind: EnvironmentKind, tag: ObjectTag, rule: AnimationRule) {
        self.rules.insert((kind, tag), rule);
    }

    /// Look up the rule for an object
    pub fn get(&self, kind: EnvironmentKind, tag: ObjectTag) -> Option<AnimationRule> {
        self.rules.get(&(kind, tag)).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        use EnvironmentKind::*;

        let mut table = Self::empty();
        table.insert(Corridor, ObjectTag::FlickerLight, corridor_light);
        table.insert(Corridor, ObjectTag::DriftingPlane, corridor_plane);
        table.insert(Pool, ObjectTag::Water, pool_water);
        table.insert(Pool, ObjectTag::FloatingChair, pool_chair);
        table.insert(Pool, ObjectTag::Fish, pool_fish);
        table.insert(Pool, ObjectTag::Bubble, pool_bubble);
        table.insert(Classroom, ObjectTag::Blackboard, classroom_blackboard);
        table.insert(Classroom, ObjectTag::Furniture, classroom_furniture);
        table
    }
}

/// Applies the rule table to the active environment each frame
pub struct Animator {
    rules: RuleTable,
    rng: StdRng,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    /// Create an animator with the default rules and an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            rules: RuleTable::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Builder: seed the RNG for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Builder: replace the rule table
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Access the RNG (shared with periodic effects)
    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Apply one frame of animation at `time` seconds
    ///
    /// Returns the number of entities a rule was applied to.
    pub fn animate(&mut self, env: &mut Environment, time: f32) -> usize {
        let kind = env.kind();
        let mut applied = 0;
        for (index, entity) in env.world.iter_mut().enumerate() {
            if let Some(rule) = self.rules.get(kind, entity.tag) {
                rule(entity, &RuleContext { time, index }, &mut self.rng);
                applied += 1;
            }
        }
        applied
    }
}

// --- Corridor ---

fn corridor_light(entity: &mut Entity, ctx: &RuleContext, _rng: &mut StdRng) {
    if let Some(light) = entity.light_mut() {
        light.intensity = 0.6 + (ctx.time + ctx.index as f32).sin() * 0.4;
    }
}

fn corridor_plane(entity: &mut Entity, ctx: &RuleContext, _rng: &mut StdRng) {
    entity.transform_mut().position.x += (ctx.time * 0.5 + ctx.index as f32).sin() * 0.001;
}

// --- Pool ---

fn pool_water(entity: &mut Entity, ctx: &RuleContext, _rng: &mut StdRng) {
    let transform = entity.transform_mut();
    transform.rotation.y += 0.001;
    transform.position.y = -1.0 + (ctx.time + ctx.index as f32).sin() * 0.1;
    entity
        .material_mut()
        .set_opacity(0.7 + (ctx.time * 2.0).sin() * 0.1);
}

fn pool_chair(entity: &mut Entity, ctx: &RuleContext, _rng: &mut StdRng) {
    let i = ctx.index as f32;
    let transform = entity.transform_mut();
    transform.position.y += (ctx.time + i).sin() * 0.005;
    transform.rotation.z += (ctx.time * 0.5 + i).sin() * 0.002;
}

fn pool_fish(entity: &mut Entity, ctx: &RuleContext, rng: &mut StdRng) {
    let Some(AnimState::Fish { direction, speed, phase, min_z, max_z }) = entity.anim.as_mut() else {
        return;
    };

    let mut z = entity.transform.position.z + *direction * *speed;
    if z > *max_z {
        z = *max_z;
        *direction = -1.0;
    } else if z < *min_z {
        z = *min_z;
        *direction = 1.0;
    } else if rng.gen::<f32>() < FISH_REVERSE_CHANCE {
        *direction = -*direction;
    }

    let heading = if *direction > 0.0 { 0.0 } else { PI };
    let swing = (ctx.time * 8.0 + *phase).sin() * 0.5;

    let transform = entity.transform_mut();
    transform.position.z = z;
    transform.rotation.y = heading;
    if let Some(tail) = entity.child_mut(0) {
        tail.transform_mut().rotation.y = swing;
    }
}

fn pool_bubble(entity: &mut Entity, ctx: &RuleContext, _rng: &mut StdRng) {
    let Some(AnimState::Bubble { origin, rise_speed, ceiling }) = entity.anim else {
        return;
    };

    let transform = entity.transform_mut();
    transform.position.y += rise_speed;
    transform.position.x = origin.x + (ctx.time * 2.0 + ctx.index as f32).sin() * 0.05;
    if transform.position.y > ceiling {
        transform.position = origin;
    }
}

// --- Classroom ---

fn classroom_blackboard(entity: &mut Entity, ctx: &RuleContext, _rng: &mut StdRng) {
    entity.material_mut().emissive[0] = (ctx.time * 3.0).sin() * 0.1;
}

fn classroom_furniture(entity: &mut Entity, ctx: &RuleContext, _rng: &mut StdRng) {
    let i = ctx.index as f32;
    let transform = entity.transform_mut();
    transform.position.x += (ctx.time * 0.3 + i).sin() * 0.001;
    transform.position.z += (ctx.time * 0.4 + i).sin() * 0.001;
}
