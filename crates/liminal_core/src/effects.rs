//! Periodic effects
//!
//! Interval-driven effects (light flicker) owned by an environment and
//! advanced from the frame loop instead of free-running timers.

use rand::Rng;
use crate::world::{EntityHandle, World};

/// What a periodic effect does when it fires
#[derive(Clone, Debug, PartialEq)]
pub enum EffectAction {
    /// Set every target light's intensity to `base + U(0,1) * spread`
    ///
    /// One random draw per target.
    FlickerIntensity {
        targets: Vec<EntityHandle>,
        base: f32,
        spread: f32,
    },
}

/// An action that fires every `interval_ms`
#[derive(Clone, Debug)]
pub struct PeriodicEffect {
    interval_ms: f64,
    next_due_ms: f64,
    action: EffectAction,
}

impl PeriodicEffect {
    /// Create an effect that first fires `interval_ms` after time zero
    pub fn new(interval_ms: f64, action: EffectAction) -> Self {
        Self {
            interval_ms,
            next_due_ms: interval_ms,
            action,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn next_due_ms(&self) -> f64 {
        self.next_due_ms
    }

    pub fn action(&self) -> &EffectAction {
        &self.action
    }

    /// Fire at most once if due, then reschedule relative to `now_ms`
    ///
    /// Returns true if the effect fired.
    pub fn advance<R: Rng>(&mut self, now_ms: f64, world: &mut World, rng: &mut R) -> bool {
        if now_ms < self.next_due_ms {
            return false;
        }
        self.next_due_ms = now_ms + self.interval_ms;

        match &self.action {
            EffectAction::FlickerIntensity { targets, base, spread } => {
                for &handle in targets {
                    let value = base + rng.gen::<f32>() * spread;
                    if let Some(light) = world.get_entity_mut(handle).and_then(|e| e.light_mut()) {
                        light.intensity = value;
                    }
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entity, Light};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn world_with_light() -> (World, EntityHandle) {
        let mut world = World::new();
        let handle = world.add_entity(Entity::light(Light::point(0xccccff, 1.0, 10.0)));
        (world, handle)
    }

    #[test]
    fn test_not_due_before_interval() {
        let (mut world, handle) = world_with_light();
        let mut rng = StdRng::seed_from_u64(1);
        let mut effect = PeriodicEffect::new(500.0, EffectAction::FlickerIntensity {
            targets: vec![handle],
            base: 0.6,
            spread: 0.6,
        });

        assert!(!effect.advance(499.0, &mut world, &mut rng));
        let intensity = world.get_entity(handle).unwrap().as_light().unwrap().intensity;
        assert_eq!(intensity, 1.0);
    }

    #[test]
    fn test_fires_within_range_and_reschedules() {
        let (mut world, handle) = world_with_light();
        let mut rng = StdRng::seed_from_u64(2);
        let mut effect = PeriodicEffect::new(500.0, EffectAction::FlickerIntensity {
            targets: vec![handle],
            base: 0.6,
            spread: 0.6,
        });

        assert!(effect.advance(510.0, &mut world, &mut rng));
        assert_eq!(effect.next_due_ms(), 1010.0);

        let intensity = world.get_entity(handle).unwrap().as_light().unwrap().intensity;
        assert!((0.6..=1.2).contains(&intensity), "intensity {}", intensity);
    }

    #[test]
    fn test_fires_once_per_advance_after_long_gap() {
        let (mut world, handle) = world_with_light();
        let mut rng = StdRng::seed_from_u64(3);
        let mut effect = PeriodicEffect::new(100.0, EffectAction::FlickerIntensity {
            targets: vec![handle],
            base: 4.0,
            spread: 4.0,
        });

        assert!(effect.advance(10_000.0, &mut world, &mut rng));
        assert!(!effect.advance(10_050.0, &mut world, &mut rng));
        assert!(effect.advance(10_100.0, &mut world, &mut rng));
    }

    #[test]
    fn test_non_light_targets_are_skipped() {
        let mut world = World::new();
        let mesh = world.add_entity(Entity::mesh(crate::Primitive::sphere(0.1)));
        let mut rng = StdRng::seed_from_u64(4);
        let mut effect = PeriodicEffect::new(10.0, EffectAction::FlickerIntensity {
            targets: vec![mesh],
            base: 1.0,
            spread: 1.0,
        });
        assert!(effect.advance(20.0, &mut world, &mut rng));
    }
}
