//! Environments
//!
//! An environment is one of the three themed scenes: its ordered object list,
//! a visibility flag, and the periodic effects it owns.

use rand::Rng;
use crate::effects::PeriodicEffect;
use crate::World;

/// The three selectable environments
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvironmentKind {
    Corridor = 0,
    Pool = 1,
    Classroom = 2,
}

impl EnvironmentKind {
    /// All kinds in index order
    pub const ALL: [EnvironmentKind; 3] = [
        EnvironmentKind::Corridor,
        EnvironmentKind::Pool,
        EnvironmentKind::Classroom,
    ];

    /// Index used by the menu
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human readable name
    pub fn display_name(self) -> &'static str {
        match self {
            EnvironmentKind::Corridor => "Backrooms Corridor",
            EnvironmentKind::Pool => "Poolrooms",
            EnvironmentKind::Classroom => "Eerie Classroom",
        }
    }
}

impl TryFrom<usize> for EnvironmentKind {
    type Error = EnvironmentError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        EnvironmentKind::ALL
            .get(index)
            .copied()
            .ok_or(EnvironmentError::InvalidIndex(index))
    }
}

impl std::fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Environment errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentError {
    /// Requested an environment index outside the valid set
    InvalidIndex(usize),
}

impl std::fmt::Display for EnvironmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvironmentError::InvalidIndex(index) => write!(
                f,
                "Invalid environment index {} (expected 0..{})",
                index,
                EnvironmentKind::ALL.len()
            ),
        }
    }
}

impl std::error::Error for EnvironmentError {}

/// A runtime environment
#[derive(Clone, Debug)]
pub struct Environment {
    kind: EnvironmentKind,
    /// The ordered object list
    pub world: World,
    visible: bool,
    effects: Vec<PeriodicEffect>,
}

impl Environment {
    /// Create a hidden environment around a built world
    pub fn new(kind: EnvironmentKind, world: World) -> Self {
        Self {
            kind,
            world,
            visible: false,
            effects: Vec::new(),
        }
    }

    /// Builder: attach periodic effects
    pub fn with_effects(mut self, effects: Vec<PeriodicEffect>) -> Self {
        self.effects = effects;
        self
    }

    pub fn kind(&self) -> EnvironmentKind {
        self.kind
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn effects(&self) -> &[PeriodicEffect] {
        &self.effects
    }

    /// Advance every owned periodic effect; returns how many fired
    pub fn advance_effects<R: Rng>(&mut self, now_ms: f64, rng: &mut R) -> usize {
        let mut fired = 0;
        for effect in &mut self.effects {
            if effect.advance(now_ms, &mut self.world, rng) {
                fired += 1;
            }
        }
        fired
    }
}
