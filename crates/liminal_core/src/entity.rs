//! Entity and Material types
//!
//! An Entity is a renderable object in an environment: a mesh or a light,
//! with a transform, a material, an explicit animation tag, and optional
//! per-instance animation state.

use bitflags::bitflags;
use liminal_math::Vec3;
use crate::shapes::{hex_to_rgb, Light, Primitive};
use crate::Transform;

bitflags! {
    /// Flags indicating which parts of an entity have changed and need updating
    ///
    /// The renderer only rebuilds GPU geometry when something is dirty.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Transform (position, rotation, scale) has changed
        const TRANSFORM = 1 << 0;
        /// Mesh/shape has changed
        const MESH = 1 << 1;
        /// Material or light parameters have changed
        const MATERIAL = 1 << 2;
        /// All flags set - entity needs full rebuild
        const ALL = Self::TRANSFORM.bits() | Self::MESH.bits() | Self::MATERIAL.bits();
    }
}

/// Surface appearance of a mesh
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base color as RGBA; alpha is the opacity
    pub base_color: [f32; 4],
    /// Self-illumination added after lighting
    pub emissive: [f32; 3],
    /// Whether the surface is alpha blended
    pub transparent: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Material {
    /// White material
    pub const WHITE: Self = Self {
        base_color: [1.0, 1.0, 1.0, 1.0],
        emissive: [0.0, 0.0, 0.0],
        transparent: false,
    };

    /// Create a new opaque material with the given RGB color
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self {
            base_color: [r, g, b, 1.0],
            ..Self::WHITE
        }
    }

    /// Create a new opaque material from a `0xRRGGBB` color
    pub fn from_hex(hex: u32) -> Self {
        let [r, g, b] = hex_to_rgb(hex);
        Self::from_rgb(r, g, b)
    }

    /// Builder: set an emissive color from `0xRRGGBB`
    pub fn with_emissive(mut self, hex: u32) -> Self {
        self.emissive = hex_to_rgb(hex);
        self
    }

    /// Builder: make the material transparent with the given opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.base_color[3] = opacity;
        self.transparent = true;
        self
    }

    /// Current opacity
    pub fn opacity(&self) -> f32 {
        self.base_color[3]
    }

    /// Set the opacity
    pub fn set_opacity(&mut self, opacity: f32) {
        self.base_color[3] = opacity;
    }
}

/// Explicit identity used by the animator to pick an update rule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectTag {
    /// Never animated
    Static,
    /// Corridor ceiling light
    FlickerLight,
    /// Corridor floor and walls
    DriftingPlane,
    /// Pool water volume
    Water,
    /// Pool floating chair
    FloatingChair,
    /// Fish body (swims, owns a tail child)
    Fish,
    /// Fish tail child
    FishTail,
    /// Rising bubble
    Bubble,
    /// Classroom blackboard
    Blackboard,
    /// Classroom floor, desks and chairs
    Furniture,
    /// Classroom ceiling panel light
    FluorescentLight,
    /// Secret glowing orb
    Hidden,
}

/// Persistent per-instance animation state, mutated in place every frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimState {
    Bubble {
        /// Where the bubble restarts after reaching the ceiling
        origin: Vec3,
        /// Units per frame
        rise_speed: f32,
        /// Height above which the bubble wraps back to its origin
        ceiling: f32,
    },
    Fish {
        /// +1.0 swims toward +Z, -1.0 toward -Z
        direction: f32,
        /// Units per frame
        speed: f32,
        /// Tail swing phase offset
        phase: f32,
        min_z: f32,
        max_z: f32,
    },
}

/// What an entity is: a mesh or a light
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntityKind {
    Mesh(Primitive),
    Light(Light),
}

/// An object in an environment
///
/// Each entity has:
/// - An optional name (for lookup and logs)
/// - A kind (mesh primitive or light)
/// - A transform (relative to its parent for child entities)
/// - A material (ignored by lights)
/// - An animation tag
/// - Optional persistent animation state
/// - Child entities (e.g. a fish tail)
/// - Dirty flags (for change tracking)
#[derive(Clone, Debug)]
pub struct Entity {
    /// Optional name for this entity
    pub name: Option<String>,
    /// Mesh or light
    pub kind: EntityKind,
    /// The entity's transform
    pub transform: Transform,
    /// The entity's material
    pub material: Material,
    /// Animation tag
    pub tag: ObjectTag,
    /// Persistent animation state, if the tag's rule needs any
    pub anim: Option<AnimState>,
    /// Children with transforms local to this entity
    pub children: Vec<Entity>,
    /// Dirty flags for change tracking (what needs rebuilding)
    dirty: DirtyFlags,
}

impl Entity {
    /// Create a new mesh entity with a white material
    pub fn mesh(primitive: Primitive) -> Self {
        Self::with_kind(EntityKind::Mesh(primitive), Material::default())
    }

    /// Create a new mesh entity with the given material
    pub fn mesh_with_material(primitive: Primitive, material: Material) -> Self {
        Self::with_kind(EntityKind::Mesh(primitive), material)
    }

    /// Create a new light entity
    pub fn light(light: Light) -> Self {
        Self::with_kind(EntityKind::Light(light), Material::default())
    }

    fn with_kind(kind: EntityKind, material: Material) -> Self {
        Self {
            name: None,
            kind,
            transform: Transform::identity(),
            material,
            tag: ObjectTag::Static,
            anim: None,
            children: Vec::new(),
            dirty: DirtyFlags::ALL, // New entities are dirty
        }
    }

    /// Set the name of this entity
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the animation tag
    pub fn with_tag(mut self, tag: ObjectTag) -> Self {
        self.tag = tag;
        self
    }

    /// Set the position
    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Set the transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Attach persistent animation state
    pub fn with_anim(mut self, anim: AnimState) -> Self {
        self.anim = Some(anim);
        self
    }

    /// Attach a child entity
    pub fn with_child(mut self, child: Entity) -> Self {
        self.children.push(child);
        self
    }

    /// Check if this entity has the given tag
    pub fn has_tag(&self, tag: ObjectTag) -> bool {
        self.tag == tag
    }

    /// The light parameters, if this entity is a light
    pub fn as_light(&self) -> Option<&Light> {
        match &self.kind {
            EntityKind::Light(light) => Some(light),
            EntityKind::Mesh(_) => None,
        }
    }

    /// The primitive, if this entity is a mesh
    pub fn as_mesh(&self) -> Option<&Primitive> {
        match &self.kind {
            EntityKind::Mesh(primitive) => Some(primitive),
            EntityKind::Light(_) => None,
        }
    }

    /// Mutable light parameters; marks the material dirty
    pub fn light_mut(&mut self) -> Option<&mut Light> {
        match &mut self.kind {
            EntityKind::Light(light) => {
                self.dirty |= DirtyFlags::MATERIAL;
                Some(light)
            }
            EntityKind::Mesh(_) => None,
        }
    }

    /// Mutable transform; marks the transform dirty
    pub fn transform_mut(&mut self) -> &mut Transform {
        self.dirty |= DirtyFlags::TRANSFORM;
        &mut self.transform
    }

    /// Mutable material; marks the material dirty
    pub fn material_mut(&mut self) -> &mut Material {
        self.dirty |= DirtyFlags::MATERIAL;
        &mut self.material
    }

    /// Mutable child; marks this entity's transform dirty
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Entity> {
        self.dirty |= DirtyFlags::TRANSFORM;
        self.children.get_mut(index)
    }

    // --- Dirty tracking methods ---

    /// Check if this entity has any dirty flags set
    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Get the current dirty flags
    #[inline]
    pub fn dirty_flags(&self) -> DirtyFlags {
        self.dirty
    }

    /// Mark this entity as dirty with the given flags
    #[inline]
    pub fn mark_dirty(&mut self, flags: DirtyFlags) {
        self.dirty |= flags;
    }

    /// Clear all dirty flags, including children
    pub fn clear_dirty(&mut self) {
        self.dirty = DirtyFlags::NONE;
        for child in &mut self.children {
            child.clear_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_box() -> Entity {
        Entity::mesh(Primitive::cuboid(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_material_from_hex() {
        let m = Material::from_hex(0xff0000);
        assert_eq!(m.base_color, [1.0, 0.0, 0.0, 1.0]);
        assert!(!m.transparent);
    }

    #[test]
    fn test_material_with_opacity() {
        let m = Material::from_hex(0x4488ff).with_opacity(0.8);
        assert!(m.transparent);
        assert_eq!(m.opacity(), 0.8);
    }

    #[test]
    fn test_material_with_emissive() {
        let m = Material::from_hex(0xffaaaa).with_emissive(0xff5555);
        assert_eq!(m.emissive[0], 1.0);
    }

    #[test]
    fn test_new_entity_is_dirty_and_static() {
        let entity = make_box();
        assert!(entity.is_dirty());
        assert_eq!(entity.dirty_flags(), DirtyFlags::ALL);
        assert_eq!(entity.tag, ObjectTag::Static);
        assert!(entity.anim.is_none());
    }

    #[test]
    fn test_clear_dirty_recurses_into_children() {
        let mut entity = make_box().with_child(make_box());
        entity.clear_dirty();
        assert!(!entity.is_dirty());
        assert!(!entity.children[0].is_dirty());
    }

    #[test]
    fn test_transform_mut_marks_dirty() {
        let mut entity = make_box();
        entity.clear_dirty();
        entity.transform_mut().position.y = 2.0;
        assert!(entity.dirty_flags().contains(DirtyFlags::TRANSFORM));
        assert!(!entity.dirty_flags().contains(DirtyFlags::MATERIAL));
        assert_eq!(entity.transform.position.y, 2.0);
    }

    #[test]
    fn test_material_mut_marks_dirty() {
        let mut entity = make_box();
        entity.clear_dirty();
        entity.material_mut().set_opacity(0.5);
        assert!(entity.dirty_flags().contains(DirtyFlags::MATERIAL));
        assert_eq!(entity.material.opacity(), 0.5);
    }

    #[test]
    fn test_light_mut_only_for_lights() {
        let mut mesh = make_box();
        assert!(mesh.light_mut().is_none());

        let mut light = Entity::light(Light::point(0xffffff, 1.0, 10.0));
        light.clear_dirty();
        light.light_mut().unwrap().intensity = 0.3;
        assert!(light.is_dirty());
        assert_eq!(light.as_light().unwrap().intensity, 0.3);
    }

    #[test]
    fn test_builder_chain() {
        let entity = make_box()
            .with_name("chair")
            .with_tag(ObjectTag::FloatingChair)
            .at(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(entity.name.as_deref(), Some("chair"));
        assert!(entity.has_tag(ObjectTag::FloatingChair));
        assert_eq!(entity.transform.position, Vec3::new(1.0, 2.0, 3.0));
    }
}
