//! Scene geometry - bridges World/Entity to GPU vertices
//!
//! Every mesh entity (and its children) is triangulated, transformed to world
//! space, and colored from its material. Opaque triangles come first in the
//! vertex list, transparent ones after, so the two can be drawn with different
//! depth-write settings.

use std::ops::Range;

use liminal_core::{Entity, Material, Primitive, World};
use liminal_math::{mat4, Mat4, Vec3};

use crate::pipeline::MeshVertex;

/// World-space vertices of one environment
#[derive(Clone, Debug, Default)]
pub struct SceneGeometry {
    vertices: Vec<MeshVertex>,
    opaque_count: usize,
}

impl SceneGeometry {
    /// Triangulate every mesh entity in the world
    pub fn from_world(world: &World) -> Self {
        let mut opaque = Vec::new();
        let mut transparent = Vec::new();

        for entity in world.iter() {
            add_entity(entity, mat4::IDENTITY, &mut opaque, &mut transparent);
        }

        let opaque_count = opaque.len();
        opaque.append(&mut transparent);
        Self {
            vertices: opaque,
            opaque_count,
        }
    }

    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Vertex range drawn with depth writes
    pub fn opaque_range(&self) -> Range<u32> {
        0..self.opaque_count as u32
    }

    /// Vertex range drawn with blending after the opaque range
    pub fn transparent_range(&self) -> Range<u32> {
        self.opaque_count as u32..self.vertices.len() as u32
    }
}

fn add_entity(entity: &Entity, parent: Mat4, opaque: &mut Vec<MeshVertex>, transparent: &mut Vec<MeshVertex>) {
    let model = mat4::mul(parent, entity.transform.to_matrix());

    if let Some(primitive) = entity.as_mesh() {
        let out = if is_transparent(&entity.material) { &mut *transparent } else { &mut *opaque };
        let color = entity.material.base_color;
        let emissive = entity.material.emissive;

        out.extend(primitive_triangles(primitive).into_iter().map(|(position, normal)| MeshVertex {
            position: mat4::transform_point(model, position).to_array(),
            normal: mat4::transform_vector(model, normal).normalized().to_array(),
            color,
            emissive,
            _padding: 0.0,
        }));
    }

    for child in &entity.children {
        add_entity(child, model, opaque, transparent);
    }
}

fn is_transparent(material: &Material) -> bool {
    material.transparent || material.opacity() < 1.0
}

/// Local-space triangle list `(position, normal)` for a primitive
pub fn primitive_triangles(primitive: &Primitive) -> Vec<(Vec3, Vec3)> {
    match *primitive {
        Primitive::Plane { width, height } => plane_triangles(width, height),
        Primitive::Cuboid { width, height, depth } => cuboid_triangles(width, height, depth),
        Primitive::Sphere { radius, segments } => sphere_triangles(radius, segments),
    }
}

/// Quad in the XY plane facing +Z
fn plane_triangles(width: f32, height: f32) -> Vec<(Vec3, Vec3)> {
    let (hw, hh) = (width / 2.0, height / 2.0);
    quad(
        [
            Vec3::new(-hw, -hh, 0.0),
            Vec3::new(hw, -hh, 0.0),
            Vec3::new(hw, hh, 0.0),
            Vec3::new(-hw, hh, 0.0),
        ],
        Vec3::Z,
    )
}

fn cuboid_triangles(width: f32, height: f32, depth: f32) -> Vec<(Vec3, Vec3)> {
    let (x, y, z) = (width / 2.0, height / 2.0, depth / 2.0);
    let v = |sx: f32, sy: f32, sz: f32| Vec3::new(sx * x, sy * y, sz * z);

    let faces = [
        // +Z
        ([v(-1., -1., 1.), v(1., -1., 1.), v(1., 1., 1.), v(-1., 1., 1.)], Vec3::Z),
        // -Z
        ([v(1., -1., -1.), v(-1., -1., -1.), v(-1., 1., -1.), v(1., 1., -1.)], -Vec3::Z),
        // +X
        ([v(1., -1., 1.), v(1., -1., -1.), v(1., 1., -1.), v(1., 1., 1.)], Vec3::X),
        // -X
        ([v(-1., -1., -1.), v(-1., -1., 1.), v(-1., 1., 1.), v(-1., 1., -1.)], -Vec3::X),
        // +Y
        ([v(-1., 1., 1.), v(1., 1., 1.), v(1., 1., -1.), v(-1., 1., -1.)], Vec3::Y),
        // -Y
        ([v(-1., -1., -1.), v(1., -1., -1.), v(1., -1., 1.), v(-1., -1., 1.)], -Vec3::Y),
    ];

    faces
        .into_iter()
        .flat_map(|(corners, normal)| quad(corners, normal))
        .collect()
}

/// UV sphere with `segments` longitude and latitude bands
fn sphere_triangles(radius: f32, segments: u32) -> Vec<(Vec3, Vec3)> {
    use std::f32::consts::PI;

    let segments = segments.max(3);
    let point = |lat: u32, lon: u32| {
        let theta = lat as f32 / segments as f32 * PI;
        let phi = lon as f32 / segments as f32 * 2.0 * PI;
        let normal = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
        (normal * radius, normal)
    };

    let mut triangles = Vec::with_capacity((segments * segments * 6) as usize);
    for lat in 0..segments {
        for lon in 0..segments {
            let a = point(lat, lon);
            let b = point(lat + 1, lon);
            let c = point(lat + 1, lon + 1);
            let d = point(lat, lon + 1);
            triangles.extend([a, b, c, a, c, d]);
        }
    }
    triangles
}

fn quad(corners: [Vec3; 4], normal: Vec3) -> Vec<(Vec3, Vec3)> {
    let [a, b, c, d] = corners;
    vec![(a, normal), (b, normal), (c, normal), (a, normal), (c, normal), (d, normal)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use liminal_core::{Euler, Light, ObjectTag};

    #[test]
    fn test_primitive_vertex_counts() {
        assert_eq!(primitive_triangles(&Primitive::plane(2.0, 2.0)).len(), 6);
        assert_eq!(primitive_triangles(&Primitive::cuboid(1.0, 1.0, 1.0)).len(), 36);
        assert_eq!(
            primitive_triangles(&Primitive::Sphere { radius: 1.0, segments: 8 }).len(),
            8 * 8 * 6
        );
    }

    #[test]
    fn test_sphere_points_on_radius() {
        for (position, normal) in primitive_triangles(&Primitive::Sphere { radius: 2.0, segments: 6 }) {
            assert!((position.length() - 2.0).abs() < 1e-4);
            assert!((normal.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_cuboid_normals_point_outward() {
        for (position, normal) in primitive_triangles(&Primitive::cuboid(2.0, 4.0, 6.0)) {
            assert!(position.dot(normal) > 0.0);
        }
    }

    #[test]
    fn test_lights_produce_no_geometry() {
        let mut world = World::new();
        world.add_entity(Entity::light(Light::ambient(0x404040, 0.5)));
        let geometry = SceneGeometry::from_world(&world);
        assert_eq!(geometry.vertex_count(), 0);
    }

    #[test]
    fn test_transform_applied() {
        let mut world = World::new();
        world.add_entity(Entity::mesh(Primitive::plane(2.0, 2.0)).at(Vec3::new(0.0, 0.0, -5.0)));
        let geometry = SceneGeometry::from_world(&world);
        assert!(geometry.vertices().iter().all(|v| v.position[2] == -5.0));
    }

    #[test]
    fn test_floor_rotation_faces_up() {
        let mut world = World::new();
        let mut floor = Entity::mesh(Primitive::plane(20.0, 100.0));
        floor.transform_mut().rotation = Euler::about_x(-std::f32::consts::FRAC_PI_2);
        world.add_entity(floor);

        let geometry = SceneGeometry::from_world(&world);
        for v in geometry.vertices() {
            assert!((v.normal[1] - 1.0).abs() < 1e-5);
            assert!(v.position[1].abs() < 1e-4);
        }
    }

    #[test]
    fn test_children_included_relative_to_parent() {
        let mut world = World::new();
        let fish = Entity::mesh(Primitive::cuboid(0.2, 0.2, 0.5))
            .with_tag(ObjectTag::Fish)
            .at(Vec3::new(3.0, 0.0, 0.0))
            .with_child(Entity::mesh(Primitive::plane(0.2, 0.2)).at(Vec3::new(0.0, 0.0, -0.3)));
        world.add_entity(fish);

        let geometry = SceneGeometry::from_world(&world);
        assert_eq!(geometry.vertex_count(), 36 + 6);
        let tail = &geometry.vertices()[36..];
        assert!(tail.iter().all(|v| (v.position[2] - (-0.3)).abs() < 1e-5));
        assert!(tail.iter().all(|v| v.position[0] >= 2.8));
    }

    #[test]
    fn test_transparent_after_opaque() {
        let mut world = World::new();
        world.add_entity(Entity::mesh_with_material(
            Primitive::cuboid(15.0, 2.0, 15.0),
            Material::from_hex(0x4488ff).with_opacity(0.8),
        ));
        world.add_entity(Entity::mesh(Primitive::plane(30.0, 30.0)));

        let geometry = SceneGeometry::from_world(&world);
        assert_eq!(geometry.opaque_range(), 0..6);
        assert_eq!(geometry.transparent_range(), 6..42);
        assert!((geometry.vertices()[6].color[3] - 0.8).abs() < 1e-6);
    }
}
