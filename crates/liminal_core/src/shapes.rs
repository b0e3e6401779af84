//! Primitive shapes and light sources
//!
//! All primitives are described in **local space**, centered at the origin.
//! The entity transform places them in the environment.

/// A primitive mesh shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// A flat rectangle in the local XY plane, facing +Z
    Plane {
        width: f32,
        height: f32,
    },
    /// An axis-aligned box
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// A UV sphere
    Sphere {
        radius: f32,
        /// Number of longitude segments (latitude uses half as many)
        segments: u32,
    },
}

impl Primitive {
    pub fn plane(width: f32, height: f32) -> Self {
        Primitive::Plane { width, height }
    }

    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Primitive::Cuboid { width, height, depth }
    }

    pub fn sphere(radius: f32) -> Self {
        Primitive::Sphere { radius, segments: 16 }
    }
}

/// The kind of a light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Uniform light with no position
    Ambient,
    /// Omnidirectional light with a finite range
    Point {
        range: f32,
    },
    /// Parallel light shining from the entity position toward the origin
    Directional,
    /// Rectangular emitter (fluorescent panel)
    RectArea {
        width: f32,
        height: f32,
    },
}

/// A light source
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    /// Linear RGB color
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Light {
    pub fn ambient(hex: u32, intensity: f32) -> Self {
        Self { kind: LightKind::Ambient, color: hex_to_rgb(hex), intensity }
    }

    pub fn point(hex: u32, intensity: f32, range: f32) -> Self {
        Self { kind: LightKind::Point { range }, color: hex_to_rgb(hex), intensity }
    }

    pub fn directional(hex: u32, intensity: f32) -> Self {
        Self { kind: LightKind::Directional, color: hex_to_rgb(hex), intensity }
    }

    pub fn rect_area(hex: u32, intensity: f32, width: f32, height: f32) -> Self {
        Self {
            kind: LightKind::RectArea { width, height },
            color: hex_to_rgb(hex),
            intensity,
        }
    }
}

/// Convert a `0xRRGGBB` color to normalized RGB
pub fn hex_to_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_to_rgb(0x000000), [0.0, 0.0, 0.0]);
        let [r, g, b] = hex_to_rgb(0x4488ff);
        assert!((r - 0.2667).abs() < 0.001);
        assert!((g - 0.5333).abs() < 0.001);
        assert_eq!(b, 1.0);
    }

    #[test]
    fn test_sphere_default_segments() {
        match Primitive::sphere(0.1) {
            Primitive::Sphere { radius, segments } => {
                assert_eq!(radius, 0.1);
                assert_eq!(segments, 16);
            }
            other => panic!("Expected sphere, got {:?}", other),
        }
    }

    #[test]
    fn test_light_constructors() {
        let light = Light::point(0xccccff, 1.0, 10.0);
        assert_eq!(light.kind, LightKind::Point { range: 10.0 });
        assert_eq!(light.intensity, 1.0);
    }
}
