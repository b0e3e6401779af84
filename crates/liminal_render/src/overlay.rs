//! Overlay geometry for the cursor glow and trail markers

use liminal_input::TrailMarker;

use crate::pipeline::OverlayVertex;

/// The glow that follows the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorGlow {
    /// Center in window pixels
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels
    pub size: f32,
    pub color: [f32; 4],
}

/// Build overlay quads, oldest trail marker first and the glow on top
///
/// Hidden markers produce no vertices.
pub fn build_overlay(
    viewport: (f32, f32),
    markers: &[TrailMarker],
    marker_color: [f32; 3],
    glow: Option<&CursorGlow>,
) -> Vec<OverlayVertex> {
    let mut vertices = Vec::with_capacity((markers.len() + 1) * 6);

    for marker in markers.iter().rev().filter(|m| m.visible) {
        let color = [marker_color[0], marker_color[1], marker_color[2], marker.opacity];
        push_disc(&mut vertices, viewport, marker.x, marker.y, marker.size, marker.blur, color);
    }

    if let Some(glow) = glow {
        // Glow fades over its whole radius
        push_disc(&mut vertices, viewport, glow.x, glow.y, glow.size, glow.size / 2.0, glow.color);
    }

    vertices
}

fn push_disc(
    out: &mut Vec<OverlayVertex>,
    viewport: (f32, f32),
    x: f32,
    y: f32,
    size: f32,
    blur: f32,
    color: [f32; 4],
) {
    let (width, height) = (viewport.0.max(1.0), viewport.1.max(1.0));
    let radius = (size / 2.0).max(0.5);
    let softness = (blur / radius).clamp(0.01, 1.0);

    let cx = x / width * 2.0 - 1.0;
    let cy = 1.0 - y / height * 2.0;
    let rx = radius / width * 2.0;
    let ry = radius / height * 2.0;

    let corner = |lx: f32, ly: f32| OverlayVertex {
        position: [cx + lx * rx, cy + ly * ry],
        local: [lx, ly],
        color,
        softness,
        _padding: [0.0; 3],
    };

    out.extend([
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
    ]);
}
