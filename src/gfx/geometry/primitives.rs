//! # Primitive Shape Generation
//!
//! All shapes are centred at the origin with Y up.

use super::{GeometryData, Topology};
use std::f32::consts::{PI, TAU};

/// Slices and stacks used for every body sphere.
pub const BODY_SPHERE_SEGMENTS: u32 = 48;
/// Segments of an orbit path.
pub const ORBIT_SEGMENTS: u32 = 180;
/// Angular step of the ring annulus in degrees.
pub const RING_STEP_DEGREES: f32 = 5.0;

/// Generate a UV sphere of radius 1.0
///
/// # Arguments
/// * `longitude_segments` - Number of vertical segments (longitude lines)
/// * `latitude_segments` - Number of horizontal segments (latitude lines)
pub fn generate_sphere(longitude_segments: u32, latitude_segments: u32) -> GeometryData {
    let mut data = GeometryData::new(Topology::TriangleList);

    let long_segs = longitude_segments.max(3);
    let lat_segs = latitude_segments.max(2);

    for lat in 0..=lat_segs {
        let theta = lat as f32 * PI / lat_segs as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for long in 0..=long_segs {
            let phi = long as f32 * TAU / long_segs as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let position = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];
            data.vertices.push(position);
            data.normals.push(position);
            data.tex_coords
                .push([long as f32 / long_segs as f32, lat as f32 / lat_segs as f32]);
        }
    }

    for lat in 0..lat_segs {
        for long in 0..long_segs {
            let first = lat * (long_segs + 1) + long;
            let second = first + long_segs + 1;

            data.indices
                .extend_from_slice(&[first, second, first + 1, second, second + 1, first + 1]);
        }
    }

    data
}

/// Generate a flat annulus in the XZ plane
///
/// Vertices come in inner/outer pairs every `step_degrees`, closing the loop by
/// repeating the first angle, like a quad strip.
pub fn generate_ring(inner_radius: f32, outer_radius: f32, step_degrees: f32) -> GeometryData {
    let mut data = GeometryData::new(Topology::TriangleList);

    let step = if step_degrees > 0.0 { step_degrees } else { RING_STEP_DEGREES };
    let steps = (360.0 / step).round().max(3.0) as u32;

    for i in 0..=steps {
        let angle = (i as f32 * 360.0 / steps as f32).to_radians();
        let (sin, cos) = angle.sin_cos();
        let u = i as f32 / steps as f32;

        data.vertices.push([inner_radius * cos, 0.0, inner_radius * sin]);
        data.vertices.push([outer_radius * cos, 0.0, outer_radius * sin]);
        data.normals.push([0.0, 1.0, 0.0]);
        data.normals.push([0.0, 1.0, 0.0]);
        data.tex_coords.push([u, 0.0]);
        data.tex_coords.push([u, 1.0]);
    }

    for i in 0..steps {
        let inner = i * 2;
        let outer = inner + 1;
        let next_inner = inner + 2;
        let next_outer = inner + 3;

        data.indices
            .extend_from_slice(&[inner, outer, next_inner, outer, next_outer, next_inner]);
    }

    data
}

/// Generate a closed circle of `segments` points in the XZ plane as a line list
pub fn generate_orbit_circle(radius: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new(Topology::LineList);
    let segs = segments.max(3);

    for i in 0..segs {
        let theta = TAU * i as f32 / segs as f32;
        let (sin, cos) = theta.sin_cos();
        data.vertices.push([radius * cos, 0.0, radius * sin]);
        data.normals.push([0.0, 1.0, 0.0]);
        data.tex_coords.push([i as f32 / segs as f32, 0.0]);
        data.indices.extend_from_slice(&[i, (i + 1) % segs]);
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(BODY_SPHERE_SEGMENTS, BODY_SPHERE_SEGMENTS);
        assert_eq!(sphere.vertex_count(), 49 * 49);
        assert_eq!(sphere.triangle_count(), 48 * 48 * 2);
        assert_eq!(sphere.vertices.len(), sphere.normals.len());
        assert_eq!(sphere.vertices.len(), sphere.tex_coords.len());
    }

    #[test]
    fn test_ring_generation() {
        let ring = generate_ring(1.4, 2.2, RING_STEP_DEGREES);
        // 0..=360 in 5 degree steps
        assert_eq!(ring.vertex_count(), 73 * 2);
        assert_eq!(ring.triangle_count(), 72 * 2);
        for pair in ring.vertices.chunks(2) {
            let inner = (pair[0][0].powi(2) + pair[0][2].powi(2)).sqrt();
            let outer = (pair[1][0].powi(2) + pair[1][2].powi(2)).sqrt();
            assert!((inner - 1.4).abs() < 1e-4);
            assert!((outer - 2.2).abs() < 1e-4);
        }
    }

    #[test]
    fn test_orbit_circle_is_closed() {
        let orbit = generate_orbit_circle(7.5, ORBIT_SEGMENTS);
        assert_eq!(orbit.vertex_count(), 180);
        assert_eq!(orbit.indices.len(), 360);
        assert_eq!(&orbit.indices[358..], &[179, 0]);
        assert_eq!(orbit.triangle_count(), 0);
        assert!(orbit.vertices.iter().all(|v| v[1] == 0.0));
    }
}
