//! Celestial bodies: static orbital parameters plus the animated phase.

use cgmath::{Deg, Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::gfx::texture::TextureHandle;

/// Inner ring radius as a multiple of the body radius.
pub const RING_INNER_SCALE: f32 = 1.4;
/// Outer ring radius as a multiple of the body radius.
pub const RING_OUTER_SCALE: f32 = 2.2;

/// Wraps an angle in degrees into `[0, 360)`.
///
/// `rem_euclid` can round up to exactly 360.0 for tiny negative inputs, so that
/// case is folded back to zero.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

/// Returns `value` when it is finite, otherwise warns and returns `fallback`.
pub fn finite_or(value: f32, fallback: f32, what: &str) -> f32 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Non-finite {} ({}), using {}", what, value, fallback);
        fallback
    }
}

/// Static description of a body, as found in the scene configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyParams {
    pub name: String,
    /// Distance from the sun, `>= 0`.
    pub orbit_radius: f32,
    /// Rendered sphere radius, `> 0`.
    pub radius: f32,
    pub color: [f32; 3],
    /// Degrees per second around the sun. Negative values orbit retrograde.
    pub revolution_speed: f32,
    /// Degrees per second around the body's own axis.
    pub rotation_speed: f32,
    /// Constant axial tilt in degrees.
    #[serde(default)]
    pub tilt: f32,
    #[serde(default)]
    pub texture_path: Option<String>,
    #[serde(default)]
    pub has_rings: bool,
}

impl BodyParams {
    pub fn new(name: &str, orbit_radius: f32, radius: f32, color: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            orbit_radius,
            radius,
            color,
            revolution_speed: 0.0,
            rotation_speed: 0.0,
            tilt: 0.0,
            texture_path: None,
            has_rings: false,
        }
    }

    pub fn with_speeds(mut self, revolution_speed: f32, rotation_speed: f32) -> Self {
        self.revolution_speed = revolution_speed;
        self.rotation_speed = rotation_speed;
        self
    }

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = tilt;
        self
    }

    pub fn with_texture(mut self, path: &str) -> Self {
        self.texture_path = Some(path.to_string());
        self
    }

    pub fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }
}

/// A body orbiting the sun.
///
/// Both phase angles are kept in `[0, 360)` and depend only on the
/// accumulated effective time handed to [`CelestialBody::advance`].
#[derive(Debug, Clone)]
pub struct CelestialBody {
    params: BodyParams,
    texture: Option<TextureHandle>,
    revolution_angle: f32,
    rotation_angle: f32,
}

impl CelestialBody {
    pub fn new(mut params: BodyParams) -> Self {
        params.orbit_radius = finite_or(params.orbit_radius, 0.0, "orbit radius").max(0.0);
        params.revolution_speed = finite_or(params.revolution_speed, 0.0, "revolution speed");
        params.rotation_speed = finite_or(params.rotation_speed, 0.0, "rotation speed");
        params.tilt = finite_or(params.tilt, 0.0, "axial tilt");
        if !(params.radius.is_finite() && params.radius > 0.0) {
            log::warn!(
                "Body '{}' has invalid radius {}, using 0.01",
                params.name,
                params.radius
            );
            params.radius = 0.01;
        }
        for channel in params.color.iter_mut() {
            *channel = finite_or(*channel, 1.0, "colour channel").clamp(0.0, 1.0);
        }

        Self {
            params,
            texture: None,
            revolution_angle: 0.0,
            rotation_angle: 0.0,
        }
    }

    /// Advances both phases by `effective_dt` seconds of simulated time.
    pub fn advance(&mut self, effective_dt: f32) {
        self.revolution_angle =
            wrap_degrees(self.revolution_angle + self.params.revolution_speed * effective_dt);
        self.rotation_angle =
            wrap_degrees(self.rotation_angle + self.params.rotation_speed * effective_dt);
    }

    pub fn reset_phase(&mut self) {
        self.revolution_angle = 0.0;
        self.rotation_angle = 0.0;
    }

    pub fn name(&self) -> &str {
        &self.params.name
    }

    pub fn params(&self) -> &BodyParams {
        &self.params
    }

    pub fn orbit_radius(&self) -> f32 {
        self.params.orbit_radius
    }

    pub fn radius(&self) -> f32 {
        self.params.radius
    }

    pub fn color(&self) -> [f32; 3] {
        self.params.color
    }

    pub fn has_rings(&self) -> bool {
        self.params.has_rings
    }

    pub fn revolution_angle(&self) -> f32 {
        self.revolution_angle
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn texture(&self) -> Option<TextureHandle> {
        self.texture
    }

    pub fn set_texture(&mut self, texture: Option<TextureHandle>) {
        self.texture = texture;
    }

    /// Local frame of the body after revolution, orbit offset, tilt and spin.
    ///
    /// Composed as `Ry(revolution) * T(orbit_radius, 0, 0) * Rz(tilt) * Ry(rotation)`,
    /// so the spin happens about the tilted axis of the orbiting frame.
    pub fn frame_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_angle_y(Deg(self.revolution_angle))
            * Matrix4::from_translation(Vector3::new(self.params.orbit_radius, 0.0, 0.0))
            * Matrix4::from_angle_z(Deg(self.params.tilt))
            * Matrix4::from_angle_y(Deg(self.rotation_angle))
    }

    /// Model matrix for a unit sphere scaled to the body radius.
    pub fn model_matrix(&self) -> Matrix4<f32> {
        self.frame_matrix() * Matrix4::from_scale(self.params.radius)
    }

    /// Model matrix for the ring annulus, laid into the body's frame with a
    /// quarter turn about local X.
    ///
    /// The annulus is built in the XZ plane, so after the quarter turn its
    /// normal is the frame's local +Z: the ring stands upright and turns with
    /// the spin.
    pub fn ring_matrix(&self) -> Matrix4<f32> {
        self.frame_matrix() * Matrix4::from_angle_x(Deg(90.0))
    }

    /// `(inner, outer)` ring radii in world units.
    pub fn ring_radii(&self) -> (f32, f32) {
        (
            self.params.radius * RING_INNER_SCALE,
            self.params.radius * RING_OUTER_SCALE,
        )
    }

    /// World-space centre of the body.
    pub fn position(&self) -> Vector3<f32> {
        let m = self.frame_matrix();
        Vector3::new(m.w.x, m.w.y, m.w.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Vector4};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
        assert!(approx(wrap_degrees(-90.0), 270.0));
        assert!(approx(wrap_degrees(1000.0), 280.0));
        let tiny = wrap_degrees(-1e-9);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_revolution_scenario() {
        let mut body = CelestialBody::new(
            BodyParams::new("Test", 5.0, 1.0, [1.0, 1.0, 1.0]).with_speeds(90.0, 0.0),
        );
        body.advance(1.0);
        assert_eq!(body.revolution_angle(), 90.0);
        body.advance(3.0);
        assert_eq!(body.revolution_angle(), 0.0);
    }

    #[test]
    fn test_retrograde_rotation_stays_in_range() {
        let mut body = CelestialBody::new(
            BodyParams::new("Venus", 5.5, 0.55, [0.9, 0.8, 0.5]).with_speeds(-17.0, -33.0),
        );
        for _ in 0..100 {
            body.advance(0.37);
            assert!((0.0..360.0).contains(&body.revolution_angle()));
            assert!((0.0..360.0).contains(&body.rotation_angle()));
        }
    }

    #[test]
    fn test_position_follows_revolution() {
        let mut body = CelestialBody::new(
            BodyParams::new("Earth", 7.5, 0.6, [0.2, 0.4, 1.0]).with_speeds(90.0, 0.0),
        );
        let start = body.position();
        assert!(approx(start.x, 7.5) && approx(start.z, 0.0));

        // +90 degrees about Y carries +X onto -Z.
        body.advance(1.0);
        let moved = body.position();
        assert!(approx(moved.x, 0.0), "x was {}", moved.x);
        assert!(approx(moved.z, -7.5), "z was {}", moved.z);
    }

    #[test]
    fn test_tilt_does_not_move_center() {
        let body = CelestialBody::new(
            BodyParams::new("Uranus", 19.5, 0.9, [0.6, 0.8, 0.9]).with_tilt(97.8),
        );
        let p = body.position();
        assert!(approx(p.x, 19.5) && approx(p.y, 0.0) && approx(p.z, 0.0));
    }

    #[test]
    fn test_ring_radii() {
        let body = CelestialBody::new(
            BodyParams::new("Saturn", 16.0, 1.1, [0.9, 0.85, 0.6]).with_rings(),
        );
        let (inner, outer) = body.ring_radii();
        assert!(approx(inner, 1.54));
        assert!(approx(outer, 2.42));
        assert!(body.has_rings());
    }

    #[test]
    fn test_invalid_params_are_sanitized() {
        let body = CelestialBody::new(BodyParams::new("Bad", -3.0, 0.0, [2.0, -1.0, 0.5]));
        assert_eq!(body.orbit_radius(), 0.0);
        assert!(body.radius() > 0.0);
        assert_eq!(body.color(), [1.0, 0.0, 0.5]);
    }

    #[test]
    fn test_non_finite_params_are_sanitized() {
        let body = CelestialBody::new(
            BodyParams::new("Nan", f32::NAN, f32::NAN, [f32::NAN, 0.5, 0.5])
                .with_speeds(f32::INFINITY, f32::NAN)
                .with_tilt(f32::NEG_INFINITY),
        );
        assert_eq!(body.orbit_radius(), 0.0);
        assert_eq!(body.radius(), 0.01);
        assert_eq!(body.color(), [1.0, 0.5, 0.5]);
        assert_eq!(body.params().revolution_speed, 0.0);
        assert_eq!(body.params().rotation_speed, 0.0);
        assert_eq!(body.params().tilt, 0.0);

        let mut body = body;
        body.advance(1.0);
        assert_eq!(body.revolution_angle(), 0.0);
        assert!(body.model_matrix().x.x.is_finite());
    }

    fn ring_normal(body: &CelestialBody) -> Vector3<f32> {
        (body.ring_matrix() * Vector4::unit_y()).truncate()
    }

    #[test]
    fn test_ring_normal_follows_spin() {
        let mut body = CelestialBody::new(
            BodyParams::new("Saturn", 16.0, 1.1, [0.9, 0.85, 0.6])
                .with_speeds(0.0, 90.0)
                .with_rings(),
        );
        let n = ring_normal(&body);
        assert!(approx(n.x, 0.0) && approx(n.y, 0.0) && approx(n.z, 1.0));

        // A quarter spin about Y carries +Z onto +X.
        body.advance(1.0);
        let n = ring_normal(&body);
        assert!(approx(n.x, 1.0) && approx(n.y, 0.0) && approx(n.z, 0.0));
    }

    #[test]
    fn test_untilted_ring_is_upright() {
        let mut body = CelestialBody::new(
            BodyParams::new("Saturn", 16.0, 1.1, [0.9, 0.85, 0.6])
                .with_speeds(33.0, 71.0)
                .with_rings(),
        );
        for _ in 0..20 {
            body.advance(0.7);
            let n = ring_normal(&body);
            assert!(approx(n.y, 0.0), "normal y was {}", n.y);
            assert!(approx(n.magnitude(), 1.0));
        }
    }
}
