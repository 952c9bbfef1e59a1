//! Minimale Vektor- und Quaternion-Mathematik für Platzierungsdaten.
//!
//! Ohne externe Math-Crate: die Rotation wird direkt als
//! `v' = q ⊗ v ⊗ q⁻¹` für Einheitsquaternionen ausgewertet.

use std::ops::{Add, Div, Sub};

/// 3D-Vektor (x, y, z) in Spielwelt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Nullvektor
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Erstellt einen Vektor aus drei Komponenten.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Komponentenweise Division durch einen Skalar.
    ///
    /// Der Aufrufer garantiert `scalar != 0`.
    pub fn scale_divide(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        self.scale_divide(rhs)
    }
}

/// Rotation als Quaternion (x, y, z, w).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quaternion {
    /// Keine Rotation
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Erstellt ein Quaternion aus vier Komponenten.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Konjugiertes Quaternion: x, y, z negiert, w unverändert.
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Dreht `v` um dieses (Einheits-)Quaternion.
    ///
    /// Ausmultipliziert: `v' = v + 2w(u × v) + 2u × (u × v)` mit `u = (x, y, z)`.
    pub fn rotate(self, v: Vector3) -> Vector3 {
        let u = Vector3::new(self.x, self.y, self.z);
        let uv = u.cross(v);
        let uuv = u.cross(uv);
        v + uv.scale(2.0 * self.w) + uuv.scale(2.0)
    }

    /// Hamilton-Produkt `self ⊗ rhs`.
    pub fn multiply(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }

    /// Baut ein Quaternion aus Euler-Winkeln in Grad.
    ///
    /// Pitch dreht um X, Roll um Y, Yaw um Z. Reihenfolge `qz · qx · qy`
    /// (Rotationsreihenfolge der Spiel-Entities).
    pub fn from_euler_degrees(pitch: f32, roll: f32, yaw: f32) -> Self {
        let half = |deg: f32| deg.to_radians() * 0.5;
        let (sx, cx) = half(pitch).sin_cos();
        let (sy, cy) = half(roll).sin_cos();
        let (sz, cz) = half(yaw).sin_cos();

        let qx = Self::new(sx, 0.0, 0.0, cx);
        let qy = Self::new(0.0, sy, 0.0, cy);
        let qz = Self::new(0.0, 0.0, sz, cz);

        qz.multiply(qx).multiply(qy)
    }
}

/// Komponentenweise Summe (freie Funktion für Pipeline-Code).
pub fn add(a: Vector3, b: Vector3) -> Vector3 {
    a + b
}

/// Komponentenweise Division durch `scalar`.
pub fn scale_divide(v: Vector3, scalar: f32) -> Vector3 {
    v.scale_divide(scalar)
}

/// Konjugiert `q`.
pub fn conjugate(q: Quaternion) -> Quaternion {
    q.conjugate()
}

/// Dreht `v` um `q`.
pub fn rotate(q: Quaternion, v: Vector3) -> Vector3 {
    q.rotate(v)
}
