//! 3D vector with a cached magnitude.
//!
//! Components are stored in a [`Vec3A`] so the arithmetic goes through glam's
//! SIMD paths; the magnitude is computed once at construction and kept in sync
//! by [`Vector3D::normalize`].

use std::ops::{Add, Index, Mul, Neg, Sub};

use glam::Vec3A;

use crate::error::GeometryError;

/// 3D vector with cached length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3D {
    v: Vec3A,
    length: f32,
}

impl Vector3D {
    /// The zero vector.
    pub const ZERO: Self = Self {
        v: Vec3A::ZERO,
        length: 0.0,
    };

    /// Create a vector and cache its magnitude.
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from(Vec3A::new(x, y, z))
    }

    /// X component
    pub fn x(&self) -> f32 {
        self.v.x
    }

    /// Y component
    pub fn y(&self) -> f32 {
        self.v.y
    }

    /// Z component
    pub fn z(&self) -> f32 {
        self.v.z
    }

    /// Cached magnitude.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Scalar product.
    pub fn dot(&self, other: Self) -> f32 {
        self.v.dot(other.v)
    }

    /// Component-wise multiplication by `k`.
    pub fn scale(&self, k: f32) -> Self {
        Self::from(self.v * k)
    }

    /// Component-wise division by `k`.
    ///
    /// Fails instead of producing infinities when `k` is zero.
    pub fn checked_div(&self, k: f32) -> Result<Self, GeometryError> {
        if k == 0.0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Self::from(self.v / k))
    }

    /// Normalize in place.
    ///
    /// The zero vector is left untouched. Otherwise every component is divided
    /// by the magnitude, which then becomes exactly 1. A finite vector whose
    /// magnitude overflows is rescaled by its largest component first; a vector
    /// with non-finite components has no direction and becomes zero.
    pub fn normalize(&mut self) {
        if self.length == 0.0 {
            return;
        }
        if !self.length.is_finite() {
            let scaled = self.v / self.v.abs().max_element();
            if !scaled.is_finite() {
                *self = Self::ZERO;
                return;
            }
            self.v = scaled / scaled.length();
        } else {
            self.v /= self.length;
        }
        self.length = 1.0;
    }

    /// Normalized copy; see [`Vector3D::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Component by position. Indices other than 1 and 2 read component 0.
    pub fn at(&self, index: usize) -> f32 {
        match index {
            1 => self.v.y,
            2 => self.v.z,
            _ => self.v.x,
        }
    }

    /// True when every component is finite.
    pub fn is_finite(&self) -> bool {
        self.v.is_finite()
    }
}

impl From<Vec3A> for Vector3D {
    fn from(v: Vec3A) -> Self {
        Self {
            v,
            length: v.length(),
        }
    }
}

impl From<Vector3D> for Vec3A {
    fn from(v: Vector3D) -> Self {
        v.v
    }
}

/// Exact component comparison; no tolerance.
impl PartialEq for Vector3D {
    fn eq(&self, other: &Self) -> bool {
        self.v.x == other.v.x && self.v.y == other.v.y && self.v.z == other.v.z
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from(self.v + rhs.v)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from(self.v - rhs.v)
    }
}

impl Mul<f32> for Vector3D {
    type Output = Self;

    fn mul(self, k: f32) -> Self {
        self.scale(k)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from(-self.v)
    }
}

impl Index<usize> for Vector3D {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            1 => &self.v.y,
            2 => &self.v.z,
            _ => &self.v.x,
        }
    }
}
