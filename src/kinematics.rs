//! Shared motion and collision helpers.
//!
//! Every moving entity stores its position as the top-left corner of an
//! axis-aligned box in screen space (y grows downwards). Vertical motion is
//! integrated with [`FallIntegrator`], which clamps to a floor line.

use glam::Vec2;
use serde::Serialize;

/// Axis-aligned bounding box anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    /// Top-left corner.
    pub min: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Aabb {
    /// Builds a box from its top-left corner and size.
    #[must_use]
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Builds a box from its centre point.
    #[must_use]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size / 2.0, size)
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }

    /// Returns `true` when the boxes share a region of positive area.
    ///
    /// Boxes that only touch along an edge do not intersect.
    ///
    /// # Examples
    ///
    /// ```
    /// use beeline::kinematics::Aabb;
    /// use glam::Vec2;
    /// let a = Aabb::new(Vec2::ZERO, Vec2::splat(10.0));
    /// let b = Aabb::new(Vec2::new(5.0, 5.0), Vec2::splat(10.0));
    /// let c = Aabb::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&c));
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }

    /// Returns `true` when `point` lies inside the box.
    ///
    /// The top and left edges are inclusive, the bottom and right edges are
    /// exclusive.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

/// Anything that occupies a rectangle in the world.
pub trait Bounded {
    /// Current bounding box.
    fn bounds(&self) -> Aabb;
}

impl Bounded for Aabb {
    fn bounds(&self) -> Aabb {
        *self
    }
}

/// Symmetric overlap test between two bounded entities.
#[must_use]
pub fn intersects(a: &impl Bounded, b: &impl Bounded) -> bool {
    a.bounds().intersects(&b.bounds())
}

/// Result of one vertical integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Still above the floor.
    Airborne,
    /// Reached the floor this step and was snapped onto it.
    Landed,
}

/// Integrates vertical velocity under constant gravity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FallIntegrator {
    /// Vertical speed in pixels per frame; positive is downwards.
    pub velocity: f32,
}

impl FallIntegrator {
    /// Creates an integrator with the given starting speed.
    #[must_use]
    pub const fn with_velocity(velocity: f32) -> Self {
        Self { velocity }
    }

    /// Advances `top` by one frame.
    ///
    /// The current velocity is applied first and gravity afterwards. Once
    /// the bottom edge (`top + height`) reaches `ground` the entity is
    /// placed exactly on the floor and the velocity is cleared.
    ///
    /// # Examples
    ///
    /// ```
    /// use beeline::kinematics::{FallIntegrator, Landing};
    /// let mut top = 0.0;
    /// let mut fall = FallIntegrator::with_velocity(2.0);
    /// assert_eq!(fall.step(&mut top, 10.0, 100.0, 0.5), Landing::Airborne);
    /// assert!((top - 2.0).abs() < f32::EPSILON);
    /// assert!((fall.velocity - 2.5).abs() < f32::EPSILON);
    /// ```
    pub fn step(&mut self, top: &mut f32, height: f32, ground: f32, gravity: f32) -> Landing {
        *top += self.velocity;
        self.velocity += gravity;
        if *top + height >= ground {
            *top = ground - height;
            self.velocity = 0.0;
            Landing::Landed
        } else {
            Landing::Airborne
        }
    }

    /// Advances `top` by one frame without a floor.
    pub fn step_unbounded(&mut self, top: &mut f32, gravity: f32) {
        *top += self.velocity;
        self.velocity += gravity;
    }
}
