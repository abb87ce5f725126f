//! Concrete value types
//!
//! Minimal geometry, color and resolution values carried by live parameters.
//! Equality is exact and component-wise.

use serde::{Deserialize, Serialize};

use crate::floatable::{component, round_to, Floatable};

// ============================================================================
// Point
// ============================================================================

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// `[x, y]`; missing components read as `0.0`
impl Floatable for Point {
    fn to_floats(&self) -> Vec<f64> {
        vec![self.x, self.y]
    }

    fn from_floats(floats: &[f64]) -> Self {
        Self::new(component(floats, 0, 0.0), component(floats, 1, 0.0))
    }
}

// ============================================================================
// Size
// ============================================================================

/// A 2D extent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// `[width, height]`; missing components read as `0.0`
impl Floatable for Size {
    fn to_floats(&self) -> Vec<f64> {
        vec![self.width, self.height]
    }

    fn from_floats(floats: &[f64]) -> Self {
        Self::new(component(floats, 0, 0.0), component(floats, 1, 0.0))
    }
}

// ============================================================================
// Color
// ============================================================================

/// An RGBA color with unit-range channels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque gray
    pub const fn gray(white: f64) -> Self {
        Self::rgb(white, white, white)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// `[red, green, blue, alpha]`; missing channels read as `0.0`, except a
/// missing alpha which reads as opaque `1.0`
impl Floatable for Color {
    fn to_floats(&self) -> Vec<f64> {
        vec![self.red, self.green, self.blue, self.alpha]
    }

    fn from_floats(floats: &[f64]) -> Self {
        Self::rgba(
            component(floats, 0, 0.0),
            component(floats, 1, 0.0),
            component(floats, 2, 0.0),
            component(floats, 3, 1.0),
        )
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// A pixel resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const HD: Resolution = Resolution::new(1280, 720);
    pub const FULL_HD: Resolution = Resolution::new(1920, 1080);
    pub const UHD: Resolution = Resolution::new(3840, 2160);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    /// Total pixel count
    pub fn count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::FULL_HD
    }
}

/// `[width, height]`; components are rounded, and missing, negative, NaN or
/// oversized components read as `0`
impl Floatable for Resolution {
    fn to_floats(&self) -> Vec<f64> {
        vec![f64::from(self.width), f64::from(self.height)]
    }

    fn from_floats(floats: &[f64]) -> Self {
        let side = |index| round_to(component(floats, index, 0.0)).unwrap_or(0);
        Self::new(side(0), side(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_floats_order() {
        assert_eq!(Point::new(1.5, -2.0).to_floats(), vec![1.5, -2.0]);
        assert_eq!(Point::from_floats(&[0.25]), Point::new(0.25, 0.0));
    }

    #[test]
    fn test_size_round_trip() {
        let size = Size::new(-4.0, 1e6);
        assert_eq!(Size::from_floats(&size.to_floats()), size);
        assert_eq!(Size::from_floats(&[]), Size::ZERO);
    }

    #[test]
    fn test_color_missing_alpha_is_opaque() {
        assert_eq!(Color::from_floats(&[0.2, 0.4, 0.6]), Color::rgb(0.2, 0.4, 0.6));
        assert_eq!(Color::from_floats(&[]), Color::BLACK);
        let color = Color::rgba(0.1, 0.2, 0.3, 0.0);
        assert_eq!(Color::from_floats(&color.to_floats()), color);
    }

    #[test]
    fn test_resolution_round_trip() {
        for resolution in [Resolution::square(0), Resolution::FULL_HD, Resolution::new(u32::MAX, 1)] {
            assert_eq!(Resolution::from_floats(&resolution.to_floats()), resolution);
        }
    }

    #[test]
    fn test_resolution_rejects_invalid_components() {
        assert_eq!(Resolution::from_floats(&[-5.0, f64::NAN]), Resolution::square(0));
        assert_eq!(Resolution::from_floats(&[1919.6]), Resolution::new(1920, 0));
        assert_eq!(Resolution::FULL_HD.count(), 2_073_600);
    }
}
