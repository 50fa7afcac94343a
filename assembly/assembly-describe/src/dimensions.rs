//! Sorted dimension triple derived from a bounding box.

use assembly_types::Aabb;
use std::fmt;

/// Conversion factor from host units (centimeters) to millimeters.
const CM_TO_MM: f64 = 10.0;

/// Sorted outer dimensions of an instance, in millimeters.
///
/// The three bounding-box extents are always assigned largest-first, so
/// `length >= width >= height` holds regardless of which physical axis
/// produced the largest extent. This is the packaging convention (L x W x H,
/// descending), not axis-aligned labeling.
///
/// # Example
///
/// ```
/// use assembly_types::{Aabb, Point3};
/// use assembly_describe::Dimensions;
///
/// // A 5 x 2 x 8 cm box
/// let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 2.0, 8.0));
/// let dims = Dimensions::from_bounds(&aabb).unwrap();
///
/// assert!((dims.length - 80.0).abs() < 1e-10);
/// assert!((dims.width - 50.0).abs() < 1e-10);
/// assert!((dims.height - 20.0).abs() < 1e-10);
/// assert_eq!(dims.to_string(), "L: 80.0mm, W: 50.0mm, H: 20.0mm");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Largest extent (mm).
    pub length: f64,
    /// Middle extent (mm).
    pub width: f64,
    /// Smallest extent (mm).
    pub height: f64,
}

impl Dimensions {
    /// Create dimensions from three extents in millimeters.
    ///
    /// The extents are sorted descending before assignment; argument order
    /// does not matter.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        let mut extents = [a, b, c];
        extents.sort_by(f64::total_cmp);
        Self {
            length: extents[2],
            width: extents[1],
            height: extents[0],
        }
    }

    /// Derive dimensions from a host bounding box in centimeters.
    ///
    /// Returns `None` if the box is empty or otherwise invalid
    /// (see [`Aabb::is_valid`]). Each extent is converted to millimeters.
    #[must_use]
    pub fn from_bounds(bounds: &Aabb) -> Option<Self> {
        if !bounds.is_valid() {
            return None;
        }
        let size = bounds.size();
        Some(Self::new(
            size.x * CM_TO_MM,
            size.y * CM_TO_MM,
            size.z * CM_TO_MM,
        ))
    }

    /// Get the longest dimension.
    #[must_use]
    pub const fn max_extent(&self) -> f64 {
        self.length
    }

    /// Get the shortest dimension.
    #[must_use]
    pub const fn min_extent(&self) -> f64 {
        self.height
    }

    /// Get the aspect ratio (max / min dimension).
    ///
    /// Returns `f64::INFINITY` if the minimum extent is zero.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        if self.height.abs() < f64::EPSILON {
            f64::INFINITY
        } else {
            self.length / self.height
        }
    }

    /// Check if the instance is approximately cubic (aspect ratio near 1).
    #[must_use]
    pub fn is_cubic(&self, tolerance: f64) -> bool {
        (self.aspect_ratio() - 1.0).abs() < tolerance
    }
}

impl fmt::Display for Dimensions {
    /// Canonical dimension string, one decimal place per value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "L: {:.1}mm, W: {:.1}mm, H: {:.1}mm",
            self.length, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use assembly_types::Point3;

    #[test]
    fn test_sorted_regardless_of_input_order() {
        let orderings = [
            (5.0, 2.0, 8.0),
            (8.0, 5.0, 2.0),
            (2.0, 8.0, 5.0),
            (2.0, 5.0, 8.0),
        ];
        for (a, b, c) in orderings {
            let dims = Dimensions::new(a, b, c);
            assert_relative_eq!(dims.length, 8.0);
            assert_relative_eq!(dims.width, 5.0);
            assert_relative_eq!(dims.height, 2.0);
            assert!(dims.length >= dims.width && dims.width >= dims.height);
        }
    }

    #[test]
    fn test_from_bounds_converts_cm_to_mm() {
        let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 2.0, 8.0));
        let dims = Dimensions::from_bounds(&aabb).unwrap();
        assert_relative_eq!(dims.length, 80.0);
        assert_relative_eq!(dims.width, 50.0);
        assert_relative_eq!(dims.height, 20.0);
    }

    #[test]
    fn test_from_bounds_rejects_invalid() {
        assert!(Dimensions::from_bounds(&Aabb::empty()).is_none());

        let nan_box = Aabb {
            min: Point3::new(0.0, 0.0, 0.0),
            max: Point3::new(1.0, f64::NAN, 1.0),
        };
        assert!(Dimensions::from_bounds(&nan_box).is_none());
    }

    #[test]
    fn test_display_descending() {
        let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 2.0, 8.0));
        let dims = Dimensions::from_bounds(&aabb).unwrap();
        assert_eq!(dims.to_string(), "L: 80.0mm, W: 50.0mm, H: 20.0mm");
    }

    #[test]
    fn test_display_cube() {
        let aabb = Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 3.0, 3.0));
        let dims = Dimensions::from_bounds(&aabb).unwrap();
        assert_eq!(dims.to_string(), "L: 30.0mm, W: 30.0mm, H: 30.0mm");
    }

    #[test]
    fn test_display_fractional() {
        let dims = Dimensions::new(12.25, 7.5, 3.0);
        // One decimal place, rounded
        assert_eq!(dims.to_string(), "L: 12.2mm, W: 7.5mm, H: 3.0mm");
    }

    #[test]
    fn test_aspect_ratio() {
        let dims = Dimensions::new(10.0, 5.0, 2.0);
        assert_relative_eq!(dims.aspect_ratio(), 5.0);
        assert!(!dims.is_cubic(0.5));

        let cube = Dimensions::new(3.0, 3.0, 3.0);
        assert!(cube.is_cubic(0.01));
    }

    #[test]
    fn test_aspect_ratio_degenerate() {
        let flat = Dimensions::new(10.0, 5.0, 0.0);
        assert!(flat.aspect_ratio().is_infinite());
    }
}
