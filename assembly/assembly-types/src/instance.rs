//! Component instance trait and an in-memory implementation.

use crate::Aabb;

/// A placed occurrence of a component within an assembly.
///
/// This trait is the seam to the CAD host: the host owns instance identity,
/// geometry, and the description field. Implementations wrap whatever handle
/// the host hands out; algorithms in downstream crates only see this
/// interface.
pub trait ComponentInstance {
    /// Host-visible name of the occurrence, used for logging.
    fn name(&self) -> &str;

    /// The instance's axis-aligned bounding box, in host units.
    ///
    /// Returns `None` when the host reports no box (for example a
    /// suppressed occurrence). A returned box may still be invalid; see
    /// [`Aabb::is_valid`].
    fn bounding_box(&self) -> Option<Aabb>;

    /// The component's free-text description field.
    fn description(&self) -> &str;

    /// Replace the component's description field.
    fn set_description(&mut self, description: String);
}

/// An in-memory [`ComponentInstance`].
///
/// Useful as a test double and for embedders that build selections outside
/// of a live host session.
///
/// # Example
///
/// ```
/// use assembly_types::{Aabb, ComponentInstance, Point3, SimpleInstance};
///
/// let mut instance = SimpleInstance::new(
///     "plate:3",
///     Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 3.0, 3.0)),
/// );
///
/// assert_eq!(instance.description(), "");
/// instance.set_description("Steel, 3mm".to_string());
/// assert_eq!(instance.description(), "Steel, 3mm");
/// ```
#[derive(Debug, Clone)]
pub struct SimpleInstance {
    /// Occurrence name.
    pub name: String,
    /// Bounding box, if any.
    pub bounding_box: Option<Aabb>,
    /// Description field contents.
    pub description: String,
}

impl SimpleInstance {
    /// Create an instance with a bounding box and an empty description.
    #[must_use]
    pub fn new(name: impl Into<String>, bounding_box: Aabb) -> Self {
        Self {
            name: name.into(),
            bounding_box: Some(bounding_box),
            description: String::new(),
        }
    }

    /// Create an instance whose host reports no bounding box.
    #[must_use]
    pub fn without_bounds(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounding_box: None,
            description: String::new(),
        }
    }

    /// Set the description, builder-style.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl ComponentInstance for SimpleInstance {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounding_box(&self) -> Option<Aabb> {
        self.bounding_box
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn set_description(&mut self, description: String) {
        self.description = description;
    }
}
