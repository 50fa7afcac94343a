//! Core types for assembly dimension tooling.
//!
//! This crate provides the foundational types for working with CAD component
//! instances supplied by a host application:
//!
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`ComponentInstance`] - Trait for a placed component occurrence
//! - [`DesignContext`] - Trait for the host design document and selection
//! - [`SimpleInstance`] - In-memory instance for tests and embedders
//!
//! # Layer 0 Crate
//!
//! This crate carries no host dependencies. The CAD host lives entirely on
//! the other side of the [`ComponentInstance`] and [`DesignContext`] traits,
//! so the crate can be used in:
//! - CLI tools
//! - Host plugin shims
//! - Servers
//!
//! # Units
//!
//! This crate is **unit-agnostic**. All coordinates are `f64`. Hosts that
//! follow the Fusion convention supply bounding boxes in centimeters;
//! downstream crates (assembly-describe) assume centimeters in and report
//! millimeters out.
//!
//! # Example
//!
//! ```
//! use assembly_types::{Aabb, ComponentInstance, Point3, SimpleInstance};
//!
//! let instance = SimpleInstance::new(
//!     "bracket:1",
//!     Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 2.0, 8.0)),
//! );
//!
//! let bounds = instance.bounding_box().unwrap();
//! assert!((bounds.max_extent() - 8.0).abs() < 1e-10);
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod context;
mod instance;

// Re-export core types
pub use bounds::Aabb;
pub use context::DesignContext;
pub use instance::{ComponentInstance, SimpleInstance};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
