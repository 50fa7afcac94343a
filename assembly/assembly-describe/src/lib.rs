//! Bounding-box dimensions written into CAD component descriptions.
//!
//! This crate takes the instances a host hands over (selected occurrences
//! in an open assembly), derives each instance's outer dimensions from its
//! axis-aligned bounding box, and patches the result into the instance's
//! free-text description field.
//!
//! # Features
//!
//! - **Dimensions**: Sorted L/W/H triple in millimeters, derived from a
//!   host bounding box in centimeters
//! - **Description updates**: Patch-or-append policy that keeps unrelated
//!   description text intact and is idempotent across reruns
//! - **Host entry point**: [`run_for_context`] wraps the precondition
//!   checks and the user-facing summary message
//!
//! # Units
//!
//! Bounding boxes are expected in **centimeters** (the Fusion-style host
//! internal unit); all reported dimensions are **millimeters**.
//!
//! # Example
//!
//! ```
//! use assembly_types::{Aabb, ComponentInstance, Point3, SimpleInstance};
//! use assembly_describe::DescriptionUpdater;
//!
//! let mut bracket = SimpleInstance::new(
//!     "bracket:1",
//!     Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 2.0, 8.0)),
//! );
//!
//! let updater = DescriptionUpdater::new();
//! let report = updater.update_descriptions(&mut [&mut bracket]).unwrap();
//!
//! assert_eq!(report.summary(), "Updated dimensions for 1 component(s)");
//! assert_eq!(bracket.description(), "L: 80.0mm, W: 50.0mm, H: 20.0mm");
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod dimensions;
mod error;
mod update;

// Re-export main types and functions
pub use dimensions::Dimensions;
pub use error::{DescribeError, DescribeResult};
pub use update::{run_for_context, DescriptionUpdater, UpdateReport};
