//! Description update pass over a selection of instances.

use assembly_types::{ComponentInstance, DesignContext};
use regex::Regex;
use std::fmt;
use tracing::{debug, info};

use crate::dimensions::Dimensions;
use crate::error::{DescribeError, DescribeResult};

/// Pattern matching any dimension string this crate has written before,
/// regardless of the decimal precision in effect when it was written.
const DIMENSION_PATTERN: &str = r"L: \d+(?:\.\d+)?mm, W: \d+(?:\.\d+)?mm, H: \d+(?:\.\d+)?mm";

/// Writes bounding-box dimensions into instance descriptions.
///
/// The update policy is patch-or-append: a previously written dimension
/// string anywhere in the description is replaced in place; otherwise the
/// new string is appended on its own line (or becomes the whole description
/// when the field is empty). Running the pass twice is a no-op for the
/// second run.
///
/// # Example
///
/// ```
/// use assembly_types::{Aabb, ComponentInstance, Point3, SimpleInstance};
/// use assembly_describe::DescriptionUpdater;
///
/// let mut instance = SimpleInstance::new(
///     "bracket:1",
///     Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(5.0, 2.0, 8.0)),
/// );
///
/// let updater = DescriptionUpdater::new();
/// let report = updater.update_descriptions(&mut [&mut instance]).unwrap();
///
/// assert_eq!(report.updated, 1);
/// assert_eq!(instance.description(), "L: 80.0mm, W: 50.0mm, H: 20.0mm");
/// ```
#[derive(Debug, Clone)]
pub struct DescriptionUpdater {
    pattern: Regex,
}

impl DescriptionUpdater {
    /// Create an updater with the canonical dimension pattern.
    #[must_use]
    pub fn new() -> Self {
        #[allow(clippy::expect_used)] // fixed literal, exercised by every test below
        let pattern = Regex::new(DIMENSION_PATTERN).expect("dimension pattern is valid");
        Self { pattern }
    }

    /// Apply the patch-or-append policy to a single description.
    ///
    /// Pure string-to-string; exposed for hosts that stage description
    /// edits in their own undo transaction.
    #[must_use]
    pub fn apply(&self, current: &str, dims: &Dimensions) -> String {
        let formatted = dims.to_string();
        if self.pattern.is_match(current) {
            // Patch every stale dimension string in place
            self.pattern
                .replace_all(current, formatted.as_str())
                .into_owned()
        } else if current.trim().is_empty() {
            formatted
        } else {
            format!("{current}\n{formatted}")
        }
    }

    /// Update the descriptions of every measurable instance in a selection.
    ///
    /// Instances whose bounding box is absent or invalid are skipped
    /// silently and counted in the report. An empty selection is a
    /// precondition failure: nothing is touched and
    /// [`DescribeError::NoInstances`] is returned.
    ///
    /// # Errors
    ///
    /// Returns [`DescribeError::NoInstances`] when `instances` is empty.
    pub fn update_descriptions<I: ComponentInstance>(
        &self,
        instances: &mut [&mut I],
    ) -> DescribeResult<UpdateReport> {
        if instances.is_empty() {
            return Err(DescribeError::NoInstances);
        }

        info!(instances = instances.len(), "Starting description update");

        let mut updated = 0;
        let mut skipped = 0;

        for instance in instances.iter_mut() {
            let Some(bounds) = instance.bounding_box() else {
                debug!(name = instance.name(), "No bounding box, skipping");
                skipped += 1;
                continue;
            };
            let Some(dims) = Dimensions::from_bounds(&bounds) else {
                debug!(name = instance.name(), "Invalid bounding box, skipping");
                skipped += 1;
                continue;
            };

            let next = self.apply(instance.description(), &dims);
            if next != instance.description() {
                instance.set_description(next);
            }
            updated += 1;
        }

        info!(updated, skipped, "Description update complete");

        Ok(UpdateReport {
            updated,
            skipped,
            total: instances.len(),
        })
    }
}

impl Default for DescriptionUpdater {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a description update pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateReport {
    /// Instances whose description now carries current dimensions.
    pub updated: usize,
    /// Instances skipped for an absent or invalid bounding box.
    pub skipped: usize,
    /// Total instances in the selection.
    pub total: usize,
}

impl UpdateReport {
    /// One-line user-facing summary.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.skipped == 0 {
            format!("Updated dimensions for {} component(s)", self.updated)
        } else {
            format!(
                "Updated dimensions for {} component(s), {} skipped",
                self.updated, self.skipped
            )
        }
    }
}

impl fmt::Display for UpdateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Description update:")?;
        writeln!(f, "  Selected: {}", self.total)?;
        writeln!(f, "  Updated: {}", self.updated)?;
        writeln!(f, "  Skipped: {}", self.skipped)?;
        Ok(())
    }
}

/// Run a full update pass against a host design context.
///
/// This is the command entry point a host shim calls from its menu
/// trigger. Preconditions (no open design, empty selection) abort with
/// nothing touched; the outcome, success or failure, is surfaced to the
/// user through [`DesignContext::notify`].
///
/// # Errors
///
/// Returns [`DescribeError::NoActiveDesign`] when no design is open and
/// [`DescribeError::NoInstances`] when the selection is empty.
pub fn run_for_context<C: DesignContext>(ctx: &mut C) -> DescribeResult<UpdateReport> {
    if !ctx.is_active() {
        let err = DescribeError::NoActiveDesign;
        ctx.notify(&err.to_string());
        return Err(err);
    }

    let updater = DescriptionUpdater::new();
    let result = {
        let mut selected = ctx.selected_instances();
        updater.update_descriptions(&mut selected)
    };

    match &result {
        Ok(report) => ctx.notify(&report.summary()),
        Err(err) => ctx.notify(&err.to_string()),
    }
    result
}
