//! End-to-end flow tests against an in-memory host context.
//!
//! These tests stand in for a live CAD host: a `MockDesign` owns a set of
//! instances and records the user-facing messages the command surfaces.

// Allow test-specific patterns
#![allow(clippy::unwrap_used)]

use std::cell::RefCell;

use assembly_describe::{run_for_context, DescribeError};
use assembly_types::{Aabb, DesignContext, Point3, SimpleInstance};

struct MockDesign {
    active: bool,
    instances: Vec<SimpleInstance>,
    messages: RefCell<Vec<String>>,
}

impl MockDesign {
    fn new(instances: Vec<SimpleInstance>) -> Self {
        Self {
            active: true,
            instances,
            messages: RefCell::new(Vec::new()),
        }
    }

    fn last_message(&self) -> String {
        self.messages.borrow().last().cloned().unwrap_or_default()
    }
}

impl DesignContext for MockDesign {
    type Instance = SimpleInstance;

    fn is_active(&self) -> bool {
        self.active
    }

    fn selected_instances(&mut self) -> Vec<&mut SimpleInstance> {
        self.instances.iter_mut().collect()
    }

    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

fn cm_box(x: f64, y: f64, z: f64) -> Aabb {
    Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(x, y, z))
}

#[test]
fn updates_selection_and_reports_count() {
    let mut design = MockDesign::new(vec![
        SimpleInstance::new("bracket:1", cm_box(5.0, 2.0, 8.0)),
        SimpleInstance::new("cube:1", cm_box(3.0, 3.0, 3.0)),
    ]);

    let report = run_for_context(&mut design).unwrap();

    assert_eq!(report.updated, 2);
    assert_eq!(
        design.instances[0].description,
        "L: 80.0mm, W: 50.0mm, H: 20.0mm"
    );
    assert_eq!(
        design.instances[1].description,
        "L: 30.0mm, W: 30.0mm, H: 30.0mm"
    );
    assert_eq!(design.last_message(), "Updated dimensions for 2 component(s)");
}

#[test]
fn inactive_design_aborts_with_message() {
    let mut design = MockDesign::new(vec![SimpleInstance::new(
        "bracket:1",
        cm_box(5.0, 2.0, 8.0),
    )]);
    design.active = false;

    let result = run_for_context(&mut design);

    assert_eq!(result, Err(DescribeError::NoActiveDesign));
    assert_eq!(design.instances[0].description, "");
    assert_eq!(design.last_message(), "no active design document");
}

#[test]
fn empty_selection_aborts_with_message() {
    let mut design = MockDesign::new(Vec::new());

    let result = run_for_context(&mut design);

    assert_eq!(result, Err(DescribeError::NoInstances));
    assert_eq!(design.last_message(), "no component instances selected");
}

#[test]
fn skipped_instances_show_up_in_summary() {
    let mut design = MockDesign::new(vec![
        SimpleInstance::new("bracket:1", cm_box(5.0, 2.0, 8.0)),
        SimpleInstance::without_bounds("suppressed:1"),
    ]);

    let report = run_for_context(&mut design).unwrap();

    assert_eq!(report.updated, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(
        design.last_message(),
        "Updated dimensions for 1 component(s), 1 skipped"
    );
}

#[test]
fn rerun_is_idempotent_and_preserves_notes() {
    let mut design = MockDesign::new(vec![SimpleInstance::new(
        "bracket:1",
        cm_box(5.0, 2.0, 8.0),
    )
    .with_description("Anodized aluminum")]);

    run_for_context(&mut design).unwrap();
    let first = design.instances[0].description.clone();
    assert_eq!(first, "Anodized aluminum\nL: 80.0mm, W: 50.0mm, H: 20.0mm");

    run_for_context(&mut design).unwrap();
    assert_eq!(design.instances[0].description, first);
}

#[test]
fn rerun_after_geometry_change_patches_in_place() {
    let mut design = MockDesign::new(vec![SimpleInstance::new(
        "bracket:1",
        cm_box(5.0, 2.0, 8.0),
    )
    .with_description("Rev A\nL: 10.0mm, W: 10.0mm, H: 10.0mm")]);

    run_for_context(&mut design).unwrap();

    assert_eq!(
        design.instances[0].description,
        "Rev A\nL: 80.0mm, W: 50.0mm, H: 20.0mm"
    );
}
