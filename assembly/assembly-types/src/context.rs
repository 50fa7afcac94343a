//! Host design context trait.

use crate::ComponentInstance;

/// The host's active design document and current selection.
///
/// CAD hosts drive plugins through command callbacks; this trait reduces
/// that machinery to the three things the dimension tooling needs: whether
/// a design is open, which instances are selected, and a channel for the
/// summary message shown to the user.
///
/// A host shim implements this once over its native handles. The
/// `vec-of-mutable-borrows` selection shape matches how hosts hand back
/// selection lists: a transient view that is only valid for the duration
/// of one command invocation.
pub trait DesignContext {
    /// The host's instance handle type.
    type Instance: ComponentInstance;

    /// Whether a design document is currently open.
    fn is_active(&self) -> bool;

    /// The currently selected instances.
    ///
    /// An empty vector means nothing relevant is selected; callers treat
    /// that as a precondition failure rather than an empty update pass.
    fn selected_instances(&mut self) -> Vec<&mut Self::Instance>;

    /// Surface a user-facing message (the host's message box or status bar).
    fn notify(&self, message: &str);
}
