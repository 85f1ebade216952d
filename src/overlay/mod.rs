//! Overlay visibility: controlled/uncontrolled state, handles, and the modal.
//!
//! # Modules
//!
//! - [`control`]: `ControlMode` and the generic `Controlled<S>` cell
//! - [`visibility`]: Closed/Open state machine and dismissal triggers
//! - [`handle`]: Imperative `open()`/`close()` handle bound by weak reference
//! - [`modal`]: The `Modal` component with dismissal callbacks

pub mod control;
pub mod handle;
pub mod modal;
pub mod visibility;

pub use control::{ControlMode, Controlled};
pub use handle::{OverlayHandle, OverlayTarget};
pub use modal::{DismissCallbacks, Modal, ModalProps};
pub use visibility::{DismissTrigger, Transition, VisibilityController};
