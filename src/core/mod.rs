//! Page behavior models: validation, dialog and submission flow, navigation,
//! reveal and typing animations. Nothing here touches the DOM.

#[cfg(feature = "ssr")]
pub mod config;
pub mod consultation;
pub mod counter;
pub mod modal;
pub mod navigation;
pub mod notification;
pub mod reveal;
pub mod scroll_lock;
pub mod submission;
#[cfg(test)]
mod tests;
pub mod typing;
pub mod validation;

pub use consultation::{LeadCapture, SubmitBlocked, SubmitState};
pub use modal::{CloseReason, ModalController, ModalState};
pub use navigation::{Drawer, DrawerKind, NavBarGate, Overlays, SectionLayout};
pub use notification::{Notification, NotificationItem, NotificationKind, NotificationQueue};
pub use scroll_lock::{LockOwner, ScrollLock};
pub use submission::{
    FormTransport, SubmissionError, SubmissionPayload, SubmissionRecord, SubmissionSettings,
};
pub use typing::{TypingAction, TypingDisplay, TypingEngine};
pub use validation::{ConsultationInput, FieldError, FormField, ValidationResult};
