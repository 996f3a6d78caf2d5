//! Common reusable UI components
//!
//! Building blocks shared by the landing page sections and the consultation
//! dialog.

pub mod button;
pub mod form;
pub mod modal;

pub use button::{ButtonVariant, CtaButton};
pub use form::{CheckboxField, SelectField, TextAreaField, TextField};
pub use modal::BaseModal;
