//! Document rendering engine
//!
//! This crate turns back-office records into branded A4 PDFs, including:
//! - Construction phase plans with hazard assessment grids
//! - Health & safety and other company policies
//! - Equipment and vehicle checklists
//! - Purchase orders
//!
//! Rendering is a two-pass pipeline: a pure composition pass builds a
//! [`compose::DocumentLayout`] (measured tables placed on pages), then a
//! drawing pass paints it and emits a base64 data URL.
//!
//! # Feature Flags
//!
//! - `server`: Enables async [`generate_pdf`] with timeout (requires tokio)

pub mod assets;
pub mod compose;
pub mod documents;
pub mod draw;
pub mod emit;
pub mod error;
pub mod format;
pub mod style;
pub mod table;

pub use documents::{
    generate_cpp_pdf, generate_equipment_checklist_pdf, generate_hs_policy_pdf,
    generate_other_policy_pdf, generate_purchase_order_pdf, generate_vehicle_checklist_pdf,
};
pub use error::RenderError;

#[cfg(feature = "server")]
pub use documents::{generate_pdf, GenerateRequest};
