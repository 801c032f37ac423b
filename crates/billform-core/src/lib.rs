//! # billform-core: Pure Business Logic for Billform
//!
//! This crate is the **heart** of Billform. It contains the invoice
//! validation and computation engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Billform Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Form Collaborator (frontend / CLI)                 │   │
//! │  │    multi-section form ──► JSON form state ──► submit            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ billform-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌────────┐ ┌────────────┐ ┌─────────┐ ┌────────┐  │   │
//! │  │  │  types  │ │ fields │ │ validation │ │ compute │ │ words  │  │   │
//! │  │  │ Record  │ │ table  │ │  two tiers │ │ amounts │ │ Rs./   │  │   │
//! │  │  │ LineItem│ │ F → S  │ │  messages  │ │ dedupe  │ │ Paisa  │  │   │
//! │  │  └─────────┘ └────────┘ └────────────┘ └─────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │         Display & Export Collaborators (external)               │   │
//! │  │    on-screen invoice ◄── InvoiceSnapshot ──► DocumentPlan ──►   │   │
//! │  │                                              PDF renderer       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Raw form-state types ([`InvoiceRecord`], [`LineItem`])
//! - [`fields`] - The fixed field-to-section table behind validation
//! - [`validation`] - Two-tier validation (section completeness, field rules)
//! - [`money`] - [`Amount`] with decimal arithmetic and half-up rounding
//! - [`compute`] - Derived amounts, dedup, aggregates, [`submit`]
//! - [`words`] - Amount-in-words rendering ("Rs."/"Paisa")
//! - [`export`] - The plain-data [`DocumentPlan`] for the PDF collaborator
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output; no locking, no
//!    transactions, nothing blocks or suspends
//! 2. **No I/O**: rendering, file pickers and persistence are FORBIDDEN here
//! 3. **Decimal Money**: exact base-10 arithmetic, half-up rounded to two
//!    places at every stage - never binary floating point
//! 4. **Explicit Errors**: typed variants whose Display text is the exact
//!    user-facing message
//!
//! ## Example Usage
//!
//! ```rust
//! use billform_core::{submit, InvoiceRecord, SubmitError};
//!
//! // An untouched form fails the coarse section pass with every section
//! // reported at once; no amounts are computed.
//! let record = InvoiceRecord::default();
//! match submit(&record) {
//!     Err(SubmitError::IncompleteSections(sections)) => {
//!         assert_eq!(sections.len(), 6); // all but the (empty) items list
//!     }
//!     other => panic!("expected incomplete sections, got {other:?}"),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod compute;
pub mod error;
pub mod export;
pub mod fields;
pub mod money;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use billform_core::InvoiceRecord` instead of
// `use billform_core::types::InvoiceRecord`

pub use compute::{
    aggregate, compute_line_item, deduplicate, submit, ComputedItem, InvoiceSnapshot,
    InvoiceTotals, LineAmounts,
};
pub use error::{SubmitError, ValidationError};
pub use export::{document_plan, DocumentPlan, EXPORT_FILE_NAME};
pub use fields::{Field, Section};
pub use money::Amount;
pub use types::{InvoiceRecord, LineItem, ReverseCharge, SignatureFile};
pub use validation::{incomplete_sections, section_is_complete, validate};
pub use words::{amount_text_to_words, amount_to_words, INVALID_INPUT};
