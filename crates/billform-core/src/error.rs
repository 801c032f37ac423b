//! # Error Types
//!
//! Domain-specific error types for billform-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  billform-core errors (this file)                                      │
//! │  ├── ValidationError  - One field-level rule violation                 │
//! │  └── SubmitError      - Why a submission was rejected                  │
//! │                                                                         │
//! │  CLI errors (apps/cli)                                                 │
//! │  └── CliError         - I/O and parse failures around the core         │
//! │                                                                         │
//! │  Flow: ValidationError → SubmitError → CliError → user                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never bare Strings
//! 3. The `Display` output of each variant IS the user-facing message,
//!    character for character - collaborators present it, they never
//!    reformat it
//! 4. Every rejected submission carries at least one message naming the
//!    offending field or item

use thiserror::Error;

use crate::fields::Section;

// =============================================================================
// Validation Error
// =============================================================================

/// A single field-level validation failure.
///
/// Item indices are 1-based in messages ("item 1" is the first row the
/// user sees on the form).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A mandatory form field is missing or empty.
    #[error("{field} is required.")]
    MissingField { field: &'static str },

    /// A line item has no description.
    #[error("Description for item {index} is required.")]
    ItemDescriptionRequired { index: usize },

    /// A line item's unit price is zero or negative.
    #[error("Unit Price for item {index} must be greater than 0.")]
    ItemUnitPriceNotPositive { index: usize },

    /// A line item's quantity is zero or negative.
    #[error("Quantity for item {index} must be greater than 0.")]
    ItemQuantityNotPositive { index: usize },

    /// A line item's discount is negative.
    #[error("Discount for item {index} cannot be negative.")]
    ItemDiscountNegative { index: usize },

    /// A line item's tax rate is negative.
    #[error("Tax Rate for item {index} cannot be negative.")]
    ItemTaxRateNegative { index: usize },
}

// =============================================================================
// Submit Error
// =============================================================================

/// Why a form submission was rejected.
///
/// Submission runs two validation tiers. The coarse section pass reports
/// every incomplete section at once (accumulate-all, not fail-fast); only
/// when all sections are complete does the fine-grained field pass run.
/// No amounts are computed for a rejected record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// One or more sections have empty required fields.
    #[error("{}", section_messages(.0))]
    IncompleteSections(Vec<Section>),

    /// Sections are complete but field-level rules are violated.
    #[error("{}", field_messages(.0))]
    InvalidFields(Vec<ValidationError>),
}

impl SubmitError {
    /// All user-facing messages carried by this error, one per violation.
    pub fn messages(&self) -> Vec<String> {
        match self {
            SubmitError::IncompleteSections(sections) => sections
                .iter()
                .map(|s| format!("Please fill all required fields in {s}."))
                .collect(),
            SubmitError::InvalidFields(errors) => {
                errors.iter().map(|e| e.to_string()).collect()
            }
        }
    }
}

fn section_messages(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| format!("Please fill all required fields in {s}."))
        .collect::<Vec<_>>()
        .join("\n")
}

fn field_messages(errors: &[ValidationError]) -> String {
    let list = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n");
    format!("Validation errors:\n{list}")
}

// =============================================================================
// Unit Tests
// =============================================================================
