//! # Computation Engine
//!
//! Derives monetary amounts from validated line items and freezes the
//! submission into an immutable snapshot.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Submission Pipeline                              │
//! │                                                                         │
//! │  InvoiceRecord (raw form state)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Tier 1: incomplete_sections()  ──fail──► SubmitError::Incomplete…     │
//! │       ▼                                                                 │
//! │  Tier 2: validate()             ──fail──► SubmitError::InvalidFields   │
//! │       ▼                                                                 │
//! │  deduplicate() ─► compute_line_item() per item ─► aggregate()          │
//! │       ▼                                                                 │
//! │  amount_to_words(grand total)                                           │
//! │       ▼                                                                 │
//! │  InvoiceSnapshot (immutable, handed to display/export)                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stage-Wise Rounding
//! Net is rounded to 2 places BEFORE tax is computed from it, and the
//! total is rounded again. `10.449 × 1, tax 10%` therefore yields tax
//! `0.05` (10% of the rounded `10.45`), not the `0.04` exact-intermediate
//! math would give. This ordering is a behavioral contract.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::SubmitError;
use crate::money::Amount;
use crate::types::{InvoiceRecord, LineItem};
use crate::validation;
use crate::words;

// =============================================================================
// Derived Amounts
// =============================================================================

/// The three derived amounts for one line item, each at 2-place precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineAmounts {
    /// unit_price × quantity − discount, rounded.
    pub net_amount: Amount,
    /// net × tax_rate / 100, computed from the rounded net, rounded.
    pub tax_amount: Amount,
    /// net + tax, rounded.
    pub total_amount: Amount,
}

/// Computes the derived amounts for a line item.
///
/// ## Example
/// ```rust
/// use billform_core::compute::compute_line_item;
/// use billform_core::types::LineItem;
///
/// let item = LineItem {
///     description: "Widget".to_string(),
///     unit_price: "10".parse().unwrap(),
///     quantity: "3".parse().unwrap(),
///     discount: "5".parse().unwrap(),
///     tax_rate: "18".parse().unwrap(),
/// };
/// let amounts = compute_line_item(&item);
/// assert_eq!(amounts.net_amount.to_string(), "25.00");
/// assert_eq!(amounts.tax_amount.to_string(), "4.50");
/// assert_eq!(amounts.total_amount.to_string(), "29.50");
/// ```
pub fn compute_line_item(item: &LineItem) -> LineAmounts {
    let net = Amount::from_decimal(item.unit_price * item.quantity - item.discount);
    // Tax is derived from the already-rounded net, not the exact value.
    let tax = Amount::from_decimal(net.value() * item.tax_rate / Decimal::ONE_HUNDRED);
    let total = Amount::from_decimal(net.value() + tax.value());

    LineAmounts {
        net_amount: net,
        tax_amount: tax,
        total_amount: total,
    }
}

// =============================================================================
// Aggregate Totals
// =============================================================================

/// Aggregate totals across all (deduplicated) line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub total_net: Amount,
    pub total_tax: Amount,
    pub total_amount: Amount,
}

/// Sums the already-rounded per-item amounts; each sum is itself rounded
/// to 2 places.
pub fn aggregate<'a, I>(amounts: I) -> InvoiceTotals
where
    I: IntoIterator<Item = &'a LineAmounts>,
{
    let mut net = Decimal::ZERO;
    let mut tax = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    for a in amounts {
        net += a.net_amount.value();
        tax += a.tax_amount.value();
        total += a.total_amount.value();
    }

    InvoiceTotals {
        total_net: Amount::from_decimal(net),
        total_tax: Amount::from_decimal(tax),
        total_amount: Amount::from_decimal(total),
    }
}

// =============================================================================
// Deduplication
// =============================================================================

/// Collapses structurally equal items to their first occurrence,
/// preserving first-seen order. Idempotent.
pub fn deduplicate(items: &[LineItem]) -> Vec<LineItem> {
    let mut seen: HashSet<&LineItem> = HashSet::with_capacity(items.len());
    let mut unique = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item) {
            unique.push(item.clone());
        }
    }
    unique
}

// =============================================================================
// Invoice Snapshot
// =============================================================================

/// One line item with its derived amounts, as displayed/exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ComputedItem {
    pub item: LineItem,
    pub amounts: LineAmounts,
}

/// The immutable result of a successful submission.
///
/// Uses the snapshot pattern: the raw record is frozen as entered, items
/// are deduplicated with their amounts attached, and the words-rendering
/// of the grand total is precomputed. The presentation and export
/// collaborators consume this and nothing else; the core never mutates
/// it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSnapshot {
    /// Snapshot identifier (UUID v4).
    pub id: String,

    /// The form state exactly as submitted.
    pub record: InvoiceRecord,

    /// Deduplicated items with derived amounts, first-seen order.
    pub items: Vec<ComputedItem>,

    /// Aggregate totals over `items`.
    pub totals: InvoiceTotals,

    /// Words-rendering of `totals.total_amount`.
    pub amount_in_words: String,

    /// When the submission was accepted.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

/// Runs the full submission pipeline.
///
/// Both validation tiers must pass; on failure no amounts are computed
/// and the error carries one message per violation. On success the
/// returned snapshot is complete and self-contained.
pub fn submit(record: &InvoiceRecord) -> Result<InvoiceSnapshot, SubmitError> {
    let sections = validation::incomplete_sections(record);
    if !sections.is_empty() {
        return Err(SubmitError::IncompleteSections(sections));
    }

    let errors = validation::validate(record);
    if !errors.is_empty() {
        return Err(SubmitError::InvalidFields(errors));
    }

    let items: Vec<ComputedItem> = deduplicate(&record.items)
        .into_iter()
        .map(|item| {
            let amounts = compute_line_item(&item);
            ComputedItem { item, amounts }
        })
        .collect();
    let totals = aggregate(items.iter().map(|c| &c.amounts));
    let amount_in_words = words::amount_to_words(totals.total_amount.value());

    Ok(InvoiceSnapshot {
        id: Uuid::new_v4().to_string(),
        record: record.clone(),
        items,
        totals,
        amount_in_words,
        created_at: Utc::now(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
