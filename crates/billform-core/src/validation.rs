//! # Validation Module
//!
//! The two-tier validator gating invoice submission.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Tiers                                   │
//! │                                                                         │
//! │  Tier 1: Section completeness (coarse)                                 │
//! │  ├── Walks every section's required-field table                        │
//! │  ├── ACCUMULATES all incomplete sections before reporting              │
//! │  └── One "Please fill all required fields in <section>." per failure   │
//! │           │  all sections complete                                      │
//! │           ▼                                                             │
//! │  Tier 2: Field-level rules (fine)                                      │
//! │  ├── One "<fieldName> is required." per empty mandatory field          │
//! │  └── Per-item numeric constraints, 1-based item indices                │
//! │                                                                         │
//! │  Both tiers must pass before any amount is computed.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Deliberately NOT here: cross-field consistency (state codes against a
//! reference table, GST/PAN checksum formats). That is a scope limit of the
//! product, not an omission.
//!
//! ## Side Effects
//! None. Both tiers return error data; alerts and inline messages are the
//! form collaborator's job.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::fields::Section;
use crate::types::{InvoiceRecord, LineItem};

// =============================================================================
// Tier 1: Section Completeness
// =============================================================================

/// Checks one section's completeness against the field table.
///
/// The items section is special-cased: every line item must carry a
/// description, a positive unit price and a positive quantity. Discount
/// and tax rate may legitimately be zero, so they cannot fail
/// completeness - they are still constrained (>= 0) by tier 2.
pub fn section_is_complete(record: &InvoiceRecord, section: Section) -> bool {
    match section {
        Section::Items => record.items.iter().all(item_is_complete),
        _ => section
            .required_fields()
            .iter()
            .all(|field| record.field_is_present(*field)),
    }
}

fn item_is_complete(item: &LineItem) -> bool {
    !item.description.trim().is_empty()
        && item.unit_price > Decimal::ZERO
        && item.quantity > Decimal::ZERO
}

/// Runs the coarse pass over all sections, accumulating every incomplete
/// one (in section order) instead of failing fast, so the user sees the
/// whole picture in one round trip.
pub fn incomplete_sections(record: &InvoiceRecord) -> Vec<Section> {
    Section::ALL
        .into_iter()
        .filter(|section| !section_is_complete(record, *section))
        .collect()
}

// =============================================================================
// Tier 2: Field-Level Rules
// =============================================================================

/// Runs the fine-grained pass and returns every violation.
///
/// Returns an empty vector iff every mandatory field is non-blank and
/// every line item satisfies `unit_price > 0`, `quantity > 0`,
/// `discount >= 0`, `tax_rate >= 0`.
pub fn validate(record: &InvoiceRecord) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for field in crate::fields::Field::MANDATORY {
        if !record.field_is_present(field) {
            errors.push(ValidationError::MissingField {
                field: field.name(),
            });
        }
    }

    for (idx, item) in record.items.iter().enumerate() {
        let index = idx + 1; // 1-based in messages
        if item.description.trim().is_empty() {
            errors.push(ValidationError::ItemDescriptionRequired { index });
        }
        if item.unit_price <= Decimal::ZERO {
            errors.push(ValidationError::ItemUnitPriceNotPositive { index });
        }
        if item.quantity <= Decimal::ZERO {
            errors.push(ValidationError::ItemQuantityNotPositive { index });
        }
        if item.discount < Decimal::ZERO {
            errors.push(ValidationError::ItemDiscountNegative { index });
        }
        if item.tax_rate < Decimal::ZERO {
            errors.push(ValidationError::ItemTaxRateNegative { index });
        }
    }

    errors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SignatureFile;

    fn d(s: &str) -> Decimal {
        s.parse().expect("test decimal")
    }

    fn item(description: &str, price: &str, qty: &str, discount: &str, tax: &str) -> LineItem {
        LineItem {
            description: description.to_string(),
            unit_price: d(price),
            quantity: d(qty),
            discount: d(discount),
            tax_rate: d(tax),
        }
    }

    fn complete_record() -> InvoiceRecord {
        InvoiceRecord {
            seller_name: "Acme Traders".into(),
            seller_address: "12 MG Road".into(),
            seller_city: "Bengaluru".into(),
            seller_state: "Karnataka".into(),
            seller_pincode: "560001".into(),
            seller_pan: "ABCDE1234F".into(),
            seller_gst: "29ABCDE1234F1Z5".into(),
            billing_name: "Ravi Kumar".into(),
            billing_address: "44 Park Street".into(),
            billing_city: "Kolkata".into(),
            billing_state: "West Bengal".into(),
            billing_pincode: "700016".into(),
            billing_state_code: "19".into(),
            place_of_supply: "West Bengal".into(),
            shipping_name: "Ravi Kumar".into(),
            shipping_address: "44 Park Street".into(),
            shipping_city: "Kolkata".into(),
            shipping_state: "West Bengal".into(),
            shipping_pincode: "700016".into(),
            shipping_state_code: "19".into(),
            place_of_delivery: "West Bengal".into(),
            order_number: "OD-1042".into(),
            order_date: "2024-04-01".into(),
            invoice_number: "INV-2024-17".into(),
            invoice_details: "April supply".into(),
            invoice_date: "2024-04-02".into(),
            reverse_charge: Default::default(),
            items: vec![item("Widget", "10", "3", "5", "18")],
            signature: Some(SignatureFile {
                file_name: "signature.png".into(),
                content_type: Some("image/png".into()),
            }),
        }
    }

    #[test]
    fn test_complete_record_passes_both_tiers() {
        let record = complete_record();
        assert!(incomplete_sections(&record).is_empty());
        assert!(validate(&record).is_empty());
    }

    #[test]
    fn test_sections_accumulate_instead_of_failing_fast() {
        let mut record = complete_record();
        record.seller_name.clear();
        record.signature = None;

        assert_eq!(
            incomplete_sections(&record),
            vec![Section::SellerDetails, Section::Signature]
        );
    }

    #[test]
    fn test_blank_field_is_missing() {
        let mut record = complete_record();
        record.place_of_supply = "   ".into(); // whitespace counts as empty

        assert_eq!(
            incomplete_sections(&record),
            vec![Section::BillingDetails]
        );
        let errors = validate(&record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "placeOfSupply is required.");
    }

    #[test]
    fn test_zero_discount_does_not_fail_completeness() {
        let mut record = complete_record();
        record.items = vec![item("Widget", "10", "3", "0", "0")];

        assert!(incomplete_sections(&record).is_empty());
        assert!(validate(&record).is_empty());
    }

    #[test]
    fn test_item_rule_violations_are_indexed_from_one() {
        let mut record = complete_record();
        record.items = vec![
            item("Widget", "10", "3", "0", "18"),
            item("", "0", "0", "-1", "-2"),
        ];

        let messages: Vec<String> =
            validate(&record).iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "Description for item 2 is required.",
                "Unit Price for item 2 must be greater than 0.",
                "Quantity for item 2 must be greater than 0.",
                "Discount for item 2 cannot be negative.",
                "Tax Rate for item 2 cannot be negative.",
            ]
        );
    }

    #[test]
    fn test_every_mandatory_field_reports_when_record_is_empty() {
        let record = InvoiceRecord::default();
        let errors = validate(&record);
        // All 27 mandatory fields missing; no items, so no item errors.
        assert_eq!(errors.len(), 27);
        assert_eq!(errors[0].to_string(), "sellerName is required.");
        assert_eq!(errors[26].to_string(), "signature is required.");
    }

    #[test]
    fn test_empty_item_list_is_not_an_error() {
        let mut record = complete_record();
        record.items.clear();

        assert!(incomplete_sections(&record).is_empty());
        assert!(validate(&record).is_empty());
    }
}
