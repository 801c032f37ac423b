//! # Domain Types
//!
//! The raw form-state types for an invoice submission.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────┐   ┌─────────────────┐   ┌──────────────────┐    │
//! │  │  InvoiceRecord    │   │    LineItem     │   │  SignatureFile   │    │
//! │  │  ───────────────  │   │  ─────────────  │   │  ──────────────  │    │
//! │  │  seller block     │──►│  description    │   │  file_name       │    │
//! │  │  billing block    │   │  unit_price     │   │  content_type    │    │
//! │  │  shipping block   │   │  quantity       │   └──────────────────┘    │
//! │  │  order block      │   │  discount       │                           │
//! │  │  invoice block    │   │  tax_rate (%)   │                           │
//! │  │  items, signature │   └─────────────────┘                           │
//! │  └───────────────────┘                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An `InvoiceRecord` is constructed transiently from form input, validated,
//! and - only on success - frozen into an [`crate::compute::InvoiceSnapshot`].
//! The mutable editing session is the form collaborator's concern; this core
//! only ever sees immutable records.
//!
//! Numeric fields deserialize from JSON numbers *or* numeric strings: form
//! inputs arrive as text, and `rust_decimal`'s deserializer coerces both.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fields::Field;

// =============================================================================
// Line Item
// =============================================================================

/// One billable product/service entry on the invoice.
///
/// Structural equality over all five fields drives deduplication: two rows
/// the user entered identically collapse to one occurrence. Equality on
/// the decimal fields is numeric, so `1.0` and `1.00` are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// What is being billed.
    pub description: String,

    /// Price per unit. Must be > 0 for a valid submission.
    #[ts(as = "String")]
    pub unit_price: Decimal,

    /// Units billed. Must be > 0 for a valid submission.
    #[ts(as = "String")]
    pub quantity: Decimal,

    /// Flat discount subtracted from the line, >= 0.
    #[ts(as = "String")]
    pub discount: Decimal,

    /// Tax rate as a percentage (18 = 18%), >= 0.
    #[ts(as = "String")]
    pub tax_rate: Decimal,
}

/// A fresh form row: everything blank except the 18% GST default the
/// form seeds new rows with.
impl Default for LineItem {
    fn default() -> Self {
        LineItem {
            description: String::new(),
            unit_price: Decimal::ZERO,
            quantity: Decimal::ZERO,
            discount: Decimal::ZERO,
            tax_rate: Decimal::new(18, 0),
        }
    }
}

// =============================================================================
// Signature
// =============================================================================

/// Reference to the uploaded signature artifact.
///
/// The core never reads the file; presence of the reference is what the
/// signature section requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SignatureFile {
    /// File name as picked in the form.
    pub file_name: String,

    /// MIME type reported by the picker, if any.
    pub content_type: Option<String>,
}

// =============================================================================
// Reverse Charge
// =============================================================================

/// GST reverse-charge flag. A select on the form, defaulting to "No",
/// so unlike the text fields it always carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ReverseCharge {
    No,
    Yes,
}

impl ReverseCharge {
    /// The form's textual value for this flag.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReverseCharge::No => "No",
            ReverseCharge::Yes => "Yes",
        }
    }
}

impl Default for ReverseCharge {
    fn default() -> Self {
        ReverseCharge::No
    }
}

// =============================================================================
// Invoice Record
// =============================================================================

/// The complete raw form state for one invoice.
///
/// Field names mirror the form's camelCase keys; all block fields are
/// plain text exactly as entered (dates included - the form's date inputs
/// submit text, and no cross-field checks are in scope).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    // Seller block
    pub seller_name: String,
    pub seller_address: String,
    pub seller_city: String,
    pub seller_state: String,
    pub seller_pincode: String,
    #[serde(rename = "sellerPAN")]
    pub seller_pan: String,
    #[serde(rename = "sellerGST")]
    pub seller_gst: String,

    // Billing block
    pub billing_name: String,
    pub billing_address: String,
    pub billing_city: String,
    pub billing_state: String,
    pub billing_pincode: String,
    pub billing_state_code: String,
    pub place_of_supply: String,

    // Shipping block
    pub shipping_name: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_pincode: String,
    pub shipping_state_code: String,

    // Order block
    pub place_of_delivery: String,
    pub order_number: String,
    pub order_date: String,

    // Invoice block
    pub invoice_number: String,
    pub invoice_details: String,
    pub invoice_date: String,
    #[serde(default)]
    pub reverse_charge: ReverseCharge,

    /// Line items as entered, duplicates and all. Deduplication happens
    /// at computation time, never on the raw record.
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// The uploaded signature artifact, if one was picked.
    pub signature: Option<SignatureFile>,
}

impl InvoiceRecord {
    /// Typed accessor for a field's textual value.
    ///
    /// `None` means the field has no value at all (no signature picked);
    /// empty strings come back as `Some("")` and are treated as missing
    /// by the validators.
    pub fn field_text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::SellerName => &self.seller_name,
            Field::SellerAddress => &self.seller_address,
            Field::SellerCity => &self.seller_city,
            Field::SellerState => &self.seller_state,
            Field::SellerPincode => &self.seller_pincode,
            Field::SellerPan => &self.seller_pan,
            Field::SellerGst => &self.seller_gst,
            Field::BillingName => &self.billing_name,
            Field::BillingAddress => &self.billing_address,
            Field::BillingCity => &self.billing_city,
            Field::BillingState => &self.billing_state,
            Field::BillingPincode => &self.billing_pincode,
            Field::BillingStateCode => &self.billing_state_code,
            Field::PlaceOfSupply => &self.place_of_supply,
            Field::ShippingName => &self.shipping_name,
            Field::ShippingAddress => &self.shipping_address,
            Field::ShippingCity => &self.shipping_city,
            Field::ShippingState => &self.shipping_state,
            Field::ShippingPincode => &self.shipping_pincode,
            Field::ShippingStateCode => &self.shipping_state_code,
            Field::PlaceOfDelivery => &self.place_of_delivery,
            Field::OrderNumber => &self.order_number,
            Field::OrderDate => &self.order_date,
            Field::InvoiceNumber => &self.invoice_number,
            Field::InvoiceDetails => &self.invoice_details,
            Field::InvoiceDate => &self.invoice_date,
            Field::ReverseCharge => return Some(self.reverse_charge.as_str()),
            Field::Signature => {
                return self.signature.as_ref().map(|s| s.file_name.as_str())
            }
        };
        Some(value)
    }

    /// Whether a field carries a non-blank value.
    pub fn field_is_present(&self, field: Field) -> bool {
        self.field_text(field)
            .map(str::trim)
            .is_some_and(|v| !v.is_empty())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().expect("test decimal")
    }

    #[test]
    fn test_line_item_default_matches_fresh_form_row() {
        let item = LineItem::default();
        assert!(item.description.is_empty());
        assert_eq!(item.unit_price, Decimal::ZERO);
        assert_eq!(item.tax_rate, d("18"));
    }

    #[test]
    fn test_line_item_structural_equality_is_numeric() {
        let a = LineItem {
            description: "Widget".to_string(),
            unit_price: d("10.0"),
            quantity: d("3"),
            discount: d("5"),
            tax_rate: d("18"),
        };
        let b = LineItem {
            unit_price: d("10.00"),
            ..a.clone()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_field_accessors() {
        let record = InvoiceRecord {
            seller_name: "Acme Traders".to_string(),
            ..InvoiceRecord::default()
        };

        assert_eq!(record.field_text(Field::SellerName), Some("Acme Traders"));
        assert!(record.field_is_present(Field::SellerName));
        assert!(!record.field_is_present(Field::BillingName));
        // reverseCharge always carries a value
        assert_eq!(record.field_text(Field::ReverseCharge), Some("No"));
        assert!(record.field_is_present(Field::ReverseCharge));
        // no signature picked at all
        assert_eq!(record.field_text(Field::Signature), None);
        assert!(!record.field_is_present(Field::Signature));
    }

    #[test]
    fn test_numeric_fields_coerce_from_text() {
        let json = r#"{
            "description": "Widget",
            "unitPrice": "10.50",
            "quantity": 3,
            "discount": "0",
            "taxRate": 18
        }"#;
        let item: LineItem = serde_json::from_str(json).expect("item json");
        assert_eq!(item.unit_price, d("10.50"));
        assert_eq!(item.quantity, d("3"));
    }

    #[test]
    fn test_record_rejects_non_numeric_item_input() {
        let json = r#"{
            "description": "Widget",
            "unitPrice": "abc",
            "quantity": 3,
            "discount": 0,
            "taxRate": 18
        }"#;
        assert!(serde_json::from_str::<LineItem>(json).is_err());
    }
}
