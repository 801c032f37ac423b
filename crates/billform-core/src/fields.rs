//! # Form Fields and Sections
//!
//! The fixed field-to-section table behind the two-tier validator.
//!
//! The form addresses its inputs by camelCase key names ("sellerName",
//! "placeOfSupply"). Instead of dynamic name lookup, every field is an
//! enum variant and every section carries a static slice of its required
//! fields, so a missing mapping is a compile error rather than a silent
//! validation hole.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Section            Required fields                                     │
//! │  ─────────────────  ──────────────────────────────────────────────────  │
//! │  sellerDetails      sellerName … sellerGST                  (7 fields)  │
//! │  billingDetails     billingName … placeOfSupply             (7 fields)  │
//! │  shippingDetails    shippingName … shippingStateCode        (6 fields)  │
//! │  orderDetails       placeOfDelivery, orderNumber, orderDate (3 fields)  │
//! │  invoiceDetails     invoiceNumber … reverseCharge           (4 fields)  │
//! │  items              per-item columns (checked in validation)            │
//! │  signature          signature                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Field
// =============================================================================

/// A single addressable form field.
///
/// `name()` returns the form's camelCase key, which is also the exact
/// token used in "<fieldName> is required." messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    SellerName,
    SellerAddress,
    SellerCity,
    SellerState,
    SellerPincode,
    SellerPan,
    SellerGst,
    BillingName,
    BillingAddress,
    BillingCity,
    BillingState,
    BillingPincode,
    BillingStateCode,
    PlaceOfSupply,
    ShippingName,
    ShippingAddress,
    ShippingCity,
    ShippingState,
    ShippingPincode,
    ShippingStateCode,
    PlaceOfDelivery,
    OrderNumber,
    OrderDate,
    InvoiceNumber,
    InvoiceDetails,
    InvoiceDate,
    ReverseCharge,
    Signature,
}

impl Field {
    /// Every field whose absence blocks submission, in the order the
    /// fine-grained validator reports them.
    ///
    /// `reverseCharge` is deliberately absent: it is a Yes/No select that
    /// always carries a value, so it can never be missing.
    pub const MANDATORY: [Field; 27] = [
        Field::SellerName,
        Field::SellerAddress,
        Field::SellerCity,
        Field::SellerState,
        Field::SellerPincode,
        Field::SellerPan,
        Field::SellerGst,
        Field::PlaceOfSupply,
        Field::BillingName,
        Field::BillingAddress,
        Field::BillingCity,
        Field::BillingState,
        Field::BillingPincode,
        Field::BillingStateCode,
        Field::ShippingName,
        Field::ShippingAddress,
        Field::ShippingCity,
        Field::ShippingState,
        Field::ShippingPincode,
        Field::ShippingStateCode,
        Field::PlaceOfDelivery,
        Field::OrderNumber,
        Field::OrderDate,
        Field::InvoiceNumber,
        Field::InvoiceDetails,
        Field::InvoiceDate,
        Field::Signature,
    ];

    /// The form's key for this field.
    pub const fn name(self) -> &'static str {
        match self {
            Field::SellerName => "sellerName",
            Field::SellerAddress => "sellerAddress",
            Field::SellerCity => "sellerCity",
            Field::SellerState => "sellerState",
            Field::SellerPincode => "sellerPincode",
            Field::SellerPan => "sellerPAN",
            Field::SellerGst => "sellerGST",
            Field::BillingName => "billingName",
            Field::BillingAddress => "billingAddress",
            Field::BillingCity => "billingCity",
            Field::BillingState => "billingState",
            Field::BillingPincode => "billingPincode",
            Field::BillingStateCode => "billingStateCode",
            Field::PlaceOfSupply => "placeOfSupply",
            Field::ShippingName => "shippingName",
            Field::ShippingAddress => "shippingAddress",
            Field::ShippingCity => "shippingCity",
            Field::ShippingState => "shippingState",
            Field::ShippingPincode => "shippingPincode",
            Field::ShippingStateCode => "shippingStateCode",
            Field::PlaceOfDelivery => "placeOfDelivery",
            Field::OrderNumber => "orderNumber",
            Field::OrderDate => "orderDate",
            Field::InvoiceNumber => "invoiceNumber",
            Field::InvoiceDetails => "invoiceDetails",
            Field::InvoiceDate => "invoiceDate",
            Field::ReverseCharge => "reverseCharge",
            Field::Signature => "signature",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Section
// =============================================================================

/// A named form section for the coarse completeness pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    SellerDetails,
    BillingDetails,
    ShippingDetails,
    OrderDetails,
    InvoiceDetails,
    Items,
    Signature,
}

impl Section {
    /// All sections, in the order the completeness pass checks them.
    pub const ALL: [Section; 7] = [
        Section::SellerDetails,
        Section::BillingDetails,
        Section::ShippingDetails,
        Section::OrderDetails,
        Section::InvoiceDetails,
        Section::Items,
        Section::Signature,
    ];

    /// The section's display name, as surfaced in per-section messages.
    pub const fn name(self) -> &'static str {
        match self {
            Section::SellerDetails => "sellerDetails",
            Section::BillingDetails => "billingDetails",
            Section::ShippingDetails => "shippingDetails",
            Section::OrderDetails => "orderDetails",
            Section::InvoiceDetails => "invoiceDetails",
            Section::Items => "items",
            Section::Signature => "signature",
        }
    }

    /// Record fields this section requires.
    ///
    /// `Items` returns an empty slice: its completeness is defined per
    /// line item (description, unit price, quantity), handled by
    /// [`crate::validation::section_is_complete`].
    pub const fn required_fields(self) -> &'static [Field] {
        match self {
            Section::SellerDetails => &[
                Field::SellerName,
                Field::SellerAddress,
                Field::SellerCity,
                Field::SellerState,
                Field::SellerPincode,
                Field::SellerPan,
                Field::SellerGst,
            ],
            Section::BillingDetails => &[
                Field::BillingName,
                Field::BillingAddress,
                Field::BillingCity,
                Field::BillingState,
                Field::BillingPincode,
                Field::BillingStateCode,
                Field::PlaceOfSupply,
            ],
            Section::ShippingDetails => &[
                Field::ShippingName,
                Field::ShippingAddress,
                Field::ShippingCity,
                Field::ShippingState,
                Field::ShippingPincode,
                Field::ShippingStateCode,
            ],
            Section::OrderDetails => &[
                Field::PlaceOfDelivery,
                Field::OrderNumber,
                Field::OrderDate,
            ],
            Section::InvoiceDetails => &[
                Field::InvoiceNumber,
                Field::InvoiceDetails,
                Field::InvoiceDate,
                Field::ReverseCharge,
            ],
            Section::Items => &[],
            Section::Signature => &[Field::Signature],
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
