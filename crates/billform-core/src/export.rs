//! # Export Boundary
//!
//! Assembles the plain-data document plan the export collaborator turns
//! into a rendered artifact (PDF). No markup, no layout math, no bytes -
//! just ordered labelled values mirroring the invoice layout:
//! title, five field blocks, the item table, a totals row, the
//! amount-in-words line and the authorised-signatory block.
//!
//! The plan carries the fixed default artifact name (`invoice.pdf`);
//! where the renderer writes it is its own business.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::compute::InvoiceSnapshot;
use crate::types::InvoiceRecord;

/// Default file name for the rendered artifact.
pub const EXPORT_FILE_NAME: &str = "invoice.pdf";

/// Document title.
pub const EXPORT_TITLE: &str = "Tax Invoice";

/// Item table column headers, in layout order.
pub const ITEM_COLUMNS: [&str; 8] = [
    "Description",
    "Unit Price",
    "Quantity",
    "Discount",
    "Tax Rate",
    "Net Amount",
    "Tax Amount",
    "Total Amount",
];

// =============================================================================
// Plan Types
// =============================================================================

/// One labelled value in a field block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldPair {
    pub label: String,
    pub value: String,
}

impl FieldPair {
    fn new(label: &str, value: impl Into<String>) -> Self {
        FieldPair {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// A headed block of labelled values (seller, billing, shipping, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FieldBlock {
    pub heading: String,
    pub fields: Vec<FieldPair>,
}

/// One row of the item table; cells align with [`ITEM_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub cells: Vec<String>,
}

/// The totals row under the item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TotalsRow {
    pub net_amount: String,
    pub tax_amount: String,
    pub total_amount: String,
}

/// Everything the document renderer needs, in layout order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPlan {
    pub title: String,
    pub file_name: String,
    pub blocks: Vec<FieldBlock>,
    pub columns: Vec<String>,
    pub rows: Vec<ItemRow>,
    pub totals: TotalsRow,
    pub amount_in_words: String,
    pub signatory: FieldBlock,
}

// =============================================================================
// Plan Assembly
// =============================================================================

fn address_line(address: &str, city: &str, state: &str, pincode: &str) -> String {
    format!("{address}, {city}, {state}, {pincode}")
}

fn seller_block(record: &InvoiceRecord) -> FieldBlock {
    FieldBlock {
        heading: "Seller Details".to_string(),
        fields: vec![
            FieldPair::new("Name", record.seller_name.clone()),
            FieldPair::new(
                "Address",
                address_line(
                    &record.seller_address,
                    &record.seller_city,
                    &record.seller_state,
                    &record.seller_pincode,
                ),
            ),
            FieldPair::new("PAN", record.seller_pan.clone()),
            FieldPair::new("GST", record.seller_gst.clone()),
        ],
    }
}

fn billing_block(record: &InvoiceRecord) -> FieldBlock {
    FieldBlock {
        heading: "Billing Details".to_string(),
        fields: vec![
            FieldPair::new("Name", record.billing_name.clone()),
            FieldPair::new(
                "Address",
                address_line(
                    &record.billing_address,
                    &record.billing_city,
                    &record.billing_state,
                    &record.billing_pincode,
                ),
            ),
            FieldPair::new("State Code", record.billing_state_code.clone()),
            FieldPair::new("Place of Supply", record.place_of_supply.clone()),
        ],
    }
}

fn shipping_block(record: &InvoiceRecord) -> FieldBlock {
    FieldBlock {
        heading: "Shipping Details".to_string(),
        fields: vec![
            FieldPair::new("Name", record.shipping_name.clone()),
            FieldPair::new(
                "Address",
                address_line(
                    &record.shipping_address,
                    &record.shipping_city,
                    &record.shipping_state,
                    &record.shipping_pincode,
                ),
            ),
            FieldPair::new("State Code", record.shipping_state_code.clone()),
        ],
    }
}

fn order_block(record: &InvoiceRecord) -> FieldBlock {
    FieldBlock {
        heading: "Order Details".to_string(),
        fields: vec![
            FieldPair::new("Order Number", record.order_number.clone()),
            FieldPair::new("Order Date", record.order_date.clone()),
            FieldPair::new("Place of Delivery", record.place_of_delivery.clone()),
        ],
    }
}

fn invoice_block(record: &InvoiceRecord) -> FieldBlock {
    FieldBlock {
        heading: "Invoice Details".to_string(),
        fields: vec![
            FieldPair::new("Invoice Number", record.invoice_number.clone()),
            FieldPair::new("Invoice Details", record.invoice_details.clone()),
            FieldPair::new("Invoice Date", record.invoice_date.clone()),
            FieldPair::new("Reverse Charge", record.reverse_charge.as_str()),
        ],
    }
}

/// Builds the document plan for a validated, computed snapshot.
pub fn document_plan(snapshot: &InvoiceSnapshot) -> DocumentPlan {
    let record = &snapshot.record;

    let rows = snapshot
        .items
        .iter()
        .map(|computed| ItemRow {
            cells: vec![
                computed.item.description.clone(),
                computed.item.unit_price.to_string(),
                computed.item.quantity.to_string(),
                computed.item.discount.to_string(),
                computed.item.tax_rate.to_string(),
                computed.amounts.net_amount.to_string(),
                computed.amounts.tax_amount.to_string(),
                computed.amounts.total_amount.to_string(),
            ],
        })
        .collect();

    DocumentPlan {
        title: EXPORT_TITLE.to_string(),
        file_name: EXPORT_FILE_NAME.to_string(),
        blocks: vec![
            seller_block(record),
            billing_block(record),
            shipping_block(record),
            order_block(record),
            invoice_block(record),
        ],
        columns: ITEM_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
        totals: TotalsRow {
            net_amount: snapshot.totals.total_net.to_string(),
            tax_amount: snapshot.totals.total_tax.to_string(),
            total_amount: snapshot.totals.total_amount.to_string(),
        },
        amount_in_words: snapshot.amount_in_words.clone(),
        signatory: FieldBlock {
            heading: "Authorised Signatory".to_string(),
            fields: vec![FieldPair::new(
                "For",
                record.seller_name.clone(),
            )],
        },
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::{aggregate, compute_line_item, ComputedItem, InvoiceTotals};
    use crate::types::LineItem;
    use crate::words;
    use chrono::Utc;

    fn snapshot() -> InvoiceSnapshot {
        let record = InvoiceRecord {
            seller_name: "Acme Traders".into(),
            seller_address: "12 MG Road".into(),
            seller_city: "Bengaluru".into(),
            seller_state: "Karnataka".into(),
            seller_pincode: "560001".into(),
            order_number: "OD-1042".into(),
            ..InvoiceRecord::default()
        };
        let item = LineItem {
            description: "Widget".into(),
            unit_price: "10".parse().unwrap(),
            quantity: "3".parse().unwrap(),
            discount: "5".parse().unwrap(),
            tax_rate: "18".parse().unwrap(),
        };
        let amounts = compute_line_item(&item);
        let totals: InvoiceTotals = aggregate([&amounts]);
        InvoiceSnapshot {
            id: "test".into(),
            record,
            items: vec![ComputedItem { item, amounts }],
            totals,
            amount_in_words: words::amount_to_words(totals.total_amount.value()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_plan_block_order_matches_layout() {
        let plan = document_plan(&snapshot());
        let headings: Vec<&str> = plan.blocks.iter().map(|b| b.heading.as_str()).collect();
        assert_eq!(
            headings,
            vec![
                "Seller Details",
                "Billing Details",
                "Shipping Details",
                "Order Details",
                "Invoice Details",
            ]
        );
        assert_eq!(plan.title, "Tax Invoice");
        assert_eq!(plan.file_name, "invoice.pdf");
    }

    #[test]
    fn test_seller_block_flattens_address() {
        let plan = document_plan(&snapshot());
        let address = &plan.blocks[0].fields[1];
        assert_eq!(address.label, "Address");
        assert_eq!(address.value, "12 MG Road, Bengaluru, Karnataka, 560001");
    }

    #[test]
    fn test_item_rows_align_with_columns() {
        let plan = document_plan(&snapshot());
        assert_eq!(plan.columns.len(), 8);
        assert_eq!(plan.rows.len(), 1);
        assert_eq!(plan.rows[0].cells.len(), plan.columns.len());
        // computed columns carry 2-decimal renderings
        assert_eq!(plan.rows[0].cells[5], "25.00");
        assert_eq!(plan.rows[0].cells[6], "4.50");
        assert_eq!(plan.rows[0].cells[7], "29.50");
    }

    #[test]
    fn test_totals_row_and_words() {
        let plan = document_plan(&snapshot());
        assert_eq!(plan.totals.net_amount, "25.00");
        assert_eq!(plan.totals.tax_amount, "4.50");
        assert_eq!(plan.totals.total_amount, "29.50");
        assert_eq!(
            plan.amount_in_words,
            "twenty nine Rs. and fifty Paisa"
        );
    }

    #[test]
    fn test_signatory_names_the_seller() {
        let plan = document_plan(&snapshot());
        assert_eq!(plan.signatory.heading, "Authorised Signatory");
        assert_eq!(plan.signatory.fields[0].value, "Acme Traders");
    }
}
