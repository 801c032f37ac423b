//! End-to-end submission scenarios: raw form state in, snapshot or
//! rejection out, exactly as the form collaborator drives the core.

use billform_core::{
    document_plan, submit, InvoiceRecord, LineItem, SubmitError, Section, SignatureFile,
};
use rust_decimal::Decimal;

fn d(s: &str) -> Decimal {
    s.parse().expect("test decimal")
}

fn widget() -> LineItem {
    LineItem {
        description: "Widget".into(),
        unit_price: d("10"),
        quantity: d("3"),
        discount: d("5"),
        tax_rate: d("18"),
    }
}

fn filled_record() -> InvoiceRecord {
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
        items: vec![widget()],
        signature: Some(SignatureFile {
            file_name: "signature.png".into(),
            content_type: Some("image/png".into()),
        }),
    }
}

#[test]
fn successful_submission_yields_a_complete_snapshot() {
    let snapshot = submit(&filled_record()).expect("valid record submits");

    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].amounts.net_amount.to_string(), "25.00");
    assert_eq!(snapshot.items[0].amounts.tax_amount.to_string(), "4.50");
    assert_eq!(snapshot.items[0].amounts.total_amount.to_string(), "29.50");
    assert_eq!(snapshot.totals.total_amount.to_string(), "29.50");
    assert_eq!(snapshot.amount_in_words, "twenty nine Rs. and fifty Paisa");
    assert!(!snapshot.id.is_empty());
    // the record is frozen exactly as submitted
    assert_eq!(snapshot.record.order_number, "OD-1042");
}

#[test]
fn one_empty_mandatory_field_blocks_submission_and_names_it() {
    let mut record = filled_record();
    record.billing_name.clear();

    let err = submit(&record).expect_err("incomplete record must not submit");
    assert_eq!(
        err,
        SubmitError::IncompleteSections(vec![Section::BillingDetails])
    );
    assert_eq!(
        err.messages(),
        vec!["Please fill all required fields in billingDetails.".to_string()]
    );
}

#[test]
fn field_tier_runs_only_after_sections_are_complete() {
    // Negative discount: every section is complete (discount may be zero
    // or more in the coarse pass) but the fine-grained rule rejects it.
    let mut record = filled_record();
    record.items[0].discount = d("-1");

    let err = submit(&record).expect_err("negative discount must not submit");
    match err {
        SubmitError::InvalidFields(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors[0].to_string(),
                "Discount for item 1 cannot be negative."
            );
        }
        other => panic!("expected field-tier rejection, got {other:?}"),
    }
}

#[test]
fn duplicate_items_collapse_to_one_in_the_output() {
    let mut record = filled_record();
    record.items = vec![widget(), widget()];

    let snapshot = submit(&record).expect("duplicates are not an error");
    assert_eq!(snapshot.items.len(), 1);
    // totals reflect the single surviving occurrence
    assert_eq!(snapshot.totals.total_amount.to_string(), "29.50");
    // the raw record keeps both rows; only the computed view collapses
    assert_eq!(snapshot.record.items.len(), 2);
}

#[test]
fn form_state_json_with_text_numerics_submits() {
    // Numeric fields arrive as text from form inputs; the record boundary
    // coerces them before computation.
    let json = serde_json::json!({
        "sellerName": "Acme Traders",
        "sellerAddress": "12 MG Road",
        "sellerCity": "Bengaluru",
        "sellerState": "Karnataka",
        "sellerPincode": "560001",
        "sellerPAN": "ABCDE1234F",
        "sellerGST": "29ABCDE1234F1Z5",
        "billingName": "Ravi Kumar",
        "billingAddress": "44 Park Street",
        "billingCity": "Kolkata",
        "billingState": "West Bengal",
        "billingPincode": "700016",
        "billingStateCode": "19",
        "placeOfSupply": "West Bengal",
        "shippingName": "Ravi Kumar",
        "shippingAddress": "44 Park Street",
        "shippingCity": "Kolkata",
        "shippingState": "West Bengal",
        "shippingPincode": "700016",
        "shippingStateCode": "19",
        "placeOfDelivery": "West Bengal",
        "orderNumber": "OD-1042",
        "orderDate": "2024-04-01",
        "invoiceNumber": "INV-2024-17",
        "invoiceDetails": "April supply",
        "invoiceDate": "2024-04-02",
        "reverseCharge": "No",
        "items": [
            { "description": "Widget", "unitPrice": "10", "quantity": "3",
              "discount": "5", "taxRate": "18" }
        ],
        "signature": { "fileName": "signature.png", "contentType": "image/png" }
    });

    let record: InvoiceRecord = serde_json::from_value(json).expect("form json parses");
    let snapshot = submit(&record).expect("coerced record submits");
    assert_eq!(snapshot.totals.total_net.to_string(), "25.00");
}

#[test]
fn document_plan_reflects_the_snapshot() {
    let snapshot = submit(&filled_record()).expect("valid record submits");
    let plan = document_plan(&snapshot);

    assert_eq!(plan.file_name, "invoice.pdf");
    assert_eq!(plan.rows.len(), snapshot.items.len());
    assert_eq!(plan.totals.total_amount, "29.50");
    assert_eq!(plan.amount_in_words, snapshot.amount_in_words);
}
