//! End-to-end scenarios for `sales_core::aggregate`.

use std::collections::HashMap;

use sales_core::{aggregate, DataProcessingError, ErrorKind, Numeric, ProductKey};
use serde_json::{json, Value};

fn sample_sales_data() -> Vec<Value> {
    vec![
        json!({"product": "A", "quantity": 2, "price": 10}),
        json!({"product": "B", "quantity": 3, "price": 15}),
        json!({"product": "A", "quantity": 1, "price": 10}),
    ]
}

#[test]
fn aggregates_sample_sales() {
    let result = aggregate(&sample_sales_data()).unwrap();
    assert_eq!(result.len(), 2);

    let product_a = result
        .iter()
        .find(|s| s.product == ProductKey::from("A"))
        .unwrap();
    assert_eq!(product_a.total, Numeric::Int(30));
    assert_eq!(product_a.quantity, Numeric::Int(3));
    assert_eq!(product_a.average_price, 10.0);

    let product_b = result
        .iter()
        .find(|s| s.product == ProductKey::from("B"))
        .unwrap();
    assert_eq!(product_b.total, Numeric::Int(45));
    assert_eq!(product_b.quantity, Numeric::Int(3));
    assert_eq!(product_b.average_price, 15.0);
}

#[test]
fn serialized_columns_are_in_report_order() {
    let result = aggregate(&sample_sales_data()).unwrap();
    let row = serde_json::to_value(&result[0]).unwrap();
    let keys: Vec<&str> = row.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["product", "total", "quantity", "average_price"]);
}

#[test]
fn one_summary_per_distinct_product() {
    let cases: Vec<(Vec<Value>, Vec<&str>)> = vec![
        (
            vec![json!({"product": "A", "quantity": 1, "price": 10})],
            vec!["A"],
        ),
        (
            vec![
                json!({"product": "A", "quantity": 1, "price": 10}),
                json!({"product": "B", "quantity": 2, "price": 20}),
            ],
            vec!["A", "B"],
        ),
    ];

    for (data, expected_products) in cases {
        let products: Vec<String> = aggregate(&data)
            .unwrap()
            .iter()
            .map(|s| s.product.to_string())
            .collect();
        assert_eq!(products, expected_products);
    }
}

#[test]
fn sums_match_inputs_per_product() {
    let records: Vec<Value> = (0..40)
        .map(|i| {
            json!({
                "product": format!("P{}", i % 7),
                "quantity": i % 5,
                "price": (i * 3) % 11,
            })
        })
        .collect();

    let mut expected: HashMap<String, (i64, i64)> = HashMap::new();
    for i in 0..40i64 {
        let entry = expected.entry(format!("P{}", i % 7)).or_default();
        entry.0 += (i % 5) * ((i * 3) % 11);
        entry.1 += i % 5;
    }

    let result = aggregate(&records).unwrap();
    assert_eq!(result.len(), expected.len());

    for summary in &result {
        let (total, quantity) = expected[&summary.product.to_string()];
        assert_eq!(summary.total, Numeric::Int(total));
        assert_eq!(summary.quantity, Numeric::Int(quantity));
        if quantity == 0 {
            assert_eq!(summary.average_price, 0.0);
        } else {
            assert_eq!(summary.average_price, total as f64 / quantity as f64);
        }
    }
}

#[test]
fn empty_input() {
    let err = aggregate(&[]).unwrap_err();
    assert_eq!(err, DataProcessingError::EmptyInput);
    assert!(err.to_string().contains("Input data is empty"));
}

#[test]
fn missing_column() {
    let invalid_data = vec![json!({"product": "A", "quantity": 1})];
    let err = aggregate(&invalid_data).unwrap_err();
    assert_eq!(err, DataProcessingError::MissingColumn(vec!["price".to_string()]));
    assert!(err.to_string().contains("Input data must contain columns"));
}

#[test]
fn non_numeric_data() {
    let invalid_data = vec![json!({"product": "A", "quantity": "invalid", "price": 10})];
    let err = aggregate(&invalid_data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NonNumericValue);
    assert!(err.to_string().contains("Quantity and price must be numeric"));
}

#[test]
fn negative_values() {
    let invalid_data = vec![json!({"product": "A", "quantity": -1, "price": 10})];
    let err = aggregate(&invalid_data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NegativeValue);
    assert!(err.to_string().contains("Quantity and price cannot be negative"));
}

#[test]
fn division_by_zero() {
    let data = vec![json!({"product": "A", "quantity": 0, "price": 10})];
    let result = aggregate(&data).unwrap();
    assert_eq!(result[0].average_price, 0.0);
}

#[test]
fn heterogeneous_records() {
    let data = vec![
        json!({"product": "A", "quantity": 1, "price": 10}),
        json!(["A", 1, 10]),
    ];
    let err = aggregate(&data).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedFailure);
    assert!(err.to_string().starts_with("An unexpected error occurred"));
}
