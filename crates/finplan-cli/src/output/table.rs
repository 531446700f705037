use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::cell;

/// Format output as tables using the tabled crate.
pub fn print_table(value: &Value) {
    let Value::Object(map) = value else {
        if let Value::Array(rows) = value {
            print_rows(rows);
        } else {
            println!("{}", value);
        }
        return;
    };

    match map.get("result") {
        Some(Value::Object(result)) => print_fields(result),
        _ => print_fields(map),
    }

    if let Some(Value::Array(rows)) = map.get("results") {
        println!();
        print_rows(rows);
    }

    if let Some(Value::Array(warnings)) = map.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = map.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_fields(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.clone(), cell(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_rows(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        if rows.is_empty() {
            println!("(empty)");
        }
        for item in rows {
            println!("{}", cell(item));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(cell).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    println!("{}", Table::from(builder));
}
