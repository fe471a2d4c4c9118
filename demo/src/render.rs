//! Text rendering of outcomes.
//!
//! Every renderer takes the payload as returned by the remote API and never
//! fails: a payload of the wrong shape is shown as JSON, and a missing field
//! is shown as `-`. Fields are never filled in from the request payload.

use rest_demo_core::Outcome;
use serde_json::Value;

/// Products listed before the summary line.
const PRODUCT_PREVIEW: usize = 5;
/// Characters of a product description shown in the detail view.
const DESCRIPTION_PREVIEW: usize = 100;

/// Render `outcome` with `on_success`, or as an error line.
pub fn outcome(outcome: &Outcome, on_success: impl FnOnce(&Value) -> String) -> String {
    match outcome {
        Ok(value) => on_success(value),
        Err(err) => format!("Error: {err}"),
    }
}

/// String fields verbatim, other values as JSON, absent or null as `-`.
fn field(value: &Value, key: &str) -> String {
    match value.get(key) {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// `header` followed by one line per item, or the raw JSON when `value` is
/// not an array.
fn list(value: &Value, noun: &str, line: impl Fn(&Value) -> String) -> String {
    let Some(items) = value.as_array() else {
        return pretty(value);
    };
    let mut out = format!("Loaded {} {noun}!\n", items.len());
    for item in items {
        out.push('\n');
        out.push_str(&line(item));
    }
    out
}

pub fn users(value: &Value) -> String {
    list(value, "users", |u| format!("{} ({})", field(u, "name"), field(u, "email")))
}

pub fn user(value: &Value) -> String {
    format!(
        "User loaded!\n\nName: {}\nEmail: {}\nPhone: {}\nWebsite: {}",
        field(value, "name"),
        field(value, "email"),
        field(value, "phone"),
        field(value, "website"),
    )
}

pub fn user_created(value: &Value) -> String {
    format!(
        "User created! (fake API - not really saved)\n\nID: {}\nName: {}\nEmail: {}",
        field(value, "id"),
        field(value, "name"),
        field(value, "email"),
    )
}

pub fn user_updated(value: &Value) -> String {
    format!(
        "User updated! (fake API)\n\nID: {}\nName: {}\nEmail: {}",
        field(value, "id"),
        field(value, "name"),
        field(value, "email"),
    )
}

pub fn posts(value: &Value) -> String {
    list(value, "posts", |p| field(p, "title"))
}

fn product_line(product: &Value) -> String {
    format!("{} - ${}", field(product, "title"), field(product, "price"))
}

/// The first few products, then a count of the rest.
pub fn products(value: &Value) -> String {
    let Some(items) = value.as_array() else {
        return pretty(value);
    };
    let mut out = format!("Loaded {} products!\n", items.len());
    for item in items.iter().take(PRODUCT_PREVIEW) {
        out.push('\n');
        out.push_str(&product_line(item));
    }
    if items.len() > PRODUCT_PREVIEW {
        out.push_str(&format!("\n... and {} more products", items.len() - PRODUCT_PREVIEW));
    }
    out
}

pub fn products_in_category(category: &str, value: &Value) -> String {
    list(value, category, product_line)
}

pub fn product(value: &Value) -> String {
    let description: String = field(value, "description").chars().take(DESCRIPTION_PREVIEW).collect();
    format!(
        "Product loaded!\n\nTitle: {}\nPrice: ${}\nCategory: {}\nDescription: {description}...",
        field(value, "title"),
        field(value, "price"),
        field(value, "category"),
    )
}

pub fn categories(value: &Value) -> String {
    list(value, "categories", |c| match c {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

pub fn product_created(value: &Value) -> String {
    format!(
        "Product created! (fake API)\n\nID: {}\nTitle: {}\nPrice: ${}",
        field(value, "id"),
        field(value, "title"),
        field(value, "price"),
    )
}

pub fn product_updated(value: &Value) -> String {
    format!(
        "Product updated! (fake API)\n\nID: {}\nTitle: {}\nPrice: ${}",
        field(value, "id"),
        field(value, "title"),
        field(value, "price"),
    )
}

/// `noun` deleted, followed by whatever the API answered.
pub fn deleted(noun: &str, value: &Value) -> String {
    format!("{noun} deleted! (fake API)\n\n{value}")
}
