//! Payloads sent by `create` and `update` when `--data` is not given.

use serde_json::{json, Value};

pub fn new_user() -> Value {
    json!({
        "name": "Trash Test User",
        "email": "trash@test.com",
        "phone": "123-456-7890",
        "website": "trashtest.com"
    })
}

pub fn user_update() -> Value {
    json!({
        "name": "Trash Updated User",
        "email": "updated@trash.com"
    })
}

pub fn new_product() -> Value {
    json!({
        "title": "Trash Gadget",
        "price": 9.99,
        "description": "A small trash gadget",
        "category": "electronics",
        "image": "https://placehold.it/150x150"
    })
}

pub fn product_update() -> Value {
    json!({
        "title": "Updated Trash Gadget",
        "price": 12.99
    })
}
