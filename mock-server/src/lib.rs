use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const USER_COUNT: u64 = 10;
pub const POSTS_PER_USER: u64 = 10;
pub const CATEGORIES: [&str; 4] = ["electronics", "jewelery", "men's clothing", "women's clothing"];

const USER_NAMES: [&str; 10] = [
    "Leanne Graham",
    "Ervin Howell",
    "Clementine Bauch",
    "Patricia Lebsack",
    "Chelsey Dietrich",
    "Mrs. Dennis Schulist",
    "Kurtis Weissnat",
    "Nicholas Runolfsdottir V",
    "Glenna Reichert",
    "Clementina DuBuque",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

/// Read-only fixtures. Writes are echoed back but never stored, the same way
/// the public services behave.
#[derive(Debug)]
pub struct Fixtures {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub products: Vec<Product>,
}

impl Fixtures {
    pub fn new() -> Self {
        let users = USER_NAMES
            .into_iter()
            .zip(1..)
            .map(|(name, id)| {
                let username = name.split_whitespace().next().unwrap_or(name).trim_end_matches('.');
                User {
                    id,
                    name: name.to_string(),
                    username: username.to_string(),
                    email: format!("{}@example.com", username.to_lowercase()),
                    phone: format!("1-770-736-80{id:02}"),
                    website: format!("{}.org", username.to_lowercase()),
                }
            })
            .collect();

        let posts = (1..=USER_COUNT)
            .flat_map(|user_id| {
                (1..=POSTS_PER_USER).map(move |n| {
                    let id = (user_id - 1) * POSTS_PER_USER + n;
                    Post {
                        user_id,
                        id,
                        title: format!("post {n} by user {user_id}"),
                        body: format!("body of post {id}"),
                    }
                })
            })
            .collect();

        // Four categories of five products each, ids 1..=20.
        let products = CATEGORIES
            .iter()
            .enumerate()
            .flat_map(|(c, category)| {
                (1..=5u64).map(move |n| {
                    let id = c as u64 * 5 + n;
                    Product {
                        id,
                        title: format!("{category} item {n}"),
                        price: 9.99 + id as f64,
                        description: format!(
                            "Item {n} from the {category} range. A longer description so that \
                             clients have something to truncate when they render a summary."
                        ),
                        category: category.to_string(),
                        image: format!("https://example.com/img/{id}.jpg"),
                    }
                })
            })
            .collect();

        Self { users, posts, products }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new()
    }
}

pub type Db = Arc<Fixtures>;

type ApiResult = Result<Json<Value>, (StatusCode, &'static str)>;

const NOT_FOUND: (StatusCode, &str) = (StatusCode::NOT_FOUND, "Not Found");

pub fn app() -> Router {
    let db: Db = Arc::new(Fixtures::new());
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/users/{id}/posts", get(list_user_posts))
        .route("/products", get(list_products).post(create_product))
        .route("/products/categories", get(list_categories))
        .route("/products/category/{category}", get(list_products_in_category))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Echo `payload` with `id` set, the way both public APIs answer writes.
/// A payload that is not an object is replaced by `{"id": id}`.
fn with_id(payload: Value, id: u64) -> Value {
    match payload {
        Value::Object(mut map) => {
            map.insert("id".to_string(), json!(id));
            Value::Object(map)
        }
        _ => json!({ "id": id }),
    }
}

fn to_json<T: Serialize>(value: &T) -> Json<Value> {
    Json(serde_json::to_value(value).unwrap_or(Value::Null))
}

// --- users ---

async fn list_users(State(db): State<Db>) -> Json<Value> {
    to_json(&db.users)
}

async fn get_user(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult {
    db.users.iter().find(|u| u.id == id).map(to_json).ok_or(NOT_FOUND)
}

async fn create_user(State(db): State<Db>, Json(input): Json<Value>) -> (StatusCode, Json<Value>) {
    let id = db.users.len() as u64 + 1;
    (StatusCode::CREATED, Json(with_id(input, id)))
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<Value>,
) -> ApiResult {
    if !db.users.iter().any(|u| u.id == id) {
        return Err(NOT_FOUND);
    }
    Ok(Json(with_id(input, id)))
}

/// The user API answers a delete with an empty object.
async fn delete_user(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult {
    if !db.users.iter().any(|u| u.id == id) {
        return Err(NOT_FOUND);
    }
    Ok(Json(json!({})))
}

async fn list_user_posts(State(db): State<Db>, Path(id): Path<u64>) -> Json<Value> {
    let posts: Vec<&Post> = db.posts.iter().filter(|p| p.user_id == id).collect();
    to_json(&posts)
}

// --- products ---

async fn list_products(State(db): State<Db>) -> Json<Value> {
    to_json(&db.products)
}

async fn list_categories() -> Json<Value> {
    to_json(&CATEGORIES)
}

async fn list_products_in_category(
    State(db): State<Db>,
    Path(category): Path<String>,
) -> Json<Value> {
    let products: Vec<&Product> = db.products.iter().filter(|p| p.category == category).collect();
    to_json(&products)
}

async fn get_product(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult {
    db.products.iter().find(|p| p.id == id).map(to_json).ok_or(NOT_FOUND)
}

async fn create_product(
    State(db): State<Db>,
    Json(input): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let id = db.products.len() as u64 + 1;
    (StatusCode::CREATED, Json(with_id(input, id)))
}

async fn update_product(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<Value>,
) -> ApiResult {
    if !db.products.iter().any(|p| p.id == id) {
        return Err(NOT_FOUND);
    }
    Ok(Json(with_id(input, id)))
}

/// The product API answers a delete with the record that was removed.
async fn delete_product(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult {
    get_product(State(db), Path(id)).await
}
