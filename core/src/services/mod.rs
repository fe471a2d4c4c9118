//! Resource services for the two remote APIs.
//!
//! Each service is an `ApiClient` plus a fixed set of endpoint paths. They
//! add no logic beyond choosing the method and formatting the path.

pub mod products;
pub mod users;

pub use products::{ProductService, DEFAULT_PRODUCTS_BASE_URL};
pub use users::{UserService, DEFAULT_USERS_BASE_URL};
