//! Command-line driver for the user and product services.
//!
//! Each subcommand performs one call and prints the rendered outcome. With
//! no subcommand, `smoke` runs: user 1 and product 1 are fetched
//! concurrently and the result of each is logged.

mod render;
mod samples;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rest_demo_core::{
    Executor, Outcome, ProductService, UserService, DEFAULT_PRODUCTS_BASE_URL,
    DEFAULT_USERS_BASE_URL,
};
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rest-demo", about = "Call the user and product demo APIs and print the results")]
struct Cli {
    /// Base URL of the user/post API.
    #[arg(long, default_value = DEFAULT_USERS_BASE_URL)]
    users_url: String,
    /// Base URL of the product/catalog API.
    #[arg(long, default_value = DEFAULT_PRODUCTS_BASE_URL)]
    products_url: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch user 1 and product 1 and report whether each service works.
    Smoke,
    /// Operations on the user/post API.
    Users {
        #[command(subcommand)]
        op: UserOp,
    },
    /// Operations on the product/catalog API.
    Products {
        #[command(subcommand)]
        op: ProductOp,
    },
}

#[derive(Subcommand)]
enum UserOp {
    /// List all users.
    All,
    /// Show one user.
    Get {
        #[arg(default_value_t = 1)]
        id: u64,
    },
    /// Create a user from `--data` or a sample payload.
    Create {
        /// JSON payload to send.
        #[arg(long)]
        data: Option<String>,
    },
    /// Replace a user with `--data` or a sample payload.
    Update {
        #[arg(default_value_t = 1)]
        id: u64,
        /// JSON payload to send.
        #[arg(long)]
        data: Option<String>,
    },
    /// Delete a user.
    Delete {
        #[arg(default_value_t = 1)]
        id: u64,
    },
    /// List a user's posts.
    Posts {
        #[arg(default_value_t = 1)]
        id: u64,
    },
}

#[derive(Subcommand)]
enum ProductOp {
    /// List all products.
    All,
    /// Show one product.
    Get {
        #[arg(default_value_t = 1)]
        id: u64,
    },
    /// List product categories.
    Categories,
    /// List the products in one category.
    Category { name: String },
    /// List the products in the electronics category.
    Electronics,
    /// Create a product from `--data` or a sample payload.
    Create {
        /// JSON payload to send.
        #[arg(long)]
        data: Option<String>,
    },
    /// Replace a product with `--data` or a sample payload.
    Update {
        #[arg(default_value_t = 1)]
        id: u64,
        /// JSON payload to send.
        #[arg(long)]
        data: Option<String>,
    },
    /// Delete a product.
    Delete {
        #[arg(default_value_t = 1)]
        id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let executor = Executor::default();
    let users = UserService::new(&cli.users_url, executor.clone());
    let products = ProductService::new(&cli.products_url, executor);

    let ok = match cli.command.unwrap_or(Command::Smoke) {
        Command::Smoke => smoke(&users, &products).await,
        Command::Users { op } => run_user_op(&users, op).await?,
        Command::Products { op } => run_product_op(&products, op).await?,
    };
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Print the rendered outcome and report whether it succeeded.
fn show(outcome: Outcome, on_success: impl FnOnce(&Value) -> String) -> bool {
    println!("{}", render::outcome(&outcome, on_success));
    outcome.is_ok()
}

/// Parse `--data`, or fall back to the sample payload.
fn payload(data: Option<String>, sample: fn() -> Value) -> Result<Value> {
    match data {
        Some(text) => serde_json::from_str(&text).context("--data is not valid JSON"),
        None => Ok(sample()),
    }
}

async fn run_user_op(users: &UserService, op: UserOp) -> Result<bool> {
    let ok = match op {
        UserOp::All => {
            info!("Loading all users");
            show(users.get_all_users().await, render::users)
        }
        UserOp::Get { id } => {
            info!(id, "Loading user");
            show(users.get_user_by_id(id).await, render::user)
        }
        UserOp::Create { data } => {
            let user = payload(data, samples::new_user)?;
            info!("Creating new user");
            show(users.create_user(&user).await, render::user_created)
        }
        UserOp::Update { id, data } => {
            let user = payload(data, samples::user_update)?;
            info!(id, "Updating user");
            show(users.update_user(id, &user).await, render::user_updated)
        }
        UserOp::Delete { id } => {
            info!(id, "Deleting user");
            show(users.delete_user(id).await, |v| render::deleted("User", v))
        }
        UserOp::Posts { id } => {
            info!(id, "Loading user posts");
            show(users.get_user_posts(id).await, render::posts)
        }
    };
    Ok(ok)
}

async fn run_product_op(products: &ProductService, op: ProductOp) -> Result<bool> {
    let ok = match op {
        ProductOp::All => {
            info!("Loading all products");
            show(products.get_all_products().await, render::products)
        }
        ProductOp::Get { id } => {
            info!(id, "Loading product");
            show(products.get_product_by_id(id).await, render::product)
        }
        ProductOp::Categories => {
            info!("Loading categories");
            show(products.get_categories().await, render::categories)
        }
        ProductOp::Category { name } => {
            info!(category = %name, "Loading category");
            let outcome = products.get_products_by_category(&name).await;
            show(outcome, |v| render::products_in_category(&name, v))
        }
        ProductOp::Electronics => {
            info!("Loading electronics");
            let outcome = products.get_products_by_category("electronics").await;
            show(outcome, |v| render::products_in_category("electronics", v))
        }
        ProductOp::Create { data } => {
            let product = payload(data, samples::new_product)?;
            info!("Creating new product");
            show(products.create_product(&product).await, render::product_created)
        }
        ProductOp::Update { id, data } => {
            let product = payload(data, samples::product_update)?;
            info!(id, "Updating product");
            show(products.update_product(id, &product).await, render::product_updated)
        }
        ProductOp::Delete { id } => {
            info!(id, "Deleting product");
            show(products.delete_product(id).await, |v| render::deleted("Product", v))
        }
    };
    Ok(ok)
}

/// Fetch user 1 and product 1 concurrently and log whether each works.
async fn smoke(users: &UserService, products: &ProductService) -> bool {
    info!("Testing services");
    let (user, product) = tokio::join!(users.get_user_by_id(1), products.get_product_by_id(1));

    let user_ok = match &user {
        Ok(user) => {
            info!(name = user["name"].as_str().unwrap_or("-"), "User service works");
            true
        }
        Err(e) => {
            error!(error = %e, "User service test failed");
            false
        }
    };
    let product_ok = match &product {
        Ok(product) => {
            info!(title = product["title"].as_str().unwrap_or("-"), "Product service works");
            true
        }
        Err(e) => {
            error!(error = %e, "Product service test failed");
            false
        }
    };
    user_ok && product_ok
}
