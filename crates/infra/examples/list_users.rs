//! Example: Listing the users of a user pool
//!
//! Reads the pool credentials with the standard configuration loader
//! (`AUTHING_USER_POOL_ID` / `AUTHING_SECRET`, or an `authing.json` /
//! `authing.toml` file) and prints the first page of users.
//!
//! ```bash
//! export AUTHING_USER_POOL_ID=...
//! export AUTHING_SECRET=...
//! RUST_LOG=authing_infra=debug cargo run -p authing-infra --example list_users
//! ```

use authing_domain::{QueryListRequest, SortBy};
use authing_infra::{config, ManagementClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load()?;
    println!("User pool: {}", config.user_pool_id);

    let client = ManagementClient::connect(config).await?;

    let page = client.get_user_list(QueryListRequest::new(1, 10, SortBy::CreatedAtAsc)).await?;
    println!("{} users in total, showing {}", page.total_count, page.list.len());
    for user in &page.list {
        let name = user.username.as_deref().or(user.email.as_deref()).unwrap_or("-");
        println!("  {}  {}", user.id, name);
    }

    Ok(())
}
