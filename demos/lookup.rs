//! Example loyalty client.
//!
//! Reads the store's POS configuration and looks up the loyalty account on an
//! order, printing each normalized envelope.
//!
//! Run with:
//! ```bash
//! cargo run --example lookup
//! ```
//!
//! Environment variables (a `.env` file works too):
//! - BRINK_BASE_URL: Loyalty API base URL
//! - BRINK_API_KEY: Key sent in the APIKey header
//! - BRINK_STORE_ID / BRINK_ORDER_ID: Identifiers used in the request paths

use brink_loyalty::types::{EmployeeRef, LookupRequest, LoyaltyCustomer, OrderRef};
use brink_loyalty::Envelope;

fn print_envelope(label: &str, envelope: &Envelope) -> anyhow::Result<()> {
    println!("{} -> HTTP {}", label, envelope.code);
    if let Some(json) = envelope.body.as_json() {
        println!("{}", serde_json::to_string_pretty(json)?);
    } else if let Some(text) = envelope.body.as_raw() {
        println!("{}", text);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let base_url = std::env::var("BRINK_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string());
    let api_key = std::env::var("BRINK_API_KEY").ok();
    let store_id = std::env::var("BRINK_STORE_ID").unwrap_or_else(|_| "STORE123".to_string());
    let order_id = std::env::var("BRINK_ORDER_ID").unwrap_or_else(|_| "ORDER456".to_string());

    if api_key.is_none() {
        println!("No BRINK_API_KEY set, requests will be sent without an APIKey header");
    }

    brink_loyalty::configure(|config| {
        config.base_url = Some(base_url.clone());
        config.api_key = api_key.clone();
    });
    let client = brink_loyalty::client()?;

    println!("Loyalty API: {}", base_url);
    println!();

    let config = client.pos_configurations(&store_id).await?;
    print_envelope("POS configurations", &config)?;

    let body = LookupRequest {
        email_address: Some("user@example.com".to_string()),
        phone_number: None,
        order: OrderRef::new(123456),
        employee: EmployeeRef { id: 1001 },
    };
    let lookup = client.lookup(&store_id, &order_id, &body).await?;
    print_envelope("Lookup", &lookup)?;

    if lookup.is_success() {
        if let Ok(customer) = lookup.parse_body::<LoyaltyCustomer>() {
            println!(
                "\nCustomer {} has {} points",
                customer.name.as_deref().unwrap_or(&customer.id),
                customer.points.unwrap_or_default()
            );
        }
    }

    Ok(())
}
