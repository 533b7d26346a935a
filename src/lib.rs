//! # brink-loyalty
//!
//! A thin async client for the Brink generic loyalty REST API.
//!
//! Each method on [`LoyaltyClient`] maps one-to-one onto a remote endpoint. Request
//! bodies are serialized to JSON, the `APIKey` header is attached, and every
//! response is normalized into the same [`Envelope`] shape:
//! `{code, body, headers}`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use brink_loyalty::{Configuration, LoyaltyClient};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Configuration::new("https://api.example.com", "TEST_API_KEY");
//! let client = LoyaltyClient::new(&config)?;
//!
//! let response = client
//!     .lookup("STORE123", "ORDER456", &json!({"emailAddress": "user@example.com"}))
//!     .await?;
//!
//! println!("{} {}", response.code, response.body["points"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Process-wide configuration
//!
//! Applications that set credentials once at startup can use the global slot:
//!
//! ```rust,no_run
//! # async fn example() -> brink_loyalty::Result<()> {
//! brink_loyalty::configure(|config| {
//!     config.base_url = Some("https://api.example.com".to_string());
//!     config.api_key = Some("TEST_API_KEY".to_string());
//! });
//!
//! let client = brink_loyalty::client()?;
//! let response = client.pos_configurations("STORE123").await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Endpoints
//!
//! | Method | Verb | Path |
//! |---|---|---|
//! | `lookup` | POST | `/Locations/{storeId}/Orders/{orderId}/Lookup` |
//! | `finalize` | POST | `/Locations/{storeId}/Orders/{orderId}/Finalize` |
//! | `pos_configurations` | GET | `/Locations/{storeId}/POSConfigurations` |
//! | `receipt` | POST | `/Locations/{storeId}/Orders/{orderId}/Receipt` |
//! | `redeem` | POST | `/Locations/{storeId}/Orders/{orderId}/Redeem` |
//! | `remove_rewards` | DELETE | `/Locations/{storeId}/Orders/{orderId}/Redeem` |
//! | `validate_order` | POST | `/Locations/{storeId}/Orders/{orderId}/Validate` |
//!
//! ## Errors
//!
//! HTTP 4xx/5xx responses are **not** errors: they come back as envelopes and
//! the caller inspects `code`. A body that is not JSON is kept as raw text.
//! Errors are reserved for missing configuration, an unusable base URL, body
//! serialization failures and transport failures (see [`LoyaltyError`]).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod http;
pub mod response;
pub mod types;

// Re-export commonly used items
pub use client::LoyaltyClient;
pub use config::{configuration, configure, reset, Configuration};
pub use endpoints::Endpoint;
pub use errors::{LoyaltyError, Result};
pub use http::{ApiRequest, HttpMethod, RawResponse, ReqwestTransport, Transport};
pub use response::{Envelope, ResponseBody};

/// Returns a client built from the process-wide configuration.
///
/// Fails with [`LoyaltyError::NotConfigured`] if [`configure`] was never called.
pub fn client() -> Result<LoyaltyClient> {
    LoyaltyClient::new(&configuration()?)
}
