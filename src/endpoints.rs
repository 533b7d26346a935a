//! The remote endpoints exposed by the loyalty service.
//!
//! Each [`Endpoint`] knows its HTTP verb and path template. Store and order
//! identifiers are substituted verbatim; callers must supply values that are
//! safe to embed in a URL path.

use crate::http::HttpMethod;
use std::fmt;

/// A single remote operation, carrying the identifiers its path needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// POST /Locations/{storeId}/Orders/{orderId}/Lookup
    Lookup {
        /// Store identifier
        store_id: &'a str,
        /// Order identifier
        order_id: &'a str,
    },
    /// POST /Locations/{storeId}/Orders/{orderId}/Finalize
    Finalize {
        /// Store identifier
        store_id: &'a str,
        /// Order identifier
        order_id: &'a str,
    },
    /// GET /Locations/{storeId}/POSConfigurations
    PosConfigurations {
        /// Store identifier
        store_id: &'a str,
    },
    /// POST /Locations/{storeId}/Orders/{orderId}/Receipt
    Receipt {
        /// Store identifier
        store_id: &'a str,
        /// Order identifier
        order_id: &'a str,
    },
    /// POST /Locations/{storeId}/Orders/{orderId}/Redeem
    Redeem {
        /// Store identifier
        store_id: &'a str,
        /// Order identifier
        order_id: &'a str,
    },
    /// DELETE /Locations/{storeId}/Orders/{orderId}/Redeem
    RemoveRewards {
        /// Store identifier
        store_id: &'a str,
        /// Order identifier
        order_id: &'a str,
    },
    /// POST /Locations/{storeId}/Orders/{orderId}/Validate
    Validate {
        /// Store identifier
        store_id: &'a str,
        /// Order identifier
        order_id: &'a str,
    },
}

impl<'a> Endpoint<'a> {
    /// HTTP verb used by this endpoint.
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::PosConfigurations { .. } => HttpMethod::Get,
            Endpoint::RemoveRewards { .. } => HttpMethod::Delete,
            Endpoint::Lookup { .. }
            | Endpoint::Finalize { .. }
            | Endpoint::Receipt { .. }
            | Endpoint::Redeem { .. }
            | Endpoint::Validate { .. } => HttpMethod::Post,
        }
    }

    /// Path with the identifiers substituted, relative to the base URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use brink_loyalty::endpoints::Endpoint;
    ///
    /// let endpoint = Endpoint::Lookup { store_id: "STORE123", order_id: "ORDER456" };
    /// assert_eq!(endpoint.path(), "/Locations/STORE123/Orders/ORDER456/Lookup");
    /// ```
    pub fn path(&self) -> String {
        match *self {
            Endpoint::PosConfigurations { store_id } => {
                format!("/Locations/{}/POSConfigurations", store_id)
            }
            Endpoint::Lookup { store_id, order_id } => order_path(store_id, order_id, "Lookup"),
            Endpoint::Finalize { store_id, order_id } => {
                order_path(store_id, order_id, "Finalize")
            }
            Endpoint::Receipt { store_id, order_id } => order_path(store_id, order_id, "Receipt"),
            Endpoint::Redeem { store_id, order_id }
            | Endpoint::RemoveRewards { store_id, order_id } => {
                order_path(store_id, order_id, "Redeem")
            }
            Endpoint::Validate { store_id, order_id } => {
                order_path(store_id, order_id, "Validate")
            }
        }
    }

    /// Short operation name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Lookup { .. } => "lookup",
            Endpoint::Finalize { .. } => "finalize",
            Endpoint::PosConfigurations { .. } => "pos_configurations",
            Endpoint::Receipt { .. } => "receipt",
            Endpoint::Redeem { .. } => "redeem",
            Endpoint::RemoveRewards { .. } => "remove_rewards",
            Endpoint::Validate { .. } => "validate_order",
        }
    }
}

impl fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

fn order_path(store_id: &str, order_id: &str, action: &str) -> String {
    format!("/Locations/{}/Orders/{}/{}", store_id, order_id, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: &str = "STORE123";
    const ORDER: &str = "ORDER456";

    #[test]
    fn test_order_endpoints() {
        let cases = [
            (
                Endpoint::Lookup { store_id: STORE, order_id: ORDER },
                HttpMethod::Post,
                "/Locations/STORE123/Orders/ORDER456/Lookup",
            ),
            (
                Endpoint::Finalize { store_id: STORE, order_id: ORDER },
                HttpMethod::Post,
                "/Locations/STORE123/Orders/ORDER456/Finalize",
            ),
            (
                Endpoint::Receipt { store_id: STORE, order_id: ORDER },
                HttpMethod::Post,
                "/Locations/STORE123/Orders/ORDER456/Receipt",
            ),
            (
                Endpoint::Redeem { store_id: STORE, order_id: ORDER },
                HttpMethod::Post,
                "/Locations/STORE123/Orders/ORDER456/Redeem",
            ),
            (
                Endpoint::RemoveRewards { store_id: STORE, order_id: ORDER },
                HttpMethod::Delete,
                "/Locations/STORE123/Orders/ORDER456/Redeem",
            ),
            (
                Endpoint::Validate { store_id: STORE, order_id: ORDER },
                HttpMethod::Post,
                "/Locations/STORE123/Orders/ORDER456/Validate",
            ),
        ];

        for (endpoint, method, path) in cases {
            assert_eq!(endpoint.method(), method, "{}", endpoint.name());
            assert_eq!(endpoint.path(), path, "{}", endpoint.name());
        }
    }

    #[test]
    fn test_pos_configurations_endpoint() {
        let endpoint = Endpoint::PosConfigurations { store_id: STORE };
        assert_eq!(endpoint.method(), HttpMethod::Get);
        assert_eq!(endpoint.path(), "/Locations/STORE123/POSConfigurations");
        assert_eq!(endpoint.to_string(), "GET /Locations/STORE123/POSConfigurations");
    }

    #[test]
    fn test_identifiers_are_not_escaped() {
        let endpoint = Endpoint::Lookup { store_id: "a b", order_id: "42" };
        assert_eq!(endpoint.path(), "/Locations/a b/Orders/42/Lookup");
    }
}
