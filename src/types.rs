//! Typed payloads for the loyalty API.
//!
//! Every operation accepts any `Serialize` body, so these structs are optional.
//! They mirror the documented request and response shapes with camelCase field
//! names on the wire.

use serde::{Deserialize, Serialize};

/// Reference to a POS order.
///
/// # Examples
///
/// ```
/// use brink_loyalty::types::OrderRef;
///
/// let order = OrderRef::new(123456);
/// assert_eq!(serde_json::to_string(&order).unwrap(), r#"{"id":123456}"#);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderRef {
    /// POS order id
    pub id: i64,

    /// Loyalty account the order is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_account_number: Option<String>,

    /// Discounts currently applied to the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discounts: Option<Vec<serde_json::Value>>,
}

impl OrderRef {
    /// Creates an order reference with only an id.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Attaches a loyalty account number.
    pub fn with_customer_account(mut self, account: impl Into<String>) -> Self {
        self.customer_account_number = Some(account.into());
        self
    }
}

/// Reference to the employee operating the POS.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeRef {
    /// Employee id
    pub id: i64,
}

/// Order destination (e.g., "Eat In").
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Destination id
    pub id: i64,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A loyalty reward that can be applied to or removed from an order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    /// Reward identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Discount amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    /// Whether the POS applies the reward without user interaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply: Option<bool>,

    /// Matching discount configured in the POS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brink_discount_id: Option<i64>,
}

/// Body for the lookup operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    /// Customer email used to find the loyalty account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,

    /// Customer phone number used to find the loyalty account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    /// Order being looked up
    pub order: OrderRef,

    /// Employee performing the lookup
    pub employee: EmployeeRef,
}

/// Body for the finalize and validate operations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinalizeRequest {
    /// Order being closed
    pub order: OrderRef,

    /// Employee closing the order
    pub employee: EmployeeRef,

    /// Order destination
    pub destination: Destination,

    /// POS terminal id
    pub terminal_id: i64,
}

/// Body for the validate operation; same shape as finalize.
pub type ValidateRequest = FinalizeRequest;

/// Body for the receipt operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReceiptRequest {
    /// Order the receipt is printed for
    pub order: OrderRef,

    /// Order destination
    pub destination: Destination,
}

/// Body for the redeem operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RedeemRequest {
    /// Order the rewards apply to
    pub order: OrderRef,

    /// Employee redeeming the rewards
    pub employee: EmployeeRef,

    /// Reward code typed in at the POS (empty when none)
    #[serde(default)]
    pub offer_code: String,

    /// Rewards picked by the customer
    #[serde(default)]
    pub selected_rewards: Vec<Reward>,
}

/// Body for the remove-rewards operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RemoveRewardsRequest {
    /// Order the rewards are removed from
    pub order: OrderRef,

    /// Employee voiding the rewards
    pub employee: EmployeeRef,

    /// Rewards to void
    pub rewards_to_remove: Vec<Reward>,
}

/// Customer details returned by a successful lookup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyCustomer {
    /// Loyalty account id
    pub id: String,

    /// Customer display name
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form member detail (often an email)
    #[serde(default)]
    pub member_detail: Option<String>,

    /// Points balance
    #[serde(default)]
    pub points: Option<i64>,
}

/// Store-level loyalty behavior flags.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PosConfiguration {
    /// Call finalize even when no loyalty account is attached
    pub call_finalize_for_non_loyalty_orders: bool,

    /// Notify the service when an order is modified
    pub notify_order_modifications: bool,

    /// Allow typing a reward code at the POS
    pub supports_entering_reward_code: bool,

    /// Allow redeeming more than one reward per order
    pub supports_redeeming_multiple_rewards: bool,
}

/// Response of redeem and validate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardsResponse {
    /// Rewards the POS should remove
    pub rewards_to_remove: Vec<Reward>,

    /// Rewards the POS should apply
    pub rewards_to_apply: Vec<Reward>,
}

/// Response of the receipt operation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ReceiptResponse {
    /// Lines to print on the receipt
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Response of finalize and remove-rewards.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessResponse {
    /// Whether the operation succeeded
    pub success: bool,
}

/// Error body returned with 4xx/5xx statuses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable summary
    pub message: String,

    /// Status code echoed by the service
    #[serde(default)]
    pub code: Option<u16>,

    /// Individual failures
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// One entry of [`ErrorResponse::errors`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Component that raised the error
    pub source: String,

    /// Error description
    pub error: String,
}
