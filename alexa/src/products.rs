//! In-skill product models.
//!
//! Wire format of the ISP service, see
//! <https://developer.amazon.com/docs/in-skill-purchase/in-skill-product-service.html>.

use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};

/// Path of the product list, relative to the request's API endpoint.
pub const IN_SKILL_PRODUCTS_PATH: &str = "/v1/users/~current/skills/~current/inSkillProducts";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Subscription,
    Entitlement,
    Consumable,
}

/// Whether the current user owns the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntitlementState {
    Entitled,
    NotEntitled,
    /// A state this crate does not know; counted as neither owned nor available
    #[serde(other)]
    Unrecognized,
}

/// Whether the product can be bought right now. Independent of entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseState {
    Purchasable,
    NotPurchasable,
}

/// Sandbox or production purchase context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseMode {
    Test,
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntitlementReason {
    Purchased,
    NotPurchased,
    AutoEntitled,
    #[serde(other)]
    Unrecognized,
}

/// One catalog entry as seen by the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InSkillProduct {
    /// Vendor-assigned opaque id
    #[serde(default)]
    pub product_id: String,
    /// Developer-assigned stable id; slot values resolve against this
    #[serde(default)]
    pub reference_name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<ProductType>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitled: Option<EntitlementState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchasable: Option<PurchaseState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlement_reason: Option<EntitlementReason>,
    #[serde(default)]
    pub active_entitlement_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_mode: Option<PurchaseMode>,
}

impl InSkillProduct {
    pub fn is_entitled(&self) -> bool {
        self.entitled == Some(EntitlementState::Entitled)
    }

    pub fn is_purchasable(&self) -> bool {
        self.purchasable == Some(PurchaseState::Purchasable)
    }
}

/// Response envelope of the product list call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InSkillProductResponse {
    /// Required key; an explicit `null` reads as an empty list
    #[serde(deserialize_with = "null_as_empty")]
    pub in_skill_products: Vec<InSkillProduct>,
    /// More pages exist. Pages beyond the first are not fetched.
    #[serde(default, deserialize_with = "truncation_flag")]
    pub is_truncated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<InSkillProduct>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<InSkillProduct>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `true`, `"true"`, `false`, `"false"`, `""` and `null`.
fn truncation_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Flag::Bool(flag)) => Ok(flag),
        Some(Flag::Text(text)) if text.is_empty() || text.eq_ignore_ascii_case("false") => Ok(false),
        Some(Flag::Text(text)) if text.eq_ignore_ascii_case("true") => Ok(true),
        Some(Flag::Text(text)) => Err(de::Error::invalid_value(
            Unexpected::Str(&text),
            &"a boolean or boolean string",
        )),
    }
}
