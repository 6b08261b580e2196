//! Splitting a product list by entitlement.
//!
//! Both filters key on `entitled` only. A `NOT_ENTITLED` product that is also
//! `NOT_PURCHASABLE` still counts as available; callers that need strictly
//! buyable items filter further with [`InSkillProduct::is_purchasable`].

use crate::products::{EntitlementState, InSkillProduct};

/// Products the current user owns, in input order.
pub fn purchased_products(products: &[InSkillProduct]) -> Vec<InSkillProduct> {
    with_entitlement(products, EntitlementState::Entitled)
}

/// Products the current user does not own, in input order.
pub fn available_products(products: &[InSkillProduct]) -> Vec<InSkillProduct> {
    with_entitlement(products, EntitlementState::NotEntitled)
}

fn with_entitlement(products: &[InSkillProduct], state: EntitlementState) -> Vec<InSkillProduct> {
    products
        .iter()
        .filter(|product| product.entitled == Some(state))
        .cloned()
        .collect()
}

/// Both halves of a catalog at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub purchased: Vec<InSkillProduct>,
    pub available: Vec<InSkillProduct>,
}

/// Split `products` into owned and not-owned. Products without an
/// entitlement state land in neither half.
pub fn partition(products: &[InSkillProduct]) -> Catalog {
    Catalog {
        purchased: purchased_products(products),
        available: available_products(products),
    }
}
