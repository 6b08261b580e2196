//! Slot to product resolution.

use crate::products::InSkillProduct;
use crate::request::Slot;

/// Find the product a slot refers to.
///
/// Assumes the slot's resolved value ids are ISP reference names. Authorities
/// are tried in order, then each authority's values in order, then the
/// products in order; the first `id == reference_name` wins. Resolution
/// status codes are not consulted.
pub fn resolve_product<'a>(slot: &Slot, products: &'a [InSkillProduct]) -> Option<&'a InSkillProduct> {
    slot.candidate_ids().find_map(|id| {
        products
            .iter()
            .find(|product| product.reference_name == id)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Authority, ResolutionValue, Resolutions, ResolvedValue};

    fn slot(authorities: &[&[&str]]) -> Slot {
        Slot {
            name: "product".to_string(),
            value: None,
            resolutions: Resolutions {
                resolutions_per_authority: authorities
                    .iter()
                    .map(|ids| Authority {
                        values: ids
                            .iter()
                            .map(|id| ResolutionValue {
                                value: ResolvedValue {
                                    name: id.to_uppercase(),
                                    id: id.to_string(),
                                },
                            })
                            .collect(),
                        ..Default::default()
                    })
                    .collect(),
            },
        }
    }

    fn product(reference_name: &str, product_id: &str) -> InSkillProduct {
        InSkillProduct {
            product_id: product_id.to_string(),
            reference_name: reference_name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_authority_wins_over_product_order() {
        let products = vec![product("B", "p-b"), product("A", "p-a")];
        let slot = slot(&[&["A"], &["B"]]);

        let found = resolve_product(&slot, &products).unwrap();
        assert_eq!(found.reference_name, "A");
    }

    #[test]
    fn test_first_value_wins_within_authority() {
        let products = vec![product("hints", "p-1"), product("cave_quest", "p-2")];
        let slot = slot(&[&["cave_quest", "hints"]]);

        assert_eq!(resolve_product(&slot, &products).unwrap().product_id, "p-2");
    }

    #[test]
    fn test_first_product_wins_on_duplicate_reference_names() {
        let products = vec![product("A", "first"), product("A", "second")];
        let slot = slot(&[&["A"]]);

        assert_eq!(resolve_product(&slot, &products).unwrap().product_id, "first");
    }

    #[test]
    fn test_later_authority_used_when_earlier_misses() {
        let products = vec![product("B", "p-b")];
        let slot = slot(&[&["A", "C"], &[], &["B"]]);

        assert_eq!(resolve_product(&slot, &products).unwrap().product_id, "p-b");
    }

    #[test]
    fn test_matches_reference_name_not_product_id() {
        let products = vec![product("cave_quest", "A")];
        let slot = slot(&[&["A"]]);

        assert!(resolve_product(&slot, &products).is_none());
    }

    #[test]
    fn test_no_match() {
        assert!(resolve_product(&slot(&[&["A"]]), &[]).is_none());
        assert!(resolve_product(&slot(&[]), &[product("A", "p-a")]).is_none());
        assert!(resolve_product(&slot(&[&["Z"]]), &[product("A", "p-a")]).is_none());
    }
}
