//! Alexa Skill Lambda - Tells the user which in-skill products they own and can buy.
//!
//! If the intent carries a `product` slot that resolves to a catalog entry,
//! only that product is described.

use alexa::{partition, resolve_product, InSkillProduct, IspClient, IspConfig, Request};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Slot that names a product in the interaction model
const PRODUCT_SLOT: &str = "product";

const APOLOGY: &str = "Sorry, I couldn't look up your purchases right now. Please try again later.";

#[derive(Debug, Serialize)]
struct AlexaResponse {
    version: String,
    response: AlexaResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlexaResponseBody {
    output_speech: OutputSpeech,
    should_end_session: bool,
}

#[derive(Debug, Serialize)]
struct OutputSpeech {
    #[serde(rename = "type")]
    speech_type: String,
    text: String,
}

impl AlexaResponse {
    fn plain_text(text: impl Into<String>) -> Self {
        Self {
            version: "1.0".to_string(),
            response: AlexaResponseBody {
                output_speech: OutputSpeech {
                    speech_type: "PlainText".to_string(),
                    text: text.into(),
                },
                should_end_session: true,
            },
        }
    }
}

/// Settings read from the Lambda environment.
#[derive(Debug, Clone)]
struct SkillConfig {
    /// ISP call timeout in seconds
    isp_timeout_secs: u64,
    /// Verbose ISP step logging
    isp_debug_logging: bool,
}

impl SkillConfig {
    fn from_env() -> Result<Self, Error> {
        let isp_timeout_secs = match std::env::var("ISP_TIMEOUT_SECS") {
            Ok(value) => value
                .parse()
                .map_err(|_| "ISP_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => 30,
        };

        let isp_debug_logging = std::env::var("ISP_DEBUG_LOGGING")
            .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE"))
            .unwrap_or(false);

        Ok(Self {
            isp_timeout_secs,
            isp_debug_logging,
        })
    }

    fn isp_config(&self) -> IspConfig {
        IspConfig::default()
            .with_timeout(Duration::from_secs(self.isp_timeout_secs))
            .with_debug_logging(self.isp_debug_logging)
    }
}

/// Application state shared across invocations.
struct AppState {
    isp_client: IspClient,
}

impl AppState {
    fn new(config: &SkillConfig) -> Result<Self, Error> {
        Ok(Self {
            isp_client: IspClient::new(config.isp_config())?,
        })
    }
}

async fn handler(state: Arc<AppState>, event: LambdaEvent<Request>) -> Result<AlexaResponse, Error> {
    let request = event.payload;

    info!(
        request_id = %request.body.request_id,
        locale = %request.locale(),
        "Handling skill request"
    );

    let products = match state.isp_client.fetch_products(&request).await {
        Ok(products) => products,
        Err(e) => {
            error!(error = %e, kind = ?e.kind(), "Failed to fetch in-skill products");
            return Ok(AlexaResponse::plain_text(APOLOGY));
        }
    };

    Ok(AlexaResponse::plain_text(describe(&request, &products)))
}

/// Build the speech for a fetched catalog.
fn describe(request: &Request, products: &[InSkillProduct]) -> String {
    let requested = request
        .intent()
        .and_then(|intent| intent.slot(PRODUCT_SLOT))
        .and_then(|slot| resolve_product(slot, products));

    if let Some(product) = requested {
        return if product.is_entitled() {
            format!("You already own {}.", product.name)
        } else if product.is_purchasable() {
            format!("{} is available. {}", product.name, product.summary)
        } else {
            format!("{} can't be bought right now.", product.name)
        };
    }

    let catalog = partition(products);
    let owned: Vec<&str> = catalog.purchased.iter().map(|p| p.name.as_str()).collect();
    let for_sale: Vec<&str> = catalog
        .available
        .iter()
        .filter(|p| p.is_purchasable())
        .map(|p| p.name.as_str())
        .collect();

    match (owned.is_empty(), for_sale.is_empty()) {
        (true, true) => "There's nothing to buy right now.".to_string(),
        (true, false) => format!("You can buy {}.", spoken_list(&for_sale)),
        (false, true) => format!("You own {}.", spoken_list(&owned)),
        (false, false) => format!(
            "You own {}. You can also buy {}.",
            spoken_list(&owned),
            spoken_list(&for_sale)
        ),
    }
}

/// "a", "a and b", "a, b and c"
fn spoken_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = SkillConfig::from_env()?;
    let state = Arc::new(AppState::new(&config)?);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use alexa::{EntitlementState, PurchaseState};
    use serde_json::json;

    fn product(name: &str, entitled: EntitlementState, purchasable: PurchaseState) -> InSkillProduct {
        InSkillProduct {
            reference_name: name.to_lowercase().replace(' ', "_"),
            name: name.to_string(),
            summary: format!("All about {}.", name),
            entitled: Some(entitled),
            purchasable: Some(purchasable),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<InSkillProduct> {
        vec![
            product("Premium", EntitlementState::Entitled, PurchaseState::NotPurchasable),
            product("Cave Quest", EntitlementState::NotEntitled, PurchaseState::Purchasable),
            product("Hint Pack", EntitlementState::NotEntitled, PurchaseState::Purchasable),
            product("Region Pack", EntitlementState::NotEntitled, PurchaseState::NotPurchasable),
        ]
    }

    fn intent_request(slot_id: Option<&str>) -> Request {
        let slots = match slot_id {
            Some(id) => json!({
                "product": {
                    "name": "product",
                    "resolutions": {
                        "resolutionsPerAuthority": [{ "values": [{ "value": { "name": id, "id": id } }] }]
                    }
                }
            }),
            None => json!({}),
        };

        serde_json::from_value(json!({
            "request": {
                "type": "IntentRequest",
                "locale": "en-US",
                "intent": { "name": "WhatCanIBuyIntent", "slots": slots }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_describe_whole_catalog() {
        let speech = describe(&intent_request(None), &catalog());
        assert_eq!(speech, "You own Premium. You can also buy Cave Quest and Hint Pack.");
    }

    #[test]
    fn test_describe_resolved_product() {
        let products = catalog();

        assert_eq!(
            describe(&intent_request(Some("premium")), &products),
            "You already own Premium."
        );
        assert_eq!(
            describe(&intent_request(Some("cave_quest")), &products),
            "Cave Quest is available. All about Cave Quest."
        );
        assert_eq!(
            describe(&intent_request(Some("region_pack")), &products),
            "Region Pack can't be bought right now."
        );
    }

    #[test]
    fn test_unresolved_slot_falls_back_to_catalog() {
        let speech = describe(&intent_request(Some("dragon_pack")), &catalog());
        assert!(speech.starts_with("You own Premium."));
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(describe(&intent_request(None), &[]), "There's nothing to buy right now.");
    }

    #[test]
    fn test_spoken_list() {
        assert_eq!(spoken_list(&["a"]), "a");
        assert_eq!(spoken_list(&["a", "b"]), "a and b");
        assert_eq!(spoken_list(&["a", "b", "c"]), "a, b and c");
    }

    #[test]
    fn test_response_shape() {
        let value = serde_json::to_value(AlexaResponse::plain_text("hi")).unwrap();
        assert_eq!(value["response"]["outputSpeech"]["type"], "PlainText");
        assert_eq!(value["response"]["shouldEndSession"], true);
    }
}
