//! Helpers for Alexa skill backends that sell in-skill products.
//!
//! This crate provides the inbound request types, a client for the
//! In-Skill Products service, and helpers to match slots to products and to
//! split a catalog by entitlement.

pub mod catalog;
pub mod config;
pub mod error;
pub mod isp;
pub mod products;
pub mod request;
pub mod resolve;

pub use catalog::{available_products, partition, purchased_products, Catalog};
pub use config::IspConfig;
pub use error::{Error, ErrorKind, Result};
pub use isp::IspClient;
pub use products::{
    EntitlementReason, EntitlementState, InSkillProduct, InSkillProductResponse, ProductType,
    PurchaseMode, PurchaseState,
};
pub use request::{Intent, Locale, Request, Slot};
pub use resolve::resolve_product;
