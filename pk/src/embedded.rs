//! Embedded kits
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

use crate::kit::Kit;
use crate::template::Template;

/// Name of the built-in real estate follow-up kit
pub const REAL_ESTATE_FOLLOWUP_NAME: &str = "real-estate-followup";

/// Real estate lead follow-up template
pub const REAL_ESTATE_FOLLOWUP: &str = include_str!("../prompts/real-estate-followup.pmt");

/// Placeholder order for the real estate follow-up template
pub const REAL_ESTATE_PLACEHOLDERS: [&str; 5] = ["Client Name", "Neighborhood", "Property Type", "Price Range", "Agent Name"];

/// Names of every embedded kit
pub fn embedded_names() -> &'static [&'static str] {
    &[REAL_ESTATE_FOLLOWUP_NAME]
}

/// Get the embedded kit by name
pub fn get_embedded(name: &str) -> Option<Kit> {
    debug!(%name, "get_embedded: called");
    match name {
        REAL_ESTATE_FOLLOWUP_NAME => {
            debug!("get_embedded: matched real-estate-followup");
            Some(Kit {
                name: REAL_ESTATE_FOLLOWUP_NAME.to_string(),
                description: "Real estate agent lead follow-up".to_string(),
                template: Template::real_estate_followup(),
            })
        }
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}
