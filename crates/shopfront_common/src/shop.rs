use serde::{Deserialize, Serialize};

use crate::query::QueryState;

/// Brand text shown while the shop lookup is in flight.
pub const BRAND_LOADING: &str = "Loading...";

/// Brand text when no shop name is available: the lookup failed, the shop
/// has no name configured, or nobody is signed in.
pub const BRAND_FALLBACK: &str = "Company Logo";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
/// Shop metadata the navigation consumes.
///
/// The backend sends more fields than this; only the display name is read
/// and everything else is ignored.
pub struct ShopInfo {
    pub company_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
/// Wire envelope for the my-shop endpoint: `{ "data": { ... } }`.
pub struct ShopEnvelope {
    pub data: ShopInfo,
}

impl ShopInfo {
    /// The display name, if the shop has a non-empty one configured.
    pub fn display_name(&self) -> Option<&str> {
        self.company_name.as_deref().filter(|name| !name.is_empty())
    }
}

impl QueryState<ShopInfo> {
    /// Maps the lookup state to the brand text the navbar renders.
    ///
    /// A missing or empty name falls back the same way a failed request
    /// does; the page never blocks on this lookup.
    pub fn brand_text(&self) -> &str {
        match self {
            QueryState::Loading => BRAND_LOADING,
            QueryState::Error => BRAND_FALLBACK,
            QueryState::Ready(info) => info.display_name().unwrap_or(BRAND_FALLBACK),
        }
    }
}
