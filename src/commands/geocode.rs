use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::get_json;
use crate::models::LatLng;

fn geocode_path(address: &str) -> String {
    format!(
        "geocode?address={}",
        utf8_percent_encode(address.trim(), NON_ALPHANUMERIC)
    )
}

/// Resolve a street address through the server's geocoder
pub async fn geocode(address: &str) -> Result<LatLng, String> {
    get_json(&geocode_path(address)).await
}
