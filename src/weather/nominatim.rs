//! Nominatim search boundary
//!
//! Extracts the first hit of a `format=json` search response.

use serde_json::Value;

use super::{Coordinates, GeoLocation};
use crate::utils::coerce;

/// First search hit, or None when the response lists nothing usable.
/// Nominatim returns coordinates as strings; numbers are accepted too.
pub fn location_from_search_response(body: &Value) -> Option<GeoLocation> {
    let hit = body.as_array()?.first()?;
    let latitude = coerce::number(hit.get("lat"))?;
    let longitude = coerce::number(hit.get("lon"))?;
    Some(GeoLocation {
        coordinates: Coordinates::new(latitude, longitude),
        display_name: coerce::text(hit.get("display_name")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_hit() {
        let body = json!([
            {"lat": "45.9237", "lon": "6.8694", "display_name": "Chamonix-Mont-Blanc, France"},
            {"lat": "0", "lon": "0", "display_name": "elsewhere"}
        ]);
        let loc = location_from_search_response(&body).unwrap();
        assert_eq!(loc.display_name, "Chamonix-Mont-Blanc, France");
        assert!((loc.coordinates.latitude - 45.9237).abs() < 1e-9);
    }

    #[test]
    fn test_not_found() {
        assert_eq!(location_from_search_response(&json!([])), None);
        assert_eq!(location_from_search_response(&json!([{"lat": "x", "lon": "1"}])), None);
        assert_eq!(location_from_search_response(&json!({"error": "bad"})), None);
    }
}
