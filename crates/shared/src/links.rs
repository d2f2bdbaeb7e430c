use crate::models::NOT_PROVIDED;

/// Resolve an optional social-link value to a clickable URL.
///
/// Absent values, empty strings and the `"N/A"` sentinel all mean "not
/// provided". Values without a scheme get an `https://` prefix.
pub fn social_href(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value == NOT_PROVIDED {
        return None;
    }
    if value.starts_with("https://") || value.starts_with("http://") {
        Some(value.to_string())
    } else {
        Some(format!("https://{value}"))
    }
}

pub fn tel_href(telefono: &str) -> String {
    format!("tel:{telefono}")
}

pub fn mailto_href(email: &str) -> String {
    format!("mailto:{email}")
}

/// External map-search URL for a coordinate pair.
pub fn map_search_url(lat: f64, lng: f64) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={lat},{lng}")
}
