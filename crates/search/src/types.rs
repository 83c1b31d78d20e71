//! Wire types for the remote matching service.

use serde::{Deserialize, Serialize};

/// Request body for the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Base64-encoded PNG of the sketch
    pub image_data: String,
}

/// A single ranked match returned by the matching service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// What the service believes was drawn
    pub animal_type: String,
    /// Confidence percentage (0-100), reported as-is with no client-side
    /// normalization
    pub confidence: f32,
    /// URL of the matched photo
    pub photo_url: String,
    /// Credit for the matched photo
    pub photographer: String,
}

/// Full response from the matching service.
///
/// Matches arrive ranked by the server and are never re-sorted here. A
/// well-formed response without a `matches` field is an empty result set,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub matches: Vec<Match>,
    /// Server-side processing time in milliseconds
    #[serde(default)]
    pub search_time_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_response_decodes() {
        let body = r#"{
            "matches": [
                {"animal_type": "cat", "confidence": 92.5, "photo_url": "u", "photographer": "p"}
            ],
            "search_time_ms": 120
        }"#;
        let result: SearchResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].animal_type, "cat");
        assert_eq!(result.matches[0].confidence, 92.5);
        assert_eq!(result.search_time_ms, 120);
    }

    #[test]
    fn test_missing_matches_defaults_to_empty() {
        let result: SearchResult = serde_json::from_str(r#"{"search_time_ms": 8}"#).unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.search_time_ms, 8);
    }

    #[test]
    fn test_missing_search_time_defaults_to_zero() {
        let result: SearchResult = serde_json::from_str(r#"{"matches": []}"#).unwrap();
        assert_eq!(result.search_time_ms, 0);
    }

    #[test]
    fn test_non_object_body_rejected() {
        assert!(serde_json::from_str::<SearchResult>("\"hello\"").is_err());
        assert!(serde_json::from_str::<SearchResult>("[1, 2]").is_err());
    }
}
