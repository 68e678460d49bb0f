//! JSON Value Extension
//!
//! Convenient accessor methods for JSON values with default fallbacks,
//! replacing the verbose `.get().and_then(..).unwrap_or(..)` pattern when
//! picking fields out of provider API responses.

/// Extension trait for `serde_json::Value` with convenient accessors
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use anr_providers::utils::JsonExt;
///
/// let body = json!({"model": "llama3-8b-8192", "score": 0.92});
/// assert_eq!(body.str_or("model", "unknown"), "llama3-8b-8192");
/// assert_eq!(body.f64_or("score", 0.0), 0.92);
/// assert_eq!(body.str_or("missing", "fallback"), "fallback");
/// ```
pub trait JsonExt {
    /// Get string value or default
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str;

    /// Get f64 value or default
    fn f64_or(&self, key: &str, default: f64) -> f64;

    /// Get optional string
    fn opt_str(&self, key: &str) -> Option<&str>;

    /// Get optional array
    fn opt_array(&self, key: &str) -> Option<&Vec<serde_json::Value>>;
}

impl JsonExt for serde_json::Value {
    fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(|v| v.as_str()).unwrap_or(default)
    }

    fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(serde_json::Value::as_f64).unwrap_or(default)
    }

    fn opt_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }

    fn opt_array(&self, key: &str) -> Option<&Vec<serde_json::Value>> {
        self.get(key).and_then(|v| v.as_array())
    }
}
