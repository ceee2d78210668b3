//! Ordered query parameters and single-parameter rewrites.

/// Query string pairs in the order the browser sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Copy with `name` set to `value`. The first occurrence is replaced in place and any
    /// repeats are dropped; a missing parameter is appended. Every other pair is kept.
    pub fn with(&self, name: &str, value: &str) -> Self {
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        let mut replaced = false;
        for (k, v) in &self.pairs {
            if k == name {
                if !replaced {
                    pairs.push((k.clone(), value.to_string()));
                    replaced = true;
                }
            } else {
                pairs.push((k.clone(), v.clone()));
            }
        }
        if !replaced {
            pairs.push((name.to_string(), value.to_string()));
        }
        Self { pairs }
    }

    /// `?a=1&b=2`, or an empty string when there are no pairs.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        match serde_urlencoded::to_string(&self.pairs) {
            Ok(encoded) => format!("?{}", encoded),
            Err(e) => {
                tracing::warn!(error = %e, "Query string encoding failed");
                String::new()
            }
        }
    }

    /// `path` followed by this query with `name` rewritten to `value`.
    pub fn href_with(&self, path: &str, name: &str, value: &str) -> String {
        format!("{}{}", path, self.with(name, value).to_query_string())
    }
}
