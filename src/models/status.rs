use std::collections::HashMap;

/// Read-only mapping from numeric status codes to display names.
pub trait StatusCatalog: Send + Sync {
    /// Unknown codes resolve to a placeholder name rather than failing.
    fn name_of(&self, code: i64) -> String;
}

const UNKNOWN_STATUS: &str = "Unknown status";

/// In-memory catalog seeded with the fixed return-status codes.
pub struct StaticStatusCatalog {
    names: HashMap<i64, String>,
}

impl StaticStatusCatalog {
    pub fn new(names: HashMap<i64, String>) -> Self {
        Self { names }
    }
}

impl Default for StaticStatusCatalog {
    fn default() -> Self {
        let names = HashMap::from([
            (0, "Completed".to_string()),
            (1, "Pending".to_string()),
            (2, "Rejected".to_string()),
        ]);
        Self { names }
    }
}

impl StatusCatalog for StaticStatusCatalog {
    fn name_of(&self, code: i64) -> String {
        self.names
            .get(&code)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string())
    }
}
