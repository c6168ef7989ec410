use serde::{Deserialize, Serialize};

fn default_limit() -> usize {
    1000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ListingConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}
