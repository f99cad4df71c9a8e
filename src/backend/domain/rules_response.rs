use serde::Deserialize;
use serde_json::Value;

// GET /api/parking/zone/{zone}/rules
#[derive(Debug, Default, Deserialize)]
pub struct RulesResponse {
    #[serde(default)]
    pub rules: Vec<Value>,
}
