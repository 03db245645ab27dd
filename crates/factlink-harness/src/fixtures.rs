//! Fixture loading and management.

use serde::{Deserialize, Serialize};

/// A single factorial test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Input passed to the resolved symbol.
    pub input: i32,
    /// Expected 64-bit result.
    pub expected: i64,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Built-in reference cases: the negative sentinel, the base cases, the
    /// demonstration value, and the largest exact input.
    #[must_use]
    pub fn builtin() -> Self {
        fn case(name: &str, input: i32, expected: i64) -> FixtureCase {
            FixtureCase {
                name: name.to_string(),
                input,
                expected,
            }
        }
        Self {
            version: "1".to_string(),
            family: "factorial".to_string(),
            cases: vec![
                case("negative_sentinel", -4, 0),
                case("zero", 0, 1),
                case("one", 1, 1),
                case("demo_five", 5, 120),
                case("ten", 10, 3_628_800),
                case("largest_exact", 20, 2_432_902_008_176_640_000),
            ],
        }
    }

    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}
