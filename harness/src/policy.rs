//! JSON codec for [`SearchPolicyV1`].
//!
//! The JSON form is the configuration boundary, so parameter misuse (negative
//! or fractional depths, unknown keys) is rejected here, before any search
//! starts.
//!
//! ```json
//! {"deepening_ceiling": 20, "max_depth": null}
//! ```
//!
//! Missing keys take their [`SearchPolicyV1::default`] value.

use waypoint_search::policy::SearchPolicyV1;

const MAX_DEPTH: &str = "max_depth";
const DEEPENING_CEILING: &str = "deepening_ceiling";

/// Typed failure for policy decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The policy document is not a JSON object.
    NotAnObject,
    /// A key the policy does not define.
    UnknownField { field: String },
    /// A known key with an unusable value.
    InvalidField { field: &'static str, detail: String },
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "search policy must be a JSON object"),
            Self::UnknownField { field } => write!(f, "unknown search policy field {field:?}"),
            Self::InvalidField { field, detail } => {
                write!(f, "invalid search policy field {field:?}: {detail}")
            }
        }
    }
}

impl std::error::Error for PolicyError {}

/// Encode a policy as JSON.
#[must_use]
pub fn search_policy_to_json(policy: &SearchPolicyV1) -> serde_json::Value {
    serde_json::json!({
        MAX_DEPTH: policy.max_depth,
        DEEPENING_CEILING: policy.deepening_ceiling,
    })
}

/// Decode a policy from JSON.
///
/// # Errors
///
/// Returns [`PolicyError`] for non-objects, unknown keys, and depths that are
/// negative, fractional, or larger than `u32::MAX`.
pub fn search_policy_from_json(value: &serde_json::Value) -> Result<SearchPolicyV1, PolicyError> {
    let map = value.as_object().ok_or(PolicyError::NotAnObject)?;
    let mut policy = SearchPolicyV1::default();

    for (key, field_value) in map {
        match key.as_str() {
            MAX_DEPTH => {
                policy.max_depth = if field_value.is_null() {
                    None
                } else {
                    Some(parse_depth(MAX_DEPTH, field_value)?)
                };
            }
            DEEPENING_CEILING => {
                policy.deepening_ceiling = parse_depth(DEEPENING_CEILING, field_value)?;
            }
            other => {
                return Err(PolicyError::UnknownField {
                    field: other.to_string(),
                });
            }
        }
    }

    Ok(policy)
}

fn parse_depth(field: &'static str, value: &serde_json::Value) -> Result<u32, PolicyError> {
    if let Some(negative) = value.as_i64().filter(|v| *v < 0) {
        return Err(PolicyError::InvalidField {
            field,
            detail: format!("depth must be non-negative, got {negative}"),
        });
    }
    let raw = value.as_u64().ok_or_else(|| PolicyError::InvalidField {
        field,
        detail: format!("expected a non-negative integer, got {value}"),
    })?;
    u32::try_from(raw).map_err(|_| PolicyError::InvalidField {
        field,
        detail: format!("depth {raw} exceeds {}", u32::MAX),
    })
}
