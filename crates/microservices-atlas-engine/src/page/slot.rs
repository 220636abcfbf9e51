use crate::disclosure::DisclosureGroup;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static KEBAB_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Lowercase words joined by single hyphens: `faq`, `service-mesh-101`
pub fn is_kebab_case(s: &str) -> bool {
    KEBAB_CASE.is_match(s)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a valid identifier (expected lowercase words joined by '-')")]
pub struct InvalidIdentifier(pub String);

/// Name of a disclosure slot, unique within its page
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidIdentifier> {
        let id = id.into();
        if is_kebab_case(&id) {
            Ok(Self(id))
        } else {
            Err(InvalidIdentifier(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SlotId {
    type Error = InvalidIdentifier;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SlotId> for String {
    fn from(id: SlotId) -> Self {
        id.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One independent accordion on a page
#[derive(Debug, Clone, PartialEq)]
pub struct DisclosureSlot {
    pub id: SlotId,
    /// Heading shown above the group, e.g. "Frequently asked questions"
    pub label: Option<String>,
    pub group: DisclosureGroup,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("faq", true)]
    #[case("module-list", true)]
    #[case("k8s-101", true)]
    #[case("FAQ", false)]
    #[case("module_list", false)]
    #[case("-faq", false)]
    #[case("faq--list", false)]
    #[case("", false)]
    fn test_kebab_case(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(is_kebab_case(input), valid);
        assert_eq!(SlotId::new(input).is_ok(), valid);
    }

    #[test]
    fn test_slot_id_rejected_while_deserializing() {
        #[derive(Debug, Deserialize)]
        struct Holder {
            #[allow(dead_code)]
            slot: SlotId,
        }

        let err = toml::from_str::<Holder>("slot = \"Not Valid\"").unwrap_err();
        assert!(err.to_string().contains("not a valid identifier"));
    }
}
