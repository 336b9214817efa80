use serde::{Deserialize, Serialize};

use super::{LinkId, LinkedProperty};

/// A single linking rule declared on a layer.
///
/// The rule governs the listed properties toward every target group in
/// `linked_ids`. Direction defaults to bidirectional when the flag is
/// omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRule {
    /// Link groups this rule points at
    pub linked_ids: Vec<LinkId>,

    /// Propagation direction; `None` means bidirectional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<bool>,

    /// Properties governed by this rule
    pub properties: Vec<LinkedProperty>,
}

impl LinkRule {
    /// Effective direction of the rule
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional.unwrap_or(true)
    }
}

/// A layer's membership in a link group, with its outgoing rules.
///
/// Declared once in the layer's static configuration; immutable afterward.
/// Re-declaring requires rebuilding the layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkGroup {
    /// Group id shared by every layer on this side of the link
    pub link_id: LinkId,

    /// Rules pointing at other groups
    #[serde(default)]
    pub links: Vec<LinkRule>,
}
