//! Product-structure tree node

use serde::Serialize;

/// One article occurrence in the product structure.
///
/// The same catalog article can occur several times in one tree (as a
/// component of different assemblies), so nodes are occurrences, not
/// catalog entries. Children keep the order the structure cursor yielded
/// them; nothing is ever sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleNode {
    /// Catalog designation of the article.
    pub designation: String,
    /// Human-readable name; may be empty for the root.
    pub name: String,
    /// Quantity text as supplied by the source, e.g. `"4 шт"`.
    pub quantity: String,
    /// Annotation fetched only for zero-quantity occurrences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub children: Vec<ArticleNode>,
}

impl ArticleNode {
    pub fn new(
        designation: impl Into<String>,
        name: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            designation: designation.into(),
            name: name.into(),
            quantity: quantity.into(),
            remark: None,
            children: Vec::new(),
        }
    }

    /// A node with no children is a terminal component.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when the quantity's leading whitespace-delimited token is `"0"`.
    ///
    /// Zero-quantity occurrences are reference-only entries; the walker
    /// fetches a remark for them.
    pub fn has_zero_quantity(quantity: &str) -> bool {
        quantity.split_whitespace().next() == Some("0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_detection() {
        let mut node = ArticleNode::new("А.001", "Изделие", "1");
        assert!(node.is_leaf());
        node.children.push(ArticleNode::new("А.001-01", "Деталь", "2"));
        assert!(!node.is_leaf());
    }

    #[test]
    fn zero_quantity_looks_at_the_leading_token() {
        assert!(ArticleNode::has_zero_quantity("0"));
        assert!(ArticleNode::has_zero_quantity("0 шт"));
        assert!(ArticleNode::has_zero_quantity("  0\tшт"));
        assert!(!ArticleNode::has_zero_quantity("4 шт"));
        assert!(!ArticleNode::has_zero_quantity("0.5"));
        assert!(!ArticleNode::has_zero_quantity("10"));
        assert!(!ArticleNode::has_zero_quantity(""));
    }
}
