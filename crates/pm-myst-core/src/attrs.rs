//! Editor node attribute records

use serde::{Deserialize, Serialize};

/// Attributes of node types that carry none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyAttrs {}

/// Attributes of an ordered list
///
/// `order` is the number of the first item. `None` (JSON `null` or a missing
/// field) and `Some(0)` both mean "no explicit start" when exporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedListAttrs {
    #[serde(default)]
    pub order: Option<i64>,
}

impl OrderedListAttrs {
    pub fn new(order: i64) -> Self {
        Self { order: Some(order) }
    }

    /// The explicit start number, if `order` is set and non-zero
    pub fn start(&self) -> Option<i64> {
        self.order.filter(|&n| n != 0)
    }
}

/// Declaration of a single node attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    /// Value used by the schema engine when the attribute is not given
    pub default: Option<i64>,
}
