//! Opaque identifiers for remotely priced items.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How an absent identifier is rendered in lookup URLs and messages.
pub const ABSENT_ITEM_ID: &str = "None";

/// Identifier of an item in the remote catalogue.
///
/// The identifier is opaque: integers and strings are kept in their textual
/// form, and an absent identifier is a valid value that renders as
/// [`ABSENT_ITEM_ID`].
///
/// ```rust
/// use cart_pricing::ItemId;
///
/// assert_eq!(ItemId::from(12345u64).to_string(), "12345");
/// assert_eq!(ItemId::from("sku-9").to_string(), "sku-9");
/// assert_eq!(ItemId::from(None::<u64>).to_string(), "None");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Option<String>);

impl ItemId {
    /// The absent identifier.
    pub const fn absent() -> Self {
        ItemId(None)
    }

    /// Checks if this is the absent identifier.
    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Text used as the last path segment of the lookup URL.
    pub fn as_segment(&self) -> &str {
        self.0.as_deref().unwrap_or(ABSENT_ITEM_ID)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_segment())
    }
}

macro_rules! item_id_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ItemId {
                fn from(id: $ty) -> Self {
                    ItemId(Some(id.to_string()))
                }
            }
        )*
    };
}

item_id_from_integer!(i32, i64, u32, u64, usize);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId(Some(id.to_string()))
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        ItemId(Some(id))
    }
}

impl<T: Into<ItemId>> From<Option<T>> for ItemId {
    fn from(id: Option<T>) -> Self {
        id.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_forms() {
        assert_eq!(ItemId::from(12345i64).as_segment(), "12345");
        assert_eq!(ItemId::from(String::from("abc")).as_segment(), "abc");
        assert_eq!(ItemId::from(Some(7u32)).as_segment(), "7");
        assert!(ItemId::from(None::<&str>).is_absent());
        assert_eq!(ItemId::absent(), ItemId::default());
        assert_eq!(ItemId::absent().to_string(), ABSENT_ITEM_ID);
    }

    #[test]
    fn test_item_id_serde_is_transparent() {
        assert_eq!(serde_json::to_string(&ItemId::from(5u64)).unwrap(), r#""5""#);
        assert_eq!(serde_json::to_string(&ItemId::absent()).unwrap(), "null");
    }
}
