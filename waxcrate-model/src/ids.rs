use uuid::Uuid;

/// Strongly typed ID for collection items.
///
/// The ID is assigned at construction and survives in-place edits, so
/// the UI can track an item across re-sorts of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemID(pub Uuid);

impl Default for ItemID {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemID {
    pub fn new() -> Self {
        ItemID(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    pub fn to_uuid(&self) -> Uuid {
        self.0
    }
}

impl AsRef<Uuid> for ItemID {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for ItemID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
