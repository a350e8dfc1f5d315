use super::error::WorldError;

/// A collectible thing, held either by a location or by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    asset: String,
}

impl Item {
    /// The name is kept as given; only the asset reference must be non-empty.
    pub fn new(name: impl Into<String>, asset: impl Into<String>) -> Result<Self, WorldError> {
        let name = name.into();
        let asset = asset.into();
        if asset.is_empty() {
            return Err(WorldError::EmptyAsset { item: name });
        }
        Ok(Item { name, asset })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }
}
