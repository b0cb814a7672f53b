use catalog::descriptor::PartDescriptor;

/// CSV record for a part descriptor.
///
/// `NeedsSpare` may be left empty; the catalog builder resolves the default when the
/// descriptor is built.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all(deserialize = "PascalCase"))]
pub struct PartDescriptorRecord {
    pub name: String,
    pub description: String,
    pub needs_spare: Option<bool>,
}

impl PartDescriptorRecord {
    pub fn build_part_descriptor(&self) -> PartDescriptor {
        PartDescriptor {
            name: self.name.clone(),
            description: self.description.clone(),
            needs_spare: self.needs_spare,
        }
    }
}

/// CSV record for an entry in the spares listing.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all(serialize = "PascalCase"))]
pub struct SpareRecord {
    pub name: String,
    pub description: String,
}
