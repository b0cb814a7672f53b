use bicycle::part::Part;
use thiserror::Error;

use crate::descriptor::{PartDescriptor, PartDescriptorError};

/// Builds the ordered list of parts from the given descriptors.
///
/// The result has the same length and order as the input, duplicates included.
/// The first invalid descriptor fails the whole build, reporting its position.
pub fn build_parts(descriptors: &[PartDescriptor]) -> Result<Vec<Part>, PartCatalogError> {
    let mut parts: Vec<Part> = vec![];

    for (index, descriptor) in descriptors.iter().enumerate() {
        let part = descriptor
            .build_part()
            .map_err(|cause| PartCatalogError::InvalidDescriptor {
                index,
                name: descriptor.name.clone(),
                cause,
            })?;

        parts.push(part);
    }

    Ok(parts)
}

#[derive(Debug, Error, PartialEq)]
pub enum PartCatalogError {
    #[error("Invalid descriptor. index: {index}, name: '{name}', cause: {cause}")]
    InvalidDescriptor {
        index: usize,
        name: String,
        cause: PartDescriptorError,
    },
}
