use bicycle::part::{find_part_by_name, Part};
use thiserror::Error;

use crate::configuration::{BicycleConfiguration, ConfigurationName};
use crate::criteria::{AnyPartCriteria, NameListCriteria, PartCriteria};

#[derive(Debug, PartialEq)]
pub struct ConfigurationResult {
    pub parts: Vec<Part>,
}

pub struct ConfigurationProcessor {}

impl ConfigurationProcessor {
    /// Selects the configuration's parts from the catalog.
    ///
    /// The selection preserves catalog order; every name in the configuration must refer
    /// to a catalog part.
    pub fn process(
        parts: &[Part],
        configuration: &BicycleConfiguration,
    ) -> Result<ConfigurationResult, ConfigurationError> {
        for name in configuration.part_names.iter() {
            if find_part_by_name(parts, name).is_none() {
                return Err(ConfigurationError::UnknownPartName {
                    configuration: configuration.name.clone(),
                    name: name.clone(),
                });
            }
        }

        let criteria: Box<dyn PartCriteria> = match configuration.part_names.is_empty() {
            true => Box::new(AnyPartCriteria::default()),
            false => Box::new(NameListCriteria {
                names: configuration.part_names.clone(),
            }),
        };

        let matched_parts: Vec<Part> = parts
            .iter()
            .filter(|&part| criteria.matches(part))
            .cloned()
            .collect();

        Ok(ConfigurationResult {
            parts: matched_parts,
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("Unknown part name. configuration: '{configuration}', name: '{name}'")]
    UnknownPartName {
        configuration: ConfigurationName,
        name: String,
    },
}
