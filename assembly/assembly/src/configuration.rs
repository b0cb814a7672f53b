use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use thiserror::Error;

#[derive(
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash
)]
pub struct ConfigurationName(String);

impl FromStr for ConfigurationName {
    type Err = ConfigurationNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ConfigurationName(s.to_string()))
    }
}

impl Display for ConfigurationName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<&str> for ConfigurationName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Deref for ConfigurationName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug, Error)]
#[error("Configuration name error")]
pub struct ConfigurationNameError;

/// A named selection of catalog parts describing one bicycle model.
///
/// An empty part-name list selects the entire catalog.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct BicycleConfiguration {
    pub name: ConfigurationName,
    pub part_names: Vec<String>,
}

impl BicycleConfiguration {
    pub fn new(name: ConfigurationName, part_names: Vec<String>) -> Self {
        Self {
            name,
            part_names,
        }
    }
}
