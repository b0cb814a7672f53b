use bicycle::part::Part;
use thiserror::Error;

/// Declarative description of a single part.
///
/// `needs_spare` is optional in descriptions; an unspecified value resolves to `true`
/// when the descriptor is built into a [`Part`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct PartDescriptor {
    pub name: String,
    pub description: String,
    pub needs_spare: Option<bool>,
}

impl PartDescriptor {
    pub fn new(name: String, description: String, needs_spare: Option<bool>) -> Self {
        Self {
            name,
            description,
            needs_spare,
        }
    }

    pub fn build_part(&self) -> Result<Part, PartDescriptorError> {
        if self.name.is_empty() {
            return Err(PartDescriptorError::MissingName);
        }
        if self.description.is_empty() {
            return Err(PartDescriptorError::MissingDescription);
        }

        Ok(Part {
            name: self.name.clone(),
            description: self.description.clone(),
            needs_spare: self.needs_spare.unwrap_or(true),
        })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PartDescriptorError {
    #[error("Name must not be empty")]
    MissingName,
    #[error("Description must not be empty")]
    MissingDescription,
}

#[cfg(test)]
mod build_part_tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, true)]
    #[case(Some(true), true)]
    #[case(Some(false), false)]
    fn build_part_resolves_needs_spare(#[case] needs_spare: Option<bool>, #[case] expected_needs_spare: bool) {
        // given
        let descriptor = PartDescriptor::new("chain".to_string(), "10-speed".to_string(), needs_spare);

        // and
        let expected_part = Part::new("chain".to_string(), "10-speed".to_string(), expected_needs_spare);

        // when
        let part = descriptor.build_part().unwrap();

        // then
        assert_eq!(part, expected_part);
    }

    #[test]
    fn build_part_without_name() {
        // given
        let descriptor = PartDescriptor::new("".to_string(), "10-speed".to_string(), None);

        // when
        let result = descriptor.build_part();

        // then
        assert_eq!(result, Err(PartDescriptorError::MissingName));
    }

    #[test]
    fn build_part_without_description() {
        // given
        let descriptor = PartDescriptor::new("chain".to_string(), "".to_string(), None);

        // when
        let result = descriptor.build_part();

        // then
        assert_eq!(result, Err(PartDescriptorError::MissingDescription));
    }
}
