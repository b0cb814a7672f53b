use anyhow::{Context, Error};
use catalog::descriptor::PartDescriptor;
use tracing::Level;
use tracing::{info, trace};
use util::source::Source;

use crate::csv::PartDescriptorRecord;

pub type PartsSource = Source;

#[tracing::instrument(level = Level::DEBUG)]
pub fn load_part_descriptors(source: &PartsSource) -> Result<Vec<PartDescriptor>, Error> {
    info!("Loading part descriptors. source: {}", source);

    let path = source.path();

    let mut csv_reader = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("Error reading part descriptors. file: {}", path.display()))?;

    let mut descriptors: Vec<PartDescriptor> = vec![];

    for result in csv_reader.deserialize() {
        let record: PartDescriptorRecord =
            result.with_context(|| "Deserializing part descriptor record".to_string())?;

        trace!("{:?}", record);

        let descriptor = record.build_part_descriptor();

        descriptors.push(descriptor);
    }
    Ok(descriptors)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use tempfile::tempdir;
    use util::test::{build_temp_csv_file, dump_file};

    use super::*;
    use crate::test::parts_builder::{PartsCSVBuilder, TestPartDescriptorRecord};

    #[test]
    fn test_load_part_descriptors() -> Result<(), anyhow::Error> {
        // given
        let temp_dir = tempdir()?;

        // and
        let (test_parts_path, _test_parts_file_name) = build_temp_csv_file(&temp_dir, "parts");
        let parts_source = PartsSource::from_absolute_path(test_parts_path.clone())?;

        let content = PartsCSVBuilder::new()
            .with_items(&[
                TestPartDescriptorRecord {
                    name: "chain".to_string(),
                    description: "10-speed".to_string(),
                    needs_spare: None,
                },
                TestPartDescriptorRecord {
                    name: "front_shock".to_string(),
                    description: "Manitou".to_string(),
                    needs_spare: Some(false),
                },
            ])
            .as_string();

        let mut parts_file = File::create(&test_parts_path)?;
        parts_file.write_all(content.as_bytes())?;

        dump_file("parts", test_parts_path)?;

        // and
        let expected_descriptors = vec![
            PartDescriptor::new("chain".to_string(), "10-speed".to_string(), None),
            PartDescriptor::new("front_shock".to_string(), "Manitou".to_string(), Some(false)),
        ];

        // when
        let descriptors = load_part_descriptors(&parts_source)?;

        // then
        assert_eq!(descriptors, expected_descriptors);

        Ok(())
    }

    #[test]
    fn test_load_part_descriptors_from_missing_file() -> Result<(), anyhow::Error> {
        // given
        let temp_dir = tempdir()?;

        let (test_parts_path, _test_parts_file_name) = build_temp_csv_file(&temp_dir, "missing");
        let parts_source: PartsSource = test_parts_path
            .to_str()
            .unwrap()
            .parse()?;

        // when
        let result = load_part_descriptors(&parts_source);

        // then
        let message = format!("{:?}", result.unwrap_err());
        assert!(message.contains("Error reading part descriptors."));

        Ok(())
    }
}
