use std::ffi::OsStr;
use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::error::ErrorKind;
use clap::{Arg, Command, Error};
use util::source::Source;

/// Parses a [`Source`] argument, requiring the file to exist.
///
/// Errors are reported by clap as usage errors, before any operation runs.
#[derive(Clone, Default)]
pub struct SourceParser {}

impl TypedValueParser for SourceParser {
    type Value = Source;

    fn parse_ref(&self, _cmd: &Command, _arg: Option<&Arg>, value: &OsStr) -> Result<Self::Value, Error> {
        let value = value
            .to_str()
            .ok_or_else(|| Error::raw(ErrorKind::InvalidValue, "Invalid argument encoding"))?;

        Source::try_from_path(PathBuf::from(value)).map_err(|error| Error::raw(ErrorKind::InvalidValue, error.to_string()))
    }
}

#[cfg(test)]
mod source_parser_tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_existing_file() {
        // given
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("parts.csv");

        let mut file = File::create(&path).unwrap();
        file.write_all(b"").unwrap();

        // and
        let cmd = Command::new("test");
        let parser = SourceParser::default();

        // when
        let result = parser.parse_ref(&cmd, None, path.as_os_str());

        // then
        assert!(matches!(result, Ok(source) if source.path() == path));
    }

    #[test]
    fn parse_missing_file() {
        // given
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.csv");

        // and
        let cmd = Command::new("test");
        let parser = SourceParser::default();

        // when
        let result = parser.parse_ref(&cmd, None, path.as_os_str());

        // then
        let error = result.unwrap_err();
        assert!(
            error
                .to_string()
                .contains("Path does not exist.")
        );
    }
}
