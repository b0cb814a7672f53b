use anyhow::Error;
use bicycle::part::Part;
use csv::QuoteStyle;
use tracing::info;
use util::source::Source;

use crate::csv::SpareRecord;

pub type SparesSource = Source;

pub fn store_spares(source: &SparesSource, spare_parts: &[Part]) -> Result<(), Error> {
    info!("Storing spares listing. source: '{}'", source);

    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(source.path())?;

    for part in spare_parts {
        writer.serialize(SpareRecord {
            name: part.name.to_string(),
            description: part.description.to_string(),
        })?;
    }

    writer.flush()?;

    Ok(())
}
