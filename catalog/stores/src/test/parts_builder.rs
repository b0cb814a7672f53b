use csv::QuoteStyle;

#[derive(Debug, serde::Serialize)]
#[serde(rename_all(serialize = "PascalCase"))]
pub struct TestPartDescriptorRecord {
    pub name: String,
    pub description: String,
    pub needs_spare: Option<bool>,
}

#[derive(Default)]
pub struct PartsCSVBuilder<'a> {
    records: Option<&'a [TestPartDescriptorRecord]>,
}

impl<'a> PartsCSVBuilder<'a> {
    pub fn as_string(&mut self) -> String {
        let content: Vec<u8> = vec![];

        let mut writer = csv::WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(content);

        if let Some(records) = self.records {
            for record in records.iter() {
                writer.serialize(record).unwrap();
            }
        }

        writer.flush().unwrap();

        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    pub fn with_items(mut self, records: &'a [TestPartDescriptorRecord]) -> Self {
        self.records = Some(records);
        self
    }

    pub fn new() -> Self {
        Default::default()
    }
}
