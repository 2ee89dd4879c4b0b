/// One flattened image, optionally led by its source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub source: Option<String>,
    pub values: Vec<u8>,
}

impl Row {
    pub fn new(source: Option<String>, values: Vec<u8>) -> Self {
        Row { source, values }
    }

    /// Number of fields this row writes, path column included.
    pub fn len(&self) -> usize {
        self.values.len() + usize::from(self.source.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_record(&self) -> csv::StringRecord {
        let mut record = csv::StringRecord::with_capacity(self.values.len() * 4, self.len());
        if let Some(source) = &self.source {
            record.push_field(source);
        }
        for v in &self.values {
            record.push_field(&v.to_string());
        }
        record
    }
}
