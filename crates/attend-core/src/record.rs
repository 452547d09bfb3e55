use std::borrow::Cow;

/// One attendance submission: who, from where, and when.
///
/// Records are immutable once created. The store never rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    /// Free-text submitter name, recorded verbatim.
    pub name: String,
    /// Normalized source address of the submitting request.
    pub address: String,
    /// Rendered submission timestamp, `DD-MM-YYYY HH:MM:SS`.
    pub timestamp: String,
}

impl AttendanceRecord {
    /// Create a record from already-derived fields.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Render the record as one newline-terminated CSV line.
    ///
    /// The name is user-supplied free text, so it is quoted RFC-4180 style
    /// whenever it contains a delimiter or quote. Address and timestamp are
    /// machine-derived and never contain delimiters, so they stay bare and
    /// plain names serialize to the exact `name,address,timestamp` form.
    pub fn as_line(&self) -> String {
        format!(
            "{},{},{}\n",
            escape_field(&self.name),
            self.address,
            self.timestamp
        )
    }
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
