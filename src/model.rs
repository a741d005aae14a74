//! Credit roll data model: parsed input rows and the typed entry sequence
//! built from them.
//!
//! Building a [`CreditsTable`] is total-tolerance data transcription: it never
//! fails, and malformed rows degrade to empty-field entries. All derivation
//! logic lives in [`crate::planner`].

/// One parsed input record: field values keyed by column header, preserving
/// parse order. Column *position* is what binds a field to a meaning (columns
/// 0/1/2 are section/role/name); header names are never interpreted.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.push((key.into(), value.into()));
    }

    /// First value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Column keys in parse order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One renderable unit in the credits sequence.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreditEntry {
    /// Section header, emitted once per maximal run of rows sharing the same
    /// non-empty section value.
    Section { title: String },
    /// Role/name line, emitted for every input row. Fields may be empty.
    Line { role: String, name: String },
}

/// The finalized, ordered credit roll. Immutable once built; geometry
/// measurement and planning happen strictly after construction.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CreditsTable {
    /// Rendered first, unconditionally, even when empty.
    pub title: String,
    pub entries: Vec<CreditEntry>,
    /// Rendered last when present. An empty configured message is `None`.
    pub final_message: Option<String>,
}

impl CreditsTable {
    /// Transcribe parsed rows into an ordered entry sequence, grouping
    /// consecutive rows under section headers.
    ///
    /// The first row's first three column keys bind positionally to
    /// section/role/name; missing columns or fields read as `""`. A section
    /// header is emitted when the section value is non-empty and differs from
    /// the previous row's; every row emits a line entry regardless.
    pub fn build(rows: &[Row], title: impl Into<String>, final_message: &str) -> Self {
        let columns: Vec<String> = rows
            .first()
            .map(|r| r.keys().take(3).map(str::to_owned).collect())
            .unwrap_or_default();
        let field = |row: &Row, idx: usize| -> String {
            columns
                .get(idx)
                .and_then(|key| row.get(key))
                .unwrap_or_default()
                .to_string()
        };

        let mut entries = Vec::with_capacity(rows.len());
        let mut current_section: Option<String> = None;
        for row in rows {
            let section = field(row, 0);
            if !section.is_empty() && current_section.as_deref() != Some(section.as_str()) {
                entries.push(CreditEntry::Section {
                    title: section.clone(),
                });
                current_section = Some(section);
            }
            entries.push(CreditEntry::Line {
                role: field(row, 1),
                name: field(row, 2),
            });
        }

        Self {
            title: title.into(),
            entries,
            final_message: (!final_message.is_empty()).then(|| final_message.to_string()),
        }
    }

    pub fn has_final_message(&self) -> bool {
        self.final_message.is_some()
    }

    pub fn section_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, CreditEntry::Section { .. }))
            .count()
    }
}
