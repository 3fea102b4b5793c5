use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One record of the sample pipeline input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub value: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, value: i64) -> Self {
        Self {
            id,
            name: name.into(),
            value,
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}

/// Row shape of the pipeline's `data.csv`; `mode` is not a column.
#[derive(Debug, Serialize)]
pub struct ItemRow<'a> {
    pub id: i64,
    pub name: &'a str,
    pub value: i64,
}

impl<'a> From<&'a Item> for ItemRow<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            id: item.id,
            name: &item.name,
            value: item.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PipelineInput {
    Many(Vec<Item>),
    One(Item),
}

impl PipelineInput {
    pub fn record_count(&self) -> usize {
        match self {
            PipelineInput::Many(items) => items.len(),
            PipelineInput::One(_) => 1,
        }
    }

    pub fn items(&self) -> &[Item] {
        match self {
            PipelineInput::Many(items) => items,
            PipelineInput::One(item) => std::slice::from_ref(item),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedData {
    pub input: PipelineInput,
    pub processed_at: String,
    pub status: String,
    pub record_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub processed: bool,
    pub count: u32,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Int(Vec<i64>),
    Text(Vec<String>),
}

impl ColumnValues {
    fn len(&self) -> usize {
        match self {
            ColumnValues::Int(values) => values.len(),
            ColumnValues::Text(values) => values.len(),
        }
    }

    /// Type label as the harness expects it in `summary.json`.
    pub fn dtype(&self) -> &'static str {
        match self {
            ColumnValues::Int(_) => "int64",
            ColumnValues::Text(_) => "object",
        }
    }

    pub fn cell(&self, row: usize) -> Option<String> {
        match self {
            ColumnValues::Int(values) => values.get(row).map(|v| v.to_string()),
            ColumnValues::Text(values) => values.get(row).cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: ColumnValues,
}

/// Column-ordered table. Every column has the same length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, name: impl Into<String>, values: ColumnValues) -> Self {
        self.columns.push(Column {
            name: name.into(),
            values,
        });
        self
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn rows(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        (0..self.row_count()).map(move |row| {
            self.columns
                .iter()
                .map(|c| c.values.cell(row).unwrap_or_default())
                .collect()
        })
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            row_count: self.row_count(),
            column_count: self.columns.len(),
            columns: self.column_names(),
            dtypes: self
                .columns
                .iter()
                .map(|c| (c.name.clone(), c.values.dtype().to_string()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<String>,
    /// Column name to type label, in column order.
    #[serde(serialize_with = "serialize_pairs")]
    pub dtypes: Vec<(String, String)>,
}

fn serialize_pairs<S: Serializer>(
    pairs: &[(String, String)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(pairs.len()))?;
    for (key, value) in pairs {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
