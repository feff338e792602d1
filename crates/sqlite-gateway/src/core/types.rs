use std::collections::{BTreeMap, HashMap};

use base64::Engine as _;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::error::{AppError, AppResult};

/// One cell of a result row.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    /// Text stored in a column declared as a date/time type.
    Temporal(String),
    Blob(Vec<u8>),
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Integer(x) => serializer.serialize_i64(*x),
            Value::Real(x) => serializer.serialize_f64(*x),
            Value::Text(s) | Value::Temporal(s) => serializer.serialize_str(s),
            Value::Blob(b) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("$type", "blob")?;
                map.serialize_entry(
                    "base64",
                    &base64::engine::general_purpose::STANDARD.encode(b),
                )?;
                map.serialize_entry("size", &b.len())?;
                map.end()
            }
        }
    }
}

pub type DbRow = HashMap<String, Value>;

/// SQL text accepted for execution: trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement(String);

impl Statement {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let sql = raw.trim();
        if sql.is_empty() {
            return Err(AppError::EmptyQuery);
        }
        Ok(Self(sql.to_string()))
    }

    pub fn sql(&self) -> &str {
        &self.0
    }

    /// Only statements starting with `SELECT` produce a projection.
    pub fn is_read(&self) -> bool {
        self.0.to_uppercase().starts_with("SELECT")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MutationSummary {
    pub affected_rows: u64,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    Projection { columns: Vec<String>, rows: Vec<DbRow> },
    Mutation(MutationSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EnvelopeData {
    Rows(Vec<DbRow>),
    Summary(MutationSummary),
}

/// Uniform body returned for every execute call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<EnvelopeData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResponseEnvelope {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            columns: None,
            error: Some(error.into()),
        }
    }
}

impl From<ExecutionResult> for ResponseEnvelope {
    fn from(result: ExecutionResult) -> Self {
        let (data, columns) = match result {
            ExecutionResult::Projection { columns, rows } => (EnvelopeData::Rows(rows), columns),
            ExecutionResult::Mutation(summary) => (EnvelopeData::Summary(summary), Vec::new()),
        };
        Self {
            success: true,
            data: Some(data),
            columns: Some(columns),
            error: None,
        }
    }
}

impl From<AppError> for ResponseEnvelope {
    fn from(e: AppError) -> Self {
        Self::failure(e.client_message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub decl_type: String,
    pub nullable: bool,
    pub primary_key: bool,
}

/// Table name to columns in declaration order.
pub type SchemaDescription = BTreeMap<String, Vec<ColumnInfo>>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<AppResult<SchemaDescription>> for SchemaResponse {
    fn from(res: AppResult<SchemaDescription>) -> Self {
        match res {
            Ok(schema) => Self {
                success: true,
                schema: Some(schema),
                error: None,
            },
            Err(e) => Self {
                success: false,
                schema: None,
                error: Some(e.client_message()),
            },
        }
    }
}
