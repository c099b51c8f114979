//! Arrow schema definition for the serial table.
//!
//! The output file carries exactly one non-nullable `Int32` column. Keeping
//! the schema this narrow is what lets the writer drive a single reusable
//! column buffer for every row group, and it is the contract
//! [`validate_serial_schema`] enforces before any byte is written.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema};

/// Column names as constants for type safety
pub mod columns {
    /// Sanitized, non-negative serial value
    pub const SERIAL: &str = "serial";
}

/// Errors raised when a schema violates the single-column serial contract.
///
/// Both variants are configuration defects, not recoverable runtime
/// conditions: the writer refuses to start rather than produce a file that
/// does not match the declared schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    /// The schema does not expose exactly one column.
    #[error("expected exactly 1 column, found {0}")]
    ColumnCountMismatch(usize),

    /// The serial column does not support bulk 32-bit integer writes.
    #[error("column {name:?} has type {actual}, expected Int32")]
    UnsupportedColumnType {
        /// Name of the offending column.
        name: String,
        /// The column's actual Arrow data type.
        actual: String,
    },
}

/// Create the Arrow schema for the serial table.
pub fn create_serial_schema() -> Schema {
    Schema::new(vec![Field::new(columns::SERIAL, DataType::Int32, false)])
}

/// Create the serial schema wrapped in an `Arc` for sharing with writers.
pub fn create_serial_schema_arc() -> Arc<Schema> {
    Arc::new(create_serial_schema())
}

/// Validate that a schema matches the single-column serial contract.
pub fn validate_serial_schema(schema: &Schema) -> Result<(), SchemaValidationError> {
    let fields = schema.fields();
    if fields.len() != 1 {
        return Err(SchemaValidationError::ColumnCountMismatch(fields.len()));
    }

    let field = schema.field(0);
    if field.data_type() != &DataType::Int32 {
        return Err(SchemaValidationError::UnsupportedColumnType {
            name: field.name().clone(),
            actual: field.data_type().to_string(),
        });
    }

    Ok(())
}
