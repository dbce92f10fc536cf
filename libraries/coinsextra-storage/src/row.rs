//! Dynamic `SQLite` row to JSON conversion
//!
//! Rows come from wildcard projections, so columns are only known at runtime.
//! Values map by their storage class: INTEGER to a JSON integer, REAL to a
//! JSON number (`null` if not finite), TEXT to a string, BLOB to an array of
//! byte values and NULL to `null`.

use crate::StorageError;
use coinsextra_core::Row;
use serde_json::{Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row as _, TypeInfo, ValueRef};

pub(crate) fn to_json(row: &SqliteRow) -> Result<Row, StorageError> {
    let mut object = Row::with_capacity(row.columns().len());

    for column in row.columns() {
        let value = column_value(row, column.ordinal(), column.name())?;
        object.insert(column.name().to_string(), value);
    }

    Ok(object)
}

fn column_value(row: &SqliteRow, index: usize, name: &str) -> Result<Value, StorageError> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let type_name = raw.type_info().name().to_string();
    let value = match type_name.as_str() {
        "INTEGER" => Value::from(row.try_get::<i64, _>(index)?),
        "REAL" => Number::from_f64(row.try_get::<f64, _>(index)?)
            .map_or(Value::Null, Value::Number),
        "TEXT" => Value::String(row.try_get::<String, _>(index)?),
        "BLOB" => Value::from(row.try_get::<Vec<u8>, _>(index)?),
        other => {
            return Err(StorageError::decode(
                name,
                format!("unsupported storage class {other}"),
            ))
        }
    };

    Ok(value)
}
