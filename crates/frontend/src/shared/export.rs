//! CSV encoding and browser download.
//!
//! Every field is quoted, including the header, and inner quotes are doubled.
//! Rows are joined with `\n` without a trailing newline.

use chrono::{DateTime, SecondsFormat, Utc};
use contracts::domain::a002_registration::RegistrationExportRow;
use serde_json::{Map, Value};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const CSV_MIME: &str = "text/csv;charset=utf-8;";

/// A record with named fields. All records passed to one `encode_csv` call
/// are expected to have the same keys.
pub trait CsvRecord {
    /// Field names in their natural order
    fn keys(&self) -> Vec<&str>;

    /// Text of a field; `None` for absent or null values
    fn value(&self, key: &str) -> Option<String>;
}

impl CsvRecord for RegistrationExportRow {
    fn keys(&self) -> Vec<&str> {
        Self::HEADERS.to_vec()
    }

    fn value(&self, key: &str) -> Option<String> {
        Self::HEADERS
            .iter()
            .position(|h| *h == key)
            .map(|i| self.values()[i].to_string())
    }
}

impl CsvRecord for Map<String, Value> {
    fn keys(&self) -> Vec<&str> {
        Map::keys(self).map(String::as_str).collect()
    }

    fn value(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// Encodes records as CSV text. An empty slice yields an empty string,
/// which callers treat as "nothing to export".
pub fn encode_csv<R: CsvRecord>(rows: &[R]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };
    let keys = first.keys();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        keys.iter()
            .map(|k| quote_csv_cell(k))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            keys.iter()
                .map(|k| quote_csv_cell(&row.value(k).unwrap_or_default()))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

/// Оборачивает ячейку в кавычки, удваивая кавычки внутри значения
fn quote_csv_cell(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Encoded CSV ready to be offered as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    pub filename: String,
    pub content: String,
}

/// `<prefix>-2026-10-19T12:00:00.000Z.csv`
pub fn export_filename(prefix: &str, now: DateTime<Utc>) -> String {
    format!(
        "{}-{}.csv",
        prefix,
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Инициирует скачивание CSV файла через браузер
pub fn download_csv(file: &CsvFile) -> Result<(), String> {
    let blob = create_csv_blob(&file.content)?;
    download_blob(&blob, &file.filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(CSV_MIME);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
