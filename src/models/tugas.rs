use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tugas {
    #[serde(rename = "_id")]
    pub id: String,
    pub mata_kuliah: String,
    pub tugas_ke: i64,
    pub tenggat_kumpul: String,
}

impl Tugas {
    /// Due date as `DD/MM/YYYY`, or the raw value when it is not a recognisable date.
    pub fn due_date_label(&self) -> String {
        parse_due_date(&self.tenggat_kumpul)
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| self.tenggat_kumpul.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TugasRequest {
    pub mata_kuliah: String,
    pub tugas_ke: i64,
    pub tenggat_kumpul: String,
}

fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // e.g. "2024-05-01T00:00:00" without an offset
    raw.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}
