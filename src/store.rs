// src/store.rs
//
// Roster loading from a content-store export on disk. This is the only place
// the directory touches the outside world; everything downstream works on
// the in-memory `Roster`.

use std::{error::Error, fs, path::Path};

use serde::Deserialize;

use crate::csv::{parse_rows, split_header, Header};
use crate::roster::{Roster, StaffRecord};

/// Document-query APIs wrap results; plain exports are a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonExport {
    Records(Vec<StaffRecord>),
    Staff { staff: Vec<StaffRecord> },
    Result { result: Vec<StaffRecord> },
}

pub fn load_roster(path: &Path) -> Result<Roster, Box<dyn Error>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let text = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read roster {}: {}", path.display(), e))?;

    let records = match ext.as_str() {
        "json" => parse_json(&text)?,
        "csv" => parse_table(&text, ',')?,
        "tsv" => parse_table(&text, '\t')?,
        other => return Err(format!("Unsupported roster format: {:?}", other).into()),
    };

    logf!("Store: loaded {} record(s) from {}", records.len(), path.display());
    Ok(Roster::new(records))
}

pub fn parse_json(text: &str) -> Result<Vec<StaffRecord>, Box<dyn Error>> {
    let export: JsonExport = serde_json::from_str(text)?;
    Ok(match export {
        JsonExport::Records(r) => r,
        JsonExport::Staff { staff } => staff,
        JsonExport::Result { result } => result,
    })
}

struct Columns {
    id: usize,
    name: Option<usize>,
    role: Option<usize>,
    department: Option<usize>,
    team: Option<usize>,
    email: Option<usize>,
    phone: Option<usize>,
    photo: Option<usize>,
}

impl Columns {
    fn from_header(h: &Header) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: h.position(&["id", "_id"]).ok_or("Roster header has no id column")?,
            name: h.position(&["name", "full name"]),
            role: h.position(&["role", "job title", "title"]),
            department: h.position(&["department", "dept"]),
            team: h.position(&["team", "tier"]),
            email: h.position(&["email", "e-mail"]),
            phone: h.position(&["phone", "telephone"]),
            photo: h.position(&["photo", "image"]),
        })
    }
}

pub fn parse_table(text: &str, sep: char) -> Result<Vec<StaffRecord>, Box<dyn Error>> {
    let Some((header, rows)) = split_header(parse_rows(text, sep)) else {
        return Ok(Vec::new());
    };
    let cols = Columns::from_header(&header)?;
    let cell = |row: &[String], ix: Option<usize>| -> Option<String> {
        ix.and_then(|i| row.get(i)).map(|c| s!(c.trim())).filter(|c| !c.is_empty())
    };

    let mut out = Vec::with_capacity(rows.len());
    for (n, row) in rows.iter().enumerate() {
        if row.len() < header.len() {
            loge!("Store: row {} has {} of {} cells, skipping", n + 2, row.len(), header.len());
            continue;
        }
        let Some(id) = cell(row, Some(cols.id)) else {
            loge!("Store: row {} has no id, skipping", n + 2);
            continue;
        };
        let mut rec = StaffRecord::new(id, cell(row, cols.name).unwrap_or_default());
        if let Some(v) = cell(row, cols.role) { rec = rec.with_role(v); }
        if let Some(v) = cell(row, cols.department) { rec = rec.with_department(v); }
        if let Some(v) = cell(row, cols.team) { rec = rec.with_team(v); }
        if let Some(v) = cell(row, cols.email) { rec = rec.with_email(v); }
        if let Some(v) = cell(row, cols.phone) { rec = rec.with_phone(v); }
        if let Some(v) = cell(row, cols.photo) { rec = rec.with_photo(v); }
        out.push(rec);
    }
    Ok(out)
}
