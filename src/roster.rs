// src/roster.rs
//
// Staff records as exported by the content store, and the immutable roster
// built from them once per session.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::core::{classify, names, sanitize, NameParts, Tier};

/// One person. Read-only once loaded; build test fixtures with `new` + the
/// `with_*` methods.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StaffRecord {
    #[serde(default, alias = "_id")]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    photo: Option<String>,

    #[serde(skip)]
    derived: OnceLock<Derived>,
}

#[derive(Clone, Debug)]
struct Derived {
    parts: NameParts,
    search: String,
    sort_last: String,
    sort_first: String,
    tier: Tier,
}

impl PartialEq for StaffRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.role == other.role
            && self.department == other.department
            && self.team == other.team
            && self.email == other.email
            && self.phone == other.phone
            && self.photo == other.photo
    }
}

impl Eq for StaffRecord {}

impl StaffRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), ..Self::default() }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self.derived = OnceLock::new();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self.derived = OnceLock::new();
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self.derived = OnceLock::new();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn name(&self) -> &str { &self.name }

    // Blank strings from the content store count as absent.
    pub fn role(&self) -> Option<&str> { non_blank!(self.role) }
    pub fn department(&self) -> Option<&str> { non_blank!(self.department) }
    pub fn team(&self) -> Option<&str> { non_blank!(self.team) }
    pub fn email(&self) -> Option<&str> { non_blank!(self.email) }
    pub fn phone(&self) -> Option<&str> { non_blank!(self.phone) }
    pub fn photo(&self) -> Option<&str> { non_blank!(self.photo) }

    /// Name as shown: invisible characters cleaned, whitespace collapsed.
    pub fn display_name(&self) -> String {
        sanitize::normalize_ws(&sanitize::clean_invisible(&self.name))
    }

    /// "Role · Department", whichever halves exist.
    pub fn subtitle(&self) -> Option<String> {
        match (self.role(), self.department()) {
            (Some(r), Some(d)) => Some(format!("{r} · {d}")),
            (Some(r), None) => Some(s!(r)),
            (None, Some(d)) => Some(s!(d)),
            (None, None) => None,
        }
    }

    pub fn mailto(&self) -> Option<String> {
        self.email().map(|e| join!("mailto:", e))
    }

    pub fn tel(&self) -> Option<String> {
        self.phone()
            .map(sanitize::dial_string)
            .filter(|d| !d.is_empty())
            .map(|d| join!("tel:", &d))
    }

    fn derived(&self) -> &Derived {
        self.derived.get_or_init(|| {
            let parts = names::normalize(&self.name);
            let search = names::match_key(&format!(
                "{} {} {}",
                self.name,
                self.role().unwrap_or(""),
                self.department().unwrap_or(""),
            ));
            Derived {
                sort_last: parts.last.to_lowercase(),
                sort_first: parts.first.to_lowercase(),
                parts,
                search,
                tier: classify::classify(self),
            }
        })
    }

    pub fn name_parts(&self) -> &NameParts { &self.derived().parts }
    pub fn tier(&self) -> Tier { self.derived().tier }

    /// Lower-cased, accent-folded "name role department".
    pub fn search_key(&self) -> &str { &self.derived().search }

    /// (surname, given name), lower-cased and folded.
    pub fn sort_key(&self) -> (&str, &str) {
        let d = self.derived();
        (&d.sort_last, &d.sort_first)
    }
}

/// The full set of records for a session. Built once, never mutated.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    records: Vec<StaffRecord>,
    by_id: HashMap<String, usize>,
}

impl Roster {
    /// Records without an id are dropped; for duplicate ids the first wins.
    pub fn new(records: Vec<StaffRecord>) -> Self {
        let mut kept = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for mut record in records {
            let id = s!(record.id.trim());
            if id.is_empty() {
                loge!("Roster: dropping record without id ({:?})", record.name);
                continue;
            }
            if by_id.contains_key(&id) {
                loge!("Roster: duplicate id {:?}, keeping the first", id);
                continue;
            }
            record.id = id.clone();
            by_id.insert(id, kept.len());
            kept.push(record);
        }
        // Fill the derived cache now rather than on the first filter pass.
        for r in &kept {
            r.name_parts();
        }
        logd!("Roster: {} record(s)", kept.len());
        Self { records: kept, by_id }
    }

    pub fn records(&self) -> &[StaffRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn get(&self, id: &str) -> Option<&StaffRecord> {
        self.by_id.get(id).map(|&ix| &self.records[ix])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StaffRecord> {
        self.records.iter()
    }
}

impl FromIterator<StaffRecord> for Roster {
    fn from_iter<T: IntoIterator<Item = StaffRecord>>(iter: T) -> Self {
        Roster::new(iter.into_iter().collect())
    }
}
