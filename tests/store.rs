// tests/store.rs
use std::fs;
use std::path::PathBuf;

use staff_directory::core::Tier;
use staff_directory::roster::Roster;
use staff_directory::store::{load_roster, parse_json, parse_table};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("staff_store_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn json_array_with_store_ids() {
    let text = r#"[
        {"_id": "abc123", "name": "Ahmed Khan", "role": "Site Manager", "team": "support"},
        {"_id": "def456", "name": "O'Brien, Seán", "role": "Teacher", "email": "sob@school.test"}
    ]"#;
    let roster = Roster::new(parse_json(text).unwrap());
    assert_eq!(roster.len(), 2);
    let khan = roster.get("abc123").unwrap();
    assert_eq!(khan.tier(), Tier::Support);
    let sean = roster.get("def456").unwrap();
    assert_eq!(sean.name_parts().first, "Sean");
    assert_eq!(sean.mailto().as_deref(), Some("mailto:sob@school.test"));
}

#[test]
fn json_wrapped_exports() {
    let staff = r#"{"staff": [{"id": "1", "name": "A B"}]}"#;
    let result = r#"{"result": [{"id": "1", "name": "A B"}, {"id": "2", "name": "C D"}]}"#;
    assert_eq!(parse_json(staff).unwrap().len(), 1);
    assert_eq!(parse_json(result).unwrap().len(), 2);
    assert!(parse_json(r#"{"people": []}"#).is_err());
}

#[test]
fn missing_blank_and_duplicate_ids_are_dropped() {
    let text = r#"[
        {"id": " 1 ", "name": "First"},
        {"name": "No Id"},
        {"id": "   ", "name": "Blank Id"},
        {"id": "1", "name": "Second"},
        {"id": "2", "name": "Other", "role": null}
    ]"#;
    let roster = Roster::new(parse_json(text).unwrap());
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get("1").unwrap().name(), "First");
    assert_eq!(roster.get("1").unwrap().id(), "1");
    assert!(roster.get("2").unwrap().role().is_none());
}

#[test]
fn csv_with_quoted_cells_and_header_aliases() {
    let text = "\u{FEFF}ID,Full Name,Job Title,Dept,Tier,E-mail\r\n\
                a1,\"Brown, Alice\",Headteacher,,,alice@school.test\r\n\
                \r\n\
                ,No Id,Teacher,,,\r\n\
                a2,Short Row\r\n\
                a3,Ben Lee,Teacher of Maths,Maths,,\r\n";
    let records = parse_table(text, ',').unwrap();
    let roster = Roster::new(records);
    assert_eq!(roster.len(), 2);
    let alice = roster.get("a1").unwrap();
    assert_eq!(alice.name_parts().last, "Brown");
    assert_eq!(alice.tier(), Tier::Leadership);
    assert!(alice.department().is_none());
    assert_eq!(roster.get("a3").unwrap().department(), Some("Maths"));
}

#[test]
fn table_without_id_column_is_an_error() {
    assert!(parse_table("name,role\nA,B\n", ',').is_err());
    assert!(parse_table("", ',').unwrap().is_empty());
}

#[test]
fn load_dispatches_on_extension() {
    let dir = tmp_dir("load");

    let json = dir.join("staff.json");
    fs::write(&json, r#"[{"id": "1", "name": "A B"}]"#).unwrap();
    assert_eq!(load_roster(&json).unwrap().len(), 1);

    let tsv = dir.join("staff.tsv");
    fs::write(&tsv, "id\tname\trole\n1\tA B\tLibrarian\n2\tC D\tTeacher\n").unwrap();
    let roster = load_roster(&tsv).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster.get("1").unwrap().tier(), Tier::Support);

    let txt = dir.join("staff.txt");
    fs::write(&txt, "whatever").unwrap();
    assert!(load_roster(&txt).is_err());

    assert!(load_roster(&dir.join("missing.json")).is_err());
}
