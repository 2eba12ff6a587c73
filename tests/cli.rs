// tests/cli.rs
use std::fs;
use std::path::{Path, PathBuf};

use staff_directory::cli::{execute, parse_args, OutputFormat, Params};
use staff_directory::config::options::{AppOptions, ExportFormat};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("staff_cli_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn roster_file(dir: &Path) -> PathBuf {
    let path = dir.join("staff.json");
    fs::write(
        &path,
        r#"{"staff": [
            {"_id": "1", "name": "Zara Ahmed", "role": "Teacher", "department": "Science"},
            {"_id": "abc123", "name": "Ahmed Khan", "role": "Site Manager", "team": "support",
             "email": "a.khan@school.test", "phone": "+44 (0)1234 567 890"},
            {"_id": "3", "name": "Alice Brown", "role": "Headteacher"}
        ]}"#,
    )
    .unwrap();
    path
}

fn args(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parses_flags() {
    let p = parse_args(args(&[
        "--roster", "r.csv", "-q", "khan", "-l", "k", "--open", "abc123",
        "--format", "TSV", "-o", "out/x.tsv", "--no-auto-open",
    ]))
    .unwrap();
    assert_eq!(p.roster, Some(PathBuf::from("r.csv")));
    assert_eq!(p.query.as_deref(), Some("khan"));
    assert_eq!(p.letter, Some('K'));
    assert_eq!(p.open.as_deref(), Some("abc123"));
    assert_eq!(p.format, OutputFormat::Table(ExportFormat::Tsv));
    assert_eq!(p.out, Some(PathBuf::from("out/x.tsv")));
    assert!(!p.auto_open);
}

#[test]
fn rejects_bad_flags() {
    assert!(parse_args(args(&["--bogus"])).is_err());
    assert!(parse_args(args(&["-l", "ab"])).is_err());
    assert!(parse_args(args(&["-l", "7"])).is_err());
    assert!(parse_args(args(&["--format", "xml"])).is_err());
    assert!(parse_args(args(&["-q"])).is_err());
}

#[test]
fn single_match_prints_link_and_profile() {
    let dir = tmp_dir("single");
    let params = Params {
        roster: Some(roster_file(&dir)),
        query: Some("khan".into()),
        ..Params::default()
    };
    let out = execute(&params, &AppOptions::default()).unwrap();
    let first = out.lines().next().unwrap();
    assert_eq!(first, "/staff?q=khan&open=abc123");
    assert!(out.contains("Support Staff (1)"));
    assert!(out.contains("== Ahmed Khan =="));
    assert!(out.contains("mailto:a.khan@school.test"));
    assert!(out.contains("tel:+4401234567890"));
}

#[test]
fn no_auto_open_and_letter_keep_profile_closed() {
    let dir = tmp_dir("closed");
    let params = Params {
        roster: Some(roster_file(&dir)),
        query: Some("khan".into()),
        auto_open: false,
        ..Params::default()
    };
    let out = execute(&params, &AppOptions::default()).unwrap();
    assert!(out.starts_with("/staff?q=khan\n"));
    assert!(!out.contains("=="));

    let params = Params {
        roster: Some(roster_file(&dir)),
        url: Some("/staff?q=ahmed&letter=k".into()),
        ..Params::default()
    };
    let out = execute(&params, &AppOptions::default()).unwrap();
    assert!(out.starts_with("/staff?q=ahmed&letter=k\n"));
    assert!(!out.contains("=="));
}

#[test]
fn empty_result_says_so() {
    let dir = tmp_dir("empty");
    let params = Params {
        roster: Some(roster_file(&dir)),
        query: Some("nobody".into()),
        ..Params::default()
    };
    let out = execute(&params, &AppOptions::default()).unwrap();
    assert!(out.contains("No matches"));
}

#[test]
fn unknown_open_id_is_an_error() {
    let dir = tmp_dir("unknown");
    let params = Params {
        roster: Some(roster_file(&dir)),
        open: Some("nope".into()),
        ..Params::default()
    };
    assert!(execute(&params, &AppOptions::default()).is_err());
}

#[test]
fn export_writes_visible_rows_in_tier_order() {
    let dir = tmp_dir("export");
    let out_path = dir.join("nested").join("staff.csv");
    let params = Params {
        roster: Some(roster_file(&dir)),
        out: Some(out_path.clone()),
        ..Params::default()
    };
    let msg = execute(&params, &AppOptions::default()).unwrap();
    assert!(msg.contains("Wrote 3 record(s)"));

    let text = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Tier,Name,Role,Department,Email,Phone");
    assert!(lines[1].starts_with("Senior Leadership,Alice Brown,"));
    assert!(lines[2].starts_with("Teaching Staff,Zara Ahmed,"));
    assert!(lines[3].starts_with("Support Staff,Ahmed Khan,"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn table_format_on_stdout() {
    let dir = tmp_dir("tsv");
    let params = Params {
        roster: Some(roster_file(&dir)),
        letter: Some('Z'),
        format: OutputFormat::Table(ExportFormat::Tsv),
        ..Params::default()
    };
    let out = execute(&params, &AppOptions::default()).unwrap();
    assert!(out.starts_with("/staff?letter=Z\n"));
    assert!(out.contains("Teaching Staff\tZara Ahmed\tTeacher\tScience"));
}

#[test]
fn config_base_path_and_auto_open_apply() {
    let dir = tmp_dir("config");
    let mut opts = AppOptions::default();
    opts.link.base_path = "/people".into();
    opts.link.auto_open = false;
    let params = Params {
        roster: Some(roster_file(&dir)),
        query: Some("khan".into()),
        ..Params::default()
    };
    let out = execute(&params, &opts).unwrap();
    assert!(out.starts_with("/people?q=khan\n"));
}
