// src/cli.rs
//
// Headless directory lookups. The flags are applied as navigations on the
// same controller the GUI uses, so the printed link is exactly what the GUI
// would show for the same clicks.

use std::{env, error::Error, path::PathBuf};

use crate::config::{self, consts::CONFIG_FILE, options::{AppOptions, ExportFormat}};
use crate::core::Tier;
use crate::file;
use crate::link::{DeepLinkController, Location, MemoryHistory, NullHost};
use crate::link::state::parse_letter;
use crate::roster::StaffRecord;
use crate::store;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Table(ExportFormat),
}

#[derive(Clone, Debug)]
pub struct Params {
    pub config: PathBuf,
    pub roster: Option<PathBuf>,
    pub url: Option<String>,
    pub query: Option<String>,
    pub letter: Option<char>,
    pub open: Option<String>,
    pub format: OutputFormat,
    pub out: Option<PathBuf>,
    pub auto_open: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            config: PathBuf::from(CONFIG_FILE),
            roster: None,
            url: None,
            query: None,
            letter: None,
            open: None,
            format: OutputFormat::Text,
            out: None,
            auto_open: true,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_args(env::args().skip(1))?;
    let opts = config::file::load(&params.config);
    crate::log::set_level(opts.view.log_level);
    let out = execute(&params, &opts)?;
    print!("{out}");
    Ok(())
}

/// Run one lookup and render the output. Split from `run` for tests.
pub fn execute(params: &Params, opts: &AppOptions) -> Result<String, Box<dyn Error>> {
    let roster_path = params.roster.clone().unwrap_or_else(|| opts.source.roster_path.clone());
    let roster = store::load_roster(&roster_path)?;

    let history = MemoryHistory::new(Location::new(opts.link.base_path.clone()));
    let auto_open = params.auto_open && opts.link.auto_open;
    let mut ctl = DeepLinkController::with_auto_open(roster, history, NullHost, auto_open);

    if let Some(url) = &params.url {
        ctl.navigate(url).map_err(|e| format!("Bad --url {:?}: {}", url, e))?;
    }
    if let Some(q) = &params.query { ctl.set_query(q); }
    if params.letter.is_some() { ctl.set_letter(params.letter); }
    if let Some(id) = &params.open {
        if ctl.roster().get(id).is_none() {
            return Err(format!("No staff record with id {:?}", id).into());
        }
        ctl.open(id);
    }

    let view = ctl.view();
    if let Some(path) = &params.out {
        let fmt = match params.format {
            OutputFormat::Table(f) => f,
            OutputFormat::Text => file::format_for_path(path),
        };
        let written = file::write_export(path, &view, fmt)?;
        return Ok(format!("{}\nWrote {} record(s) to {}\n", ctl.location(), view.len(), written.display()));
    }

    let mut out = format!("{}\n", ctl.location());
    match params.format {
        OutputFormat::Table(fmt) => out.push_str(&file::to_export_string(&view, fmt)),
        OutputFormat::Text => {
            if view.is_empty() {
                out.push_str("\nNo matches\n");
            }
            for tier in Tier::ALL {
                let rows = view.tier(tier);
                if rows.is_empty() { continue; }
                out.push_str(&format!("\n{} ({})\n", tier.title(), rows.len()));
                for r in rows {
                    match r.subtitle() {
                        Some(sub) => out.push_str(&format!("  {:<28} {}\n", r.display_name(), sub)),
                        None => out.push_str(&format!("  {}\n", r.display_name())),
                    }
                }
            }
        }
    }
    if let Some(record) = ctl.current() {
        out.push_str(&profile_text(record));
    }
    Ok(out)
}

pub fn profile_text(r: &StaffRecord) -> String {
    let mut out = format!("\n== {} ==\n", r.display_name());
    let lines = [
        ("Role", r.role().map(String::from)),
        ("Department", r.department().map(String::from)),
        ("Email", r.mailto()),
        ("Phone", r.tel()),
        ("Photo", r.photo().map(String::from)),
    ];
    for (label, value) in lines {
        if let Some(v) = value {
            out.push_str(&format!("{label:<11} {v}\n"));
        }
    }
    out
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Params, Box<dyn Error>> {
    let mut params = Params::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--config" => params.config = PathBuf::from(args.next().ok_or("Missing config path")?),
            "--roster" => params.roster = Some(PathBuf::from(args.next().ok_or("Missing roster path")?)),
            "--url" => params.url = Some(args.next().ok_or("Missing value for --url")?),
            "-q" | "--query" => params.query = Some(args.next().ok_or("Missing value for --query")?),
            "-l" | "--letter" => {
                let v = args.next().ok_or("Missing value for --letter")?;
                let letter = parse_letter(&v).filter(|_| v.trim().chars().count() == 1);
                params.letter = Some(letter.ok_or_else(|| format!("Letter must be A-Z: {}", v))?);
            }
            "--open" => params.open = Some(args.next().ok_or("Missing value for --open")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "text" => OutputFormat::Text,
                    "csv" => OutputFormat::Table(ExportFormat::Csv),
                    "tsv" => OutputFormat::Table(ExportFormat::Tsv),
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--no-auto-open" => params.auto_open = false,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(params)
}
