// src/config/consts.rs

// Content store export
pub const DEFAULT_ROSTER: &str = "data/staff.json";

// Deep links
pub const DEFAULT_BASE_PATH: &str = "/staff";
pub const PARAM_QUERY: &str = "q";
pub const PARAM_LETTER: &str = "letter";
pub const PARAM_OPEN: &str = "open";
// Only used to give the url crate an absolute base when parsing relative hrefs.
pub const LINK_ORIGIN: &str = "http://localhost";

// Local files
pub const CONFIG_FILE: &str = "directory.cfg";
pub const LOG_DIR: &str = ".directory";
pub const LOG_FILE: &str = "debug.log";

// Window
pub const WINDOW_W: u32 = 1000;
pub const WINDOW_H: u32 = 720;
