#![forbid(unsafe_code)]

//! Process configuration: small `parse_*` helpers over argv and env, checked
//! in order of precedence (flag, then env, then default).

use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "depot.db";
const DEFAULT_BIND: &str = "127.0.0.1:8000";

pub fn parse_db_path(args: &[String]) -> PathBuf {
    if let Some(value) = flag_value(args, "--db") {
        return PathBuf::from(strip_sqlite_scheme(&value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL")
        && !value.trim().is_empty()
    {
        return PathBuf::from(strip_sqlite_scheme(value.trim()));
    }
    PathBuf::from(DEFAULT_DB_PATH)
}

pub fn parse_bind_addr(args: &[String]) -> String {
    if let Some(value) = flag_value(args, "--bind") {
        return value;
    }
    if let Ok(value) = std::env::var("DEPOT_BIND")
        && !value.trim().is_empty()
    {
        return value.trim().to_string();
    }
    DEFAULT_BIND.to_string()
}

pub fn parse_seed_demo(args: &[String]) -> bool {
    args.iter().any(|arg| arg == "--seed-demo")
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == flag {
            return iter.next().cloned();
        }
        if let Some(rest) = arg.strip_prefix(flag)
            && let Some(value) = rest.strip_prefix('=')
        {
            return Some(value.to_string());
        }
    }
    None
}

/// `DATABASE_URL` may carry a `sqlite://` scheme; the store wants a bare path.
fn strip_sqlite_scheme(value: &str) -> &str {
    value
        .strip_prefix("sqlite://")
        .or_else(|| value.strip_prefix("sqlite:"))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn db_flag_beats_default() {
        let parsed = parse_db_path(&args(&["depot_api", "--db", "/tmp/inventory.db"]));
        assert_eq!(parsed, PathBuf::from("/tmp/inventory.db"));
    }

    #[test]
    fn db_flag_accepts_equals_form() {
        let parsed = parse_db_path(&args(&["depot_api", "--db=/tmp/a.db"]));
        assert_eq!(parsed, PathBuf::from("/tmp/a.db"));
    }

    #[test]
    fn sqlite_scheme_is_stripped() {
        assert_eq!(strip_sqlite_scheme("sqlite:///var/depot.db"), "/var/depot.db");
        assert_eq!(strip_sqlite_scheme("sqlite:depot.db"), "depot.db");
        assert_eq!(strip_sqlite_scheme("plain.db"), "plain.db");
    }

    #[test]
    fn bind_flag_beats_default() {
        assert_eq!(
            parse_bind_addr(&args(&["depot_api", "--bind", "0.0.0.0:9100"])),
            "0.0.0.0:9100"
        );
        assert_eq!(parse_bind_addr(&args(&["depot_api"])), DEFAULT_BIND);
    }

    #[test]
    fn seed_demo_flag_is_detected() {
        assert!(parse_seed_demo(&args(&["depot_api", "--seed-demo"])));
        assert!(!parse_seed_demo(&args(&["depot_api"])));
    }
}
