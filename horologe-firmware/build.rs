//! Build script for horologe-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates clock.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys accepted per section, mirrored by the firmware's own parser
const DISPLAY_KEYS: &[&str] = &[
    "backlight",
    "foreground",
    "background",
    "text_x",
    "text_y",
    "wrap_width",
    "scale",
    "colon_offset_x",
];
const INPUT_KEYS: &[&str] = &["debounce_ms", "poll_ms", "active_low"];
const RENDER_KEYS: &[&str] = &["blink_ms", "marker", "marker_suffix", "marker_enabled"];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate clock.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=clock.toml");

    let config_path = Path::new("clock.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: clock.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds clock.toml at build time.                   ║\n\
            ║  Please create one in the horologe-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read clock.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in clock.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_input(&config, &mut errors);
    validate_render(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid clock configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=clock.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only known sections and keys; no top-level keys
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(root) = config.as_table() else {
        return;
    };

    for (name, value) in root {
        let allowed = match name.as_str() {
            "display" => DISPLAY_KEYS,
            "input" => INPUT_KEYS,
            "render" => RENDER_KEYS,
            _ => {
                errors.push(format!("unknown section or key '{}'", name));
                continue;
            }
        };

        let Some(table) = value.as_table() else {
            errors.push(format!("[{}] must be a table", name));
            continue;
        };

        for key in table.keys() {
            if !allowed.contains(&key.as_str()) {
                errors.push(format!("[{}] unknown key '{}'", name, key));
            }
        }
    }
}

fn section<'a>(config: &'a toml::Value, name: &str) -> Option<&'a toml::value::Table> {
    config.get(name).and_then(|v| v.as_table())
}

fn check_int(
    table: &toml::value::Table,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(n)) if (min..=max).contains(n) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

fn check_bool(table: &toml::value::Table, section: &str, key: &str, errors: &mut Vec<String>) {
    if let Some(value) = table.get(key) {
        if !value.is_bool() {
            errors.push(format!("[{}] {} must be true or false", section, key));
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    let hex = s.strip_prefix('#').unwrap_or(s);
    hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_marker_time(s: &str) -> bool {
    let Some((h, m)) = s.split_once(':') else {
        return false;
    };
    if h.len() != 2 || m.len() != 2 || !h.chars().chain(m.chars()).all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(
        (h.parse::<u8>(), m.parse::<u8>()),
        (Ok(h), Ok(m)) if h < 24 && m < 60
    )
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = section(config, "display") else {
        return;
    };

    check_int(display, "display", "backlight", 0, 255, errors);
    check_int(display, "display", "text_x", -240, 240, errors);
    check_int(display, "display", "text_y", -135, 135, errors);
    check_int(display, "display", "wrap_width", 1, 240, errors);
    check_int(display, "display", "scale", 1, 16, errors);
    check_int(display, "display", "colon_offset_x", -240, 240, errors);

    for key in ["foreground", "background"] {
        match display.get(key) {
            None => {}
            Some(toml::Value::String(s)) if is_hex_color(s) => {}
            Some(_) => errors.push(format!("[display] {} must be \"#RRGGBB\"", key)),
        }
    }
}

fn validate_input(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(input) = section(config, "input") else {
        return;
    };

    check_int(input, "input", "debounce_ms", 0, 1000, errors);
    check_int(input, "input", "poll_ms", 1, 100, errors);
    check_bool(input, "input", "active_low", errors);
}

fn validate_render(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(render) = section(config, "render") else {
        return;
    };

    check_int(render, "render", "blink_ms", 1, 10_000, errors);
    check_bool(render, "render", "marker_enabled", errors);

    match render.get("marker") {
        None => {}
        Some(toml::Value::String(s)) if is_marker_time(s) => {}
        Some(_) => errors.push("[render] marker must be \"HH:MM\" (24-hour)".to_string()),
    }

    match render.get("marker_suffix") {
        None => {}
        Some(toml::Value::String(s)) if s.len() <= 4 => {}
        Some(_) => errors.push("[render] marker_suffix must be a string of at most 4 bytes".to_string()),
    }
}
