//! Minimal TOML reader for `clock.toml`
//!
//! Handles only the subset the clock configuration uses. It does NOT
//! support the full TOML grammar.
//!
//! Supported:
//! - `[section]` headers
//! - `key = value` pairs (string, integer, boolean)
//! - Comments (`# ...`), including trailing comments
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings and escapes
//! - Dotted keys

use horologe_display::Color;

use super::types::ClockConfig;
use crate::render::MarkerTime;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid in the current section
    UnknownKey,
    /// Line is neither a header nor `key = value`
    InvalidLine,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// String longer than its field allows
    TooLong,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Input,
    Render,
}

/// Parse TOML text into a `ClockConfig`
///
/// Keys that are absent keep their defaults.
pub fn parse_config(input: &str) -> Result<ClockConfig, ParseError> {
    let mut config = ClockConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ParseError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "display" => Ok(Section::Display),
        "input" => Ok(Section::Input),
        "render" => Ok(Section::Render),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Cut a trailing `# comment` unless the `#` sits inside a string
fn strip_comment(text: &str) -> &str {
    let mut in_string = false;
    for (i, c) in text.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return text[..i].trim_end(),
            _ => {}
        }
    }
    text
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(line[eq_pos + 1..].trim());

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a `"#RRGGBB"` colour
fn parse_color(value: &str) -> Result<Color, ParseError> {
    Color::from_hex(parse_string(value)?).ok_or(ParseError::InvalidValue)
}

/// Parse a positive integer (zero would stall a timer or erase the text)
fn parse_nonzero<T: core::str::FromStr + Default + PartialEq>(value: &str) -> Result<T, ParseError> {
    let n: T = parse_int(value)?;
    if n == T::default() {
        return Err(ParseError::InvalidValue);
    }
    Ok(n)
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut ClockConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => return Err(ParseError::UnknownKey),
        Section::Display => {
            let d = &mut config.display;
            match key {
                "backlight" => d.backlight = parse_int(value)?,
                "foreground" => d.foreground = parse_color(value)?,
                "background" => d.background = parse_color(value)?,
                "text_x" => d.text_x = parse_int(value)?,
                "text_y" => d.text_y = parse_int(value)?,
                "wrap_width" => d.wrap_width = parse_nonzero(value)?,
                "scale" => d.scale = parse_nonzero(value)?,
                "colon_offset_x" => d.colon_offset_x = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Input => {
            let i = &mut config.input;
            match key {
                "debounce_ms" => i.debounce_ms = parse_int(value)?,
                "poll_ms" => i.poll_ms = parse_nonzero(value)?,
                "active_low" => i.active_low = parse_bool(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
        Section::Render => {
            let r = &mut config.render;
            match key {
                "blink_ms" => r.blink_ms = parse_nonzero(value)?,
                "marker" => {
                    r.marker =
                        MarkerTime::parse(parse_string(value)?).ok_or(ParseError::InvalidValue)?
                }
                "marker_suffix" => {
                    let suffix = parse_string(value)?;
                    r.marker_suffix.clear();
                    r.marker_suffix
                        .push_str(suffix)
                        .map_err(|_| ParseError::TooLong)?;
                }
                "marker_enabled" => r.marker_enabled = parse_bool(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config("").unwrap(), ClockConfig::default());
        assert_eq!(
            parse_config("# only a comment\n\n").unwrap(),
            ClockConfig::default()
        );
    }

    #[test]
    fn test_parse_key_value_strips_comments() {
        assert_eq!(parse_key_value("scale = 4 # big"), Some(("scale", "4")));
        assert_eq!(
            parse_key_value("marker_suffix = \"#\" # hash"),
            Some(("marker_suffix", "\"#\""))
        );
        assert_eq!(parse_key_value("scale ="), None);
        assert_eq!(parse_key_value("no equals"), None);
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r##"
# Pico Display layout
[display]
backlight = 200
foreground = "#FFFF00"
background = "#000000"
text_x = 10
text_y = 30
wrap_width = 240
scale = 5
colon_offset_x = -2

[input]
debounce_ms = 80
poll_ms = 10
active_low = false

[render]
blink_ms = 250
marker = "07:30"
marker_suffix = "*"
marker_enabled = true
"##;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.display.backlight, 200);
        assert_eq!(config.display.foreground, Color::YELLOW);
        assert_eq!(config.display.text_x, 10);
        assert_eq!(config.display.scale, 5);
        assert_eq!(config.display.colon_offset_x, -2);
        assert_eq!(config.input.debounce_ms, 80);
        assert_eq!(config.input.poll_ms, 10);
        assert!(!config.input.active_low);
        assert_eq!(config.render.blink_ms, 250);
        assert_eq!(config.render.marker, MarkerTime::parse("07:30").unwrap());
        assert_eq!(config.render.marker_suffix.as_str(), "*");
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = parse_config("[render]\nmarker_enabled = false\n").unwrap();
        assert!(!config.render.marker_enabled);
        assert_eq!(config.render.blink_ms, 500);
        assert_eq!(config.display, ClockConfig::default().display);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_config("[stepper]"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("[display"), Err(ParseError::InvalidSection));
        assert_eq!(parse_config("scale = 3"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("[display]\nzoom = 3"), Err(ParseError::UnknownKey));
        assert_eq!(parse_config("[display]\njunk"), Err(ParseError::InvalidLine));
        assert_eq!(
            parse_config("[display]\nbacklight = 300"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[display]\nscale = 0"), Err(ParseError::InvalidValue));
        assert_eq!(
            parse_config("[display]\nforeground = \"green\""),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[render]\nmarker = \"25:00\""),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[render]\nmarker_suffix = \"toolong\""),
            Err(ParseError::TooLong)
        );
        assert_eq!(
            parse_config("[input]\nactive_low = yes"),
            Err(ParseError::InvalidValue)
        );
    }
}
