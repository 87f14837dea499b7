//! Build script for lockscreen-fw
//!
//! - Validates ui.toml at compile time
//! - Generates `ui_config.rs` constants from it

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Panel width in pixels
const WIDTH: i64 = 128;

/// Panel height in pixels
const HEIGHT: i64 = 64;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let config = load_config();
    validate_config(&config);
    generate_constants(&config);
}

/// Read and parse ui.toml
fn load_config() -> toml::Value {
    println!("cargo:rerun-if-changed=ui.toml");

    let config_path = Path::new("ui.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: ui.toml not found!                                       ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a ui.toml configuration file.             ║\n\
            ║  Please create one in the lockscreen-fw directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read ui.toml                                   ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in ui.toml                           ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    }
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

/// Check every key, collecting all problems before failing
fn validate_config(config: &toml::Value) {
    let mut errors = Vec::new();

    match config.get("cursor") {
        Some(toml::Value::Table(cursor)) => {
            match number(cursor.get("pixels_per_second")) {
                Some(pps) if pps > 0.0 && pps.is_finite() => {}
                Some(_) => errors.push("[cursor] pixels_per_second must be > 0".to_string()),
                None => errors.push("[cursor] missing 'pixels_per_second'".to_string()),
            }
            check_int(&mut errors, cursor.get("start_x"), "[cursor] start_x", 0, WIDTH - 1);
            check_int(&mut errors, cursor.get("start_y"), "[cursor] start_y", 0, HEIGHT - 1);
        }
        _ => errors.push("Missing [cursor] section".to_string()),
    }

    match config.get("display") {
        Some(toml::Value::Table(display)) => {
            check_int(&mut errors, display.get("i2c_address"), "[display] i2c_address", 0x08, 0x77);
            check_int(
                &mut errors,
                display.get("i2c_frequency_hz"),
                "[display] i2c_frequency_hz",
                10_000,
                1_000_000,
            );
            check_int(&mut errors, display.get("contrast"), "[display] contrast", 0, 255);
        }
        _ => errors.push("Missing [display] section".to_string()),
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid ui.toml configuration                            ║\n\
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

    println!("cargo:warning=ui.toml validated successfully");
}

/// Integer or float as f64
fn number(value: Option<&toml::Value>) -> Option<f64> {
    match value {
        Some(toml::Value::Float(f)) => Some(*f),
        Some(toml::Value::Integer(i)) => Some(*i as f64),
        _ => None,
    }
}

fn check_int(errors: &mut Vec<String>, value: Option<&toml::Value>, what: &str, min: i64, max: i64) {
    match value {
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("{} must be {}-{}", what, min, max));
        }
        Some(_) => errors.push(format!("{} must be an integer", what)),
        None => errors.push(format!("{} is missing", what)),
    }
}

fn int(config: &toml::Value, section: &str, key: &str) -> i64 {
    config
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(toml::Value::as_integer)
        .unwrap_or_default()
}

/// Write `$OUT_DIR/ui_config.rs`
fn generate_constants(config: &toml::Value) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let pps = number(config.get("cursor").and_then(|c| c.get("pixels_per_second"))).unwrap_or(0.05);

    let source = format!(
        "// Generated from ui.toml by build.rs\n\
         pub const PIXELS_PER_SECOND: f32 = {:?};\n\
         pub const CURSOR_START: (u8, u8) = ({}, {});\n\
         pub const I2C_ADDRESS: u8 = {:#04x};\n\
         pub const I2C_FREQUENCY_HZ: u32 = {};\n\
         pub const CONTRAST: u8 = {:#04x};\n",
        pps,
        int(config, "cursor", "start_x"),
        int(config, "cursor", "start_y"),
        int(config, "display", "i2c_address"),
        int(config, "display", "i2c_frequency_hz"),
        int(config, "display", "contrast"),
    );

    fs::write(out_dir.join("ui_config.rs"), source).unwrap();
}
