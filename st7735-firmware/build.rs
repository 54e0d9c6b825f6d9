//! Build script for st7735-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml and compiles it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    generate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Resolved display.toml contents
struct DisplayToml {
    variant: &'static str,
    width: u16,
    height: u16,
    offsets: Option<(u16, u16)>,
    backlight: Option<&'static str>,
    frequency_hz: u32,
    max_chunk_bytes: Option<u16>,
}

/// Validate display.toml and write `display_config.rs` into OUT_DIR
fn generate_config() {
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file.        ║\n\
            ║  Please create one in the st7735-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in display.toml                      ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let display = match validate(&config) {
        Ok(display) => display,
        Err(errors) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid display configuration                            ║\n\
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
    };

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    fs::write(out_dir.join("display_config.rs"), render(&display)).unwrap();

    println!("cargo:warning=display.toml validated successfully");
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

/// Read an optional integer that must fit in `u16`
fn optional_u16(
    table: Option<&toml::Value>,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<u16> {
    match table.and_then(|t| t.get(key)) {
        None => None,
        Some(toml::Value::Integer(v)) if (0..=i64::from(u16::MAX)).contains(v) => Some(*v as u16),
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer 0-65535", section, key));
            None
        }
    }
}

fn validate(config: &toml::Value) -> Result<DisplayToml, Vec<String>> {
    let mut errors = Vec::new();

    let panel = config.get("panel");
    if panel.is_none() {
        errors.push("Missing [panel] section".to_string());
    }

    let variant = match panel.and_then(|p| p.get("variant")) {
        Some(toml::Value::String(v)) if v == "init_b" => "InitB",
        Some(toml::Value::String(v)) if v == "green_tab_160x80" => "GreenTab160x80",
        Some(_) => {
            errors.push("[panel] variant must be 'init_b' or 'green_tab_160x80'".to_string());
            "InitB"
        }
        None => {
            errors.push("[panel] missing 'variant'".to_string());
            "InitB"
        }
    };

    let (native_w, native_h) = match variant {
        "GreenTab160x80" => (80, 160),
        _ => (128, 160),
    };
    let width = optional_u16(panel, "panel", "width", &mut errors).unwrap_or(native_w);
    let height = optional_u16(panel, "panel", "height", &mut errors).unwrap_or(native_h);
    if width == 0 || height == 0 {
        errors.push("[panel] width and height must be non-zero".to_string());
    }

    let x_offset = optional_u16(panel, "panel", "x_offset", &mut errors);
    let y_offset = optional_u16(panel, "panel", "y_offset", &mut errors);
    let offsets = match (x_offset, y_offset) {
        (Some(x), Some(y)) => Some((x, y)),
        (None, None) => None,
        _ => {
            errors.push("[panel] x_offset and y_offset must be given together".to_string());
            None
        }
    };

    let backlight_section = config.get("backlight");
    let present = match backlight_section.and_then(|b| b.get("present")) {
        Some(toml::Value::Boolean(present)) => *present,
        Some(_) => {
            errors.push("[backlight] present must be true or false".to_string());
            false
        }
        None => false,
    };
    let backlight = if present {
        match backlight_section.and_then(|b| b.get("active_level")) {
            Some(toml::Value::String(v)) if v == "high" => Some("High"),
            Some(toml::Value::String(v)) if v == "low" => Some("Low"),
            None => Some("High"),
            Some(_) => {
                errors.push("[backlight] active_level must be 'high' or 'low'".to_string());
                None
            }
        }
    } else {
        None
    };

    let bus = config.get("bus");
    let frequency_hz = match bus.and_then(|b| b.get("frequency_hz")) {
        Some(toml::Value::Integer(hz)) if *hz > 0 && *hz <= 62_500_000 => *hz as u32,
        Some(_) => {
            errors.push("[bus] frequency_hz must be 1-62500000".to_string());
            0
        }
        None => 16_000_000,
    };
    let max_chunk_bytes = optional_u16(bus, "bus", "max_chunk_bytes", &mut errors);
    if max_chunk_bytes == Some(0) {
        errors.push("[bus] max_chunk_bytes must be non-zero".to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(DisplayToml {
        variant,
        width,
        height,
        offsets,
        backlight,
        frequency_hz,
        max_chunk_bytes,
    })
}

/// Render the validated configuration as Rust constants
fn render(display: &DisplayToml) -> String {
    let offsets = match display.offsets {
        Some((x, y)) => format!("Some(OffsetProfile::new({}, {}))", x, y),
        None => "None".to_string(),
    };
    let backlight = match display.backlight {
        Some(level) => format!("Some(ActiveLevel::{})", level),
        None => "None".to_string(),
    };
    let max_chunk = match display.max_chunk_bytes {
        Some(bytes) => format!("Some({})", bytes),
        None => "None".to_string(),
    };

    format!(
        "// Generated by build.rs from display.toml\n\
         pub const VARIANT: PanelVariant = PanelVariant::{};\n\
         pub const WIDTH: u16 = {};\n\
         pub const HEIGHT: u16 = {};\n\
         pub const OFFSETS: Option<OffsetProfile> = {};\n\
         pub const BACKLIGHT: Option<ActiveLevel> = {};\n\
         pub const SPI_FREQUENCY_HZ: u32 = {};\n\
         pub const MAX_CHUNK_BYTES: Option<u16> = {};\n",
        display.variant,
        display.width,
        display.height,
        offsets,
        backlight,
        display.frequency_hz,
        max_chunk,
    )
}
