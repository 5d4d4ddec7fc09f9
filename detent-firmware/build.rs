//! Build script for detent-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates knob.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

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
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    #[cfg(feature = "defmt")]
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate knob.toml at compile time
///
/// Accepts only what `detent_core::config::parse_config` accepts at boot,
/// so the firmware never silently falls back to the defaults.
fn validate_config() {
    println!("cargo:rerun-if-changed=knob.toml");

    let config_path = Path::new("knob.toml");

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read knob.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in knob.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    let mut errors = Vec::new();
    let root = config.as_table().cloned().unwrap_or_default();

    for (name, value) in &root {
        let is_section = value.is_table()
            || value
                .as_array()
                .is_some_and(|items| items.iter().any(toml::Value::is_table));
        if is_section && name != "encoder" && name != "button" {
            errors.push(format!("Unknown section [{}]", name));
        }
    }

    // Pins left out keep the board defaults
    let mut pin_a = Some(2);
    let mut pin_b = Some(3);
    let mut pin_sw = None;

    match root.get("encoder") {
        Some(toml::Value::Table(encoder)) => {
            check_subtables(encoder, "encoder", &mut errors);
            if let Some(pin) = pin_key(encoder, "encoder", ["pin_a", "clk_pin"], &mut errors) {
                pin_a = pin;
            }
            if let Some(pin) = pin_key(encoder, "encoder", ["pin_b", "dt_pin"], &mut errors) {
                pin_b = pin;
            }
            match encoder.get("step") {
                None => {}
                Some(toml::Value::Integer(0)) => errors.push("[encoder] step must not be 0".into()),
                Some(toml::Value::Integer(step)) if i32::try_from(*step).is_err() => {
                    errors.push("[encoder] step does not fit in i32".into())
                }
                Some(toml::Value::Integer(_)) => {}
                Some(_) => errors.push("[encoder] step must be an integer".into()),
            }
        }
        Some(_) => errors.push("[encoder] must be a table".into()),
        None => {}
    }

    match root.get("button") {
        Some(toml::Value::Table(button)) => {
            check_subtables(button, "button", &mut errors);
            pin_sw = Some(4);
            if let Some(pin) = pin_key(button, "button", ["pin", "sw_pin"], &mut errors) {
                pin_sw = pin;
            }

            if let Some(pull) = button.get("pull") {
                let valid = ["up", "Up", "pull_up", "down", "Down", "pull_down"];
                if !pull.as_str().is_some_and(|p| valid.contains(&p)) {
                    errors.push("[button] pull must be 'up' or 'down'".into());
                }
            }
            if let Some(pulled_up) = button.get("pulled_up") {
                if !pulled_up.is_bool() {
                    errors.push("[button] pulled_up must be true or false".into());
                }
            }

            let ms = |key: &str| button.get(key).and_then(toml::Value::as_integer);
            for key in ["debounce_ms", "short_press_ms", "long_press_ms"] {
                if let Some(value) = button.get(key) {
                    match value.as_integer() {
                        Some(v) if u32::try_from(v).is_ok() => {}
                        _ => errors.push(format!("[button] {} must be 0-{}", key, u32::MAX)),
                    }
                }
            }
            let short = ms("short_press_ms").unwrap_or(50);
            let long = ms("long_press_ms").unwrap_or(500);
            if long < short {
                errors.push("[button] long_press_ms must not be below short_press_ms".into());
            }
        }
        Some(_) => errors.push("[button] must be a table".into()),
        None => {}
    }

    if pin_a.is_some() && pin_a == pin_b {
        errors.push("[encoder] pin_a and pin_b must differ".into());
    }
    if pin_sw.is_some() && (pin_sw == pin_a || pin_sw == pin_b) {
        errors.push("[button] pin must differ from the encoder pins".into());
    }

    if !errors.is_empty() {
        fail("Invalid knob configuration", &errors);
    }

    println!("cargo:warning=knob.toml validated successfully");
}

/// Reject dotted sub-sections like [encoder.extra]
fn check_subtables(
    section: &toml::map::Map<String, toml::Value>,
    name: &str,
    errors: &mut Vec<String>,
) {
    for (key, value) in section {
        if value.is_table() || value.is_array() {
            errors.push(format!("[{}] {} must be a plain value", name, key));
        }
    }
}

/// Check the pin under either of its key names
///
/// Returns `Some(pin)` if the key is present; `Some(None)` if it is invalid.
fn pin_key(
    section: &toml::map::Map<String, toml::Value>,
    name: &str,
    keys: [&str; 2],
    errors: &mut Vec<String>,
) -> Option<Option<u64>> {
    let present: Vec<_> = keys
        .iter()
        .filter_map(|k| section.get(*k).map(|v| (*k, v)))
        .collect();
    match present.as_slice() {
        [] => None,
        [(key, value)] => Some(check_pin(value, name, key, errors)),
        _ => {
            errors.push(format!("[{}] set only one of {} and {}", name, keys[0], keys[1]));
            Some(None)
        }
    }
}

/// Check a pin string like "gpio4", "^gpio4" or "!gpio4"
fn check_pin(
    value: &toml::Value,
    section: &str,
    key: &str,
    errors: &mut Vec<String>,
) -> Option<u64> {
    let Some(s) = value.as_str() else {
        errors.push(format!("[{}] {} must be a string", section, key));
        return None;
    };

    let number = s
        .trim_start_matches(['!', '^'])
        .strip_prefix("gpio")
        .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|n| n.parse::<u64>().ok());

    match number {
        Some(n) if n <= 29 => Some(n),
        _ => {
            errors.push(format!("[{}] {} is not a valid RP2040 pin: '{}'", section, key, s));
            None
        }
    }
}

/// Abort the build with a boxed error report
fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|line| {
                let line = if line.chars().count() > 62 {
                    format!("{}...", line.chars().take(59).collect::<String>())
                } else {
                    line.clone()
                };
                format!("║  • {:<62} ║", line)
            })
            .collect::<Vec<_>>()
            .join("\n")
    );
}
