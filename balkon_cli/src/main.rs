//! # Balkon CLI Application
//!
//! Terminal front end for the glass-balcony engine.
//!
//! ```text
//! balkon_cli enclosure.json   # compute from an enclosure document
//! balkon_cli                  # single-arm enclosure from prompts
//! ```
//!
//! Set `RUST_LOG=balkon_core=debug` to trace the intermediate values.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use balkon_core::{
    Arm, BalkonError, BalkonResult, BillOfMaterials, Category, Enclosure, ExitDirection,
    GlassThickness,
};
use tracing::info;

fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .init();
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_str(prompt: &str, default: &str) -> String {
    match read_line(prompt) {
        Some(s) if !s.is_empty() => s,
        _ => default.to_string(),
    }
}

fn load_enclosure(path: &str) -> BalkonResult<Enclosure> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| BalkonError::file_error("read", path, e.to_string()))?;
    let enclosure = Enclosure::from_json(&json)?;
    info!(path, arms = enclosure.arm_count(), "loaded enclosure");
    Ok(enclosure)
}

fn require_positive(field: &str, value: f64) -> BalkonResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(BalkonError::invalid_input(field, value.to_string(), "must be a positive number of millimetres"))
    }
}

fn prompt_enclosure() -> BalkonResult<Enclosure> {
    println!("Single-arm enclosure (press Enter for the default)");
    println!();

    let height = require_positive("height", prompt_f64("Height (mm) [2200]: ", 2200.0))?;
    let width = require_positive("width", prompt_f64("Arm width (mm) [3000]: ", 3000.0))?;
    let wings = prompt_u32("Wings [6]: ", 6);
    let exits = prompt_u32("Exit sashes [1]: ", 1);
    let direction = ExitDirection::from_label(&prompt_str("Exit side (left/right/both) [right]: ", "right"));
    let thickness = GlassThickness::from_str_strict(&prompt_str("Glass thickness (8/24/28/32/40) [24]: ", "24"))?;

    Ok(Enclosure::new(height, thickness).with_arm(Arm::new(width, wings).with_exits(exits, direction)))
}

fn print_report(enclosure: &Enclosure, bom: &BillOfMaterials) {
    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!(
        "  GLASS BALCONY  H={:.0} mm  {}  {}",
        enclosure.height,
        enclosure.glass_thickness.label(),
        enclosure.glass_color
    );
    println!("═══════════════════════════════════════════════════════════════");

    for (index, sequence) in enclosure.panel_sequences() {
        let kinds: Vec<String> = sequence
            .panels
            .iter()
            .map(|p| format!("{:?} {:.1}", p.kind, p.width))
            .collect();
        println!("  Arm {}: {}", index + 1, kinds.join(" | "));
    }

    for category in [Category::Profile, Category::Accessory] {
        println!();
        println!("{}:", category);
        for line in bom.lines_in(category) {
            println!(
                "  {:<20} {:<24} {:>8} {:>10.3} {}",
                line.stock_code,
                line.description,
                line.measurement,
                line.quantity,
                line.unit
            );
        }
    }

    println!();
    println!("Glass ({}):", bom.glass.glass_color);
    for pane in &bom.glass.panes {
        println!(
            "  Arm {}  {:>3} x {:>8.1} x {:>8.1}  {:>2} mm  {:>7.3} m²",
            pane.arm_index + 1,
            pane.count,
            pane.width,
            pane.height,
            pane.thickness_mm,
            pane.area_m2
        );
    }
    println!("  Total: {:.2} m²", bom.glass.total_area_m2);
    println!("═══════════════════════════════════════════════════════════════");
}

fn main() -> ExitCode {
    init_logging();

    println!("Balkon CLI - Glass Balcony Cut Lists");
    println!("====================================");

    let enclosure = match std::env::args().nth(1) {
        Some(path) => load_enclosure(&path),
        None => prompt_enclosure(),
    };

    match enclosure {
        Ok(enclosure) => {
            let bom = BillOfMaterials::compute(&enclosure);
            print_report(&enclosure, &bom);

            println!();
            println!("JSON Output:");
            if let Ok(json) = serde_json::to_string_pretty(&bom) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
