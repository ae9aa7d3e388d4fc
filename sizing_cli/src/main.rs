//! # Spansizer CLI
//!
//! Terminal front-end for the preliminary sizing engine: prompt for a
//! building description, run the engine against the built-in catalog,
//! print the candidate materials with their member estimates, and
//! optionally save the chosen material to the local history file.

use std::io::{self, BufRead, Write};
use std::path::Path;

use sizing_core::calculations::engine;
use sizing_core::file_io::{load_or_default, save_history};
use sizing_core::materials::MaterialCatalog;
use sizing_core::project::{FunctionClass, ProjectInput};
use sizing_core::store::ProjectRecord;

const HISTORY_FILE: &str = "spansizer_history.siz";

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() {
    println!("Spansizer CLI - Preliminary Structural Sizing");
    println!("=============================================");
    println!();

    let label = prompt_line("Project name [Untitled]: ")
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Untitled".to_string());
    let span_m = prompt_f64("Primary span (m) [9.0]: ", 9.0);
    let spacing_m = prompt_f64("Column spacing (m) [6.0]: ", 6.0);
    let class_label = prompt_line("Function class (residential/office/school/public) [residential]: ")
        .unwrap_or_default();
    let function_class = FunctionClass::from_label_lenient(&class_label);
    let floors = prompt_u32("Floors [1]: ", 1);
    let floor_height_m = prompt_f64("Floor height (m) [3.5]: ", 3.5);

    let project = ProjectInput {
        label,
        span_m,
        spacing_m,
        function_class,
        floors,
        floor_height_m,
    };

    let catalog = MaterialCatalog::builtin();
    let results = match engine::evaluate(&project, &catalog) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    };

    println!();
    println!("═══════════════════════════════════════════════");
    println!("  RECOMMENDATIONS — {} ({})", project.label, project.function_class);
    println!("  span {:.2} m, spacing {:.2} m, {} floor(s) at {:.2} m",
        project.span_m, project.spacing_m, project.floors, project.floor_height_m);
    println!("═══════════════════════════════════════════════");
    println!();

    if results.is_empty() {
        println!("No material in the catalog covers a {:.1} m span.", project.span_m);
        return;
    }

    for (index, result) in results.iter().enumerate() {
        let beam = &result.beam;
        let column = &result.column;
        println!(
            "{}. {} [{}]",
            index + 1,
            result.material.name,
            result.material.material_type
        );
        println!(
            "   Beam depth:  {:.0}-{:.0} cm{}",
            beam.beam_depth_min.value(),
            beam.beam_depth_max.value(),
            if beam.is_inverted() { " (catalog ratios inverted)" } else { "" }
        );
        println!(
            "   Column:      {:.0} cm² ({:.0} x {:.0} cm)",
            column.column_area.value(),
            column.column_side.value(),
            column.column_side.value()
        );
        println!();
    }

    // Offer to save a selection to the local history
    let choice = prompt_u32(
        "Save a selection? Enter material number (0 to skip) [0]: ",
        0,
    ) as usize;
    if choice == 0 || choice > results.len() {
        print_json(&results);
        return;
    }

    let selected = &results[choice - 1];
    let path = Path::new(HISTORY_FILE);
    let saved = load_or_default(path).and_then(|mut history| {
        history.add(ProjectRecord::new(project.clone(), selected.material.id.clone()));
        save_history(&history, path)
    });
    match saved {
        Ok(()) => println!("Saved {} to {}", selected.material.name, HISTORY_FILE),
        Err(e) => eprintln!("Could not save selection: {}", e),
    }

    print_json(&results);
}

fn print_json(results: &[sizing_core::SizingResult]) {
    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(results) {
        println!("{}", json);
    }
}
