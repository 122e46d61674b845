use std::process;

use utilfam::logging;
use utilfam::types::{DemoReport, Family};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let json_mode = args.iter().any(|a| a == "--json");
    let verbose = args.iter().any(|a| a == "--verbose");
    let positional: Vec<&String> = args.iter().skip(1).filter(|a| !a.starts_with("--")).collect();

    logging::init(verbose);

    let families: Option<Vec<Family>> = if positional.is_empty() {
        None
    } else {
        let mut selected = Vec::new();
        for name in &positional {
            match name.parse::<Family>() {
                Ok(family) => selected.push(family),
                Err(err) => {
                    eprintln!("error: {err}");
                    print_usage();
                    process::exit(2);
                }
            }
        }
        Some(selected)
    };

    tracing::debug!("driver starting");
    let report = utilfam::run_demonstrations(families.as_deref());

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&report).unwrap());
        return;
    }

    render_text(&report);
}

fn print_usage() {
    eprintln!("Usage: utilfam [--json] [--verbose] [family ...]");
    eprintln!();
    eprintln!("Families:");
    eprintln!("  maximum   largest of two/three integers and of fixed-length arrays");
    eprintln!("  swap      in-place exchange through &mut and optional handles");
    eprintln!("  multiply  products with a defaulted third factor");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --json     Output the report as JSON");
    eprintln!("  --verbose  Log each demonstrated call");
    eprintln!();
    eprintln!("With no family arguments, every family is demonstrated.");
}

fn render_text(report: &DemoReport) {
    for section in &report.sections {
        println!("{} family:", section.family);
        println!();
        for entry in &section.entries {
            println!("{entry}");
            println!();
        }
    }

    println!(
        "utilfam: {} demonstration(s) across {} family(ies)",
        report.entry_count(),
        report.section_count()
    );
}
