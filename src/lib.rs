pub mod types;
pub mod maximum;
pub mod swap;
pub mod multiply;
pub mod demo;
pub mod logging;

use tracing::debug;

use types::{DemoReport, Family};

/// Run the demonstration families and collect their report.
///
/// - `families`: optional subset to run. If `None`, every family runs.
///
/// Sections always appear in [`Family::ALL`] order, whatever order the
/// filter lists them in.
pub fn run_demonstrations(families: Option<&[Family]>) -> DemoReport {
    let mut sections = Vec::new();

    for family in Family::ALL {
        if let Some(selected) = families {
            if !selected.contains(&family) {
                debug!("skipping family: {}", family);
                continue;
            }
        }

        let section = match family {
            Family::Maximum => demo::maximum_section(),
            Family::Swap => demo::swap_section(),
            Family::Multiply => demo::multiply_section(),
        };
        debug!("family {} produced {} entries", family, section.entries.len());
        sections.push(section);
    }

    DemoReport { sections }
}

mod property_tests;
