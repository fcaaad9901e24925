pub mod demos;
pub mod derive;
pub mod record;
pub mod types;

use types::DemoReport;

/// Run every demo snippet top to bottom, in source-file order:
/// the derivation group (pick, omit, record, exclude, extract) first,
/// then the field-constraint group (partial, required, readonly).
pub fn run_demos() -> DemoReport {
    let mut outputs = Vec::new();

    outputs.push(demos::pick_demo());
    outputs.push(demos::omit_demo());
    outputs.push(demos::record_demo());
    outputs.push(demos::exclude_demo());
    outputs.push(demos::extract_demo());
    outputs.extend(demos::partial_demo());
    outputs.push(demos::required_demo());
    outputs.push(demos::readonly_demo());

    DemoReport { demos: outputs }
}
