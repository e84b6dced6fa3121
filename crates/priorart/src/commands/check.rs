use priorart_extract::extract_keywords;
use priorart_lexicon::Lexicon;
use priorart_signal::{assemble_report, Depth, RealityCheckReport};
use priorart_sources::{atomic_write, read_results};
use std::path::Path;

pub fn run(
    idea: &str,
    results_path: Option<&str>,
    depth: Depth,
    pretty: bool,
    output_path: Option<&str>,
) -> anyhow::Result<()> {
    let report = build_report(idea, results_path, depth)?;

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    match output_path {
        Some(path) => {
            atomic_write(Path::new(path), json.as_bytes())?;
            println!("Report written to {}", path);
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Extract queries and assemble the report. With no results file the check
/// runs against empty sources and yields a zero signal, which still lets the
/// queries and report shape be inspected offline.
fn build_report(
    idea: &str,
    results_path: Option<&str>,
    depth: Depth,
) -> anyhow::Result<RealityCheckReport> {
    let lexicon = Lexicon::builtin();
    let queries = extract_keywords(&lexicon, idea);

    let results = match results_path {
        Some(path) => read_results(Path::new(path))?,
        None => Vec::new(),
    };

    Ok(assemble_report(idea, &queries, &results, depth))
}
