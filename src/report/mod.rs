// Plain-text reports: weighted terms, similarity edges, cluster membership.
//
// Rendering produces strings so callers can keep results in memory; writing
// puts the three reports in one directory under a shared run identifier.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::cluster::{average_score, Cluster};
use crate::model::{ModelContext, TermDocumentMatrix};
use crate::pipeline::Analysis;
use crate::similarity::DistanceMatrix;

/// Files produced by one [`write_reports`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub weights: PathBuf,
    pub edges: PathBuf,
    pub clusters: PathBuf,
}

/// Run identifier derived from the local clock, e.g. `20240317-142501`.
pub fn run_id() -> String {
    chrono::Local::now().format("%Y%m%d-%H%M%S").to_string()
}

/// Threshold as it appears in an edges file name: the leading `0.` dropped,
/// and `1` for anything at or above one.
pub fn threshold_digits(threshold: f64) -> String {
    if threshold >= 1.0 {
        return "1".to_string();
    }
    format!("{threshold}").replace("0.", "")
}

fn push_header(out: &mut String, header: &str, rule_len: usize) {
    out.push_str(header);
    out.push('\n');
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
}

/// Every non-zero weight as `term\tdoc\tweight`, grouped by document.
pub fn render_weights(context: &ModelContext, matrix: &TermDocumentMatrix, use_idf: bool) -> String {
    let header = if use_idf {
        "Term\tDoc.\tTf-Idf"
    } else {
        "Term\tDoc.\tTf"
    };
    let mut out = String::new();
    // Tabs render four wide
    push_header(&mut out, header, header.len() + 6);

    for (row, col, weight) in matrix.nonzero() {
        let (Some(doc), Some(term)) = (context.documents.get(row), context.vocabulary.term(col))
        else {
            continue;
        };
        let _ = writeln!(out, "{term}\t{doc}\t{weight}");
    }
    out
}

/// Ordered document pairs whose cosine distance is at least `threshold`.
pub fn render_edges(context: &ModelContext, distances: &DistanceMatrix, threshold: f64) -> String {
    let header = format!("Cosine Similarities, threshold = {threshold}");
    let mut out = String::new();
    push_header(&mut out, &header, header.len());

    for (i, j, distance) in distances.pairs_at_least(threshold) {
        let (Some(a), Some(b)) = (context.documents.get(i), context.documents.get(j)) else {
            continue;
        };
        let _ = writeln!(out, "{a}\t{b}\t{distance}");
    }
    out
}

/// Cluster membership with top terms, and average scores when supplied.
pub fn render_clusters(clusters: &[Cluster], scores: Option<&HashMap<String, f64>>) -> String {
    let total: usize = clusters.iter().map(Cluster::len).sum();
    let header = format!("K-Means: {total} documents, {} clusters", clusters.len());
    let mut out = String::new();
    push_header(&mut out, &header, header.len());

    for cluster in clusters {
        let _ = writeln!(out, "CLUSTER #{}: {} documents", cluster.id, cluster.len());
        if let Some(scores) = scores {
            match average_score(cluster, scores) {
                Some(avg) => {
                    let _ = writeln!(out, "\tAverage score: {avg:.4}");
                }
                None => out.push_str("\tAverage score: n/a\n"),
            }
        }
        let _ = writeln!(out, "\tTop {} words:", cluster.top_terms.len());
        let _ = writeln!(out, "\t\t{}", cluster.top_terms.join(", "));
        out.push('\n');
        for member in &cluster.members {
            let _ = writeln!(out, "\t{member}");
        }
        out.push('\n');
    }
    out
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write report: {}", path.display()))
}

/// Write the weights, edges and clusters reports for one analysis run.
pub fn write_reports(
    dir: &Path,
    run_id: &str,
    analysis: &Analysis,
    use_idf: bool,
    threshold: f64,
    scores: Option<&HashMap<String, f64>>,
) -> Result<ReportPaths> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let paths = ReportPaths {
        weights: dir.join(format!("tfidf.{run_id}.sparse")),
        edges: dir.join(format!(
            "cosine-{}.{run_id}.edges",
            threshold_digits(threshold)
        )),
        clusters: dir.join(format!("kmeans.{run_id}.txt")),
    };

    write_file(
        &paths.weights,
        &render_weights(&analysis.context, &analysis.matrix, use_idf),
    )?;
    write_file(
        &paths.edges,
        &render_edges(&analysis.context, &analysis.distances, threshold),
    )?;
    write_file(&paths.clusters, &render_clusters(&analysis.clusters, scores))?;

    info!(
        dir = %dir.display(),
        run = run_id,
        clusters = analysis.clusters.len(),
        "Wrote reports"
    );
    Ok(paths)
}
