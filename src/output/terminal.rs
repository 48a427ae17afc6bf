// Colored terminal output for detections, corpus summaries and clusters.
//
// main.rs delegates all terminal-specific formatting here.

use std::path::Path;

use colored::Colorize;
use unicode_segmentation::UnicodeSegmentation;

use crate::cluster::Cluster;
use crate::corpus::BuildSummary;
use crate::language::Detection;

/// Color a confidence value: green when solid, yellow when marginal.
fn colorize_confidence(confidence: f64) -> String {
    let text = format!("{confidence:.3}");
    if confidence >= 0.5 {
        text.green().to_string()
    } else if confidence >= 0.25 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

/// One-line preview of a sample: whitespace runs collapse to a space and the
/// text is cut after `limit` grapheme clusters, so combining marks stay with
/// their base letter.
fn preview(text: &str, limit: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut graphemes = flat.graphemes(true);
    let head: String = graphemes.by_ref().take(limit).collect();
    if graphemes.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

/// Display one classification result with a preview of the text.
pub fn display_detection(text: &str, detection: &Detection) {
    let tag = if detection.is_unknown() {
        detection.language.to_string().dimmed().to_string()
    } else {
        detection.language.to_string().bold().to_string()
    };
    println!(
        "{}  confidence {}  {}",
        tag,
        colorize_confidence(detection.confidence),
        preview(text, 60).dimmed()
    );
}

/// Display what the corpus builder kept and skipped.
pub fn display_build_summary(summary: &BuildSummary) {
    println!(
        "\n{}",
        format!("=== Corpus ({} documents read) ===", summary.total()).bold()
    );
    println!("  Kept: {}", summary.kept.to_string().green());
    if summary.skipped_confidence > 0 {
        println!(
            "  {} {} skipped for low confidence",
            "~".yellow(),
            summary.skipped_confidence
        );
    }
    if summary.skipped_language > 0 {
        println!(
            "  {} {} skipped by language filter",
            "~".yellow(),
            summary.skipped_language
        );
    }
    if summary.skipped_empty > 0 {
        println!(
            "  {} {} produced no tokens",
            "!".bright_red(),
            summary.skipped_empty
        );
    }
}

/// Display cluster sizes, top terms and a few members each.
pub fn display_clusters(clusters: &[Cluster], max_members: usize) {
    if clusters.is_empty() {
        println!("No clusters computed.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Clusters ({}) ===", clusters.len()).bold()
    );

    for cluster in clusters {
        let size = format!("{} documents", cluster.len());
        let size = if cluster.is_empty() {
            size.red().to_string()
        } else {
            size.normal().to_string()
        };
        println!("\n  {} {}", format!("#{}", cluster.id).bold(), size);

        if !cluster.top_terms.is_empty() {
            println!("    {}", cluster.top_terms.join(", ").cyan());
        }
        for member in cluster.members.iter().take(max_members) {
            println!("    {}", member.dimmed());
        }
        if cluster.len() > max_members {
            println!(
                "    {}",
                format!("... and {} more", cluster.len() - max_members).dimmed()
            );
        }
    }
    println!();
}

/// Display where the report files went.
pub fn display_report_paths(paths: &[&Path]) {
    println!("{}", "Reports saved:".bold());
    for path in paths {
        println!("  {}", path.display());
    }
}
