// Document clustering and cluster labelling.
//
// Runs seeded k-means (linfa-clustering) over the weighted matrix rows, then
// names each cluster by the heaviest terms in its centroid.

pub mod kmeans;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::AnalysisError;
use crate::model::{ModelContext, TermDocumentMatrix};

pub use kmeans::{fit, KMeansFit};

/// Clustering parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub k: usize,
    /// Representative terms reported per cluster: the heaviest centroid
    /// terms, ties broken by vocabulary order. Fewer only when the
    /// vocabulary itself is smaller.
    pub top_terms: usize,
    pub seed: u64,
    pub max_iterations: u64,
    /// Independent k-means runs; the lowest inertia wins.
    pub restarts: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            k: 5,
            top_terms: 10,
            seed: 42,
            max_iterations: 300,
            restarts: 10,
        }
    }
}

/// One cluster: label, member documents, representative terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: usize,
    /// Member document identifiers in matrix row order.
    pub members: Vec<String>,
    /// Highest-weighted centroid terms, heaviest first.
    pub top_terms: Vec<String>,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Indices of the `n` largest weights, heaviest first, ties broken by lower
/// index.
pub fn top_indices(weights: &[f64], n: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = weights.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(n).map(|(i, _)| i).collect()
}

/// Partition the documents of a model into `config.k` clusters.
pub fn cluster(
    context: &ModelContext,
    matrix: &TermDocumentMatrix,
    config: &ClusterConfig,
) -> Result<Vec<Cluster>, AnalysisError> {
    matrix.check_context(context)?;
    let n = matrix.n_rows();
    if n == 0 {
        return Err(AnalysisError::EmptyCorpus);
    }
    if config.k == 0 || config.k > n {
        return Err(AnalysisError::InvalidClusterCount {
            k: config.k,
            documents: n,
        });
    }

    let fit = kmeans::fit(
        matrix.to_dense(),
        config.k,
        config.seed,
        config.max_iterations,
        config.restarts,
    )?;

    let mut members: Vec<Vec<String>> = vec![Vec::new(); config.k];
    for (row, &label) in fit.assignments.iter().enumerate() {
        if let Some(group) = members.get_mut(label) {
            group.push(context.documents[row].clone());
        }
    }

    let clusters: Vec<Cluster> = members
        .into_iter()
        .enumerate()
        .map(|(id, members)| {
            if members.is_empty() {
                warn!(cluster = id, "Cluster ended with no members");
            }
            let top_terms = top_indices(&fit.centroid(id), config.top_terms)
                .into_iter()
                .filter_map(|col| context.vocabulary.term(col).map(str::to_string))
                .collect();
            Cluster {
                id,
                members,
                top_terms,
            }
        })
        .collect();

    info!(
        documents = n,
        clusters = config.k,
        inertia = fit.inertia,
        "Clustered documents"
    );
    Ok(clusters)
}

/// Mean of externally supplied per-document scores over a cluster's members.
///
/// Members without a score are skipped. Returns `None` when the cluster is
/// empty or no member has a score.
pub fn average_score(cluster: &Cluster, scores: &HashMap<String, f64>) -> Option<f64> {
    let known: Vec<f64> = cluster
        .members
        .iter()
        .filter_map(|id| scores.get(id).copied())
        .collect();
    if known.is_empty() {
        return None;
    }
    Some(known.iter().sum::<f64>() / known.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_indices_orders_by_weight_then_index() {
        assert_eq!(top_indices(&[0.5, 2.0, 0.5, 0.0, 1.0], 3), vec![1, 4, 0]);
        assert_eq!(top_indices(&[0.0, 0.0, 0.0], 2), vec![0, 1]);
        assert_eq!(top_indices(&[1.0], 4), vec![0]);
    }

    #[test]
    fn test_average_score_skips_unscored_members() {
        let cluster = Cluster {
            id: 0,
            members: vec!["a".into(), "b".into(), "c".into()],
            top_terms: vec![],
        };
        let scores = HashMap::from([("a".to_string(), 2.0), ("c".to_string(), 4.0)]);
        assert_eq!(average_score(&cluster, &scores), Some(3.0));
    }

    #[test]
    fn test_average_score_empty_cluster_is_none() {
        let cluster = Cluster {
            id: 1,
            members: vec![],
            top_terms: vec![],
        };
        let scores = HashMap::from([("a".to_string(), 2.0)]);
        assert_eq!(average_score(&cluster, &scores), None);
    }
}
