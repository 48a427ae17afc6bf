// Seeded k-means over dense weight rows.
//
// linfa-clustering does the fitting: k-means++ seeding, Lloyd iterations,
// best of several runs by inertia. The RNG comes from the caller's seed, so a
// fixed seed reproduces the same partition.

use linfa::dataset::AsTargets;
use linfa::traits::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::{KMeans, KMeansInit};
use ndarray::{Array2, ArrayView1, Axis};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::AnalysisError;

/// Outcome of a k-means fit.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    /// Cluster index per input row.
    pub assignments: Vec<usize>,
    /// One centroid per cluster, as rows.
    pub centroids: Array2<f64>,
    /// Sum of squared distances from each row to its centroid.
    pub inertia: f64,
}

impl KMeansFit {
    pub fn centroid(&self, cluster: usize) -> Vec<f64> {
        self.centroids.index_axis(Axis(0), cluster).to_vec()
    }
}

/// Distinct rows in `records`, counting no further than `limit`.
fn distinct_rows(records: &Array2<f64>, limit: usize) -> usize {
    let mut seen: Vec<ArrayView1<'_, f64>> = Vec::new();
    for row in records.outer_iter() {
        if !seen.iter().any(|other| *other == row) {
            seen.push(row);
            if seen.len() >= limit {
                break;
            }
        }
    }
    seen.len()
}

/// Fit `k` clusters. Callers guarantee `1 <= k <= records.nrows()`.
pub fn fit(
    records: Array2<f64>,
    k: usize,
    seed: u64,
    max_iterations: u64,
    runs: usize,
) -> Result<KMeansFit, AnalysisError> {
    // k-means++ samples by distance and needs k distinct rows to pick from
    let init = if distinct_rows(&records, k) < k {
        debug!(k, "Fewer distinct rows than clusters, seeding from random rows");
        KMeansInit::Random
    } else {
        KMeansInit::KMeansPlusPlus
    };

    let dataset = DatasetBase::from(records);
    let model = KMeans::params_with_rng(k, StdRng::seed_from_u64(seed))
        .init_method(init)
        .max_n_iterations(max_iterations)
        .n_runs(runs.max(1))
        .fit(&dataset)
        .map_err(|e| AnalysisError::Clustering(e.to_string()))?;

    let predictions = model.predict(&dataset);
    let assignments: Vec<usize> = predictions.as_targets().iter().copied().collect();

    debug!(k, seed, inertia = model.inertia(), "k-means fit finished");
    Ok(KMeansFit {
        assignments,
        centroids: model.centroids().to_owned(),
        inertia: model.inertia(),
    })
}
