//! Lunar node (Rahu/Ketu) longitude computation.
//!
//! Mean node: the fifth Delaunay argument (Ω), regressing about
//! 19.34 deg per year. True node: mean plus the five short-period
//! corrections of Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 47.
//! Ketu is always exactly opposite Rahu.

use jyotish_ephem::{fundamental_arguments, normalize_deg};
use serde::{Deserialize, Serialize};

/// Which lunar node to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarNode {
    /// Ascending node (Rahu / North Node).
    Rahu,
    /// Descending node (Ketu / South Node). Always Rahu + 180 deg.
    Ketu,
}

/// Array of all lunar node variants.
pub const ALL_NODES: [LunarNode; 2] = [LunarNode::Rahu, LunarNode::Ketu];

/// Mean or true (perturbed) node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    /// Mean node: smooth polynomial motion only.
    #[default]
    Mean,
    /// True node: mean + short-period perturbation corrections.
    True,
}

/// Short-period correction for the true node, in degrees.
///
/// `args` = `[l, l', F, D, Ω]` in radians.
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    // [nl, nl', nF, nD, amplitude_deg]
    #[rustfmt::skip]
    static TERMS: [[f64; 5]; 5] = [
        [ 0.0,  0.0, -2.0,  2.0, -1.4979],
        [ 0.0,  1.0,  0.0,  0.0, -0.1500],
        [ 0.0,  0.0,  0.0,  2.0, -0.1226],
        [ 0.0,  0.0,  2.0,  0.0,  0.1176],
        [ 2.0,  0.0, -2.0,  0.0, -0.0801],
    ];

    TERMS
        .iter()
        .map(|term| {
            let angle = term[0] * args[0] + term[1] * args[1] + term[2] * args[2] + term[3] * args[3];
            term[4] * angle.sin()
        })
        .sum()
}

/// Mean Rahu (ascending node) ecliptic longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_deg(args[4].to_degrees())
}

/// True Rahu (ascending node) ecliptic longitude in degrees [0, 360).
pub fn true_rahu_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_deg(args[4].to_degrees() + node_perturbation_deg(&args))
}

/// Rahu longitude for the given mode.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    match mode {
        NodeMode::Mean => mean_rahu_deg(t),
        NodeMode::True => true_rahu_deg(t),
    }
}

/// Ketu from a Rahu longitude: `(rahu + 180) mod 360`.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_deg(rahu_deg + 180.0)
}

/// Unified entry point: lunar node longitude in degrees [0, 360).
pub fn lunar_node_deg(node: LunarNode, t: f64, mode: NodeMode) -> f64 {
    let rahu = rahu_deg(t, mode);
    match node {
        LunarNode::Rahu => rahu,
        LunarNode::Ketu => ketu_from_rahu(rahu),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_rahu_at_j2000_approx_125() {
        let deg = mean_rahu_deg(0.0);
        assert!((deg - 125.04).abs() < 0.01, "mean Rahu at J2000 = {deg}");
    }

    #[test]
    fn ketu_exactly_opposite() {
        for &t in &[0.0, 0.1, -0.5, 1.0, -0.0996] {
            for mode in [NodeMode::Mean, NodeMode::True] {
                let rahu = lunar_node_deg(LunarNode::Rahu, t, mode);
                let ketu = lunar_node_deg(LunarNode::Ketu, t, mode);
                assert_eq!(ketu, normalize_deg(rahu + 180.0), "t={t} {mode:?}");
            }
        }
    }

    #[test]
    fn mean_node_regresses() {
        let r1 = mean_rahu_deg(0.0);
        let r2 = mean_rahu_deg(0.01);
        let per_year = (r2 - r1 + 180.0).rem_euclid(360.0) - 180.0;
        assert!((per_year + 19.34).abs() < 0.05, "per_year = {per_year}");
    }

    #[test]
    fn perturbation_bounded() {
        for &t in &[0.0, 0.24, -1.0, 5.0] {
            let diff = (true_rahu_deg(t) - mean_rahu_deg(t) + 180.0).rem_euclid(360.0) - 180.0;
            assert!(diff.abs() < 2.0, "t={t}: |true - mean| = {diff}");
        }
    }

    #[test]
    fn perturbation_nonzero() {
        let diff = (true_rahu_deg(0.24) - mean_rahu_deg(0.24)).abs();
        assert!(diff > 0.001, "perturbation too small: {diff}");
    }

    #[test]
    fn normalization_range() {
        for &t in &[-5.0, -1.0, 0.0, 1.0, 5.0, 10.0] {
            for mode in [NodeMode::Mean, NodeMode::True] {
                for node in ALL_NODES {
                    let deg = lunar_node_deg(node, t, mode);
                    assert!((0.0..360.0).contains(&deg), "{node:?} {mode:?} t={t}: {deg}");
                }
            }
        }
    }
}
