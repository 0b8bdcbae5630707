// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Picks colors that are easy to tell apart, eg: to colorize identifiers in logs.
//!
//! The selection is greedy:
//! 1. Start with the two candidates that are farthest apart.
//! 2. Add the candidate with the largest mean distance to the colors chosen so far,
//!    skipping any candidate that is closer than `min_dist` to one of them.
//! 3. Repeat until `n` colors are chosen.
//!
//! [`find_differentiated_colors`] measures distance with Delta-E 2000, so it needs the
//! `lab` feature. [`find_differentiated_colors_by`] takes any distance function, eg:
//! [`crate::hsv_distance`].

use std::collections::HashMap;

use crate::{LabValue, XtermColor, XtermColorError, XtermResult, require_lab_support};

/// Distances between every pair of a set of colors. Only the color codes are used as
/// keys, so a foreground and a background color with the same code are the same point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorDistanceMatrix {
    distances: HashMap<(u8, u8), f64>,
}

impl ColorDistanceMatrix {
    /// Fills the matrix by calling `distance` once per unordered pair of `colors`.
    pub fn calculate_by(
        colors: &[XtermColor],
        distance: impl Fn(XtermColor, XtermColor) -> f64,
    ) -> Self {
        let mut acc = Self::default();
        for (i, first) in colors.iter().enumerate() {
            for second in &colors[i + 1..] {
                acc.insert(*first, *second, distance(*first, *second));
            }
        }
        acc
    }

    /// Symmetric, `distance(a, b) == distance(b, a)`. Pairs of the same code are not
    /// stored, see [`Self::distance`].
    pub fn insert(&mut self, first: XtermColor, second: XtermColor, distance: f64) {
        if first.code() == second.code() {
            return;
        }
        self.distances.insert(key(first, second), distance);
    }

    /// The distance from a color to itself is always `0.0`.
    ///
    /// # Errors
    ///
    /// Returns [`XtermColorError::MissingDistance`] if the pair was never inserted.
    pub fn distance(&self, first: XtermColor, second: XtermColor) -> XtermResult<f64> {
        if first.code() == second.code() {
            return Ok(0.0);
        }
        let (low, high) = key(first, second);
        self.distances
            .get(&(low, high))
            .copied()
            .ok_or(XtermColorError::MissingDistance {
                first: low,
                second: high,
            })
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize { self.distances.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.distances.is_empty() }
}

fn key(first: XtermColor, second: XtermColor) -> (u8, u8) {
    let (a, b) = (first.code(), second.code());
    (a.min(b), a.max(b))
}

/// Delta-E 2000 distances between all pairs of `colors`.
///
/// # Errors
///
/// Returns [`XtermColorError::LabSupportNotInstalled`] without the `lab` feature.
pub fn calculate_distance_matrix(colors: &[XtermColor]) -> XtermResult<ColorDistanceMatrix> {
    require_lab_support()?;

    let labs = colors
        .iter()
        .map(XtermColor::as_lab)
        .collect::<XtermResult<Vec<LabValue>>>()?;

    let mut acc = ColorDistanceMatrix::default();
    for (i, (first, lab_1)) in colors.iter().zip(&labs).enumerate() {
        for (second, lab_2) in colors[i + 1..].iter().zip(&labs[i + 1..]) {
            acc.insert(*first, *second, lab_1.delta_e_cie2000(lab_2)?);
        }
    }

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "📐 Calculate distance matrix",
        candidates = %colors.len(),
        pairs = %acc.len()
    );

    Ok(acc)
}

/// Knobs for [`find_differentiated_colors`].
#[derive(Debug, Clone, Copy)]
pub struct DifferentiateOptions<'a> {
    /// Reuse a matrix from [`calculate_distance_matrix`] (or
    /// [`ColorDistanceMatrix::calculate_by`]) instead of computing a new one. It must
    /// contain every pair of the candidates.
    pub distance_matrix: Option<&'a ColorDistanceMatrix>,
    /// Candidates closer than this to any chosen color are skipped. The seed pair is
    /// always chosen.
    pub min_dist: f64,
}

impl Default for DifferentiateOptions<'_> {
    fn default() -> Self {
        Self {
            distance_matrix: None,
            min_dist: f64::NEG_INFINITY,
        }
    }
}

/// Selects `n` distinct colors from `colors`, as far apart as possible in Delta-E 2000.
/// Duplicates in `colors` are ignored. The result is in selection order.
///
/// # Errors
///
/// - [`XtermColorError::LabSupportNotInstalled`] without the `lab` feature, when no
///   distance matrix is passed in.
/// - [`XtermColorError::NotEnoughCandidates`] when fewer than `n` colors qualify.
/// - [`XtermColorError::MissingDistance`] when the passed in matrix is incomplete.
#[tracing::instrument(skip_all, fields(candidates = colors.len(), n = n))]
pub fn find_differentiated_colors(
    colors: &[XtermColor],
    n: usize,
    options: DifferentiateOptions<'_>,
) -> XtermResult<Vec<XtermColor>> {
    let candidates = dedup(colors);
    if n == 0 {
        return Ok(vec![]);
    }

    let owned_matrix;
    let matrix = match options.distance_matrix {
        Some(it) => it,
        None => {
            owned_matrix = calculate_distance_matrix(&candidates)?;
            &owned_matrix
        }
    };

    select_greedily(&candidates, n, options.min_dist, matrix)
}

/// Like [`find_differentiated_colors`], with a caller supplied distance function. This
/// works without the `lab` feature.
///
/// ```rust
/// use xterm256_colors::*;
///
/// let colors = find_differentiated_colors_by(&Fore256::all_colors(), 5, |a, b| {
///     hsv_distance(a.hsv(), b.hsv())
/// })
/// .unwrap();
/// assert_eq!(colors.len(), 5);
/// ```
///
/// # Errors
///
/// Returns [`XtermColorError::NotEnoughCandidates`] when there are fewer than `n`
/// distinct colors.
#[tracing::instrument(skip_all, fields(candidates = colors.len(), n = n))]
pub fn find_differentiated_colors_by(
    colors: &[XtermColor],
    n: usize,
    distance: impl Fn(XtermColor, XtermColor) -> f64,
) -> XtermResult<Vec<XtermColor>> {
    let candidates = dedup(colors);
    if n == 0 {
        return Ok(vec![]);
    }
    let matrix = ColorDistanceMatrix::calculate_by(&candidates, distance);
    select_greedily(&candidates, n, f64::NEG_INFINITY, &matrix)
}

/// Keeps the first occurrence of each color.
fn dedup(colors: &[XtermColor]) -> Vec<XtermColor> {
    let mut acc: Vec<XtermColor> = Vec::with_capacity(colors.len());
    for color in colors {
        if !acc.contains(color) {
            acc.push(*color);
        }
    }
    acc
}

fn select_greedily(
    candidates: &[XtermColor],
    n: usize,
    min_dist: f64,
    matrix: &ColorDistanceMatrix,
) -> XtermResult<Vec<XtermColor>> {
    let not_enough = |found: usize| {
        tracing::warn!(
            message = "🔍 Ran out of differentiated color candidates",
            requested = %n,
            found = %found
        );
        XtermColorError::NotEnoughCandidates {
            requested: n,
            found,
        }
    };

    let mut selected = match candidates {
        [] => return Err(not_enough(0)),
        [only] => vec![*only],
        _ => {
            let (first, second) = farthest_pair(candidates, matrix)?;
            vec![first, second]
        }
    };
    selected.truncate(n);

    while selected.len() < n {
        let mut best: Option<(XtermColor, f64)> = None;

        for candidate in candidates {
            if selected.contains(candidate) {
                continue;
            }

            let distances = selected
                .iter()
                .map(|chosen| matrix.distance(*chosen, *candidate))
                .collect::<XtermResult<Vec<f64>>>()?;

            if distances.iter().any(|it| *it < min_dist) {
                continue;
            }

            #[allow(clippy::cast_precision_loss)]
            let mean = distances.iter().sum::<f64>() / distances.len() as f64;
            if best.is_none_or(|(_, best_mean)| mean > best_mean) {
                best = Some((*candidate, mean));
            }
        }

        match best {
            Some((color, _)) => selected.push(color),
            None => return Err(not_enough(selected.len())),
        }
    }

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "🎨 Find differentiated colors",
        selected = ?selected.iter().map(XtermColor::name).collect::<Vec<_>>()
    );

    Ok(selected)
}

/// The first pair (in candidate order) with the largest distance.
fn farthest_pair(
    candidates: &[XtermColor],
    matrix: &ColorDistanceMatrix,
) -> XtermResult<(XtermColor, XtermColor)> {
    let mut best: Option<(XtermColor, XtermColor, f64)> = None;
    for (i, first) in candidates.iter().enumerate() {
        for second in &candidates[i + 1..] {
            let distance = matrix.distance(*first, *second)?;
            if best.is_none_or(|(_, _, best_distance)| distance > best_distance) {
                best = Some((*first, *second, distance));
            }
        }
    }
    best.map(|(first, second, _)| (first, second))
        .ok_or(XtermColorError::NotEnoughCandidates {
            requested: 2,
            found: candidates.len(),
        })
}
