/// Temperature-scaled softmax over raw logits.
///
/// At or below the 1e-8 temperature floor the distribution collapses to an
/// exact one-hot at the argmax logit (first occurrence on ties). Above it,
/// the maximum logit is subtracted before exponentiation; a non-positive
/// normalizer is treated as 1 so the output never contains NaN from a
/// zero-sum division.
pub fn softmax_with_temperature(logits: &[f64], temperature: f64) -> Vec<f64> {
    let n = logits.len();
    if n == 0 {
        return Vec::new();
    }

    if temperature <= 1e-8 {
        let mut out = vec![0.0; n];
        out[argmax(logits)] = 1.0;
        return out;
    }

    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut out: Vec<f64> = logits
        .iter()
        .map(|&l| ((l - max) / temperature).exp())
        .collect();
    let mut sum: f64 = out.iter().sum();
    if sum <= 0.0 {
        sum = 1.0;
    }
    for p in &mut out {
        *p /= sum;
    }
    out
}

/// Shannon entropy of a distribution normalized by ln(n) into [0, 1].
///
/// Entries are floored at 1e-12 before the log. An empty slice reads as
/// maximally undecided (1.0); a single-element distribution as fully
/// decided (0.0).
pub fn normalized_entropy(probs: &[f64]) -> f64 {
    let n = probs.len();
    if n == 0 {
        return 1.0;
    }

    let mut h = 0.0;
    for &p in probs {
        let x = if p <= 1e-12 { 1e-12 } else { p };
        h -= x * x.ln();
    }

    let h_max = (n as f64).ln();
    if h_max > 0.0 {
        h / h_max
    } else {
        0.0
    }
}

/// Walk the cumulative distribution until it covers `r`. Falls back to the
/// final index when rounding leaves the cumulative sum short of `r`.
pub fn sample_index(probs: &[f64], r: f64) -> usize {
    let mut cdf = 0.0;
    for (k, &p) in probs.iter().enumerate() {
        cdf += p;
        if r <= cdf {
            return k;
        }
    }
    probs.len().saturating_sub(1)
}

fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
