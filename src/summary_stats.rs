/// Threshold below which a spread is treated as zero.
const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
pub struct DescribeRow {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Five-number summary plus mean and sample standard deviation, matching
/// what the dataset's consumers are used to seeing for these attributes.
pub fn describe(column: &str, values: &[f64]) -> Option<DescribeRow> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len() as f64;
    let mean = sorted.iter().sum::<f64>() / n;
    let std = if sorted.len() > 1 {
        let var = sorted.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n - 1.0);
        var.sqrt()
    } else {
        0.0
    };

    Some(DescribeRow {
        column: column.to_string(),
        count: sorted.len(),
        mean,
        std,
        min: sorted[0],
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.50),
        q3: quantile_sorted(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    })
}

/// Linear-interpolation quantile over an ascending slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Pearson correlation of two equal-length series. None when either side
/// has no spread or fewer than two points.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x < EPSILON || var_y < EPSILON {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// Row-major; None where a pair had no overlapping spread.
    pub cells: Vec<Vec<Option<f64>>>,
}

/// Pairwise Pearson matrix over named series. Each pair is restricted to
/// the positions where both series have a value.
pub fn correlation_matrix(series: &[(String, Vec<Option<f64>>)]) -> CorrelationMatrix {
    let labels = series.iter().map(|(name, _)| name.clone()).collect();
    let mut cells = vec![vec![None; series.len()]; series.len()];

    for (i, (_, xs)) in series.iter().enumerate() {
        for (j, (_, ys)) in series.iter().enumerate() {
            if j < i {
                cells[i][j] = cells[j][i];
                continue;
            }
            let mut paired_x = Vec::new();
            let mut paired_y = Vec::new();
            for (x, y) in xs.iter().zip(ys) {
                if let (Some(x), Some(y)) = (x, y) {
                    paired_x.push(*x);
                    paired_y.push(*y);
                }
            }
            cells[i][j] = if i == j && !paired_x.is_empty() {
                Some(1.0)
            } else {
                pearson(&paired_x, &paired_y)
            };
        }
    }

    CorrelationMatrix { labels, cells }
}

#[derive(Debug, Clone)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: u64,
}

/// Equal-width bins over [min, max]; the top edge is inclusive so the max
/// lands in the last bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }

    let span = max - min;
    if span < EPSILON {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len() as u64,
        }];
    }

    let width = span / bins as f64;
    let mut counts = vec![0u64; bins];
    for v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: min + width * idx as f64,
            upper: min + width * (idx + 1) as f64,
            count,
        })
        .collect()
}
