//! The four analysis views. Pure functions over a dataset snapshot,
//! returning plain structured data so any rendering layer can consume them.

use crate::types::Product;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Equal-width price histogram. `edges` has one more entry than `counts`;
/// bin `i` covers `[edges[i], edges[i + 1])`, except the last bin which is
/// closed so the maximum price is not lost off the end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mean_price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Partitions prices into `bin_count` equal-width bins over `[min, max]`.
/// `None` is the explicit no-data result for an empty snapshot. When all
/// prices are equal the span is degenerate and a single bin covering that
/// one value is returned instead of dividing by zero.
pub fn price_distribution(snapshot: &[Product], bin_count: usize) -> Option<PriceHistogram> {
    if snapshot.is_empty() || bin_count == 0 {
        return None;
    }

    let min = snapshot.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max = snapshot
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Some(PriceHistogram {
            edges: vec![min, max],
            counts: vec![snapshot.len()],
        });
    }

    let width = (max - min) / bin_count as f64;
    let mut counts = vec![0usize; bin_count];
    for product in snapshot {
        // Clamp so the maximum lands in the last bin rather than past it.
        let index = (((product.price - min) / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    let edges = (0..=bin_count).map(|i| min + width * i as f64).collect();
    Some(PriceHistogram { edges, counts })
}

/// Mean price per calendar day of `scraped_at`, ascending by date. Days
/// with no records are simply absent; no interpolation. Within a single
/// scrape session all records share one date, so the trend only becomes
/// interesting across multiple sessions.
pub fn price_trend(snapshot: &[Product]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for product in snapshot {
        let entry = by_date.entry(product.scraped_at.date_naive()).or_insert((0.0, 0));
        entry.0 += product.price;
        entry.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| TrendPoint {
            date,
            mean_price: sum / count as f64,
        })
        .collect()
}

/// Top `n` products by rating descending, ties broken by name ascending so
/// the ordering is deterministic. Returns fewer when the snapshot is smaller.
pub fn top_rated(snapshot: &[Product], n: usize) -> Vec<Product> {
    let mut ranked = snapshot.to_vec();
    ranked.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(n);
    ranked
}

/// Product count per category, descending by count, ties broken by
/// category name ascending.
pub fn category_counts(snapshot: &[Product]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for product in snapshot {
        *counts.entry(product.category.as_str()).or_insert(0) += 1;
    }

    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    result
}
