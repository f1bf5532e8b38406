pub mod fuzzy;
pub mod normalize;

use rayon::prelude::*;

/// A record that carries a precomputed match key.
pub trait Searchable {
    fn match_key(&self) -> &str;
}

/// Generic top-K ranking function built for multithreaded scoring.
///
/// Every record is scored, records that score zero or below are dropped,
/// and the `limit` best are returned with their weight. The sort is stable
/// and descending, so equal weights keep collection order and the result
/// is fully determined by the collection and the scorer.
pub fn rank<'a, T, F>(haystack: &'a [T], limit: usize, score: F) -> Vec<(f64, &'a T)>
where
    T: Send + Sync,
    F: Fn(&'a T) -> f64 + Send + Sync,
{
    let mut results: Vec<(f64, &T)> = haystack
        .par_iter()
        .filter_map(|hay| {
            let weight = score(hay);
            if weight > 0.0 { Some((weight, hay)) } else { None }
        })
        .collect();

    results.par_sort_by(|(a, _), (b, _)| b.total_cmp(a));
    results.truncate(limit);
    results
}

/// Ranks a collection against an already-normalized needle using each
/// record's precomputed key.
pub fn rank_by_key<'a, T>(haystack: &'a [T], limit: usize, needle: &str) -> Vec<(f64, &'a T)>
where
    T: Searchable + Send + Sync,
{
    rank(haystack, limit, |hay| {
        fuzzy::jaro_winkler(needle, hay.match_key())
    })
}
