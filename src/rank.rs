// src/rank.rs
//! Course ranking.
//!
//! 1. A zero star (missing or unreadable rating) counts as neutral (3).
//! 2. Stable sort by star, best first.
//! 3. `point = 100 - min_rank / n * 100`, rounded to 2 decimals, where
//!    `min_rank` is one more than the number of strictly better stars and `n`
//!    is the number of records before dedup. Ties share a point.
//! 4. A trailing parenthesised section suffix is dropped from the course name.
//! 5. Only the first (best) entry per (course, professor) is kept.

use std::collections::HashSet;

use tracing::debug;

use crate::config::consts::POINT_SCALE;
use crate::core::sanitize::strip_course_suffix;
use crate::record::{RankedCourse, Record, Star};

pub fn rank(records: &[Record]) -> Vec<RankedCourse> {
    let n = records.len();
    let mut sorted: Vec<(Star, &Record)> = records
        .iter()
        .map(|r| (if r.star.is_zero() { Star::NEUTRAL } else { r.star }, r))
        .collect();
    sorted.sort_by(|a, b| b.0.value().total_cmp(&a.0.value()));

    let mut out = Vec::with_capacity(n);
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut better = 0usize;

    for (i, (star, rec)) in sorted.iter().enumerate() {
        if i > 0 && sorted[i - 1].0 != *star {
            better = i;
        }
        let point = round2(POINT_SCALE - (better + 1) as f64 / n as f64 * POINT_SCALE);

        let course_name = strip_course_suffix(&rec.course);
        if !seen.insert((course_name.clone(), rec.professor.clone())) {
            debug!(course = %course_name, professor = %rec.professor, "duplicate dropped");
            continue;
        }

        out.push(RankedCourse {
            course_name,
            professor_name: rec.professor.clone(),
            star: *star,
            point,
        });
    }
    out
}

/// Two decimals, ties to even.
fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(star: f64, course: &str, prof: &str) -> Record {
        Record {
            star: Star::new(star),
            course: s!(course),
            professor: s!(prof),
            course_code: s!(),
        }
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn sorted_best_first_with_points() {
        let out = rank(&[rec(2.0, "A", "p"), rec(5.0, "B", "q"), rec(4.0, "C", "r"), rec(1.0, "D", "s")]);
        let names: Vec<_> = out.iter().map(|r| r.course_name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A", "D"]);
        let points: Vec<_> = out.iter().map(|r| r.point).collect();
        assert_eq!(points, vec![75.0, 50.0, 25.0, 0.0]);
    }

    #[test]
    fn zero_becomes_neutral() {
        let out = rank(&[rec(0.0, "A", "p"), rec(4.0, "B", "q")]);
        assert_eq!(out[1].course_name, "A");
        assert_eq!(out[1].star, Star::NEUTRAL);
    }

    #[test]
    fn ties_share_min_rank() {
        let out = rank(&[rec(4.0, "A", "p"), rec(4.0, "B", "q"), rec(3.0, "C", "r")]);
        assert_eq!(out[0].point, out[1].point);
        assert_eq!(out[0].point, round2(100.0 - 100.0 / 3.0));
        assert_eq!(out[2].point, 0.0);
        // stable: input order kept among ties
        assert_eq!(out[0].course_name, "A");
    }

    #[test]
    fn duplicates_keep_best_after_suffix_strip() {
        let out = rank(&[
            rec(3.0, "Systems (01)", "Kim"),
            rec(5.0, "Systems (02)", "Kim"),
            rec(4.0, "Systems (03)", "Lee"),
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].course_name, "Systems");
        assert_eq!(out[0].star, Star::new(5.0));
        assert_eq!(out[1].professor_name, "Lee");
    }

    #[test]
    fn points_use_count_before_dedup() {
        let out = rank(&[rec(5.0, "A", "p"), rec(5.0, "A", "p")]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].point, 50.0);
    }

    #[test]
    fn round2_ties_to_even() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.125), 0.12);
    }
}
