// src/config/consts.rs

// Extraction
pub const ROW_SELECTOR: &str = "tr";
pub const STAR_SELECTOR: &str = "a.star";
pub const COURSE_SELECTOR: &str = "td.bold";
pub const RATING_ATTR: &str = "title";

// Ranking
pub const NEUTRAL_STAR: f64 = 3.0;
pub const POINT_SCALE: f64 = 100.0;

// Export
pub const DEFAULT_TABLE: &str = "rating";
pub const DEFAULT_FILE: &str = "star";
pub const DEFAULT_RANKED_FILE: &str = "sorted_ranking";

// Logging
pub const LOG_TARGET: &str = "star_scrape";
