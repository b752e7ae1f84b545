//! Market sector definitions and their data-source presets
//!
//! Each sector carries the subreddit and keyword sets used to scope the
//! ingestion run. Callers needing different sources build a
//! [`SectorQuery`] by hand instead.

use crate::model::SectorQuery;
use serde::{Deserialize, Serialize};

/// Market sector presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sector {
    Technology,
    Healthcare,
    Finance,
    Energy,
    Consumer,
}

impl Sector {
    /// Get sector display name
    pub fn name(&self) -> &'static str {
        match self {
            Sector::Technology => "Technology",
            Sector::Healthcare => "Healthcare",
            Sector::Finance => "Finance",
            Sector::Energy => "Energy",
            Sector::Consumer => "Consumer",
        }
    }

    /// Subreddits searched for this sector
    pub fn subreddits(&self) -> &'static [&'static str] {
        match self {
            Sector::Technology => {
                &["investing", "stocks", "wallstreetbets", "technology", "artificial"]
            }
            Sector::Healthcare => &["investing", "stocks", "wallstreetbets", "healthcare", "biotech"],
            Sector::Finance => {
                &["investing", "stocks", "wallstreetbets", "finance", "cryptocurrency"]
            }
            Sector::Energy => {
                &["investing", "stocks", "wallstreetbets", "energy", "renewableenergy"]
            }
            Sector::Consumer => &["investing", "stocks", "wallstreetbets", "consumer", "retail"],
        }
    }

    /// Search keywords for this sector
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Sector::Technology => {
                &["tech", "software", "AI", "semiconductor", "cloud", "digital", "innovation"]
            }
            Sector::Healthcare => {
                &["healthcare", "biotech", "pharma", "medical", "drug", "treatment", "health"]
            }
            Sector::Finance => {
                &["finance", "banking", "fintech", "insurance", "investment", "crypto", "blockchain"]
            }
            Sector::Energy => {
                &["energy", "oil", "gas", "renewable", "solar", "wind", "battery", "clean"]
            }
            Sector::Consumer => {
                &["consumer", "retail", "ecommerce", "food", "beverage", "apparel", "luxury"]
            }
        }
    }

    /// Get all sectors
    pub fn all() -> Vec<Sector> {
        vec![
            Sector::Technology,
            Sector::Healthcare,
            Sector::Finance,
            Sector::Energy,
            Sector::Consumer,
        ]
    }

    /// Parse sector from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "technology" | "tech" => Some(Sector::Technology),
            "healthcare" | "health" => Some(Sector::Healthcare),
            "finance" | "financials" | "financial" => Some(Sector::Finance),
            "energy" => Some(Sector::Energy),
            "consumer" | "retail" => Some(Sector::Consumer),
            _ => None,
        }
    }

    /// Build the default query for this sector
    pub fn query(&self) -> SectorQuery {
        self.query_with_top_k(5)
    }

    /// Build a query for this sector with an explicit top-K
    pub fn query_with_top_k(&self, top_k: usize) -> SectorQuery {
        SectorQuery::new(
            self.name(),
            self.subreddits().iter().copied(),
            self.keywords().iter().copied(),
            top_k,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(Sector::from_str("tech"), Some(Sector::Technology));
        assert_eq!(Sector::from_str("TECHNOLOGY"), Some(Sector::Technology));
        assert_eq!(Sector::from_str("financials"), Some(Sector::Finance));
        assert_eq!(Sector::from_str("plastics"), None);
    }

    #[test]
    fn test_every_sector_has_sources_and_keywords() {
        for sector in Sector::all() {
            assert!(!sector.subreddits().is_empty());
            assert!(!sector.keywords().is_empty());
        }
    }

    #[test]
    fn test_query_construction() {
        let query = Sector::Energy.query_with_top_k(3);
        assert_eq!(query.sector, "Energy");
        assert_eq!(query.top_k, 3);
        assert!(query.sources.contains("renewableenergy"));
        assert!(query.keywords.contains("solar"));
    }
}
