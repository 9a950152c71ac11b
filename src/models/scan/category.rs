use serde::{Deserialize, Serialize};
use std::fmt;

// The four scored categories, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryId {
    #[serde(rename = "performance")]
    Performance,
    #[serde(rename = "accessibility")]
    Accessibility,
    #[serde(rename = "seo")]
    Seo,
    #[serde(rename = "best-practices")]
    BestPractices,
}

impl CategoryId {
    pub const ALL: [CategoryId; 4] = [
        CategoryId::Performance,
        CategoryId::Accessibility,
        CategoryId::Seo,
        CategoryId::BestPractices,
    ];

    /// Id used by the full report's `categories` map.
    pub fn id(self) -> &'static str {
        match self {
            CategoryId::Performance => "performance",
            CategoryId::Accessibility => "accessibility",
            CategoryId::Seo => "seo",
            CategoryId::BestPractices => "best-practices",
        }
    }

    /// Key used by the scan summary.
    pub fn summary_key(self) -> &'static str {
        match self {
            CategoryId::BestPractices => "bestPractices",
            other => other.id(),
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CategoryId::Performance => "Performance",
            CategoryId::Accessibility => "Accessibility",
            CategoryId::Seo => "SEO",
            CategoryId::BestPractices => "Best Practices",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// Validated copy of the scan summary, one score per category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub performance: f64,
    pub accessibility: f64,
    pub seo: f64,
    #[serde(rename = "bestPractices")]
    pub best_practices: f64,
}

impl Summary {
    pub fn score(&self, category: CategoryId) -> f64 {
        match category {
            CategoryId::Performance => self.performance,
            CategoryId::Accessibility => self.accessibility,
            CategoryId::Seo => self.seo,
            CategoryId::BestPractices => self.best_practices,
        }
    }

    /// Scores paired with their summary keys, in serialization order.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        CategoryId::ALL.map(|category| (category.summary_key(), self.score(category)))
    }

    pub fn mean(&self) -> f64 {
        (self.performance + self.accessibility + self.seo + self.best_practices) / 4.0
    }
}
