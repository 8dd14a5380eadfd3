use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use thiserror::Error;

macro_rules! category {
    ($ident:ident { $($variant:ident = $name:literal),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $ident {
            $($variant),*
        }

        impl $ident {
            pub const ALL: &[Self] = &[$(Self::$variant),*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }
        }

        impl fmt::Display for $ident {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ident {
            type Err = UnknownCategoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|category| category.as_str() == s)
                    .ok_or_else(|| UnknownCategoryError(s.into()))
            }
        }
    };
}

category!(ArticleCategory {
    Ai = "ai",
    Automation = "automation",
    Design = "design",
    Insights = "insights",
    Trends = "trends",
});

category!(ProjectCategory {
    Ai = "ai",
    Branding = "branding",
    Web = "web",
    Design = "design",
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategoryError(pub String);

/// Category selection of a listing page, `all` shows everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: PartialEq> CategoryFilter<C> {
    pub fn matches(&self, category: &C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl<C: FromStr<Err = UnknownCategoryError>> FromStr for CategoryFilter<C> {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            _ => s.parse().map(Self::Only),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: ArticleCategory,
    pub date: NaiveDate,
    pub read_time_minutes: u32,
}

impl ArticleSummary {
    /// Long US-style date, e.g. `January 8, 2025`.
    pub fn display_date(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub summary: ArticleSummary,
    pub author: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub client: String,
    pub category: ProjectCategory,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudy {
    pub project: Project,
    pub challenge: String,
    pub solution: String,
    pub process: Vec<String>,
    pub results: Vec<CaseStudyResult>,
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseStudyResult {
    pub metric: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub slug: String,
    /// Prefix of the service's texts, `services.items.<key>`.
    pub key: String,
    pub next_slug: String,
}

/// A service together with its localized texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDetail {
    pub service: Service,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}
