//! Content store and typed content schema.
//!
//! - `node`: resolved values (`ContentNode`, `Scalar`, `Record`, `Shape`)
//! - `store`: locale-keyed dictionaries and dotted-path resolution
//! - `schema`: typed sections resolved from the store

mod node;
mod schema;
mod store;

pub use node::{ContentNode, Record, Scalar, Shape};
pub use schema::{
    FooterContent, HeroContent, InfoPageContent, InfoSection, InsightCard, InsightColor,
    InsightsContent, Metric, MetricStatus, NavContent, NotFoundContent, PerformanceContent,
    ResearcherContent, SiteContent, StatsContent, TechStackContent,
};
pub use store::ContentStore;
