mod growth_summary;

pub use growth_summary::GrowthSummary;
