//! Terminal output

mod report;

pub use report::format_outcome;
