mod report;
pub mod sections;

pub use report::Report;
