//! The dashboard's pages

pub mod analysis;
pub mod home;
pub mod overview;

pub use analysis::AnalysisPage;
pub use home::HomePage;
pub use overview::{OverviewPage, OverviewTab};
