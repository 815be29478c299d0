pub mod card;
pub mod chart;
pub mod dashboard;
pub mod metrics;
pub mod series;

pub use card::*;
pub use chart::*;
pub use dashboard::*;
pub use metrics::*;
pub use series::*;
