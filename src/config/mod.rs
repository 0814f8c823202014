//! Configuration module

mod site;

pub use site::FetchStrategy;
pub use site::LabelsConfig;
pub use site::ObserverConfig;
pub use site::RootMarginConfig;
pub use site::SiteConfig;
