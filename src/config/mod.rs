//! Configuration module

mod site;

pub use site::FeatureConfig;
pub use site::HeroAction;
pub use site::HeroConfig;
pub use site::LinksConfig;
pub use site::LoaderConfig;
pub use site::MarketingConfig;
pub use site::SiteConfig;
pub use site::StrapiConfig;
