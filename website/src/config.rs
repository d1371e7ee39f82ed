use std::sync::LazyLock;

use pssr::SiteConfig;

pub static CONFIG: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::default);
