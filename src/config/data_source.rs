//! Data acquisition entry points
//!
//! The application ships three ways to obtain the HTS/CROSS data. Each maps
//! to one script in the project directory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeployError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Bundled sample tariff data, no network needed
    #[default]
    Quick,
    /// Live scraping of the HTSUS and CROSS websites
    Scrape,
    /// Download of the official HTS release
    Official,
}

impl DataSource {
    pub const ALL: [DataSource; 3] = [Self::Quick, Self::Scrape, Self::Official];

    /// Script run by the data setup step
    pub fn script(self) -> &'static str {
        match self {
            Self::Quick => "quick_setup_data.py",
            Self::Scrape => "run_scrapers.py",
            Self::Official => "download_official_data.py",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Scrape => "scrape",
            Self::Official => "official",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataSource {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|source| source.as_str() == wanted)
            .ok_or_else(|| DeployError::InvalidDataSource {
                value: s.to_string(),
            })
    }
}
