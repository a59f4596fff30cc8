//! Scenario catalog lookups shared by the front-ends.

use std::path::Path;

use impact_config::{ConfigError, ImpactSite, ModelConfig, default_sites, load_model, load_sites};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("impact site '{0}' not found in catalog")]
    SiteNotFound(String),
}

/// Load the model from `path`, or fall back to the built-in parameters.
pub fn model_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<ModelConfig, ScenarioError> {
    match path {
        Some(path) => Ok(load_model(path)?),
        None => Ok(ModelConfig::default()),
    }
}

/// Load sites from `path`, or fall back to the built-in catalog.
pub fn sites_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Vec<ImpactSite>, ScenarioError> {
    match path {
        Some(path) => Ok(load_sites(path)?),
        None => Ok(default_sites()),
    }
}

/// Find a site by case-insensitive name.
pub fn find_site(sites: &[ImpactSite], name: &str) -> Result<ImpactSite, ScenarioError> {
    let upper = name.to_uppercase();
    sites
        .iter()
        .find(|site| site.name.to_uppercase() == upper)
        .cloned()
        .ok_or_else(|| ScenarioError::SiteNotFound(name.to_string()))
}
