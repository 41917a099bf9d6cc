use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{
    FemaleBandPolicy, MaleBandPolicy, ReplenishmentPolicy, SizeBands, StyleThresholds,
};

/// Loads the replenishment policy.
///
/// With an explicit path the file must exist and parse; without one, a
/// `restock.toml` in the working directory is merged over the canonical
/// defaults when present. Either way the result is validated before the
/// engine ever sees it.
pub fn load_policy(path: Option<&Path>) -> Result<ReplenishmentPolicy, ConfigError> {
    let builder = match path {
        Some(path) => {
            config::Config::builder().add_source(config::File::from(path.to_path_buf()))
        }
        None => config::Config::builder()
            .add_source(config::File::with_name("restock").required(false)),
    }
    .build()?;

    // Fields absent from the file fall back to the canonical defaults via serde.
    let policy = builder.try_deserialize::<ReplenishmentPolicy>()?;
    validate(&policy)?;

    Ok(policy)
}

/// Rejects policy values the calculation cannot be total over.
fn validate(policy: &ReplenishmentPolicy) -> Result<(), ConfigError> {
    if policy.observation_window_days == 0 {
        return Err(ConfigError::ValidationError(
            "observation_window_days must be greater than 0".to_string(),
        ));
    }
    if policy.sell_rate_threshold.is_sign_negative() {
        return Err(ConfigError::ValidationError(
            "sell_rate_threshold must not be negative".to_string(),
        ));
    }
    let bands = &policy.bands;
    if bands.female_min > bands.female_max || bands.male_min > bands.male_max {
        return Err(ConfigError::ValidationError(
            "size band boundaries must be ordered".to_string(),
        ));
    }
    if policy.male.max_edge_stock < 0 {
        return Err(ConfigError::ValidationError(
            "max_edge_stock must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_default_file_yields_canonical_policy() {
        let policy = load_policy(None).expect("defaults should always load");
        assert_eq!(policy.observation_window_days, 30);
        assert_eq!(policy.thresholds.female, 8);
    }

    #[test]
    fn zero_window_is_rejected() {
        let mut policy = ReplenishmentPolicy::default();
        policy.observation_window_days = 0;
        assert!(validate(&policy).is_err());
    }
}
