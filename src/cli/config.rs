use crate::config::ComparatorConfig;
use crate::errors::ComparatorError;

pub fn handle_config(config: &ComparatorConfig) -> Result<(), ComparatorError> {
    print!("{}", serde_yaml::to_string(&config.redacted())?);
    Ok(())
}
