use dnsdrone_domain::{CliOverrides, Config};

/// Loads the optional config file, applies command line overrides and
/// validates the result. Runs before logging is initialised.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}
