use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{AppContext, InitArgs};
use crate::core::results::DEFAULT_DISPLAY_CHARS;

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
    /// Recognized document extensions (without the dot)
    pub extensions: Vec<String>,

    /// Filename globs never treated as candidates
    pub exclude: Vec<String>,

    /// Characters of matched text shown before truncation
    pub display_chars: usize,

    /// Worker threads for scoring (0 = one per core)
    pub jobs: usize,

    /// Ignore very frequent characters when seeding matches in long texts
    pub autojunk: bool,

    /// Sort candidate documents by name before scoring
    pub sort_candidates: bool,
}

impl Default for Config
{
    fn default() -> Self
    {
        Self {
            extensions: vec!["txt".to_string(), "md".to_string()],
            exclude: Vec::new(),
            display_chars: DEFAULT_DISPLAY_CHARS,
            jobs: 0,
            autojunk: true,
            sort_candidates: false,
        }
    }
}

pub fn load_config() -> Result<Config>
{
    let mut builder = config::Config::builder();

    // Load from config files in priority order
    let config_paths = ["docmatch.toml", "docmatch.yaml", "docmatch.json", ".docmatch.toml"];

    for path in &config_paths
    {
        if Path::new(path).exists()
        {
            builder = builder.add_source(config::File::with_name(path));
            break;
        }
    }

    // DOCMATCH_DISPLAY_CHARS=80, DOCMATCH_EXTENSIONS=txt,md
    builder = builder.add_source(
        config::Environment::with_prefix("DOCMATCH")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("extensions")
            .with_list_parse_key("exclude"),
    );

    let cfg = builder
        .build()
        .context("Failed to load configuration")?;
    let parsed: Config = cfg
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(parsed)
}

pub fn init(
    args: InitArgs,
    ctx: &AppContext,
) -> Result<()>
{
    let config_path = args
        .path
        .join("docmatch.toml");

    if config_path.exists() && !args.force
    {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).context("Failed to serialize default config")?;

    if ctx.dry_run
    {
        if !ctx.quiet
        {
            println!("Would write {}:\n{}", config_path.display(), toml_string);
        }
        return Ok(());
    }

    std::fs::write(&config_path, toml_string).context("Failed to write config file")?;

    if !ctx.quiet
    {
        println!("Created config file at {}", config_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml()
    {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("display_chars = 50"));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.extensions, vec!["txt", "md"]);
        assert!(parsed.autojunk);
    }

    #[test]
    fn test_partial_config_uses_defaults()
    {
        let parsed: Config = toml::from_str("jobs = 2\n").unwrap();
        assert_eq!(parsed.jobs, 2);
        assert_eq!(parsed.display_chars, DEFAULT_DISPLAY_CHARS);
        assert!(!parsed.sort_candidates);
    }
}
