use syl_config::{ENV_PREFIX, SyllabusConfig};

/// Log configuration problems that degrade results without failing.
pub fn warn_unconfigured(config: &SyllabusConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SyllabusConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    if config.search.is_configured() {
        return Vec::new();
    }

    let single_underscore = format!("{ENV_PREFIX}SEARCH_API_KEY");
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    if env_keys.iter().any(|key| *key == single_underscore) {
        vec![format!(
            "{single_underscore} is set but ignored. Use double underscores ({ENV_PREFIX}SEARCH__API_KEY)."
        )]
    } else {
        vec![format!(
            "Search API key is not configured; resource lookups will return no results. Set {ENV_PREFIX}SEARCH__API_KEY or search.api_key in config.toml."
        )]
    }
}
