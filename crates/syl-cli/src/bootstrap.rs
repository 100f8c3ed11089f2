use anyhow::Context;
use syl_config::SyllabusConfig;

/// Load layered configuration, reading `.env` from the current directory first.
pub fn load_config() -> anyhow::Result<SyllabusConfig> {
    SyllabusConfig::load_with_dotenv().context("failed to load syllabus configuration")
}
