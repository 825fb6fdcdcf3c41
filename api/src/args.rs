use std::time::Duration;

use clap::{Args as ClapArgs, Parser};
use shelflife_core::domain::common::{
    DatabaseConfig, LLMConfig, RecipeConfig, ShelfLifeConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "shelflife", version, about = "ShelfLife pantry and recipe API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub recipe: RecipeArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "SERVER_PORT", default_value_t = 3001)]
    pub port: u16,

    /// Prefix for every route, e.g. "/api".
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "shelflife")]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Without a key every generation fails over to the built-in recipes.
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = "")]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct RecipeArgs {
    #[arg(
        long = "recipe-generation-timeout-secs",
        env = "RECIPE_GENERATION_TIMEOUT_SECS",
        default_value_t = 15
    )]
    pub generation_timeout_secs: u64,

    #[arg(long = "recipe-temperature", env = "RECIPE_TEMPERATURE", default_value_t = 0.7)]
    pub temperature: f32,

    #[arg(
        long = "recipe-max-output-tokens",
        env = "RECIPE_MAX_OUTPUT_TOKENS",
        default_value_t = 2048
    )]
    pub max_output_tokens: u32,

    #[arg(long = "recipe-history-limit", env = "RECIPE_HISTORY_LIMIT", default_value_t = 20)]
    pub history_limit: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directive.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for ShelfLifeConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
            recipe: RecipeConfig {
                generation_timeout: Duration::from_secs(args.recipe.generation_timeout_secs),
                temperature: args.recipe.temperature,
                max_output_tokens: args.recipe.max_output_tokens,
                recipe_history_limit: args.recipe.history_limit,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::parse_from([
            "shelflife",
            "--database-host",
            "db.internal",
            "--database-name",
            "pantry",
            "--gemini-api-key",
            "secret",
            "--recipe-generation-timeout-secs",
            "5",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);

        let config = ShelfLifeConfig::from(args);
        assert_eq!(config.database.host, "db.internal");
        assert!(config.database.url().ends_with("@db.internal:5432/pantry"));
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.recipe.generation_timeout, Duration::from_secs(5));
        assert_eq!(config.recipe.max_output_tokens, 2048);
    }
}
