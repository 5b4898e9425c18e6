use std::env;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Movies table name (default: "Movies")
    pub movies_table_name: String,
    /// Cast table name (default: "MovieCast")
    pub cast_table_name: String,
    /// Cast table index keyed by role name (default: "roleIx")
    pub cast_role_index_name: String,
    /// AWS region for the DynamoDB client (default: "eu-west-1")
    pub region: String,
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local
    pub endpoint_url: Option<String>,
    /// Log output format (default: text)
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MOVIES_TABLE_NAME` - Movies table (default: "Movies")
    /// - `CAST_TABLE_NAME` - Cast table (default: "MovieCast")
    /// - `CAST_ROLE_INDEX_NAME` - Role-name index on the cast table (default: "roleIx")
    /// - `REGION`, then `AWS_REGION` - AWS region (default: "eu-west-1")
    /// - `AWS_ENDPOINT_URL` - Custom DynamoDB endpoint (optional)
    /// - `LOG_FORMAT` - "text" or "json" (default: "text")
    pub fn from_env() -> Self {
        Self {
            movies_table_name: env::var("MOVIES_TABLE_NAME")
                .unwrap_or_else(|_| "Movies".to_string()),
            cast_table_name: env::var("CAST_TABLE_NAME")
                .unwrap_or_else(|_| "MovieCast".to_string()),
            cast_role_index_name: env::var("CAST_ROLE_INDEX_NAME")
                .unwrap_or_else(|_| "roleIx".to_string()),
            region: env::var("REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .unwrap_or_else(|_| "eu-west-1".to_string()),
            endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),
            log_format: env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Text),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
