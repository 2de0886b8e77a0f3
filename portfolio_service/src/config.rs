use anyhow::Context;
use std::fmt::Display;
use std::str::FromStr;

/// The current environment the application is running in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// The server is running on localhost
    Local,
}

impl Environment {
    /// Read the environment from `ENVIRONMENT`, falling back to prod so a
    /// misconfigured box never comes up chatty.
    pub fn new_or_prod() -> Self {
        std::env::var("ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(environment: &str) -> Result<Self, Self::Err> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(format!("could not convert {s} into an environment value")),
        }
    }
}

pub struct Config {
    /// port number of service
    pub port: usize,
    /// The environment we are in
    pub environment: Environment,
    /// The connection URL for the MongoDB deployment this application should use.
    pub mongodb_uri: String,
    /// The database holding the portfolio collections
    pub mongodb_database: String,
    /// The bucket property/unit media uploads land in
    pub media_bucket: String,
    /// Audience claim stamped on and required of access tokens
    pub jwt_audience: String,
    /// Issuer claim stamped on and required of access tokens
    pub jwt_issuer: String,
    /// HS256 signing secret for access tokens
    pub jwt_secret: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: usize = std::env::var("PORT")
            .unwrap_or("8080".to_string())
            .parse::<usize>()
            .context("PORT must be a number")?;

        let mongodb_uri = std::env::var("MONGODB_URI").context("MONGODB_URI must be provided")?;

        let mongodb_database = std::env::var("MONGODB_DATABASE").unwrap_or("haven".to_string());

        let media_bucket = std::env::var("MEDIA_BUCKET").unwrap_or("haven-media".to_string());

        let jwt_audience = std::env::var("JWT_AUDIENCE").unwrap_or("haven_app".to_string());

        let jwt_issuer = std::env::var("JWT_ISSUER").unwrap_or("auth.haven.app".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET must be provided")?;

        let environment = Environment::new_or_prod();

        Ok(Config {
            port,
            environment,
            mongodb_uri,
            mongodb_database,
            media_bucket,
            jwt_audience,
            jwt_issuer,
            jwt_secret,
        })
    }

    #[cfg(test)]
    pub fn new_testing() -> Self {
        Config {
            port: 0,
            environment: Environment::Local,
            mongodb_uri: "".to_string(),
            mongodb_database: "haven_test".to_string(),
            media_bucket: "".to_string(),
            jwt_audience: "haven_testing".to_string(),
            jwt_issuer: "test.haven.local".to_string(),
            jwt_secret: "super_secret_key".to_string(),
        }
    }
}
