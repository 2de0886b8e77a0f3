use anyhow::Context;
use bson::doc;
use std::sync::Arc;

use haven_auth::jwt::JwtValidationArgs;
use media_client::MediaStore;
use portfolio_service::api;
use portfolio_service::api::context::AppState;
use portfolio_service::config::Config;

async fn connect_to_database(config: &Config) -> anyhow::Result<mongodb::Database> {
    let client = mongodb::Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("could not connect to mongodb")?;
    let db = client.database(&config.mongodb_database);

    // Fail fast on a bad deployment instead of at the first request
    db.run_command(doc! { "ping": 1 })
        .await
        .context("mongodb ping failed")?;
    Ok(db)
}

async fn create_media_store(config: &Config) -> MediaStore {
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region("us-east-1")
        .load()
        .await;
    MediaStore::new(
        aws_sdk_s3::Client::new(&aws_config),
        config.media_bucket.clone(),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env().context("expected to be able to generate config")?;
    portfolio_service::telemetry::init(config.environment);

    let db = connect_to_database(&config).await?;
    let media = create_media_store(&config).await;

    let jwt_args = JwtValidationArgs::new(
        config.jwt_audience.clone(),
        config.jwt_issuer.clone(),
        config.jwt_secret.clone(),
    );

    api::setup_and_serve(AppState {
        config: Arc::new(config),
        db,
        jwt_args,
        media,
    })
    .await?;
    Ok(())
}
