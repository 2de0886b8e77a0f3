use crate::config::Config;
use axum::extract::FromRef;
use haven_auth::jwt::JwtValidationArgs;
use media_client::MediaStore;
use std::sync::Arc;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: mongodb::Database,
    pub jwt_args: JwtValidationArgs,
    pub media: MediaStore,
}

impl AppState {
    #[cfg(test)]
    pub fn new_testing() -> Self {
        // Nothing here ever connects: the client is lazy and the router
        // tests never reach a real collection or bucket.
        let options = mongodb::options::ClientOptions::builder()
            .hosts(vec![mongodb::options::ServerAddress::Tcp {
                host: "localhost".to_string(),
                port: Some(27017),
            }])
            .build();
        let client =
            mongodb::Client::with_options(options).expect("failed to create test mongo client");

        let s3 = aws_sdk_s3::Client::from_conf(
            aws_sdk_s3::Config::builder()
                .behavior_version(aws_sdk_s3::config::BehaviorVersion::latest())
                .build(),
        );

        AppState {
            config: Arc::new(Config::new_testing()),
            db: client.database("haven_test"),
            jwt_args: JwtValidationArgs::new_testing(),
            media: MediaStore::new(s3, "haven-media-test".to_string()),
        }
    }
}
