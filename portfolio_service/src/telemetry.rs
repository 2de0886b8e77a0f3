//! Tracing initialization, shared by the binary entrypoint.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Install the panic hook and the tracing subscriber: pretty human output on
/// localhost, flattened JSON everywhere else.
pub fn init(environment: Environment) {
    std::panic::set_hook(Box::new(tracing_panic::panic_hook));

    match environment {
        Environment::Local => {
            tracing_subscriber::fmt()
                .with_ansi(true)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .init();
        }
        Environment::Production | Environment::Develop => {
            tracing_subscriber::fmt()
                .with_ansi(false)
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init();
        }
    }
}
