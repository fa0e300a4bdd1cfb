/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json_format: bool,
}
