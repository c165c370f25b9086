//! Build-time configuration for the API endpoint. Configuration values are
//! public; do not store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables, defaulting to the
    /// backend's local development address.
    pub fn load() -> Self {
        let api_base_url = option_env!("USER_AUTH_API_URL").unwrap_or("http://localhost:1337");

        Self {
            api_base_url: api_base_url.to_string(),
        }
    }
}
