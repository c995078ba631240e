//! Main Financial Modeling Prep API client
use crate::request::Request;

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com";

/// Environment variable read by `Fmp::new()` when the `dotenvy` feature is enabled.
pub const API_KEY_VAR: &str = "FMP_API_KEY";

/// The main Financial Modeling Prep API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(feature = "reqwest")]
#[derive(Debug, Clone)]
pub struct Fmp<Client: Request = reqwest::Client> {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

/// The main Financial Modeling Prep API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
#[derive(Debug, Clone)]
pub struct Fmp<Client: Request = crate::request::HyperClient> {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

/// The main Financial Modeling Prep API client.
///
/// When the `reqwest` feature is enabled, this uses `reqwest::Client` as the default HTTP client.
/// When the `hyper` feature is enabled, this uses `HyperClient` as the default HTTP client.
/// Otherwise, you must provide your own HTTP client that implements [`Request`].
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
#[derive(Debug, Clone)]
pub struct Fmp<Client: Request> {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl<Client: Request> Fmp<Client> {
    /// Create a new client using the default HTTP client.
    ///
    /// This method is only available when the `dotenvy` feature is enabled.
    /// It loads the API key from the `FMP_API_KEY` environment variable using dotenvy.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing from both `.env` and the environment.
    #[cfg(feature = "dotenvy")]
    pub fn new() -> crate::Result<Self> {
        dotenvy::dotenv().ok(); // Try to load .env file, ignore errors

        let api_key = std::env::var(API_KEY_VAR).map_err(|_| crate::Error::MissingApiKey)?;

        Ok(Self::from_client(Client::new()).with_key(api_key))
    }

    #[cfg(not(feature = "dotenvy"))]
    /// Create a new client with the default HTTP client.
    ///
    /// You must manually set the API key using [`with_key`](Self::with_key).
    pub fn new() -> Self {
        Self::from_client(Client::new())
    }

    /// Create a client around an existing HTTP client, with no API key set.
    pub fn from_client(client: Client) -> Self {
        Self {
            client,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets the HTTP client for this instance.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    /// Set the API key for this instance.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fmprep::Fmp;
    ///
    /// let client = Fmp::default().with_key("my_api_key");
    /// ```
    pub fn with_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a different host (a proxy or a local test server).
    ///
    /// A trailing slash is ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Get the API key for this instance.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a reference to the underlying HTTP client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Build the full URL for `path`, appending `params` and then the API key.
    pub(crate) fn url(&self, path: &str, params: &[(&str, String)]) -> crate::Result<String> {
        self.build_url(path, None, params)
    }

    /// Like [`url`](Self::url), with `symbol` appended as one percent-encoded path segment.
    pub(crate) fn symbol_url(
        &self,
        path: &str,
        symbol: &str,
        params: &[(&str, String)],
    ) -> crate::Result<String> {
        self.build_url(path, Some(symbol), params)
    }

    fn build_url(
        &self,
        path: &str,
        symbol: Option<&str>,
        params: &[(&str, String)],
    ) -> crate::Result<String> {
        let api_key = self.api_key().ok_or(crate::Error::MissingApiKey)?;

        let mut url = url::Url::parse(&self.base_url)?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                crate::Error::Custom(format!("base URL cannot carry a path: {}", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(symbol) = symbol {
                segments.push(symbol);
            }
        }

        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("apikey", api_key));
        url.set_query(Some(&serde_urlencoded::to_string(&query)?));

        Ok(url.into())
    }
}

// Default implementation for reqwest
#[cfg(feature = "reqwest")]
impl Default for Fmp<reqwest::Client> {
    fn default() -> Self {
        Self::from_client(reqwest::Client::new())
    }
}

// Default implementation for hyper
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
impl Default for Fmp<crate::request::HyperClient> {
    fn default() -> Self {
        Self::from_client(<crate::request::HyperClient as Request>::new())
    }
}

// Default implementation when no HTTP client feature is enabled
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
impl<Client: Request> Default for Fmp<Client> {
    /// Create a default client with no API key set.
    ///
    /// You must call [`with_key`](Self::with_key) to set the API key before making requests.
    fn default() -> Self {
        Self::from_client(Client::new())
    }
}
