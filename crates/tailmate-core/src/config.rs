/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (with `#[serde(default)]` for any
/// optional settings) and call `Config::from_env()` at startup.
///
/// # Panics
///
/// `from_env` panics if a variable is present but cannot be deserialized.
pub trait Config: Sized + ::serde::de::DeserializeOwned {
    fn from_env() -> Self {
        Self::from_vars(std::env::vars()).expect("failed to load config from environment")
    }

    /// Load configuration from an explicit set of `(name, value)` pairs.
    fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
