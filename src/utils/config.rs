use std::env;

/// Region used when neither the environment nor `playground.toml` names one
pub const DEFAULT_REGION: &str = "us-east-2";

/// AWS region and credentials, passed through unmodified to the endpoint client
#[derive(Clone)]
pub struct AwsSettings {
    /// `AWS_REGION`, else the config fallback, else [`DEFAULT_REGION`]
    pub region: String,
    /// `AWS_ACCESS_KEY_ID`
    pub access_key_id: Option<String>,
    /// `AWS_SECRET_ACCESS_KEY`
    pub secret_access_key: Option<String>,
    /// `AWS_SESSION_TOKEN`, for temporary credentials
    pub session_token: Option<String>,
}

impl AwsSettings {
    /// Read settings from the process environment, loading `.env` first.
    ///
    /// Never fails; absent credentials surface when a request is made.
    pub fn from_env() -> Self {
        Self::from_env_with_region(None)
    }

    /// Same as [`from_env`](Self::from_env), with a region fallback from config
    pub fn from_env_with_region(fallback_region: Option<&str>) -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok(), fallback_region)
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        fallback_region: Option<&str>,
    ) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            region: non_empty("AWS_REGION")
                .or_else(|| fallback_region.map(str::to_string))
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key_id: non_empty("AWS_ACCESS_KEY_ID"),
            secret_access_key: non_empty("AWS_SECRET_ACCESS_KEY"),
            session_token: non_empty("AWS_SESSION_TOKEN"),
        }
    }
}

// Keep secrets out of logs
impl std::fmt::Debug for AwsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSettings")
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id.as_ref().map(|_| "<set>"))
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<set>"),
            )
            .field("session_token", &self.session_token.as_ref().map(|_| "<set>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let settings = AwsSettings::from_lookup(lookup_from(&[]), None);
        assert_eq!(settings.region, DEFAULT_REGION);
        assert!(settings.access_key_id.is_none());
        assert!(settings.secret_access_key.is_none());
        assert!(settings.session_token.is_none());
    }

    #[test]
    fn test_environment_region_beats_config_fallback() {
        let settings =
            AwsSettings::from_lookup(lookup_from(&[("AWS_REGION", "eu-west-1")]), Some("us-west-2"));
        assert_eq!(settings.region, "eu-west-1");

        let settings = AwsSettings::from_lookup(lookup_from(&[]), Some("us-west-2"));
        assert_eq!(settings.region, "us-west-2");
    }

    #[test]
    fn test_blank_values_are_treated_as_missing() {
        let settings = AwsSettings::from_lookup(
            lookup_from(&[("AWS_REGION", " "), ("AWS_ACCESS_KEY_ID", "")]),
            None,
        );
        assert_eq!(settings.region, DEFAULT_REGION);
        assert!(settings.access_key_id.is_none());
    }

    #[test]
    fn test_credentials_pass_through() {
        let settings = AwsSettings::from_lookup(
            lookup_from(&[
                ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
                ("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI"),
                ("AWS_SESSION_TOKEN", "token"),
            ]),
            None,
        );
        assert_eq!(settings.secret_access_key.as_deref(), Some("wJalrXUtnFEMI"));
        assert_eq!(settings.access_key_id.as_deref(), Some("AKIDEXAMPLE"));
        assert_eq!(settings.session_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let settings = AwsSettings::from_lookup(
            lookup_from(&[
                ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
                ("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI"),
            ]),
            None,
        );
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("wJalrXUtnFEMI"));
        assert!(debug.contains("<set>"));
    }
}
