//! AWS Bedrock Runtime endpoint
//!
//! Thin [`ModelInvoker`] over `aws-sdk-bedrockruntime`'s `InvokeModel` call.
//! Building the client is synchronous and never fails. Credentials come from the
//! `AWS_*` keys when both are set, otherwise from the AWS default chain, and a
//! missing identity is only reported when a request is sent.
//!
//! # Example
//!
//! ```rust,ignore
//! use bedrock_playground::llm::{BedrockRuntime, ModelInvoker};
//!
//! let runtime = BedrockRuntime::from_env();
//! let body = br#"{"prompt":"Human: hi\n\nAssistant:","max_tokens_to_sample":200}"#.to_vec();
//! let reply = runtime.invoke("anthropic.claude-v2", body).await?;
//! ```

use super::client::ModelInvoker;
use super::error::InvocationError;
use crate::utils::config::AwsSettings;
use async_trait::async_trait;
use aws_config::ecs::EcsCredentialsProvider;
use aws_config::imds::credentials::ImdsCredentialsProvider;
use aws_config::meta::credentials::CredentialsProviderChain;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::provider_config::ProviderConfig;
use aws_config::web_identity_token::WebIdentityTokenCredentialsProvider;
use aws_sdk_bedrockruntime::config::retry::RetryConfig;
use aws_sdk_bedrockruntime::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, SdkError};
use aws_sdk_bedrockruntime::primitives::Blob;
use aws_sdk_bedrockruntime::{Client, Config};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Provider name attached to static credentials read from the environment
const CREDENTIALS_PROVIDER: &str = "bedrock-playground-env";

/// SDK error text that means no identity could be resolved for signing
const CREDENTIAL_FAILURE_MARKERS: &[&str] = &[
    "identity resolver",
    "auth scheme",
    "credentials",
    "credential provider",
];

/// Where a [`BedrockRuntime`] gets its AWS identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsSource {
    /// `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` (and optional session token)
    Environment,
    /// Shared profile files, web identity, container and instance roles
    DefaultChain,
}

/// Bedrock Runtime client configured from [`AwsSettings`]
#[derive(Clone)]
pub struct BedrockRuntime {
    client: Client,
    region: String,
    credentials_source: CredentialsSource,
}

impl BedrockRuntime {
    /// Build a client from `AWS_REGION` and the `AWS_*` credential variables
    pub fn from_env() -> Self {
        Self::new(&AwsSettings::from_env())
    }

    /// Build a client from explicit settings
    ///
    /// Keys from the settings win. Without them the client resolves credentials
    /// lazily through the AWS default chain on the first request.
    pub fn new(settings: &AwsSettings) -> Self {
        let region = Region::new(settings.region.clone());
        let builder = Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(region.clone())
            .retry_config(RetryConfig::disabled());

        let (builder, credentials_source) =
            match (&settings.access_key_id, &settings.secret_access_key) {
                (Some(access_key), Some(secret_key)) => (
                    builder.credentials_provider(Credentials::new(
                        access_key.clone(),
                        secret_key.clone(),
                        settings.session_token.clone(),
                        None,
                        CREDENTIALS_PROVIDER,
                    )),
                    CredentialsSource::Environment,
                ),
                _ => (
                    builder.credentials_provider(default_chain(region)),
                    CredentialsSource::DefaultChain,
                ),
            };

        tracing::debug!(
            region = %settings.region,
            credentials = ?credentials_source,
            "Bedrock Runtime client configured"
        );

        Self {
            client: Client::from_conf(builder.build()),
            region: settings.region.clone(),
            credentials_source,
        }
    }

    /// Region requests are sent to
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Where credentials come from
    pub fn credentials_source(&self) -> CredentialsSource {
        self.credentials_source
    }
}

/// The SDK's default lookup order, minus the environment keys handled above
fn default_chain(region: Region) -> CredentialsProviderChain {
    let provider_config = ProviderConfig::default().with_region(Some(region));

    CredentialsProviderChain::first_try(
        "Profile",
        ProfileFileCredentialsProvider::builder()
            .configure(&provider_config)
            .build(),
    )
    .or_else(
        "WebIdentityToken",
        WebIdentityTokenCredentialsProvider::builder()
            .configure(&provider_config)
            .build(),
    )
    .or_else(
        "EcsContainer",
        EcsCredentialsProvider::builder()
            .configure(&provider_config)
            .build(),
    )
    .or_else(
        "Ec2InstanceMetadata",
        ImdsCredentialsProvider::builder()
            .configure(&provider_config)
            .build(),
    )
}

#[async_trait]
impl ModelInvoker for BedrockRuntime {
    async fn invoke(&self, target: &str, body: Vec<u8>) -> Result<Vec<u8>, InvocationError> {
        let output = self
            .client
            .invoke_model()
            .model_id(target)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(map_sdk_error)?;

        Ok(output.body.into_inner())
    }

    fn endpoint_name(&self) -> &str {
        "bedrock-runtime"
    }
}

fn map_sdk_error<E, R>(err: SdkError<E, R>) -> InvocationError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    let message = DisplayErrorContext(&err).to_string();
    match err {
        SdkError::ServiceError(_) => InvocationError::Service {
            message,
            source: Some(Box::new(err)),
        },
        _ if is_credentials_failure(&message) => InvocationError::Credentials {
            message,
            source: Some(Box::new(err)),
        },
        _ => InvocationError::Transport {
            message,
            source: Some(Box::new(err)),
        },
    }
}

/// Whether a client-side SDK error came from identity resolution
fn is_credentials_failure(message: &str) -> bool {
    let lowered = message.to_lowercase();
    CREDENTIAL_FAILURE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
