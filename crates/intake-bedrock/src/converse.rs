use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use intake_classify::{BoxFuture, Classifier, ClassifierError};

use crate::error::BedrockError;
use crate::usage::{self, TokenCount};

const SYSTEM_PROMPT: &str = "\
You support a structured mental health intake interview. Follow the output \
format requested in each message exactly and add nothing else. You never \
give advice or make diagnoses directly to the patient.";

/// Every prompt asks for a label or a small JSON object.
const MAX_TOKENS: i32 = 512;

/// Classification port backed by a Bedrock Converse call.
#[derive(Clone)]
pub struct BedrockClassifier {
    client: Client,
    model_id: String,
}

struct Reply {
    text: String,
    tokens: TokenCount,
}

impl BedrockClassifier {
    pub fn new(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }

    /// One single-turn, zero-temperature exchange.
    async fn converse(&self, prompt: &str) -> Result<Reply, BedrockError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;
        let inference = InferenceConfiguration::builder()
            .max_tokens(MAX_TOKENS)
            .temperature(0.0)
            .build();

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
            .inference_config(inference)
            .messages(message)
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        let content = match response.output() {
            Some(output) => output
                .as_message()
                .map(|m| m.content())
                .map_err(|_| BedrockError::ResponseParse("output is not a message".to_string()))?,
            None => return Err(BedrockError::ResponseParse("empty output".to_string())),
        };

        Ok(Reply {
            text: reply_text(content),
            tokens: response
                .usage()
                .map(TokenCount::from_usage)
                .unwrap_or_default(),
        })
    }
}

impl Classifier for BedrockClassifier {
    fn classify<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, ClassifierError>> {
        Box::pin(async move {
            let request_id = Uuid::new_v4();
            let reply = self.converse(prompt).await?;
            info!(
                request_id = %request_id,
                model = %self.model_id,
                input_tokens = reply.tokens.input,
                output_tokens = reply.tokens.output,
                cost_usd = usage::cost_usd(&self.model_id, reply.tokens),
                "classification complete"
            );
            Ok(reply.text)
        })
    }
}

/// Concatenate the text blocks of a reply, ignoring any other block kinds.
pub fn reply_text(content: &[ContentBlock]) -> String {
    content
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Text(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}
