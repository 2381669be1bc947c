// src/services/advisor.rs

pub mod fallback;

use crate::{
    config::RemoteCompletionConfig,
    models::advisor::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage},
};

// Preâmbulo fixo enviado ao serviço remoto de completions
const SYSTEM_PREAMBLE: &str = "You are an AI assistant for a Resource Allocation System. \
    Help users with workload management, employee assignments, and project planning. \
    Provide practical, actionable advice.";

// Teto de resposta e temperatura fixa da chamada remota
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

// O assistente de análise de carga: tenta o serviço remoto e, em qualquer
// falha ou resposta vazia, cai para as respostas locais determinísticas.
// Sem estado entre chamadas.
#[derive(Clone)]
pub struct AdvisorService {
    http: reqwest::Client,
    remote: Option<RemoteCompletionConfig>,
}

impl AdvisorService {
    pub fn new(http: reqwest::Client, remote: Option<RemoteCompletionConfig>) -> Self {
        Self { http, remote }
    }

    /// O chamador SEMPRE recebe algum texto: a falha remota é engolida e
    /// logada, nunca propagada.
    pub async fn analyze(&self, query: &str) -> String {
        if let Some(remote) = &self.remote {
            match self.call_remote(remote, query).await {
                Ok(text) if !text.trim().is_empty() => {
                    tracing::info!("✅ Resposta do serviço remoto recebida");
                    return text.trim().to_string();
                }
                Ok(_) => tracing::warn!("⚠️ Serviço remoto devolveu texto vazio"),
                Err(e) => tracing::warn!("⚠️ Falha no serviço remoto de completions: {}", e),
            }

            tracing::info!("🔄 Usando resposta local do assistente");
        }

        fallback::respond(query, &mut rand::thread_rng())
    }

    async fn call_remote(
        &self,
        remote: &RemoteCompletionConfig,
        query: &str,
    ) -> Result<String, reqwest::Error> {
        let request = ChatCompletionRequest {
            model: remote.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PREAMBLE.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: query.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response: ChatCompletionResponse = self
            .http
            .post(&remote.api_url)
            .bearer_auth(&remote.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default())
    }
}
