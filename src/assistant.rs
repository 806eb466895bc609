use tracing::warn;

use crate::api::{AnalysisResponse, Status};
use crate::gemini::GeminiClient;
use crate::history::HistoryLog;

/// Builds a prompt from `(code, query)`, relays it to the hosted model, and
/// wraps the reply in the `{status, response}` envelope. Holds its own
/// history log rather than touching process-wide state.
pub struct Assistant {
    client: GeminiClient,
    history: HistoryLog,
}

impl Assistant {
    pub fn new(client: GeminiClient, history: HistoryLog) -> Self {
        Self { client, history }
    }

    pub async fn analyze(&self, code: &str, query: &str) -> AnalysisResponse {
        let Some(prompt) = build_prompt(code, query) else {
            return AnalysisResponse {
                status: Status::Error,
                response: "Please provide code to analyze or ask a question.".to_string(),
            };
        };

        match self.client.generate(&prompt).await {
            Ok(text) => {
                self.history.record(code, query, &text);
                AnalysisResponse {
                    status: Status::Success,
                    response: text,
                }
            }
            Err(err) => {
                warn!(error = %err, "analyze call failed");
                AnalysisResponse {
                    status: Status::Error,
                    response: format!("Error: {err}"),
                }
            }
        }
    }
}

/// Selects the prompt template, in priority order: query-only, code+query,
/// code-only. Returns `None` when both inputs are blank.
fn build_prompt(code: &str, query: &str) -> Option<String> {
    let code = code.trim();
    let query = query.trim();

    if code.is_empty() && !query.is_empty() {
        return Some(format!(
            "Programming Question: {query}\n\
             Please provide a detailed and helpful response, using code examples where appropriate."
        ));
    }

    if !code.is_empty() {
        if !query.is_empty() {
            return Some(format!(
                "Analyze this code and answer the question:\n\
                 ```\n{code}\n```\n\n\
                 Question: {query}\n\
                 Please provide a detailed response focusing on the code shown above."
            ));
        }
        return Some(format!(
            "Please analyze this code and explain what it does:\n\
             ```\n{code}\n```\n\
             Focus on the main functionality, important components, and potential improvements."
        ));
    }

    None
}
