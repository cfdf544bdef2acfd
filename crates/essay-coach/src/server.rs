//! MCP (Model Context Protocol) server implementation.
//!
//! This module exposes essay review functionality over the MCP protocol,
//! making it available to AI assistants via stdio transport.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer — it wraps the same core library
//! that the CLI commands use. Each `#[tool]` method should delegate to core
//! library functions rather than implementing business logic directly.
//!
//! # Adding Tools
//!
//! 1. Define a parameter struct with `Deserialize` + `JsonSchema`
//! 2. Add a `#[tool(description = "...")]` method to the `#[tool_router]` impl
//! 3. Call core library functions, convert errors to `McpError`
//! 4. Return `CallToolResult::success(vec![Content::text(...)])`

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use essay_coach_core::analysis::splitter::split_long_sentence;
use essay_coach_core::analysis::synonyms::synonyms_for;
use essay_coach_core::analysis::{ReviewOptions, run_essay_review};
use essay_coach_core::config::Config;
use essay_coach_core::lexicon::Thesaurus;
use essay_coach_core::text;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `review_essay` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ReviewEssayParams {
    /// The essay text to review.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Word-count cutoff for flagging long sentences.
    pub long_sentence_threshold: Option<usize>,
}

/// Parameters for the `suggest_synonyms` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SuggestSynonymsParams {
    /// The word to look up.
    pub word: String,
}

/// Parameters for the `split_sentence` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SplitSentenceParams {
    /// The sentence to split at conjunction boundaries.
    pub sentence: String,
}

/// MCP server exposing essay review to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct EssayCoachServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    thesaurus: Thesaurus,
    options: ReviewOptions,
    max_input: Option<usize>,
}

#[tool_router]
impl EssayCoachServer {
    /// Create a new MCP server instance.
    ///
    /// Loads the synonym database up front; an unreadable thesaurus refuses
    /// to serve rather than answering every lookup with an empty set.
    pub fn new(config: &Config, max_input: Option<usize>) -> anyhow::Result<Self> {
        let thesaurus = crate::commands::load_thesaurus(config)?;
        let options = crate::commands::review_options(config, None);
        Ok(Self {
            tool_router: Self::tool_router(),
            thesaurus,
            options,
            max_input,
        })
    }

    fn check_input_size(&self, len: usize) -> Result<(), McpError> {
        if let Some(max) = self.max_input
            && len > max
        {
            return Err(McpError::invalid_params(
                format!("input too large: {len} bytes (limit: {max} bytes)"),
                None,
            ));
        }
        Ok(())
    }

    /// Get package information.
    #[tool(description = "Get package name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run a full essay review.
    #[tool(
        description = "Review learner English prose: lexical diagnostics, vocabulary upgrade suggestions with synonyms, and long-sentence split plans."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn review_essay(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<ReviewEssayParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "review_essay",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );
        self.check_input_size(params.text.len())?;

        let options = ReviewOptions {
            long_sentence_threshold: params
                .long_sentence_threshold
                .unwrap_or(self.options.long_sentence_threshold),
            ..self.options.clone()
        };
        let report = run_essay_review(&params.text, params.strip_markdown, &self.thesaurus, &options)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(
            tool = "review_essay",
            total_words = report.diagnostics.total_words,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Look up synonym candidates for a word.
    #[tool(
        description = "Suggest higher-register synonym candidates for a word. An empty list means no recommendation is available."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn suggest_synonyms(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<SuggestSynonymsParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "suggest_synonyms", word = %params.word, "executing MCP tool");

        let synonyms = synonyms_for(&self.thesaurus, &params.word, self.options.max_synonyms);
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "word": params.word,
            "synonyms": synonyms,
        }))
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "suggest_synonyms", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Split a sentence at conjunction boundaries.
    #[tool(
        description = "Split a long sentence into shorter standalone sentences at comma-conjunction boundaries. Returns null when no safe split point exists."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn split_sentence(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<SplitSentenceParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "split_sentence", "executing MCP tool");
        self.check_input_size(params.sentence.len())?;

        let split = split_long_sentence(&params.sentence);
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "original": params.sentence,
            "word_count": text::word_count(&params.sentence),
            "split": split,
        }))
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;

        tracing::info!(tool = "split_sentence", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for EssayCoachServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use tools to review essays, suggest synonyms, and split long sentences.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
