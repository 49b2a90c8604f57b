use serde_json::Value;
use tracing::{debug, warn};

use crate::config::AgentConfiguration;
use crate::errors::{AgentError, AgentResult};
use crate::providers::base::{GenerateContentConfig, Provider};
use crate::providers::gemini::GeminiProvider;
use crate::providers::types::content::{FunctionCall, FunctionResponse, Part};
use crate::providers::types::message::{Role, Turn};
use crate::providers::types::response::GenerateContentResponse;
use crate::providers::types::tool::{FunctionDeclaration, Tool};
use crate::providers::utils::validate_declarations;

pub const DEFAULT_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// What the caller hands to [`Agent::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum RunInput {
    /// A fresh user message.
    Text(String),
    /// Pre-built parts, typically function responses.
    Parts(Vec<Part>),
}

impl From<&str> for RunInput {
    fn from(text: &str) -> Self {
        RunInput::Text(text.to_string())
    }
}

impl From<String> for RunInput {
    fn from(text: String) -> Self {
        RunInput::Text(text)
    }
}

impl From<Vec<Part>> for RunInput {
    fn from(parts: Vec<Part>) -> Self {
        RunInput::Parts(parts)
    }
}

/// A conversation with a remote model plus the local tools it may call.
///
/// The agent exclusively owns its history; `run` takes `&mut self`, so one
/// turn is in flight at a time. Share it across threads behind a `Mutex`.
pub struct Agent {
    model: String,
    provider: Box<dyn Provider>,
    contents: Vec<Turn>,
    tools: Vec<Tool>,
    system_instruction: String,
    max_turns: usize,
}

impl Agent {
    pub fn new(provider: Box<dyn Provider>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            provider,
            contents: Vec::new(),
            tools: Vec::new(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
            max_turns: crate::config::DEFAULT_MAX_TURNS,
        }
    }

    /// An agent talking to Gemini with the configured key, model and turn limit.
    pub fn from_config(config: &AgentConfiguration) -> AgentResult<Self> {
        let provider = GeminiProvider::new(config.provider_config().clone())?;
        Ok(Self::new(Box::new(provider), config.model()).with_max_turns(config.max_turns()))
    }

    /// Register the tools the model may call. Names must be valid and unique.
    pub fn with_tools(mut self, tools: Vec<Tool>) -> AgentResult<Self> {
        let declarations: Vec<FunctionDeclaration> = tools.iter().map(Tool::declaration).collect();
        validate_declarations(&declarations)?;
        self.tools = tools;
        Ok(self)
    }

    pub fn with_system_instruction(mut self, system_instruction: impl Into<String>) -> Self {
        self.system_instruction = system_instruction.into();
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// The conversation so far, oldest turn first.
    pub fn contents(&self) -> &[Turn] {
        &self.contents
    }

    fn request_config(&self) -> GenerateContentConfig {
        GenerateContentConfig {
            system_instruction: self.system_instruction.clone(),
            tools: self.tools.iter().map(Tool::declaration).collect(),
        }
    }

    /// Execute one conversational turn.
    ///
    /// Appends the user turn, sends the whole history and appends the model's
    /// reply. Function calls in the reply are left for the caller; see
    /// [`Agent::execute_function_calls`] and [`Agent::run_to_completion`].
    ///
    /// If the previous user turn never got a reply, the new parts are added
    /// to it so roles keep alternating.
    pub fn run(&mut self, input: impl Into<RunInput>) -> AgentResult<GenerateContentResponse> {
        let parts = match input.into() {
            RunInput::Text(text) => vec![Part::text(text)],
            RunInput::Parts(parts) => parts,
        };
        let turn = Turn::new(Role::User, parts)
            .map_err(|err| AgentError::InvalidTurn(err.to_string()))?;
        match self.contents.last_mut() {
            Some(last) if last.role == Role::User => last.parts.extend(turn.parts),
            _ => self.contents.push(turn),
        }

        let config = self.request_config();
        let response = self
            .provider
            .generate_content(&self.model, &self.contents, &config)?;

        let reply = response.require_turn()?.clone();
        debug!(
            turns = self.contents.len() + 1,
            function_calls = reply.function_calls().len(),
            "model replied"
        );
        self.contents.push(reply);

        Ok(response)
    }

    /// Invoke the named local tool. Tool errors come back as the tool raised them.
    pub fn call_tool(&self, call: &FunctionCall) -> AgentResult<Value> {
        let tool = self
            .tools
            .iter()
            .find(|tool| tool.name == call.name)
            .ok_or_else(|| AgentError::ToolNotFound(call.name.clone()))?;

        tool.call(&call.args).map_err(|source| AgentError::Tool {
            name: call.name.clone(),
            source,
        })
    }

    /// Run every function call of a reply, in order, and build the parts to
    /// send back. Failures are reported to the model rather than aborting.
    pub fn execute_function_calls(&self, response: &GenerateContentResponse) -> Vec<Part> {
        response
            .function_calls()
            .iter()
            .map(|call| {
                let function_response = match self.call_tool(call) {
                    Ok(value) => FunctionResponse::result(call, value),
                    Err(err) => {
                        warn!(tool = %call.name, error = %err, "reporting tool failure to the model");
                        FunctionResponse::error(call, err.to_string())
                    }
                };
                Part::function_response(function_response)
            })
            .collect()
    }

    /// Drive the tool dispatch loop until the model answers without function
    /// calls, or fail once `max_turns` model replies have been spent.
    ///
    /// On the turn limit the pending calls are answered with an error, so the
    /// history stays valid for the next request.
    pub fn run_to_completion(
        &mut self,
        input: impl Into<RunInput>,
    ) -> AgentResult<GenerateContentResponse> {
        let mut response = self.run(input)?;
        let mut turns = 1;

        while response.has_function_calls() {
            if turns >= self.max_turns {
                let err = AgentError::TurnLimitExceeded(self.max_turns);
                warn!(max_turns = self.max_turns, "abandoning pending function calls");
                let parts = response
                    .function_calls()
                    .iter()
                    .map(|call| {
                        Part::function_response(FunctionResponse::error(call, err.to_string()))
                    })
                    .collect();
                self.contents.push(Turn {
                    role: Role::User,
                    parts,
                });
                return Err(err);
            }
            let parts = self.execute_function_calls(&response);
            response = self.run(parts)?;
            turns += 1;
        }

        Ok(response)
    }
}
