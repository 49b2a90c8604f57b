//! An agent specialised in file system operations.
use std::ops::{Deref, DerefMut};

use crate::agent::Agent;
use crate::config::AgentConfiguration;
use crate::errors::AgentResult;
use crate::providers::base::Provider;
use crate::tools::file_tools::file_tools;

pub const FILE_AGENT_INSTRUCTION: &str = "You are a helpful file management assistant.
You have access to tools for reading, writing, and listing files.
Always be careful when writing files - make sure you understand the context first.
When asked to work with files, use the appropriate tools.";

/// An [`Agent`] preloaded with the file tools and a file management instruction.
pub struct FileAgent {
    agent: Agent,
}

impl FileAgent {
    pub fn new(config: &AgentConfiguration) -> AgentResult<Self> {
        Self::from_agent(Agent::from_config(config)?)
    }

    pub fn with_provider(provider: Box<dyn Provider>, model: impl Into<String>) -> AgentResult<Self> {
        Self::from_agent(Agent::new(provider, model))
    }

    fn from_agent(agent: Agent) -> AgentResult<Self> {
        let agent = agent
            .with_system_instruction(FILE_AGENT_INSTRUCTION)
            .with_tools(file_tools())?;
        Ok(Self { agent })
    }
}

impl Deref for FileAgent {
    type Target = Agent;

    fn deref(&self) -> &Agent {
        &self.agent
    }
}

impl DerefMut for FileAgent {
    fn deref_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }
}
