use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

pub type ToolFunction = Box<dyn Fn(&Value) -> anyhow::Result<Value> + Send + Sync>;

/// What the model is told about a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// A tool that can be used by a model.
pub struct Tool {
    /// The name of the tool
    pub name: String,
    /// A description of what the tool does
    pub description: String,
    /// A json schema of the function signature
    pub parameters: Value,
    /// The function that powers the tool
    pub function: ToolFunction,
}

impl Tool {
    pub fn new<N, D>(
        name: N,
        description: D,
        parameters: Value,
        function: impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    ) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Tool {
            name: name.into(),
            description: description.into(),
            parameters,
            function: Box::new(function),
        }
    }

    pub fn call(&self, args: &Value) -> anyhow::Result<Value> {
        (self.function)(args)
    }

    pub fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration {
            name: self.name.clone(),
            description: self.description.clone(),
            parameters: self.parameters.clone(),
        }
    }
}

impl Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("function", &"<function>")
            .finish()
    }
}
