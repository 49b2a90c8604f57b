//! Tracing shim for tool invocations.
//!
//! Every call is announced as `[Function Call] name(args)` before the wrapped
//! function runs. The logger never touches the result: values and errors come
//! back exactly as the function produced them.
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::providers::types::tool::Tool;

pub type LogSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Arguments of one call, already rendered for the log line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallArgs {
    positional: Vec<String>,
    keyword: Vec<(String, String)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg<T: Debug>(mut self, value: T) -> Self {
        self.positional.push(format!("{:?}", value));
        self
    }

    pub fn kwarg<T: Debug>(mut self, name: impl Into<String>, value: T) -> Self {
        self.keyword.push((name.into(), format!("{:?}", value)));
        self
    }

    /// Objects become keyword arguments, arrays positional ones.
    pub fn from_json(args: &Value) -> Self {
        match args {
            Value::Null => Self::new(),
            Value::Object(map) => map
                .iter()
                .fold(Self::new(), |acc, (name, value)| acc.kwarg(name, JsonRepr(value))),
            Value::Array(values) => values
                .iter()
                .fold(Self::new(), |acc, value| acc.arg(JsonRepr(value))),
            other => Self::new().arg(JsonRepr(other)),
        }
    }
}

impl Display for CallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .positional
            .iter()
            .cloned()
            .chain(
                self.keyword
                    .iter()
                    .map(|(name, value)| format!("{}: {}", name, value)),
            )
            .collect::<Vec<_>>();
        write!(f, "{}", rendered.join(", "))
    }
}

// Strings keep their quotes, everything else prints as JSON
struct JsonRepr<'a>(&'a Value);

impl Debug for JsonRepr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}

pub fn format_call(name: &str, args: &CallArgs) -> String {
    format!("[Function Call] {}({})", name, args)
}

#[derive(Clone)]
pub struct CallLogger {
    sink: LogSink,
}

impl Default for CallLogger {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Debug for CallLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallLogger").finish_non_exhaustive()
    }
}

impl CallLogger {
    pub fn stdout() -> Self {
        Self::with_sink(|line| println!("{}", line))
    }

    pub fn with_sink(sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    pub fn log(&self, name: &str, args: &CallArgs) {
        let line = format_call(name, args);
        debug!(tool = name, "{}", line);
        (self.sink)(&line);
    }

    /// Log the call, then run it.
    pub fn call<T, E>(
        &self,
        name: &str,
        args: CallArgs,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        self.log(name, &args);
        f()
    }

    /// Wrap a tool so each invocation is logged. Name, description and
    /// parameters are carried over untouched.
    pub fn wrap(&self, tool: Tool) -> Tool {
        let Tool {
            name,
            description,
            parameters,
            function,
        } = tool;

        let logger = self.clone();
        let logged_name = name.clone();
        Tool {
            name,
            description,
            parameters,
            function: Box::new(move |args| {
                logger.log(&logged_name, &CallArgs::from_json(args));
                function(args)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    fn capturing_logger() -> (CallLogger, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&lines);
        let logger = CallLogger::with_sink(move |line| sink.lock().unwrap().push(line.to_string()));
        (logger, lines)
    }

    fn output(lines: &Arc<Mutex<Vec<String>>>) -> String {
        lines.lock().unwrap().join("\n")
    }

    #[test]
    fn test_wrap_preserves_declaration() {
        let parameters = json!({ "type": "object", "properties": {} });
        let tool = Tool::new("sample_function", "This is a docstring.", parameters.clone(), |_| {
            Ok(json!("result"))
        });

        let wrapped = CallLogger::default().wrap(tool);
        assert_eq!(wrapped.name, "sample_function");
        assert_eq!(wrapped.description, "This is a docstring.");
        assert_eq!(wrapped.parameters, parameters);
    }

    #[test]
    fn test_logs_call_without_args() {
        let (logger, lines) = capturing_logger();
        let tool = logger.wrap(Tool::new("no_args_function", "", json!({}), |_| {
            Ok(json!("result"))
        }));

        let result = tool.call(&Value::Null).unwrap();
        assert_eq!(result, json!("result"));
        assert_eq!(output(&lines), "[Function Call] no_args_function()");

        tool.call(&json!({})).unwrap();
        assert_eq!(lines.lock().unwrap()[1], "[Function Call] no_args_function()");
    }

    #[test]
    fn test_logs_positional_arguments() {
        let (logger, lines) = capturing_logger();
        let result: Result<String, ()> = logger.call(
            "positional_args",
            CallArgs::new().arg("hello").arg("world"),
            || Ok(format!("{}, {}", "hello", "world")),
        );

        assert_eq!(result.unwrap(), "hello, world");
        assert_eq!(output(&lines), r#"[Function Call] positional_args("hello", "world")"#);
    }

    #[test]
    fn test_logs_keyword_arguments() {
        let (logger, lines) = capturing_logger();
        logger.log("keyword_args", &CallArgs::new().kwarg("name", "key").kwarg("value", 42));

        let out = output(&lines);
        assert!(out.contains("[Function Call] keyword_args"));
        assert!(out.contains(r#"name: "key""#));
        assert!(out.contains("value: 42"));
    }

    #[test]
    fn test_logs_mixed_arguments_positional_first() {
        let (logger, lines) = capturing_logger();
        logger.log(
            "mixed_args",
            &CallArgs::new().kwarg("key1", "c").arg("a").arg("b").kwarg("key2", "d"),
        );

        assert_eq!(
            output(&lines),
            r#"[Function Call] mixed_args("a", "b", key1: "c", key2: "d")"#
        );
    }

    #[test]
    fn test_logs_numeric_list_and_bool_arguments() {
        let (logger, lines) = capturing_logger();
        logger.log("numeric_args", &CallArgs::new().arg(42).arg(3.14));
        logger.log("list_args", &CallArgs::new().arg(vec![1, 2, 3]));
        logger.log("boolean_args", &CallArgs::new().arg(true).arg(false));
        logger.log("empty_string_arg", &CallArgs::new().arg(""));

        let lines = lines.lock().unwrap();
        assert_eq!(lines[0], "[Function Call] numeric_args(42, 3.14)");
        assert_eq!(lines[1], "[Function Call] list_args([1, 2, 3])");
        assert_eq!(lines[2], "[Function Call] boolean_args(true, false)");
        assert_eq!(lines[3], r#"[Function Call] empty_string_arg("")"#);
    }

    #[test]
    fn test_json_arguments() {
        let args = CallArgs::from_json(&json!({ "file_path": "a.txt", "data": { "key": "value" }, "n": 5 }));
        let rendered = args.to_string();
        assert!(rendered.contains(r#"data: {"key":"value"}"#));
        assert!(rendered.contains(r#"file_path: "a.txt""#));
        assert!(rendered.contains("n: 5"));
        assert_eq!(rendered.matches(", ").count(), 2);

        let args = CallArgs::from_json(&json!(["a", 1, [1, 2, 3]]));
        assert_eq!(args.to_string(), r#""a", 1, [1,2,3]"#);

        let args = CallArgs::from_json(&json!("solo"));
        assert_eq!(args.to_string(), r#""solo""#);
    }

    #[test]
    fn test_wrapped_tool_logs_json_args() {
        let (logger, lines) = capturing_logger();
        let tool = logger.wrap(Tool::new("read_file", "", json!({}), |args| {
            Ok(args["file_path"].clone())
        }));

        let result = tool.call(&json!({ "file_path": "notes.txt" })).unwrap();
        assert_eq!(result, json!("notes.txt"));
        assert_eq!(output(&lines), r#"[Function Call] read_file(file_path: "notes.txt")"#);
    }

    #[test]
    fn test_propagates_errors_unchanged() {
        let (logger, lines) = capturing_logger();
        let tool = logger.wrap(Tool::new("exception_function", "", json!({}), |_| {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "Test exception").into())
        }));

        let err = tool.call(&json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Test exception");
        let io = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
        // Logged before the failure
        assert_eq!(output(&lines), "[Function Call] exception_function()");
    }

    #[test]
    fn test_unit_return() {
        let (logger, lines) = capturing_logger();
        let result: Result<(), std::io::Error> = logger.call("none_return", CallArgs::new(), || Ok(()));
        assert!(result.is_ok());
        assert_eq!(output(&lines), "[Function Call] none_return()");
    }

    #[test]
    fn test_multiple_calls() {
        let (logger, lines) = capturing_logger();
        let tool = logger.wrap(Tool::new("multi_call", "", json!({}), |args| {
            Ok(json!(args[0].as_i64().unwrap_or_default() * 2))
        }));

        assert_eq!(tool.call(&json!([5])).unwrap(), json!(10));
        assert_eq!(tool.call(&json!([10])).unwrap(), json!(20));

        let out = output(&lines);
        assert_eq!(out.matches("[Function Call] multi_call").count(), 2);
        assert!(out.contains("multi_call(5)"));
        assert!(out.contains("multi_call(10)"));
    }
}
