//! File system tools exposed to the model.
//!
//! Every path goes through `~` expansion first. Failures are the plain
//! [`std::io::Error`] of the underlying operation.
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::anyhow;
use serde_json::{json, Value};

use crate::call_logger::CallLogger;
use crate::providers::types::tool::Tool;

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Reads a file and returns its contents.
pub fn read_file(file_path: &str) -> io::Result<String> {
    fs::read_to_string(expand_path(file_path))
}

/// Writes a file with the given contents, replacing whatever was there.
///
/// The parent directory must already exist.
pub fn write_file(file_path: &str, contents: &str) -> io::Result<bool> {
    fs::write(expand_path(file_path), contents)?;
    Ok(true)
}

/// Lists the entry names of a directory, sorted.
pub fn list_dir(directory_path: &str) -> io::Result<Vec<String>> {
    let mut names = fs::read_dir(expand_path(directory_path))?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}

fn string_arg<'a>(args: &'a Value, name: &str) -> anyhow::Result<&'a str> {
    args.get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("Missing required string argument '{}'", name))
}

/// The file tools, each logging its calls to standard output.
pub fn file_tools() -> Vec<Tool> {
    file_tools_with_logger(&CallLogger::stdout())
}

pub fn file_tools_with_logger(logger: &CallLogger) -> Vec<Tool> {
    let read_file_tool = Tool::new(
        "read_file",
        "Reads a file and returns its contents.",
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "Path to the file to read."
                }
            },
            "required": ["file_path"]
        }),
        |args| Ok(json!(read_file(string_arg(args, "file_path")?)?)),
    );

    let write_file_tool = Tool::new(
        "write_file",
        "Writes a file with the given contents.",
        json!({
            "type": "object",
            "properties": {
                "file_path": {
                    "type": "string",
                    "description": "Path to the file to write."
                },
                "contents": {
                    "type": "string",
                    "description": "Contents to write to the file."
                }
            },
            "required": ["file_path", "contents"]
        }),
        |args| {
            let file_path = string_arg(args, "file_path")?;
            let contents = string_arg(args, "contents")?;
            Ok(json!(write_file(file_path, contents)?))
        },
    );

    let list_dir_tool = Tool::new(
        "list_dir",
        "Lists the contents of a directory.",
        json!({
            "type": "object",
            "properties": {
                "directory_path": {
                    "type": "string",
                    "description": "Path to the directory to list."
                }
            },
            "required": ["directory_path"]
        }),
        |args| Ok(json!(list_dir(string_arg(args, "directory_path")?)?)),
    );

    vec![read_file_tool, write_file_tool, list_dir_tool]
        .into_iter()
        .map(|tool| logger.wrap(tool))
        .collect()
}
