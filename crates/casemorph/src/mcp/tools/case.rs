use super::{text_result, JsonRpcError};
use serde::Deserialize;

fn parse_args<T: for<'de> Deserialize<'de>>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or(serde_json::json!({})))
        .map_err(|e| JsonRpcError::invalid_params(format!("Invalid arguments: {e}")))
}

fn to_json_text<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(value)
        .map_err(|e| JsonRpcError::internal(format!("Serialization error: {e}")))?;

    text_result(json_string)
}

pub async fn handle_list(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ListArgs {
        #[serde(default)]
        all: bool,
    }

    let args: ListArgs = parse_args(arguments)?;

    let manager = crate::config::open_settings(global)
        .map_err(|e| JsonRpcError::internal(format!("Tool execution error: {e}")))?;
    let entries = crate::list::list_data(manager.settings(), args.all);

    to_json_text(&entries)
}

pub async fn handle_transform(
    arguments: Option<serde_json::Value>,
    _global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct TransformArgs {
        name: String,
        text: String,
    }

    let args: TransformArgs = parse_args(arguments)?;

    let output = crate::apply::apply_data(&args.name, &args.text)
        .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;

    text_result(output)
}

pub async fn handle_morph(
    arguments: Option<serde_json::Value>,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct MorphArgs {
        text: String,
        #[serde(default)]
        names: Option<Vec<String>>,
    }

    let args: MorphArgs = parse_args(arguments)?;

    let results = match args.names {
        Some(names) => crate::morph::morph_data(&names, &args.text),
        None => {
            let manager = crate::config::open_settings(global)
                .map_err(|e| JsonRpcError::internal(format!("Tool execution error: {e}")))?;
            crate::morph::morph_data(&manager.ordered_enabled(), &args.text)
        }
    }
    .map_err(|e| JsonRpcError::invalid_params(e.to_string()))?;

    to_json_text(&results)
}
