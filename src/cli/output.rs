//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, VerdantArgs};
use crate::error::Result;
use crate::spelling::CorrectionResult;

/// Result of the `check` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckOutput {
    #[serde(flatten)]
    pub result: CorrectionResult,
    /// Correction notice, when requested and there is something to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Result of the `distance` and `similarity` commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonOutput {
    pub a: String,
    pub b: String,
    pub distance: usize,
    pub similarity: f64,
}

/// Result of the `dictionary` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryOutput {
    pub terms: Vec<String>,
    pub total_terms: usize,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &VerdantArgs) -> Result<()> {
    let rendered = render(message, result, args)?;
    print!("{rendered}");
    Ok(())
}

/// Render a result to a string in the specified format.
pub fn render<T: Serialize>(message: &str, result: &T, args: &VerdantArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => render_human(message, result, args),
        OutputFormat::Json => render_json(result, args),
    }
}

/// Render in human-readable format.
fn render_human<T: Serialize>(message: &str, result: &T, args: &VerdantArgs) -> Result<String> {
    let mut out = String::new();
    if args.verbosity() > 1 {
        out.push_str(message);
        out.push_str("\n\n");
    }

    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object()
        && obj.contains_key("corrected_message")
    {
        render_check_human(obj, &mut out);
    } else {
        render_generic_human(&value, &mut out);
    }

    Ok(out)
}

/// Render a check result in human format.
fn render_check_human(obj: &serde_json::Map<String, serde_json::Value>, out: &mut String) {
    let corrected = obj
        .get("corrected_message")
        .and_then(|m| m.as_str())
        .unwrap_or_default();
    out.push_str(corrected);
    out.push('\n');

    if let Some(corrections) = obj.get("corrections").and_then(|c| c.as_array())
        && !corrections.is_empty()
    {
        out.push('\n');
        for correction in corrections {
            let original = correction.get("original").and_then(|v| v.as_str()).unwrap_or("?");
            let replacement = correction
                .get("replacement")
                .and_then(|v| v.as_str())
                .unwrap_or("?");
            let similarity = correction
                .get("similarity")
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            out.push_str(&format!("  {original} → {replacement} ({similarity:.1}%)\n"));
        }
        if let Some(confidence) = obj.get("confidence").and_then(|c| c.as_f64()) {
            out.push_str(&format!("Confidence: {confidence:.1}%\n"));
        }
    }

    if let Some(notice) = obj.get("notice").and_then(|n| n.as_str()) {
        out.push('\n');
        out.push_str(notice);
        out.push('\n');
    }
}

/// Render any other value as `key: value` lines.
fn render_generic_human(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                out.push_str(&format!("{key}: {formatted_val}\n"));
            }
        }
        _ => {
            out.push_str(&format_value(value));
            out.push('\n');
        }
    }
}

/// Render in JSON format.
fn render_json<T: Serialize>(result: &T, args: &VerdantArgs) -> Result<String> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    Ok(format!("{json}\n"))
}

/// Format a JSON value for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
