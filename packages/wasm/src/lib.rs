use puckblocks_components::default_registry;
use puckblocks_core::{migrate as migrate_content, normalize, validate, PuckData, Validity};
use puckblocks_renderer::{render_document, RenderOptions};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    reasons: Vec<String>,
}

fn parse_input(json: Option<&str>) -> Result<Option<Value>, String> {
    match json {
        None => Ok(None),
        Some(source) if source.trim().is_empty() => Ok(None),
        Some(source) => serde_json::from_str(source)
            .map(Some)
            .map_err(|e| format!("Parse error: {}", e)),
    }
}

fn to_json(doc: &PuckData) -> Result<String, String> {
    serde_json::to_string(doc).map_err(|e| format!("Serialization error: {}", e))
}

fn normalize_json(json: Option<&str>) -> Result<String, String> {
    let doc = normalize(parse_input(json)?);
    to_json(&doc)
}

fn validate_json(json: &str) -> Result<String, String> {
    let value: Value = serde_json::from_str(json).map_err(|e| format!("Parse error: {}", e))?;
    let report = match validate(&value) {
        Validity::Valid => ValidationReport {
            valid: true,
            reasons: Vec::new(),
        },
        Validity::Invalid(reasons) => ValidationReport {
            valid: false,
            reasons: reasons.iter().map(|r| r.to_string()).collect(),
        },
    };
    serde_json::to_string(&report).map_err(|e| format!("Serialization error: {}", e))
}

fn render_json(json: Option<&str>, full_page: bool) -> Result<String, String> {
    let doc = normalize(parse_input(json)?);
    let options = RenderOptions {
        full_page,
        ..Default::default()
    };
    render_document(&doc, &default_registry(), options).map_err(|e| format!("Render error: {}", e))
}

/// Normalize page data given as JSON (object, string literal, or nothing)
#[wasm_bindgen(js_name = normalizeData)]
pub fn normalize_data_js(json: Option<String>) -> Result<String, JsValue> {
    normalize_json(json.as_deref()).map_err(|e| JsValue::from_str(&e))
}

/// Normalize a raw content string into page data JSON
#[wasm_bindgen(js_name = normalizeString)]
pub fn normalize_string_js(content: &str) -> Result<String, JsValue> {
    to_json(&normalize(Some(Value::String(content.to_string())))).map_err(|e| JsValue::from_str(&e))
}

/// Migrate a string into a single-component document.
///
/// Returns the document as JSON, or the original string JSON-encoded when no
/// migration applies.
#[wasm_bindgen(js_name = migrate)]
pub fn migrate_js(content: &str, component_type: &str) -> Result<String, JsValue> {
    let migrated = migrate_content(content, component_type).into_value();
    serde_json::to_string(&migrated)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Check the page data shape; unparseable JSON is not page data
#[wasm_bindgen(js_name = isPuckData)]
pub fn is_puck_data_js(json: &str) -> bool {
    serde_json::from_str::<Value>(json)
        .map(|value| validate(&value).is_valid())
        .unwrap_or(false)
}

/// Validate page data, returning `{ valid, reasons }` as JSON
#[wasm_bindgen(js_name = validateData)]
pub fn validate_data_js(json: &str) -> Result<String, JsValue> {
    validate_json(json).map_err(|e| JsValue::from_str(&e))
}

/// Render page data to HTML with the built-in components
#[wasm_bindgen(js_name = renderToHtml)]
pub fn render_to_html_js(json: Option<String>, full_page: bool) -> Result<String, JsValue> {
    render_json(json.as_deref(), full_page).map_err(|e| JsValue::from_str(&e))
}

/// Field configuration of the built-in components, as JSON
#[wasm_bindgen(js_name = componentConfig)]
pub fn component_config_js() -> Result<String, JsValue> {
    serde_json::to_string(&default_registry())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
