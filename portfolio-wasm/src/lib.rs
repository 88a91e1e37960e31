//! Bridge WASM <-> JavaScript trung lập framework.

use portfolio_assistant::{build_knowledge_value, respond};
use portfolio_core::PortfolioError;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Dựng knowledge đóng hộp từ hồ sơ JSON và trả về cho phía JS.
#[wasm_bindgen]
pub fn build_knowledge(profile: JsValue) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let profile_value = from_value::<serde_json::Value>(profile)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON hồ sơ: {err}")))?;

    let knowledge = build_knowledge_value(&profile_value)
        .map_err(|err| JsValue::from_str(&format_portfolio_error(err)))?;

    to_value(&knowledge)
        .map_err(|err| JsValue::from_str(&format!("Không serialize knowledge: {err}")))
}

/// Trả lời một câu hỏi tự do bằng bộ luật đóng hộp, không cần mount UI.
#[wasm_bindgen]
pub fn answer_question(profile: JsValue, question: &str) -> Result<String, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let profile_value = from_value::<serde_json::Value>(profile)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được JSON hồ sơ: {err}")))?;

    let knowledge = build_knowledge_value(&profile_value)
        .map_err(|err| JsValue::from_str(&format_portfolio_error(err)))?;

    Ok(respond(&knowledge, question))
}

fn format_portfolio_error(err: PortfolioError) -> String {
    format!("Portfolio error: {err}")
}
