//! ページに埋め込まれた設定の読込
//!
//! `<script id="bg-remove-config" type="application/json">{...}</script>`
//! が無い、または不正な場合は既定値を使う。

use bg_remove_common::WorkflowConfig;

const CONFIG_ELEMENT_ID: &str = "bg-remove-config";

pub fn load_page_config() -> WorkflowConfig {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(json) => parse_page_config(&json),
        None => WorkflowConfig::default(),
    }
}

fn parse_page_config(json: &str) -> WorkflowConfig {
    if json.trim().is_empty() {
        return WorkflowConfig::default();
    }
    WorkflowConfig::from_json(json).unwrap_or_else(|e| {
        log::warn!("invalid #{}: {}, using defaults", CONFIG_ELEMENT_ID, e);
        WorkflowConfig::default()
    })
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn wasm_load_page_config_reads_script_element() {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("documentがない");
        let script = document.create_element("script").expect("要素作成失敗");
        script.set_id(CONFIG_ELEMENT_ID);
        script
            .set_attribute("type", "application/json")
            .expect("属性設定失敗");
        script.set_text_content(Some(r#"{"endpoint": "/tools/bg/upload/", "max_file_size": 1024}"#));
        document
            .body()
            .expect("bodyがない")
            .append_child(&script)
            .expect("追加失敗");

        let config = load_page_config();
        script.remove();

        assert_eq!(config.endpoint, "/tools/bg/upload/");
        assert_eq!(config.max_file_size, 1024);
        assert_eq!(config.field_name, "image");
    }

    #[wasm_bindgen_test]
    fn wasm_load_page_config_without_element() {
        assert_eq!(load_page_config(), WorkflowConfig::default());
    }
}
