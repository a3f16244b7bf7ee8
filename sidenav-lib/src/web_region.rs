use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::NavConfig;
use crate::region::{ContentRegion, PanelRegion};
use crate::toggle::toggle_nav;

fn style_value(element: &HtmlElement, property: &str) -> Result<String, String> {
    element
        .style()
        .get_property_value(property)
        .map_err(|e| format!("Failed to read '{property}' of '{}': {e:?}", element.id()))
}

fn set_style_value(element: &HtmlElement, property: &str, value: &str) -> Result<(), String> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| format!("Failed to set '{property}' of '{}': {e:?}", element.id()))
}

impl PanelRegion for HtmlElement {
    fn width(&self) -> Result<String, String> {
        style_value(self, "width")
    }

    fn set_width(&mut self, value: &str) -> Result<(), String> {
        set_style_value(self, "width", value)
    }
}

impl ContentRegion for HtmlElement {
    fn margin_left(&self) -> Result<String, String> {
        style_value(self, "margin-left")
    }

    fn set_margin_left(&mut self, value: &str) -> Result<(), String> {
        set_style_value(self, "margin-left", value)
    }
}

fn element_by_id(document: &web_sys::Document, id: &str) -> Result<HtmlElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("Element with id '{id}' not found."))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("Element with id '{id}' is not an HTML element."))
}

/// Looks up the panel and content elements of the current page.
pub fn resolve_regions(config: &NavConfig) -> Result<(HtmlElement, HtmlElement), String> {
    let document = web_sys::window()
        .ok_or_else(|| "No global window available".to_string())?
        .document()
        .ok_or_else(|| "Window has no document".to_string())?;
    let panel = element_by_id(&document, &config.panel_id)?;
    let content = element_by_id(&document, &config.content_id)?;
    Ok((panel, content))
}

fn toggle_page(config: &NavConfig) -> Result<String, String> {
    let (mut panel, mut content) = resolve_regions(config)?;
    let state = toggle_nav(&mut panel, &mut content, config)?;
    Ok(state.to_string())
}

/// Page-level entry point, bound from markup as `onclick="toggleNav()"`.
#[wasm_bindgen(js_name = toggleNav)]
pub fn toggle_nav_js() -> Result<(), JsValue> {
    toggle_page(&NavConfig::default()).map(|_| ()).map_err(|e| {
        tracing::error!("toggleNav failed: {e}");
        JsValue::from_str(&e)
    })
}

/// Like `toggleNav` but with a JSON config, returns `"open"` or `"closed"`.
#[wasm_bindgen(js_name = toggleNavWith)]
pub fn toggle_nav_with(config_json: &str) -> Result<String, JsValue> {
    NavConfig::from_json(config_json)
        .and_then(|config| toggle_page(&config))
        .map_err(|e| {
            tracing::error!("toggleNavWith failed: {e}");
            JsValue::from_str(&e)
        })
}
