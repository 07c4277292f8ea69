//! Leaflet Bindings
//!
//! The slice of the global `L` namespace the map renderer needs. Leaflet is
//! loaded by `index.html`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::{IconDescriptor, LatLng, MapOptions};

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = L)]
    pub type Map;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element: &web_sys::HtmlElement, options: &JsValue) -> Result<Map, JsValue>;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    #[wasm_bindgen(js_namespace = L)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn create_tile_layer(url: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &Map);

    #[wasm_bindgen(js_namespace = L)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn create_layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &LayerGroup, map: &Map);

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &LayerGroup, layer: &Marker);

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup);

    #[wasm_bindgen(js_namespace = L)]
    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn create_marker(latlng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = setIcon)]
    pub fn set_icon(this: &Marker, icon: &Icon);

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &web_sys::HtmlElement);

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &js_sys::Function);

    #[wasm_bindgen(js_namespace = L)]
    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn create_icon(options: &JsValue) -> Icon;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconOptions<'a> {
    icon_url: String,
    shadow_url: &'a str,
    icon_size: [i32; 2],
    icon_anchor: [i32; 2],
    popup_anchor: [i32; 2],
    shadow_size: [i32; 2],
}

#[derive(Serialize)]
struct TileOptions<'a> {
    attribution: &'a str,
}

/// Create a map in `element` with a tile layer and an empty marker layer
pub fn mount_map(
    element: &web_sys::HtmlElement,
    options: &MapOptions,
) -> Result<(Map, LayerGroup), JsValue> {
    let map = create_map(element, &serde_wasm_bindgen::to_value(options)?)?;

    let tiles = create_tile_layer(
        TILE_URL,
        &serde_wasm_bindgen::to_value(&TileOptions {
            attribution: TILE_ATTRIBUTION,
        })?,
    );
    tiles.add_to(&map);

    let layer = create_layer_group();
    layer.add_to(&map);
    Ok((map, layer))
}

pub fn icon(descriptor: &IconDescriptor) -> Result<Icon, JsValue> {
    let options = IconOptions {
        icon_url: descriptor.icon_url(),
        shadow_url: descriptor.shadow_url(),
        icon_size: IconDescriptor::ICON_SIZE,
        icon_anchor: IconDescriptor::ICON_ANCHOR,
        popup_anchor: IconDescriptor::POPUP_ANCHOR,
        shadow_size: IconDescriptor::SHADOW_SIZE,
    };
    Ok(create_icon(&serde_wasm_bindgen::to_value(&options)?))
}

pub fn marker(position: LatLng, icon: &Icon) -> Result<Marker, JsValue> {
    let latlng = js_sys::Array::of2(&position.lat.into(), &position.lng.into());
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"icon".into(), icon)?;
    Ok(create_marker(&latlng, &options))
}
