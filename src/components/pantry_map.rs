//! Pantry Map Component
//!
//! Leaflet map showing the visible collections. Marker layout, icons and
//! popups come from `pantry_domain::markers`; this component only binds them
//! to Leaflet and wires clicks.
//!
//! Leaflet handles are not `Send`, so each mounted map lives in a
//! thread-local slot keyed by a small id that reactive closures can carry.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::leaflet;
use crate::models::{
    layout, IconOverrides, MapMode, MapOptions, MarkerSpec, Pantry, Popup, VisibleCollections,
    RESIZE_SETTLE_MS,
};

/// A mounted map and everything that must live as long as its markers
struct MapHandle {
    map: leaflet::Map,
    layer: leaflet::LayerGroup,
    options: MapOptions,
    overrides: IconOverrides,
    /// Marker and popup listeners for the current render
    listeners: Vec<Closure<dyn FnMut()>>,
}

thread_local! {
    static NEXT_MAP_ID: Cell<u32> = const { Cell::new(1) };
    static MAPS: RefCell<HashMap<u32, MapHandle>> = RefCell::new(HashMap::new());
}

fn log(msg: &str) {
    web_sys::console::log_1(&format!("[MAP] {}", msg).into());
}

fn log_error(msg: &str, err: &JsValue) {
    web_sys::console::error_2(&format!("[MAP] {}", msg).into(), err);
}

fn next_map_id() -> u32 {
    NEXT_MAP_ID.with(|id| {
        let current = id.get();
        id.set(current + 1);
        current
    })
}

fn mount(map_id: u32, element: &web_sys::HtmlElement, mode: MapMode) -> Result<(), JsValue> {
    let options = MapOptions::for_mode(mode);
    let (map, layer) = leaflet::mount_map(element, &options)?;
    MAPS.with(|maps| {
        maps.borrow_mut().insert(
            map_id,
            MapHandle {
                map,
                layer,
                options,
                overrides: IconOverrides::new(),
                listeners: Vec::new(),
            },
        )
    });
    log(&format!("map {} mounted ({:?})", map_id, mode));

    // Containers inside flex layouts settle after the first paint
    spawn_local(async move {
        TimeoutFuture::new(RESIZE_SETTLE_MS).await;
        MAPS.with(|maps| {
            if let Some(handle) = maps.borrow().get(&map_id) {
                handle.map.invalidate_size();
            }
        });
    });
    Ok(())
}

fn unmount(map_id: u32) {
    MAPS.with(|maps| {
        if let Some(handle) = maps.borrow_mut().remove(&map_id) {
            handle.map.remove();
            log(&format!("map {} removed", map_id));
        }
    });
}

fn text_element(
    document: &web_sys::Document,
    tag: &str,
    text: &str,
) -> Result<web_sys::Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_text_content(Some(text));
    Ok(el)
}

/// Build popup DOM. Text goes through `set_text_content` so record fields
/// are never parsed as HTML.
fn popup_content(
    popup: &Popup,
    on_details: Option<&Closure<dyn FnMut()>>,
) -> Result<web_sys::HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root: web_sys::HtmlElement = document.create_element("div")?.dyn_into()?;
    root.set_class_name("map-popup");

    match popup {
        Popup::Pantry { name, address, notes } => {
            root.append_child(&text_element(&document, "strong", name)?.into())?;
            root.append_child(&text_element(&document, "p", address)?.into())?;
            if !notes.is_empty() {
                root.append_child(&text_element(&document, "p", notes)?.into())?;
            }
            if let Some(handler) = on_details {
                let button = text_element(&document, "button", "View Details")?;
                button.set_class_name("popup-details-btn");
                button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
                root.append_child(&button)?;
            }
        }
        Popup::Official {
            name,
            office,
            state,
            district,
            party,
            link,
        } => {
            root.append_child(&text_element(&document, "strong", name)?.into())?;
            root.append_child(&text_element(&document, "p", &format!("{} · {}", office, state))?.into())?;
            if let Some(district) = district.as_deref().filter(|d| !d.is_empty()) {
                root.append_child(&text_element(&document, "p", &format!("District {}", district))?.into())?;
            }
            if let Some(party) = party {
                root.append_child(&text_element(&document, "p", party)?.into())?;
            }
            let anchor: web_sys::HtmlAnchorElement =
                text_element(&document, "a", "Learn more")?.dyn_into()?;
            anchor.set_href(link);
            anchor.set_target("_blank");
            anchor.set_rel("noopener noreferrer");
            root.append_child(&anchor)?;
        }
    }
    Ok(root)
}

/// Clear the marker layer and rebuild it from `specs`
fn render(
    map_id: u32,
    specs: Vec<MarkerSpec>,
    pantries: &[Pantry],
    on_view_details: Option<Callback<Pantry>>,
) -> Result<(), JsValue> {
    MAPS.with(|maps| {
        let mut maps = maps.borrow_mut();
        let Some(handle) = maps.get_mut(&map_id) else {
            return Ok(());
        };

        handle.layer.clear_layers();
        handle.overrides.clear();
        handle.listeners.clear();

        for spec in specs {
            let marker = leaflet::marker(spec.position, &leaflet::icon(&handle.overrides.icon_for(&spec))?)?;

            if handle.options.popups {
                let details = match (&spec.popup, on_view_details) {
                    (Popup::Pantry { .. }, Some(callback)) => pantries
                        .iter()
                        .find(|p| p.id == spec.entity_id)
                        .cloned()
                        .map(|pantry| {
                            Closure::<dyn FnMut()>::new(move || callback.run(pantry.clone()))
                        }),
                    _ => None,
                };
                marker.bind_popup(&popup_content(&spec.popup, details.as_ref())?);
                handle.listeners.extend(details);

                // bindPopup's own click listener toggles the popup; this one
                // only swaps the icon
                if spec.kind.is_pantry() {
                    let clicked = marker.clone();
                    let on_click = Closure::<dyn FnMut()>::new(move || {
                        let roll = js_sys::Math::random();
                        let icon = MAPS.with(|maps| {
                            maps.borrow_mut()
                                .get_mut(&map_id)
                                .and_then(|h| h.overrides.randomize(&spec, roll))
                        });
                        if let Some(icon) = icon {
                            match leaflet::icon(&icon) {
                                Ok(icon) => clicked.set_icon(&icon),
                                Err(e) => log_error("icon swap failed", &e),
                            }
                        }
                    });
                    marker.on("click", on_click.as_ref().unchecked_ref());
                    handle.listeners.push(on_click);
                }
            }

            handle.layer.add_layer(&marker);
        }
        Ok(())
    })
}

/// Map of pantries, politicians and candidates.
///
/// `Preview` is a static thumbnail: no controls, no popups, clicks ignored.
#[component]
pub fn PantryMap(
    #[prop(into)] visible: Signal<VisibleCollections>,
    #[prop(optional)] mode: MapMode,
    #[prop(optional, into)] on_view_details: Option<Callback<Pantry>>,
) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();
    let map_id = next_map_id();
    let (mounted, set_mounted) = signal(false);

    // Mount once the container is in the DOM
    Effect::new(move |_| {
        let Some(el) = container.get() else { return };
        if mounted.get_untracked() {
            return;
        }
        match mount(map_id, &el, mode) {
            Ok(()) => set_mounted.set(true),
            Err(e) => log_error("failed to create map", &e),
        }
    });

    // Full re-render whenever the visible collections change
    Effect::new(move |_| {
        if !mounted.get() {
            return;
        }
        let visible = visible.get();
        let specs = layout(&visible);
        let count = specs.len();
        match render(map_id, specs, &visible.pantries, on_view_details) {
            Ok(()) => log(&format!("map {} rendered {} markers", map_id, count)),
            Err(e) => log_error("render failed", &e),
        }
    });

    on_cleanup(move || unmount(map_id));

    let class = match mode {
        MapMode::Preview => "pantry-map preview",
        MapMode::Full => "pantry-map",
    };

    view! {
        <div node_ref=container class=class></div>
    }
}
