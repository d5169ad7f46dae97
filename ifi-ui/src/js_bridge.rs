//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The choropleth map is drawn by D3 code in `assets/js/india-map.js`,
//! embedded into the WASM binary at compile time and evaluated as globals
//! (no ES modules) exposed via `window.*`. This module provides safe Rust
//! wrappers that serialize highlight data and call those globals.
//!
//! D3 itself and the boundary GeoJSON files are deployment assets loaded by
//! the page, so every call polls until the scripts and the container DOM
//! element are actually ready.

// Embed the map JS at compile time
static INDIA_MAP_JS: &str = include_str!("../assets/js/india-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('IFI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the map scripts with a wait-for-D3 polling loop.
///
/// The map JS defines `renderIndiaMap(...)` and friends via `function`
/// declarations. To ensure they become globally accessible (not
/// block-scoped inside the setInterval callback), they are evaluated at
/// global scope via indirect eval once D3 is ready, then explicitly
/// promoted to `window.*`.
pub fn init_map() {
    // Store the script on window so the polling callback can eval it
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__ifiMapScripts = {};",
        serde_json::to_string(INDIA_MAP_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__ifiMapReady) { delete window.__ifiMapScripts; return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__ifiMapScripts);
                    delete window.__ifiMapScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderIndiaMap !== 'undefined') window.renderIndiaMap = renderIndiaMap;
                    if (typeof destroyIndiaMap !== 'undefined') window.destroyIndiaMap = destroyIndiaMap;
                    window.__ifiMapReady = true;
                    console.log('IFI map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the choropleth highlight into the given container.
///
/// `highlight_json` is a serialized `ifi_core::Highlight`:
/// `{"granularity":"state","units":["Bihar"]}`. Uses a polling loop to wait
/// for D3, the map scripts, and the container DOM element.
pub fn render_map_highlight(container_id: &str, highlight_json: &str) {
    let escaped = highlight_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__ifiMapReady &&
                    typeof window.renderIndiaMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderIndiaMap('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[IFI] renderIndiaMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Tear down the map in the given container.
pub fn destroy_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyIndiaMap) window.destroyIndiaMap('{0}'); else {{ var el = document.getElementById('{0}'); if (el) el.innerHTML = ''; }}",
        container_id
    ));
}
