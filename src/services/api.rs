use wasm_bindgen::JsCast;

use crate::models::PricePoint;

/// Get the API base URL from the build environment or use the default
fn api_base() -> String {
    std::option_env!("BACKEND_API_URL")
        .unwrap_or("http://127.0.0.1:5000")
        .to_string()
}

/// Generic JSON fetch function
async fn fetch_json<T>(url: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to create request: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch error: {:?}", e))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| format!("Response error: {:?}", e))?;

    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()));
    }

    let json = JsFuture::from(
        resp.json()
            .map_err(|e| format!("JSON error: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("JSON parse error: {:?}", e))?;

    serde_wasm_bindgen::from_value(json)
        .map_err(|e| format!("Deserialize error: {:?}", e))
}

/// Fetch the full price series. One GET, no parameters, no pagination.
pub async fn fetch_prices() -> Result<Vec<PricePoint>, String> {
    let url = format!("{}/api/prices", api_base());
    fetch_json::<Vec<PricePoint>>(&url).await
}
