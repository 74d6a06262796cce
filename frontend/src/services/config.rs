use shared::ApiConfig;

/// Name of the `<meta>` tag that may carry the backend URL
pub const API_URL_META: &str = "despesas-api-url";

/// Build-time override, e.g. `DESPESAS_API_URL=https://host/api trunk build`
const BUILD_API_URL: Option<&str> = option_env!("DESPESAS_API_URL");

/// Resolve the backend location for the running page
pub fn load() -> ApiConfig {
    let window = gloo::utils::window();
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_default();

    let override_url = BUILD_API_URL.map(str::to_string).or_else(meta_api_url);
    let config = ApiConfig::resolve(&origin, &hostname, override_url.as_deref());
    log::info!("backend base URL: {}", config.base_url);
    config
}

fn meta_api_url() -> Option<String> {
    gloo::utils::document()
        .query_selector(&format!("meta[name=\"{}\"]", API_URL_META))
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
}
