use super::ConfigKind;

const CONFIG_MARKER: &str = "/config/";
const CONFIG_PREFIX: &str = "/config";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigRoute {
    Known(ConfigKind),
    /// Any path with a `logs` segment, regardless of the panel in front of it.
    Logs,
    Unknown(String),
}

/// Maps a raw request path (query string allowed) onto a config route.
pub fn resolve_config_path(path_and_query: &str) -> ConfigRoute {
    let path = path_and_query
        .split_once('?')
        .map(|(p, _)| p)
        .unwrap_or(path_and_query);

    let rest = match path.find(CONFIG_MARKER) {
        Some(idx) => &path[idx + CONFIG_MARKER.len()..],
        None if path.trim_end_matches('/').ends_with(CONFIG_PREFIX) => "",
        None => path.trim_start_matches('/'),
    };
    let rest = rest.trim_end_matches('/');

    if rest.split('/').any(|segment| segment == "logs") {
        return ConfigRoute::Logs;
    }

    let segment = rest.split('/').next().unwrap_or_default();
    match segment.parse::<ConfigKind>() {
        Ok(kind) => ConfigRoute::Known(kind),
        Err(()) => ConfigRoute::Unknown(segment.to_string()),
    }
}
