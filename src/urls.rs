use crate::Config;

/// Path segment under which the server exposes uploaded media
pub const MEDIA_SEGMENT: &str = "media/";

/// The configured API base, verbatim
pub fn get_server_url(config: &Config) -> &str {
    &config.server_api_base
}

/// Build a media asset URL as `<api base>media/<relative_path>`.
/// No slash normalization or percent-encoding is applied.
pub fn get_server_media_url(config: &Config, relative_path: &str) -> String {
    let base = get_server_url(config);
    let mut url = String::with_capacity(base.len() + MEDIA_SEGMENT.len() + relative_path.len());
    url.push_str(base);
    url.push_str(MEDIA_SEGMENT);
    url.push_str(relative_path);
    url
}
