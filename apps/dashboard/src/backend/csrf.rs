/// Cookie holding the anti-forgery token for async requests.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header carrying the token on search requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";
/// Form field carrying the token on upload requests.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Looks up `name` in a `Cookie`-style string (`a=1; b=2`) and
/// percent-decodes its value. The first match wins.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string())
        })
}

/// Picks the anti-forgery field out of serialized form fields.
pub fn token_field(fields: &[(String, String)]) -> Option<String> {
    fields
        .iter()
        .find(|(name, _)| name == CSRF_FIELD)
        .map(|(_, value)| value.clone())
}
