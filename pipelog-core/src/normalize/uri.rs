use uuid::{Uuid, Variant};

/// Placeholder substituted for masked identifier segments.
pub const UUID_PLACEHOLDER: &str = ":uuid";

/// Canonical grouping form of a request URI.
///
/// - The query string (everything from the first `?`) is always removed.
/// - With `mask_identifiers`, every path segment that is a hyphenated
///   version 4 UUID is replaced by [`UUID_PLACEHOLDER`].
pub fn normalize_uri(uri: &str, mask_identifiers: bool) -> String {
    let path = match uri.split_once('?') {
        Some((path, _query)) => path,
        None => uri,
    };

    if !mask_identifiers {
        return path.to_string();
    }

    path.split('/')
        .map(|segment| {
            if is_v4_uuid(segment) {
                UUID_PLACEHOLDER
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Endpoint group key: `"<METHOD> <normalized-uri>"`.
pub fn endpoint_key(method: &str, uri: &str, mask_identifiers: bool) -> String {
    format!("{method} {}", normalize_uri(uri, mask_identifiers))
}

/// 8-4-4-4-12 hex groups, version nibble 4, variant nibble in {8, 9, a, b}.
fn is_v4_uuid(segment: &str) -> bool {
    // Only the hyphenated form is 36 characters long; the parser also accepts
    // simple, braced and urn forms.
    if segment.len() != 36 {
        return false;
    }

    match Uuid::try_parse(segment) {
        Ok(id) => id.get_version_num() == 4 && id.get_variant() == Variant::RFC4122,
        Err(_) => false,
    }
}
