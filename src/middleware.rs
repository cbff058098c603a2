use tower_http::cors::CorsLayer;

/// Cross-origin policy for the public website
///
/// Mirrors the request origin and allows credentials, any method and any
/// header. Browsers reject a literal `*` origin once credentials are allowed,
/// hence the mirroring.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
