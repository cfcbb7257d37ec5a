use actix_cors::Cors;

/// CORS policy that admits only the configured origins.
///
/// Requests without an `Origin` header (same-origin requests, curl, server-to-server)
/// are not subject to CORS and pass through untouched.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let allowed = allowed_origins.to_vec();
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            let allowed_origin = allowed.iter().any(|o| o.as_bytes() == origin.as_bytes());
            if !allowed_origin {
                log::debug!("Rejected CORS origin {:?}", origin);
            }
            allowed_origin
        })
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}
