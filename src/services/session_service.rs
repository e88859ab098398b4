use rand::RngCore;

fn random_hex_id() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Opaque id for a stub-authenticated session.
pub fn random_session_id() -> String {
    random_hex_id()
}

/// Opaque id tying an anonymous visitor to their pending notifications.
pub fn random_visitor_id() -> String {
    random_hex_id()
}
