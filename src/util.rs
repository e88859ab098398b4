pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    if s.is_empty() {
        return "".into();
    }
    let s = if let Some(idx) = s.find("://") { &s[idx + 3..] } else { s };
    let host = s.split('/').next().unwrap_or(s);
    host.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostname_extraction() {
        assert_eq!(hostname_from_url("https://api.cubalink23.com/api"), "api.cubalink23.com");
        assert_eq!(hostname_from_url(""), "");
        assert_eq!(hostname_from_url("localhost:3000"), "localhost:3000");
    }
}
