use crate::entities::PostId;

/// accepts `p_` followed by at least one ascii letter or digit.
pub fn parse_post_id(s: &str) -> ::core::result::Result<PostId, String> {
    let s = s.trim();

    match s.strip_prefix("p_") {
        Some(rest) if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()) =>
            Ok(PostId(s.to_string())),
        _ => Err(format!("expected a post id like `p_k3x9a0b`, found: `{}`", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ids() {
        assert_eq!(parse_post_id(" p_k3x9a0b "), Ok(PostId::from("p_k3x9a0b")));
        assert!(parse_post_id("p_").is_err());
        assert!(parse_post_id("k3x9a0b").is_err());
        assert!(parse_post_id("p_../x").is_err());
    }
}
