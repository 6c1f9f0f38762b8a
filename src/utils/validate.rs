use once_cell::sync::Lazy;
use regex::Regex;

static PHOTO_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("Invalid photo url regex"));

pub fn validate_person_name(name: &str) -> Result<(), &'static str> {
    // 姓名非空校验
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    // 姓名长度校验：不超过 64 个字符
    if name.chars().count() > 64 {
        return Err("Name must not exceed 64 characters");
    }
    Ok(())
}

pub fn validate_photo_url(url: &str) -> Result<(), &'static str> {
    // 照片 URL 校验：http/https 且不含空白字符
    if !PHOTO_URL_RE.is_match(url) {
        return Err("Photo URL must be a http(s) URL without whitespace");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_name_rules() {
        assert!(validate_person_name("Ari").is_ok());
        assert!(validate_person_name("  ").is_err());
        assert!(validate_person_name("").is_err());
        assert!(validate_person_name(&"x".repeat(65)).is_err());
    }

    #[test]
    fn test_photo_url_rules() {
        assert!(validate_photo_url("https://example.com/photo.png").is_ok());
        assert!(validate_photo_url("http://example.com/a.jpg").is_ok());
        assert!(validate_photo_url("ftp://example.com/a.jpg").is_err());
        assert!(validate_photo_url("https://example.com/a b.jpg").is_err());
        assert!(validate_photo_url("not a url").is_err());
    }
}
