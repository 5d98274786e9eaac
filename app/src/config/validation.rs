//! Setting value validation.

use url::Url;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "NAME_PLATE_SHEET_DPI" => validate_int_range(value, 72, 600)?,
        "NAME_PLATE_QR_BOX_SIZE" => validate_int_range(value, 1, 64)?,
        "NAME_PLATE_QR_BORDER" => validate_int_range(value, 0, 16)?,
        "NAME_PLATE_FONT_SIZE" => validate_int_range(value, 20, 1000)?,
        "NAME_PLATE_QR_SCALE" => {
            let v: f64 = value.parse().map_err(|_| "must be a float")?;
            if !(0.1..=10.0).contains(&v) {
                return Err("must be between 0.1 and 10.0".into());
            }
        }
        "NAME_PLATE_SHARE_ENDPOINT" => validate_endpoint(value)?,
        "NAME_PLATE_SHEET_ENABLED" => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        k if is_required_text(k) => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i32, max: i32) -> Result<(), String> {
    let v: i32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn validate_endpoint(value: &str) -> Result<(), String> {
    let url = Url::parse(value).map_err(|e| format!("must be an http(s) URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err("must be an http(s) URL".into());
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("must include a host".into());
    }
    Ok(())
}

fn is_required_text(key: &str) -> bool {
    matches!(
        key,
        "NAME_PLATE_INPUT"
            | "NAME_PLATE_TEMPLATE"
            | "NAME_PLATE_FONT"
            | "NAME_PLATE_OUTPUT_DIR"
            | "NAME_PLATE_SHEET_FILE"
            | "NAME_PLATE_COLUMN_NAME"
            | "NAME_PLATE_COLUMN_WORK"
            | "NAME_PLATE_COLUMN_URL"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_boolean() {
        assert!(validate_setting("NAME_PLATE_SHEET_ENABLED", "true").is_ok());
        assert!(validate_setting("NAME_PLATE_SHEET_ENABLED", "false").is_ok());
        assert!(validate_setting("NAME_PLATE_SHEET_ENABLED", "yes").is_err());
    }

    #[test]
    fn test_int_ranges() {
        assert!(validate_setting("NAME_PLATE_SHEET_DPI", "150").is_ok());
        assert!(validate_setting("NAME_PLATE_SHEET_DPI", "10").is_err());
        assert!(validate_setting("NAME_PLATE_QR_BOX_SIZE", "0").is_err());
        assert!(validate_setting("NAME_PLATE_QR_BORDER", "0").is_ok());
        assert!(validate_setting("NAME_PLATE_FONT_SIZE", "abc").is_err());
    }

    #[test]
    fn test_font_size_keeps_small_size_visible() {
        assert!(validate_setting("NAME_PLATE_FONT_SIZE", "19").is_err());
        assert!(validate_setting("NAME_PLATE_FONT_SIZE", "8").is_err());
        assert!(validate_setting("NAME_PLATE_FONT_SIZE", "20").is_ok());
        assert!(validate_setting("NAME_PLATE_FONT_SIZE", "1000").is_ok());
    }

    #[test]
    fn test_qr_scale() {
        assert!(validate_setting("NAME_PLATE_QR_SCALE", "1.2").is_ok());
        assert!(validate_setting("NAME_PLATE_QR_SCALE", "0").is_err());
        assert!(validate_setting("NAME_PLATE_QR_SCALE", "x").is_err());
    }

    #[test]
    fn test_share_endpoint() {
        assert!(validate_setting("NAME_PLATE_SHARE_ENDPOINT", "https://x.com/intent/post").is_ok());
        assert!(validate_setting("NAME_PLATE_SHARE_ENDPOINT", "twitter.com").is_err());
        assert!(validate_setting("NAME_PLATE_SHARE_ENDPOINT", "ftp://x.com/intent").is_err());
    }

    #[test]
    fn test_share_endpoint_requires_host() {
        assert!(validate_setting("NAME_PLATE_SHARE_ENDPOINT", "https://").is_err());
        assert!(validate_setting("NAME_PLATE_SHARE_ENDPOINT", "http://").is_err());
        assert!(validate_setting("NAME_PLATE_SHARE_ENDPOINT", "http://localhost:8080/share").is_ok());
    }

    #[test]
    fn test_required_text() {
        assert!(validate_setting("NAME_PLATE_INPUT", "roster.csv").is_ok());
        assert!(validate_setting("NAME_PLATE_INPUT", "  ").is_err());
        assert!(validate_setting("NAME_PLATE_HASHTAG", "").is_ok());
    }
}
