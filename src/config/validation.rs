//! Configuration validation and identifier parsing.

use regex::Regex;

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::media::FormatFlags;

/// Validate a loaded configuration file.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_cookie(&config.cookie)?;
    validate_user_agent(&config.user_agent)?;

    Ok(())
}

/// Validate the session cookie.
pub fn validate_cookie(cookie: &str) -> Result<()> {
    if cookie.trim().is_empty() {
        return Err(Error::MissingConfig("cookie".to_string()));
    }

    // Check for placeholder values
    let lower = cookie.to_lowercase();
    if lower.contains("replaceme") || lower.contains("your_cookie") {
        return Err(Error::ConfigValidation {
            field: "cookie".to_string(),
            message: "Cookie appears to be a placeholder. Paste the Cookie header value from a \
                      logged-in browser session."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    Ok(())
}

/// Validate the requested format bitmask.
pub fn validate_format(fnval: FormatFlags) -> Result<()> {
    if fnval.is_empty() {
        return Err(Error::ConfigValidation {
            field: "fnval".to_string(),
            message: format!(
                "No supported format bit set in {}. Use {} for progressive, {} for adaptive, \
                 or their sum.",
                fnval.bits(),
                FormatFlags::PROGRESSIVE,
                FormatFlags::DASH
            ),
        });
    }

    Ok(())
}

/// Validate the worker pool width against the requested format.
pub fn validate_jobs(jobs: usize, fnval: FormatFlags) -> Result<()> {
    if jobs == 0 {
        return Err(Error::ConfigValidation {
            field: "jobs".to_string(),
            message: "Worker pool width must be at least 1".to_string(),
        });
    }

    // Adaptive parts write the shared audio.m4s/video.m4s intermediates and
    // cannot run side by side
    if jobs > 1 && fnval.dash() {
        return Err(Error::ConfigValidation {
            field: "jobs".to_string(),
            message: "Adaptive format downloads share their intermediate filenames; \
                      use --jobs 1 when the fnval adaptive bit is set"
                .to_string(),
        });
    }

    Ok(())
}

/// Extract a numeric avid from a bare id, an `av`-prefixed id, or a video URL.
pub fn parse_avid(input: &str) -> Result<u64> {
    let input = input.trim();

    // If it's a URL, extract the id from the /video/ segment
    if input.starts_with("http://") || input.starts_with("https://") {
        // Pattern: https://www.bilibili.com/video/av170001
        let url_pattern = Regex::new(r"(?i)/video/av(\d+)").unwrap();

        if let Some(captures) = url_pattern.captures(input) {
            if let Some(id) = captures.get(1) {
                if let Ok(avid) = id.as_str().parse::<u64>() {
                    return Ok(avid);
                }
            }
        }

        return Err(Error::ConfigValidation {
            field: "avid".to_string(),
            message: format!("Could not extract an avid from URL: {}", input),
        });
    }

    let id_pattern = Regex::new(r"^(?i:av)?(\d+)$").unwrap();
    if let Some(captures) = id_pattern.captures(input) {
        if let Some(id) = captures.get(1) {
            if let Ok(avid) = id.as_str().parse::<u64>() {
                return Ok(avid);
            }
        }
    }

    Err(Error::ConfigValidation {
        field: "avid".to_string(),
        message: format!(
            "Invalid avid: '{}'. Use digits, an 'av'-prefixed id, or a video URL.",
            input
        ),
    })
}

/// Extract a bvid from a bare `BV` id or a video URL.
pub fn parse_bvid(input: &str) -> Result<String> {
    let input = input.trim();

    // If it's a URL, extract the id from the /video/ segment
    if input.starts_with("http://") || input.starts_with("https://") {
        // Pattern: https://www.bilibili.com/video/BV17x411w7KC
        let url_pattern = Regex::new(r"/video/([bB][vV][0-9A-Za-z]{10})").unwrap();

        if let Some(captures) = url_pattern.captures(input) {
            if let Some(id) = captures.get(1) {
                return Ok(normalize_bvid(id.as_str()));
            }
        }

        return Err(Error::ConfigValidation {
            field: "bvid".to_string(),
            message: format!("Could not extract a bvid from URL: {}", input),
        });
    }

    let id_pattern = Regex::new(r"^[bB][vV][0-9A-Za-z]{10}$").unwrap();
    if id_pattern.is_match(input) {
        return Ok(normalize_bvid(input));
    }

    Err(Error::ConfigValidation {
        field: "bvid".to_string(),
        message: format!(
            "Invalid bvid: '{}'. Expected 'BV' followed by 10 alphanumerics, or a video URL.",
            input
        ),
    })
}

/// The id body is case-sensitive; only the `BV` prefix is normalized.
fn normalize_bvid(id: &str) -> String {
    format!("BV{}", &id[2..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_avid_forms() {
        assert_eq!(parse_avid("170001").unwrap(), 170001);
        assert_eq!(parse_avid("av170001").unwrap(), 170001);
        assert_eq!(parse_avid("AV170001").unwrap(), 170001);
        assert_eq!(parse_avid("  av170001  ").unwrap(), 170001);
    }

    #[test]
    fn test_parse_avid_url() {
        let url = "https://www.bilibili.com/video/av170001";
        assert_eq!(parse_avid(url).unwrap(), 170001);
        let url = "https://www.bilibili.com/video/av170001?p=2";
        assert_eq!(parse_avid(url).unwrap(), 170001);
    }

    #[test]
    fn test_parse_avid_invalid() {
        assert!(parse_avid("not-a-number").is_err());
        assert!(parse_avid("BV17x411w7KC").is_err());
        assert!(parse_avid("https://www.bilibili.com/video/BV17x411w7KC").is_err());
        assert!(parse_avid("").is_err());
    }

    #[test]
    fn test_parse_bvid_forms() {
        assert_eq!(parse_bvid("BV17x411w7KC").unwrap(), "BV17x411w7KC");
        assert_eq!(parse_bvid("bv17x411w7KC").unwrap(), "BV17x411w7KC");
    }

    #[test]
    fn test_parse_bvid_url() {
        let url = "https://www.bilibili.com/video/BV17x411w7KC/?spm_id_from=333.999";
        assert_eq!(parse_bvid(url).unwrap(), "BV17x411w7KC");
    }

    #[test]
    fn test_parse_bvid_invalid() {
        assert!(parse_bvid("17x411w7KC").is_err());
        assert!(parse_bvid("BV17x").is_err());
        assert!(parse_bvid("av170001").is_err());
    }

    #[test]
    fn test_validate_cookie() {
        assert!(validate_cookie("SESSDATA=abc123; bili_jct=def").is_ok());
        assert!(matches!(
            validate_cookie(""),
            Err(Error::MissingConfig(_))
        ));
        assert!(matches!(
            validate_cookie("REPLACEME"),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_validate_format() {
        assert!(validate_format(FormatFlags::new(1)).is_ok());
        assert!(validate_format(FormatFlags::new(16)).is_ok());
        assert!(validate_format(FormatFlags::new(17)).is_ok());
        assert!(validate_format(FormatFlags::new(0)).is_err());
        assert!(validate_format(FormatFlags::new(8)).is_err());
    }

    #[test]
    fn test_validate_jobs() {
        assert!(validate_jobs(1, FormatFlags::new(16)).is_ok());
        assert!(validate_jobs(4, FormatFlags::new(1)).is_ok());
        assert!(validate_jobs(0, FormatFlags::new(1)).is_err());
        // Pooled adaptive downloads would clobber shared intermediates
        assert!(validate_jobs(2, FormatFlags::new(16)).is_err());
        assert!(validate_jobs(2, FormatFlags::new(17)).is_err());
    }
}
