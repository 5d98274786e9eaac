//! Share-intent URL and the caption printed beside the QR code.

use url::Url;

use crate::{Entry, Result};

/// Default compose endpoint for share intents.
pub const DEFAULT_ENDPOINT: &str = "https://twitter.com/intent/tweet";

/// Default event hashtag appended to every post.
pub const DEFAULT_HASHTAG: &str = "#つくろがや";

/// Profile hosts whose bare root URL counts as "no URL given".
const PLACEHOLDER_HOSTS: &[&str] = &["x.com", "twitter.com"];

/// Text fixed around every share intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTemplate {
    pub endpoint: String,
    pub hashtag: String,
}

impl Default for ShareTemplate {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            hashtag: DEFAULT_HASHTAG.into(),
        }
    }
}

impl ShareTemplate {
    /// Pre-filled post text, e.g. `ロボット(山田太郎)  #つくろがや`.
    pub fn post_text(&self, entry: &Entry) -> String {
        format!("{}({})  {}", entry.work, entry.name, self.hashtag)
    }

    /// Build the percent-encoded share-intent URL for an entry.
    ///
    /// The `url` parameter is only added when the entry has a real profile URL.
    pub fn intent_url(&self, entry: &Entry) -> Result<String> {
        let mut url = Url::parse(&self.endpoint)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("text", &self.post_text(entry));
            if let Some(profile) = entry.shared_url() {
                pairs.append_pair("url", profile);
            }
        }
        Ok(url.to_string())
    }

    /// Instructional caption lines describing what scanning the QR code does.
    pub fn caption_lines(&self, entry: &Entry) -> Vec<String> {
        let mut lines = vec![
            "読み込むと下記の文言が".to_string(),
            "自動入力されます".to_string(),
            format!("「{}({})", entry.work, entry.name),
        ];
        match entry.shared_url() {
            Some(profile) => {
                lines.push(self.hashtag.clone());
                lines.push(format!("{profile}」"));
            }
            None => lines.push(format!("{}」", self.hashtag)),
        }
        lines.extend(
            [
                "コメント等追記いただき",
                "ぜひご活用ください",
                "メンションではないので",
                "通知は行きません",
            ]
            .map(String::from),
        );
        lines
    }
}

/// Whether `url` is empty or just the bare profile-site root.
pub fn is_placeholder_url(url: &str) -> bool {
    let url = url.trim();
    if url.is_empty() {
        return true;
    }
    match Url::parse(url) {
        Ok(parsed) => {
            parsed.host_str().is_some_and(|h| PLACEHOLDER_HOSTS.contains(&h))
                && parsed.path() == "/"
                && parsed.query().is_none()
                && parsed.fragment().is_none()
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder_url(""));
        assert!(is_placeholder_url("https://x.com/"));
        assert!(is_placeholder_url("https://x.com"));
        assert!(is_placeholder_url(" https://X.com/ "));
        assert!(!is_placeholder_url("https://x.com/taro"));
        assert!(!is_placeholder_url("https://example.com/"));
        assert!(!is_placeholder_url("not a url"));
    }

    #[test]
    fn test_intent_url_includes_profile() {
        let entry = Entry::new("山田太郎", "ロボット", Some("https://x.com/taro"));
        let url = ShareTemplate::default().intent_url(&entry).unwrap();
        assert!(url.starts_with("https://twitter.com/intent/tweet?"));
        assert_eq!(
            query_pairs(&url),
            vec![
                ("text".to_string(), "ロボット(山田太郎)  #つくろがや".to_string()),
                ("url".to_string(), "https://x.com/taro".to_string()),
            ]
        );
    }

    #[test]
    fn test_intent_url_omits_placeholder() {
        let entry = Entry::new("山田太郎", "ロボット", Some("https://x.com/"));
        let url = ShareTemplate::default().intent_url(&entry).unwrap();
        let pairs = query_pairs(&url);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "text");
    }

    #[test]
    fn test_intent_url_escapes_reserved_characters() {
        let entry = Entry::new("A&B=C", "#1 Work?", Some("https://x.com/a?b=c&d"));
        let url = ShareTemplate::default().intent_url(&entry).unwrap();
        assert!(!url.contains("#1"));
        assert!(!url.contains("A&B"));
        let pairs = query_pairs(&url);
        assert_eq!(pairs[0].1, "#1 Work?(A&B=C)  #つくろがや");
        assert_eq!(pairs[1].1, "https://x.com/a?b=c&d");
    }

    #[test]
    fn test_invalid_endpoint_is_error() {
        let template = ShareTemplate {
            endpoint: "not a url".into(),
            ..ShareTemplate::default()
        };
        let entry = Entry::new("a", "b", None);
        assert!(template.intent_url(&entry).is_err());
    }

    #[test]
    fn test_caption_with_url() {
        let entry = Entry::new("山田太郎", "ロボット", Some("https://x.com/taro"));
        let lines = ShareTemplate::default().caption_lines(&entry);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[2], "「ロボット(山田太郎)");
        assert_eq!(lines[3], "#つくろがや");
        assert_eq!(lines[4], "https://x.com/taro」");
        assert_eq!(lines[8], "通知は行きません");
    }

    #[test]
    fn test_caption_without_url() {
        let entry = Entry::new("山田太郎", "ロボット", Some("https://x.com/"));
        let lines = ShareTemplate::default().caption_lines(&entry);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[3], "#つくろがや」");
        assert_eq!(lines[4], "コメント等追記いただき");
    }
}
