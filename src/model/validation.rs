use regex::Regex;
use std::sync::LazyLock;

const MIN_URL_LEN: usize = 5;

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?://)?(?:(?:www\.|m\.)?youtube\.com/watch\?v=|youtu\.be/|music\.youtube\.com/).*$")
        .expect("youtube url pattern is valid")
});

/// Accepts watch links, `youtu.be` short links and `music.youtube.com` links, in any case.
pub fn is_valid_youtube_url(url: &str) -> bool {
    let url = url.trim();
    url.chars().count() >= MIN_URL_LEN && YOUTUBE_URL.is_match(url)
}
