/// Classification of an inbound media reference.
///
/// Video-sharing-site URLs need a local download and transcode before the
/// audio can be hosted anywhere the inference service can reach; direct
/// media URLs are handed to the inference service unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSource {
    VideoSite,
    Direct,
}

const VIDEO_HOST_FRAGMENTS: &[&str] = &["youtube.com", "youtu.be"];

impl MediaSource {
    /// Host-fragment match, no URL parsing. Unreachable or malformed direct
    /// URLs surface as downstream failures, not classification errors.
    pub fn classify(url: &str) -> Self {
        if VIDEO_HOST_FRAGMENTS
            .iter()
            .any(|fragment| url.contains(fragment))
        {
            Self::VideoSite
        } else {
            Self::Direct
        }
    }
}
