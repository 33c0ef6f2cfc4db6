use tavor::domain::MediaSource;

#[test]
fn given_youtube_watch_url_when_classifying_then_video_site() {
    assert_eq!(
        MediaSource::classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        MediaSource::VideoSite
    );
}

#[test]
fn given_short_youtu_be_url_when_classifying_then_video_site() {
    assert_eq!(
        MediaSource::classify("https://youtu.be/dQw4w9WgXcQ"),
        MediaSource::VideoSite
    );
}

#[test]
fn given_direct_audio_url_when_classifying_then_direct() {
    assert_eq!(
        MediaSource::classify("https://example.com/audio.mp3"),
        MediaSource::Direct
    );
}

#[test]
fn given_non_url_text_when_classifying_then_direct() {
    assert_eq!(MediaSource::classify("not a url at all"), MediaSource::Direct);
}
