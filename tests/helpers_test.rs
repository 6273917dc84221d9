use fame_kit::message::options_for;
use fame_kit::{
    ClipboardError, ClipboardWriter, Config, MessageDisplay, MessageOptions, Notifier, Severity,
    copy_text, get_server_media_url, get_server_url, string_to_tags, tags_to_string,
};

#[derive(Default)]
struct Recorder {
    shown: Vec<MessageOptions>,
}

impl MessageDisplay for Recorder {
    fn show(&mut self, options: MessageOptions) {
        self.shown.push(options);
    }
}

struct Unsupported;

impl ClipboardWriter for Unsupported {
    fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::WriteFailed("copy not supported".to_string()))
    }
}

#[test]
fn media_url_is_base_plus_media_plus_path() {
    for base in ["https://api.example.com/", "http://127.0.0.1:9090/api/", ""] {
        let config = Config {
            server_api_base: base.to_string(),
            ..Config::default()
        };
        let expected = format!("{}media/{}", get_server_url(&config), "x.png");
        assert_eq!(get_server_media_url(&config, "x.png"), expected);
    }
}

#[test]
fn tag_codec_properties() {
    let empty: Vec<String> = Vec::new();
    assert_eq!(tags_to_string(&empty), "");
    assert!(string_to_tags(None).is_empty());
    assert!(string_to_tags(Some("")).is_empty());
    assert_eq!(string_to_tags(Some("a,b,c")), vec!["a", "b", "c"]);
    assert_eq!(tags_to_string(&["a", "b", "c"]), "a,b,c");

    let samples: [&[&str]; 4] = [
        &["single"],
        &["java", "spring boot", "vue"],
        &["重复", "重复"],
        &[" padded ", "x"],
    ];
    for tags in samples {
        assert_eq!(string_to_tags(Some(&tags_to_string(tags))), tags);
    }
}

#[test]
fn notifications_forward_defaults_and_tags() {
    let mut notifier = Notifier::new(Recorder::default());
    for severity in [Severity::Success, Severity::Warning, Severity::Info, Severity::Error] {
        notifier.notify(severity, None);
    }

    let shown = notifier.into_display().shown;
    assert_eq!(shown.len(), 4);
    for (options, severity) in shown.iter().zip([
        Severity::Success,
        Severity::Warning,
        Severity::Info,
        Severity::Error,
    ]) {
        assert!(options.show_close);
        assert_eq!(options.message, severity.default_message());
        let expected_kind = if severity == Severity::Info { None } else { Some(severity) };
        assert_eq!(options.kind, expected_kind);
        assert_eq!(*options, options_for(severity, None));
    }
}

#[test]
fn unsupported_clipboard_degrades_silently() {
    let mut clipboard = Unsupported;
    copy_text(&mut clipboard, "nothing happens");
}
