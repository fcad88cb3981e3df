//! 调度层的集成测试。
//!
//! 这些测试只覆盖不需要网络的路径：链接识别、ID 提取、合法性检查、
//! 注册表重载，以及各操作的错误语义。

use track_link_parser_rs::{
    LinkParserError, ParserConfig, ParserName, ParserSelector, TrackLinkParser,
};

/// 同时包含 soundcloud.com 和 vimeo.com 的"链接"，用来观察注册顺序。
const OVERLAPPING_LINK: &str = "https://soundcloud.com/artist/track?from=https://vimeo.com/12345678";

fn youtube_vimeo_parser() -> TrackLinkParser {
    let config = ParserConfig::from_json(
        r#"{ "use": ["youtube", "vimeo"], "youtube": { "key": "test-key" } }"#,
    )
    .unwrap();
    TrackLinkParser::new(config).unwrap()
}

#[test]
fn test_auto_recognize_end_to_end_scenario() {
    let parser = youtube_vimeo_parser();
    let link = "https://vimeo.com/12345";

    assert_eq!(
        parser.auto_recognize(link).unwrap(),
        Some(ParserName::Vimeo)
    );
    assert_eq!(
        parser.parse_link(link, ParserSelector::Auto).unwrap(),
        Some("12345".to_string())
    );
}

#[test]
fn test_auto_recognize_unmatched_link_is_none() {
    let parser = youtube_vimeo_parser();
    assert_eq!(
        parser.auto_recognize("https://example.com/watch/123").unwrap(),
        None,
        "识别是一次查询，识别不出来不构成错误"
    );
}

#[test]
fn test_auto_recognize_is_idempotent() {
    let parser = youtube_vimeo_parser();
    let link = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    let first = parser.auto_recognize(link).unwrap();
    let second = parser.auto_recognize(link).unwrap();
    assert_eq!(first, Some(ParserName::Youtube));
    assert_eq!(first, second, "注册表不变时识别结果应该稳定");
}

#[test]
fn test_registration_order_decides_first_match() {
    let vimeo_first = TrackLinkParser::new(
        ParserConfig::from_json(
            r#"{ "use": ["vimeo", "soundcloud"], "soundcloud": { "key": "test-id" } }"#,
        )
        .unwrap(),
    )
    .unwrap();
    let soundcloud_first = TrackLinkParser::new(
        ParserConfig::from_json(
            r#"{ "use": ["soundcloud", "vimeo"], "soundcloud": { "key": "test-id" } }"#,
        )
        .unwrap(),
    )
    .unwrap();

    assert_eq!(
        vimeo_first.auto_recognize(OVERLAPPING_LINK).unwrap(),
        Some(ParserName::Vimeo)
    );
    assert_eq!(
        soundcloud_first.auto_recognize(OVERLAPPING_LINK).unwrap(),
        Some(ParserName::Soundcloud),
        "先注册的解析器胜出"
    );

    assert_eq!(
        vimeo_first
            .parse_link(OVERLAPPING_LINK, ParserSelector::Auto)
            .unwrap(),
        Some("12345678".to_string())
    );
    assert_eq!(
        soundcloud_first
            .parse_link(OVERLAPPING_LINK, ParserSelector::Auto)
            .unwrap(),
        Some(OVERLAPPING_LINK.to_string()),
        "SoundCloud 把完整链接本身作为媒体 ID"
    );
}

#[test]
fn test_parse_link_auto_exhaustion_is_an_error() {
    let parser = youtube_vimeo_parser();
    let result = parser.parse_link("https://example.com/nothing", ParserSelector::Auto);
    assert!(matches!(result, Err(LinkParserError::NoParserMatched(_))));
}

#[test]
fn test_parse_link_explicit_type_returns_none_without_error() {
    let parser = youtube_vimeo_parser();
    let parsed = parser
        .parse_link(
            "https://vimeo.com/12345",
            ParserSelector::Specific(ParserName::Youtube),
        )
        .unwrap();
    assert_eq!(parsed, None, "指定名称时链接不匹配返回 None 而不是错误");
}

#[test]
fn test_unregistered_parser_is_an_error() {
    let parser = youtube_vimeo_parser();

    let result = parser.parse_link(
        "https://www.bilibili.com/video/BV1xx411c7mD",
        ParserSelector::Specific(ParserName::Bilibili),
    );
    assert!(matches!(
        result,
        Err(LinkParserError::ParserNotRegistered(ParserName::Bilibili))
    ));

    let result = parser.check_valid("anything", ParserName::Soundcloud);
    assert!(matches!(
        result,
        Err(LinkParserError::ParserNotRegistered(ParserName::Soundcloud))
    ));
}

#[test]
fn test_check_valid_requires_full_url() {
    let parser = youtube_vimeo_parser();

    assert!(parser
        .check_valid("https://vimeo.com/12345", ParserName::Vimeo)
        .unwrap());
    assert!(
        !parser.check_valid("12345678", ParserName::Vimeo).unwrap(),
        "check_valid 只接受完整链接，裸 ID 不算合法链接"
    );
}

#[test]
fn test_empty_link_is_rejected_everywhere() {
    let parser = youtube_vimeo_parser();

    assert!(matches!(
        parser.auto_recognize(""),
        Err(LinkParserError::EmptyLink)
    ));
    assert!(matches!(
        parser.parse_link("", ParserSelector::Auto),
        Err(LinkParserError::EmptyLink)
    ));
    assert!(matches!(
        parser.check_valid("", ParserName::Vimeo),
        Err(LinkParserError::EmptyLink)
    ));
}

#[tokio::test]
async fn test_empty_link_is_rejected_before_any_network() {
    let parser = youtube_vimeo_parser();

    assert!(matches!(
        parser.check_available("", ParserSelector::Auto).await,
        Err(LinkParserError::EmptyLink)
    ));
    assert!(matches!(
        parser.fetch_data("", ParserSelector::Auto).await,
        Err(LinkParserError::EmptyLink)
    ));
}

#[tokio::test]
async fn test_async_auto_exhaustion_fails_without_network() {
    let parser = youtube_vimeo_parser();

    let result = parser
        .check_available("https://example.com/nothing", ParserSelector::Auto)
        .await;
    assert!(matches!(result, Err(LinkParserError::NoParserMatched(_))));

    let result = parser
        .fetch_data("https://example.com/nothing", ParserSelector::Auto)
        .await;
    assert!(matches!(result, Err(LinkParserError::NoParserMatched(_))));
}

#[tokio::test]
async fn test_async_explicit_type_requires_parseable_link() {
    let parser = youtube_vimeo_parser();

    let result = parser
        .check_available(
            "https://vimeo.com/不是数字",
            ParserSelector::Specific(ParserName::Vimeo),
        )
        .await;
    assert!(matches!(
        result,
        Err(LinkParserError::UnparseableLink {
            name: ParserName::Vimeo,
            ..
        })
    ));

    let result = parser
        .fetch_data(
            "https://youtu.be/short",
            ParserSelector::Specific(ParserName::Youtube),
        )
        .await;
    assert!(matches!(
        result,
        Err(LinkParserError::UnparseableLink {
            name: ParserName::Youtube,
            ..
        })
    ));
}

#[test]
fn test_reload_parser_through_facade() {
    let mut parser = youtube_vimeo_parser();

    let new_config = ParserConfig::from_json(r#"{ "youtube": { "key": "rotated-key" } }"#).unwrap();
    assert!(parser.reload_parser(ParserName::Youtube, &new_config).unwrap());
    assert!(parser.get_parser(ParserName::Youtube).is_some());

    // 新配置缺少 key，重载失败但旧实例仍然在岗
    let broken_config = ParserConfig::default();
    assert!(!parser
        .reload_parser(ParserName::Youtube, &broken_config)
        .unwrap());
    assert_eq!(
        parser.auto_recognize("https://youtu.be/dQw4w9WgXcQ").unwrap(),
        Some(ParserName::Youtube)
    );

    let result = parser.reload_parser(ParserName::Bilibili, &new_config);
    assert!(matches!(
        result,
        Err(LinkParserError::ParserNotRegistered(ParserName::Bilibili))
    ));
}

#[test]
fn test_get_parser_exposes_bare_id_checks() {
    let parser = youtube_vimeo_parser();
    let youtube = parser.get_parser(ParserName::Youtube).unwrap();

    assert!(youtube.check_link("dQw4w9WgXcQ", true).unwrap());
    assert!(!youtube.check_link("dQw4w9WgXcQ", false).unwrap(), "裸 ID 不是合法链接");
}

#[test]
fn test_parser_selector_from_str() {
    assert_eq!("auto".parse::<ParserSelector>().unwrap(), ParserSelector::Auto);
    assert_eq!(
        "vimeo".parse::<ParserSelector>().unwrap(),
        ParserSelector::Specific(ParserName::Vimeo)
    );
    assert!(matches!(
        "myspace".parse::<ParserSelector>(),
        Err(LinkParserError::UnrecognizedName(name)) if name == "myspace"
    ));
}

#[test]
fn test_round_trip_for_every_parser_with_bare_ids() {
    let config = ParserConfig::from_json(
        r#"{
            "use": ["youtube", "vimeo", "nicovideo", "bilibili", "dailymotion"],
            "youtube": { "key": "test-key" }
        }"#,
    )
    .unwrap();
    let parser = TrackLinkParser::new(config).unwrap();

    let cases = [
        (ParserName::Youtube, "https://youtu.be/dQw4w9WgXcQ"),
        (ParserName::Vimeo, "https://vimeo.com/12345678"),
        (ParserName::Nicovideo, "https://www.nicovideo.jp/watch/sm12345678"),
        (ParserName::Bilibili, "https://www.bilibili.com/video/BV1xx411c7mD"),
        (ParserName::Dailymotion, "https://www.dailymotion.com/video/x7tgad0"),
    ];

    for (name, link) in cases {
        let adapter = parser.get_parser(name).unwrap();
        assert!(
            adapter.check_link(link, false).unwrap(),
            "{name} 应该认得链接 {link}"
        );
        let id = adapter
            .parse_link(link)
            .unwrap_or_else(|| panic!("{name} 应该能从 {link} 解析出 ID"));
        assert!(
            adapter.check_link(&id, true).unwrap(),
            "{name} 的 URL 形式和裸 ID 形式识别结果应该一致"
        );
    }
}
