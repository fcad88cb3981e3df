//! 此模块实现了与 YouTube 平台进行交互的 `LinkParser`。
//! API 为 YouTube Data API v3，需要在配置里提供 API key。

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use reqwest::Client;

use crate::{
    config::KeyOptions,
    error::Result,
    model::media::{AuthorId, ExtraData, MediaRecord, YoutubeExtra},
    parsers::{LinkParser, ParserName},
};

pub mod models;

use models::VideoListResponse;

const BASE_URL_YOUTUBE: &str = "https://www.googleapis.com/youtube/v3/videos";

/// 向 Data API 请求的资源部分。
const DATA_PARTS: &str = "contentDetails,snippet,status,statistics";

/// 各种 YouTube 链接形式里视频 ID 的出现位置，按顺序逐个尝试。
static URL_REGEXES: LazyLock<[Regex; 6]> = LazyLock::new(|| {
    [
        r"youtu\.be/([A-Za-z0-9_-]{11})",
        r"\?v=([A-Za-z0-9_-]{11})",
        r"&v=([A-Za-z0-9_-]{11})",
        r"embed/([A-Za-z0-9_-]{11})",
        r"/v/([A-Za-z0-9_-]{11})",
        r"video_id=([A-Za-z0-9_-]{11})",
    ]
    .map(|pattern| Regex::new(pattern).expect("编译 YouTube URL 正则失败"))
});

static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("编译 YouTube ID_REGEX 失败"));

static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"P(?:(?P<days>\d+)D)?(?:T(?:(?P<hours>\d+)H)?(?:(?P<minutes>\d+)M)?(?:(?P<seconds>\d+)S)?)?")
        .expect("编译 YouTube DURATION_REGEX 失败")
});

/// YouTube 的解析器实现。
#[derive(Debug, Clone)]
pub struct YoutubeParser {
    key: String,
    http_client: Client,
}

impl YoutubeParser {
    /// 创建一个新的 `YoutubeParser` 实例。
    ///
    /// # 参数
    /// * `options` - 包含 Data API key 的配置项。
    pub fn new(options: KeyOptions) -> Self {
        Self {
            key: options.key,
            http_client: Client::new(),
        }
    }

    async fn request_videos(&self, video_id: &str) -> Result<VideoListResponse> {
        let response = self
            .http_client
            .get(BASE_URL_YOUTUBE)
            .query(&[
                ("id", video_id),
                ("key", self.key.as_str()),
                ("part", DATA_PARTS),
            ])
            .send()
            .await?;
        Ok(response.json().await?)
    }

    /// 把 ISO-8601 时长字符串（如 `"PT3M33S"`）解析为秒数。
    ///
    /// 无法匹配出任何时间成分时返回 `None`。
    fn parse_duration(raw: &str) -> Option<f64> {
        let captures = DURATION_REGEX.captures(raw)?;

        let component = |name: &str| -> u64 {
            captures
                .name(name)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0)
        };

        if ["days", "hours", "minutes", "seconds"]
            .iter()
            .all(|name| captures.name(name).is_none())
        {
            return None;
        }

        Some(
            (component("days") * 86400
                + component("hours") * 3600
                + component("minutes") * 60
                + component("seconds")) as f64,
        )
    }
}

#[async_trait]
impl LinkParser for YoutubeParser {
    fn name(&self) -> ParserName {
        ParserName::Youtube
    }

    fn check_link(&self, link: &str, no_url: bool) -> Result<bool> {
        if no_url {
            Ok(ID_REGEX.is_match(link))
        } else {
            Ok(self.parse_link(link).is_some())
        }
    }

    fn parse_link(&self, link: &str) -> Option<String> {
        URL_REGEXES
            .iter()
            .find_map(|pattern| pattern.captures(link))
            .map(|captures| captures[1].to_string())
    }

    async fn check_available(&self, media_id: &str) -> Result<bool> {
        let payload = self.request_videos(media_id).await?;
        Ok(payload.items.iter().any(|item| item.id == media_id))
    }

    async fn fetch_data(&self, media_id: &str) -> Result<Option<MediaRecord>> {
        let payload = self.request_videos(media_id).await?;
        let Some(data) = payload.items.into_iter().find(|item| item.id == media_id) else {
            return Ok(None);
        };

        let raw_duration = data.content_details.duration;

        Ok(Some(MediaRecord {
            parser: ParserName::Youtube,
            link: format!("https://youtu.be/{}", data.id),
            id: data.id,
            name: data.snippet.title,
            author: Some(data.snippet.channel_title),
            author_id: Some(AuthorId::Text(data.snippet.channel_id)),
            description: Some(data.snippet.description),
            duration: if raw_duration == "P0D" {
                None
            } else {
                Self::parse_duration(&raw_duration)
            },
            created: DateTime::parse_from_rfc3339(&data.snippet.published_at)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            views: data.statistics.view_count,
            comments: data.statistics.comment_count,
            likes: data.statistics.like_count,
            thumbnail: data.snippet.thumbnails.best_url(),
            extra: ExtraData::Youtube(YoutubeExtra {
                favourites: data.statistics.favorite_count,
                raw_length: raw_duration,
                tags: data.snippet.tags,
                privacy: data.status.privacy_status,
            }),
        }))
    }
}
