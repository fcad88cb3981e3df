//! 此模块实现了与 niconico 动画平台进行交互的 `LinkParser`。
//! API 为游客端点 (`/api/watch/v3_guest`)，无需登录。

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use regex::Regex;
use reqwest::Client;

use crate::{
    error::Result,
    model::media::{AuthorId, ExtraData, MediaRecord, NicovideoExtra},
    parsers::{LinkParser, ParserName},
};

pub mod models;

use models::WatchResult;

const BASE_URL_NICOVIDEO: &str = "https://www.nicovideo.jp/api/watch/v3_guest";

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"nicovideo\.jp/watch/((?:sm|nm)\d+)").expect("编译 Nicovideo URL_REGEX 失败")
});

static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:sm|nm)\d{7,9}$").expect("编译 Nicovideo ID_REGEX 失败")
});

/// niconico 动画的解析器实现。
#[derive(Debug, Clone, Default)]
pub struct NicovideoParser {
    http_client: Client,
}

impl NicovideoParser {
    /// 创建一个新的 `NicovideoParser` 实例。
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// 生成接口要求的 `actionTrackId`：10 位随机字母数字加毫秒时间戳。
    fn action_track_id() -> String {
        let mut rng = rand::rng();
        let prefix: String = (0..10)
            .map(|_| rng.sample(rand::distr::Alphanumeric) as char)
            .collect();
        format!("{}_{}", prefix, Utc::now().timestamp_millis())
    }

    async fn request_watch(&self, video_id: &str) -> Result<reqwest::Response> {
        let url = format!("{BASE_URL_NICOVIDEO}/{video_id}");
        Ok(self
            .http_client
            .get(&url)
            .query(&[
                ("_frontendId", "6"),
                ("_frontendVersion", "0"),
                ("actionTrackId", Self::action_track_id().as_str()),
            ])
            .send()
            .await?)
    }
}

#[async_trait]
impl LinkParser for NicovideoParser {
    fn name(&self) -> ParserName {
        ParserName::Nicovideo
    }

    fn check_link(&self, link: &str, no_url: bool) -> Result<bool> {
        if no_url {
            Ok(ID_REGEX.is_match(link))
        } else {
            Ok(URL_REGEX.is_match(link))
        }
    }

    fn parse_link(&self, link: &str) -> Option<String> {
        URL_REGEX
            .captures(link)
            .map(|captures| captures[1].to_string())
    }

    async fn check_available(&self, media_id: &str) -> Result<bool> {
        let response = self.request_watch(media_id).await?;
        Ok(response.status().is_success())
    }

    async fn fetch_data(&self, media_id: &str) -> Result<Option<MediaRecord>> {
        let response = self.request_watch(media_id).await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let payload: WatchResult = response.json().await?;
        let data = payload.data;

        Ok(Some(MediaRecord {
            parser: ParserName::Nicovideo,
            link: format!("https://www.nicovideo.jp/watch/{}", data.video.id),
            id: data.video.id,
            name: data.video.title,
            author: data.owner.as_ref().map(|owner| owner.nickname.clone()),
            author_id: data.owner.as_ref().map(|owner| AuthorId::Number(owner.id)),
            description: Some(data.video.description),
            duration: Some(data.video.duration as f64),
            created: DateTime::parse_from_rfc3339(&data.video.registered_at)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            views: Some(data.video.count.view),
            comments: Some(data.video.count.comment),
            likes: Some(data.video.count.like),
            thumbnail: Some(data.video.thumbnail.url),
            extra: ExtraData::Nicovideo(NicovideoExtra {
                genre: data.genre.map(|genre| genre.key),
                nsfw: data.video.rating.is_adult,
                tags: data
                    .tag
                    .items
                    .into_iter()
                    .map(|item| item.name)
                    .collect(),
            }),
        }))
    }
}
