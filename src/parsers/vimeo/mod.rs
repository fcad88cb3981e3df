//! 此模块实现了与 Vimeo 平台进行交互的 `LinkParser`。
//! API 为公开的 Simple API (`https://vimeo.com/api/v2`)，无需鉴权。

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;
use reqwest::Client;

use crate::{
    error::{LinkParserError, Result},
    model::media::{AuthorId, ExtraData, MediaRecord},
    parsers::{LinkParser, ParserName},
};

pub mod models;

use models::VimeoVideo;

const BASE_URL_VIMEO: &str = "https://vimeo.com/api/v2/video";

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vimeo\.com/(\d+)").expect("编译 Vimeo URL_REGEX 失败"));

static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{8,9}$").expect("编译 Vimeo ID_REGEX 失败"));

/// Vimeo 的解析器实现。
#[derive(Debug, Clone, Default)]
pub struct VimeoParser {
    http_client: Client,
}

impl VimeoParser {
    /// 创建一个新的 `VimeoParser` 实例。
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    async fn request_video(&self, video_id: &str) -> Result<reqwest::Response> {
        let url = format!("{BASE_URL_VIMEO}/{video_id}.json");
        Ok(self.http_client.get(&url).send().await?)
    }

    /// 把 Simple API 返回的 `upload_date`（如 `"2010-10-01 01:01:01"`，无时区，
    /// 按 UTC 处理）解析为统一的时间戳。
    fn parse_upload_date(raw: &str) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .map(|dt| dt.and_utc())
    }
}

#[async_trait]
impl LinkParser for VimeoParser {
    fn name(&self) -> ParserName {
        ParserName::Vimeo
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
        let response = self.request_video(media_id).await?;
        Ok(response.status().is_success())
    }

    async fn fetch_data(&self, media_id: &str) -> Result<Option<MediaRecord>> {
        let response = self.request_video(media_id).await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        // Simple API 把单个视频包在一个数组里返回
        let mut payload: Vec<VimeoVideo> = response.json().await?;
        if payload.is_empty() {
            return Err(LinkParserError::ApiError("vimeo".to_string()));
        }
        let data = payload.remove(0);

        Ok(Some(MediaRecord {
            parser: ParserName::Vimeo,
            id: data.id.to_string(),
            link: data.url,
            name: data.title,
            author: Some(data.user_name),
            author_id: Some(AuthorId::Text(format!("user{}", data.user_id))),
            description: data.description,
            duration: Some(data.duration as f64),
            created: Self::parse_upload_date(&data.upload_date),
            views: data.stats_number_of_plays,
            comments: data.stats_number_of_comments,
            likes: data.stats_number_of_likes,
            thumbnail: data
                .thumbnail_large
                .or(data.thumbnail_medium)
                .or(data.thumbnail_small),
            extra: ExtraData::Vimeo,
        }))
    }
}
