//! 此模块实现了与哔哩哔哩平台进行交互的 `LinkParser`。
//! API 为公开的 web 接口 (`/x/web-interface/view`)，无需鉴权。

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::DateTime;
use regex::Regex;
use reqwest::Client;

use crate::{
    error::{LinkParserError, Result},
    model::media::{AuthorId, BilibiliExtra, ExtraData, MediaRecord},
    parsers::{LinkParser, ParserName},
};

pub mod models;

use models::ViewResult;

const BASE_URL_BILIBILI: &str = "https://api.bilibili.com/x/web-interface/view";

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"bilibili\.com/video/((?:av\d+)|(?:(?:bv|BV)1[0-9A-Za-z]+))")
        .expect("编译 Bilibili URL_REGEX 失败")
});

static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:av\d{8,9}|BV[0-9A-Za-z]{10})$").expect("编译 Bilibili ID_REGEX 失败")
});

static BVID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^bv1").expect("编译 Bilibili BVID_REGEX 失败"));

/// 哔哩哔哩的解析器实现。
#[derive(Debug, Clone, Default)]
pub struct BilibiliParser {
    http_client: Client,
}

impl BilibiliParser {
    /// 创建一个新的 `BilibiliParser` 实例。
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// 根据视频 ID 的形式决定查询参数：BV 号用 `bvid`，av 号去掉前缀后用 `aid`。
    fn view_query(video_id: &str) -> (&'static str, String) {
        if BVID_REGEX.is_match(video_id) {
            ("bvid", video_id.to_string())
        } else {
            let fixed = video_id
                .strip_prefix("av")
                .or_else(|| video_id.strip_prefix("AV"))
                .or_else(|| video_id.strip_prefix("aV"))
                .or_else(|| video_id.strip_prefix("Av"))
                .unwrap_or(video_id);
            ("aid", fixed.to_string())
        }
    }

    async fn request_view(&self, video_id: &str) -> Result<reqwest::Response> {
        let (param, value) = Self::view_query(video_id);
        Ok(self
            .http_client
            .get(BASE_URL_BILIBILI)
            .query(&[(param, value.as_str())])
            .send()
            .await?)
    }
}

#[async_trait]
impl LinkParser for BilibiliParser {
    fn name(&self) -> ParserName {
        ParserName::Bilibili
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
        let response = self.request_view(media_id).await?;
        if !response.status().is_success() {
            return Ok(false);
        }

        let payload: ViewResult = response.json().await?;
        Ok(payload.code != -400)
    }

    async fn fetch_data(&self, media_id: &str) -> Result<Option<MediaRecord>> {
        let response = self.request_view(media_id).await?;
        if !response.status().is_success() {
            return Ok(None);
        }

        let payload: ViewResult = response.json().await?;
        if payload.code == -400 || payload.code == -404 {
            return Ok(None);
        }
        let data = payload
            .data
            .ok_or_else(|| LinkParserError::ApiError("bilibili".to_string()))?;

        Ok(Some(MediaRecord {
            parser: ParserName::Bilibili,
            link: format!("https://www.bilibili.com/video/{}", data.bvid),
            id: data.bvid,
            name: data.title,
            author: Some(data.owner.name),
            author_id: Some(AuthorId::Number(data.owner.mid)),
            description: Some(data.desc),
            duration: Some(data.duration as f64),
            created: (data.pubdate > 0)
                .then(|| DateTime::from_timestamp(data.pubdate, 0))
                .flatten(),
            views: data.stat.as_ref().map(|stat| stat.view),
            comments: data.stat.as_ref().map(|stat| stat.reply),
            likes: data.stat.as_ref().map(|stat| stat.like),
            thumbnail: data.pic,
            extra: ExtraData::Bilibili(BilibiliExtra { aid: data.aid }),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link_bv_and_av_forms() {
        let parser = BilibiliParser::new();
        assert_eq!(
            parser.parse_link("https://www.bilibili.com/video/BV1xx411c7mD"),
            Some("BV1xx411c7mD".to_string())
        );
        assert_eq!(
            parser.parse_link("https://www.bilibili.com/video/av12345678"),
            Some("av12345678".to_string())
        );
        assert_eq!(parser.parse_link("https://www.bilibili.com/read/cv123"), None);
    }

    #[test]
    fn test_check_link_roundtrip() {
        let parser = BilibiliParser::new();
        for link in [
            "https://www.bilibili.com/video/BV1xx411c7mD",
            "https://www.bilibili.com/video/av12345678",
        ] {
            assert!(parser.check_link(link, false).unwrap());
            let id = parser.parse_link(link).expect("应该能解析出 ID");
            assert!(
                parser.check_link(&id, true).unwrap(),
                "URL 形式和裸 ID 形式的识别结果应该一致: {link}"
            );
        }
    }

    #[test]
    fn test_view_query_selection() {
        assert_eq!(
            BilibiliParser::view_query("BV1xx411c7mD"),
            ("bvid", "BV1xx411c7mD".to_string())
        );
        assert_eq!(
            BilibiliParser::view_query("bv1xx411c7md"),
            ("bvid", "bv1xx411c7md".to_string())
        );
        assert_eq!(
            BilibiliParser::view_query("av170001"),
            ("aid", "170001".to_string()),
            "av 号应该去掉前缀后作为 aid 查询"
        );
        assert_eq!(
            BilibiliParser::view_query("AV170001"),
            ("aid", "170001".to_string())
        );
    }
}
