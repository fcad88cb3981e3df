//! 此模块实现了与 SoundCloud 平台进行交互的 `LinkParser`。
//! API 为 v2 的 resolve 端点，需要在配置里提供 client id。
//!
//! SoundCloud 的曲目没有稳定的裸 ID 形式，完整链接本身就充当媒体 ID：
//! `parse_link` 直接返回原链接，仅凭 ID 的检查会返回 [`UnsupportedOperation`]。
//!
//! [`UnsupportedOperation`]: crate::error::LinkParserError::UnsupportedOperation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};

use crate::{
    config::KeyOptions,
    error::{LinkParserError, Result},
    model::media::{AuthorId, ExtraData, MediaRecord, SoundcloudExtra},
    parsers::{LinkParser, ParserName},
};

pub mod models;

use models::SoundcloudTrack;

const BASE_URL_SOUNDCLOUD: &str = "https://api-v2.soundcloud.com/resolve";

/// SoundCloud 的解析器实现。
#[derive(Debug, Clone)]
pub struct SoundcloudParser {
    key: String,
    http_client: Client,
}

impl SoundcloudParser {
    /// 创建一个新的 `SoundcloudParser` 实例。
    ///
    /// # 参数
    /// * `options` - 包含 client id 的配置项。
    ///
    /// # 返回
    /// 一个 `Result`，`key` 为空时返回 [`LinkParserError::MissingApiKey`]。
    pub fn new(options: KeyOptions) -> Result<Self> {
        if options.key.is_empty() {
            return Err(LinkParserError::MissingApiKey(ParserName::Soundcloud));
        }

        Ok(Self {
            key: options.key,
            http_client: Client::new(),
        })
    }

    /// 通过 resolve 端点查询曲目数据。
    ///
    /// 任何网络或解码失败都按"查不到数据"处理。
    async fn resolve(&self, link: &str) -> Option<SoundcloudTrack> {
        let response = self
            .http_client
            .get(BASE_URL_SOUNDCLOUD)
            .query(&[("url", link), ("client_id", self.key.as_str())])
            .send()
            .await
            .ok()?;

        if response.status() != StatusCode::OK {
            return None;
        }

        response.json().await.ok()
    }

    /// 解析 `created_at` 时间。新接口返回 ISO-8601，老数据可能是
    /// `"YYYY/MM/DD HH:MM:SS +0000"` 形式。
    fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y/%m/%d %H:%M:%S %z"))
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[async_trait]
impl LinkParser for SoundcloudParser {
    fn name(&self) -> ParserName {
        ParserName::Soundcloud
    }

    fn check_link(&self, link: &str, no_url: bool) -> Result<bool> {
        if no_url {
            Err(LinkParserError::UnsupportedOperation(ParserName::Soundcloud))
        } else {
            Ok(link.contains("soundcloud.com/"))
        }
    }

    fn parse_link(&self, link: &str) -> Option<String> {
        link.contains("soundcloud.com/").then(|| link.to_string())
    }

    async fn check_available(&self, media_id: &str) -> Result<bool> {
        let data = self.resolve(media_id).await;
        Ok(data.is_some_and(|track| track.errors.is_none()))
    }

    async fn fetch_data(&self, media_id: &str) -> Result<Option<MediaRecord>> {
        let Some(data) = self.resolve(media_id).await else {
            return Ok(None);
        };
        if data.errors.is_some() {
            return Ok(None);
        }

        Ok(Some(MediaRecord {
            parser: ParserName::Soundcloud,
            id: media_id.to_string(),
            link: data.permalink_url,
            name: data.title,
            author: Some(data.user.username),
            author_id: data.user.permalink.map(AuthorId::Text),
            description: data.description,
            duration: Some(data.duration as f64 / 1000.0),
            created: Self::parse_created_at(&data.created_at),
            views: data.playback_count,
            comments: data.comment_count,
            likes: data.favoritings_count,
            thumbnail: data.artwork_url,
            extra: ExtraData::Soundcloud(SoundcloudExtra {
                api_id: data.id,
                waveform: data.waveform_url,
                monetization: data.monetization_model,
                bpm: data.bpm,
                genre: data.genre,
                reposts: data.reposts_count,
            }),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_parser() -> SoundcloudParser {
        SoundcloudParser::new(KeyOptions {
            key: "test-client-id".to_string(),
        })
        .expect("构造 SoundcloudParser 失败")
    }

    #[test]
    fn test_constructor_rejects_empty_key() {
        let result = SoundcloudParser::new(KeyOptions { key: String::new() });
        assert!(matches!(
            result,
            Err(LinkParserError::MissingApiKey(ParserName::Soundcloud))
        ));
    }

    #[test]
    fn test_parse_link_returns_whole_link() {
        let parser = test_parser();
        let link = "https://soundcloud.com/artist/some-track";
        assert_eq!(parser.parse_link(link), Some(link.to_string()));
        assert_eq!(parser.parse_link("https://vimeo.com/12345678"), None);
    }

    #[test]
    fn test_check_link_by_id_is_unsupported() {
        let parser = test_parser();
        assert!(parser
            .check_link("https://soundcloud.com/artist/some-track", false)
            .unwrap());
        assert!(matches!(
            parser.check_link("some-track", true),
            Err(LinkParserError::UnsupportedOperation(ParserName::Soundcloud))
        ));
    }

    #[test]
    fn test_parse_created_at_both_formats() {
        let iso = SoundcloudParser::parse_created_at("2011-04-06T15:37:43Z").unwrap();
        let legacy = SoundcloudParser::parse_created_at("2011/04/06 15:37:43 +0000").unwrap();
        assert_eq!(iso, legacy);
        assert!(SoundcloudParser::parse_created_at("前天").is_none());
    }
}
