//! 此模块实现了与 Dailymotion 平台进行交互的 `LinkParser`。
//! API 为公开的 Data API (`https://api.dailymotion.com`)，无需鉴权。

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::DateTime;
use futures::future;
use regex::Regex;
use reqwest::{Client, StatusCode};

use crate::{
    error::Result,
    model::media::{AuthorId, DailymotionExtra, ExtraData, MediaRecord},
    parsers::{LinkParser, ParserName},
};

pub mod models;

use models::{CommentsPage, DailymotionVideo};

const BASE_URL_DAILYMOTION: &str = "https://api.dailymotion.com/video";

/// 向 Data API 请求的字段列表。
const DATA_FIELDS: &str = "created_time,description,duration,explicit,id,likes_total,\
owner,owner.screenname,private,tags,thumbnail_url,title,views_total,url";

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:dailymotion\.com/video/|dai\.ly/)([kx][a-z0-9]{5,6})")
        .expect("编译 Dailymotion URL_REGEX 失败")
});

static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[kx][a-z0-9]{5,6}$").expect("编译 Dailymotion ID_REGEX 失败")
});

/// Dailymotion 的解析器实现。
#[derive(Debug, Clone, Default)]
pub struct DailymotionParser {
    http_client: Client,
}

impl DailymotionParser {
    /// 创建一个新的 `DailymotionParser` 实例。
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl LinkParser for DailymotionParser {
    fn name(&self) -> ParserName {
        ParserName::Dailymotion
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
        let url = format!("{BASE_URL_DAILYMOTION}/{media_id}");
        let response = self.http_client.get(&url).send().await?;
        Ok(response.status() == StatusCode::OK)
    }

    async fn fetch_data(&self, media_id: &str) -> Result<Option<MediaRecord>> {
        let video_future = async {
            self.http_client
                .get(format!("{BASE_URL_DAILYMOTION}/{media_id}"))
                .query(&[("fields", DATA_FIELDS)])
                .send()
                .await?
                .error_for_status()?
                .json::<DailymotionVideo>()
                .await
        };
        let comments_future = async {
            self.http_client
                .get(format!("{BASE_URL_DAILYMOTION}/{media_id}/comments"))
                .send()
                .await?
                .error_for_status()?
                .json::<CommentsPage>()
                .await
        };

        // 视频详情和评论数并发获取；任何一个失败都按"媒体不存在"处理
        let (video, comments) = match future::try_join(video_future, comments_future).await {
            Ok(pair) => pair,
            Err(_) => return Ok(None),
        };

        Ok(Some(MediaRecord {
            parser: ParserName::Dailymotion,
            link: format!("https://dailymotion.com/{}", video.id),
            id: video.id,
            name: video.title,
            author: video.owner_screenname,
            author_id: video.owner.map(AuthorId::Text),
            description: video.description.filter(|text| !text.is_empty()),
            duration: video.duration,
            created: video
                .created_time
                .filter(|&secs| secs != 0)
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
            views: video.views_total,
            comments: comments.total,
            likes: video.likes_total,
            thumbnail: video.thumbnail_url,
            extra: ExtraData::Dailymotion(DailymotionExtra {
                explicit: video.explicit,
                tags: video.tags,
            }),
        }))
    }
}
