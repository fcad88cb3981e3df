//! 此模块定义了用于反序列化 YouTube Data API v3 响应的 `struct` 数据结构。

use serde::{Deserialize, Deserializer};

/// 视频列表接口 (`/youtube/v3/videos`) 的顶层响应。
#[derive(Debug, Deserialize)]
pub struct VideoListResponse {
    /// 匹配到的视频条目列表。查询的 ID 不存在时为空。
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

/// 单个视频条目。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    /// 视频 ID（11 位字符）。
    pub id: String,
    /// 内容详情部分。
    pub content_details: ContentDetails,
    /// 基本信息部分。
    pub snippet: Snippet,
    /// 统计数据部分。
    pub statistics: Statistics,
    /// 状态部分。
    pub status: Status,
}

/// 视频的内容详情。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    /// ISO-8601 格式的时长字符串。直播中的视频为 `"P0D"`。
    pub duration: String,
}

/// 视频的基本信息。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// 视频标题。
    pub title: String,
    /// 视频描述。
    pub description: String,
    /// 频道 ID。
    pub channel_id: String,
    /// 频道的显示名称。
    pub channel_title: String,
    /// 视频发布时间（ISO-8601 字符串）。
    pub published_at: String,
    /// 视频标签列表。未设置标签时接口不返回该字段。
    #[serde(default)]
    pub tags: Vec<String>,
    /// 各尺寸的缩略图。
    pub thumbnails: Thumbnails,
}

/// 视频的统计数据。接口把数字编码成字符串返回，这里统一转换为数字。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// 播放量。
    #[serde(default, deserialize_with = "de_string_number")]
    pub view_count: Option<u64>,
    /// 收藏数。
    #[serde(default, deserialize_with = "de_string_number")]
    pub favorite_count: Option<u64>,
    /// 点赞数。
    #[serde(default, deserialize_with = "de_string_number")]
    pub like_count: Option<u64>,
    /// 评论数。
    #[serde(default, deserialize_with = "de_string_number")]
    pub comment_count: Option<u64>,
}

/// 视频的状态信息。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    /// 可见性 (例如 `"public"`, `"unlisted"`, `"private"`)。
    pub privacy_status: String,
}

/// 各尺寸的缩略图集合，按清晰度从高到低排列候选。
#[derive(Debug, Deserialize)]
pub struct Thumbnails {
    /// 最高清晰度。
    #[serde(default)]
    pub maxres: Option<ThumbnailData>,
    /// 高清晰度。
    #[serde(default)]
    pub high: Option<ThumbnailData>,
    /// 中等清晰度。
    #[serde(default)]
    pub medium: Option<ThumbnailData>,
    /// 低清晰度。
    #[serde(default)]
    pub small: Option<ThumbnailData>,
    /// 默认清晰度。
    #[serde(default, rename = "default")]
    pub fallback: Option<ThumbnailData>,
}

/// 单个缩略图的资源信息。
#[derive(Debug, Deserialize)]
pub struct ThumbnailData {
    /// 缩略图链接。
    pub url: String,
    /// 宽度（像素）。
    #[serde(default)]
    pub width: Option<u32>,
    /// 高度（像素）。
    #[serde(default)]
    pub height: Option<u32>,
}

impl Thumbnails {
    /// 按清晰度从高到低挑选第一个可用的缩略图链接。
    pub fn best_url(&self) -> Option<String> {
        [
            &self.maxres,
            &self.high,
            &self.medium,
            &self.small,
            &self.fallback,
        ]
        .into_iter()
        .find_map(|candidate| candidate.as_ref().map(|data| data.url.clone()))
    }
}

/// 把接口返回的字符串形式的数字转换为 `Option<u64>`。
fn de_string_number<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|text| text.parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_string_numbers_are_coerced() {
        let json = r#"{
            "viewCount": "1698554766",
            "favoriteCount": "0",
            "likeCount": "18216845",
            "commentCount": "2294155"
        }"#;

        let statistics: Statistics = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(statistics.view_count, Some(1698554766));
        assert_eq!(statistics.favorite_count, Some(0));
        assert_eq!(statistics.like_count, Some(18216845));
        assert_eq!(statistics.comment_count, Some(2294155));
    }

    #[test]
    fn test_statistics_missing_fields_become_none() {
        let statistics: Statistics =
            serde_json::from_str(r#"{ "viewCount": "100" }"#).expect("反序列化失败");
        assert_eq!(statistics.view_count, Some(100));
        assert_eq!(statistics.comment_count, None, "隐藏评论的视频没有 commentCount");
    }

    #[test]
    fn test_best_url_prefers_higher_resolution() {
        let json = r#"{
            "high": { "url": "https://i.ytimg.com/vi/x/hqdefault.jpg", "width": 480, "height": 360 },
            "default": { "url": "https://i.ytimg.com/vi/x/default.jpg", "width": 120, "height": 90 }
        }"#;

        let thumbnails: Thumbnails = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(
            thumbnails.best_url().as_deref(),
            Some("https://i.ytimg.com/vi/x/hqdefault.jpg")
        );
    }

    #[test]
    fn test_best_url_empty_set() {
        let thumbnails: Thumbnails = serde_json::from_str("{}").expect("反序列化失败");
        assert!(thumbnails.best_url().is_none());
    }
}
