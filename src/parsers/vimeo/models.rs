//! 此模块定义了用于反序列化 Vimeo Simple API 响应的 `struct` 数据结构。

use serde::Deserialize;

/// Simple API (`/api/v2/video/:id.json`) 返回的单个视频条目。
///
/// 接口的顶层是一个数组，正常情况下只包含一个元素。
#[derive(Debug, Deserialize)]
pub struct VimeoVideo {
    /// 视频的数字 ID。
    pub id: u64,
    /// 视频标题。
    pub title: String,
    /// 视频描述。
    #[serde(default)]
    pub description: Option<String>,
    /// 视频时长，单位为秒。
    pub duration: u64,
    /// 视频上传时间，格式为 `"YYYY-MM-DD HH:MM:SS"`。
    pub upload_date: String,
    /// 视频页面的规范链接。
    pub url: String,
    /// 上传者的数字 ID。
    pub user_id: u64,
    /// 上传者名称。
    pub user_name: String,
    /// 累计播放量。
    #[serde(default)]
    pub stats_number_of_plays: Option<u64>,
    /// 评论数。
    #[serde(default)]
    pub stats_number_of_comments: Option<u64>,
    /// 点赞数。
    #[serde(default)]
    pub stats_number_of_likes: Option<u64>,
    /// 小尺寸缩略图链接。
    #[serde(default)]
    pub thumbnail_small: Option<String>,
    /// 中等尺寸缩略图链接。
    #[serde(default)]
    pub thumbnail_medium: Option<String>,
    /// 大尺寸缩略图链接。
    #[serde(default)]
    pub thumbnail_large: Option<String>,
}
