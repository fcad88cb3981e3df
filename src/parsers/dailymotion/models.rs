//! 此模块定义了用于反序列化 Dailymotion Data API 响应的 `struct` 数据结构。

use serde::Deserialize;

/// 视频详情接口 (`/video/:id`) 的响应。
///
/// 字段集合由请求里的 `fields` 参数决定。
#[derive(Debug, Deserialize)]
pub struct DailymotionVideo {
    /// 视频的短 ID (`k` 或 `x` 开头)。
    pub id: String,
    /// 视频标题。
    pub title: String,
    /// 上传者的显示名称。
    #[serde(default, rename = "owner.screenname")]
    pub owner_screenname: Option<String>,
    /// 上传者的 ID。
    #[serde(default)]
    pub owner: Option<String>,
    /// 视频描述。可能是空字符串。
    #[serde(default)]
    pub description: Option<String>,
    /// 视频发布时间的 unix 时间戳（秒）。
    #[serde(default)]
    pub created_time: Option<i64>,
    /// 视频时长，单位为秒。
    #[serde(default)]
    pub duration: Option<f64>,
    /// 累计播放量。
    #[serde(default)]
    pub views_total: Option<u64>,
    /// 点赞数。
    #[serde(default)]
    pub likes_total: Option<u64>,
    /// 缩略图链接。
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// 视频是否被标记为成人内容。
    #[serde(default)]
    pub explicit: bool,
    /// 视频标签列表。
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 评论列表接口 (`/video/:id/comments`) 的响应。
///
/// 这里只关心评论总数。
#[derive(Debug, Deserialize)]
pub struct CommentsPage {
    /// 评论总数。
    #[serde(default)]
    pub total: Option<u64>,
}
