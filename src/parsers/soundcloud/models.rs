//! 此模块定义了用于反序列化 SoundCloud v2 API 响应的 `struct` 数据结构。

use serde::Deserialize;
use serde_json::Value;

/// resolve 端点 (`/resolve?url=...`) 返回的曲目数据。
#[derive(Debug, Deserialize)]
pub struct SoundcloudTrack {
    /// 曲目在 API 内部的数字 ID。
    pub id: u64,
    /// 曲目页面的规范链接。
    pub permalink_url: String,
    /// 曲目标题。
    pub title: String,
    /// 曲目描述。
    #[serde(default)]
    pub description: Option<String>,
    /// 曲目时长，单位为毫秒。
    pub duration: u64,
    /// 曲目上传时间。
    pub created_at: String,
    /// 累计播放量。
    #[serde(default)]
    pub playback_count: Option<u64>,
    /// 评论数。
    #[serde(default)]
    pub comment_count: Option<u64>,
    /// 收藏（点赞）数。
    #[serde(default)]
    pub favoritings_count: Option<u64>,
    /// 封面图链接。
    #[serde(default)]
    pub artwork_url: Option<String>,
    /// 上传者信息。
    pub user: SoundcloudUser,
    /// 波形图资源链接。
    #[serde(default)]
    pub waveform_url: Option<String>,
    /// 商业化模式。
    #[serde(default)]
    pub monetization_model: Option<String>,
    /// 曲目 BPM。
    #[serde(default)]
    pub bpm: Option<f64>,
    /// 曲目流派。
    #[serde(default)]
    pub genre: Option<String>,
    /// 转发数。
    #[serde(default)]
    pub reposts_count: Option<u64>,
    /// resolve 失败时接口在 200 响应里携带的错误列表。
    #[serde(default)]
    pub errors: Option<Value>,
}

/// 上传者信息。
#[derive(Debug, Deserialize)]
pub struct SoundcloudUser {
    /// 上传者的显示名称。
    pub username: String,
    /// 上传者的 permalink（作为作者 ID 使用）。
    #[serde(default)]
    pub permalink: Option<String>,
}
