//! 定义了整个库通用的、与具体网站无关的标准化媒体元数据模型。
//!
//! [`MediaRecord`] 是所有解析器在获取到各自网站的数据后，
//! 需要转换成的目标标准格式。除 `extra` 以外的字段在任何网站上都存在
//! （允许为 `null`）；`extra` 的形状由各网站自行定义，不应被通用代码访问。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parsers::ParserName;

/// 媒体作者在其所在网站的 ID。
///
/// 不同网站的作者 ID 形式不同：哔哩哔哩、niconico 使用数字 ID，
/// YouTube、SoundCloud 等使用字符串 ID。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AuthorId {
    /// 数字形式的作者 ID。
    Number(i64),
    /// 字符串形式的作者 ID。
    Text(String),
}

/// 代表一条标准化的媒体元数据记录。
///
/// 这是所有解析器的 `fetch_data` 方法需要返回的类型。
/// 序列化时，值为 `None` 的字段输出 `null` 而不是被省略。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRecord {
    /// 产生这条记录的解析器（即媒体所在的网站）。
    #[serde(rename = "type")]
    pub parser: ParserName,
    /// 媒体在其所在网站的 ID。
    #[serde(rename = "ID")]
    pub id: String,
    /// 媒体的规范链接。
    pub link: String,
    /// 媒体在网站上显示的标题。
    pub name: String,
    /// 媒体作者的名称（如果存在）。
    pub author: Option<String>,
    /// 媒体作者的 ID（仅当作者存在且网站使用作者 ID 时可用）。
    #[serde(rename = "authorID")]
    pub author_id: Option<AuthorId>,
    /// 作者填写的媒体描述。
    pub description: Option<String>,
    /// 媒体时长，单位为秒。依网站不同可能是整数或小数。
    pub duration: Option<f64>,
    /// 媒体在网站上的发布时间。
    pub created: Option<DateTime<Utc>>,
    /// 累计播放量（如果网站支持）。
    pub views: Option<u64>,
    /// 评论数（如果网站支持）。
    pub comments: Option<u64>,
    /// 点赞数（如果网站支持）。
    pub likes: Option<u64>,
    /// 媒体缩略图链接（如果可用）。
    pub thumbnail: Option<String>,
    /// 网站特有的额外数据，形状由对应的解析器定义。
    pub extra: ExtraData,
}

/// 各网站特有的额外数据。
///
/// 这是一个封闭的枚举，每个网站一个成员；成员的内容只对知道对应网站的
/// 调用方有意义，不应被按统一形状访问。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExtraData {
    /// YouTube 特有的数据。
    Youtube(YoutubeExtra),
    /// Vimeo 没有额外数据。
    Vimeo,
    /// niconico 特有的数据。
    Nicovideo(NicovideoExtra),
    /// 哔哩哔哩特有的数据。
    Bilibili(BilibiliExtra),
    /// SoundCloud 特有的数据。
    Soundcloud(SoundcloudExtra),
    /// Dailymotion 特有的数据。
    Dailymotion(DailymotionExtra),
}

/// YouTube 视频的额外数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YoutubeExtra {
    /// 收藏数。
    pub favourites: Option<u64>,
    /// API 返回的原始 ISO-8601 时长字符串。
    pub raw_length: String,
    /// 视频标签列表。
    pub tags: Vec<String>,
    /// 视频的可见性 (例如 `"public"`, `"unlisted"`)。
    pub privacy: String,
}

/// niconico 视频的额外数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicovideoExtra {
    /// 视频的分区标识。
    pub genre: Option<String>,
    /// 视频是否被标记为 R18。
    pub nsfw: bool,
    /// 视频标签列表。
    pub tags: Vec<String>,
}

/// 哔哩哔哩视频的额外数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BilibiliExtra {
    /// 视频的数字 av 号。
    pub aid: u64,
}

/// SoundCloud 音频的额外数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundcloudExtra {
    /// 音频在 API 内部的数字 ID。
    pub api_id: u64,
    /// 波形图资源链接。
    pub waveform: Option<String>,
    /// 商业化模式。
    pub monetization: Option<String>,
    /// 曲目 BPM。
    pub bpm: Option<f64>,
    /// 曲目流派。
    pub genre: Option<String>,
    /// 转发数。
    pub reposts: Option<u64>,
}

/// Dailymotion 视频的额外数据。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailymotionExtra {
    /// 视频是否被标记为成人内容。
    pub explicit: bool,
    /// 视频标签列表。
    pub tags: Vec<String>,
}
