//! 此模块定义了用于反序列化哔哩哔哩 web 接口响应的 `struct` 数据结构。

use serde::Deserialize;

/// 视频详情接口 (`/x/web-interface/view`) 的顶层响应。
#[derive(Debug, Deserialize)]
pub struct ViewResult {
    /// API 返回码。`0` 表示成功，`-400` 请求错误，`-404` 视频不存在。
    pub code: i64,
    /// 人类可读的返回信息。
    #[serde(default)]
    pub message: Option<String>,
    /// 视频的详细信息，仅在成功时存在。
    #[serde(default)]
    pub data: Option<ViewData>,
}

/// 视频的详细信息。
#[derive(Debug, Deserialize)]
pub struct ViewData {
    /// 视频的数字 av 号。
    pub aid: u64,
    /// 视频的 BV 号。
    pub bvid: String,
    /// 视频标题。
    pub title: String,
    /// 视频简介。
    pub desc: String,
    /// 视频时长，单位为秒。
    pub duration: u64,
    /// 视频发布时间的 unix 时间戳（秒）。
    pub pubdate: i64,
    /// 封面图片链接。
    #[serde(default)]
    pub pic: Option<String>,
    /// UP 主信息。
    pub owner: Owner,
    /// 视频的统计数据。
    #[serde(default)]
    pub stat: Option<Stat>,
}

/// UP 主信息。
#[derive(Debug, Deserialize)]
pub struct Owner {
    /// UP 主的数字 ID。
    pub mid: i64,
    /// UP 主昵称。
    pub name: String,
}

/// 视频的统计数据。
#[derive(Debug, Deserialize)]
pub struct Stat {
    /// 播放量。
    pub view: u64,
    /// 评论数。
    pub reply: u64,
    /// 点赞数。
    pub like: u64,
}
