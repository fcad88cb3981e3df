//! 解析器模块
//!
//! 该模块定义了与各个媒体网站解析器进行交互的核心抽象。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::{error::Result, model::media::MediaRecord};

pub mod bilibili;
pub mod dailymotion;
pub mod nicovideo;
pub mod soundcloud;
pub mod vimeo;
pub mod youtube;

/// 所有受支持的媒体网站的名称。
///
/// 枚举成员的声明顺序就是默认的注册顺序，auto 模式会按这个顺序逐个探测。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ParserName {
    /// YouTube
    Youtube,
    /// Vimeo
    Vimeo,
    /// niconico 动画
    Nicovideo,
    /// 哔哩哔哩
    Bilibili,
    /// SoundCloud
    Soundcloud,
    /// Dailymotion
    Dailymotion,
}

/// 定义了所有媒体网站解析器需要实现的通用接口。
///
/// 每个实现者负责识别一个网站的链接、从链接中提取该站点的媒体 ID、
/// 查询媒体是否仍然可用，并把站点各自的响应规整成统一的 [`MediaRecord`]。
#[async_trait]
pub trait LinkParser: Send + Sync {
    ///
    /// 返回解析器对应的网站名称。
    ///
    fn name(&self) -> ParserName;

    ///
    /// 判断给定的输入是否属于该解析器负责的网站。
    ///
    /// 不会产生任何网络请求。
    ///
    /// # 参数
    /// * `link` - 待检查的完整链接；若 `no_url` 为 `true`，则视为裸媒体 ID。
    /// * `no_url` - 输入是否只是媒体 ID 而非完整链接。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含检查结果。如果该网站没有稳定的裸 ID 形式，
    /// 在 `no_url` 为 `true` 时返回 [`UnsupportedOperation`] 错误。
    ///
    /// [`UnsupportedOperation`]: crate::error::LinkParserError::UnsupportedOperation
    ///
    fn check_link(&self, link: &str, no_url: bool) -> Result<bool>;

    ///
    /// 尝试从完整链接中提取出该网站的媒体 ID。
    ///
    /// 不会产生任何网络请求。链接不匹配时返回 `None`，而不是错误。
    ///
    fn parse_link(&self, link: &str) -> Option<String>;

    ///
    /// 查询给定媒体 ID 对应的媒体在网站上是否仍然可用。
    ///
    /// # 参数
    /// * `media_id` - 该网站的媒体 ID。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含可用性结果。远端答复"不存在"会映射为
    /// `Ok(false)`；传输层故障是否上抛由各解析器自行决定。
    ///
    async fn check_available(&self, media_id: &str) -> Result<bool>;

    ///
    /// 获取给定媒体 ID 的完整元数据，并规整为 [`MediaRecord`]。
    ///
    /// # 参数
    /// * `media_id` - 该网站的媒体 ID。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含 `Some(MediaRecord)`；若远端确认媒体不存在，
    /// 返回 `Ok(None)`。
    ///
    async fn fetch_data(&self, media_id: &str) -> Result<Option<MediaRecord>>;
}
