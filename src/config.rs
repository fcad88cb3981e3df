//! 负责处理构造 [`TrackLinkParser`](crate::TrackLinkParser) 时的配置。

use serde::Deserialize;
use strum::IntoEnumIterator;

use crate::{
    error::{LinkParserError, Result},
    parsers::ParserName,
};

/// 需要 API key 的网站的配置项。
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyOptions {
    /// 对应网站的 API key（YouTube Data API key、SoundCloud client id）。
    pub key: String,
}

/// `use` 字段接受单个名称或名称列表两种写法。
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UseParsers {
    /// 只激活一个解析器。
    One(ParserName),
    /// 激活给定的解析器列表，顺序即注册顺序。
    Many(Vec<ParserName>),
}

impl From<ParserName> for UseParsers {
    fn from(name: ParserName) -> Self {
        Self::One(name)
    }
}

impl From<Vec<ParserName>> for UseParsers {
    fn from(names: Vec<ParserName>) -> Self {
        Self::Many(names)
    }
}

/// [`TrackLinkParser`](crate::TrackLinkParser) 的构造配置。
///
/// 顶层只认识 `use` 和各网站名称对应的子配置；出现无法识别的键时，
/// 反序列化（进而构造）会直接失败。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    /// 要激活哪些解析器。缺省时激活全部已知解析器。
    #[serde(default, rename = "use")]
    pub use_parsers: Option<UseParsers>,
    /// YouTube 解析器的配置。激活 YouTube 时必须提供。
    #[serde(default)]
    pub youtube: Option<KeyOptions>,
    /// SoundCloud 解析器的配置。激活 SoundCloud 时必须提供。
    #[serde(default)]
    pub soundcloud: Option<KeyOptions>,
}

impl ParserConfig {
    /// 从 JSON 文本解析构造配置。
    ///
    /// # 返回
    /// 一个 `Result`，文本不合法或包含无法识别的键/名称时返回
    /// [`LinkParserError::InvalidConfig`]。
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| LinkParserError::InvalidConfig(e.to_string()))
    }

    /// 解析出应被激活的解析器列表，保持顺序并去除重复项。
    ///
    /// `use` 缺省时返回全部已知解析器（按默认注册顺序）。
    pub fn active_parsers(&self) -> Vec<ParserName> {
        let requested: Vec<ParserName> = match &self.use_parsers {
            None => ParserName::iter().collect(),
            Some(UseParsers::One(name)) => vec![*name],
            Some(UseParsers::Many(names)) => names.clone(),
        };

        let mut seen = Vec::with_capacity(requested.len());
        for name in requested {
            if !seen.contains(&name) {
                seen.push(name);
            }
        }
        seen
    }
}
