#![warn(missing_docs)]

//! # Track Link Parser RS
//!
//! 一个统一识别、解析并获取多个媒体网站链接元数据的 Rust 库。
//!
//! ## 主要功能
//!
//! - **链接识别**: 自动判断一条链接属于哪个受支持的媒体网站
//!   （YouTube、Vimeo、niconico、哔哩哔哩、SoundCloud、Dailymotion）。
//! - **ID 提取**: 从链接中解析出网站自己的媒体 ID。
//! - **元数据获取**: 查询媒体是否仍然可用，并把各网站的响应规整成统一的
//!   [`MediaRecord`] 格式。
//!
//! ## 获取媒体元数据
//!
//! ```rust,no_run
//! use track_link_parser_rs::{ParserConfig, ParserSelector, TrackLinkParser};
//!
//! async {
//!     let config = ParserConfig::from_json(r#"{ "use": ["bilibili", "vimeo"] }"#).unwrap();
//!     let parser = TrackLinkParser::new(config).unwrap();
//!
//!     let link = "https://www.bilibili.com/video/BV17x411w7KC";
//!     match parser.fetch_data(link, ParserSelector::Auto).await {
//!         Ok(Some(record)) => println!("获取成功: {} ({}s)", record.name, record.duration.unwrap_or(0.0)),
//!         Ok(None) => println!("媒体已不存在。"),
//!         Err(e) => eprintln!("发生错误: {}", e),
//!     }
//! };
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod registry;

use std::str::FromStr;

pub use crate::{
    config::{KeyOptions, ParserConfig},
    error::{LinkParserError, Result},
    model::media::MediaRecord,
    parsers::{LinkParser, ParserName},
};

use crate::registry::ParserRegistry;

// ==========================================================
//  顶层 API
// ==========================================================

/// 指定一次操作应当由哪个解析器处理。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParserSelector {
    /// 按注册顺序逐个探测，第一个能从链接中解析出媒体 ID 的解析器胜出。
    #[default]
    Auto,
    /// 只使用指定的解析器，不做任何回退。
    Specific(ParserName),
}

impl From<ParserName> for ParserSelector {
    fn from(name: ParserName) -> Self {
        Self::Specific(name)
    }
}

impl FromStr for ParserSelector {
    type Err = LinkParserError;

    /// 接受 `"auto"` 或一个小写的网站名称。
    fn from_str(text: &str) -> Result<Self> {
        if text == "auto" {
            Ok(Self::Auto)
        } else {
            text.parse::<ParserName>()
                .map(Self::Specific)
                .map_err(|_| LinkParserError::UnrecognizedName(text.to_string()))
        }
    }
}

/// 顶层的链接解析客户端，封装了所有网站的解析器，为用户提供统一、简单的接口。
///
/// 这是与本库交互的主要入口点。
pub struct TrackLinkParser {
    registry: ParserRegistry,
}

impl TrackLinkParser {
    /// 根据构造配置创建一个新的 `TrackLinkParser` 实例。
    ///
    /// # 参数
    /// * `config` - 指定激活哪些解析器，以及各解析器自己的配置项。
    ///
    /// # 返回
    /// 一个 `Result`，任何一个解析器构造失败（例如缺少必需的 key）都会使
    /// 整个构造失败。
    pub fn new(config: ParserConfig) -> Result<Self> {
        let registry = ParserRegistry::from_config(&config)?;
        Ok(Self { registry })
    }

    fn validate_link(link: &str) -> Result<()> {
        if link.is_empty() {
            return Err(LinkParserError::EmptyLink);
        }
        Ok(())
    }

    /// 在已注册的解析器中找出第一个能解析该链接的，并返回它和解析出的媒体 ID。
    fn find_matching(&self, link: &str) -> Option<(&dyn LinkParser, String)> {
        for parser in self.registry.iter() {
            if let Some(media_id) = parser.parse_link(link) {
                tracing::debug!("链接 '{}' 由 '{}' 解析器接管。", link, parser.name());
                return Some((parser, media_id));
            }
        }
        None
    }

    /// 尝试检测一条媒体链接属于哪个网站。
    ///
    /// # 参数
    /// * `link` - 待检测的链接。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含检测到的网站名称；没有任何解析器能够匹配时
    /// 返回 `Ok(None)`（这是一次查询，不构成错误）。
    pub fn auto_recognize(&self, link: &str) -> Result<Option<ParserName>> {
        Self::validate_link(link)?;

        Ok(self
            .find_matching(link)
            .map(|(parser, _media_id)| parser.name()))
    }

    /// 从链接中提取网站自己的媒体 ID。
    ///
    /// # 参数
    /// * `link` - 待解析的链接。
    /// * `selector` - [`ParserSelector::Auto`] 表示按注册顺序探测；
    ///   指定名称时只询问那一个解析器。
    ///
    /// # 返回
    /// 一个 `Result`。auto 模式下没有任何解析器匹配时返回
    /// [`LinkParserError::NoParserMatched`]；指定名称未注册时返回
    /// [`LinkParserError::ParserNotRegistered`]；指定名称但链接不匹配时返回
    /// `Ok(None)`。
    pub fn parse_link(&self, link: &str, selector: ParserSelector) -> Result<Option<String>> {
        Self::validate_link(link)?;

        match selector {
            ParserSelector::Auto => match self.find_matching(link) {
                Some((_parser, media_id)) => Ok(Some(media_id)),
                None => Err(LinkParserError::NoParserMatched(link.to_string())),
            },
            ParserSelector::Specific(name) => {
                let parser = self
                    .registry
                    .get(name)
                    .ok_or(LinkParserError::ParserNotRegistered(name))?;
                Ok(parser.parse_link(link))
            }
        }
    }

    /// 判断链接对指定网站的解析器来说是否是合法的媒体链接。
    ///
    /// 这是唯一一个没有 auto 模式的操作：不知道候选网站的"合法性"查询不被
    /// 支持，必须显式给出名称。
    ///
    /// # 参数
    /// * `link` - 待检查的完整链接。
    /// * `name` - 要询问的解析器名称。
    ///
    /// # 返回
    /// 一个 `Result`，`name` 未注册时返回
    /// [`LinkParserError::ParserNotRegistered`]。
    pub fn check_valid(&self, link: &str, name: ParserName) -> Result<bool> {
        Self::validate_link(link)?;

        let parser = self
            .registry
            .get(name)
            .ok_or(LinkParserError::ParserNotRegistered(name))?;
        parser.check_link(link, false)
    }

    /// 查询链接指向的媒体在网站上是否仍然可用。
    ///
    /// # 参数
    /// * `link` - 待查询的链接。
    /// * `selector` - 解析器选择方式，同 [`parse_link`](Self::parse_link)。
    ///
    /// # 返回
    /// 一个 `Result`。auto 模式下没有任何解析器匹配时返回
    /// [`LinkParserError::NoParserMatched`]；指定的解析器无法从链接中提取
    /// ID 时返回 [`LinkParserError::UnparseableLink`]。
    pub async fn check_available(&self, link: &str, selector: ParserSelector) -> Result<bool> {
        Self::validate_link(link)?;

        match selector {
            ParserSelector::Auto => match self.find_matching(link) {
                Some((parser, media_id)) => parser.check_available(&media_id).await,
                None => Err(LinkParserError::NoParserMatched(link.to_string())),
            },
            ParserSelector::Specific(name) => {
                let parser = self
                    .registry
                    .get(name)
                    .ok_or(LinkParserError::ParserNotRegistered(name))?;
                let media_id =
                    parser
                        .parse_link(link)
                        .ok_or_else(|| LinkParserError::UnparseableLink {
                            name,
                            link: link.to_string(),
                        })?;
                parser.check_available(&media_id).await
            }
        }
    }

    /// 获取链接指向的媒体的完整元数据。
    ///
    /// # 参数
    /// * `link` - 待查询的链接。
    /// * `selector` - 解析器选择方式，同 [`parse_link`](Self::parse_link)。
    ///
    /// # 返回
    /// 一个 `Result`，成功时包含 `Some(MediaRecord)`；远端确认媒体不存在时
    /// 返回 `Ok(None)`。错误情形与
    /// [`check_available`](Self::check_available) 一致。
    pub async fn fetch_data(
        &self,
        link: &str,
        selector: ParserSelector,
    ) -> Result<Option<MediaRecord>> {
        Self::validate_link(link)?;

        match selector {
            ParserSelector::Auto => match self.find_matching(link) {
                Some((parser, media_id)) => parser.fetch_data(&media_id).await,
                None => Err(LinkParserError::NoParserMatched(link.to_string())),
            },
            ParserSelector::Specific(name) => {
                let parser = self
                    .registry
                    .get(name)
                    .ok_or(LinkParserError::ParserNotRegistered(name))?;
                let media_id =
                    parser
                        .parse_link(link)
                        .ok_or_else(|| LinkParserError::UnparseableLink {
                            name,
                            link: link.to_string(),
                        })?;
                parser.fetch_data(&media_id).await
            }
        }
    }

    /// 用新的配置重载一个已注册的解析器。
    ///
    /// # 参数
    /// * `name` - 要重载的解析器名称。
    /// * `config` - 携带该解析器新配置的构造配置。
    ///
    /// # 返回
    /// 构造成功并替换后返回 `Ok(true)`；构造失败时保留旧实例并返回
    /// `Ok(false)`（失败详情见错误日志）；`name` 不在注册表中时返回
    /// [`LinkParserError::ParserNotRegistered`]。
    pub fn reload_parser(&mut self, name: ParserName, config: &ParserConfig) -> Result<bool> {
        self.registry.reload(name, config)
    }

    /// 按名称获取解析器实例。
    ///
    /// # 返回
    /// 对应的解析器引用；`name` 不在注册表中时返回 `None`。
    pub fn get_parser(&self, name: ParserName) -> Option<&dyn LinkParser> {
        self.registry.get(name)
    }
}
