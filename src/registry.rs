//! 解析器注册表。
//!
//! 持有当前激活的解析器集合，保持注册顺序，支持按名称查找和安全地重载单个
//! 解析器。

use tracing::{error, info};

use crate::{
    config::ParserConfig,
    error::{LinkParserError, Result},
    parsers::{
        LinkParser, ParserName, bilibili::BilibiliParser, dailymotion::DailymotionParser,
        nicovideo::NicovideoParser, soundcloud::SoundcloudParser, vimeo::VimeoParser,
        youtube::YoutubeParser,
    },
};

/// 按名称构造一个解析器实例。
///
/// 名称到构造函数的映射是静态的，所有受支持的网站在编译期即已确定。
fn build_parser(name: ParserName, config: &ParserConfig) -> Result<Box<dyn LinkParser>> {
    match name {
        ParserName::Youtube => {
            let options = config
                .youtube
                .clone()
                .ok_or(LinkParserError::MissingApiKey(name))?;
            Ok(Box::new(YoutubeParser::new(options)))
        }
        ParserName::Vimeo => Ok(Box::new(VimeoParser::new())),
        ParserName::Nicovideo => Ok(Box::new(NicovideoParser::new())),
        ParserName::Bilibili => Ok(Box::new(BilibiliParser::new())),
        ParserName::Soundcloud => {
            let options = config
                .soundcloud
                .clone()
                .ok_or(LinkParserError::MissingApiKey(name))?;
            Ok(Box::new(SoundcloudParser::new(options)?))
        }
        ParserName::Dailymotion => Ok(Box::new(DailymotionParser::new())),
    }
}

/// 当前激活的解析器集合。
///
/// 内部按注册顺序存放，auto 模式的探测顺序就是这个顺序。
pub struct ParserRegistry {
    parsers: Vec<Box<dyn LinkParser>>,
}

impl ParserRegistry {
    /// 根据构造配置实例化所有被激活的解析器。
    ///
    /// # 返回
    /// 一个 `Result`，任何一个解析器构造失败都会使整个构造失败。
    pub fn from_config(config: &ParserConfig) -> Result<Self> {
        let names = config.active_parsers();
        let mut parsers: Vec<Box<dyn LinkParser>> = Vec::with_capacity(names.len());

        for name in names {
            parsers.push(build_parser(name, config)?);
            info!("'{}' 解析器注册成功。", name);
        }

        Ok(Self { parsers })
    }

    /// 按名称查找解析器，没有任何副作用。
    pub fn get(&self, name: ParserName) -> Option<&dyn LinkParser> {
        self.parsers
            .iter()
            .find(|parser| parser.name() == name)
            .map(|parser| parser.as_ref())
    }

    /// 按注册顺序遍历所有解析器。
    pub fn iter(&self) -> impl Iterator<Item = &dyn LinkParser> {
        self.parsers.iter().map(|parser| parser.as_ref())
    }

    /// 按注册顺序返回所有解析器的名称。
    pub fn names(&self) -> Vec<ParserName> {
        self.parsers.iter().map(|parser| parser.name()).collect()
    }

    /// 已注册的解析器数量。
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// 注册表是否为空。
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// 用新的配置重新构造指定的解析器，并原子地替换注册表里的旧实例。
    ///
    /// # 参数
    /// * `name` - 要重载的解析器名称，必须已在注册表中。
    /// * `config` - 携带该解析器新配置的构造配置。
    ///
    /// # 返回
    /// 构造成功并完成替换时返回 `Ok(true)`；构造失败时记录错误日志、保留旧
    /// 实例并返回 `Ok(false)`；`name` 不在注册表中时返回
    /// [`LinkParserError::ParserNotRegistered`]。
    pub fn reload(&mut self, name: ParserName, config: &ParserConfig) -> Result<bool> {
        let Some(index) = self
            .parsers
            .iter()
            .position(|parser| parser.name() == name)
        else {
            return Err(LinkParserError::ParserNotRegistered(name));
        };

        match build_parser(name, config) {
            Ok(parser) => {
                self.parsers[index] = parser;
                info!("'{}' 解析器重载成功。", name);
                Ok(true)
            }
            Err(e) => {
                error!("'{}' 解析器重载失败，保留旧实例: {}", name, e);
                Ok(false)
            }
        }
    }
}
