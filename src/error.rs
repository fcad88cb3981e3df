//! 定义了整个 `track-link-parser` 库的错误类型 `LinkParserError`。

use thiserror::Error;

use crate::parsers::ParserName;

/// `track-link-parser` 库的通用错误枚举。
#[derive(Error, Debug)]
pub enum LinkParserError {
    /// 网络请求失败 (源自 `reqwest::Error`)
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// 传入的链接是空字符串
    #[error("链接必须是非空字符串")]
    EmptyLink,

    /// 字符串无法被识别为解析器名称或 "auto"
    #[error("无法识别的解析器名称: '{0}'")]
    UnrecognizedName(String),

    /// 构造配置无效
    #[error("配置无效: {0}")]
    InvalidConfig(String),

    /// 解析器的构造缺少必需的 key 配置项
    #[error("'{0}' 解析器需要提供 key 配置项")]
    MissingApiKey(ParserName),

    /// 指定的解析器未被注册
    #[error("没有已注册的 '{0}' 解析器")]
    ParserNotRegistered(ParserName),

    /// auto 模式下遍历了所有解析器，没有任何一个能够解析该链接
    #[error("无法解析链接 '{0}': 没有任何解析器能够匹配")]
    NoParserMatched(String),

    /// 指定的解析器无法从链接中提取出媒体 ID
    #[error("'{name}' 解析器无法从链接 '{link}' 中提取媒体 ID")]
    UnparseableLink {
        /// 被指定的解析器名称。
        name: ParserName,
        /// 无法解析的链接。
        link: String,
    },

    /// 解析器不支持该操作（例如仅凭裸 ID 进行检查）
    #[error("'{0}' 解析器不支持仅凭媒体 ID 进行检查，必须提供完整链接")]
    UnsupportedOperation(ParserName),

    /// API 返回了错误或无法理解的数据
    #[error("API 为 '{0}' 返回了错误或无法理解的数据")]
    ApiError(String),
}

/// `LinkParserError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, LinkParserError>;
