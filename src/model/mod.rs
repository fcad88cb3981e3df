//! 定义了库的核心数据模型。

pub mod media;
