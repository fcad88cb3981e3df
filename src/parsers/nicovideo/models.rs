//! 此模块定义了用于反序列化 niconico 游客接口响应的 `struct` 数据结构。

use serde::Deserialize;

/// 观看接口 (`/api/watch/v3_guest/:id`) 的顶层响应。
#[derive(Debug, Deserialize)]
pub struct WatchResult {
    /// 响应元信息。
    pub meta: Meta,
    /// 视频数据。
    pub data: WatchData,
}

/// 响应元信息。
#[derive(Debug, Deserialize)]
pub struct Meta {
    /// HTTP 状态码的镜像。
    pub status: i64,
}

/// 观看接口的数据部分。
#[derive(Debug, Deserialize)]
pub struct WatchData {
    /// 视频本体信息。
    pub video: Video,
    /// 上传者信息。频道投稿时可能缺失。
    #[serde(default)]
    pub owner: Option<VideoOwner>,
    /// 视频的分区信息。
    #[serde(default)]
    pub genre: Option<Genre>,
    /// 视频的标签信息。
    pub tag: TagInfo,
}

/// 视频本体信息。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// 视频 ID (`sm` 或 `nm` 开头)。
    pub id: String,
    /// 视频标题。
    pub title: String,
    /// 视频描述（HTML 文本）。
    pub description: String,
    /// 视频时长，单位为秒。
    pub duration: u64,
    /// 视频发布时间（带时区的 ISO-8601 字符串）。
    pub registered_at: String,
    /// 视频的统计数据。
    pub count: VideoCount,
    /// 视频的缩略图集合。
    pub thumbnail: Thumbnail,
    /// 视频的分级信息。
    pub rating: Rating,
}

/// 视频的统计数据。
#[derive(Debug, Deserialize)]
pub struct VideoCount {
    /// 播放量。
    pub view: u64,
    /// 评论数。
    pub comment: u64,
    /// 收藏数。
    pub mylist: u64,
    /// 点赞数。
    pub like: u64,
}

/// 视频的缩略图集合。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    /// 默认缩略图链接。
    pub url: String,
    /// 中等尺寸缩略图链接。
    #[serde(default)]
    pub middle_url: Option<String>,
    /// 大尺寸缩略图链接。
    #[serde(default)]
    pub large_url: Option<String>,
}

/// 视频的分级信息。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    /// 是否被标记为 R18。
    pub is_adult: bool,
}

/// 上传者信息。
#[derive(Debug, Deserialize)]
pub struct VideoOwner {
    /// 上传者的数字 ID。
    pub id: i64,
    /// 上传者昵称。
    pub nickname: String,
}

/// 视频的分区信息。
#[derive(Debug, Deserialize)]
pub struct Genre {
    /// 分区标识，例如 `"music_sound"`。
    pub key: String,
    /// 分区的显示名称。
    #[serde(default)]
    pub label: Option<String>,
}

/// 视频的标签信息。
#[derive(Debug, Deserialize)]
pub struct TagInfo {
    /// 标签列表。
    pub items: Vec<TagItem>,
}

/// 单个标签。
#[derive(Debug, Deserialize)]
pub struct TagItem {
    /// 标签名。
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_watch_payload() {
        let json = r#"{
            "meta": { "status": 200 },
            "data": {
                "video": {
                    "id": "sm9",
                    "title": "新・豪血寺一族 -煩悩解放 - レッツゴー！陰陽師",
                    "description": "レッツゴー！陰陽師",
                    "duration": 320,
                    "registeredAt": "2007-03-06T00:33:00+09:00",
                    "count": { "view": 21000000, "comment": 5100000, "mylist": 170000, "like": 30000 },
                    "thumbnail": { "url": "https://nicovideo.cdn.nimg.jp/thumbnails/9/9", "middleUrl": null, "largeUrl": null },
                    "rating": { "isAdult": false }
                },
                "owner": { "id": 4, "nickname": "中の」" },
                "genre": { "key": "music_sound", "label": "音楽・サウンド" },
                "tag": { "items": [ { "name": "陰陽師" }, { "name": "音楽" } ] }
            }
        }"#;

        let payload: WatchResult = serde_json::from_str(json).expect("反序列化失败");
        assert_eq!(payload.meta.status, 200);
        assert_eq!(payload.data.video.id, "sm9");
        assert_eq!(payload.data.genre.unwrap().key, "music_sound");
        assert_eq!(payload.data.tag.items.len(), 2);
        assert!(!payload.data.video.rating.is_adult);
    }
}
