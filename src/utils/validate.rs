use once_cell::sync::Lazy;
use reqwest::Url;

use crate::models::assignments::entities::SelectedFile;

/// 提交前的文件检查：必须选择了文件，且文件名不为空
pub fn validate_selected_file(file: Option<&SelectedFile>) -> Result<&SelectedFile, &'static str> {
    match file {
        Some(file) if !file.file_name.trim().is_empty() => Ok(file),
        _ => Err("Please select a file to upload."),
    }
}

/// 从 Cookie 头中取出指定名称的值
///
/// 头的格式为 `a=1; b=2`，值两侧的引号会被去掉。
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

// 只用于拼接路径，主机名不会被请求
static PATH_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse("http://portal.invalid/").expect("Invalid path base URL"));

/// 由路径段拼出根路径，每段按 URL 规则编码，如 `["assignment", "a/b"]` -> `/assignment/a%2Fb`
pub fn portal_path(segments: &[&str]) -> String {
    let mut url = PATH_BASE.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().extend(segments);
    }
    url.path().to_string()
}
