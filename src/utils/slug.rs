//! 查询slug工具

/// 将查询文本转换为文件系统安全的slug：
/// 去除非字母数字字符，截断到50个字符，空白折叠为下划线
pub fn safe_slug(query: &str) -> String {
    let cleaned: String = query
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-' || *c == '_')
        .take(50)
        .collect();

    let slug = cleaned.split_whitespace().collect::<Vec<_>>().join("_");

    if slug.is_empty() {
        // 全符号查询兜底，避免生成以时间戳开头的隐藏式文件名
        "query".to_string()
    } else {
        slug
    }
}
