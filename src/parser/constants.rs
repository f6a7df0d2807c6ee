//! 解析器使用的常量定义
//!
//! 定义了 access log 文法、字段名以及默认阈值等常量。

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// 质量闸门的默认阈值（百分比）
pub const DEFAULT_ERROR_THRESHOLD: f64 = 50.0;

// 字段名常量（同时也是文法中的命名捕获组名）

pub const FIELD_IPADDRESS: &str = "ipaddress";
pub const FIELD_REMOTEUSER: &str = "remoteuser";
pub const FIELD_DATEANDTIME: &str = "dateandtime";
pub const FIELD_METHOD: &str = "method";
pub const FIELD_URL: &str = "url";
pub const FIELD_STATUSCODE: &str = "statuscode";
pub const FIELD_BYTESSENT: &str = "bytessent";
pub const FIELD_REFFERER: &str = "refferer";
pub const FIELD_HTTP_USER_AGENT: &str = "http_user_agent";
pub const FIELD_X_FORWADED_FOR: &str = "x_forwaded_for";
pub const FIELD_HTTP_XB_USER: &str = "http_xb_user";
pub const FIELD_REQUEST_TIME: &str = "request_time";

/// 文法中全部命名捕获组，按出现顺序排列
pub static FIELD_NAMES: [&str; 12] = [
    FIELD_IPADDRESS,
    FIELD_REMOTEUSER,
    FIELD_DATEANDTIME,
    FIELD_METHOD,
    FIELD_URL,
    FIELD_STATUSCODE,
    FIELD_BYTESSENT,
    FIELD_REFFERER,
    FIELD_HTTP_USER_AGENT,
    FIELD_X_FORWADED_FOR,
    FIELD_HTTP_XB_USER,
    FIELD_REQUEST_TIME,
];

/// 单行 access log 文法
///
/// 格式示例：
///
/// ```text
/// 1.196.116.32 -  - [29/Jun/2017:03:50:22 +0300] "GET /api/v2/banner/25019354 HTTP/1.1" 200 927 "-" "Lynx/2.8.8dev.9 libwww-FM/2.14" "-" "1498697422-2190034393-4708-9752759" "dc7161be3" 0.390
/// ```
///
/// `request_time` 捕获行尾的整个 token（包括 `-`、`abc` 之类），是否为合法小数由匹配器校验。
pub const LINE_GRAMMAR: &str = concat!(
    r#"(?P<ipaddress>\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}) .* "#,
    r#"(?P<remoteuser>.*) .* "#,
    r#"\[(?P<dateandtime>\d{2}/[a-z]{3}/\d{4}:\d{2}:\d{2}:\d{2} (\+|-)\d{4})\] "#,
    r#""(?P<method>.+) (?P<url>.+?)\s*http/[1-2]\.[0-9]" "#,
    r#"(?P<statuscode>\d{3}) "#,
    r#"(?P<bytessent>\d+) "#,
    r#""(?P<refferer>-|.+)" "#,
    r#"(?P<http_user_agent>.+?) \s*"-"\s+"#,
    r#""(?P<x_forwaded_for>.+?)"\s+"#,
    r#""(?P<http_xb_user>.+?)"\s+"#,
    r#"(?P<request_time>[^\s"]+)"#,
);

/// 预编译的行文法（大小写不敏感），整个进程只编译一次
pub static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(LINE_GRAMMAR)
        .case_insensitive(true)
        .build()
        .expect("access log grammar is a valid regex")
});

/// `request_time` 必须满足的数值格式：可选符号、可选小数部分
pub static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("decimal literal pattern is a valid regex")
});
