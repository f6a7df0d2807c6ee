/// 一条匹配成功的 access log 记录
///
/// 所有字段都借用自原始行，只在更新累加器时短暂存在。
/// `x_forwaded_for` 和 `http_xb_user` 会被解析出来，但统计逻辑不使用它们。
#[derive(Debug, Clone, PartialEq)]
pub struct AccessLogEntry<'a> {
    /// 客户端 IPv4 地址
    pub ipaddress: &'a str,

    /// 远程用户（通常为空或 "-"）
    pub remoteuser: &'a str,

    /// 时间，格式为 "dd/Mon/YYYY:HH:MM:SS +zzzz"
    pub dateandtime: &'a str,

    /// HTTP 方法
    pub method: &'a str,

    /// 请求的 URL（不含与协议之间的空白）
    pub url: &'a str,

    /// 三位状态码
    pub statuscode: &'a str,

    /// 响应字节数
    pub bytessent: &'a str,

    /// Referer，"-" 表示缺失
    pub refferer: &'a str,

    /// User-Agent（保留两侧引号）
    pub http_user_agent: &'a str,

    pub x_forwaded_for: &'a str,

    pub http_xb_user: &'a str,

    /// 请求耗时（秒）
    pub request_time: f64,
}
