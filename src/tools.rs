use memchr::memchr;

use crate::parser::constants::DECIMAL_LITERAL;

/// 判断一行是否可能是 access log 记录。
///
/// 文法要求请求行、referer 等字段都被双引号包围，
/// 不含 `"` 的行不可能匹配，可以跳过正则。
#[inline(always)]
pub fn may_be_access_line(line: &str) -> bool {
    memchr(b'"', line.as_bytes()).is_some()
}

/// 判断字符串是否为合法的带符号小数字面量，如 `0.390`、`-1`、`+.5`。
pub fn is_decimal_literal(value: &str) -> bool {
    DECIMAL_LITERAL.is_match(value)
}

/// 将耗时 token 解析为有限的 `f64`。
///
/// 不满足小数字面量格式或者溢出为无穷大时返回 `None`。
pub fn parse_request_time(value: &str) -> Option<f64> {
    if !is_decimal_literal(value) {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 行尾换行符（`\n`、`\r\n`）之前的内容长度
#[inline]
pub fn trimmed_line_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .rposition(|&b| b != b'\n' && b != b'\r')
        .map_or(0, |last| last + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_may_be_access_line() {
        assert!(may_be_access_line(r#"1.2.3.4 - - [x] "GET / HTTP/1.1""#));
        assert!(!may_be_access_line("no quotes here 0.1"));
        assert!(!may_be_access_line(""));
    }

    #[test]
    fn test_is_decimal_literal() {
        for ok in ["0", "0.390", "-1", "+2.5", ".5", "+.5", "123456"] {
            assert!(is_decimal_literal(ok), "{ok} should be accepted");
        }
        for bad in ["", "-", "1.", "1.2.3", "0.3ms", "1e3", "abc", " 1"] {
            assert!(!is_decimal_literal(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_parse_request_time() {
        assert_eq!(parse_request_time("0.390"), Some(0.390));
        assert_eq!(parse_request_time("-1"), Some(-1.0));
        assert_eq!(parse_request_time("+.5"), Some(0.5));
        assert_eq!(parse_request_time("1.2.3"), None);
        assert_eq!(parse_request_time(&"9".repeat(400)), None);
    }

    #[test]
    fn test_trimmed_line_len() {
        assert_eq!(trimmed_line_len(b"abc\n"), 3);
        assert_eq!(trimmed_line_len(b"abc\r\n"), 3);
        assert_eq!(trimmed_line_len(b"abc"), 3);
        assert_eq!(trimmed_line_len(b"\n"), 0);
        assert_eq!(trimmed_line_len(b""), 0);
    }
}
