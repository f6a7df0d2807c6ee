//! Parser 模块 - 解析 nginx access log
//!
//! 此模块提供了:
//! - 单行文法匹配（LineMatcher）
//! - 流式逐行读取（LineReader）
//! - 打开日志文件、一次性分析的便捷 API

mod api;
pub(crate) mod constants;
pub mod line_matcher;
pub mod line_reader;

pub use api::{Compression, analyze_file, analyze_reader, open_log};
pub use constants::{DEFAULT_ERROR_THRESHOLD, FIELD_NAMES, LINE_GRAMMAR};
pub use line_matcher::LineMatcher;
pub use line_reader::LineReader;
