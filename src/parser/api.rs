//! 便捷 API 函数
//!
//! 提供了打开日志文件（普通文本或 gzip）以及一次性完成分析的高层 API。

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::analyzer_config::AnalyzerConfig;
use crate::engine::{AggregationEngine, ReportTable};
use crate::error::AnalyzeError;

/// 读取缓冲区大小，减少系统调用
const READ_BUFFER_CAPACITY: usize = 256 * 1024;

/// 日志文件的压缩方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// 普通文本
    Plain,
    /// gzip 压缩（支持多成员 gzip 文件）
    Gzip,
    /// 根据扩展名判断：`.gz` 视为 gzip，其余视为普通文本
    #[default]
    Auto,
}

impl Compression {
    /// 将 `Auto` 解析为具体的压缩方式
    pub fn resolve(self, path: &Path) -> Compression {
        match self {
            Compression::Auto => {
                let is_gz = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
                if is_gz { Compression::Gzip } else { Compression::Plain }
            }
            other => other,
        }
    }
}

/// 打开日志文件，返回带缓冲的行读取源
///
/// # 参数
///
/// * `path` - 日志文件路径
/// * `compression` - 压缩方式
///
/// # 返回
///
/// * `Ok(reader)` - 可逐行读取的解压后文本流
/// * `Err(AnalyzeError::FileNotFound)` - 文件无法打开
pub fn open_log<P>(path: P, compression: Compression) -> Result<Box<dyn BufRead>, AnalyzeError>
where
    P: AsRef<Path>,
{
    let path_ref = path.as_ref();
    let file = File::open(path_ref).map_err(|e| AnalyzeError::FileNotFound {
        path: path_ref.display().to_string(),
        reason: e.to_string(),
    })?;

    let reader: Box<dyn BufRead> = match compression.resolve(path_ref) {
        Compression::Gzip => Box::new(BufReader::with_capacity(
            READ_BUFFER_CAPACITY,
            MultiGzDecoder::new(file),
        )),
        _ => Box::new(BufReader::with_capacity(READ_BUFFER_CAPACITY, file)),
    };
    Ok(reader)
}

/// 对任意行读取源完成一次完整分析（读取、质量检查、归约）
///
/// # 示例
///
/// ```
/// use access_log_analyzer::{AnalyzerConfig, analyze_reader};
/// use std::io::Cursor;
///
/// let log = concat!(
///     r#"1.1.1.1 -  - [29/Jun/2017:03:50:22 +0300] "GET /a HTTP/1.1" 200 1 "-" "ua" "-" "x" "y" 0.1"#, "\n",
///     r#"1.1.1.1 -  - [29/Jun/2017:03:50:23 +0300] "GET /a HTTP/1.1" 200 1 "-" "ua" "-" "x" "y" 0.3"#, "\n",
/// );
///
/// let table = analyze_reader(Cursor::new(log), &AnalyzerConfig::default()).unwrap();
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.rows()[0].count, 2);
/// ```
pub fn analyze_reader<R>(reader: R, config: &AnalyzerConfig) -> Result<ReportTable, AnalyzeError>
where
    R: BufRead,
{
    AggregationEngine::with_config(config.clone())?.run(reader)
}

/// 打开并分析一个日志文件
///
/// # 示例
///
/// ```no_run
/// use access_log_analyzer::{AnalyzerConfig, Compression, analyze_file};
///
/// let table = analyze_file("nginx-access-ui.log-20170630.gz", Compression::Auto, &AnalyzerConfig::default())?;
///
/// for row in table.iter().take(10) {
///     println!("{} count={} avg={:.3} med={:.3}", row.url, row.count, row.time_avg, row.time_med);
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn analyze_file<P>(
    path: P,
    compression: Compression,
    config: &AnalyzerConfig,
) -> Result<ReportTable, AnalyzeError>
where
    P: AsRef<Path>,
{
    let reader = open_log(path, compression)?;
    analyze_reader(reader, config)
}
