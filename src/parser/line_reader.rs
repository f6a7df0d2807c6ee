//! LineReader - 从 Reader 中逐行读取日志
//!
//! 提供了一个迭代器，可以从任何实现了 `BufRead` trait 的源中逐行读取。
//! 只有读到流末尾（读取 0 字节）才结束；空行照常产出。

use std::{
    io::{self, BufRead},
    mem,
};

use crate::tools::trimmed_line_len;

/// 按行读取的迭代器
///
/// 每行去掉结尾的 `\n` / `\r\n` 后产出。
///
/// # 类型参数
///
/// * `R` - 实现了 `BufRead` trait 的类型
pub struct LineReader<R: BufRead> {
    reader: R,
    buffer: String,
    finished: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
            finished: false,
        }
    }

    /// 读一行；流结束时返回 `Ok(None)`
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(None);
        }

        let len = trimmed_line_len(self.buffer.as_bytes());
        self.buffer.truncate(len);

        // 行内容移交给调用方，buffer 留空等待下一次读取
        Ok(Some(mem::take(&mut self.buffer)))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_line() {
            Ok(Some(line)) => Some(Ok(line)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
