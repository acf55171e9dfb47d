//! 交互选择 - 流程层
//!
//! 在闭区间 [1, max] 内读取一个编号；
//! 非法输入一律重新提示，绝不静默截断或给默认值

use std::io::{BufRead, Write};

use anyhow::Result;

/// 从 `reader` 中读取一个位于 [1, max] 的编号
///
/// 解析失败或越界时重新提示；输入流关闭时返回错误
pub fn read_selection(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
    max: usize,
) -> Result<usize> {
    loop {
        write!(writer, "{} [1-{}]: ", prompt, max)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("输入流已关闭，无法完成选择");
        }

        match line.trim().parse::<usize>() {
            Ok(number) if (1..=max).contains(&number) => return Ok(number),
            Ok(number) => {
                writeln!(writer, "编号 {} 超出范围，请重新输入", number)?;
            }
            Err(_) => {
                writeln!(writer, "无法解析输入 '{}'，请输入数字", line.trim())?;
            }
        }
    }
}

/// 读取一个是/否回答，输入流关闭时视为否
pub fn read_yes_no(
    reader: &mut impl BufRead,
    writer: &mut impl Write,
    prompt: &str,
) -> Result<bool> {
    loop {
        write!(writer, "{} (y/n): ", prompt)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "y" | "yes" | "是" => return Ok(true),
            "n" | "no" | "否" => return Ok(false),
            other => {
                writeln!(writer, "无法识别 '{}'，请输入 y 或 n", other)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_valid_number_is_accepted() {
        let mut input = Cursor::new("2\n");
        let mut output = Vec::new();
        let number = read_selection(&mut input, &mut output, "请选择", 3).unwrap();
        assert_eq!(number, 2);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let mut input = Cursor::new("1\n");
        let mut output = Vec::new();
        assert_eq!(read_selection(&mut input, &mut output, "请选择", 3).unwrap(), 1);

        let mut input = Cursor::new("3\n");
        let mut output = Vec::new();
        assert_eq!(read_selection(&mut input, &mut output, "请选择", 3).unwrap(), 3);
    }

    #[test]
    fn test_invalid_input_reprompts() {
        // 非数字、越界、越界(0)，最后才是合法输入
        let mut input = Cursor::new("abc\n9\n0\n2\n");
        let mut output = Vec::new();
        let number = read_selection(&mut input, &mut output, "请选择", 3).unwrap();
        assert_eq!(number, 2);

        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("无法解析输入 'abc'"));
        assert!(rendered.contains("编号 9 超出范围"));
        assert!(rendered.contains("编号 0 超出范围"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(read_selection(&mut input, &mut output, "请选择", 3).is_err());
    }

    #[test]
    fn test_yes_no_reprompts_until_recognized() {
        let mut input = Cursor::new("maybe\ny\n");
        let mut output = Vec::new();
        assert!(read_yes_no(&mut input, &mut output, "继续吗?").unwrap());

        let mut input = Cursor::new("n\n");
        let mut output = Vec::new();
        assert!(!read_yes_no(&mut input, &mut output, "继续吗?").unwrap());

        // 输入流关闭视为否
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(!read_yes_no(&mut input, &mut output, "继续吗?").unwrap());
    }
}
