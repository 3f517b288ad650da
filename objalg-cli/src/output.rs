//! Output formatting utilities.
//! 输出格式化工具。

/// Print a result line in green.
/// 以绿色打印结果行。
pub fn success(msg: &str) {
    println!("\x1b[32m{msg}\x1b[0m");
}

/// Print an error message in red.
/// 以红色打印错误消息。
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {msg}");
}

/// Print an info message in blue.
/// 以蓝色打印信息消息。
pub fn info(msg: &str) {
    println!("\x1b[34minfo:\x1b[0m {msg}");
}

/// Print a section header.
/// 打印章节标题。
pub fn header(msg: &str) {
    println!("\x1b[1m== {msg}\x1b[0m");
}
