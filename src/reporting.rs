//! # Reporting Module / 报告模块
//!
//! This module handles the generation and display of reconciliation reports in
//! multiple formats: plain console text with color highlights, and a standalone
//! HTML page.
//!
//! 此模块处理多种格式的核对报告生成和显示：
//! 带颜色高亮的控制台文本，以及独立的 HTML 页面。

pub mod console;
pub mod html;

// Re-export common reporting functions
pub use console::{print_report, render_report};
pub use html::generate_html_report;
