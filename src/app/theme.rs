//! UI 主题：颜色集中在这里，渲染代码只引用字段。

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub separator: Color,
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub text_fg: Color,
    pub error_fg: Color,
    pub warning_fg: Color,
    pub success_fg: Color,
    pub folder_fg: Color,
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub chat_user_bg: Color,
    pub chat_user_fg: Color,
    pub chat_assistant_bg: Color,
    pub chat_assistant_fg: Color,
    pub terminal_fg: Color,
    pub palette_bg: Color,
    pub palette_fg: Color,
    pub gutter_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Rgb(0xFB, 0x92, 0x3C),  // orange-400
            inactive_border: Color::Indexed(8),         // DarkGray
            separator: Color::Indexed(8),               // DarkGray
            accent_fg: Color::Rgb(0xFB, 0x92, 0x3C),     // orange-400
            muted_fg: Color::Rgb(0x9C, 0xA3, 0xAF),      // gray-400
            text_fg: Color::Rgb(0xE5, 0xE7, 0xEB),       // gray-200
            error_fg: Color::Indexed(1),                // Red
            warning_fg: Color::Rgb(0xFA, 0xCC, 0x15),    // yellow-400
            success_fg: Color::Rgb(0x4A, 0xDE, 0x80),    // green-400
            folder_fg: Color::Rgb(0x60, 0xA5, 0xFA),     // blue-400
            menu_bg: Color::Rgb(0x1F, 0x29, 0x37),       // gray-800
            menu_fg: Color::Rgb(0xD1, 0xD5, 0xDB),       // gray-300
            selection_bg: Color::Rgb(0x37, 0x41, 0x51),  // gray-700
            selection_fg: Color::Rgb(0xFB, 0x92, 0x3C),  // orange-400
            tab_active_bg: Color::Rgb(0x11, 0x18, 0x27), // gray-900
            tab_active_fg: Color::Indexed(15),          // White
            tab_inactive_fg: Color::Rgb(0x9C, 0xA3, 0xAF),
            status_bg: Color::Rgb(0x25, 0x63, 0xEB), // blue-600
            status_fg: Color::Indexed(15),
            chat_user_bg: Color::Rgb(0xEA, 0x58, 0x0C), // orange-600
            chat_user_fg: Color::Indexed(15),
            chat_assistant_bg: Color::Rgb(0x37, 0x41, 0x51),
            chat_assistant_fg: Color::Rgb(0xE5, 0xE7, 0xEB),
            terminal_fg: Color::Rgb(0x4A, 0xDE, 0x80),
            palette_bg: Color::Rgb(0x1F, 0x29, 0x37),
            palette_fg: Color::Indexed(15),
            gutter_fg: Color::Indexed(8),
        }
    }
}
