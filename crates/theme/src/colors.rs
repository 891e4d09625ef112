//! Keyboard theme style classes.

use serde::Serialize;

/// Style classes applied to the keyboard's visual elements.
///
/// Values are opaque utility-class strings handed to the renderer as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyboardTheme {
    /// Keyboard surface behind the keys
    pub bg_color: &'static str,
    /// Key cap fill
    pub key_bg_color: &'static str,
    /// Key label
    pub key_text_color: &'static str,
    /// Key cap fill while pressed
    pub key_active_bg_color: &'static str,
    /// Outer key border
    pub border_color: &'static str,
    /// Bottom inset edge giving keys their raised look
    pub key_inset_border_color: &'static str,
}

impl KeyboardTheme {
    pub const DARK: KeyboardTheme = KeyboardTheme {
        bg_color: "bg-[#67666b]",
        key_bg_color: "bg-[#161920]",
        key_text_color: "text-[#c2c5ca]",
        key_active_bg_color: "bg-[#1f2125]",
        border_color: "border-transparent",
        key_inset_border_color: "border-b-zinc-700",
    };

    pub const LIGHT: KeyboardTheme = KeyboardTheme {
        bg_color: "bg-[#c0c1c3]",
        key_bg_color: "bg-[#f0f1f3]",
        key_text_color: "text-[#aaabad]",
        key_active_bg_color: "bg-[#eeeeee]",
        border_color: "border-transparent",
        key_inset_border_color: "border-b-gray-400",
    };

    /// Field names paired with their values, in declaration order.
    pub fn fields(&self) -> [(&'static str, &'static str); 6] {
        [
            ("bg_color", self.bg_color),
            ("key_bg_color", self.key_bg_color),
            ("key_text_color", self.key_text_color),
            ("key_active_bg_color", self.key_active_bg_color),
            ("border_color", self.border_color),
            ("key_inset_border_color", self.key_inset_border_color),
        ]
    }
}
