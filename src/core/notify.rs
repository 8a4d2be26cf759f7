// Markup for the toast notification widget.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#046307",
            NotificationKind::Error => "#C41E3A",
        }
    }
}

pub const NOTIFICATION_STYLES_ID: &str = "notification-styles";

pub const NOTIFICATION_KEYFRAMES_CSS: &str = "
@keyframes slideIn {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
    from { transform: translateX(0); opacity: 1; }
    to { transform: translateX(100%); opacity: 0; }
}
.notification-close {
    background: none;
    border: none;
    color: white;
    font-size: 1.5rem;
    cursor: pointer;
    opacity: 0.7;
    transition: opacity 0.2s;
}
.notification-close:hover {
    opacity: 1;
}
";

pub const SLIDE_OUT_ANIMATION: &str = "slideOut 0.3s ease forwards";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn class_list(kind: NotificationKind) -> String {
    format!("notification {}", kind.class_name())
}

pub fn markup(message: &str) -> String {
    format!(
        "<span class=\"notification-message\">{}</span><button class=\"notification-close\">&times;</button>",
        escape_html(message)
    )
}

pub fn inline_style(kind: NotificationKind) -> String {
    format!(
        "position: fixed; bottom: 30px; right: 30px; max-width: 400px; padding: 20px 25px; \
         background: {}; color: white; border-radius: 10px; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.3); \
         display: flex; align-items: center; gap: 15px; z-index: 10000; \
         animation: slideIn 0.3s ease; font-family: 'Outfit', sans-serif;",
        kind.background()
    )
}
