//! Design tokens: the color, typography and surface values every component
//! derives its inline CSS from.

/// Color and surface tokens for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTokens {
    pub name: &'static str,
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub accent: &'static str,
    pub accent_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub danger: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub font_family: &'static str,
    pub border_radius: &'static str,
}

/// Dark palette: elegant, minimal, dark slate tones. The dashboard default.
pub fn executive_dark() -> ThemeTokens {
    ThemeTokens {
        name: "executive_dark",
        bg_primary: "#0f172a",
        bg_secondary: "#1e293b",
        accent: "#38bdf8",
        accent_secondary: "#0ea5e9",
        text_primary: "#f1f5f9",
        text_secondary: "#94a3b8",
        success: "#34d399",
        warning: "#fbbf24",
        danger: "#f87171",
        border: "rgba(148, 163, 184, 0.2)",
        shadow: "0 10px 40px rgba(0, 0, 0, 0.5)",
        font_family: "'Inter', 'Segoe UI', sans-serif",
        border_radius: "12px",
    }
}

/// Light palette: clean corporate styling.
pub fn corporate_clean() -> ThemeTokens {
    ThemeTokens {
        name: "corporate_clean",
        bg_primary: "#ffffff",
        bg_secondary: "#f8fafc",
        accent: "#2563eb",
        accent_secondary: "#3b82f6",
        text_primary: "#1e293b",
        text_secondary: "#64748b",
        success: "#22c55e",
        warning: "#eab308",
        danger: "#ef4444",
        border: "#e2e8f0",
        shadow: "0 4px 6px -1px rgba(0, 0, 0, 0.1)",
        font_family: "'Segoe UI', 'Roboto', sans-serif",
        border_radius: "8px",
    }
}

/// Palette for the current theme toggle position.
pub fn for_mode(dark_mode: bool) -> ThemeTokens {
    if dark_mode {
        executive_dark()
    } else {
        corporate_clean()
    }
}

/// Shared card surface style: gradient background, rounded border, shadow.
pub fn card_style(theme: &ThemeTokens) -> String {
    format!(
        "background: linear-gradient(135deg, {} 0%, {} 100%); \
         border-radius: {}; padding: 20px; border: 1px solid {}; \
         box-shadow: {};",
        theme.bg_primary, theme.bg_secondary, theme.border_radius, theme.border, theme.shadow
    )
}
