//! CLI styling utilities
//!
//! Provides semantic styling via the [`Stylize`] trait with automatic
//! terminal color support detection (delegated to `owo-colors`).
//!
//! # Color Palette
//!
//! | Method       | Color  | Stream | Semantic Use                     |
//! |--------------|--------|--------|----------------------------------|
//! | `.accent()`  | Cyan   | stdout | Primary info: repos, counts      |
//! | `.success()` | Green  | stdout | Completion: checkmarks, created  |
//! | `.error()`   | Red    | stderr | Failures, error messages         |
//! | `.warn()`    | Yellow | stderr | Warnings, quota waits            |
//! | `.muted()`   | Dim    | stdout | Secondary: hints, skipped rows   |
//! | `.emphasis()`| Bold   | stdout | Headers, current action          |

use std::fmt::{self, Display};

pub use owo_colors::Stream;
use owo_colors::{OwoColorize, Style};

// ============================================================================
// Style definitions (single source of truth for color palette)
// ============================================================================

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const WARN: Style = Style::new().yellow();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

// ============================================================================
// Styled wrapper
// ============================================================================

/// A value with semantic styling applied.
///
/// Implements [`Display`] to render with ANSI codes when supported.
/// Color support detection is handled by `owo-colors` (respects `NO_COLOR`,
/// `CLICOLOR`, `CLICOLOR_FORCE`, and TTY detection).
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style, stream: Stream) -> Self {
        Self {
            value,
            style,
            stream,
        }
    }

    /// Override to render for stderr stream detection.
    #[must_use]
    pub const fn for_stderr(mut self) -> Self {
        self.stream = Stream::Stderr;
        self
    }

    /// Override to render for stdout stream detection.
    #[must_use]
    pub const fn for_stdout(mut self) -> Self {
        self.stream = Stream::Stdout;
        self
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

// ============================================================================
// Stylize trait
// ============================================================================

/// Extension trait for semantic terminal styling.
///
/// Automatically implemented for all [`Display`] types.
pub trait Stylize: Display {
    /// Accent color (cyan) for primary information.
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT, Stream::Stdout)
    }

    /// Success color (green) for completion states.
    fn success(&self) -> Styled<&Self> {
        Styled::new(self, SUCCESS, Stream::Stdout)
    }

    /// Error color (red) for failures. Default stream: stderr
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, ERROR, Stream::Stderr)
    }

    /// Warning color (yellow) for attention-needed states. Default stream: stderr
    fn warn(&self) -> Styled<&Self> {
        Styled::new(self, WARN, Stream::Stderr)
    }

    /// Muted style (dim) for secondary information.
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED, Stream::Stdout)
    }

    /// Emphasis style (bold) for important text.
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS, Stream::Stdout)
    }
}

// Blanket implementation for all Display types
impl<T: Display + ?Sized> Stylize for T {}

// ============================================================================
// Symbols
// ============================================================================

/// Success checkmark
pub const CHECK: &str = "✓";

/// Error/failure cross
pub const CROSS: &str = "✗";

/// Arrow for steps/actions
pub const ARROW: &str = "→";

/// Marker for skipped input
pub const SKIP: &str = "-";

/// Green checkmark for success states.
#[inline]
pub const fn check() -> Styled<&'static str> {
    Styled::new(CHECK, SUCCESS, Stream::Stdout)
}

/// Red cross for error/failure states (renders to stderr by default).
#[inline]
pub const fn cross() -> Styled<&'static str> {
    Styled::new(CROSS, ERROR, Stream::Stderr)
}

/// Cyan arrow for action steps.
#[inline]
pub const fn arrow() -> Styled<&'static str> {
    Styled::new(ARROW, ACCENT, Stream::Stdout)
}

/// Dimmed dash for skipped rows.
#[inline]
pub const fn skip() -> Styled<&'static str> {
    Styled::new(SKIP, MUTED, Stream::Stdout)
}

// ============================================================================
// Hyperlinks (OSC 8)
// ============================================================================

const fn to_hyperlink_stream(stream: Stream) -> supports_hyperlinks::Stream {
    match stream {
        Stream::Stdout => supports_hyperlinks::Stream::Stdout,
        Stream::Stderr => supports_hyperlinks::Stream::Stderr,
    }
}

/// Create a clickable hyperlink showing the URL itself.
///
/// Falls back to plain URL text in terminals that don't support OSC 8 hyperlinks.
pub fn hyperlink_url(stream: Stream, url: &str) -> String {
    if supports_hyperlinks::on(to_hyperlink_stream(stream)) {
        terminal_link::Link::new(url, url).to_string()
    } else {
        url.to_string()
    }
}

// ============================================================================
// Spinner Styles
// ============================================================================

use indicatif::ProgressStyle;
use std::sync::OnceLock;

/// Default spinner style - cyan dots.
pub fn spinner_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("hardcoded spinner template is valid")
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        })
        .clone()
}

/// Format a duration in seconds as `1h 02m 03s` / `4m 05s` / `6s`
pub fn human_duration(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h {m:02}m {s:02}s")
    } else if m > 0 {
        format!("{m}m {s:02}s")
    } else {
        format!("{s}s")
    }
}
