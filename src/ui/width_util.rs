use terminal_size::{Width, terminal_size};

const ELLIPSIS: &str = "...";

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    pub fn visible_width(&self, s: &str) -> usize {
        s.chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            let mut out = String::with_capacity(s.len() + (width - w));
            out.push_str(s);
            out.extend(std::iter::repeat_n(' ', width - w));
            out
        }
    }

    /// Cut the middle of `s` so it fits in `max` columns, keeping both ends
    /// (archive names differ at the start and at the volume suffix).
    pub fn shorten_middle(&self, s: &str, max: usize) -> String {
        let w = self.visible_width(s);
        if w <= max {
            return s.to_string();
        }
        if max <= ELLIPSIS.len() {
            return s.chars().take(max).collect();
        }
        let keep = max - ELLIPSIS.len();
        let head = keep - keep / 2;
        let tail = keep / 2;
        let mut out: String = s.chars().take(head).collect();
        out.push_str(ELLIPSIS);
        out.extend(s.chars().skip(w - tail));
        out
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        if let Some((Width(w), _)) = terminal_size() {
            w as usize
        } else {
            80
        }
    }
}
