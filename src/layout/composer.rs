//! Page composition: places lines and breaks pages.

use crate::model::{Page, TextRun};

use super::config::{FontRole, FontSpec, PageConfig};
use super::cursor::Cursor;
use super::measure::TextMeasure;
use super::result::LayoutStats;
use super::wrap::wrap_text;

/// Accumulates pages for one layout run.
///
/// Every line goes through [`PageComposer::reserve`], which is the single
/// place a page break can happen.
pub struct PageComposer<'a> {
    config: &'a PageConfig,
    measure: &'a dyn TextMeasure,
    pages: Vec<Page>,
    page: Page,
    cursor: Cursor,
    pub(crate) stats: LayoutStats,
}

impl<'a> PageComposer<'a> {
    /// Start composing on page 1.
    pub fn new(config: &'a PageConfig, measure: &'a dyn TextMeasure) -> Self {
        Self {
            config,
            measure,
            pages: Vec::new(),
            page: Self::blank_page(config, 1),
            cursor: Cursor::new(config.margin, config.usable_height),
            stats: LayoutStats::new(),
        }
    }

    fn blank_page(config: &PageConfig, number: u32) -> Page {
        Page::new(number, config.page_width(), config.page_height(), config.unit)
    }

    /// The layout configuration.
    pub fn config(&self) -> &'a PageConfig {
        self.config
    }

    /// The current cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Width of `text` in page units.
    pub fn width_of(&self, text: &str, font: FontSpec) -> f32 {
        self.measure.text_width(text, font.size, font.bold) * self.config.unit.per_point()
    }

    /// Make sure `height` fits on the current page, breaking if it does not.
    ///
    /// A fresh page is never broken, so a request taller than the usable
    /// height is placed on the page it starts on.
    pub fn reserve(&mut self, height: f32) {
        if !self.cursor.fits(height) && !self.cursor.at_top() {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        let next = self.page.number + 1;
        log::debug!(
            "page {} full at {:.1} with {:.1} left, starting page {}",
            self.page.number,
            self.cursor.used(),
            self.cursor.remaining(),
            next
        );
        let finished = std::mem::replace(&mut self.page, Self::blank_page(self.config, next));
        self.finish_page(finished);
        self.cursor = self.cursor.reset();
        self.stats.page_breaks += 1;
    }

    fn finish_page(&mut self, mut page: Page) {
        page.content_height = self.cursor.used();
        self.stats.page_count += 1;
        self.pages.push(page);
    }

    /// Insert vertical space unless at the top of a page.
    pub fn gap(&mut self, height: f32) {
        if !self.cursor.at_top() {
            self.cursor = self.cursor.skipped(height);
        }
    }

    fn push_run(&mut self, text: String, x: f32, font: FontSpec) {
        log::trace!("page {} y={:.1}: {}", self.page.number, self.cursor.y(), text);
        self.page.push_run(TextRun {
            text,
            x,
            y: self.cursor.y(),
            font_size: font.size,
            bold: font.bold,
        });
        self.stats.run_count += 1;
    }

    fn commit_line(&mut self, height: f32) {
        self.cursor = self.cursor.advanced(height);
        self.stats.line_count += 1;
    }

    /// Emit one unwrapped line at the left margin plus `indent`.
    pub fn line_with(&mut self, text: impl Into<String>, font: FontSpec, indent: f32) {
        self.reserve(font.line_height);
        let x = self.config.margin + indent;
        self.push_run(text.into(), x, font);
        self.commit_line(font.line_height);
    }

    /// Emit one unwrapped line in a role's font.
    pub fn line(&mut self, role: FontRole, text: impl Into<String>) {
        self.line_with(text, self.config.font(role), 0.0);
    }

    /// Emit text on the left with, optionally, text flush right on its first
    /// line.
    ///
    /// The left text wraps to the width left over by the right text and a
    /// two-space gap. If its first line still cannot sit beside the right
    /// text, the right text moves to a line of its own below.
    pub fn split_line(&mut self, left: &str, left_font: FontSpec, right: Option<(&str, FontSpec)>) {
        let right = right.map(|(text, font)| (text, font, self.width_of(text, font)));
        let available = match right {
            Some((_, _, width)) => {
                self.config.usable_width - width - self.width_of("  ", left_font)
            }
            None => self.config.usable_width,
        };
        let mut lines = wrap_text(left, available.max(0.0), |candidate| {
            self.width_of(candidate, left_font)
        })
        .into_iter();

        let Some((text, font, width)) = right else {
            for line in lines {
                self.line_with(line, left_font, 0.0);
            }
            return;
        };

        let first = lines.next();
        let beside = first
            .as_ref()
            .is_some_and(|line| self.width_of(line, left_font) <= available);
        let x = (self.config.margin + self.config.usable_width - width).max(self.config.margin);

        match first {
            Some(first) if beside => {
                let height = left_font.line_height.max(font.line_height);
                self.reserve(height);
                self.push_run(first, self.config.margin, left_font);
                self.push_run(text.to_string(), x, font);
                self.commit_line(height);
                for line in lines {
                    self.line_with(line, left_font, 0.0);
                }
            }
            Some(first) => {
                log::debug!("'{}' too wide to share a line with '{}'", first, text);
                for line in std::iter::once(first).chain(lines) {
                    self.line_with(line, left_font, 0.0);
                }
                self.line_with(text, font, x - self.config.margin);
            }
            None => self.line_with(text, font, x - self.config.margin),
        }
    }

    /// Word-wrap `text` in a role's font, one line per wrapped segment.
    ///
    /// With a `prefix`, each line starts with the prefix and the wrap width
    /// shrinks by the prefix so the full run stays inside the content area.
    pub fn wrapped(&mut self, role: FontRole, text: &str, indent: f32, prefix: Option<&str>) {
        let font = self.config.font(role);
        let prefix_width = prefix.map_or(0.0, |p| self.width_of(p, font));
        let max_width = self.config.usable_width - indent - prefix_width;

        let lines = wrap_text(text, max_width, |candidate| self.width_of(candidate, font));
        for line in lines {
            let text = match prefix {
                Some(p) => format!("{}{}", p, line),
                None => line,
            };
            self.line_with(text, font, indent);
        }
    }

    /// Emit a section heading preceded by the section gap.
    ///
    /// With `keep_heading_with_next`, the heading moves to a new page when
    /// it and one line in `next` would not both fit.
    pub fn heading(&mut self, text: &str, next: FontRole) {
        self.gap(self.config.section_gap);
        if self.config.keep_heading_with_next {
            let needed = self.config.heading.line_height + self.config.font(next).line_height;
            self.reserve(needed);
        }
        self.line(FontRole::Heading, text);
    }

    /// Finalize the last page and return all pages with statistics.
    pub fn finish(mut self) -> (Vec<Page>, LayoutStats) {
        let last = std::mem::replace(&mut self.page, Self::blank_page(self.config, 0));
        self.finish_page(last);
        (self.pages, self.stats)
    }
}
